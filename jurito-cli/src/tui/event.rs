//! Input handling shared by both screens

use std::time::Duration;

use crossterm::event::{self, Event};

/// Input mode for a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate fields, invoke actions
    #[default]
    Normal,
    /// Focused text input on the selected field
    Edit,
}

/// What a key press asked the run loop to do
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the screen
    Quit,
    /// Issue the screen's backend request
    Submit,
    /// Copy the result text to the clipboard
    Copy,
}

/// Poll for events with timeout
pub fn poll(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
