//! Terminal UI for the two jurito screens.
//!
//! Shared plumbing lives in `terminal` (raw mode + alternate screen) and
//! `event` (mode enum, polling, key-handling results); each screen owns its
//! state, key handling, and rendering.

pub mod event;
pub mod petition;
pub mod summary;
pub mod terminal;
