//! Contract upload-and-summarize view state.
//!
//! State machine: `Idle(no file) → Idle(file selected) → Submitting →
//! Result | Idle(error message)`. The only way back to the initial state is
//! an explicit [`UploadView::reset`].

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::backend::Backend;
use crate::messages;

/// View state for the upload-and-summarize screen.
///
/// Owns its state exclusively; nothing is shared with the wizard screen.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UploadView {
    selected_file: Option<PathBuf>,
    submitting: bool,
    result_text: String,
}

impl UploadView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected contract unconditionally.
    ///
    /// No type or size validation happens here; the file picker's PDF filter
    /// is a hint, not a gate.
    pub fn select_file(&mut self, path: PathBuf) {
        self.selected_file = Some(path);
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Result text, or the empty string when nothing has been produced yet
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn has_result(&self) -> bool {
        !self.result_text.is_empty()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.submitting
    }

    /// Upload the selected contract and store the returned summary.
    ///
    /// With no file selected this fails fast with a fixed message and never
    /// touches the network. Re-entrant calls while a request is in flight are
    /// ignored; disabling the submit control is a courtesy, this guard is the
    /// correctness mechanism. Every completion path clears the submitting
    /// flag and leaves the view interactive.
    pub async fn submit(&mut self, backend: &dyn Backend) {
        if self.submitting {
            return;
        }
        let Some(file) = self.selected_file.clone() else {
            self.result_text = messages::NO_FILE_SELECTED.to_string();
            return;
        };

        self.submitting = true;
        match backend.summarize_contract(&file).await {
            Ok(reply) => {
                self.result_text = reply
                    .summary
                    .unwrap_or_else(|| messages::SUMMARY_UNAVAILABLE.to_string());
            }
            Err(err) => {
                warn!(error = %err, file = %file.display(), "contract summarization failed");
                self.result_text = messages::SUMMARY_SERVER_ERROR.to_string();
            }
        }
        self.submitting = false;
    }

    /// Clear the result and the selected file, back to the initial prompt
    pub fn reset(&mut self) {
        self.selected_file = None;
        self.result_text.clear();
    }
}
