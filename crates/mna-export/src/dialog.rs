use std::path::PathBuf;

use mna_core::file_names;
use mna_core::models::record::AssessmentRecord;

use crate::document;
use crate::error::ExportError;
use crate::select::native_dialog_available;
use crate::sink::{RecordSink, SaveOutcome, write_atomic};

/// Asks the operator where to save through the platform's native save
/// dialog. Blocks until the dialog closes.
///
/// Without a display the dialog cannot open at all; that is reported as
/// [`ExportError::DialogUnavailable`] so only a real dismissal counts as
/// [`SaveOutcome::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct DialogSink {
    initial_dir: Option<PathBuf>,
}

impl DialogSink {
    pub fn new(initial_dir: Option<PathBuf>) -> Self {
        Self { initial_dir }
    }
}

impl RecordSink for DialogSink {
    fn name(&self) -> &str {
        "dialog"
    }

    fn save(&self, record: AssessmentRecord) -> Result<SaveOutcome, ExportError> {
        if !native_dialog_available() {
            return Err(ExportError::DialogUnavailable);
        }
        let bytes = document::encode(&record)?;

        let mut dialog = rfd::FileDialog::new()
            .set_title("Save assessment")
            .set_file_name(document::suggested_file_name(&record))
            .add_filter("JSON File", &[file_names::EXTENSION]);
        if let Some(dir) = &self.initial_dir {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return Ok(SaveOutcome::Cancelled);
        };

        write_atomic(&path, &bytes)?;
        Ok(SaveOutcome::Stored(path))
    }
}
