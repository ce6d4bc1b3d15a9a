use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use mna_core::models::record::AssessmentRecord;

use crate::error::ExportError;

/// What happened to a record handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Stored(PathBuf),
    /// The operator dismissed the save interaction. Not an error.
    Cancelled,
}

/// Somewhere a submitted assessment can be written.
pub trait RecordSink {
    /// Short identifier for logs (e.g. "dialog", "directory").
    fn name(&self) -> &str;

    /// Take ownership of `record` and store it.
    fn save(&self, record: AssessmentRecord) -> Result<SaveOutcome, ExportError>;
}

/// Hand `record` to `sink` and log the outcome.
pub fn persist(
    sink: &dyn RecordSink,
    record: AssessmentRecord,
) -> Result<SaveOutcome, ExportError> {
    let id = record.id();
    match sink.save(record) {
        Ok(SaveOutcome::Stored(path)) => {
            tracing::info!(sink = sink.name(), %id, path = %path.display(), "assessment saved");
            Ok(SaveOutcome::Stored(path))
        }
        Ok(SaveOutcome::Cancelled) => {
            tracing::info!(sink = sink.name(), %id, "save cancelled by operator");
            Ok(SaveOutcome::Cancelled)
        }
        Err(e) => {
            tracing::error!(sink = sink.name(), %id, error = %e, "failed to save assessment");
            Err(e)
        }
    }
}

/// Write to a temp file next to `path`, then rename over it. The temp file
/// is removed if the rename fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, bytes)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "document written");
    Ok(())
}

/// Create `path` and write `bytes` into it, failing with
/// [`std::io::ErrorKind::AlreadyExists`] if the file is already there.
/// A partially written file is removed.
pub(crate) fn write_new(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    if let Err(e) = file.write_all(bytes).and_then(|()| file.sync_all()) {
        drop(file);
        let _ = std::fs::remove_file(path);
        return Err(e);
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "document written");
    Ok(())
}
