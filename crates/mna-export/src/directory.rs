use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mna_core::file_names;
use mna_core::models::record::AssessmentRecord;

use crate::document;
use crate::error::ExportError;
use crate::sink::{RecordSink, SaveOutcome, write_new};

/// Writes each record into a fixed directory under its suggested name.
///
/// Files are created exclusively, so an existing file is never replaced even
/// if it appears while saving. A clash gets a ` (n)` suffix the way browsers
/// number repeated downloads.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The user's download directory, falling back to home, then the
    /// working directory.
    pub fn in_downloads() -> Self {
        let dir = dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn candidates<'a>(&'a self, file_name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        std::iter::once(self.dir.join(file_name)).chain(
            (1..=u32::MAX).map(move |n| self.dir.join(file_names::numbered(file_name, n))),
        )
    }
}

impl RecordSink for DirectorySink {
    fn name(&self) -> &str {
        "directory"
    }

    fn save(&self, record: AssessmentRecord) -> Result<SaveOutcome, ExportError> {
        let bytes = document::encode(&record)?;
        std::fs::create_dir_all(&self.dir)?;
        let file_name = document::suggested_file_name(&record);
        for path in self.candidates(&file_name) {
            match write_new(&path, &bytes) {
                Ok(()) => return Ok(SaveOutcome::Stored(path)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free file name for {file_name} in {}", self.dir.display()),
        )
        .into())
    }
}
