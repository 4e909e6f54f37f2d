use super::DataStore;
use crate::codec::{self, Decoded};
use crate::error::{GradebookError, Result};
use crate::records::RecordStore;
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "grades".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(GradebookError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Decoded>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet");
                return Ok(None);
            }
            Err(e) => return Err(GradebookError::Io(e)),
        };

        // Invalid UTF-8 only damages the fields it sits in
        let text = String::from_utf8_lossy(&bytes);
        if matches!(text, Cow::Owned(_)) {
            tracing::warn!(path = %self.path.display(), "data file is not valid UTF-8, replacing bad bytes");
        }

        let decoded = codec::decode_report(&text);
        tracing::debug!(
            path = %self.path.display(),
            students = decoded.records.len(),
            warnings = decoded.warnings.len(),
            "loaded data file"
        );
        Ok(Some(decoded))
    }

    fn save(&mut self, records: &RecordStore) -> Result<()> {
        self.ensure_parent()?;

        // Write then rename so an interrupted save leaves the old file intact
        let tmp = self.tmp_path();
        fs::write(&tmp, codec::encode(records)).map_err(GradebookError::Io)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(GradebookError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), students = records.len(), "saved data file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
