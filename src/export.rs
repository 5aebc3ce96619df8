//! JSON file output shared by notebooks, curricula and progress ledgers
//!
//! Every export goes through [`write_json`]: parent directories are created,
//! the value is pretty-printed with 2-space indentation, written to a sibling
//! temp file and renamed into place.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Error type for reading and writing JSON exports
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ExportError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write `value` as pretty JSON to `path` and return the absolute path written.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }

    let content = serde_json::to_string_pretty(value)?;

    let temp_path = temp_path_for(path);
    {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| ExportError::io(&temp_path, e))?;

        let written = temp_file
            .write_all(content.as_bytes())
            .and_then(|()| temp_file.sync_all());
        if let Err(e) = written {
            drop(temp_file);
            let _ = std::fs::remove_file(&temp_path);
            return Err(ExportError::io(&temp_path, e));
        }
    }

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(ExportError::io(path, e));
    }

    let absolute = std::path::absolute(path).map_err(|e| ExportError::io(path, e))?;
    tracing::debug!(path = %absolute.display(), bytes = content.len(), "wrote JSON export");
    Ok(absolute)
}

/// Read a JSON document previously written by [`write_json`].
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ExportError> {
    let content = std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| ExportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
