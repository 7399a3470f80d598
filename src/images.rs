// Image selection: directory listing and the base64 payload handed to
// the API client.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;

use crate::error::{Error, Result};

/// Upper bound on the bytes read into memory for one image. The annotate
/// endpoint rejects larger payloads anyway, so refuse them before the
/// upload instead of after.
pub const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

/// Base64-encoded file content, ready to embed in an annotate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub content: String,
}

impl ImagePayload {
    /// Read a file whole and encode it. The format is not sniffed; the
    /// service reports unsupported content itself.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_file_bounded(path, MAX_IMAGE_BYTES)
    }

    fn from_file_bounded(path: &Path, max_bytes: u64) -> Result<Self> {
        let meta = fs::metadata(path).map_err(|e| Error::Selection {
            message: format!("cannot stat {}: {}", path.display(), e),
        })?;
        if meta.len() > max_bytes {
            return Err(Error::Selection {
                message: format!(
                    "{} is {} bytes, above the {} byte upload limit",
                    path.display(),
                    meta.len(),
                    max_bytes
                ),
            });
        }
        let bytes = fs::read(path).map_err(|e| Error::Selection {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(ImagePayload {
            content: STANDARD.encode(bytes),
        })
    }
}

/// List the regular files in `dir`, sorted by name so menu numbering is
/// stable across runs. Subdirectories are skipped.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::Selection {
        message: format!("cannot list {}: {}", dir.display(), e),
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::Selection {
            message: format!("cannot list {}: {}", dir.display(), e),
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    if files.is_empty() {
        return Err(Error::Selection {
            message: format!("no files found in {}", dir.display()),
        });
    }
    debug!("{} image candidates in {}", files.len(), dir.display());
    Ok(files)
}
