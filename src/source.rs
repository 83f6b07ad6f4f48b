//! Kernel source loading.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Kernel source text loaded from disk.
///
/// Loaded once per bootstrap and owned by the session that compiled it;
/// edits to the underlying file are only observed on the next refresh.
#[derive(Debug, Clone)]
pub struct KernelSource {
    path: PathBuf,
    text: String,
}

impl KernelSource {
    /// Read kernel source from `path`.
    ///
    /// Fails with [`Error::SourceNotFound`] when the path does not
    /// reference a regular file, and with [`Error::Io`] when the file
    /// cannot be read.
    pub fn load<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::SourceNotFound(path));
        }
        let text = fs::read_to_string(&path)?;
        Ok(Self { path, text })
    }

    /// The source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte length of the source text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the source text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Path the source was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
