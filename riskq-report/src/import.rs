use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use riskq_core::errors::ExportError;

/// A file the user picked for import: its name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImportedFile {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ExportError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        debug!(name = %name, size = bytes.len(), "file imported");
        Ok(Self { name, bytes })
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Content as UTF-8 text.
    pub fn text(&self) -> Result<&str, ExportError> {
        std::str::from_utf8(&self.bytes).map_err(|e| ExportError::Parse {
            name: self.name.clone(),
            message: e.to_string(),
        })
    }

    pub fn parse_json<T: DeserializeOwned>(&self) -> Result<T, ExportError> {
        serde_json::from_slice(&self.bytes).map_err(|e| ExportError::Parse {
            name: self.name.clone(),
            message: e.to_string(),
        })
    }

    /// blake3 hex digest of the content.
    pub fn checksum(&self) -> String {
        blake3::hash(&self.bytes).to_hex().to_string()
    }
}
