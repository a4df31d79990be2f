use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::KdumpCheckError;

/// An upload written to a temporary file for the lifetime of one request.
///
/// The file is removed when the value is dropped, whichever way the request ends.
#[derive(Debug)]
pub struct StagedUpload {
    file: NamedTempFile,
    len: usize,
}

impl StagedUpload {
    pub fn stage(dir: &Path, upload_id: &str, bytes: &[u8]) -> Result<Self, KdumpCheckError> {
        std::fs::create_dir_all(dir)?;

        let mut file = tempfile::Builder::new()
            .prefix(&format!("upload-{}-", upload_id))
            .suffix(".xml")
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;

        debug!(upload_id, path = %file.path().display(), bytes = bytes.len(), "Upload staged");

        Ok(Self { file, len: bytes.len() })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the staged bytes back from disk.
    pub fn read(&self) -> Result<Vec<u8>, KdumpCheckError> {
        Ok(std::fs::read(self.file.path())?)
    }
}
