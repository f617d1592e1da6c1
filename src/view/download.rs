use crate::api::assets::structs::ExportFormat;
use crate::handler::error::ApiError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory that receives exported report files.
#[derive(Debug, Clone)]
pub struct DownloadDir {
    dir: PathBuf,
}

impl DownloadDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Explicit directory if given, else the user's download directory, else `.`.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let dir = explicit
            .map(Path::to_path_buf)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn target_for(&self, format: ExportFormat) -> PathBuf {
        self.dir.join(format.file_name())
    }

    /// Writes `bytes` as `assets_report.<format>`, replacing an earlier export.
    ///
    /// The bytes are staged in a temporary file next to the target and renamed
    /// into place. The staging file is deleted on every error path.
    pub fn save(&self, format: ExportFormat, bytes: &[u8]) -> Result<PathBuf, ApiError> {
        fs::create_dir_all(&self.dir)?;
        let target = self.target_for(format);
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        log::debug!("Staging {} bytes at {:?}", bytes.len(), staged.path());
        staged.write_all(bytes)?;
        staged.flush()?;
        staged.persist(&target).map_err(|e| ApiError::IoError(e.error))?;
        log::info!("Saved export to {:?}", target);
        Ok(target)
    }
}
