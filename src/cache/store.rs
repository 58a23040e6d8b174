use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{PanelError, PanelResult};

use super::key::ArtifactKey;

/// Durable directory of rendered spectrogram images keyed by
/// [`ArtifactKey`].
///
/// Entries are written by the external renderer and only checked here
/// after it has exited, so an existing file is always a complete image.
/// The directory may be shared by several player instances; keys embed
/// content, geometry and settings, so distinct tracks never collide and
/// a concurrent re-render of the same key writes identical bytes.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the store directory if it does not exist yet.
    pub fn ensure_dir(&self) -> PanelResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| PanelError::io(&self.dir, e))
    }

    /// Full path the artifact for `key` lives at (whether or not it
    /// exists yet).
    pub fn path_for(&self, key: &ArtifactKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    pub fn contains(&self, key: &ArtifactKey) -> bool {
        self.path_for(key).is_file()
    }

    /// Number of rendered entries currently on disk.
    pub fn len(&self) -> usize {
        WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
            })
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delete every rendered image (the `clear_images` startup option).
    pub fn purge(&self) -> PanelResult<()> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir).map_err(|e| PanelError::io(&self.dir, e))?;
        }
        Ok(())
    }
}
