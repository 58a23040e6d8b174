//! Working-directory layout.
//!
//! Everything the plugin persists or probes lives under the host's
//! persistent-storage directory: the settings document, a couple of
//! marker files, the placeholder image and the rendered-image cache.

use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the rendered spectrogram images.
pub const IMAGE_DIR: &str = "Spectrogram_Images";

const SETTINGS_FILE: &str = "config.toml";
const RENDERER_OVERRIDE: &str = "path.txt";
const SEEKBAR_FLAG: &str = "seekbar.txt";
const NO_HEADER_FLAG: &str = "noheader.txt";
const PLACEHOLDER: &str = "placeholder.png";
const LOG_FILE: &str = "spectropanel.log";

/// The plugin's working directory and its fixed file layout.
#[derive(Debug, Clone)]
pub struct WorkDir {
    root: PathBuf,
}

impl WorkDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The settings document fed both to the parser and to the
    /// configuration fingerprint.
    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    pub fn image_dir(&self) -> PathBuf {
        self.root.join(IMAGE_DIR)
    }

    pub fn log_file(&self) -> PathBuf {
        self.root.join(LOG_FILE)
    }

    /// Fallback image painted for sources without a known duration.
    pub fn placeholder(&self) -> PathBuf {
        self.root.join(PLACEHOLDER)
    }

    /// The seek overlay is opt-in through a marker file.
    pub fn seekbar_enabled(&self) -> bool {
        self.root.join(SEEKBAR_FLAG).exists()
    }

    /// The panel header can be suppressed with a marker file.
    pub fn header_enabled(&self) -> bool {
        !self.root.join(NO_HEADER_FLAG).exists()
    }

    /// Renderer binary: the `path.txt` override when present and
    /// non-empty, else `ffmpeg` inside the working directory.
    pub fn renderer_path(&self) -> PathBuf {
        let override_file = self.root.join(RENDERER_OVERRIDE);
        match fs::read_to_string(&override_file) {
            Ok(contents) if !contents.trim().is_empty() => {
                PathBuf::from(contents.trim())
            }
            _ => self.root.join("ffmpeg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn layout_is_rooted_in_the_working_directory() {
        let wd = WorkDir::new("/tmp/deps");
        assert_eq!(wd.settings_file(), PathBuf::from("/tmp/deps/config.toml"));
        assert_eq!(
            wd.image_dir(),
            PathBuf::from("/tmp/deps/Spectrogram_Images")
        );
        assert_eq!(wd.placeholder(), PathBuf::from("/tmp/deps/placeholder.png"));
    }

    #[test]
    fn seekbar_and_header_follow_marker_files() {
        let dir = tempdir().unwrap();
        let wd = WorkDir::new(dir.path());

        assert!(!wd.seekbar_enabled());
        assert!(wd.header_enabled());

        fs::write(dir.path().join("seekbar.txt"), b"").unwrap();
        fs::write(dir.path().join("noheader.txt"), b"").unwrap();

        assert!(wd.seekbar_enabled());
        assert!(!wd.header_enabled());
    }

    #[test]
    fn renderer_path_prefers_the_override_file() {
        let dir = tempdir().unwrap();
        let wd = WorkDir::new(dir.path());

        assert_eq!(wd.renderer_path(), dir.path().join("ffmpeg"));

        fs::write(dir.path().join("path.txt"), "/opt/ffmpeg/bin/ffmpeg\n").unwrap();
        assert_eq!(
            wd.renderer_path(),
            PathBuf::from("/opt/ffmpeg/bin/ffmpeg")
        );
    }

    #[test]
    fn empty_override_file_falls_back_to_the_bundled_renderer() {
        let dir = tempdir().unwrap();
        let wd = WorkDir::new(dir.path());
        fs::write(dir.path().join("path.txt"), "   \n").unwrap();
        assert_eq!(wd.renderer_path(), dir.path().join("ffmpeg"));
    }
}
