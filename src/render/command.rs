use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cache::ArtifactKey;
use crate::config::RenderSettings;
use crate::panel::RenderDimensions;

/// Everything needed to produce one artifact with the external renderer.
///
/// The settings snapshot embedded here is the same document whose
/// fingerprint is part of `key` — the invariant that makes the cache
/// sound: any settings change that affects rendering also renames the
/// artifact.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    /// Audio file handed to the renderer's `-i`.
    pub source: PathBuf,
    /// Cache key this render was started for; completions are matched
    /// against it so superseded renders can be dropped.
    pub key: ArtifactKey,
    pub dims: RenderDimensions,
    pub settings: RenderSettings,
    /// Renderer binary (ffmpeg, possibly overridden via `path.txt`).
    pub renderer: PathBuf,
    /// Full path the artifact will appear at once the renderer exits.
    pub output: PathBuf,
}

impl RenderPlan {
    pub fn new(
        source: PathBuf,
        key: ArtifactKey,
        dims: RenderDimensions,
        settings: &RenderSettings,
        renderer: PathBuf,
        image_dir: &Path,
    ) -> Self {
        let output = image_dir.join(key.file_name());
        Self {
            source,
            key,
            dims,
            settings: settings.clone(),
            renderer,
            output,
        }
    }

    /// The `showspectrumpic` filter graph, token for token what the
    /// renderer is invoked with.
    pub fn filter(&self) -> String {
        let legend = if self.settings.show_legend {
            "enabled"
        } else {
            "disabled"
        };
        format!(
            "showspectrumpic=s={}x{}:{}:legend={}:saturation={}:color={}:scale={}:win_func={}:gain={}",
            self.dims.width,
            self.dims.height,
            self.settings.channel_mode.filter_token(),
            legend,
            self.settings.saturation,
            self.settings.color_scheme.token(),
            self.settings.scale.token(),
            self.settings.window_function.token(),
            self.settings.gain,
        )
    }

    /// Argument vector for spawning the renderer process.
    pub fn args(&self) -> Vec<OsString> {
        vec![
            OsString::from("-i"),
            self.source.clone().into_os_string(),
            OsString::from("-lavfi"),
            OsString::from(self.filter()),
            self.output.clone().into_os_string(),
        ]
    }

    /// Single loggable command line, with the output path quoted the way
    /// a shell invocation would need it.
    pub fn command_line(&self) -> String {
        format!(
            "-i {} -lavfi {} \"{}\"",
            self.source.display(),
            self.filter(),
            self.output.display()
        )
    }
}
