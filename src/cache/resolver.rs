use std::path::{Path, PathBuf};

use crate::error::PanelError;
use crate::fingerprint::{Fingerprint, fingerprint_file};
use crate::panel::RenderDimensions;

use super::key::ArtifactKey;
use super::store::ArtifactStore;

/// Lifecycle of the current track's artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveState {
    /// No track loaded yet.
    Idle,
    /// A track-change request is being fingerprinted and looked up.
    Resolving,
    /// A render for this key is in flight.
    Rendering(ArtifactKey),
    /// An artifact path is published for display.
    Ready(PathBuf),
    /// The last cycle failed; the next track-change starts fresh.
    Failed,
    /// Deliberate non-cache state for sources without a known duration.
    NoArtifact,
}

/// What the engine must do after a track-change resolution.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    /// An existing artifact was reused; nothing to render.
    Hit(PathBuf),
    /// No usable artifact; a render for this key must be triggered.
    Miss(ArtifactKey),
    /// Stream or unknown-length source; publish nothing, render nothing.
    Stream,
    /// The track could not be fingerprinted; skip this cycle.
    Unavailable,
}

/// Decides, per track-change, whether a cached artifact can be reused or
/// a fresh render is needed, and guards against superseded renders
/// publishing late.
#[derive(Debug)]
pub struct Resolver {
    state: ResolveState,
    /// Key of the most recent resolution. Render completions carrying any
    /// other key are stale and dropped, so only the latest requested
    /// key's result is ever published.
    latest: Option<ArtifactKey>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            state: ResolveState::Idle,
            latest: None,
        }
    }

    pub fn state(&self) -> &ResolveState {
        &self.state
    }

    /// Path currently published for display, if any.
    pub fn published_path(&self) -> Option<&Path> {
        match &self.state {
            ResolveState::Ready(path) => Some(path),
            _ => None,
        }
    }

    /// Run one track-change cycle.
    ///
    /// `config` is the settings-document fingerprint when one could be
    /// computed. Without it the key falls back to a fixed stand-in and
    /// lookups are treated as misses, so a possibly-incompatible artifact
    /// is never silently reused.
    pub fn resolve(
        &mut self,
        store: &ArtifactStore,
        file: &Path,
        duration_ms: i64,
        dims: RenderDimensions,
        config: Option<&Fingerprint>,
    ) -> Resolution {
        if duration_ms <= 0 {
            log::debug!("source has no duration; skipping spectrogram");
            self.state = ResolveState::NoArtifact;
            self.latest = None;
            return Resolution::Stream;
        }

        self.state = ResolveState::Resolving;

        let track = match fingerprint_file(file) {
            Ok(fp) => fp,
            Err(e) => {
                log::debug!("cannot fingerprint {}: {e}", file.display());
                self.state = ResolveState::Failed;
                self.latest = None;
                return Resolution::Unavailable;
            }
        };

        let trusted = config.is_some();
        let config = config.cloned().unwrap_or_else(Fingerprint::unavailable);
        let key = ArtifactKey::synthesize(&track, dims, &config);
        self.latest = Some(key.clone());

        if trusted && store.contains(&key) {
            let path = store.path_for(&key);
            log::debug!("artifact found: {}", path.display());
            self.state = ResolveState::Ready(path.clone());
            Resolution::Hit(path)
        } else {
            log::debug!("no artifact for {key}; render needed");
            self.state = ResolveState::Rendering(key.clone());
            Resolution::Miss(key)
        }
    }

    /// Apply a render completion.
    ///
    /// Returns `false` when the completion was stale (started for a key
    /// that is no longer the latest requested one) and was discarded
    /// without touching the published path.
    pub fn complete(
        &mut self,
        store: &ArtifactStore,
        key: &ArtifactKey,
        result: Result<(), PanelError>,
    ) -> bool {
        if self.latest.as_ref() != Some(key) {
            log::debug!("discarding superseded render for {key}");
            return false;
        }

        match result {
            Ok(()) => {
                let path = store.path_for(key);
                log::debug!("artifact rendered: {}", path.display());
                self.state = ResolveState::Ready(path);
            }
            Err(e) => {
                log::debug!("render failed: {e}");
                self.state = ResolveState::Failed;
            }
        }
        true
    }
}
