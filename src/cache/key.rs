use std::fmt;

use crate::fingerprint::Fingerprint;
use crate::panel::RenderDimensions;

/// Canonical cache identifier for one rendered spectrogram.
///
/// The key concatenates, in fixed order: track fingerprint, image height,
/// image width, settings fingerprint. The same (track, geometry,
/// settings) triple always synthesizes the same key, and a difference in
/// any component yields a different key — so a stale image can never be
/// reused across a settings change. The key doubles as the artifact's
/// filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactKey(String);

impl ArtifactKey {
    pub fn synthesize(
        track: &Fingerprint,
        dims: RenderDimensions,
        config: &Fingerprint,
    ) -> Self {
        Self(format!("{track}{}{}{config}", dims.height, dims.width))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// On-disk name of the artifact this key addresses.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.0)
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
