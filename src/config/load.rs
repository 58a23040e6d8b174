use std::fs;
use std::path::Path;

use crate::error::{PanelError, PanelResult};
use crate::fingerprint::{Fingerprint, fingerprint_bytes};

use super::schema::RenderSettings;

impl RenderSettings {
    /// Load the settings document at `path`.
    ///
    /// The document is read once; the returned fingerprint digests the
    /// exact bytes that were parsed, so the settings driving renderer
    /// invocations and the fingerprint embedded in cache keys can never
    /// disagree.
    pub fn load(path: &Path) -> PanelResult<(Self, Fingerprint)> {
        let bytes = fs::read(path).map_err(|e| PanelError::io(path, e))?;
        let fingerprint = fingerprint_bytes(&bytes);
        let text = String::from_utf8_lossy(&bytes);
        let settings: RenderSettings = toml::from_str(&text)?;
        Ok((settings, fingerprint))
    }
}
