use crate::config::RenderSettings;
use crate::fingerprint::Fingerprint;
use crate::workdir::WorkDir;

/// Load the settings document, falling back to defaults.
///
/// A `None` fingerprint marks the document as unavailable or invalid; the
/// resolver then refuses cache hits (conservative re-render) until a
/// valid document is seen, so a possibly-incompatible artifact is never
/// reused.
pub(super) fn load_settings(workdir: &WorkDir) -> (RenderSettings, Option<Fingerprint>) {
    match RenderSettings::load(&workdir.settings_file()) {
        Ok((settings, fingerprint)) => {
            if let Err(msg) = settings.validate() {
                log::debug!("invalid settings, using defaults: {msg}");
                (RenderSettings::default(), None)
            } else {
                (settings, Some(fingerprint))
            }
        }
        Err(e) => {
            log::debug!("settings unavailable, using defaults: {e}");
            (RenderSettings::default(), None)
        }
    }
}
