use std::path::PathBuf;

use crate::cache::{ArtifactStore, Resolution, Resolver};
use crate::config::RenderSettings;
use crate::error::PanelResult;
use crate::fingerprint::Fingerprint;
use crate::logging;
use crate::panel::{self, PanelGeometry, PanelState, resolve_dimensions};
use crate::render::{RenderOutcome, RenderPlan};
use crate::workdir::WorkDir;

use super::PanelEvent;
use super::settings::load_settings;

/// Per-cycle track-change request record, as reported by the host.
#[derive(Debug, Clone)]
pub struct TrackChange {
    /// Path of the file that started playing.
    pub file: PathBuf,
    /// Host-reported duration; `<= 0` marks a stream or unknown-length
    /// source, which is never fingerprinted or rendered.
    pub duration_ms: i64,
    /// Panel size at the time of the change.
    pub panel: PanelGeometry,
}

/// What the plugin reports back to the host at initialization.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub name: &'static str,
    pub description: &'static str,
    /// Requested panel height; 0 lets the host resize the panel freely.
    pub panel_height: i32,
    /// Whether the host should draw the panel header.
    pub show_header: bool,
}

/// What the display layer should paint right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintSource {
    /// A resolved spectrogram image.
    Artifact(PathBuf),
    /// The fallback image for sources without a spectrogram.
    Placeholder(PathBuf),
    /// Nothing to paint.
    Blank,
}

/// One frame of the seek bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekOverlay {
    /// Left edge of the bar, in panel pixels.
    pub origin_x: u32,
    /// Fill width for the observed position.
    pub width_px: u32,
    /// The position moved backwards (seek or loop); repaint the whole
    /// panel instead of drawing incrementally over the old bar.
    pub full_repaint: bool,
}

/// Follow-up work the host loop must carry out after an event.
#[derive(Debug)]
pub enum EngineAction {
    /// Hand this plan to [`crate::render::spawn_render`].
    StartRender(RenderPlan),
    /// Draw (or fully repaint under) the seek bar.
    DrawOverlay(SeekOverlay),
}

/// The UI-affinity owner of all panel state.
///
/// One engine instance per panel; every method must be called from the
/// same thread. Background work (renders, ticks) communicates with the
/// engine exclusively through [`PanelEvent`] values.
pub struct Engine {
    workdir: WorkDir,
    settings: RenderSettings,
    config_fingerprint: Option<Fingerprint>,
    store: ArtifactStore,
    resolver: Resolver,
    state: PanelState,
}

impl Engine {
    /// Initialize the plugin core: install the log sink, load settings,
    /// optionally wipe the image cache, and make sure the store exists.
    pub fn new(workdir: WorkDir) -> PanelResult<Self> {
        let (settings, config_fingerprint) = load_settings(&workdir);
        logging::init(&workdir.log_file(), settings.enable_debugging);

        let store = ArtifactStore::new(workdir.image_dir());
        if settings.clear_images {
            match store.purge() {
                Ok(()) => log::debug!("spectrogram images deleted"),
                Err(e) => log::debug!("image purge failed: {e}"),
            }
        }
        store.ensure_dir()?;
        log::debug!("{} cached images present", store.len());

        Ok(Self {
            workdir,
            settings,
            config_fingerprint,
            store,
            resolver: Resolver::new(),
            state: PanelState::default(),
        })
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            name: "Spectrogram Panel",
            description: "Displays the spectrogram of the song being played.",
            panel_height: 0,
            show_header: self.workdir.header_enabled(),
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn panel_state(&self) -> &PanelState {
        &self.state
    }

    /// Consume one event from the external queue.
    pub fn handle(&mut self, event: PanelEvent) -> Option<EngineAction> {
        match event {
            PanelEvent::TrackChanged(change) => {
                self.on_track_changed(change).map(EngineAction::StartRender)
            }
            PanelEvent::SettingsSaved => {
                self.on_settings_saved();
                None
            }
            PanelEvent::RenderFinished(outcome) => {
                self.on_render_finished(outcome);
                None
            }
            PanelEvent::Tick { position_ms } => {
                self.on_tick(position_ms).map(EngineAction::DrawOverlay)
            }
        }
    }

    /// Run one track-change cycle: refresh panel state, resolve the
    /// cache, and return the render plan to start when there was no
    /// reusable artifact.
    pub fn on_track_changed(&mut self, change: TrackChange) -> Option<RenderPlan> {
        log::debug!("track changed: {}", change.file.display());

        let dims = resolve_dimensions(change.panel.width, change.panel.height);

        self.state.duration_ms = change.duration_ms;
        self.state.panel_width = change.panel.width;
        self.state.last_observed_pos_ms = 0.0;
        self.state.legend_enabled = self.settings.show_legend;
        self.state.legend_gutter = dims.legend_gutter;
        self.state.seekbar_enabled = self.workdir.seekbar_enabled();

        match self.resolver.resolve(
            &self.store,
            &change.file,
            change.duration_ms,
            dims,
            self.config_fingerprint.as_ref(),
        ) {
            Resolution::Miss(key) => Some(RenderPlan::new(
                change.file,
                key,
                dims,
                &self.settings,
                self.workdir.renderer_path(),
                self.store.dir(),
            )),
            Resolution::Hit(_) | Resolution::Stream | Resolution::Unavailable => None,
        }
    }

    /// Apply a render completion; superseded outcomes are discarded by
    /// the resolver and never touch the published path.
    pub fn on_render_finished(&mut self, outcome: RenderOutcome) {
        self.resolver
            .complete(&self.store, &outcome.key, outcome.result);
    }

    /// Settings-saved reload protocol: re-read the document and refresh
    /// the fingerprint and debug filtering. The new settings take effect
    /// on the next track change — the currently displayed artifact is
    /// deliberately left alone.
    pub fn on_settings_saved(&mut self) {
        let (settings, fingerprint) = load_settings(&self.workdir);
        self.settings = settings;
        self.config_fingerprint = fingerprint;
        logging::set_enabled(self.settings.enable_debugging);
        log::debug!("settings reloaded");
    }

    /// Advance the seek overlay for an observed playback position.
    pub fn on_tick(&mut self, position_ms: f64) -> Option<SeekOverlay> {
        if !self.state.seekbar_enabled || self.state.duration_ms <= 0 {
            return None;
        }

        let full_repaint = position_ms < self.state.last_observed_pos_ms;
        self.state.last_observed_pos_ms = position_ms;

        let margin = self.state.seek_margin();
        let width_px = panel::overlay_width(
            position_ms,
            self.state.duration_ms as f64,
            self.state.panel_width as f64,
            margin as f64,
        ) as u32;

        Some(SeekOverlay {
            origin_x: margin,
            width_px,
            full_repaint,
        })
    }

    /// Map a pointer click to a seek position in milliseconds.
    pub fn pointer_seek(&self, pointer_x: f64) -> Option<i64> {
        if self.state.duration_ms <= 0 {
            return None;
        }
        let time = panel::pointer_to_time(
            pointer_x,
            self.state.panel_width as f64,
            self.state.duration_ms as f64,
            self.state.legend_enabled,
            self.state.legend_gutter as f64,
        );
        Some(time.round() as i64)
    }

    /// Hover label for the pointer position (`MM:SS` into the track).
    pub fn hover_label(&self, pointer_x: f64) -> Option<String> {
        if self.state.duration_ms <= 0 {
            return None;
        }
        let time = panel::pointer_to_time(
            pointer_x,
            self.state.panel_width as f64,
            self.state.duration_ms as f64,
            self.state.legend_enabled,
            self.state.legend_gutter as f64,
        );
        Some(panel::format_clock(time))
    }

    /// The consolidated paint decision for the display layer.
    pub fn paint_source(&self) -> PaintSource {
        if let Some(path) = self.resolver.published_path() {
            if path.is_file() {
                return PaintSource::Artifact(path.to_path_buf());
            }
        }
        if self.state.duration_ms <= 0 {
            let placeholder = self.workdir.placeholder();
            if placeholder.is_file() {
                return PaintSource::Placeholder(placeholder);
            }
        }
        PaintSource::Blank
    }
}
