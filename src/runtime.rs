//! UI-affinity runtime: the engine that consumes host events, plus the
//! seek-overlay ticker.
//!
//! All panel-facing state lives in [`Engine`] and is mutated from exactly
//! one thread; the ticker and the render workers only feed events into a
//! channel drained by that thread.

mod engine;
mod settings;
mod tick;

pub use engine::{Capabilities, Engine, EngineAction, PaintSource, SeekOverlay, TrackChange};
pub use tick::{TICK_INTERVAL, spawn_seek_ticker};

use crate::render::RenderOutcome;

/// External events, consumed one at a time by the engine.
#[derive(Debug)]
pub enum PanelEvent {
    /// The host reports a new playing track.
    TrackChanged(TrackChange),
    /// The settings dialog saved the document.
    SettingsSaved,
    /// A background render finished.
    RenderFinished(RenderOutcome),
    /// Periodic seek tick carrying the observed playback position.
    Tick { position_ms: f64 },
}
