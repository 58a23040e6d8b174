//! Panel-facing geometry: render dimensions, seek mapping and per-track
//! view state.

mod layout;
mod seek;
mod state;

pub use layout::{PanelGeometry, RenderDimensions, resolve_dimensions};
pub use seek::{format_clock, overlay_width, pointer_to_time};
pub use state::PanelState;

#[cfg(test)]
mod tests;
