//! Derives the rendered image's dimensions from the panel geometry.
//!
//! The external renderer works best with a power-of-two image height and
//! a round image width, so the panel size is snapped rather than used
//! verbatim. The resulting numbers are embedded in the artifact cache
//! key: a resized panel names (and renders) a different artifact.

/// Pixel size of the host panel as reported per track-change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PanelGeometry {
    pub width: u32,
    pub height: u32,
}

/// Target geometry for one rendered spectrogram.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderDimensions {
    /// Image width, panel width rounded to the nearest multiple of ten.
    pub width: u32,
    /// Image height, panel height rounded to the nearest power of two.
    pub height: u32,
    /// Horizontal margin the renderer reserves on each side for the
    /// frequency legend.
    pub legend_gutter: u32,
}

/// Smallest power of two `>= n`. An input that is already a power of two
/// maps to itself, no extra doubling.
fn ceil_pow2(n: u32) -> u32 {
    let mut a = n;
    let mut pow = 1u32;
    while a > 1 {
        a >>= 1;
        pow <<= 1;
    }
    if pow != n {
        pow <<= 1;
    }
    pow
}

/// Nearest power of two; ties go to the larger value.
fn round_pow2(n: u32) -> u32 {
    let next = ceil_pow2(n);
    let prev = next >> 1;
    if next - n <= n - prev { next } else { prev }
}

/// Nearest multiple of ten, half rounds up.
fn round_to_ten(n: u32) -> u32 {
    ((n as f64 / 10.0).round() as u32) * 10
}

/// Resolve the render dimensions for a panel of the given pixel size.
///
/// The gutter formula `141 * width / (width + 282)`, truncated, encodes
/// the renderer's fixed proportion between image width and legend margin;
/// it is reproduced verbatim so gutter math matches the images the
/// renderer actually produces.
pub fn resolve_dimensions(panel_width: u32, panel_height: u32) -> RenderDimensions {
    let width = round_to_ten(panel_width);
    let height = round_pow2(panel_height);
    let legend_gutter = (141.0 * width as f64 / (width as f64 + 282.0)) as u32;
    RenderDimensions {
        width,
        height,
        legend_gutter,
    }
}
