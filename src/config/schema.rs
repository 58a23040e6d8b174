use serde::Deserialize;

/// Rendering settings loaded from the working directory's `config.toml`.
///
/// Every field that affects the rendered image also flows, via the
/// document's content fingerprint, into the artifact cache key — which is
/// what keeps cached images from surviving a settings change.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Color scheme passed to the renderer's `color` option.
    pub color_scheme: ColorScheme,
    /// Color saturation factor, `-10.0..=10.0`.
    pub saturation: f64,
    /// Amplification applied before color mapping, `> 0`.
    pub gain: f64,
    /// Analysis window function.
    pub window_function: WindowFunction,
    /// Combined or per-channel rendering.
    pub channel_mode: ChannelMode,
    /// Frequency-axis scale.
    pub scale: Scale,
    /// Whether the renderer draws axes and a legend around the image.
    pub show_legend: bool,
    /// Whether the plugin writes its debug log.
    pub enable_debugging: bool,
    /// Whether cached images are wiped when the plugin loads.
    pub clear_images: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Intensity,
            saturation: 1.0,
            gain: 1.0,
            window_function: WindowFunction::Hann,
            channel_mode: ChannelMode::Combined,
            scale: Scale::Log,
            show_legend: true,
            enable_debugging: false,
            clear_images: false,
        }
    }
}

impl RenderSettings {
    /// Perform basic range checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !(-10.0..=10.0).contains(&self.saturation) {
            return Err("saturation must be within -10.0..=10.0".to_string());
        }
        if self.gain <= 0.0 {
            return Err("gain must be > 0".to_string());
        }
        Ok(())
    }
}

/// Color schemes understood by the renderer's `color` option.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    Channel,
    Intensity,
    Rainbow,
    Moreland,
    Nebulae,
    Fire,
    Fiery,
    Fruit,
    Cool,
    Magma,
    Green,
    Viridis,
    Plasma,
    Cividis,
    Terrain,
}

impl ColorScheme {
    /// The renderer's command-line token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Intensity => "intensity",
            Self::Rainbow => "rainbow",
            Self::Moreland => "moreland",
            Self::Nebulae => "nebulae",
            Self::Fire => "fire",
            Self::Fiery => "fiery",
            Self::Fruit => "fruit",
            Self::Cool => "cool",
            Self::Magma => "magma",
            Self::Green => "green",
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Cividis => "cividis",
            Self::Terrain => "terrain",
        }
    }
}

/// Analysis window functions understood by the renderer's `win_func` option.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowFunction {
    Rect,
    Bartlett,
    #[serde(alias = "hanning")]
    Hann,
    Hamming,
    Blackman,
    Welch,
    Flattop,
    Sine,
    Nuttall,
    Lanczos,
    Gauss,
}

impl WindowFunction {
    pub fn token(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Bartlett => "bartlett",
            Self::Hann => "hann",
            Self::Hamming => "hamming",
            Self::Blackman => "blackman",
            Self::Welch => "welch",
            Self::Flattop => "flattop",
            Self::Sine => "sine",
            Self::Nuttall => "nuttall",
            Self::Lanczos => "lanczos",
            Self::Gauss => "gauss",
        }
    }
}

/// Combined spectrum or one strip per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelMode {
    Combined,
    Separate,
}

impl ChannelMode {
    /// The full `mode=...` token spliced into the filter graph.
    pub fn filter_token(self) -> &'static str {
        match self {
            Self::Combined => "mode=combined",
            Self::Separate => "mode=separate",
        }
    }
}

/// Frequency-axis scale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scale {
    Lin,
    Sqrt,
    Cbrt,
    Log,
    #[serde(rename = "4thrt")]
    FourthRoot,
    #[serde(rename = "5thrt")]
    FifthRoot,
}

impl Scale {
    pub fn token(self) -> &'static str {
        match self {
            Self::Lin => "lin",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Log => "log",
            Self::FourthRoot => "4thrt",
            Self::FifthRoot => "5thrt",
        }
    }
}
