use super::schema::*;
use crate::error::PanelError;

#[test]
fn defaults_match_the_renderer_defaults() {
    let s = RenderSettings::default();
    assert_eq!(s.color_scheme, ColorScheme::Intensity);
    assert_eq!(s.saturation, 1.0);
    assert_eq!(s.gain, 1.0);
    assert_eq!(s.window_function, WindowFunction::Hann);
    assert_eq!(s.channel_mode, ChannelMode::Combined);
    assert_eq!(s.scale, Scale::Log);
    assert!(s.show_legend);
    assert!(!s.enable_debugging);
    assert!(!s.clear_images);
}

#[test]
fn empty_document_deserializes_to_defaults() {
    let s: RenderSettings = toml::from_str("").unwrap();
    assert!(s.validate().is_ok());
    assert_eq!(s.scale, Scale::Log);
}

#[test]
fn settings_load_from_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
color_scheme = "fiery"
saturation = 2.5
gain = 1.5
window_function = "blackman"
channel_mode = "separate"
scale = "4thrt"
show_legend = false
enable_debugging = true
clear_images = true
"#,
    )
    .unwrap();

    let (s, fp) = RenderSettings::load(&path).unwrap();
    assert_eq!(s.color_scheme, ColorScheme::Fiery);
    assert_eq!(s.saturation, 2.5);
    assert_eq!(s.gain, 1.5);
    assert_eq!(s.window_function, WindowFunction::Blackman);
    assert_eq!(s.channel_mode, ChannelMode::Separate);
    assert_eq!(s.scale, Scale::FourthRoot);
    assert!(!s.show_legend);
    assert!(s.enable_debugging);
    assert!(s.clear_images);
    assert!(!fp.as_str().is_empty());
}

#[test]
fn hanning_is_accepted_as_an_alias_for_hann() {
    let s: RenderSettings = toml::from_str(r#"window_function = "hanning""#).unwrap();
    assert_eq!(s.window_function, WindowFunction::Hann);
}

#[test]
fn fingerprint_tracks_document_bytes_not_meaning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "show_legend = true\n").unwrap();
    let (_, fp1) = RenderSettings::load(&path).unwrap();

    // Semantically identical, byte-different: still a different fingerprint.
    std::fs::write(&path, "show_legend  =  true\n").unwrap();
    let (_, fp2) = RenderSettings::load(&path).unwrap();
    assert_ne!(fp1, fp2);

    std::fs::write(&path, "show_legend = true\n").unwrap();
    let (_, fp3) = RenderSettings::load(&path).unwrap();
    assert_eq!(fp1, fp3);
}

#[test]
fn malformed_document_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "color_scheme = \"no-such-scheme\"").unwrap();

    let err = RenderSettings::load(&path).unwrap_err();
    assert!(matches!(err, PanelError::ConfigParse(_)));
}

#[test]
fn missing_document_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RenderSettings::load(&dir.path().join("config.toml")).unwrap_err();
    assert!(matches!(err, PanelError::Io { .. }));
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = RenderSettings::default();
    s.saturation = 11.0;
    assert!(s.validate().is_err());

    let mut s = RenderSettings::default();
    s.gain = 0.0;
    assert!(s.validate().is_err());

    assert!(RenderSettings::default().validate().is_ok());
}
