// SPDX-License-Identifier: MPL-2.0
use iced_qr::app::config::{self, Config};
use iced_qr::i18n::fluent::I18n;
use iced_qr::qr::{export, Artifact, ErrorCorrection, ExportFormat, FormState, SizePixels};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    // Load i18n with french config
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_generate_and_export_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let form = FormState {
        text: "https://codeberg.org/Bawycle/iced_qr".to_string(),
        size: SizePixels::new(128),
        error_correction: ErrorCorrection::Medium,
        ..FormState::default()
    };
    let artifact = Artifact::generate(&form).expect("Failed to generate artifact");

    // PNG export produces a decodable raster of the requested size
    let png_path = dir.path().join("qrcode.png");
    export::save(&artifact, ExportFormat::Png, &png_path).expect("Failed to save PNG");
    let png_bytes = std::fs::read(&png_path).expect("Failed to read PNG back");
    assert_eq!(&png_bytes[..8], b"\x89PNG\r\n\x1a\n");

    // SVG export is a plain text document carrying the requested dimensions
    let svg_path = dir.path().join("qrcode.svg");
    export::save(&artifact, ExportFormat::Svg, &svg_path).expect("Failed to save SVG");
    let svg_text = std::fs::read_to_string(&svg_path).expect("Failed to read SVG back");
    assert!(svg_text.starts_with("<?xml"), "got {}", &svg_text[..30.min(svg_text.len())]);
    assert!(svg_text.contains("width=\"128\""));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_persisted_defaults_feed_the_generator_form() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_file_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.generator.symbol_size = Some(512);
    config.generator.error_correction = Some(ErrorCorrection::High);
    config::save_to_path(&config, &config_file_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_file_path).expect("Failed to load config");
    let form = FormState {
        size: SizePixels::new(loaded.generator.symbol_size.unwrap_or_default()),
        error_correction: loaded.generator.error_correction.unwrap_or_default(),
        ..FormState::default()
    };

    assert_eq!(form.size.value(), 512);
    assert_eq!(form.error_correction, ErrorCorrection::High);

    dir.close().expect("Failed to close temporary directory");
}
