//! Config files as the binary reads them.

use crate::common::ConfigFixture;
use onboard_config::{ConfigError, OnboardConfig, SkipBehavior};
use onboard_types::DeckError;

#[test]
fn missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = OnboardConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn empty_file_uses_builtin_deck() {
    let config = ConfigFixture::new("").load();
    assert_eq!(config.skip_behavior(), SkipBehavior::LastPage);
    assert_eq!(config.deck().unwrap().len(), 3);
    assert!(!config.ui_options().ascii_only);
}

#[test]
fn custom_pages_replace_builtin() {
    let config = ConfigFixture::new(
        r#"
[flow]
skip = "finish"

[[pages]]
image = "onboard2"
title = "Welcome"
description = "First things first."

[[pages]]
image = "rocket"
title = "Launch"
description = "Off you go."
"#,
    )
    .load();

    let deck = config.deck().unwrap();
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.get(1).unwrap().title, "Launch");
    assert_eq!(deck.get(1).unwrap().image.as_str(), "rocket");
    assert_eq!(config.skip_behavior(), SkipBehavior::Finish);
}

#[test]
fn empty_pages_array_reports_path() {
    let fixture = ConfigFixture::new("pages = []\n");
    let err = OnboardConfig::load_from(&fixture.path).unwrap_err();
    assert_eq!(err.path(), fixture.path.as_path());
    assert!(matches!(
        err,
        ConfigError::Deck {
            source: DeckError::Empty,
            ..
        }
    ));
}

#[test]
fn unknown_keys_are_rejected() {
    let fixture = ConfigFixture::new("[theme]\nname = \"dark\"\n");
    let err = OnboardConfig::load_from(&fixture.path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn blank_image_is_a_parse_error() {
    let fixture = ConfigFixture::new(
        r#"
[[pages]]
image = "  "
title = "Nothing"
description = ""
"#,
    );
    let err = OnboardConfig::load_from(&fixture.path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
