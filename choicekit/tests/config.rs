use choicekit::{ConfigError, LabelVisibility, OptionGroupConfig};

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_full_payload() {
    let config = OptionGroupConfig::from_json(
        r#"{
            "options": ["Apple", "Banana"],
            "captions": ["red", "yellow"],
            "initialValue": 1,
            "disabled": true,
            "horizontal": true,
            "label": "Fruit",
            "labelVisibility": "collapsed",
            "help": "Pick one",
            "width": 24
        }"#,
    )
    .unwrap();

    assert_eq!(config.options, ["Apple", "Banana"]);
    assert_eq!(config.captions, ["red", "yellow"]);
    assert_eq!(config.initial_value, Some(1));
    assert!(config.disabled);
    assert!(config.horizontal);
    assert_eq!(config.label.as_deref(), Some("Fruit"));
    assert_eq!(config.label_visibility, LabelVisibility::Collapsed);
    assert_eq!(config.help.as_deref(), Some("Pick one"));
    assert_eq!(config.width, Some(24));
}

#[test]
fn test_non_string_options_are_stringified() {
    let config = OptionGroupConfig::from_json(r#"{"options": [1, true, null, "x"]}"#).unwrap();

    assert_eq!(config.options, ["1", "true", "", "x"]);
}

#[test]
fn test_null_lists_are_empty() {
    let config = OptionGroupConfig::from_json(r#"{"options": null, "captions": null}"#).unwrap();

    assert!(config.options.is_empty());
    assert!(config.captions.is_empty());
}

#[test]
fn test_unusable_values_mean_none() {
    let config =
        OptionGroupConfig::from_json(r#"{"value": -1, "width": 0}"#).unwrap();
    assert_eq!(config.initial_value, None);
    assert_eq!(config.width, None);

    let config = OptionGroupConfig::from_json(r#"{"value": null, "width": "wide"}"#).unwrap();
    assert_eq!(config.initial_value, None);
    assert_eq!(config.width, None);

    let config =
        OptionGroupConfig::from_json(r#"{"options": ["a", "b"], "captions": "oops"}"#).unwrap();
    assert_eq!(config.options, vec!["a", "b"]);
    assert!(config.captions.is_empty());

    let config = OptionGroupConfig::from_json(r#"{"options": {"a": 1}, "captions": {}}"#).unwrap();
    assert!(config.options.is_empty());
    assert!(config.captions.is_empty());
}

#[test]
fn test_fractional_width_rounds() {
    let config = OptionGroupConfig::from_json(r#"{"width": 20.6}"#).unwrap();

    assert_eq!(config.width, Some(21));
}

#[test]
fn test_malformed_json_is_an_error() {
    let err = OptionGroupConfig::from_json("{options: ").unwrap_err();

    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid option group config"));
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_matches_payload() {
    let built = OptionGroupConfig::new(["Apple", "Banana"])
        .initial_value(Some(0))
        .label("Fruit")
        .horizontal(true);
    let parsed = OptionGroupConfig::from_json(
        r#"{"options": ["Apple", "Banana"], "value": 0, "label": "Fruit", "horizontal": true}"#,
    )
    .unwrap();

    assert_eq!(built, parsed);
}
