//! Option group configuration as supplied by the host.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ConfigError;

/// How the widget label is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelVisibility {
    /// Label row is drawn.
    #[default]
    Visible,
    /// Label row keeps its space but draws nothing.
    Hidden,
    /// No label row at all.
    Collapsed,
}

/// Everything the host tells an option group.
///
/// Deserializes permissively: non-string options are stringified, `null`
/// entries become empty strings and non-array lists count as absent.
/// Negative or non-numeric indices mean "no selection"; unusable widths are
/// ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionGroupConfig {
    #[serde(deserialize_with = "lenient_strings")]
    pub options: Vec<String>,
    /// Per-option captions; either empty or parallel to `options`.
    #[serde(deserialize_with = "lenient_strings")]
    pub captions: Vec<String>,
    #[serde(alias = "value", deserialize_with = "lenient_index")]
    pub initial_value: Option<usize>,
    pub disabled: bool,
    pub horizontal: bool,
    pub label: Option<String>,
    pub label_visibility: LabelVisibility,
    pub help: Option<String>,
    /// Fixed widget width in cells.
    #[serde(deserialize_with = "lenient_width")]
    pub width: Option<u16>,
}

impl OptionGroupConfig {
    pub fn new(options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Parse a host JSON payload.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!(
            "parsed option group config: {} options, {} captions",
            config.options.len(),
            config.captions.len()
        );
        Ok(config)
    }

    pub fn captions(mut self, captions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.captions = captions.into_iter().map(Into::into).collect();
        self
    }

    pub fn initial_value(mut self, value: Option<usize>) -> Self {
        self.initial_value = value;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_visibility(mut self, visibility: LabelVisibility) -> Self {
        self.label_visibility = visibility;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Caption for option `index`; missing entries are empty.
    pub fn caption(&self, index: usize) -> &str {
        self.captions.get(index).map(String::as_str).unwrap_or("")
    }

    /// Whether any option carries a non-empty caption.
    pub fn has_captions(&self) -> bool {
        self.captions.iter().any(|c| !c.is_empty())
    }
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    // Anything but an array means the list is absent.
    match Value::deserialize(deserializer)? {
        Value::Array(values) => Ok(values.into_iter().map(value_to_string).collect()),
        _ => Ok(Vec::new()),
    }
}

fn lenient_index<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| usize::try_from(n).ok()))
}

fn lenient_width<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|w| w.is_finite() && *w >= 1.0)
        .map(|w| w.min(u16::MAX as f64).round() as u16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = OptionGroupConfig::from_json("{}").unwrap();
        assert_eq!(config, OptionGroupConfig::default());
        assert_eq!(config.label_visibility, LabelVisibility::Visible);
    }

    #[test]
    fn value_alias_is_accepted() {
        let config = OptionGroupConfig::from_json(r#"{"options": ["a", "b"], "value": 1}"#).unwrap();
        assert_eq!(config.initial_value, Some(1));
    }

    #[test]
    fn caption_lookup_tolerates_short_lists() {
        let config = OptionGroupConfig::new(["a", "b", "c"]).captions(["x"]);
        assert_eq!(config.caption(0), "x");
        assert_eq!(config.caption(2), "");
    }

    #[test]
    fn has_captions_ignores_blank_entries() {
        assert!(!OptionGroupConfig::new(["a"]).captions([""]).has_captions());
        assert!(OptionGroupConfig::new(["a", "b"]).captions(["", "y"]).has_captions());
    }
}
