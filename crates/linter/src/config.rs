use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Name of the only built-in preset
pub const RECOMMENDED_PRESET: &str = "recommended";

/// Severity level for a lint rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum LintSeverity {
    Off,
    Warn,
    Error,
}

/// Errors raised while turning a [`LintConfig`] into a rule set
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid preset name: '{0}' (valid presets: recommended)")]
    UnknownPreset(String),

    #[error(
        "invalid lint rule name(s): {}; valid rule names are: {}",
        .invalid.join(", "),
        .valid.join(", ")
    )]
    UnknownRules {
        invalid: Vec<String>,
        valid: Vec<&'static str>,
    },

    #[error("rule '{rule}' requires options")]
    MissingOptions { rule: &'static str },

    #[error("invalid options for rule '{rule}': {source}")]
    InvalidOptions {
        rule: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration for a single lint rule
///
/// Supports multiple formats:
/// ```json
/// // Simple severity
/// { "rule_name": "warn" }
///
/// // Object style with options
/// { "rule_name": { "severity": "warn", "options": { "requiredFields": ["id"] } } }
///
/// // ESLint-style array: [severity, options]
/// { "rule_name": ["warn", { "requiredFields": ["id"] }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LintRuleConfig {
    /// `"warn"`
    Severity(LintSeverity),

    /// `["warn", {..}]` or `{ "severity": "warn", "options": {..} }`
    Detailed {
        severity: LintSeverity,
        #[serde(skip_serializing_if = "Option::is_none")]
        options: Option<serde_json::Value>,
    },
}

impl LintRuleConfig {
    #[must_use]
    pub fn severity(&self) -> LintSeverity {
        match self {
            Self::Severity(s) | Self::Detailed { severity: s, .. } => *s,
        }
    }

    /// Rule options, when the entry carries any
    #[must_use]
    pub fn options(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Severity(_) => None,
            Self::Detailed { options, .. } => options.as_ref(),
        }
    }
}

/// Accepts a bare severity, an ESLint-style `[severity, options]` array or
/// a `{ severity, options }` object.
impl<'de> Deserialize<'de> for LintRuleConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, IntoDeserializer, MapAccess, SeqAccess, Visitor};

        struct RuleEntryVisitor;

        impl<'de> Visitor<'de> for RuleEntryVisitor {
            type Value = LintRuleConfig;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("\"off\", \"warn\", \"error\", [severity, options] or { severity, options }")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                LintSeverity::deserialize(value.into_deserializer()).map(LintRuleConfig::Severity)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let Some(severity) = seq.next_element::<LintSeverity>()? else {
                    return Err(de::Error::invalid_length(0, &self));
                };
                Ok(LintRuleConfig::Detailed {
                    severity,
                    options: seq.next_element()?,
                })
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                #[derive(Deserialize)]
                #[serde(deny_unknown_fields)]
                struct Entry {
                    severity: LintSeverity,
                    #[serde(default)]
                    options: Option<serde_json::Value>,
                }

                let Entry { severity, options } =
                    Entry::deserialize(de::value::MapAccessDeserializer::new(map))?;
                Ok(LintRuleConfig::Detailed { severity, options })
            }
        }

        deserializer.deserialize_any(RuleEntryVisitor)
    }
}

/// Presets named by `extends`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum ExtendsConfig {
    /// Single preset: `"recommended"`
    Single(String),
    /// Multiple presets: `["recommended"]`
    Multiple(Vec<String>),
}

impl ExtendsConfig {
    #[must_use]
    pub fn presets(&self) -> Vec<&str> {
        match self {
            Self::Single(s) => vec![s.as_str()],
            Self::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self
            .presets()
            .into_iter()
            .find(|preset| *preset != RECOMMENDED_PRESET)
        {
            Some(preset) => Err(ConfigError::UnknownPreset(preset.to_string())),
            None => Ok(()),
        }
    }
}

/// `{ extends, rules }` form of [`LintConfig`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FullLintConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<ExtendsConfig>,

    /// Per-rule entries, overriding the presets
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub rules: HashMap<String, LintRuleConfig>,
}

/// Overall lint configuration
///
/// Supports multiple formats:
///
/// ```json
/// "recommended"
///
/// ["recommended"]
///
/// { "rules": { "operations_must_have_names": "error" } }
///
/// {
///   "extends": "recommended",
///   "rules": {
///     "no_deprecated_fields": "off",
///     "required_fields": ["error", { "requiredFields": ["id"] }]
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum LintConfig {
    /// Preset(s): `"recommended"` or `["recommended"]`
    Preset(ExtendsConfig),

    /// Full configuration with optional extends and rules
    Full(FullLintConfig),
}

impl Default for LintConfig {
    fn default() -> Self {
        Self::Full(FullLintConfig {
            extends: None,
            rules: HashMap::new(),
        })
    }
}

impl LintConfig {
    /// Validate the lint configuration against available rules
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] for a preset other than
    /// `recommended` and [`ConfigError::UnknownRules`] listing every rule
    /// name that is not registered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rules = match self {
            Self::Preset(presets) => return presets.validate(),
            Self::Full(FullLintConfig { extends, rules }) => {
                if let Some(ext) = extends {
                    ext.validate()?;
                }
                rules
            }
        };

        let valid = crate::registry::all_rule_names();
        let mut invalid: Vec<String> = rules
            .keys()
            .filter(|rule| !valid.contains(&rule.as_str()))
            .cloned()
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            invalid.sort_unstable();
            Err(ConfigError::UnknownRules { invalid, valid })
        }
    }

    /// Get the severity for a rule, considering presets and overrides
    #[must_use]
    pub fn get_severity(&self, rule_name: &str) -> Option<LintSeverity> {
        match self {
            Self::Preset(presets) => Self::severity_from_presets(presets, rule_name),
            Self::Full(FullLintConfig { extends, rules }) => {
                let preset_severity = extends
                    .as_ref()
                    .and_then(|ext| Self::severity_from_presets(ext, rule_name));

                rules
                    .get(rule_name)
                    .map(LintRuleConfig::severity)
                    .or(preset_severity)
            }
        }
    }

    /// Options given to `rule_name` in `rules`; presets never carry options.
    #[must_use]
    pub fn get_options(&self, rule_name: &str) -> Option<&serde_json::Value> {
        match self {
            Self::Preset(_) => None,
            Self::Full(FullLintConfig { rules, .. }) => {
                rules.get(rule_name).and_then(LintRuleConfig::options)
            }
        }
    }

    /// Later presets win.
    fn severity_from_presets(presets: &ExtendsConfig, rule_name: &str) -> Option<LintSeverity> {
        let mut severity = None;
        for preset in presets.presets() {
            if preset == RECOMMENDED_PRESET {
                if let Some(s) = Self::recommended_severity(rule_name) {
                    severity = Some(s);
                }
            }
        }
        severity
    }

    /// `required_fields` is absent because it is useless without options.
    fn recommended_severity(rule_name: &str) -> Option<LintSeverity> {
        match rule_name {
            "operations_must_have_names" => Some(LintSeverity::Error),
            "type_names_should_be_capitalized" | "no_deprecated_fields" => {
                Some(LintSeverity::Warn)
            }
            _ => None,
        }
    }

    /// `"recommended"`
    #[must_use]
    pub fn recommended() -> Self {
        Self::Preset(ExtendsConfig::Single(RECOMMENDED_PRESET.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LintConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_simple_preset() {
        let config = parse(r#""recommended""#);
        assert!(matches!(
            config,
            LintConfig::Preset(ExtendsConfig::Single(ref s)) if s == "recommended"
        ));
        assert_eq!(
            config.get_severity("operations_must_have_names"),
            Some(LintSeverity::Error)
        );
        assert_eq!(
            config.get_severity("no_deprecated_fields"),
            Some(LintSeverity::Warn)
        );
        assert_eq!(config.get_severity("required_fields"), None);
    }

    #[test]
    fn test_preset_list() {
        let config = parse(r#"["recommended"]"#);
        assert!(matches!(
            config,
            LintConfig::Preset(ExtendsConfig::Multiple(_))
        ));
        assert_eq!(
            config.get_severity("type_names_should_be_capitalized"),
            Some(LintSeverity::Warn)
        );
    }

    #[test]
    fn test_rules_only() {
        let config = parse(
            r#"{ "rules": { "operations_must_have_names": "error", "no_deprecated_fields": "warn" } }"#,
        );
        assert_eq!(
            config.get_severity("operations_must_have_names"),
            Some(LintSeverity::Error)
        );
        assert_eq!(
            config.get_severity("no_deprecated_fields"),
            Some(LintSeverity::Warn)
        );
        assert_eq!(config.get_severity("type_names_should_be_capitalized"), None);
    }

    #[test]
    fn test_extends_with_override() {
        let config = parse(
            r#"{
                "extends": "recommended",
                "rules": {
                    "operations_must_have_names": "warn",
                    "no_deprecated_fields": "off"
                }
            }"#,
        );
        assert_eq!(
            config.get_severity("operations_must_have_names"),
            Some(LintSeverity::Warn)
        );
        assert_eq!(
            config.get_severity("no_deprecated_fields"),
            Some(LintSeverity::Off)
        );
        assert_eq!(
            config.get_severity("type_names_should_be_capitalized"),
            Some(LintSeverity::Warn)
        );
    }

    #[test]
    fn test_validate_presets() {
        assert!(LintConfig::recommended().validate().is_ok());

        let config = LintConfig::Preset(ExtendsConfig::Single("strict".to_string()));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownPreset(ref name)) if name == "strict"
        ));

        let config = parse(r#"{ "extends": ["recommended", "strict"] }"#);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_rule() {
        let config = parse(r#"{ "rules": { "not_a_rule": "error", "also_not": "warn" } }"#);
        let err = config.validate().unwrap_err();
        let ConfigError::UnknownRules { ref invalid, .. } = err else {
            panic!("expected unknown rules, got {err:?}");
        };
        assert_eq!(invalid, &vec!["also_not".to_string(), "not_a_rule".to_string()]);
        assert!(err.to_string().contains("required_fields"));
    }

    #[test]
    fn test_default_no_rules_enabled() {
        let config = LintConfig::default();
        assert_eq!(config.get_severity("operations_must_have_names"), None);
        assert_eq!(config.get_severity("no_deprecated_fields"), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_eslint_array_style() {
        let config = parse(
            r#"{ "rules": { "required_fields": ["warn", { "requiredFields": ["id", "uuid"] }] } }"#,
        );
        assert_eq!(
            config.get_severity("required_fields"),
            Some(LintSeverity::Warn)
        );

        let options = config.get_options("required_fields").unwrap();
        let fields = options.get("requiredFields").unwrap().as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].as_str().unwrap(), "id");
        assert_eq!(fields[1].as_str().unwrap(), "uuid");
    }

    #[test]
    fn test_eslint_array_style_severity_only() {
        let config = parse(r#"{ "rules": { "required_fields": ["error"] } }"#);
        assert_eq!(
            config.get_severity("required_fields"),
            Some(LintSeverity::Error)
        );
        assert!(config.get_options("required_fields").is_none());
    }

    #[test]
    fn test_object_style_with_options() {
        let config = parse(
            r#"{
                "rules": {
                    "required_fields": {
                        "severity": "warn",
                        "options": { "requiredFields": ["id"] }
                    }
                }
            }"#,
        );
        assert_eq!(
            config.get_severity("required_fields"),
            Some(LintSeverity::Warn)
        );
        assert!(config.get_options("required_fields").is_some());
    }

    #[test]
    fn test_get_options_returns_none_for_preset() {
        let config = LintConfig::recommended();
        assert!(config.get_options("required_fields").is_none());
    }

    #[test]
    fn test_unknown_severity_is_rejected() {
        let result: Result<LintConfig, _> =
            serde_json::from_str(r#"{ "rules": { "required_fields": "loud" } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_off_override_drops_rule_from_validator() {
        let config = parse(
            r#"{ "extends": "recommended", "rules": { "no_deprecated_fields": "off" } }"#,
        );
        assert_eq!(
            config.get_severity("no_deprecated_fields"),
            Some(LintSeverity::Off)
        );

        let names = crate::Validator::from_config(&config).unwrap().rule_names();
        assert!(!names.contains(&"no_deprecated_fields"));
        assert!(!names.contains(&"required_fields"));
        assert!(names.contains(&"operations_must_have_names"));
        assert!(names.contains(&"type_names_should_be_capitalized"));
    }

    #[test]
    fn test_rule_entry_rejects_unknown_keys() {
        let result: Result<LintConfig, _> = serde_json::from_str(
            r#"{ "rules": { "required_fields": { "severity": "warn", "level": 2 } } }"#,
        );
        assert!(result.is_err());
    }
}
