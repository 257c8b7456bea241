/// Registry of all available validation rules
use crate::config::ConfigError;
use crate::rules::{
    NoDeprecatedFieldsRuleImpl, OperationsMustHaveNamesRuleImpl, RequiredFieldsRuleImpl,
    TypeNamesShouldBeCapitalizedRuleImpl,
};
use crate::traits::ValidationRule;
use std::sync::{Arc, LazyLock};

/// Lazily initialized validation rules with default options.
/// Rules are created once and reused across all calls.
static VALIDATION_RULES: LazyLock<Vec<Arc<dyn ValidationRule>>> = LazyLock::new(|| {
    vec![
        Arc::new(OperationsMustHaveNamesRuleImpl),
        Arc::new(RequiredFieldsRuleImpl::default()),
        Arc::new(TypeNamesShouldBeCapitalizedRuleImpl),
        Arc::new(NoDeprecatedFieldsRuleImpl),
    ]
});

/// Every registered rule, in dispatch order
#[must_use]
pub fn validation_rules() -> &'static [Arc<dyn ValidationRule>] {
    &VALIDATION_RULES
}

#[must_use]
pub fn all_rule_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = validation_rules().iter().map(|rule| rule.name()).collect();
    names.sort_unstable();
    names
}

/// Apply configured options to a registered rule.
///
/// Rules without options are shared as-is.
pub(crate) fn configure_rule(
    rule: &Arc<dyn ValidationRule>,
    options: Option<&serde_json::Value>,
) -> Result<Arc<dyn ValidationRule>, ConfigError> {
    match rule.name() {
        RequiredFieldsRuleImpl::NAME => Ok(Arc::new(RequiredFieldsRuleImpl::from_options(
            options,
        )?)),
        _ => Ok(Arc::clone(rule)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rule_names() {
        assert_eq!(
            all_rule_names(),
            vec![
                "no_deprecated_fields",
                "operations_must_have_names",
                "required_fields",
                "type_names_should_be_capitalized",
            ]
        );
    }

    #[test]
    fn test_rules_have_descriptions() {
        for rule in validation_rules() {
            assert!(!rule.description().is_empty(), "{} has no description", rule.name());
        }
    }

    #[test]
    fn test_configure_required_fields() {
        let registered = validation_rules()
            .iter()
            .find(|rule| rule.name() == RequiredFieldsRuleImpl::NAME)
            .unwrap();

        assert!(matches!(
            configure_rule(registered, None),
            Err(ConfigError::MissingOptions { .. })
        ));

        let options = serde_json::json!({ "requiredFields": ["id"] });
        let configured = configure_rule(registered, Some(&options)).unwrap();
        assert_eq!(configured.name(), "required_fields");
    }

    #[test]
    fn test_configure_shares_option_free_rules() {
        let registered = &validation_rules()[0];
        let configured = configure_rule(registered, None).unwrap();
        assert!(Arc::ptr_eq(registered, &configured));
    }
}
