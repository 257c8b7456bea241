use crate::config::ConfigError;
use crate::diagnostics::LintSeverity;
use crate::node::{Node, NodeKind};
use crate::selection::{is_field_available, was_field_requested};
use crate::traits::{LintRule, ValidationRule};
use crate::visitor::RuleVisitor;
use graphql_apollo_ext::{field_name, fragment_definition_name, type_condition_name};
use serde::Deserialize;

/// Options for the `required_fields` rule
///
/// Example configuration:
/// ```json
/// {
///   "rules": {
///     "required_fields": ["error", { "requiredFields": ["id", "uuid"] }]
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RequiredFieldsOptions {
    /// Field names to require wherever the selected type has them.
    /// Violations are reported in this order.
    pub required_fields: Vec<String>,
}

impl RequiredFieldsOptions {
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse options from a JSON value
    ///
    /// # Errors
    ///
    /// Fails when `requiredFields` is missing, is not a list of strings, or
    /// the object has other keys.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

/// Reports selections that omit a required field the selected type offers
///
/// Each fragment definition and each field is checked against its own
/// selection set only; a field selected at one level does not satisfy the
/// requirement at another.
#[derive(Debug, Clone, Default)]
pub struct RequiredFieldsRuleImpl {
    options: RequiredFieldsOptions,
}

impl RequiredFieldsRuleImpl {
    pub const NAME: &'static str = "required_fields";

    #[must_use]
    pub const fn new(options: RequiredFieldsOptions) -> Self {
        Self { options }
    }

    /// Build the rule from configured options
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingOptions`] without options and
    /// [`ConfigError::InvalidOptions`] when they do not parse.
    pub fn from_options(options: Option<&serde_json::Value>) -> Result<Self, ConfigError> {
        let value = options.ok_or(ConfigError::MissingOptions { rule: Self::NAME })?;
        let options = RequiredFieldsOptions::from_json(value).map_err(|source| {
            ConfigError::InvalidOptions {
                rule: Self::NAME,
                source,
            }
        })?;
        Ok(Self::new(options))
    }

    #[must_use]
    pub fn options(&self) -> &RequiredFieldsOptions {
        &self.options
    }
}

impl LintRule for RequiredFieldsRuleImpl {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Requires configured fields to be selected wherever the type has them"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl ValidationRule for RequiredFieldsRuleImpl {
    fn visitor(&self) -> RuleVisitor<'_> {
        let required = &self.options.required_fields;

        RuleVisitor::new()
            .on(NodeKind::FragmentDefinition, move |ctx, node| {
                let Node::FragmentDefinition(fragment) = node else {
                    return;
                };
                let ty = ctx.types().current_type();
                let selection_set = fragment.selection_set();

                for field in required {
                    if is_field_available(ty, field)
                        && !was_field_requested(selection_set.as_ref(), field)
                    {
                        let name = fragment_definition_name(fragment).unwrap_or_default();
                        let on = type_condition_name(fragment.type_condition()).unwrap_or_default();
                        ctx.report(
                            format!("'{field}' field required on 'fragment {name} on {on}'"),
                            node,
                        );
                    }
                }
            })
            .on(NodeKind::Field, move |ctx, node| {
                let Node::Field(selected) = node else {
                    return;
                };
                if ctx.types().current_field_def().is_none() {
                    return;
                }
                let ty = ctx.types().current_type();
                let selection_set = selected.selection_set();

                for field in required {
                    if is_field_available(ty, field)
                        && !was_field_requested(selection_set.as_ref(), field)
                    {
                        let name = field_name(selected).unwrap_or_default();
                        ctx.report(format!("'{field}' field required on '{name}'"), node);
                    }
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validator;
    use graphql_test_utils::{format_diagnostic_messages, test_schema};
    use serde_json::json;

    fn check_with(fields: &[&str], source: &str) -> String {
        let schema = test_schema();
        let rule = RequiredFieldsRuleImpl::new(RequiredFieldsOptions::new(fields.iter().copied()));
        let errors = Validator::new().with_rule(rule).validate_source(&schema, source);
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        format_diagnostic_messages(&messages)
    }

    fn check(source: &str) -> String {
        check_with(&["id"], source)
    }

    #[test]
    fn test_fragment_missing_required_field() {
        insta::assert_snapshot!(
            check("fragment F on User { name }"),
            @"[1] 'id' field required on 'fragment F on User'"
        );
    }

    #[test]
    fn test_field_missing_required_field() {
        insta::assert_snapshot!(
            check("query Q { user(id: 1) { name } }"),
            @"[1] 'id' field required on 'user'"
        );
    }

    #[test]
    fn test_list_and_non_null_wrappers_are_unwrapped() {
        insta::assert_snapshot!(
            check("query Q { users { friends { name } } }"),
            @r"
        [1] 'id' field required on 'users'
        [2] 'id' field required on 'friends'
        "
        );
    }

    #[test]
    fn test_requirement_is_scoped_per_selection_set() {
        insta::assert_snapshot!(
            check("query Q { user(id: 1) { id posts { title comments { id body } } } }"),
            @"[1] 'id' field required on 'posts'"
        );
    }

    #[test]
    fn test_types_without_the_field_are_skipped() {
        insta::assert_snapshot!(
            check("query Q { stats { count } user(id: 1) { id name } }"),
            @"(no diagnostics)"
        );
    }

    #[test]
    fn test_inline_fragment_one_level_counts() {
        insta::assert_snapshot!(
            check("query Q { node(id: 1) { ... on User { id } } }"),
            @"(no diagnostics)"
        );
    }

    #[test]
    fn test_nested_inline_fragment_does_not_count() {
        insta::assert_snapshot!(
            check("query Q { node(id: 1) { ... on Node { ... on User { id } } } }"),
            @"[1] 'id' field required on 'node'"
        );
    }

    #[test]
    fn test_fragment_spread_does_not_count() {
        insta::assert_snapshot!(
            check("query Q { user(id: 1) { ...UserId } } fragment UserId on User { id }"),
            @"[1] 'id' field required on 'user'"
        );
    }

    #[test]
    fn test_reports_follow_option_order() {
        insta::assert_snapshot!(
            check_with(&["name", "id"], "fragment F on User { email }"),
            @r"
        [1] 'name' field required on 'fragment F on User'
        [2] 'id' field required on 'fragment F on User'
        "
        );
    }

    #[test]
    fn test_unknown_field_is_silent() {
        insta::assert_snapshot!(
            check("query Q { missing { name } }"),
            @"(no diagnostics)"
        );
    }

    #[test]
    fn test_options_from_json() {
        let options = RequiredFieldsOptions::from_json(&json!({ "requiredFields": ["id", "uuid"] }))
            .unwrap();
        assert_eq!(options, RequiredFieldsOptions::new(["id", "uuid"]));

        assert!(RequiredFieldsOptions::from_json(&json!({ "fields": ["id"] })).is_err());
        assert!(RequiredFieldsOptions::from_json(&json!({ "requiredFields": "id" })).is_err());
    }

    #[test]
    fn test_from_options_errors() {
        assert!(matches!(
            RequiredFieldsRuleImpl::from_options(None),
            Err(ConfigError::MissingOptions { rule: "required_fields" })
        ));
        assert!(matches!(
            RequiredFieldsRuleImpl::from_options(Some(&json!([]))),
            Err(ConfigError::InvalidOptions { .. })
        ));

        let rule =
            RequiredFieldsRuleImpl::from_options(Some(&json!({ "requiredFields": ["id"] }))).unwrap();
        assert_eq!(rule.options().required_fields, vec!["id".to_string()]);
    }
}
