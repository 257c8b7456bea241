use crate::diagnostics::LintSeverity;
use crate::node::NodeKind;
use crate::traits::{LintRule, ValidationRule};
use crate::visitor::RuleVisitor;
use graphql_schema::TypeDescriptor;

/// Rule that detects usage of deprecated schema elements
///
/// This rule checks for:
/// - Deprecated fields on object and interface types
/// - Deprecated enum values in arguments, variable defaults and nested input
///
/// Nothing is reported when the field, its parent type or the enum's input
/// type cannot be resolved against the schema.
pub struct NoDeprecatedFieldsRuleImpl;

impl LintRule for NoDeprecatedFieldsRuleImpl {
    fn name(&self) -> &'static str {
        "no_deprecated_fields"
    }

    fn description(&self) -> &'static str {
        "Warns when using deprecated fields or enum values"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }
}

impl ValidationRule for NoDeprecatedFieldsRuleImpl {
    fn visitor(&self) -> RuleVisitor<'_> {
        RuleVisitor::new()
            .on(NodeKind::Field, |ctx, node| {
                let types = ctx.types();
                let Some(field_def) = types.current_field_def() else {
                    return;
                };
                if !field_def.is_deprecated {
                    return;
                }
                let Some(parent) = types.current_parent_type() else {
                    return;
                };
                ctx.report(
                    with_reason(
                        format!("The field {}.{} is deprecated.", parent.name, field_def.name),
                        field_def.deprecation_reason.as_deref(),
                    ),
                    node,
                );
            })
            .on(NodeKind::EnumValue, |ctx, node| {
                let types = ctx.types();
                let Some(value) = types.current_enum_value() else {
                    return;
                };
                if !value.is_deprecated {
                    return;
                }
                let Some(enum_type) = types.current_input_type().map(TypeDescriptor::named_type)
                else {
                    return;
                };
                ctx.report(
                    with_reason(
                        format!(
                            "The enum value {}.{} is deprecated.",
                            enum_type.name, value.name
                        ),
                        value.deprecation_reason.as_deref(),
                    ),
                    node,
                );
            })
    }
}

/// Append a non-empty deprecation reason after a single space
fn with_reason(mut message: String, reason: Option<&str>) -> String {
    if let Some(reason) = reason.filter(|reason| !reason.is_empty()) {
        message.push(' ');
        message.push_str(reason);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validator;
    use graphql_test_utils::{format_diagnostic_messages, test_schema};

    fn check(source: &str) -> String {
        let schema = test_schema();
        let errors = Validator::new()
            .with_rule(NoDeprecatedFieldsRuleImpl)
            .validate_source(&schema, source);
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        format_diagnostic_messages(&messages)
    }

    #[test]
    fn test_with_reason() {
        assert_eq!(with_reason("A.b is deprecated.".into(), None), "A.b is deprecated.");
        assert_eq!(with_reason("A.b is deprecated.".into(), Some("")), "A.b is deprecated.");
        assert_eq!(
            with_reason("A.b is deprecated.".into(), Some("Use c.")),
            "A.b is deprecated. Use c."
        );
    }

    #[test]
    fn test_deprecated_field_with_reason() {
        insta::assert_snapshot!(
            check("query Q { user(id: 1) { id username } }"),
            @"[1] The field User.username is deprecated. Use fullName instead."
        );
    }

    #[test]
    fn test_deprecated_field_without_reason() {
        insta::assert_snapshot!(
            check("query Q { user(id: 1) { nickname } }"),
            @"[1] The field User.nickname is deprecated."
        );
    }

    #[test]
    fn test_deprecated_field_with_default_reason() {
        insta::assert_snapshot!(
            check("query Q { user(id: 1) { handle } }"),
            @"[1] The field User.handle is deprecated. No longer supported"
        );
    }

    #[test]
    fn test_deprecated_root_field_and_alias() {
        insta::assert_snapshot!(
            check("query Q { legacy: oldUser(id: 1) { id } }"),
            @"[1] The field Query.oldUser is deprecated. Use user instead."
        );
    }

    #[test]
    fn test_no_warning_for_non_deprecated_fields() {
        insta::assert_snapshot!(
            check("query Q { user(id: 1) { id name fullName } }"),
            @"(no diagnostics)"
        );
    }

    #[test]
    fn test_deprecated_enum_values() {
        let source = r"
query Q($status: Status = HIDDEN) {
    posts(status: ARCHIVED, order: [ASC], filter: { statuses: [DRAFT, ARCHIVED] }) { id }
}
mutation M { publish(id: 1, status: PUBLISHED) { id } }
";
        insta::assert_snapshot!(check(source), @r"
        [1] The enum value Status.HIDDEN is deprecated.
        [2] The enum value Status.ARCHIVED is deprecated. Use DRAFT instead.
        [3] The enum value Status.ARCHIVED is deprecated. Use DRAFT instead.
        ");
    }

    #[test]
    fn test_unresolvable_context_is_silent() {
        let source = r"
query Q { missing(status: ARCHIVED) { username } }
fragment F on Unknown { username }
";
        insta::assert_snapshot!(check(source), @"(no diagnostics)");
    }

    #[test]
    fn test_deprecated_field_in_fragments() {
        let source = r#"
fragment F on User { username ... on User { nickname } }
query Q { search(term: "x") { ... on User { handle } } }
"#;
        insta::assert_snapshot!(check(source), @r"
        [1] The field User.username is deprecated. Use fullName instead.
        [2] The field User.nickname is deprecated.
        [3] The field User.handle is deprecated. No longer supported
        ");
    }
}
