use crate::diagnostics::LintSeverity;
use crate::node::{Node, NodeKind};
use crate::traits::{LintRule, ValidationRule};
use crate::visitor::RuleVisitor;
use graphql_apollo_ext::named_type_name;

/// Reports type references whose name does not start with a capital letter
///
/// Checks variable types and fragment/inline fragment type conditions. A name
/// violates the rule when its first character is unchanged by lowercasing,
/// so names starting with `_` are reported too.
pub struct TypeNamesShouldBeCapitalizedRuleImpl;

impl LintRule for TypeNamesShouldBeCapitalizedRuleImpl {
    fn name(&self) -> &'static str {
        "type_names_should_be_capitalized"
    }

    fn description(&self) -> &'static str {
        "Requires referenced type names to start with a capital letter"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }
}

impl ValidationRule for TypeNamesShouldBeCapitalizedRuleImpl {
    fn visitor(&self) -> RuleVisitor<'_> {
        RuleVisitor::new().on(NodeKind::NamedType, |ctx, node| {
            let Node::NamedType(named) = node else {
                return;
            };
            if named_type_name(named).is_some_and(|name| starts_lowercase(&name)) {
                ctx.report("All type names should start with a capital letter", node);
            }
        })
    }
}

fn starts_lowercase(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|first| first.to_lowercase().eq(std::iter::once(first)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validator;
    use graphql_test_utils::{format_diagnostic_messages, test_schema};

    fn check(source: &str) -> String {
        let schema = test_schema();
        let errors = Validator::new()
            .with_rule(TypeNamesShouldBeCapitalizedRuleImpl)
            .validate_source(&schema, source);
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        format_diagnostic_messages(&messages)
    }

    #[test]
    fn test_starts_lowercase() {
        assert!(starts_lowercase("user"));
        assert!(starts_lowercase("_User"));
        assert!(!starts_lowercase("User"));
        assert!(!starts_lowercase("ÉtatUser"));
        assert!(starts_lowercase("état"));
        assert!(!starts_lowercase(""));
    }

    #[test]
    fn test_lowercase_type_conditions_and_variables() {
        let source = r"
query Q($id: iD!, $ids: [iD!]) { node(id: $id) { ... on user { id } } }
fragment F on post { id }
";
        insta::assert_snapshot!(check(source), @r"
        [1] All type names should start with a capital letter
        [2] All type names should start with a capital letter
        [3] All type names should start with a capital letter
        [4] All type names should start with a capital letter
        ");
    }

    #[test]
    fn test_capitalized_names_pass() {
        let source = r"
query Q($id: ID!, $status: Status) { node(id: $id) { ... on User { id } } }
fragment F on Post { id status }
";
        insta::assert_snapshot!(check(source), @"(no diagnostics)");
    }

    #[test]
    fn test_reports_point_at_named_type() {
        let schema = test_schema();
        let source = "fragment F on post { id }";
        let errors = Validator::new()
            .with_rule(TypeNamesShouldBeCapitalizedRuleImpl)
            .validate_source(&schema, source);
        assert_eq!(errors.len(), 1);
        let range = errors[0].range().unwrap();
        assert_eq!(source[range.start..range.end].trim(), "post");
        assert_eq!(errors[0].nodes[0].kind, NodeKind::NamedType);
    }
}
