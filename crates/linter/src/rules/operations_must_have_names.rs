use crate::diagnostics::LintSeverity;
use crate::node::{Node, NodeKind};
use crate::traits::{LintRule, ValidationRule};
use crate::visitor::RuleVisitor;
use graphql_apollo_ext::operation_name;

/// Reports operations without a name, including the `{ ... }` shorthand
pub struct OperationsMustHaveNamesRuleImpl;

impl LintRule for OperationsMustHaveNamesRuleImpl {
    fn name(&self) -> &'static str {
        "operations_must_have_names"
    }

    fn description(&self) -> &'static str {
        "Requires every operation to have a name"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl ValidationRule for OperationsMustHaveNamesRuleImpl {
    fn visitor(&self) -> RuleVisitor<'_> {
        RuleVisitor::new().on(NodeKind::OperationDefinition, |ctx, node| {
            let Node::OperationDefinition(operation) = node else {
                return;
            };
            if operation_name(operation).is_none() {
                ctx.report("All operations must be named", node);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validator;
    use graphql_test_utils::{format_diagnostic_messages, test_schema};

    fn check(source: &str) -> String {
        let schema = test_schema();
        let errors = Validator::new()
            .with_rule(OperationsMustHaveNamesRuleImpl)
            .validate_source(&schema, source);
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        format_diagnostic_messages(&messages)
    }

    #[test]
    fn test_anonymous_operations_are_reported() {
        let source = r"
query { users { id } }
mutation { publish(id: 1, status: DRAFT) { id } }
{ stats { count } }
";
        insta::assert_snapshot!(check(source), @r"
        [1] All operations must be named
        [2] All operations must be named
        [3] All operations must be named
        ");
    }

    #[test]
    fn test_named_operations_pass() {
        let source = "query GetUsers { users { id } } mutation Publish { publish(id: 1, status: DRAFT) { id } }";
        insta::assert_snapshot!(check(source), @"(no diagnostics)");
    }

    #[test]
    fn test_fragments_are_ignored() {
        let source = "fragment UserFields on User { id }";
        insta::assert_snapshot!(check(source), @"(no diagnostics)");
    }
}
