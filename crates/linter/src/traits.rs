/// Trait-based rule system
///
/// A rule describes itself through [`LintRule`] and contributes handlers to a
/// validation pass through [`ValidationRule::visitor`]. Options are fixed when
/// the rule is constructed, so a rule value is immutable and shareable.
use crate::diagnostics::LintSeverity;
use crate::visitor::RuleVisitor;

/// Base trait for all lint rules
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule (e.g., `"no_deprecated_fields"`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Default severity (can be overridden by config)
    fn default_severity(&self) -> LintSeverity;
}

/// Lint rule that observes a document walk with schema type context
///
/// These rules can access:
/// - The node being visited
/// - The [`TypeContext`](crate::TypeContext) for that node
///
/// Examples: `required_fields`, `no_deprecated_fields`
pub trait ValidationRule: LintRule {
    /// Handlers to run for each node kind this rule cares about
    fn visitor(&self) -> RuleVisitor<'_>;
}
