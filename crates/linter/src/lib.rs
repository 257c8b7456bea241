//! Schema-aware validation of executable GraphQL documents.
//!
//! A [`Validator`] walks a parsed document once, keeping a [`TypeInfo`]
//! tracker in step with the walk and dispatching every node to the handlers
//! its rules registered for that node kind. Violations are collected in
//! traversal order.
//!
//! # Example
//!
//! ```
//! use graphql_linter::{OperationsMustHaveNamesRuleImpl, Validator};
//! use graphql_schema::Schema;
//!
//! let schema = Schema::from_sdl("type Query { hello: String }").unwrap();
//! let validator = Validator::new().with_rule(OperationsMustHaveNamesRuleImpl);
//!
//! let errors = validator.validate_source(&schema, "{ hello }");
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].message, "All operations must be named");
//! ```

mod config;
mod diagnostics;
mod node;
mod registry;
mod rules;
mod selection;
mod traits;
mod type_info;
mod validator;
mod visitor;

pub use config::{
    ConfigError, ExtendsConfig, FullLintConfig, LintConfig, LintRuleConfig, LintSeverity,
    RECOMMENDED_PRESET,
};
pub use diagnostics::{
    ErrorCollector, LintSeverity as DiagnosticSeverity, OffsetRange, ValidationError,
};
pub use node::{Node, NodeKind, NodeRef};
pub use registry::{all_rule_names, validation_rules};
pub use rules::{
    NoDeprecatedFieldsRuleImpl, OperationsMustHaveNamesRuleImpl, RequiredFieldsOptions,
    RequiredFieldsRuleImpl, TypeNamesShouldBeCapitalizedRuleImpl,
};
pub use selection::{is_field_available, was_field_requested};
pub use traits::{LintRule, ValidationRule};
pub use type_info::{TypeContext, TypeInfo};
pub use validator::Validator;
pub use visitor::{Handler, RuleDispatcher, RuleVisitor, ValidationContext};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types for working with
/// the validator. Import with:
///
/// ```rust,ignore
/// use graphql_linter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{LintConfig, LintSeverity};
    pub use crate::diagnostics::{LintSeverity as DiagnosticSeverity, ValidationError};
    pub use crate::traits::{LintRule, ValidationRule};
    pub use crate::validator::Validator;
}
