/// Validation rule implementations
///
/// Each rule is implemented in its own file and implements
/// [`ValidationRule`](crate::ValidationRule), contributing handlers keyed by
/// node kind.
mod no_deprecated_fields;
mod operations_must_have_names;
mod required_fields;
mod type_names_should_be_capitalized;

pub use no_deprecated_fields::NoDeprecatedFieldsRuleImpl;
pub use operations_must_have_names::OperationsMustHaveNamesRuleImpl;
pub use required_fields::{RequiredFieldsOptions, RequiredFieldsRuleImpl};
pub use type_names_should_be_capitalized::TypeNamesShouldBeCapitalizedRuleImpl;
