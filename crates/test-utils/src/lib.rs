//! # GraphQL Test Utilities
//!
//! Shared test infrastructure for the validation crates: fixture schemas,
//! formatting helpers for snapshot assertions and opt-in log output.
//!
//! ## Quick Start
//!
//! ```ignore
//! use graphql_test_utils::{format_diagnostic_messages, test_schema};
//!
//! #[test]
//! fn test_valid_query() {
//!     let schema = test_schema();
//!     let errors = validator.validate_source(&schema, "query Q { user(id: 1) { id } }");
//!     let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
//!     insta::assert_snapshot!(format_diagnostic_messages(&messages), @"(no diagnostics)");
//! }
//! ```

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::needless_raw_string_hashes)]

pub mod assertions;
pub mod fixtures;
pub mod logging;

pub use assertions::{format_diagnostic_messages, format_diagnostics};
pub use fixtures::{schema_from, test_schema};
pub use logging::init_tracing;

// Re-export insta for snapshot testing
pub use insta;
