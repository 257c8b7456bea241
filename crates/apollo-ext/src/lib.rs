//! Extensions for `apollo-parser`: an executable-document walker and name helpers.
//!
//! The walker visits operations, fragments, selections, arguments, directives
//! and input values in document order, with `enter_`/`exit_` hooks wherever a
//! consumer needs to keep state in step with nesting.
//!
//! **Note**: This crate is specifically tied to `apollo-parser`'s CST types.
//!
//! # Example
//!
//! ```
//! use graphql_apollo_ext::{walk_document, CstVisitor};
//! use apollo_parser::cst;
//!
//! #[derive(Default)]
//! struct VariableUses(Vec<String>);
//!
//! impl CstVisitor for VariableUses {
//!     fn visit_variable(&mut self, var: &cst::Variable) {
//!         if let Some(name) = var.name() {
//!             self.0.push(name.text().to_string());
//!         }
//!     }
//! }
//!
//! let tree = apollo_parser::Parser::new("query Q($id: ID!) { user(id: $id) { name } }").parse();
//! let mut uses = VariableUses::default();
//! walk_document(&mut uses, &tree);
//! assert_eq!(uses.0, vec!["id", "id"]);
//! ```

mod names;
mod visitor;

pub use names::*;
pub use visitor::*;
