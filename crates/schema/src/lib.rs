//! Schema model used by the GraphQL validator.
//!
//! A [`Schema`] holds named [`TypeDef`]s, directive definitions and the root
//! operation types. Type references keep their list and non-null wrappers as
//! a [`TypeRef`] chain; [`Schema::resolve`] turns one into a
//! [`TypeDescriptor`] borrowing the schema, which the validator unwraps layer
//! by layer.
//!
//! ```
//! use graphql_schema::Schema;
//!
//! let schema = Schema::from_sdl("type Query { users: [User!]! } type User { id: ID! }").unwrap();
//! let users = schema.query_type.as_deref().and_then(|q| schema.get_type(q))
//!     .and_then(|q| q.field("users"))
//!     .unwrap();
//! let ty = schema.resolve(&users.type_ref).unwrap();
//! assert_eq!(ty.named_type().name.as_ref(), "User");
//! ```

mod descriptor;
mod error;
mod schema;
mod sdl;
mod types;

pub use descriptor::TypeDescriptor;
pub use error::SchemaError;
pub use schema::{Schema, TYPENAME_FIELD};
pub use sdl::type_ref_from_cst;
pub use types::{
    DirectiveDef, EnumValueDef, FieldDef, InputValueDef, TypeDef, TypeDefKind, TypeRef,
    DEFAULT_DEPRECATION_REASON,
};
