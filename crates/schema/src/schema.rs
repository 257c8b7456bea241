use crate::descriptor::TypeDescriptor;
use crate::types::{DirectiveDef, FieldDef, TypeDef, TypeRef};
use graphql_apollo_ext::OperationKind;
use indexmap::IndexMap;
use std::sync::Arc;

/// Name of the meta field available on every composite type.
pub const TYPENAME_FIELD: &str = "__typename";

/// A complete type system: named types, directives and root operation types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub types: IndexMap<Arc<str>, TypeDef>,
    pub directives: IndexMap<Arc<str>, DirectiveDef>,
    pub query_type: Option<Arc<str>>,
    pub mutation_type: Option<Arc<str>>,
    pub subscription_type: Option<Arc<str>>,
    typename_field: FieldDef,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema {
    /// An empty schema with no types and no root operation types.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
            directives: IndexMap::new(),
            query_type: None,
            mutation_type: None,
            subscription_type: None,
            typename_field: FieldDef::new(TYPENAME_FIELD, TypeRef::named("String").non_null()),
        }
    }

    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    #[must_use]
    pub fn directive(&self, name: &str) -> Option<&DirectiveDef> {
        self.directives.get(name)
    }

    /// Root type for an operation kind, if the schema declares one.
    #[must_use]
    pub fn root_type(&self, kind: OperationKind) -> Option<&TypeDef> {
        let name = match kind {
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }?;
        self.get_type(name)
    }

    /// Look up a field selected on `parent`, including the `__typename` meta field.
    #[must_use]
    pub fn field_def<'s>(&'s self, parent: &'s TypeDef, name: &str) -> Option<&'s FieldDef> {
        if name == TYPENAME_FIELD && parent.kind.is_composite() {
            return Some(&self.typename_field);
        }
        parent.field(name)
    }

    /// Descriptor for a named type.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<TypeDescriptor<'_>> {
        self.get_type(name).map(TypeDescriptor::Named)
    }

    /// Resolve a type reference against this schema.
    ///
    /// Returns `None` when the innermost named type is unknown.
    #[must_use]
    pub fn resolve(&self, ty: &TypeRef) -> Option<TypeDescriptor<'_>> {
        Some(match ty {
            TypeRef::Named(name) => self.named(name)?,
            TypeRef::List(inner) => TypeDescriptor::List(Box::new(self.resolve(inner)?)),
            TypeRef::NonNull(inner) => TypeDescriptor::NonNull(Box::new(self.resolve(inner)?)),
        })
    }
}
