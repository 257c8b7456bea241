use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Reason recorded for `@deprecated` when no `reason` argument is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Reference to a type, including list and non-null wrappers.
///
/// `[User!]!` is `NonNull(List(NonNull(Named("User"))))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(Arc<str>),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Shorthand for a named type reference.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(Arc::from(name))
    }

    /// Wrap this reference in a list.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Wrap this reference in a non-null modifier.
    #[must_use]
    pub fn non_null(self) -> Self {
        Self::NonNull(Box::new(self))
    }

    /// The innermost named type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TypeDefKind {
    Object,
    Interface,
    Union,
    Enum,
    Scalar,
    InputObject,
}

impl TypeDefKind {
    /// Object, interface and union types can carry a selection set.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Object | Self::Interface | Self::Union)
    }
}

/// A named schema type.
///
/// Only the map matching the kind is populated: `fields` for objects and
/// interfaces, `input_fields` for input objects, `enum_values` for enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub name: Arc<str>,
    pub kind: TypeDefKind,
    pub description: Option<Arc<str>>,
    pub fields: IndexMap<Arc<str>, FieldDef>,
    pub input_fields: IndexMap<Arc<str>, InputValueDef>,
    pub enum_values: IndexMap<Arc<str>, EnumValueDef>,
}

impl TypeDef {
    /// Create an empty type of the given kind.
    #[must_use]
    pub fn new(name: &str, kind: TypeDefKind) -> Self {
        Self {
            name: Arc::from(name),
            kind,
            description: None,
            fields: IndexMap::new(),
            input_fields: IndexMap::new(),
            enum_values: IndexMap::new(),
        }
    }

    /// The output field map, present only on object and interface types.
    #[must_use]
    pub fn field_map(&self) -> Option<&IndexMap<Arc<str>, FieldDef>> {
        matches!(self.kind, TypeDefKind::Object | TypeDefKind::Interface).then_some(&self.fields)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.field_map().and_then(|fields| fields.get(name))
    }

    #[must_use]
    pub fn input_field(&self, name: &str) -> Option<&InputValueDef> {
        if self.kind == TypeDefKind::InputObject {
            self.input_fields.get(name)
        } else {
            None
        }
    }

    #[must_use]
    pub fn enum_value(&self, name: &str) -> Option<&EnumValueDef> {
        if self.kind == TypeDefKind::Enum {
            self.enum_values.get(name)
        } else {
            None
        }
    }
}

/// Output field definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: Arc<str>,
    pub description: Option<Arc<str>>,
    pub type_ref: TypeRef,
    pub arguments: IndexMap<Arc<str>, InputValueDef>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<Arc<str>>,
}

impl FieldDef {
    /// A non-deprecated field without arguments.
    #[must_use]
    pub fn new(name: &str, type_ref: TypeRef) -> Self {
        Self {
            name: Arc::from(name),
            description: None,
            type_ref,
            arguments: IndexMap::new(),
            is_deprecated: false,
            deprecation_reason: None,
        }
    }
}

/// Argument or input object field definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValueDef {
    pub name: Arc<str>,
    pub description: Option<Arc<str>>,
    pub type_ref: TypeRef,
    /// Source text of the default value, e.g. `10` or `DRAFT`
    pub default_value: Option<Arc<str>>,
}

impl InputValueDef {
    #[must_use]
    pub fn new(name: &str, type_ref: TypeRef) -> Self {
        Self {
            name: Arc::from(name),
            description: None,
            type_ref,
            default_value: None,
        }
    }
}

/// Enum value definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDef {
    pub name: Arc<str>,
    pub description: Option<Arc<str>>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<Arc<str>>,
}

impl EnumValueDef {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            description: None,
            is_deprecated: false,
            deprecation_reason: None,
        }
    }
}

/// Directive definition; only its arguments matter for type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveDef {
    pub name: Arc<str>,
    pub arguments: IndexMap<Arc<str>, InputValueDef>,
}
