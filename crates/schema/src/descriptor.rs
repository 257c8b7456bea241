use crate::types::{FieldDef, TypeDef};
use indexmap::IndexMap;
use std::sync::Arc;

/// A resolved type as seen by the validator.
///
/// Wrapper layers mirror the [`TypeRef`](crate::TypeRef) they were resolved
/// from; the innermost layer borrows the schema's named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor<'s> {
    Named(&'s TypeDef),
    List(Box<TypeDescriptor<'s>>),
    NonNull(Box<TypeDescriptor<'s>>),
}

impl<'s> TypeDescriptor<'s> {
    /// The wrapped type of a list or non-null descriptor.
    #[must_use]
    pub fn of_type(&self) -> Option<&TypeDescriptor<'s>> {
        match self {
            Self::Named(_) => None,
            Self::List(inner) | Self::NonNull(inner) => Some(inner.as_ref()),
        }
    }

    /// Unwrap all list and non-null layers.
    #[must_use]
    pub fn named_type(&self) -> &'s TypeDef {
        match self {
            Self::Named(def) => *def,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }

    /// Strip a single outer non-null layer, if any.
    #[must_use]
    pub fn nullable(&self) -> &TypeDescriptor<'s> {
        match self {
            Self::NonNull(inner) => inner.as_ref(),
            other => other,
        }
    }

    /// The field map of this exact layer.
    ///
    /// Wrapper layers have no fields of their own; callers that want the
    /// fields of the underlying type walk [`of_type`](Self::of_type).
    #[must_use]
    pub fn field_map(&self) -> Option<&'s IndexMap<Arc<str>, FieldDef>> {
        match self {
            Self::Named(def) => def.field_map(),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TypeDefKind, TypeRef};

    fn user_type() -> TypeDef {
        let mut user = TypeDef::new("User", TypeDefKind::Object);
        user.fields
            .insert(Arc::from("id"), FieldDef::new("id", TypeRef::named("ID")));
        user
    }

    #[test]
    fn test_unwrapping_layers() {
        let user = user_type();
        let ty = TypeDescriptor::NonNull(Box::new(TypeDescriptor::List(Box::new(
            TypeDescriptor::Named(&user),
        ))));

        assert!(ty.field_map().is_none());
        assert_eq!(ty.named_type().name.as_ref(), "User");

        let list = ty.of_type().unwrap();
        assert!(matches!(list, TypeDescriptor::List(_)));
        let named = list.of_type().unwrap();
        assert!(named.field_map().unwrap().contains_key("id"));
        assert!(named.of_type().is_none());
    }

    #[test]
    fn test_nullable_strips_one_layer() {
        let user = user_type();
        let ty = TypeDescriptor::NonNull(Box::new(TypeDescriptor::Named(&user)));
        assert_eq!(ty.nullable(), &TypeDescriptor::Named(&user));
        assert_eq!(ty.nullable().nullable(), &TypeDescriptor::Named(&user));
    }
}
