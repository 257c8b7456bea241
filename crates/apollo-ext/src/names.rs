//! Name extraction helpers for CST nodes.
//!
//! Most CST accessors return `Option`s at every level (a fragment definition
//! has an optional fragment name which has an optional name token). These
//! helpers flatten the common chains.

use apollo_parser::cst;

/// The kind of GraphQL operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

/// Get the operation kind of an operation definition.
///
/// The query shorthand (`{ ... }`) has no operation type token and is a query.
#[must_use]
pub fn operation_kind(op: &cst::OperationDefinition) -> OperationKind {
    op.operation_type()
        .map_or(OperationKind::Query, |op_type| operation_type_kind(&op_type))
}

/// Get the operation kind from an operation type node
#[must_use]
pub fn operation_type_kind(op_type: &cst::OperationType) -> OperationKind {
    if op_type.query_token().is_some() {
        OperationKind::Query
    } else if op_type.mutation_token().is_some() {
        OperationKind::Mutation
    } else {
        OperationKind::Subscription
    }
}

/// Name of an operation, if it has one.
#[must_use]
pub fn operation_name(op: &cst::OperationDefinition) -> Option<String> {
    op.name().map(|n| n.text().to_string())
}

/// Name of a field selection (not its alias).
#[must_use]
pub fn field_name(field: &cst::Field) -> Option<String> {
    field.name().map(|n| n.text().to_string())
}

/// Name of a fragment definition.
#[must_use]
pub fn fragment_definition_name(frag: &cst::FragmentDefinition) -> Option<String> {
    frag.fragment_name()
        .and_then(|fn_| fn_.name())
        .map(|n| n.text().to_string())
}

/// Name of the type in a type condition (`on User`).
#[must_use]
pub fn type_condition_name(type_condition: Option<cst::TypeCondition>) -> Option<String> {
    type_condition
        .and_then(|tc| tc.named_type())
        .and_then(|nt| nt.name())
        .map(|n| n.text().to_string())
}

/// Name referenced by a named type.
#[must_use]
pub fn named_type_name(named: &cst::NamedType) -> Option<String> {
    named.name().map(|n| n.text().to_string())
}
