//! Borrowed views over the CST nodes that rules can subscribe to.

use crate::diagnostics::OffsetRange;
use apollo_parser::cst::{self, CstNode};

/// Node kinds used as rule dispatch keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Document,
    OperationDefinition,
    FragmentDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    FragmentSpread,
    InlineFragment,
    Argument,
    Directive,
    NamedType,
    ListValue,
    ObjectField,
    EnumValue,
}

/// A document node currently being visited.
#[derive(Debug, Clone, Copy)]
pub enum Node<'n> {
    Document(&'n cst::Document),
    OperationDefinition(&'n cst::OperationDefinition),
    FragmentDefinition(&'n cst::FragmentDefinition),
    VariableDefinition(&'n cst::VariableDefinition),
    SelectionSet(&'n cst::SelectionSet),
    Field(&'n cst::Field),
    FragmentSpread(&'n cst::FragmentSpread),
    InlineFragment(&'n cst::InlineFragment),
    Argument(&'n cst::Argument),
    Directive(&'n cst::Directive),
    NamedType(&'n cst::NamedType),
    ListValue(&'n cst::ListValue),
    ObjectField(&'n cst::ObjectField),
    EnumValue(&'n cst::EnumValue),
}

impl Node<'_> {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Document(_) => NodeKind::Document,
            Self::OperationDefinition(_) => NodeKind::OperationDefinition,
            Self::FragmentDefinition(_) => NodeKind::FragmentDefinition,
            Self::VariableDefinition(_) => NodeKind::VariableDefinition,
            Self::SelectionSet(_) => NodeKind::SelectionSet,
            Self::Field(_) => NodeKind::Field,
            Self::FragmentSpread(_) => NodeKind::FragmentSpread,
            Self::InlineFragment(_) => NodeKind::InlineFragment,
            Self::Argument(_) => NodeKind::Argument,
            Self::Directive(_) => NodeKind::Directive,
            Self::NamedType(_) => NodeKind::NamedType,
            Self::ListValue(_) => NodeKind::ListValue,
            Self::ObjectField(_) => NodeKind::ObjectField,
            Self::EnumValue(_) => NodeKind::EnumValue,
        }
    }

    /// Byte range of the node in its source
    #[must_use]
    pub fn range(&self) -> OffsetRange {
        match self {
            Self::Document(n) => range_of(*n),
            Self::OperationDefinition(n) => range_of(*n),
            Self::FragmentDefinition(n) => range_of(*n),
            Self::VariableDefinition(n) => range_of(*n),
            Self::SelectionSet(n) => range_of(*n),
            Self::Field(n) => range_of(*n),
            Self::FragmentSpread(n) => range_of(*n),
            Self::InlineFragment(n) => range_of(*n),
            Self::Argument(n) => range_of(*n),
            Self::Directive(n) => range_of(*n),
            Self::NamedType(n) => range_of(*n),
            Self::ListValue(n) => range_of(*n),
            Self::ObjectField(n) => range_of(*n),
            Self::EnumValue(n) => range_of(*n),
        }
    }

    /// Owned reference suitable for attaching to a violation
    #[must_use]
    pub fn to_ref(&self) -> NodeRef {
        NodeRef {
            kind: self.kind(),
            range: self.range(),
        }
    }
}

/// Identity of a reported node: its kind and source range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub kind: NodeKind,
    pub range: OffsetRange,
}

fn range_of<N: CstNode>(node: &N) -> OffsetRange {
    let range = node.syntax().text_range();
    OffsetRange::new(range.start().into(), range.end().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_range_of_field() {
        let source = "query Q { user { id } }";
        let tree = apollo_parser::Parser::new(source).parse();
        let cst::Definition::OperationDefinition(op) = tree.document().definitions().next().unwrap()
        else {
            panic!("expected operation");
        };
        let cst::Selection::Field(field) = op.selection_set().unwrap().selections().next().unwrap()
        else {
            panic!("expected field");
        };

        let node = Node::Field(&field);
        let node_ref = node.to_ref();
        assert_eq!(node_ref.kind, NodeKind::Field);
        assert_eq!(
            source[node_ref.range.start..node_ref.range.end].trim(),
            "user { id }"
        );
    }

    #[test]
    fn test_operation_range_covers_definition() {
        let source = "query Q { a }";
        let tree = apollo_parser::Parser::new(source).parse();
        let cst::Definition::OperationDefinition(op) = tree.document().definitions().next().unwrap()
        else {
            panic!("expected operation");
        };
        let node = Node::OperationDefinition(&op);
        assert_eq!(node.kind(), NodeKind::OperationDefinition);
        assert_eq!(node.range(), OffsetRange::new(0, source.len()));
    }
}
