//! Visitor pattern for executable GraphQL CST traversal.
//!
//! The walk is depth-first and pre-order, following the reference GraphQL
//! visitor key order (e.g. a field visits its arguments, then its directives,
//! then its selection set). Type-system definitions are skipped.
//!
//! Nodes that carry nested state (operations, fields, selection sets,
//! arguments, ...) have `enter_`/`exit_` pairs so that a visitor can keep a
//! stack in sync with the traversal. Leaf nodes have a single `visit_` call.
//!
//! # Example
//!
//! ```
//! use graphql_apollo_ext::{CstVisitor, walk_document};
//! use apollo_parser::cst;
//!
//! struct FieldCounter(usize);
//!
//! impl CstVisitor for FieldCounter {
//!     fn enter_field(&mut self, _field: &cst::Field) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let source = "query { user { name email } }";
//! let tree = apollo_parser::Parser::new(source).parse();
//! let mut counter = FieldCounter(0);
//! walk_document(&mut counter, &tree);
//! assert_eq!(counter.0, 3); // user, name, email
//! ```

use apollo_parser::cst;

/// A visitor for traversing executable GraphQL CST nodes.
///
/// All methods have default empty implementations. Override only the methods
/// you need. The `walk_*` functions handle traversal; visitor methods are
/// called at each node.
#[allow(unused_variables)]
pub trait CstVisitor {
    // =========================================================================
    // Document-level visitors
    // =========================================================================

    /// Called when entering a document (before visiting definitions)
    fn enter_document(&mut self, doc: &cst::Document) {}

    /// Called when exiting a document (after visiting all definitions)
    fn exit_document(&mut self, doc: &cst::Document) {}

    // =========================================================================
    // Definition visitors
    // =========================================================================

    /// Called when entering an operation definition
    fn enter_operation(&mut self, op: &cst::OperationDefinition) {}

    /// Called when exiting an operation definition
    fn exit_operation(&mut self, op: &cst::OperationDefinition) {}

    /// Called when entering a fragment definition
    fn enter_fragment_definition(&mut self, frag: &cst::FragmentDefinition) {}

    /// Called when exiting a fragment definition
    fn exit_fragment_definition(&mut self, frag: &cst::FragmentDefinition) {}

    /// Called when entering a variable definition
    fn enter_variable_definition(&mut self, var_def: &cst::VariableDefinition) {}

    /// Called when exiting a variable definition
    fn exit_variable_definition(&mut self, var_def: &cst::VariableDefinition) {}

    // =========================================================================
    // Selection set visitors
    // =========================================================================

    /// Called when entering a selection set
    fn enter_selection_set(&mut self, set: &cst::SelectionSet) {}

    /// Called when exiting a selection set
    fn exit_selection_set(&mut self, set: &cst::SelectionSet) {}

    /// Called when entering a field (before arguments, directives and sub-selections)
    fn enter_field(&mut self, field: &cst::Field) {}

    /// Called when exiting a field
    fn exit_field(&mut self, field: &cst::Field) {}

    /// Called for each fragment spread (`...FragmentName`)
    fn visit_fragment_spread(&mut self, spread: &cst::FragmentSpread) {}

    /// Called when entering an inline fragment (`... on Type { }`)
    fn enter_inline_fragment(&mut self, inline: &cst::InlineFragment) {}

    /// Called when exiting an inline fragment
    fn exit_inline_fragment(&mut self, inline: &cst::InlineFragment) {}

    // =========================================================================
    // Argument and directive visitors
    // =========================================================================

    /// Called when entering an argument of a field or directive
    fn enter_argument(&mut self, arg: &cst::Argument) {}

    /// Called when exiting an argument
    fn exit_argument(&mut self, arg: &cst::Argument) {}

    /// Called when entering a directive (`@directive`)
    fn enter_directive(&mut self, dir: &cst::Directive) {}

    /// Called when exiting a directive
    fn exit_directive(&mut self, dir: &cst::Directive) {}

    // =========================================================================
    // Value visitors
    // =========================================================================

    /// Called for variable references (`$varName`)
    fn visit_variable(&mut self, var: &cst::Variable) {}

    /// Called for enum values in argument and default-value positions
    fn visit_enum_value(&mut self, value: &cst::EnumValue) {}

    /// Called when entering a list value (before its items)
    fn enter_list_value(&mut self, list: &cst::ListValue) {}

    /// Called when exiting a list value
    fn exit_list_value(&mut self, list: &cst::ListValue) {}

    /// Called when entering a field of an object value
    fn enter_object_field(&mut self, field: &cst::ObjectField) {}

    /// Called when exiting a field of an object value
    fn exit_object_field(&mut self, field: &cst::ObjectField) {}

    // =========================================================================
    // Type reference visitors
    // =========================================================================

    /// Called for named types: variable types and type conditions
    fn visit_named_type(&mut self, named: &cst::NamedType) {}
}

// =============================================================================
// Walk functions - these drive the traversal
// =============================================================================

/// Walk a parsed document with the given visitor.
///
/// This is the main entry point for traversing a GraphQL document.
pub fn walk_document<V: CstVisitor + ?Sized>(visitor: &mut V, tree: &apollo_parser::SyntaxTree) {
    let doc = tree.document();
    visitor.enter_document(&doc);

    for definition in doc.definitions() {
        walk_definition(visitor, &definition);
    }

    visitor.exit_document(&doc);
}

/// Walk a single definition. Type-system definitions are ignored.
pub fn walk_definition<V: CstVisitor + ?Sized>(visitor: &mut V, def: &cst::Definition) {
    match def {
        cst::Definition::OperationDefinition(op) => walk_operation(visitor, op),
        cst::Definition::FragmentDefinition(frag) => walk_fragment_definition(visitor, frag),
        _ => {}
    }
}

/// Walk an operation definition.
pub fn walk_operation<V: CstVisitor + ?Sized>(visitor: &mut V, op: &cst::OperationDefinition) {
    visitor.enter_operation(op);

    if let Some(var_defs) = op.variable_definitions() {
        for var_def in var_defs.variable_definitions() {
            walk_variable_definition(visitor, &var_def);
        }
    }

    if let Some(directives) = op.directives() {
        walk_directives(visitor, &directives);
    }

    if let Some(selection_set) = op.selection_set() {
        walk_selection_set(visitor, &selection_set);
    }

    visitor.exit_operation(op);
}

/// Walk a fragment definition.
pub fn walk_fragment_definition<V: CstVisitor + ?Sized>(
    visitor: &mut V,
    frag: &cst::FragmentDefinition,
) {
    visitor.enter_fragment_definition(frag);

    if let Some(named) = frag.type_condition().and_then(|tc| tc.named_type()) {
        visitor.visit_named_type(&named);
    }

    if let Some(directives) = frag.directives() {
        walk_directives(visitor, &directives);
    }

    if let Some(selection_set) = frag.selection_set() {
        walk_selection_set(visitor, &selection_set);
    }

    visitor.exit_fragment_definition(frag);
}

/// Walk a selection set.
pub fn walk_selection_set<V: CstVisitor + ?Sized>(visitor: &mut V, set: &cst::SelectionSet) {
    visitor.enter_selection_set(set);

    for selection in set.selections() {
        match selection {
            cst::Selection::Field(field) => walk_field(visitor, &field),
            cst::Selection::FragmentSpread(spread) => walk_fragment_spread(visitor, &spread),
            cst::Selection::InlineFragment(inline) => walk_inline_fragment(visitor, &inline),
        }
    }

    visitor.exit_selection_set(set);
}

/// Walk a field selection.
pub fn walk_field<V: CstVisitor + ?Sized>(visitor: &mut V, field: &cst::Field) {
    visitor.enter_field(field);

    if let Some(arguments) = field.arguments() {
        walk_arguments(visitor, &arguments);
    }

    if let Some(directives) = field.directives() {
        walk_directives(visitor, &directives);
    }

    if let Some(selection_set) = field.selection_set() {
        walk_selection_set(visitor, &selection_set);
    }

    visitor.exit_field(field);
}

/// Walk a fragment spread.
pub fn walk_fragment_spread<V: CstVisitor + ?Sized>(visitor: &mut V, spread: &cst::FragmentSpread) {
    visitor.visit_fragment_spread(spread);

    if let Some(directives) = spread.directives() {
        walk_directives(visitor, &directives);
    }
}

/// Walk an inline fragment.
pub fn walk_inline_fragment<V: CstVisitor + ?Sized>(visitor: &mut V, inline: &cst::InlineFragment) {
    visitor.enter_inline_fragment(inline);

    if let Some(named) = inline.type_condition().and_then(|tc| tc.named_type()) {
        visitor.visit_named_type(&named);
    }

    if let Some(directives) = inline.directives() {
        walk_directives(visitor, &directives);
    }

    if let Some(selection_set) = inline.selection_set() {
        walk_selection_set(visitor, &selection_set);
    }

    visitor.exit_inline_fragment(inline);
}

/// Walk arguments.
pub fn walk_arguments<V: CstVisitor + ?Sized>(visitor: &mut V, args: &cst::Arguments) {
    for arg in args.arguments() {
        visitor.enter_argument(&arg);
        if let Some(value) = arg.value() {
            walk_value(visitor, &value);
        }
        visitor.exit_argument(&arg);
    }
}

/// Walk directives.
pub fn walk_directives<V: CstVisitor + ?Sized>(visitor: &mut V, directives: &cst::Directives) {
    for directive in directives.directives() {
        visitor.enter_directive(&directive);
        if let Some(arguments) = directive.arguments() {
            walk_arguments(visitor, &arguments);
        }
        visitor.exit_directive(&directive);
    }
}

/// Walk a variable definition.
pub fn walk_variable_definition<V: CstVisitor + ?Sized>(
    visitor: &mut V,
    var_def: &cst::VariableDefinition,
) {
    visitor.enter_variable_definition(var_def);

    if let Some(var) = var_def.variable() {
        visitor.visit_variable(&var);
    }

    if let Some(ty) = var_def.ty() {
        walk_type(visitor, &ty);
    }

    if let Some(value) = var_def.default_value().and_then(|default| default.value()) {
        walk_value(visitor, &value);
    }

    if let Some(directives) = var_def.directives() {
        walk_directives(visitor, &directives);
    }

    visitor.exit_variable_definition(var_def);
}

/// Walk a value (recursively handles lists and objects).
pub fn walk_value<V: CstVisitor + ?Sized>(visitor: &mut V, value: &cst::Value) {
    match value {
        cst::Value::Variable(var) => {
            visitor.visit_variable(var);
        }
        cst::Value::EnumValue(enum_value) => {
            visitor.visit_enum_value(enum_value);
        }
        cst::Value::ListValue(list) => {
            visitor.enter_list_value(list);
            for item in list.values() {
                walk_value(visitor, &item);
            }
            visitor.exit_list_value(list);
        }
        cst::Value::ObjectValue(obj) => {
            for field in obj.object_fields() {
                visitor.enter_object_field(&field);
                if let Some(val) = field.value() {
                    walk_value(visitor, &val);
                }
                visitor.exit_object_field(&field);
            }
        }
        _ => {}
    }
}

/// Walk a type reference down to its named type.
pub fn walk_type<V: CstVisitor + ?Sized>(visitor: &mut V, ty: &cst::Type) {
    match ty {
        cst::Type::NamedType(named) => {
            visitor.visit_named_type(named);
        }
        cst::Type::ListType(list) => {
            if let Some(inner) = list.ty() {
                walk_type(visitor, &inner);
            }
        }
        cst::Type::NonNullType(non_null) => {
            if let Some(named) = non_null.named_type() {
                visitor.visit_named_type(&named);
            }
            if let Some(inner) = non_null.list_type().and_then(|list| list.ty()) {
                walk_type(visitor, &inner);
            }
        }
    }
}
