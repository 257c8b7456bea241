//! Schema type context tracked while walking a document.

use apollo_parser::cst;
use graphql_apollo_ext::operation_kind;
use graphql_schema::{
    type_ref_from_cst, DirectiveDef, EnumValueDef, FieldDef, Schema, TypeDef, TypeDefKind,
    TypeDescriptor, TypeRef,
};

/// Read-only view of the schema types in scope at the node being visited.
///
/// Every accessor returns `None` when the type could not be resolved at that
/// point (an operation without a root type, an unknown field, a value whose
/// input type is unknown). Rules treat `None` as "does not apply".
pub trait TypeContext<'s> {
    /// Output type of the current node: the root type inside an operation,
    /// the type condition inside a fragment, the return type inside a field.
    fn current_type(&self) -> Option<&TypeDescriptor<'s>>;

    /// Composite type that owns the selections being visited
    fn current_parent_type(&self) -> Option<&'s TypeDef>;

    /// Definition of the field being visited
    fn current_field_def(&self) -> Option<&'s FieldDef>;

    /// Expected input type of the argument, variable or value being visited
    fn current_input_type(&self) -> Option<&TypeDescriptor<'s>>;

    /// Enum value definition of the enum literal being visited
    fn current_enum_value(&self) -> Option<&'s EnumValueDef>;
}

/// Stack-based tracker implementing [`TypeContext`].
///
/// The walker calls `enter_*` before dispatching a node to the rules and the
/// matching `leave_*` after its children have been visited.
#[derive(Debug)]
pub struct TypeInfo<'s> {
    schema: &'s Schema,
    type_stack: Vec<Option<TypeDescriptor<'s>>>,
    parent_type_stack: Vec<Option<&'s TypeDef>>,
    field_def_stack: Vec<Option<&'s FieldDef>>,
    input_type_stack: Vec<Option<TypeDescriptor<'s>>>,
    directive: Option<&'s DirectiveDef>,
    enum_value: Option<&'s EnumValueDef>,
}

impl<'s> TypeContext<'s> for TypeInfo<'s> {
    fn current_type(&self) -> Option<&TypeDescriptor<'s>> {
        self.type_stack.last().and_then(Option::as_ref)
    }

    fn current_parent_type(&self) -> Option<&'s TypeDef> {
        self.parent_type_stack.last().copied().flatten()
    }

    fn current_field_def(&self) -> Option<&'s FieldDef> {
        self.field_def_stack.last().copied().flatten()
    }

    fn current_input_type(&self) -> Option<&TypeDescriptor<'s>> {
        self.input_type_stack.last().and_then(Option::as_ref)
    }

    fn current_enum_value(&self) -> Option<&'s EnumValueDef> {
        self.enum_value
    }
}

impl<'s> TypeInfo<'s> {
    #[must_use]
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            type_stack: Vec::new(),
            parent_type_stack: Vec::new(),
            field_def_stack: Vec::new(),
            input_type_stack: Vec::new(),
            directive: None,
            enum_value: None,
        }
    }

    pub fn enter_operation(&mut self, op: &cst::OperationDefinition) {
        let root = self
            .schema
            .root_type(operation_kind(op))
            .filter(|def| def.kind == TypeDefKind::Object)
            .map(TypeDescriptor::Named);
        self.type_stack.push(root);
    }

    pub fn leave_operation(&mut self) {
        self.type_stack.pop();
    }

    pub fn enter_fragment_definition(&mut self, frag: &cst::FragmentDefinition) {
        let ty = self.type_condition(frag.type_condition());
        self.type_stack.push(ty);
    }

    pub fn leave_fragment_definition(&mut self) {
        self.type_stack.pop();
    }

    pub fn enter_inline_fragment(&mut self, inline: &cst::InlineFragment) {
        let ty = match inline.type_condition() {
            Some(condition) => self.type_condition(Some(condition)),
            None => self
                .current_type()
                .map(|ty| TypeDescriptor::Named(ty.named_type())),
        };
        self.type_stack.push(ty);
    }

    pub fn leave_inline_fragment(&mut self) {
        self.type_stack.pop();
    }

    pub fn enter_selection_set(&mut self) {
        let parent = self
            .current_type()
            .map(TypeDescriptor::named_type)
            .filter(|def| def.kind.is_composite());
        self.parent_type_stack.push(parent);
    }

    pub fn leave_selection_set(&mut self) {
        self.parent_type_stack.pop();
    }

    pub fn enter_field(&mut self, field: &cst::Field) {
        let field_def = self.current_parent_type().and_then(|parent| {
            let name = field.name()?;
            self.schema.field_def(parent, name.text().as_str())
        });
        let ty = field_def
            .and_then(|def| self.schema.resolve(&def.type_ref))
            .filter(|ty| is_output_type(ty.named_type()));

        self.field_def_stack.push(field_def);
        self.type_stack.push(ty);
    }

    pub fn leave_field(&mut self) {
        self.field_def_stack.pop();
        self.type_stack.pop();
    }

    pub fn enter_directive(&mut self, directive: &cst::Directive) {
        self.directive = directive
            .name()
            .and_then(|name| self.schema.directive(name.text().as_str()));
    }

    pub fn leave_directive(&mut self) {
        self.directive = None;
    }

    pub fn enter_variable_definition(&mut self, var_def: &cst::VariableDefinition) {
        let ty = var_def
            .ty()
            .and_then(|ty| type_ref_from_cst(&ty))
            .and_then(|ty| self.resolve_input(&ty));
        self.input_type_stack.push(ty);
    }

    pub fn leave_variable_definition(&mut self) {
        self.input_type_stack.pop();
    }

    /// Arguments resolve against the active directive, else the current field.
    pub fn enter_argument(&mut self, arg: &cst::Argument) {
        let arguments = match self.directive {
            Some(directive) => Some(&directive.arguments),
            None => self.current_field_def().map(|def| &def.arguments),
        };
        let ty = arg
            .name()
            .and_then(|name| arguments?.get(name.text().as_str()))
            .and_then(|arg_def| self.resolve_input(&arg_def.type_ref));
        self.input_type_stack.push(ty);
    }

    pub fn leave_argument(&mut self) {
        self.input_type_stack.pop();
    }

    pub fn enter_list_value(&mut self) {
        let item = self.current_input_type().map(|ty| match ty.nullable() {
            TypeDescriptor::List(item) => (**item).clone(),
            other => other.clone(),
        });
        self.input_type_stack.push(item);
    }

    pub fn leave_list_value(&mut self) {
        self.input_type_stack.pop();
    }

    pub fn enter_object_field(&mut self, field: &cst::ObjectField) {
        let ty = self
            .current_input_type()
            .map(TypeDescriptor::named_type)
            .and_then(|object| {
                let name = field.name()?;
                object.input_field(name.text().as_str())
            })
            .and_then(|input_field| self.resolve_input(&input_field.type_ref));
        self.input_type_stack.push(ty);
    }

    pub fn leave_object_field(&mut self) {
        self.input_type_stack.pop();
    }

    pub fn enter_enum_value(&mut self, value: &cst::EnumValue) {
        self.enum_value = self
            .current_input_type()
            .map(TypeDescriptor::named_type)
            .and_then(|enum_type| {
                let name = value.name()?;
                enum_type.enum_value(name.text().as_str())
            });
    }

    pub fn leave_enum_value(&mut self) {
        self.enum_value = None;
    }

    fn type_condition(&self, condition: Option<cst::TypeCondition>) -> Option<TypeDescriptor<'s>> {
        let name = condition?.named_type()?.name()?;
        self.schema
            .named(name.text().as_str())
            .filter(|ty| is_output_type(ty.named_type()))
    }

    fn resolve_input(&self, ty: &TypeRef) -> Option<TypeDescriptor<'s>> {
        self.schema
            .resolve(ty)
            .filter(|ty| is_input_type(ty.named_type()))
    }
}

fn is_output_type(def: &TypeDef) -> bool {
    def.kind != TypeDefKind::InputObject
}

fn is_input_type(def: &TypeDef) -> bool {
    matches!(
        def.kind,
        TypeDefKind::Scalar | TypeDefKind::Enum | TypeDefKind::InputObject
    )
}
