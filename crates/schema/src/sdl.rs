//! Schema construction from SDL source.

use crate::error::SchemaError;
use crate::schema::Schema;
use crate::types::{
    DirectiveDef, EnumValueDef, FieldDef, InputValueDef, TypeDef, TypeDefKind, TypeRef,
    DEFAULT_DEPRECATION_REASON,
};
use apollo_parser::cst::{self, CstNode};
use graphql_apollo_ext::{operation_type_kind, OperationKind};
use indexmap::IndexMap;
use std::sync::Arc;

const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

impl Schema {
    /// Build a schema from SDL.
    ///
    /// Type extensions are applied after all definitions regardless of their
    /// position in the source. Built-in scalars and directives are added when
    /// the source does not define them. Without a `schema { ... }` definition
    /// the root types default to `Query`, `Mutation` and `Subscription` when
    /// those types exist.
    #[tracing::instrument(skip(sdl), fields(len = sdl.len()))]
    pub fn from_sdl(sdl: &str) -> Result<Self, SchemaError> {
        let tree = apollo_parser::Parser::new(sdl).parse();
        if let Some(error) = tree.errors().next() {
            return Err(SchemaError::Syntax {
                message: error.message().to_string(),
                offset: error.index(),
            });
        }

        let document = tree.document();
        let mut builder = SchemaBuilder::default();
        for definition in document.definitions() {
            builder.add_definition(&definition)?;
        }
        for definition in document.definitions() {
            builder.add_extension(&definition)?;
        }

        let schema = builder.finish()?;
        tracing::debug!(
            types = schema.types.len(),
            directives = schema.directives.len(),
            "Built schema from SDL"
        );
        Ok(schema)
    }
}

#[derive(Default)]
struct SchemaBuilder {
    types: IndexMap<Arc<str>, TypeDef>,
    directives: IndexMap<Arc<str>, DirectiveDef>,
    /// Root types from an explicit `schema { ... }` definition
    roots: Option<Vec<(OperationKind, Arc<str>)>>,
}

impl SchemaBuilder {
    fn add_definition(&mut self, definition: &cst::Definition) -> Result<(), SchemaError> {
        let type_def = match definition {
            cst::Definition::ObjectTypeDefinition(obj) => output_type(
                obj.name(),
                TypeDefKind::Object,
                obj.description(),
                obj.fields_definition(),
            ),
            cst::Definition::InterfaceTypeDefinition(iface) => output_type(
                iface.name(),
                TypeDefKind::Interface,
                iface.description(),
                iface.fields_definition(),
            ),
            cst::Definition::UnionTypeDefinition(union) => {
                named_type_def(union.name(), TypeDefKind::Union, union.description())
            }
            cst::Definition::ScalarTypeDefinition(scalar) => {
                named_type_def(scalar.name(), TypeDefKind::Scalar, scalar.description())
            }
            cst::Definition::EnumTypeDefinition(enum_def) => {
                named_type_def(enum_def.name(), TypeDefKind::Enum, enum_def.description()).map(
                    |mut def| {
                        def.enum_values = enum_values(enum_def.enum_values_definition());
                        def
                    },
                )
            }
            cst::Definition::InputObjectTypeDefinition(input) => named_type_def(
                input.name(),
                TypeDefKind::InputObject,
                input.description(),
            )
            .map(|mut def| {
                def.input_fields = input_fields(input.input_fields_definition());
                def
            }),
            cst::Definition::DirectiveDefinition(dir) => {
                if let Some(directive) = directive_def(dir) {
                    if self.directives.contains_key(&directive.name) {
                        return Err(SchemaError::DuplicateDirective(directive.name.to_string()));
                    }
                    self.directives.insert(directive.name.clone(), directive);
                }
                None
            }
            cst::Definition::SchemaDefinition(schema) => {
                let roots = self.roots.get_or_insert_with(Vec::new);
                for root in schema.root_operation_type_definitions() {
                    let kind = root.operation_type().map(|op| operation_type_kind(&op));
                    let name = root.named_type().and_then(|nt| nt.name());
                    if let (Some(kind), Some(name)) = (kind, name) {
                        roots.push((kind, Arc::from(name.text().as_str())));
                    }
                }
                None
            }
            _ => None,
        };

        if let Some(def) = type_def {
            if self.types.contains_key(&def.name) {
                return Err(SchemaError::DuplicateType(def.name.to_string()));
            }
            self.types.insert(def.name.clone(), def);
        }
        Ok(())
    }

    fn add_extension(&mut self, definition: &cst::Definition) -> Result<(), SchemaError> {
        match definition {
            cst::Definition::ObjectTypeExtension(ext) => {
                let target = self.extension_target(ext.name())?;
                target.fields.extend(fields(ext.fields_definition()));
            }
            cst::Definition::InterfaceTypeExtension(ext) => {
                let target = self.extension_target(ext.name())?;
                target.fields.extend(fields(ext.fields_definition()));
            }
            cst::Definition::EnumTypeExtension(ext) => {
                let target = self.extension_target(ext.name())?;
                target
                    .enum_values
                    .extend(enum_values(ext.enum_values_definition()));
            }
            cst::Definition::InputObjectTypeExtension(ext) => {
                let target = self.extension_target(ext.name())?;
                target
                    .input_fields
                    .extend(input_fields(ext.input_fields_definition()));
            }
            _ => {}
        }
        Ok(())
    }

    fn extension_target(&mut self, name: Option<cst::Name>) -> Result<&mut TypeDef, SchemaError> {
        let name = name.map(|n| n.text().to_string()).unwrap_or_default();
        self.types
            .get_mut(name.as_str())
            .ok_or(SchemaError::ExtensionOfUnknownType(name))
    }

    fn finish(mut self) -> Result<Schema, SchemaError> {
        for scalar in BUILTIN_SCALARS {
            self.types
                .entry(Arc::from(scalar))
                .or_insert_with(|| TypeDef::new(scalar, TypeDefKind::Scalar));
        }
        for directive in builtin_directives() {
            self.directives
                .entry(directive.name.clone())
                .or_insert(directive);
        }

        let mut schema = Schema::new();
        match self.roots {
            Some(roots) => {
                for (kind, name) in roots {
                    if !self.types.contains_key(&name) {
                        return Err(SchemaError::UnknownRootType(name.to_string()));
                    }
                    let slot = match kind {
                        OperationKind::Query => &mut schema.query_type,
                        OperationKind::Mutation => &mut schema.mutation_type,
                        OperationKind::Subscription => &mut schema.subscription_type,
                    };
                    *slot = Some(name);
                }
            }
            None => {
                let default_root =
                    |name: &str| self.types.contains_key(name).then(|| Arc::from(name));
                schema.query_type = default_root("Query");
                schema.mutation_type = default_root("Mutation");
                schema.subscription_type = default_root("Subscription");
            }
        }

        schema.types = self.types;
        schema.directives = self.directives;
        Ok(schema)
    }
}

/// Convert a CST type reference into a [`TypeRef`].
///
/// Returns `None` for incomplete references (e.g. a list with no item type).
#[must_use]
pub fn type_ref_from_cst(ty: &cst::Type) -> Option<TypeRef> {
    match ty {
        cst::Type::NamedType(named) => Some(TypeRef::named(named.name()?.text().as_str())),
        cst::Type::ListType(list) => Some(type_ref_from_cst(&list.ty()?)?.list()),
        cst::Type::NonNullType(non_null) => {
            let inner = if let Some(named) = non_null.named_type() {
                TypeRef::named(named.name()?.text().as_str())
            } else {
                type_ref_from_cst(&non_null.list_type()?.ty()?)?.list()
            };
            Some(inner.non_null())
        }
    }
}

fn named_type_def(
    name: Option<cst::Name>,
    kind: TypeDefKind,
    description: Option<cst::Description>,
) -> Option<TypeDef> {
    let mut def = TypeDef::new(name?.text().as_str(), kind);
    def.description = description_text(description);
    Some(def)
}

fn output_type(
    name: Option<cst::Name>,
    kind: TypeDefKind,
    description: Option<cst::Description>,
    fields_definition: Option<cst::FieldsDefinition>,
) -> Option<TypeDef> {
    let mut def = named_type_def(name, kind, description)?;
    def.fields = fields(fields_definition);
    Some(def)
}

fn description_text(description: Option<cst::Description>) -> Option<Arc<str>> {
    description.map(|d| Arc::from(d.syntax().text().to_string().trim_matches('"').trim()))
}

fn fields(fields_definition: Option<cst::FieldsDefinition>) -> IndexMap<Arc<str>, FieldDef> {
    fields_definition
        .into_iter()
        .flat_map(|fields| fields.field_definitions())
        .filter_map(|field| field_def(&field))
        .map(|field| (field.name.clone(), field))
        .collect()
}

fn field_def(field: &cst::FieldDefinition) -> Option<FieldDef> {
    let mut def = FieldDef::new(field.name()?.text().as_str(), type_ref_from_cst(&field.ty()?)?);
    def.description = description_text(field.description());
    def.arguments = arguments(field.arguments_definition());
    (def.is_deprecated, def.deprecation_reason) = deprecation(field.directives());
    Some(def)
}

fn arguments(
    arguments_definition: Option<cst::ArgumentsDefinition>,
) -> IndexMap<Arc<str>, InputValueDef> {
    arguments_definition
        .into_iter()
        .flat_map(|args| args.input_value_definitions())
        .filter_map(|arg| input_value_def(&arg))
        .map(|arg| (arg.name.clone(), arg))
        .collect()
}

fn input_fields(
    input_fields_definition: Option<cst::InputFieldsDefinition>,
) -> IndexMap<Arc<str>, InputValueDef> {
    input_fields_definition
        .into_iter()
        .flat_map(|fields| fields.input_value_definitions())
        .filter_map(|field| input_value_def(&field))
        .map(|field| (field.name.clone(), field))
        .collect()
}

fn input_value_def(value: &cst::InputValueDefinition) -> Option<InputValueDef> {
    let mut def =
        InputValueDef::new(value.name()?.text().as_str(), type_ref_from_cst(&value.ty()?)?);
    def.description = description_text(value.description());
    def.default_value = value
        .default_value()
        .and_then(|v| v.value())
        .map(|val| Arc::from(val.syntax().text().to_string()));
    Some(def)
}

fn enum_values(
    values_definition: Option<cst::EnumValuesDefinition>,
) -> IndexMap<Arc<str>, EnumValueDef> {
    values_definition
        .into_iter()
        .flat_map(|values| values.enum_value_definitions())
        .filter_map(|value| {
            let name = value.enum_value()?.name()?;
            let mut def = EnumValueDef::new(name.text().as_str());
            def.description = description_text(value.description());
            (def.is_deprecated, def.deprecation_reason) = deprecation(value.directives());
            Some((def.name.clone(), def))
        })
        .collect()
}

fn directive_def(dir: &cst::DirectiveDefinition) -> Option<DirectiveDef> {
    Some(DirectiveDef {
        name: Arc::from(dir.name()?.text().as_str()),
        arguments: arguments(dir.arguments_definition()),
    })
}

/// Read `@deprecated` from a directive list.
///
/// A missing `reason` argument means the GraphQL default reason; an explicit
/// `reason: null` means no reason.
fn deprecation(directives: Option<cst::Directives>) -> (bool, Option<Arc<str>>) {
    let Some(deprecated) = directives.into_iter().flat_map(|d| d.directives()).find(|d| {
        d.name()
            .is_some_and(|name| name.text().as_str() == "deprecated")
    }) else {
        return (false, None);
    };

    let reason_arg = deprecated
        .arguments()
        .into_iter()
        .flat_map(|args| args.arguments())
        .find(|arg| arg.name().is_some_and(|name| name.text().as_str() == "reason"));

    let reason = match reason_arg.and_then(|arg| arg.value()) {
        None => Some(Arc::from(DEFAULT_DEPRECATION_REASON)),
        Some(cst::Value::StringValue(value)) => Some(Arc::from(String::from(&value))),
        Some(_) => None,
    };
    (true, reason)
}

fn builtin_directives() -> Vec<DirectiveDef> {
    let directive = |name: &str, args: &[(&str, TypeRef, Option<&str>)]| DirectiveDef {
        name: Arc::from(name),
        arguments: args
            .iter()
            .map(|(arg_name, ty, default)| {
                let mut arg = InputValueDef::new(arg_name, ty.clone());
                arg.default_value = default.map(Arc::from);
                (arg.name.clone(), arg)
            })
            .collect(),
    };

    vec![
        directive(
            "skip",
            &[("if", TypeRef::named("Boolean").non_null(), None)],
        ),
        directive(
            "include",
            &[("if", TypeRef::named("Boolean").non_null(), None)],
        ),
        directive(
            "deprecated",
            &[(
                "reason",
                TypeRef::named("String"),
                Some("\"No longer supported\""),
            )],
        ),
        directive(
            "specifiedBy",
            &[("url", TypeRef::named("String").non_null(), None)],
        ),
    ]
}
