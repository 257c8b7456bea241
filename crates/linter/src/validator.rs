use crate::config::{ConfigError, LintConfig, LintSeverity as ConfigSeverity};
use crate::diagnostics::{ErrorCollector, LintSeverity, ValidationError};
use crate::node::Node;
use crate::registry;
use crate::traits::ValidationRule;
use crate::type_info::TypeInfo;
use crate::visitor::RuleDispatcher;
use apollo_parser::cst;
use graphql_apollo_ext::{walk_document, CstVisitor};
use graphql_schema::Schema;
use std::sync::Arc;

struct ConfiguredRule {
    rule: Arc<dyn ValidationRule>,
    severity: LintSeverity,
}

/// Runs a set of validation rules over executable documents
///
/// A validator holds only rules and their severities. Each call to
/// [`validate`](Self::validate) builds a fresh type tracker and error
/// collector, so one validator can check any number of documents.
#[derive(Default)]
pub struct Validator {
    rules: Vec<ConfiguredRule>,
}

impl Validator {
    /// Create a validator with no rules
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule at its default severity
    #[must_use]
    pub fn with_rule<R: ValidationRule + 'static>(mut self, rule: R) -> Self {
        let severity = rule.default_severity();
        self.add_rule(Arc::new(rule), severity);
        self
    }

    /// Add a rule at an explicit severity
    pub fn add_rule(&mut self, rule: Arc<dyn ValidationRule>, severity: LintSeverity) {
        self.rules.push(ConfiguredRule { rule, severity });
    }

    /// Build a validator from lint configuration
    ///
    /// Enabled rules are added in registry order with their configured
    /// severity and options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unknown presets or rule names and for
    /// missing or malformed rule options.
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &LintConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut validator = Self::new();
        for rule in registry::validation_rules() {
            let name = rule.name();
            let severity = match config.get_severity(name) {
                Some(ConfigSeverity::Error) => LintSeverity::Error,
                Some(ConfigSeverity::Warn) => LintSeverity::Warning,
                _ => {
                    tracing::trace!(rule = name, "Rule not enabled, skipping");
                    continue;
                }
            };
            let rule = registry::configure_rule(rule, config.get_options(name))?;
            validator.add_rule(rule, severity);
        }

        tracing::debug!(rules = ?validator.rule_names(), "Configured validator");
        Ok(validator)
    }

    /// Names of the configured rules, in dispatch order
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|configured| configured.rule.name()).collect()
    }

    /// Validate a parsed document against `schema`
    ///
    /// Violations are returned in traversal order. A document without
    /// violations yields an empty list.
    #[must_use]
    #[tracing::instrument(skip_all, fields(rules = self.rules.len()))]
    pub fn validate(
        &self,
        schema: &Schema,
        tree: &apollo_parser::SyntaxTree,
    ) -> Vec<ValidationError> {
        let mut dispatcher = RuleDispatcher::new();
        for configured in &self.rules {
            dispatcher.add(
                configured.rule.name(),
                configured.severity,
                configured.rule.visitor(),
            );
        }

        let mut walker = ValidationWalker {
            dispatcher: &dispatcher,
            type_info: TypeInfo::new(schema),
            errors: ErrorCollector::new(),
        };
        walk_document(&mut walker, tree);

        let errors = walker.errors.into_errors();
        tracing::debug!(errors = errors.len(), "Validation complete");
        errors
    }

    /// Parse `source` and validate it against `schema`
    ///
    /// Documents with syntax errors are skipped and produce no violations.
    #[must_use]
    #[tracing::instrument(skip_all, fields(len = source.len()))]
    pub fn validate_source(&self, schema: &Schema, source: &str) -> Vec<ValidationError> {
        let tree = apollo_parser::Parser::new(source).parse();

        let parse_errors = tree.errors().count();
        if parse_errors != 0 {
            tracing::debug!(parse_errors, "Document has parse errors, skipping validation");
            return Vec::new();
        }

        self.validate(schema, &tree)
    }
}

/// Drives the type tracker and rule handlers from a single document walk.
///
/// The tracker is updated before handlers see a node and unwound after the
/// node's children are visited.
struct ValidationWalker<'d, 'r, 's> {
    dispatcher: &'d RuleDispatcher<'r>,
    type_info: TypeInfo<'s>,
    errors: ErrorCollector,
}

impl ValidationWalker<'_, '_, '_> {
    fn dispatch(&mut self, node: Node<'_>) {
        self.dispatcher.dispatch(node, &self.type_info, &mut self.errors);
    }
}

impl CstVisitor for ValidationWalker<'_, '_, '_> {
    fn enter_document(&mut self, doc: &cst::Document) {
        self.dispatch(Node::Document(doc));
    }

    fn enter_operation(&mut self, op: &cst::OperationDefinition) {
        self.type_info.enter_operation(op);
        self.dispatch(Node::OperationDefinition(op));
    }

    fn exit_operation(&mut self, _op: &cst::OperationDefinition) {
        self.type_info.leave_operation();
    }

    fn enter_fragment_definition(&mut self, frag: &cst::FragmentDefinition) {
        self.type_info.enter_fragment_definition(frag);
        self.dispatch(Node::FragmentDefinition(frag));
    }

    fn exit_fragment_definition(&mut self, _frag: &cst::FragmentDefinition) {
        self.type_info.leave_fragment_definition();
    }

    fn enter_variable_definition(&mut self, var_def: &cst::VariableDefinition) {
        self.type_info.enter_variable_definition(var_def);
        self.dispatch(Node::VariableDefinition(var_def));
    }

    fn exit_variable_definition(&mut self, _var_def: &cst::VariableDefinition) {
        self.type_info.leave_variable_definition();
    }

    fn enter_selection_set(&mut self, set: &cst::SelectionSet) {
        self.type_info.enter_selection_set();
        self.dispatch(Node::SelectionSet(set));
    }

    fn exit_selection_set(&mut self, _set: &cst::SelectionSet) {
        self.type_info.leave_selection_set();
    }

    fn enter_field(&mut self, field: &cst::Field) {
        self.type_info.enter_field(field);
        self.dispatch(Node::Field(field));
    }

    fn exit_field(&mut self, _field: &cst::Field) {
        self.type_info.leave_field();
    }

    fn visit_fragment_spread(&mut self, spread: &cst::FragmentSpread) {
        self.dispatch(Node::FragmentSpread(spread));
    }

    fn enter_inline_fragment(&mut self, inline: &cst::InlineFragment) {
        self.type_info.enter_inline_fragment(inline);
        self.dispatch(Node::InlineFragment(inline));
    }

    fn exit_inline_fragment(&mut self, _inline: &cst::InlineFragment) {
        self.type_info.leave_inline_fragment();
    }

    fn enter_argument(&mut self, arg: &cst::Argument) {
        self.type_info.enter_argument(arg);
        self.dispatch(Node::Argument(arg));
    }

    fn exit_argument(&mut self, _arg: &cst::Argument) {
        self.type_info.leave_argument();
    }

    fn enter_directive(&mut self, dir: &cst::Directive) {
        self.type_info.enter_directive(dir);
        self.dispatch(Node::Directive(dir));
    }

    fn exit_directive(&mut self, _dir: &cst::Directive) {
        self.type_info.leave_directive();
    }

    fn visit_enum_value(&mut self, value: &cst::EnumValue) {
        self.type_info.enter_enum_value(value);
        self.dispatch(Node::EnumValue(value));
        self.type_info.leave_enum_value();
    }

    fn enter_list_value(&mut self, list: &cst::ListValue) {
        self.type_info.enter_list_value();
        self.dispatch(Node::ListValue(list));
    }

    fn exit_list_value(&mut self, _list: &cst::ListValue) {
        self.type_info.leave_list_value();
    }

    fn enter_object_field(&mut self, field: &cst::ObjectField) {
        self.type_info.enter_object_field(field);
        self.dispatch(Node::ObjectField(field));
    }

    fn exit_object_field(&mut self, _field: &cst::ObjectField) {
        self.type_info.leave_object_field();
    }

    fn visit_named_type(&mut self, named: &cst::NamedType) {
        self.dispatch(Node::NamedType(named));
    }
}
