//! Rule handler registration and dispatch.

use crate::diagnostics::{ErrorCollector, LintSeverity};
use crate::node::{Node, NodeKind};
use crate::type_info::TypeContext;
use std::collections::HashMap;

/// A rule callback for one node kind
pub type Handler<'r> = Box<dyn Fn(&mut ValidationContext<'_, '_>, Node<'_>) + 'r>;

/// What a handler sees while a node is visited: the schema type context and
/// a way to report violations attributed to its rule.
pub struct ValidationContext<'a, 's> {
    types: &'a dyn TypeContext<'s>,
    errors: &'a mut ErrorCollector,
    rule: &'static str,
    severity: LintSeverity,
}

impl<'a, 's> ValidationContext<'a, 's> {
    #[must_use]
    pub fn new(
        types: &'a dyn TypeContext<'s>,
        errors: &'a mut ErrorCollector,
        rule: &'static str,
        severity: LintSeverity,
    ) -> Self {
        Self {
            types,
            errors,
            rule,
            severity,
        }
    }

    /// Schema type context for the node being visited
    #[must_use]
    pub fn types(&self) -> &'a dyn TypeContext<'s> {
        self.types
    }

    /// Report a violation against `node`
    pub fn report(&mut self, message: impl Into<String>, node: Node<'_>) {
        self.errors.report(message, self.rule, self.severity, node);
    }
}

/// Node-kind to handler mapping contributed by one rule.
#[derive(Default)]
pub struct RuleVisitor<'r> {
    handlers: Vec<(NodeKind, Handler<'r>)>,
}

impl<'r> RuleVisitor<'r> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` to run when a node of `kind` is entered
    #[must_use]
    pub fn on<F>(mut self, kind: NodeKind, handler: F) -> Self
    where
        F: Fn(&mut ValidationContext<'_, '_>, Node<'_>) + 'r,
    {
        self.handlers.push((kind, Box::new(handler)));
        self
    }

    /// Node kinds this visitor handles, in registration order
    pub fn kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.handlers.iter().map(|(kind, _)| *kind)
    }
}

struct RegisteredHandler<'r> {
    rule: &'static str,
    severity: LintSeverity,
    handler: Handler<'r>,
}

/// Merged handlers from every rule, keyed by node kind.
///
/// For a given kind, handlers run in the order their rules were added and,
/// within a rule, the order they were registered.
#[derive(Default)]
pub struct RuleDispatcher<'r> {
    handlers: HashMap<NodeKind, Vec<RegisteredHandler<'r>>>,
}

impl<'r> RuleDispatcher<'r> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a rule's handlers, reporting under `rule` with `severity`
    pub fn add(&mut self, rule: &'static str, severity: LintSeverity, visitor: RuleVisitor<'r>) {
        for (kind, handler) in visitor.handlers {
            self.handlers
                .entry(kind)
                .or_default()
                .push(RegisteredHandler {
                    rule,
                    severity,
                    handler,
                });
        }
    }

    /// Whether any handler is registered for `kind`
    #[must_use]
    pub fn handles(&self, kind: NodeKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Run every handler registered for the node's kind
    pub fn dispatch(
        &self,
        node: Node<'_>,
        types: &dyn TypeContext<'_>,
        errors: &mut ErrorCollector,
    ) {
        let Some(handlers) = self.handlers.get(&node.kind()) else {
            return;
        };
        for registered in handlers {
            tracing::trace!(rule = registered.rule, kind = ?node.kind(), "Running handler");
            let mut ctx = ValidationContext::new(types, errors, registered.rule, registered.severity);
            (registered.handler)(&mut ctx, node);
        }
    }
}
