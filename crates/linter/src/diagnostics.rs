use crate::node::{Node, NodeRef};

/// Byte offset range in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OffsetRange {
    pub start: usize,
    pub end: usize,
}

impl std::fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl OffsetRange {
    /// Create a new offset range
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Severity attached to a reported violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LintSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A rule violation found during a validation pass.
///
/// `nodes` holds the offending document nodes (kind plus byte range) so a
/// host can map the violation back to source locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Human-readable message
    pub message: String,
    /// Rule identifier (e.g., `"no_deprecated_fields"`)
    pub rule: &'static str,
    /// Severity (from rule default or config override)
    pub severity: LintSeverity,
    pub nodes: Vec<NodeRef>,
}

impl ValidationError {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        rule: &'static str,
        severity: LintSeverity,
        nodes: Vec<NodeRef>,
    ) -> Self {
        Self {
            message: message.into(),
            rule,
            severity,
            nodes,
        }
    }

    /// Range of the first offending node, if any
    #[must_use]
    pub fn range(&self) -> Option<OffsetRange> {
        self.nodes.first().map(|node| node.range)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.rule, self.message)
    }
}

/// Append-only list of violations for a single validation pass.
///
/// Errors keep report order and are never deduplicated.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<ValidationError>,
}

impl ErrorCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record a violation against a single node
    pub fn report(
        &mut self,
        message: impl Into<String>,
        rule: &'static str,
        severity: LintSeverity,
        node: Node<'_>,
    ) {
        self.push(ValidationError::new(
            message,
            rule,
            severity,
            vec![node.to_ref()],
        ));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a ErrorCollector {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
