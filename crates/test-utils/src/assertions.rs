//! Snapshot formatting for validation errors
//!
//! Every helper numbers its entries from 1 and renders an empty list as
//! `(no diagnostics)`, so inline snapshots stay short and stable.

const EMPTY: &str = "(no diagnostics)";

fn numbered<I>(lines: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let rendered: Vec<String> = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| format!("[{}] {line}", i + 1))
        .collect();

    if rendered.is_empty() {
        EMPTY.to_string()
    } else {
        rendered.join("\n")
    }
}

/// Render errors with their `Display` form: `severity [rule]: message`.
///
/// ```ignore
/// let errors = validator.validate_source(&schema, source);
/// insta::assert_snapshot!(format_diagnostics(&errors));
/// ```
pub fn format_diagnostics<D: std::fmt::Display>(diagnostics: &[D]) -> String {
    numbered(diagnostics)
}

/// Render bare messages, leaving out rule and severity.
pub fn format_diagnostic_messages<T: AsRef<str>>(messages: &[T]) -> String {
    numbered(messages.iter().map(AsRef::as_ref))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lists() {
        let empty: Vec<String> = vec![];
        assert_eq!(format_diagnostics(&empty), EMPTY);
        assert_eq!(format_diagnostic_messages(&empty), EMPTY);
    }

    #[test]
    fn test_entries_are_numbered() {
        assert_eq!(
            format_diagnostics(&["error [a]: first"]),
            "[1] error [a]: first"
        );
        assert_eq!(
            format_diagnostic_messages(&["Error 1", "Error 2"]),
            "[1] Error 1\n[2] Error 2"
        );
    }
}
