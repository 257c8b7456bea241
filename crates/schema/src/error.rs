use thiserror::Error;

/// Errors produced while building a [`Schema`](crate::Schema) from SDL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("syntax error at offset {offset}: {message}")]
    Syntax { message: String, offset: usize },

    #[error("type `{0}` is defined more than once")]
    DuplicateType(String),

    #[error("directive `@{0}` is defined more than once")]
    DuplicateDirective(String),

    #[error("cannot extend type `{0}` because it is not defined")]
    ExtensionOfUnknownType(String),

    #[error("root operation type `{0}` is not defined")]
    UnknownRootType(String),
}
