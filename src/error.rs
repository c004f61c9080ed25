use thiserror::Error;

/// A failed compile: what went wrong and the 0-based byte offset of the
/// first offending token in the source text.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at offset {offset}")]
pub struct CompileError {
    pub offset: usize,
    pub kind: ErrorKind,
}

impl CompileError {
    pub(crate) fn new(offset: usize, kind: ErrorKind) -> Self {
        Self { offset, kind }
    }

    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("malformed number literal")]
    BadNumber,
    #[error("unexpected {0}")]
    UnexpectedToken(&'static str),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("expected ')' but found {0}")]
    UnclosedParen(&'static str),
    #[error("unexpected trailing {0}")]
    TrailingInput(&'static str),
    #[error("function '{0}' must be called with '('")]
    ExpectedCall(String),
    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),
    #[error("unknown identifier: {0}")]
    UnknownIdent(String),
    #[error("too many arguments to '{name}': expected {expected}")]
    TooManyArgs { name: String, expected: usize },
    #[error("too few arguments to '{name}': expected {expected}, got {found}")]
    TooFewArgs {
        name: String,
        expected: usize,
        found: usize,
    },
}

/// Coarse grouping of compile failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// A character that starts no token, or a malformed number.
    Lex,
    /// The token sequence does not fit the grammar.
    Syntax,
    /// An unknown name, or a call whose argument count disagrees with the binding.
    Binding,
}

impl ErrorKind {
    pub fn class(&self) -> ErrorClass {
        match self {
            ErrorKind::UnexpectedChar(_) | ErrorKind::BadNumber => ErrorClass::Lex,
            ErrorKind::UnexpectedToken(_)
            | ErrorKind::UnexpectedEnd
            | ErrorKind::UnclosedParen(_)
            | ErrorKind::TrailingInput(_)
            | ErrorKind::ExpectedCall(_)
            | ErrorKind::TooDeep(_) => ErrorClass::Syntax,
            ErrorKind::UnknownIdent(_)
            | ErrorKind::TooManyArgs { .. }
            | ErrorKind::TooFewArgs { .. } => ErrorClass::Binding,
        }
    }
}
