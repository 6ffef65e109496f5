//! Error types for lexing and token-stream analysis.
//!
//! Both error families integrate with [`miette`] so callers can render them with source context, and carry
//! stable diagnostic codes under `chisel::lex::*` and `chisel::analysis::*`.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use crate::span::Span;

/// A lexical error encountered by the reference lexer.
///
/// The lexer keeps scanning after an error so that every problem in a file is reported at once.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(chisel::lex::error))]
pub struct LexError {
    /// The kind of lexical error.
    #[source]
    pub kind: LexErrorKind,
    /// The source location of the error.
    #[label("starts here")]
    pub span: Span,
}

impl LexError {
    #[must_use]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    #[must_use]
    pub fn unterminated_string(span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedString, span)
    }

    #[must_use]
    pub fn unterminated_comment(span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedComment, span)
    }

    #[must_use]
    pub fn unterminated_heredoc(label: &str, span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedHeredoc(label.to_string()), span)
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated block comment")]
    UnterminatedComment,

    /// The closing label of a heredoc/nowdoc was never found.
    #[error("unterminated heredoc, expected closing label `{0}`")]
    UnterminatedHeredoc(String),
}

/// A failed structural query against a [`crate::stream::TokenStream`].
///
/// ## Notes
/// - Queries never guess: an index outside the stream, an index of the wrong token kind, or a bracket that
///   cannot be paired are all reported instead of producing a classification.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum AnalysisError {
    #[error("query at token {index} runs past the ends of a stream of {len} tokens")]
    #[diagnostic(code(chisel::analysis::out_of_range))]
    OutOfRange { index: usize, len: usize },

    #[error("token {index} is `{found}`, expected {expected}")]
    #[diagnostic(code(chisel::analysis::invalid_query))]
    InvalidQuery {
        index: usize,
        expected: &'static str,
        found: String,
    },

    #[error("bracket at token {index} has no matching counterpart")]
    #[diagnostic(
        code(chisel::analysis::unmatched_bracket),
        help("the token stream is not well-formed; re-lex the source after rewriting")
    )]
    UnmatchedBracket { index: usize },
}

/// Result alias for analysis queries.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
