//! Token types for the PHP token stream.
//!
//! The stream uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (matched case-insensitively)
//! - `Operator(OperatorId)` for symbol operators
//! - `Punctuation(PunctuationId)` for delimiters, separators and interpolation markers
//!
//! ## Notes
//! - ID-bearing kinds avoid stringly-typed checks in the analyzer and fixers.
//! - The raw lexeme is kept on [`Token::text`] so rewriting can reproduce the source byte for byte.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::span::Span;
use chisel_core::lang::keywords::{self, KeywordId};
use chisel_core::lang::operators::OperatorId;
use chisel_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token in a PHP token stream.
///
/// ## Notes
/// - Keyword/operator/punctuation tokens carry stable IDs from `chisel_core::lang`.
/// - Word operators (`and`, `or`, `xor`, `instanceof`) are `Keyword` tokens; `TokenKind::operator_like`
///   gives the operator view of both spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Names ==========
    /// `$name`
    Variable,
    /// Bare name: function/class/constant names, `true`, `self`, namespace segments.
    Ident,
    /// The name right after `${` inside an interpolated string (`"${name}"`).
    StringVarName,

    // ========== Literals ==========
    IntLiteral,
    FloatLiteral,
    /// A string without interpolation, including its quotes.
    ConstantString,
    /// Literal text inside an interpolated string, backtick command or heredoc.
    EncapsedText,
    /// `<<<LABEL` (or `<<<"LABEL"`/`<<<'LABEL'`) plus the line break that ends it.
    HeredocStart,
    /// The closing heredoc label, including any indentation before it.
    HeredocEnd,
    /// `(int)`, `(string)`, … including inner spaces.
    Cast,

    // ========== Processing context ==========
    InlineHtml,
    /// `<?php` plus the single whitespace character that follows it.
    OpenTag,
    /// `<?=`
    OpenTagWithEcho,
    /// `?>` plus one directly following line break.
    CloseTag,

    // ========== Trivia ==========
    Whitespace,
    /// `//`, `#` and `/* */` comments.
    Comment,
    /// `/** */` comments.
    DocComment,

    // ========== Special ==========
    /// A character the lexer does not recognise; kept so the source round-trips.
    Other,
}

/// A token: its kind, raw text, byte span and position in the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    /// 0-based index in the owning stream; [`crate::stream::TokenStream::new`] renumbers it.
    pub position: usize,
}

impl Token {
    /// Construct a new token. The position is assigned when the token joins a stream.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            position: 0,
        }
    }
}

/// Resolve a word spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
