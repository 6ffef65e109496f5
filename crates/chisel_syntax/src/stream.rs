//! Random-access token buffer.
//!
//! A [`TokenStream`] is built once per analysis unit and then only read: every query in
//! [`crate::analyzer`] takes the stream and an explicit index. Rewriting code produces new source text and
//! re-lexes it into a fresh stream.
//!
//! ## Notes
//! - Positions are contiguous: `stream.token(i)?.position == i` for every `i`.
//! - Whitespace and comments are *insignificant*; the `*_significant` lookups skip them.
//! - Index checks return [`AnalysisError::OutOfRange`] instead of panicking.

use crate::diagnostics::{AnalysisError, AnalysisResult, LexError};
use crate::lexer::{self, Token, TokenKind};

/// Ordered, index-addressable sequence of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Build a stream, renumbering token positions to match their index.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        for (i, token) in tokens.iter_mut().enumerate() {
            token.position = i;
        }
        Self { tokens }
    }

    /// Lex `source` with the reference lexer and wrap the result.
    pub fn from_source(source: &str) -> Result<Self, Vec<LexError>> {
        lexer::lex(source).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Concatenated token text; equal to the lexed source for reference-lexer streams.
    pub fn source(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    // ========================================================================
    // Indexed access
    // ========================================================================

    pub fn token(&self, index: usize) -> AnalysisResult<&Token> {
        self.tokens.get(index).ok_or(AnalysisError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn kind_at(&self, index: usize) -> AnalysisResult<TokenKind> {
        self.token(index).map(|t| t.kind)
    }

    pub fn text_at(&self, index: usize) -> AnalysisResult<&str> {
        self.token(index).map(|t| t.text.as_str())
    }

    /// `false` for whitespace and comments.
    pub fn is_significant(&self, index: usize) -> AnalysisResult<bool> {
        self.token(index).map(|t| !t.is_trivia())
    }

    // ========================================================================
    // Significant-token navigation
    // ========================================================================

    /// Index of the nearest significant token after `index`.
    ///
    /// ## Errors
    /// - [`AnalysisError::OutOfRange`] if `index` is outside the stream or no significant token follows it.
    pub fn next_significant(&self, index: usize) -> AnalysisResult<usize> {
        self.token(index)?;
        self.next_significant_opt(index).ok_or(AnalysisError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Index of the nearest significant token before `index`.
    ///
    /// ## Errors
    /// - [`AnalysisError::OutOfRange`] if `index` is outside the stream or no significant token precedes it.
    pub fn previous_significant(&self, index: usize) -> AnalysisResult<usize> {
        self.token(index)?;
        self.prev_significant_opt(index).ok_or(AnalysisError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Like [`Self::next_significant`], with `None` at the end of the stream.
    pub fn next_significant_opt(&self, index: usize) -> Option<usize> {
        let start = index.checked_add(1)?;
        self.tokens
            .get(start..)?
            .iter()
            .position(|t| !t.is_trivia())
            .map(|offset| start + offset)
    }

    /// Like [`Self::previous_significant`], with `None` at the start of the stream.
    pub fn prev_significant_opt(&self, index: usize) -> Option<usize> {
        let end = index.min(self.len());
        self.tokens[..end].iter().rposition(|t| !t.is_trivia())
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
