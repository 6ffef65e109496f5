//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use chisel_core::lang::keywords::{self, KeywordId};
use chisel_core::lang::operators::{self, OperatorId};
use chisel_core::lang::punctuation::{self, BracketFamily, BracketSide, PunctuationId};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return the operator id for symbol operators and word operators (`and`, `instanceof`, …).
    pub fn operator_like(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            TokenKind::Keyword(k) => operators::from_keyword_spelling(keywords::as_str(*k)),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for any of the given punctuation ids.
    pub fn is_any_punctuation(&self, ids: &[PunctuationId]) -> bool {
        matches!(self, TokenKind::Punctuation(p) if ids.contains(p))
    }

    /// Bracket family and side, if this token is a bracket.
    pub fn bracket(&self) -> Option<(BracketFamily, BracketSide)> {
        self.punctuation_id().and_then(punctuation::bracket)
    }

    /// Return `true` if this token opens a bracket pair of any family.
    pub fn is_opener(&self) -> bool {
        matches!(self.bracket(), Some((_, BracketSide::Open)))
    }

    /// Return `true` if this token closes a bracket pair of any family.
    pub fn is_closer(&self) -> bool {
        matches!(self.bracket(), Some((_, BracketSide::Close)))
    }

    /// Return `true` for whitespace and comments, which the analyzer skips.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }

    /// Return `true` for `<?php` and `<?=`.
    pub fn is_open_tag(&self) -> bool {
        matches!(self, TokenKind::OpenTag | TokenKind::OpenTagWithEcho)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_like()`.
    pub fn operator_like(&self) -> Option<OperatorId> {
        self.kind.operator_like()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    /// Convenience wrapper for `self.kind.is_trivia()`.
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}
