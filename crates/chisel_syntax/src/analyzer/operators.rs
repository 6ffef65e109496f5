//! Operator role resolution.
//!
//! The registry knows each operator's possible fixities; the role at a given position depends on what
//! precedes it. `-`, `+` and `&` are binary after an operand and prefix elsewhere; `++`/`--` are postfix
//! after an operand and prefix elsewhere.

use super::TokensAnalyzer;
use crate::diagnostics::AnalysisResult;
use crate::lexer::TokenKind;
use chisel_core::lang::keywords::{self, KeywordId};
use chisel_core::lang::operators::{self, Fixity, OperatorId};

/// Grammatical role of an operator occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorRole {
    UnaryPrefix,
    UnaryPostfix,
    Binary,
}

impl TokensAnalyzer<'_> {
    /// Role of the operator at `index`.
    ///
    /// ## Returns
    /// - `Some(role)` for an operator in operand position.
    /// - `None` for a by-reference marker `&` (`function &f()`, `foreach ($a as &$v)`, `fn(&$x)`), which
    ///   is neither unary nor binary.
    ///
    /// ## Errors
    /// - [`crate::diagnostics::AnalysisError::InvalidQuery`] if the token is not an operator. Word operators
    ///   (`and`, `or`, `xor`, `instanceof`) count as operators.
    pub fn operator_role(&self, index: usize) -> AnalysisResult<Option<OperatorRole>> {
        let kind = self.stream.kind_at(index)?;
        let Some(op) = kind.operator_like() else {
            return Err(self.invalid_query(index, "an operator"));
        };
        self.role_of(index, op)
    }

    pub fn is_unary_prefix_operator(&self, index: usize) -> AnalysisResult<bool> {
        self.has_role(index, OperatorRole::UnaryPrefix)
    }

    pub fn is_unary_postfix_operator(&self, index: usize) -> AnalysisResult<bool> {
        self.has_role(index, OperatorRole::UnaryPostfix)
    }

    pub fn is_binary_operator(&self, index: usize) -> AnalysisResult<bool> {
        self.has_role(index, OperatorRole::Binary)
    }

    fn has_role(&self, index: usize, role: OperatorRole) -> AnalysisResult<bool> {
        let Some(op) = self.stream.kind_at(index)?.operator_like() else {
            return Ok(false);
        };
        Ok(self.role_of(index, op)? == Some(role))
    }

    fn role_of(&self, index: usize, op: OperatorId) -> AnalysisResult<Option<OperatorRole>> {
        let after_operand = match self.prev(index) {
            Some(p) => self.ends_value(p)?,
            None => false,
        };
        let role = match operators::fixity(op) {
            Fixity::Infix => OperatorRole::Binary,
            Fixity::Prefix => OperatorRole::UnaryPrefix,
            Fixity::PrefixOrPostfix if after_operand => OperatorRole::UnaryPostfix,
            Fixity::PrefixOrPostfix => OperatorRole::UnaryPrefix,
            Fixity::PrefixOrInfix => {
                if op == OperatorId::Amp && self.is_reference_marker(index)? {
                    return Ok(None);
                }
                if after_operand {
                    OperatorRole::Binary
                } else {
                    OperatorRole::UnaryPrefix
                }
            }
        };
        Ok(Some(role))
    }

    fn is_reference_marker(&self, index: usize) -> AnalysisResult<bool> {
        let Some(prev) = self.prev(index) else {
            return Ok(false);
        };
        let prev_kind = self.kind(prev);
        if prev_kind.keyword_id().is_some_and(keywords::is_function) || prev_kind.is_keyword(KeywordId::As) {
            return Ok(true);
        }
        let Some(paren) = self.enclosing_paren(index)? else {
            return Ok(false);
        };
        if prev_kind.is_operator(OperatorId::DoubleArrow) && self.prev_is(paren, |k| k.is_keyword(KeywordId::Foreach)) {
            return Ok(true);
        }
        Ok(self.is_parameter_list(paren)
            && self.next_is(index, |k| k == TokenKind::Variable || k.is_operator(OperatorId::Ellipsis)))
    }

    /// `(` opening the parameters of a function, closure or arrow function, or a closure's `use` list.
    fn is_parameter_list(&self, paren: usize) -> bool {
        let Some(p) = self.prev(paren) else {
            return false;
        };
        match self.kind(p) {
            TokenKind::Keyword(KeywordId::Use) => true,
            TokenKind::Keyword(k) => keywords::is_function(k),
            TokenKind::Operator(OperatorId::Amp) | TokenKind::Ident => self.follows_function_keyword(p),
            _ => false,
        }
    }

    /// `function NAME`, `function &`, `function &NAME`.
    fn follows_function_keyword(&self, index: usize) -> bool {
        let Some(p) = self.prev(index) else {
            return false;
        };
        match self.kind(p) {
            TokenKind::Keyword(k) => keywords::is_function(k),
            TokenKind::Operator(OperatorId::Amp) => self.prev_is(p, |k| k.keyword_id().is_some_and(keywords::is_function)),
            _ => false,
        }
    }
}
