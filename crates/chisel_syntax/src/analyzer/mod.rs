//! Structural queries over a [`TokenStream`].
//!
//! [`TokensAnalyzer`] borrows a stream and answers questions about one token at a time (is this `-`
//! unary? does this `[` open an array?) or about the whole stream (where are the imports? which members
//! do the type bodies declare?). Every answer is derived from the tokens around the queried index; no
//! tree is built.
//!
//! ## Notes
//! - Queries that apply to a specific token kind return [`AnalysisError::InvalidQuery`] for any other
//!   kind. The operator-role predicates are the exception: they answer `false` for non-operators.
//! - The analyzer never mutates the stream.

mod arrays;
mod classy;
mod config;
mod functions;
mod imports;
mod loops;
mod members;
mod operators;

pub use config::{AnalyzerConfig, TrailingNewlinePolicy};
pub use imports::ImportGroup;
pub use members::{ClassyElement, ClassyElementKind, MemberAttributes, Visibility};
pub use operators::OperatorRole;

use crate::diagnostics::{AnalysisError, AnalysisResult};
use crate::lexer::TokenKind;
use crate::stream::TokenStream;
use chisel_core::lang::keywords::{self, KeywordCategory, KeywordId};
use chisel_core::lang::operators::OperatorId;
use chisel_core::lang::punctuation::{BracketFamily, BracketSide, PunctuationId};

/// Read-only query engine over one token stream.
#[derive(Debug, Clone, Copy)]
pub struct TokensAnalyzer<'a> {
    stream: &'a TokenStream,
    config: AnalyzerConfig,
}

impl<'a> TokensAnalyzer<'a> {
    #[tracing::instrument(skip_all, fields(tokens = stream.len()))]
    pub fn new(stream: &'a TokenStream) -> Self {
        Self::with_config(stream, AnalyzerConfig::default())
    }

    pub fn with_config(stream: &'a TokenStream, config: AnalyzerConfig) -> Self {
        Self { stream, config }
    }

    pub fn stream(&self) -> &'a TokenStream {
        self.stream
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    // ========================================================================
    // Shared navigation
    // ========================================================================

    /// Kind of a token whose index was obtained from the stream itself.
    fn kind(&self, index: usize) -> TokenKind {
        self.stream.tokens()[index].kind
    }

    fn prev(&self, index: usize) -> Option<usize> {
        self.stream.prev_significant_opt(index)
    }

    fn next(&self, index: usize) -> Option<usize> {
        self.stream.next_significant_opt(index)
    }

    fn prev_is(&self, index: usize, predicate: impl Fn(TokenKind) -> bool) -> bool {
        self.prev(index).is_some_and(|p| predicate(self.kind(p)))
    }

    fn next_is(&self, index: usize, predicate: impl Fn(TokenKind) -> bool) -> bool {
        self.next(index).is_some_and(|n| predicate(self.kind(n)))
    }

    fn invalid_query(&self, index: usize, expected: &'static str) -> AnalysisError {
        let found = self.stream.text_at(index).unwrap_or_default().to_string();
        tracing::debug!(index, expected, found = %found, "rejected token query");
        AnalysisError::InvalidQuery {
            index,
            expected,
            found,
        }
    }

    // ========================================================================
    // Shared classification
    // ========================================================================

    /// Whether the token at `index` can be the last token of an operand.
    fn ends_value(&self, index: usize) -> AnalysisResult<bool> {
        Ok(match self.kind(index) {
            TokenKind::Variable
            | TokenKind::Ident
            | TokenKind::StringVarName
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::ConstantString
            | TokenKind::HeredocEnd => true,
            TokenKind::Keyword(k) => keywords::category(k) == KeywordCategory::MagicConstant,
            TokenKind::Punctuation(p) => match p {
                PunctuationId::DoubleQuote | PunctuationId::Backtick => true,
                PunctuationId::RBracket => !self.closes_attribute(index)?,
                PunctuationId::RParen => !self.closes_control_condition(index)?,
                PunctuationId::RBrace => self.closes_expression_brace(index)?,
                _ => false,
            },
            TokenKind::Operator(OperatorId::PlusPlus | OperatorId::MinusMinus) => {
                // `$a++ ++` ends a value iff the token before the whole run does.
                let mut before = self.prev(index);
                while let Some(p) = before.filter(|&p| is_increment(self.kind(p))) {
                    before = self.prev(p);
                }
                match before {
                    Some(p) => self.ends_value(p)?,
                    None => false,
                }
            }
            _ => false,
        })
    }

    /// `]` closing a `#[…]` attribute group.
    fn closes_attribute(&self, close: usize) -> AnalysisResult<bool> {
        let open = self.stream.matching_bracket(close)?;
        Ok(self.kind(open).is_punctuation(PunctuationId::AttributeOpen))
    }

    /// `)` closing the condition of `if (…)`, `while (…)` and similar statement heads.
    fn closes_control_condition(&self, close: usize) -> AnalysisResult<bool> {
        let open = self.stream.matching_bracket(close)?;
        Ok(self.prev_is(open, |k| {
            matches!(
                k.keyword_id(),
                Some(
                    KeywordId::If
                        | KeywordId::Elseif
                        | KeywordId::While
                        | KeywordId::For
                        | KeywordId::Foreach
                        | KeywordId::Switch
                        | KeywordId::Catch
                        | KeywordId::Declare
                )
            )
        }))
    }

    /// `}` ending an expression rather than a statement block: `${…}`, `{$…}`, `$a{…}`, `$$ {…}`, `->{…}`,
    /// `::{…}`, a `match (…) {…}` body or a closure body.
    fn closes_expression_brace(&self, close: usize) -> AnalysisResult<bool> {
        let open = self.stream.matching_bracket(close)?;
        Ok(match self.kind(open) {
            TokenKind::Punctuation(PunctuationId::DollarLBrace | PunctuationId::CurlyOpen) => true,
            TokenKind::Punctuation(PunctuationId::LBrace) => {
                self.prev_is(open, |k| {
                    k == TokenKind::Variable
                        || k.is_any_punctuation(&[
                            PunctuationId::Dollar,
                            PunctuationId::Arrow,
                            PunctuationId::NullsafeArrow,
                            PunctuationId::DoubleColon,
                        ])
                }) || self.opens_match_body(open)?
                    || self.opens_closure_body(open)?
            }
            _ => false,
        })
    }

    fn opens_match_body(&self, open: usize) -> AnalysisResult<bool> {
        let Some(p) = self.prev(open) else {
            return Ok(false);
        };
        if !self.kind(p).is_punctuation(PunctuationId::RParen) {
            return Ok(false);
        }
        let paren = self.stream.matching_bracket(p)?;
        Ok(self.prev_is(paren, |k| k.is_keyword(KeywordId::Match)))
    }

    /// Walks back over a closure header (`function &(…) use (…): ?T`) to its `function` keyword.
    fn opens_closure_body(&self, open: usize) -> AnalysisResult<bool> {
        let mut cursor = self.prev(open);
        while let Some(i) = cursor {
            cursor = match self.kind(i) {
                TokenKind::Keyword(k) if keywords::is_function(k) => return self.is_lambda(i),
                TokenKind::Punctuation(PunctuationId::RParen) => self.prev(self.stream.matching_bracket(i)?),
                TokenKind::Ident
                | TokenKind::Keyword(KeywordId::Use | KeywordId::Static | KeywordId::Array | KeywordId::Callable)
                | TokenKind::Punctuation(PunctuationId::Question | PunctuationId::Colon | PunctuationId::Backslash)
                | TokenKind::Operator(OperatorId::Amp | OperatorId::Pipe) => self.prev(i),
                _ => return Ok(false),
            };
        }
        Ok(false)
    }

    /// Innermost `(` enclosing `index`, if no other bracket family is closer.
    fn enclosing_paren(&self, index: usize) -> AnalysisResult<Option<usize>> {
        let mut i = index;
        while i > 0 {
            i -= 1;
            match self.kind(i).bracket() {
                Some((_, BracketSide::Close)) => i = self.stream.matching_bracket(i)?,
                Some((BracketFamily::Paren, BracketSide::Open)) => return Ok(Some(i)),
                Some((_, BracketSide::Open)) => return Ok(None),
                None => {}
            }
        }
        Ok(None)
    }

    /// Whether a statement can begin right after the significant token before `index`.
    fn starts_statement(&self, index: usize) -> bool {
        match self.prev(index) {
            None => true,
            Some(p) => {
                let kind = self.kind(p);
                kind.is_open_tag()
                    || kind == TokenKind::CloseTag
                    || kind.is_any_punctuation(&[
                        PunctuationId::Semicolon,
                        PunctuationId::LBrace,
                        PunctuationId::RBrace,
                    ])
            }
        }
    }
}

fn is_increment(kind: TokenKind) -> bool {
    kind.is_operator(OperatorId::PlusPlus) || kind.is_operator(OperatorId::MinusMinus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(source: &str) -> TokenStream {
        TokenStream::from_source(source).unwrap()
    }

    #[test]
    fn value_endings() {
        let s = stream("<?php if ($a) $b[1] . __LINE__ . ${'x'};");
        let a = TokensAnalyzer::new(&s);
        // `)` of an `if` condition does not end an operand
        assert!(!a.ends_value(5).unwrap());
        assert!(a.ends_value(10).unwrap());
        let line = s.iter().position(|t| t.text == "__LINE__").unwrap();
        assert!(a.ends_value(line).unwrap());
        let last_brace = s.iter().rposition(|t| t.text == "}").unwrap();
        assert!(a.ends_value(last_brace).unwrap());
    }

    #[test]
    fn block_brace_is_not_a_value() {
        let s = stream("<?php if ($a) {} -1;");
        let a = TokensAnalyzer::new(&s);
        let close = s.iter().position(|t| t.text == "}").unwrap();
        assert!(!a.ends_value(close).unwrap());
    }

    #[test]
    fn long_increment_runs_do_not_recurse() {
        let source = format!("<?php $a{}", " ++".repeat(200_000));
        let s = stream(&source);
        let a = TokensAnalyzer::new(&s);
        let last = s.len() - 1;
        assert!(a.ends_value(last).unwrap());
        assert_eq!(a.operator_role(last).unwrap(), Some(OperatorRole::UnaryPostfix));

        let bare = stream(&format!("<?php {}", "++ ".repeat(200_000)));
        let a = TokensAnalyzer::new(&bare);
        let last = bare.iter().rposition(|t| t.text == "++").unwrap();
        assert_eq!(a.operator_role(last).unwrap(), Some(OperatorRole::UnaryPrefix));
    }

    #[test]
    fn match_and_closure_bodies_end_values() {
        let s = stream("<?php $x = match($a) { default => 1 } - 1;");
        let a = TokensAnalyzer::new(&s);
        let close = s.iter().position(|t| t.text == "}").unwrap();
        assert!(a.ends_value(close).unwrap());

        let s = stream("<?php $f = function &($p) use ($q): ?int { return 1; } ; if ($a) { }");
        let a = TokensAnalyzer::new(&s);
        let first = s.iter().position(|t| t.text == "}").unwrap();
        let last = s.iter().rposition(|t| t.text == "}").unwrap();
        assert!(a.ends_value(first).unwrap());
        assert!(!a.ends_value(last).unwrap());
    }

    #[test]
    fn named_function_body_is_a_block() {
        let s = stream("<?php function f(): array { } -1;");
        let a = TokensAnalyzer::new(&s);
        let close = s.iter().position(|t| t.text == "}").unwrap();
        assert!(!a.ends_value(close).unwrap());
    }

    #[test]
    fn attribute_group_is_not_a_value() {
        let s = stream("<?php #[Pure] $x;");
        let a = TokensAnalyzer::new(&s);
        assert!(!a.ends_value(3).unwrap());
    }

    #[test]
    fn enclosing_paren_skips_nested_groups() {
        let s = stream("<?php f(g(1), [2], $x);");
        let a = TokensAnalyzer::new(&s);
        let x = s.iter().position(|t| t.text == "$x").unwrap();
        assert_eq!(a.enclosing_paren(x).unwrap(), Some(2));
        let two = s.iter().position(|t| t.text == "2").unwrap();
        assert_eq!(a.enclosing_paren(two).unwrap(), None);
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokenStream>();
        assert_send_sync::<TokensAnalyzer<'static>>();
    }

    #[test]
    fn config_is_carried() {
        let s = stream("<?php ");
        let config = AnalyzerConfig::new().with_trailing_comma_newline(TrailingNewlinePolicy::Count);
        let a = TokensAnalyzer::with_config(&s, config);
        assert_eq!(a.config().trailing_comma_newline, TrailingNewlinePolicy::Count);
        assert_eq!(a.stream().len(), 1);
    }
}
