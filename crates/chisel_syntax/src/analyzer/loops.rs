//! `do … while` pairing.

use super::TokensAnalyzer;
use crate::diagnostics::AnalysisResult;
use crate::lexer::TokenKind;
use chisel_core::lang::keywords::KeywordId;
use chisel_core::lang::punctuation::{BracketSide, PunctuationId};

impl TokensAnalyzer<'_> {
    /// Whether the `while` at `index` is the trailing condition of a `do` loop rather than the head of
    /// a `while` loop.
    ///
    /// ## Notes
    /// - `do { … } while (…)`: the `}` before `while` closes a block opened right after `do`.
    /// - `do stmt; while (…)`: walking back from the `;` over whole bracket groups reaches `do` before
    ///   any statement boundary.
    ///
    /// ## Errors
    /// - [`crate::diagnostics::AnalysisError::InvalidQuery`] if the token is not `while`.
    pub fn is_while_part_of_do_while(&self, index: usize) -> AnalysisResult<bool> {
        if !self.stream.kind_at(index)?.is_keyword(KeywordId::While) {
            return Err(self.invalid_query(index, "`while`"));
        }
        let Some(prev) = self.prev(index) else {
            return Ok(false);
        };
        match self.kind(prev) {
            TokenKind::Punctuation(PunctuationId::RBrace) => {
                let open = self.stream.matching_bracket(prev)?;
                Ok(self.prev_is(open, |k| k.is_keyword(KeywordId::Do)))
            }
            TokenKind::Punctuation(PunctuationId::Semicolon) => self.reaches_do_before_boundary(prev),
            _ => Ok(false),
        }
    }

    fn reaches_do_before_boundary(&self, semicolon: usize) -> AnalysisResult<bool> {
        let mut i = semicolon;
        while let Some(p) = self.prev(i) {
            let kind = self.kind(p);
            if kind.is_keyword(KeywordId::Do) {
                return Ok(true);
            }
            if kind.is_punctuation(PunctuationId::Semicolon) || kind.is_open_tag() {
                return Ok(false);
            }
            i = match kind.bracket() {
                Some((_, BracketSide::Close)) => {
                    if kind.is_punctuation(PunctuationId::RBrace) && !self.closes_expression_brace(p)? {
                        return Ok(false);
                    }
                    self.stream.matching_bracket(p)?
                }
                Some((_, BracketSide::Open)) => return Ok(false),
                None => p,
            };
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::TokenStream;

    fn stream(source: &str) -> TokenStream {
        TokenStream::from_source(source).unwrap()
    }

    fn whiles(s: &TokenStream) -> Vec<bool> {
        let a = TokensAnalyzer::new(s);
        s.iter()
            .enumerate()
            .filter(|(_, t)| t.kind.is_keyword(KeywordId::While))
            .map(|(i, _)| a.is_while_part_of_do_while(i).unwrap())
            .collect()
    }

    #[test]
    fn block_do_while() {
        let s = stream("<?php do { $i++; } while ($i < 3); while ($j) {}");
        assert_eq!(whiles(&s), vec![true, false]);
    }

    #[test]
    fn braceless_do_while() {
        let s = stream("<?php do $i++; while ($i < 3); while ($j);");
        assert_eq!(whiles(&s), vec![true, false]);
    }

    #[test]
    fn braceless_body_with_call() {
        let s = stream("<?php do f($a[0], ${'b'}); while (g());");
        assert_eq!(whiles(&s), vec![true]);
    }

    #[test]
    fn braceless_body_ending_in_closure_or_match() {
        let s = stream("<?php do $f = function () { return 1; }; while ($g); do $x = match ($a) { default => 1 }; while ($x);");
        assert_eq!(whiles(&s), vec![true, true]);
    }

    #[test]
    fn braceless_body_after_block_statement() {
        let s = stream("<?php if ($a) { $b = 1; } $c++; while ($d);");
        assert_eq!(whiles(&s), vec![false]);
    }

    #[test]
    fn while_after_while_block() {
        let s = stream("<?php while ($a) { $a--; } while ($b) {}");
        assert_eq!(whiles(&s), vec![false, false]);
    }

    #[test]
    fn non_while_is_rejected() {
        let s = stream("<?php do {} while (0);");
        assert!(TokensAnalyzer::new(&s).is_while_part_of_do_while(1).is_err());
    }
}
