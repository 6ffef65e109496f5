//! Array literal detection.
//!
//! `[` is ambiguous: it opens a short array literal (`[1, 2]`, `[$a, $b] = …`) or an index access
//! (`$a[1]`, `f()[0]`, `"str"[0]`). `array` is a literal only when a `(` follows.

use super::{TokensAnalyzer, TrailingNewlinePolicy};
use crate::diagnostics::AnalysisResult;
use crate::lexer::TokenKind;
use chisel_core::lang::keywords::KeywordId;
use chisel_core::lang::punctuation::PunctuationId;

impl TokensAnalyzer<'_> {
    /// Whether the token at `index` opens an array literal. Any other token answers `false`.
    pub fn is_array(&self, index: usize) -> AnalysisResult<bool> {
        Ok(match self.stream.kind_at(index)? {
            TokenKind::Keyword(KeywordId::Array) => self.next_is(index, |k| k.is_punctuation(PunctuationId::LParen)),
            TokenKind::Punctuation(PunctuationId::LBracket) => match self.prev(index) {
                Some(p) => !self.ends_subscript_target(p)?,
                None => true,
            },
            _ => false,
        })
    }

    /// Whether the array literal opened at `index` spans more than one line.
    ///
    /// ## Notes
    /// - Line breaks are counted strictly between the brackets; `\r\n` counts once.
    /// - Under [`TrailingNewlinePolicy::Ignore`], `[1, 2,\n]` is single-line: the only break sits right
    ///   before the closer, after a trailing comma.
    ///
    /// ## Errors
    /// - [`crate::diagnostics::AnalysisError::InvalidQuery`] if `index` does not open an array literal.
    pub fn is_array_multiline(&self, index: usize) -> AnalysisResult<bool> {
        if !self.is_array(index)? {
            return Err(self.invalid_query(index, "an array literal"));
        }
        let open = if self.kind(index).is_keyword(KeywordId::Array) {
            self.stream.next_significant(index)?
        } else {
            index
        };
        let close = self.stream.matching_bracket(open)?;
        let breaks: usize = self.stream.tokens()[open + 1..close]
            .iter()
            .map(|t| line_breaks(&t.text))
            .sum();
        if breaks == 0 {
            return Ok(false);
        }
        if breaks == 1
            && self.config.trailing_comma_newline == TrailingNewlinePolicy::Ignore
            && self.is_trailing_comma_break(open, close)
        {
            return Ok(false);
        }
        Ok(true)
    }

    /// Tokens after which `[` indexes rather than opens a literal.
    fn ends_subscript_target(&self, index: usize) -> AnalysisResult<bool> {
        Ok(match self.kind(index) {
            TokenKind::Variable | TokenKind::Ident | TokenKind::StringVarName | TokenKind::ConstantString => true,
            TokenKind::Punctuation(PunctuationId::RBracket | PunctuationId::DoubleQuote) => true,
            TokenKind::Punctuation(PunctuationId::RParen) => !self.closes_control_condition(index)?,
            TokenKind::Punctuation(PunctuationId::RBrace) => self.closes_expression_brace(index)?,
            _ => false,
        })
    }

    fn is_trailing_comma_break(&self, open: usize, close: usize) -> bool {
        let before = close - 1;
        if before <= open {
            return false;
        }
        let token = &self.stream.tokens()[before];
        token.kind == TokenKind::Whitespace
            && line_breaks(&token.text) == 1
            && self.prev_is(close, |k| k.is_punctuation(PunctuationId::Comma))
    }
}

fn line_breaks(text: &str) -> usize {
    text.replace("\r\n", "\n").chars().filter(|c| matches!(c, '\n' | '\r')).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::AnalyzerConfig;
    use crate::stream::TokenStream;

    fn stream(source: &str) -> TokenStream {
        TokenStream::from_source(source).unwrap()
    }

    #[test]
    fn short_and_long_literals() {
        let s = stream("<?php $a = [1]; $b = array(1);");
        let a = TokensAnalyzer::new(&s);
        assert!(a.is_array(5).unwrap());
        let long = s.iter().position(|t| t.text == "array").unwrap();
        assert!(a.is_array(long).unwrap());
    }

    #[test]
    fn subscripts_are_not_literals() {
        let s = stream("<?php $a[0]; f()[1]; $b[0][1]; 'x'[0];");
        let a = TokensAnalyzer::new(&s);
        for (i, token) in s.iter().enumerate() {
            if token.text == "[" {
                assert!(!a.is_array(i).unwrap(), "[ at {i}");
            }
        }
    }

    #[test]
    fn destructuring_after_control_condition_is_a_literal() {
        let s = stream("<?php if ($a) [$b, $c] = f(); foreach ($l as $p) [$q] = $p; f($a)[0];");
        let a = TokensAnalyzer::new(&s);
        let opens: Vec<bool> = s
            .iter()
            .enumerate()
            .filter(|(_, t)| t.text == "[")
            .map(|(i, _)| a.is_array(i).unwrap())
            .collect();
        assert_eq!(opens, vec![true, true, false]);
    }

    #[test]
    fn destructuring_is_a_literal() {
        let s = stream("<?php [$a, $b] = $c;");
        assert!(TokensAnalyzer::new(&s).is_array(1).unwrap());
    }

    #[test]
    fn multiline() {
        let s = stream("<?php $a = [\n    1,\n    2,\n];");
        assert!(TokensAnalyzer::new(&s).is_array_multiline(5).unwrap());

        let s = stream("<?php $a = [1, 2];");
        assert!(!TokensAnalyzer::new(&s).is_array_multiline(5).unwrap());
    }

    #[test]
    fn crlf_counts_once() {
        assert_eq!(line_breaks("\r\n\r\n"), 2);
        assert_eq!(line_breaks("\r"), 1);
    }

    #[test]
    fn trailing_comma_newline_policy() {
        let s = stream("<?php $a = [1, 2,\n];");
        let ignore = TokensAnalyzer::new(&s);
        assert!(!ignore.is_array_multiline(5).unwrap());

        let count = TokensAnalyzer::with_config(
            &s,
            AnalyzerConfig::new().with_trailing_comma_newline(TrailingNewlinePolicy::Count),
        );
        assert!(count.is_array_multiline(5).unwrap());
    }

    #[test]
    fn non_array_multiline_query_is_rejected() {
        let s = stream("<?php $a[0];");
        assert!(TokensAnalyzer::new(&s).is_array_multiline(2).is_err());
    }
}
