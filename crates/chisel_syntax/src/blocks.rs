//! Bracket-pair matching.
//!
//! [`TokenStream::matching_bracket`] is the single primitive every structural query uses to step over a
//! nested region. Families are matched independently: only `(`/`)` move the depth of a paren scan, and the
//! curly family pairs `{`, `${` and `{$` with `}`.
//!
//! ## Notes
//! - Alternative-syntax blocks (`while (…): … endwhile;`) have no bracket tokens and are not paired here.
//! - Crossing a `?>`/`<?php` boundary does not affect matching; the tags are ordinary tokens.

use crate::diagnostics::{AnalysisError, AnalysisResult};
use crate::stream::TokenStream;
use chisel_core::lang::punctuation::{BracketFamily, BracketSide};

impl TokenStream {
    /// Bracket family and side of the token at `index`, or `None` if it is not a bracket.
    pub fn bracket_family(&self, index: usize) -> AnalysisResult<Option<(BracketFamily, BracketSide)>> {
        self.kind_at(index).map(|k| k.bracket())
    }

    /// Index of the bracket that pairs with the one at `index`.
    ///
    /// ## Parameters
    /// - `index`: an opening or closing bracket of any family.
    ///
    /// ## Returns
    /// - The closer's index for an opener (scanning forward), the opener's index for a closer (scanning
    ///   backward).
    ///
    /// ## Errors
    /// - [`AnalysisError::OutOfRange`] for an index outside the stream.
    /// - [`AnalysisError::InvalidQuery`] if the token is not a bracket.
    /// - [`AnalysisError::UnmatchedBracket`] if the nesting depth never returns to zero.
    ///
    /// ## Examples
    /// ```rust
    /// use chisel_syntax::stream::TokenStream;
    ///
    /// let stream = TokenStream::from_source("<?php f([1], (2));").unwrap();
    /// assert_eq!(stream.matching_bracket(2).unwrap(), 11);
    /// assert_eq!(stream.matching_bracket(11).unwrap(), 2);
    /// ```
    pub fn matching_bracket(&self, index: usize) -> AnalysisResult<usize> {
        let token = self.token(index)?;
        let Some((family, side)) = token.kind.bracket() else {
            return Err(AnalysisError::InvalidQuery {
                index,
                expected: "a bracket",
                found: token.text.clone(),
            });
        };

        let mut depth = 0usize;
        let mut step = |i: usize| -> Option<usize> {
            match self.tokens()[i].kind.bracket() {
                Some((f, s)) if f == family && s == side => depth += 1,
                Some((f, _)) if f == family => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
            None
        };

        let found = match side {
            BracketSide::Open => (index..self.len()).find_map(&mut step),
            BracketSide::Close => (0..=index).rev().find_map(&mut step),
        };
        found.ok_or(AnalysisError::UnmatchedBracket { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(source: &str) -> TokenStream {
        TokenStream::from_source(source).unwrap()
    }

    #[test]
    fn nested_same_family() {
        let s = stream("<?php ((1)(2));");
        assert_eq!(s.matching_bracket(1).unwrap(), 8);
        assert_eq!(s.matching_bracket(5).unwrap(), 7);
        assert_eq!(s.matching_bracket(4).unwrap(), 2);
    }

    #[test]
    fn interpolation_openers_pair_with_closing_brace() {
        let s = stream(r#"<?php "a{$b[1]}c" . "${d}";"#);
        // `{` of `{$` at 3, `}` at 8
        assert_eq!(s.matching_bracket(3).unwrap(), 8);
        assert_eq!(s.matching_bracket(8).unwrap(), 3);
        let dollar_brace = s
            .iter()
            .position(|t| t.text == "${")
            .unwrap();
        assert_eq!(s.text_at(s.matching_bracket(dollar_brace).unwrap()).unwrap(), "}");
    }

    #[test]
    fn matching_ignores_other_families() {
        let s = stream("<?php [(]);");
        assert_eq!(s.matching_bracket(1).unwrap(), 3);
    }

    #[test]
    fn non_bracket_is_invalid_query() {
        let s = stream("<?php $a;");
        assert!(matches!(
            s.matching_bracket(1),
            Err(AnalysisError::InvalidQuery { index: 1, .. })
        ));
    }

    #[test]
    fn unbalanced_is_unmatched() {
        let s = stream("<?php f(1;");
        assert_eq!(s.matching_bracket(2), Err(AnalysisError::UnmatchedBracket { index: 2 }));
        assert_eq!(s.bracket_family(2).unwrap(), Some((BracketFamily::Paren, BracketSide::Open)));
    }
}
