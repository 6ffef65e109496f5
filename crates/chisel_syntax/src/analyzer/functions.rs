//! Lambda detection.

use super::TokensAnalyzer;
use crate::diagnostics::AnalysisResult;
use chisel_core::lang::keywords;
use chisel_core::lang::operators::OperatorId;
use chisel_core::lang::punctuation::PunctuationId;

impl TokensAnalyzer<'_> {
    /// Whether the `function` or `fn` keyword at `index` starts an anonymous function.
    ///
    /// A named declaration has its name between the keyword and `(`; a closure or arrow function goes
    /// straight to the parameter list, optionally through a by-reference `&`.
    ///
    /// ## Errors
    /// - [`crate::diagnostics::AnalysisError::InvalidQuery`] if the token is not `function` or `fn`.
    pub fn is_lambda(&self, index: usize) -> AnalysisResult<bool> {
        if !self.stream.kind_at(index)?.keyword_id().is_some_and(keywords::is_function) {
            return Err(self.invalid_query(index, "`function` or `fn`"));
        }
        let next = match self.next(index) {
            Some(n) if self.kind(n).is_operator(OperatorId::Amp) => self.next(n),
            other => other,
        };
        Ok(next.is_some_and(|n| self.kind(n).is_punctuation(PunctuationId::LParen)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::TokenStream;

    fn lambda_at(source: &str, index: usize) -> bool {
        let s = TokenStream::from_source(source).unwrap();
        TokensAnalyzer::new(&s).is_lambda(index).unwrap()
    }

    #[test]
    fn named_function_is_not_lambda() {
        assert!(!lambda_at("<?php function foo () {}", 1));
        assert!(!lambda_at("<?php function &foo () {}", 1));
    }

    #[test]
    fn closures_are_lambdas() {
        assert!(lambda_at("<?php $foo = function () {}", 5));
        assert!(lambda_at("<?php $foo = function &() {}", 5));
        assert!(lambda_at("<?php $f = fn($x) => $x;", 5));
    }

    #[test]
    fn keyword_at_end_of_stream() {
        assert!(!lambda_at("<?php function", 1));
    }

    #[test]
    fn non_function_is_rejected() {
        let s = TokenStream::from_source("<?php $a;").unwrap();
        assert!(TokensAnalyzer::new(&s).is_lambda(1).is_err());
    }
}
