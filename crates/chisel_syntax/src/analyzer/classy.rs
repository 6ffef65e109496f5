//! Anonymous type detection.

use super::TokensAnalyzer;
use crate::diagnostics::AnalysisResult;
use chisel_core::lang::keywords::{self, KeywordId};

impl TokensAnalyzer<'_> {
    /// Whether the `class`, `interface`, `trait` or `enum` keyword at `index` is an anonymous class
    /// expression (`new class (…) {…}`).
    pub fn is_anonymous_class(&self, index: usize) -> AnalysisResult<bool> {
        if !self.stream.kind_at(index)?.keyword_id().is_some_and(keywords::is_classy) {
            return Err(self.invalid_query(index, "a type declaration keyword"));
        }
        Ok(self.prev_is(index, |k| k.is_keyword(KeywordId::New)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::TokenStream;

    fn anonymous_at(source: &str, index: usize) -> bool {
        let s = TokenStream::from_source(source).unwrap();
        TokensAnalyzer::new(&s).is_anonymous_class(index).unwrap()
    }

    #[test]
    fn declarations() {
        assert!(!anonymous_at("<?php class foo {}", 1));
        assert!(!anonymous_at("<?php interface Foo {}", 1));
        assert!(!anonymous_at("<?php trait T {}", 1));
    }

    #[test]
    fn new_class_is_anonymous() {
        assert!(anonymous_at("<?php $foo = new class {};", 7));
        assert!(anonymous_at("<?php $foo = new class(12) {};", 7));
        assert!(anonymous_at("<?php $foo = new /* c */ class {};", 9));
    }

    #[test]
    fn non_classy_is_rejected() {
        let s = TokenStream::from_source("<?php new Foo;").unwrap();
        assert!(TokensAnalyzer::new(&s).is_anonymous_class(1).is_err());
    }
}
