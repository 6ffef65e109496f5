//! Token-level rewrite rules.
//!
//! A [`Fixer`] reads a [`TokenStream`] and produces new source text; callers re-lex the result before
//! running the next rule. The only rule shipped here is [`PhpdocInlineTagFixer`].

mod config;
mod phpdoc_inline_tag;

pub use config::{DEFAULT_INLINE_TAGS, InlineTagConfig};
pub use phpdoc_inline_tag::PhpdocInlineTagFixer;

use chisel_syntax::diagnostics::LexError;
use chisel_syntax::stream::TokenStream;
use miette::Diagnostic;
use thiserror::Error;

/// A rewrite rule over a token stream.
pub trait Fixer {
    /// Stable rule name, e.g. `phpdoc_inline_tag`.
    fn name(&self) -> &'static str;

    /// One-line summary of what the rule changes.
    fn description(&self) -> &'static str;

    /// Whether the stream contains anything this rule could change.
    fn is_candidate(&self, stream: &TokenStream) -> bool;

    /// Rewritten source text for the whole stream.
    fn fix(&self, stream: &TokenStream) -> String;
}

#[derive(Debug, Error, Diagnostic)]
pub enum FixerError {
    #[error("no inline tag names configured")]
    #[diagnostic(
        code(chisel::fixer::empty_tag_list),
        help("configure at least one tag name, or keep the defaults")
    )]
    EmptyTagList,

    #[error("invalid rewrite pattern: {0}")]
    #[diagnostic(code(chisel::fixer::pattern))]
    Pattern(#[from] regex::Error),

    #[error("source could not be tokenized")]
    #[diagnostic(code(chisel::fixer::lex))]
    Lex {
        #[related]
        errors: Vec<LexError>,
    },
}

/// Lex `source`, run `fixer` if the stream is a candidate, and return the resulting text.
///
/// Non-candidate sources come back unchanged.
#[tracing::instrument(skip_all, fields(fixer = fixer.name(), source_len = source.len()))]
pub fn fix_source(fixer: &dyn Fixer, source: &str) -> Result<String, FixerError> {
    let stream = TokenStream::from_source(source).map_err(|errors| FixerError::Lex { errors })?;
    if !fixer.is_candidate(&stream) {
        tracing::debug!("not a candidate");
        return Ok(source.to_string());
    }
    Ok(fixer.fix(&stream))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_errors_are_related_diagnostics() {
        let fixer = PhpdocInlineTagFixer::new(&InlineTagConfig::default()).unwrap();
        let err = fix_source(&fixer, "<?php /** never closed").unwrap_err();
        let related: Vec<_> = err.related().expect("lex errors attached").collect();
        assert_eq!(related.len(), 1);
    }

    #[test]
    fn non_candidates_are_unchanged() {
        let fixer = PhpdocInlineTagFixer::new(&InlineTagConfig::default()).unwrap();
        let source = "<?php // @inheritdoc\n$a = 1;";
        assert_eq!(fix_source(&fixer, source).unwrap(), source);
    }
}
