//! Import statement discovery.
//!
//! Only top-level `use` statements import names. Closure `use (…)` lists follow a `)` and trait uses
//! live inside type bodies, which the scan steps over as whole bracket groups.

use super::TokensAnalyzer;
use crate::diagnostics::AnalysisResult;
use crate::lexer::TokenKind;
use chisel_core::lang::keywords::KeywordId;
use chisel_core::lang::punctuation::PunctuationId;

/// Import statements that share a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportGroup {
    /// Index of the `namespace` keyword, `None` for code outside any namespace declaration.
    pub namespace_index: Option<usize>,
    /// Indices of the `use` keywords, in stream order.
    pub uses: Vec<usize>,
}

impl ImportGroup {
    fn new(namespace_index: Option<usize>) -> Self {
        Self {
            namespace_index,
            uses: Vec::new(),
        }
    }
}

impl TokensAnalyzer<'_> {
    /// Indices of every import `use` keyword in the stream.
    pub fn import_use_indexes(&self) -> AnalysisResult<Vec<usize>> {
        Ok(self.import_use_groups()?.into_iter().flat_map(|g| g.uses).collect())
    }

    /// Import `use` keywords grouped by the namespace they appear in.
    ///
    /// ## Returns
    /// - One group per namespace (or the global scope) that contains at least one import, in stream
    ///   order.
    ///
    /// ## Errors
    /// - [`crate::diagnostics::AnalysisError::UnmatchedBracket`] if a bracket group the scan must step
    ///   over is never closed.
    #[tracing::instrument(skip_all, fields(tokens = self.stream.len()))]
    pub fn import_use_groups(&self) -> AnalysisResult<Vec<ImportGroup>> {
        let len = self.stream.len();
        let mut groups = vec![ImportGroup::new(None)];
        let mut i = 0;
        while i < len {
            let kind = self.kind(i);
            if kind.is_keyword(KeywordId::Namespace) && self.is_namespace_declaration(i) {
                groups.push(ImportGroup::new(Some(i)));
                i = self.namespace_header_end(i) + 1;
                continue;
            }
            if kind.is_opener() {
                i = self.stream.matching_bracket(i)? + 1;
                continue;
            }
            if kind.is_keyword(KeywordId::Use) && self.starts_statement(i) {
                if let Some(group) = groups.last_mut() {
                    group.uses.push(i);
                }
                i = self.statement_end(i)? + 1;
                continue;
            }
            i += 1;
        }
        groups.retain(|g| !g.uses.is_empty());
        tracing::debug!(groups = groups.len(), "collected import groups");
        Ok(groups)
    }

    /// `namespace Foo;`, `namespace Foo {` and `namespace {`, but not the relative name `namespace\f()`.
    fn is_namespace_declaration(&self, index: usize) -> bool {
        self.next_is(index, |k| k == TokenKind::Ident || k.is_punctuation(PunctuationId::LBrace))
    }

    /// The `;` or `{` ending a namespace declaration's header.
    fn namespace_header_end(&self, index: usize) -> usize {
        let tokens = self.stream.tokens();
        tokens[index..]
            .iter()
            .position(|t| t.kind.is_any_punctuation(&[PunctuationId::Semicolon, PunctuationId::LBrace]))
            .map_or(tokens.len(), |offset| index + offset)
    }

    /// The `;` or `?>` ending the statement that starts at `index`.
    fn statement_end(&self, index: usize) -> AnalysisResult<usize> {
        let len = self.stream.len();
        let mut j = index + 1;
        while j < len {
            let kind = self.kind(j);
            if kind.is_punctuation(PunctuationId::Semicolon) || kind == TokenKind::CloseTag {
                return Ok(j);
            }
            if kind.is_opener() {
                j = self.stream.matching_bracket(j)?;
            }
            j += 1;
        }
        Ok(len)
    }
}
