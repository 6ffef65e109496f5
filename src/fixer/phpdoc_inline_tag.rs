//! Normalize inline tags in doc comments.
//!
//! `@{tag}`, `{{ @tag }}` and `{@tags}` become `{@tag}`; a bare `@inheritdoc` becomes
//! `{@inheritdoc}`. Only `DocComment` token text changes.

use std::borrow::Cow;

use chisel_syntax::lexer::TokenKind;
use chisel_syntax::stream::TokenStream;
use regex::{Captures, Regex};

use super::{Fixer, FixerError, InlineTagConfig};

/// Characters stripped from the ends of an inline tag's text.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

#[derive(Debug, Clone)]
pub struct PhpdocInlineTagFixer {
    inline_tag: Regex,
    bare_inheritdoc: Option<Regex>,
}

impl PhpdocInlineTagFixer {
    /// Compile the rewrite patterns for `config`.
    ///
    /// ## Errors
    /// - [`FixerError::EmptyTagList`] if `config.tags` is empty.
    /// - [`FixerError::Pattern`] if the combined pattern exceeds the regex engine's limits.
    pub fn new(config: &InlineTagConfig) -> Result<Self, FixerError> {
        if config.tags.is_empty() {
            return Err(FixerError::EmptyTagList);
        }
        let alternation = config
            .tags
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let inline_tag = Regex::new(&[r"(?i)(?:@\{+|\{+[ \t]*@)[ \t]*(", &alternation, r")s?([^}]*)\}+"].concat())?;
        let bare_inheritdoc = if config.force_inline_inheritdoc {
            Some(Regex::new(r"(?i)(\{)?@inheritdocs?(\})?")?)
        } else {
            None
        };
        Ok(Self {
            inline_tag,
            bare_inheritdoc,
        })
    }

    /// Rewrite one doc comment's text.
    pub fn fix_doc_comment(&self, content: &str) -> String {
        let content = self.inline_tag.replace_all(content, |caps: &Captures<'_>| {
            let tag = caps[1].to_lowercase();
            let text = caps[2].trim_matches(TRIMMED);
            if text.is_empty() {
                format!("{{@{tag}}}")
            } else {
                format!("{{@{tag} {text}}}")
            }
        });
        let Some(bare_inheritdoc) = &self.bare_inheritdoc else {
            return content.into_owned();
        };
        bare_inheritdoc
            .replace_all(&content, |caps: &Captures<'_>| {
                // a brace on either side means the tag is already inline
                if caps.get(1).is_some() || caps.get(2).is_some() {
                    caps[0].to_string()
                } else {
                    "{@inheritdoc}".to_string()
                }
            })
            .into_owned()
    }
}

impl Fixer for PhpdocInlineTagFixer {
    fn name(&self) -> &'static str {
        "phpdoc_inline_tag"
    }

    fn description(&self) -> &'static str {
        "Fix phpdoc inline tags, make inheritdoc always inline."
    }

    fn is_candidate(&self, stream: &TokenStream) -> bool {
        stream.iter().any(|t| t.kind == TokenKind::DocComment)
    }

    #[tracing::instrument(skip_all, fields(tokens = stream.len()))]
    fn fix(&self, stream: &TokenStream) -> String {
        stream
            .iter()
            .map(|t| match t.kind {
                TokenKind::DocComment => Cow::Owned(self.fix_doc_comment(&t.text)),
                _ => Cow::Borrowed(t.text.as_str()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixer() -> PhpdocInlineTagFixer {
        PhpdocInlineTagFixer::new(&InlineTagConfig::default()).unwrap()
    }

    #[test]
    fn moves_at_inside_the_brace() {
        assert_eq!(fixer().fix_doc_comment("/** @{TUTORIAL} */"), "/** {@tutorial} */");
    }

    #[test]
    fn collapses_braces_and_spaces() {
        assert_eq!(fixer().fix_doc_comment("/** {{ @link }} */"), "/** {@link} */");
        assert_eq!(
            fixer().fix_doc_comment("/** {  @link   http://example.com  } */"),
            "/** {@link http://example.com} */"
        );
    }

    #[test]
    fn drops_plural_s() {
        assert_eq!(fixer().fix_doc_comment("/** {@examples} */"), "/** {@example} */");
    }

    #[test]
    fn bare_inheritdoc_becomes_inline() {
        assert_eq!(fixer().fix_doc_comment("/** @inheritdocs */"), "/** {@inheritdoc} */");
        assert_eq!(fixer().fix_doc_comment("/** @InheritDoc */"), "/** {@inheritdoc} */");
        assert_eq!(fixer().fix_doc_comment("/** {@inheritdoc} */"), "/** {@inheritdoc} */");
    }

    #[test]
    fn unknown_tags_are_untouched() {
        assert_eq!(fixer().fix_doc_comment("/** @{see Foo} */"), "/** @{see Foo} */");
    }

    #[test]
    fn inheritdoc_forcing_can_be_disabled() {
        let fixer = PhpdocInlineTagFixer::new(&InlineTagConfig::new().with_force_inline_inheritdoc(false)).unwrap();
        assert_eq!(fixer.fix_doc_comment("/** @inheritdoc */"), "/** @inheritdoc */");
    }

    #[test]
    fn custom_tags_are_escaped() {
        let fixer = PhpdocInlineTagFixer::new(&InlineTagConfig::new().with_tags(["see.also"])).unwrap();
        assert_eq!(fixer.fix_doc_comment("/** @{SEE.ALSO x} */"), "/** {@see.also x} */");
        assert_eq!(fixer.fix_doc_comment("/** @{seeXalso x} */"), "/** @{seeXalso x} */");
    }

    #[test]
    fn empty_tag_list_is_rejected() {
        let err = PhpdocInlineTagFixer::new(&InlineTagConfig::new().with_tags(Vec::<String>::new())).unwrap_err();
        assert!(matches!(err, FixerError::EmptyTagList));
    }

    #[test]
    fn only_doc_comments_change() {
        let stream = TokenStream::from_source("<?php\n/* @{link} */\n/** @{link} */\n$a = '@{link}';").unwrap();
        let fixer = fixer();
        assert!(fixer.is_candidate(&stream));
        assert_eq!(
            fixer.fix(&stream),
            "<?php\n/* @{link} */\n/** {@link} */\n$a = '@{link}';"
        );
    }
}
