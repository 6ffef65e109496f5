//! Type body members and their modifiers.

use super::TokensAnalyzer;
use crate::diagnostics::AnalysisResult;
use crate::lexer::TokenKind;
use chisel_core::lang::keywords::{self, KeywordId};
use chisel_core::lang::operators::OperatorId;
use chisel_core::lang::punctuation::{BracketSide, PunctuationId};

/// What a type body element declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassyElementKind {
    Property,
    Constant,
    Method,
}

/// One member declared directly inside a class, interface, trait or enum body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassyElement {
    /// The property variable, `const` keyword or `function` keyword.
    pub index: usize,
    pub kind: ClassyElementKind,
    /// The `class`/`interface`/`trait`/`enum` keyword of the owning type.
    pub class_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// Modifiers attached to a member declaration. `visibility` is `None` when no visibility keyword is
/// written; `var` counts as `public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MemberAttributes {
    pub visibility: Option<Visibility>,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
}

impl MemberAttributes {
    fn apply(&mut self, modifier: KeywordId) {
        match modifier {
            KeywordId::Public | KeywordId::Var => self.visibility = Some(Visibility::Public),
            KeywordId::Protected => self.visibility = Some(Visibility::Protected),
            KeywordId::Private => self.visibility = Some(Visibility::Private),
            KeywordId::Static => self.is_static = true,
            KeywordId::Abstract => self.is_abstract = true,
            KeywordId::Final => self.is_final = true,
            _ => {}
        }
    }
}

impl TokensAnalyzer<'_> {
    /// Members declared directly in the body of the type whose keyword is at `class_index`.
    ///
    /// ## Notes
    /// - Each variable of `public $a, $b;` is its own property; `const A = 1, B = 2;` is one constant
    ///   element at the `const` keyword.
    /// - Parameter lists, method bodies and nested anonymous classes are stepped over.
    ///
    /// ## Errors
    /// - [`crate::diagnostics::AnalysisError::InvalidQuery`] if the token is not a type declaration
    ///   keyword (`Foo::class` does not count) or the declaration has no body.
    pub fn classy_elements(&self, class_index: usize) -> AnalysisResult<Vec<ClassyElement>> {
        if !self.is_type_declaration(class_index)? {
            return Err(self.invalid_query(class_index, "a type declaration keyword"));
        }
        let open = self.classy_body_open(class_index)?;
        let close = self.stream.matching_bracket(open)?;

        let mut elements = Vec::new();
        let mut i = open + 1;
        while i < close {
            let kind = self.kind(i);
            let element = match kind {
                TokenKind::Variable => Some(ClassyElementKind::Property),
                TokenKind::Keyword(KeywordId::Const) => Some(ClassyElementKind::Constant),
                TokenKind::Keyword(k) if keywords::is_function(k) => Some(ClassyElementKind::Method),
                _ => None,
            };
            if let Some(kind) = element {
                elements.push(ClassyElement {
                    index: i,
                    kind,
                    class_index,
                });
            }
            if kind.is_opener() {
                i = self.stream.matching_bracket(i)?;
            }
            i += 1;
        }
        Ok(elements)
    }

    /// Members of every type declared in the stream, ordered by index.
    #[tracing::instrument(skip_all, fields(tokens = self.stream.len()))]
    pub fn all_classy_elements(&self) -> AnalysisResult<Vec<ClassyElement>> {
        let mut elements = Vec::new();
        for i in 0..self.stream.len() {
            if self.is_type_declaration(i)? {
                elements.extend(self.classy_elements(i)?);
            }
        }
        elements.sort_by_key(|e| e.index);
        Ok(elements)
    }

    /// Modifiers of the member declared at `index`.
    ///
    /// ## Parameters
    /// - `index`: a `function`/`fn` or `const` keyword, a modifier keyword, or a property variable.
    ///
    /// ## Errors
    /// - [`crate::diagnostics::AnalysisError::InvalidQuery`] for any other token.
    pub fn member_attributes(&self, index: usize) -> AnalysisResult<MemberAttributes> {
        let mut attributes = MemberAttributes::default();
        match self.stream.kind_at(index)? {
            TokenKind::Keyword(k) if keywords::is_function(k) || k == KeywordId::Const => {
                self.collect_modifiers(index, &mut attributes, |i| self.prev(i));
            }
            TokenKind::Keyword(k) if keywords::is_modifier(k) => {
                attributes.apply(k);
                self.collect_modifiers(index, &mut attributes, |i| self.prev(i));
                self.collect_modifiers(index, &mut attributes, |i| self.next(i));
            }
            TokenKind::Variable => self.collect_property_modifiers(index, &mut attributes)?,
            _ => return Err(self.invalid_query(index, "a member declaration")),
        }
        Ok(attributes)
    }

    /// `class Name`, `interface Name`, `trait Name`, `enum Name`, or `new class`.
    fn is_type_declaration(&self, index: usize) -> AnalysisResult<bool> {
        if !self.stream.kind_at(index)?.keyword_id().is_some_and(keywords::is_classy) {
            return Ok(false);
        }
        if self.prev_is(index, |k| k.is_punctuation(PunctuationId::DoubleColon)) {
            return Ok(false);
        }
        Ok(self.next_is(index, |k| k == TokenKind::Ident) || self.prev_is(index, |k| k.is_keyword(KeywordId::New)))
    }

    /// The `{` opening a type body, past any `(…)` constructor arguments of an anonymous class.
    fn classy_body_open(&self, class_index: usize) -> AnalysisResult<usize> {
        let len = self.stream.len();
        let mut i = class_index + 1;
        while i < len {
            let kind = self.kind(i);
            if kind.is_punctuation(PunctuationId::LBrace) {
                return Ok(i);
            }
            if kind.is_punctuation(PunctuationId::LParen) {
                i = self.stream.matching_bracket(i)?;
            }
            i += 1;
        }
        Err(self.invalid_query(class_index, "a type declaration with a body"))
    }

    /// Apply the run of modifier keywords adjacent to `index` in the direction `step` walks.
    fn collect_modifiers(
        &self,
        index: usize,
        attributes: &mut MemberAttributes,
        step: impl Fn(usize) -> Option<usize>,
    ) {
        let mut i = index;
        while let Some(j) = step(i) {
            match self.kind(j).keyword_id() {
                Some(k) if keywords::is_modifier(k) => attributes.apply(k),
                _ => break,
            }
            i = j;
        }
    }

    /// Modifiers leading the declaration that contains the property variable at `index`, including
    /// promoted constructor parameters.
    fn collect_property_modifiers(&self, index: usize, attributes: &mut MemberAttributes) -> AnalysisResult<()> {
        let in_parens = self.enclosing_paren(index)?.is_some();
        let mut start = index;
        while let Some(p) = self.prev(start) {
            let kind = self.kind(p);
            let at_boundary = kind.is_open_tag()
                || kind.is_any_punctuation(&[
                    PunctuationId::Semicolon,
                    PunctuationId::LBrace,
                    PunctuationId::RBrace,
                    PunctuationId::LParen,
                    PunctuationId::LBracket,
                ])
                || (in_parens && kind.is_punctuation(PunctuationId::Comma));
            if at_boundary {
                break;
            }
            start = match kind.bracket() {
                Some((_, BracketSide::Close)) => self.stream.matching_bracket(p)?,
                _ => p,
            };
        }

        let mut cursor = Some(start);
        while let Some(i) = cursor.filter(|&i| i < index) {
            match self.kind(i) {
                TokenKind::Keyword(k) if keywords::is_modifier(k) => attributes.apply(k),
                TokenKind::Variable | TokenKind::Operator(OperatorId::Eq) => break,
                _ => {}
            }
            cursor = self.next(i);
        }
        Ok(())
    }
}
