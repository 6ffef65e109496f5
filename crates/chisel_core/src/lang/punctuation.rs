//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens: delimiters, separators,
//! member-access markers, the namespace separator and the quote delimiters of interpolated strings.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Bracket metadata ([`bracket`]) is the source of truth for which tokens pair up. Attribute groups open
//!   with `#[` and close with the ordinary `]`. The curly family has
//!   three openers: `{`, `${` and the `{` that starts `{$…}` interpolation ([`PunctuationId::CurlyOpen`]).
//! - `CurlyOpen` shares its spelling with `LBrace`; only the lexer can tell them apart, so [`from_str`] never
//!   returns it.
//!
//! ## Examples
//! ```rust
//! use chisel_core::lang::punctuation::{self, BracketFamily, BracketSide, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("::"), Some(PunctuationId::DoubleColon));
//! assert_eq!(punctuation::from_str("{"), Some(PunctuationId::LBrace));
//! assert_eq!(
//!     punctuation::bracket(PunctuationId::DollarLBrace),
//!     Some((BracketFamily::Curly, BracketSide::Open))
//! );
//! ```

use super::registry::{PHP_5, Since, Stability};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,`, `;` and `:`.
    Separator,
    /// Member/static access markers like `->` and `::`.
    Access,
    /// Misc markers like `?`, `\` and `$`.
    Marker,
    /// Delimiters of interpolated strings (`"` and `` ` ``).
    Quote,
}

/// Bracket families; nesting is only tracked within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketFamily {
    Paren,
    Bracket,
    Curly,
}

/// Which end of a bracket pair a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketSide {
    Open,
    Close,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Semicolon,
    Comma,
    Colon,

    // Markers
    Question,
    Backslash,
    Dollar,

    // Access
    Arrow,
    NullsafeArrow,
    DoubleColon,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    DollarLBrace,
    CurlyOpen,
    /// `#[` opening an attribute group; closed by `]`.
    AttributeOpen,

    // Quotes
    DoubleQuote,
    Backtick,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub bracket: Option<(BracketFamily, BracketSide)>,
    /// Only produced inside interpolated strings.
    pub interpolation_only: bool,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator, PHP_5),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator, PHP_5),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator, PHP_5),
    // Markers
    info(PunctuationId::Question, "?", PunctuationCategory::Marker, PHP_5),
    info(PunctuationId::Backslash, "\\", PunctuationCategory::Marker, Since(5, 3)),
    info(PunctuationId::Dollar, "$", PunctuationCategory::Marker, PHP_5),
    // Access
    info(PunctuationId::Arrow, "->", PunctuationCategory::Access, PHP_5),
    info(PunctuationId::NullsafeArrow, "?->", PunctuationCategory::Access, Since(8, 0)),
    info(PunctuationId::DoubleColon, "::", PunctuationCategory::Access, PHP_5),
    // Delimiters
    delimiter(PunctuationId::LParen, "(", BracketFamily::Paren, BracketSide::Open),
    delimiter(PunctuationId::RParen, ")", BracketFamily::Paren, BracketSide::Close),
    delimiter(PunctuationId::LBracket, "[", BracketFamily::Bracket, BracketSide::Open),
    delimiter(PunctuationId::RBracket, "]", BracketFamily::Bracket, BracketSide::Close),
    delimiter(PunctuationId::LBrace, "{", BracketFamily::Curly, BracketSide::Open),
    delimiter(PunctuationId::RBrace, "}", BracketFamily::Curly, BracketSide::Close),
    interpolation(
        delimiter(PunctuationId::DollarLBrace, "${", BracketFamily::Curly, BracketSide::Open),
    ),
    interpolation(
        delimiter(PunctuationId::CurlyOpen, "{", BracketFamily::Curly, BracketSide::Open),
    ),
    PunctuationInfo {
        since: Since(8, 0),
        ..delimiter(PunctuationId::AttributeOpen, "#[", BracketFamily::Bracket, BracketSide::Open)
    },
    // Quotes
    info(PunctuationId::DoubleQuote, "\"", PunctuationCategory::Quote, PHP_5),
    info(PunctuationId::Backtick, "`", PunctuationCategory::Quote, PHP_5),
];

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Bracket family and side, or `None` for non-bracket punctuation.
pub fn bracket(id: PunctuationId) -> Option<(BracketFamily, BracketSide)> {
    info_for(id).bracket
}

/// Resolve a spelling to its identifier.
///
/// ## Returns
/// - `Some(PunctuationId)` for spellings usable in plain code; interpolation-only entries are skipped.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION
        .iter()
        .find(|p| !p.interpolation_only && p.canonical == s)
        .map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory, since: Since) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        bracket: None,
        interpolation_only: false,
        since,
        stability: Stability::Stable,
    }
}

const fn delimiter(
    id: PunctuationId,
    canonical: &'static str,
    family: BracketFamily,
    side: BracketSide,
) -> PunctuationInfo {
    PunctuationInfo {
        bracket: Some((family, side)),
        ..info(id, canonical, PunctuationCategory::Delimiter, PHP_5)
    }
}

const fn interpolation(base: PunctuationInfo) -> PunctuationInfo {
    PunctuationInfo {
        interpolation_only: true,
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curly_family_has_three_openers() {
        let openers: Vec<PunctuationId> = PUNCTUATION
            .iter()
            .filter(|p| p.bracket == Some((BracketFamily::Curly, BracketSide::Open)))
            .map(|p| p.id)
            .collect();
        assert_eq!(
            openers,
            vec![PunctuationId::LBrace, PunctuationId::DollarLBrace, PunctuationId::CurlyOpen]
        );
    }

    #[test]
    fn attribute_opener_pairs_with_square_bracket() {
        assert_eq!(from_str("#["), Some(PunctuationId::AttributeOpen));
        assert_eq!(
            bracket(PunctuationId::AttributeOpen),
            Some((BracketFamily::Bracket, BracketSide::Open))
        );
        assert_eq!(info_for(PunctuationId::AttributeOpen).since, Since(8, 0));
    }

    #[test]
    fn interpolation_openers_are_not_looked_up_by_spelling() {
        assert_eq!(from_str("{"), Some(PunctuationId::LBrace));
        assert_eq!(from_str("${"), None);
    }
}
