//! Operator vocabulary.
//!
//! This module defines the canonical PHP operator set (symbol operators like `+` and word operators
//! like `and`) along with the fixity metadata the analyzer uses to tell unary from binary uses.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** for symbols and ASCII case-insensitive for word
//!   operators (those entries have [`OperatorInfo::is_keyword_spelling`] set to `true`).
//! - Word operators are lexed as keywords ([`crate::lang::keywords`]); use [`from_keyword_spelling`] to map
//!   them back onto an [`OperatorId`].
//! - `=>` and `...` are listed here rather than in punctuation because rewrite rules treat them as operators.
//!
//! ## Examples
//! ```rust
//! use chisel_core::lang::operators::{self, Fixity, OperatorId};
//!
//! assert_eq!(operators::from_str("<>"), Some(OperatorId::NotEq));
//! assert_eq!(operators::fixity(OperatorId::Minus), Fixity::PrefixOrInfix);
//! ```

use super::registry::{PHP_5, Since, Stability};

/// Define the positions an operator may take relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    /// Always binary.
    Infix,
    /// Always unary, written before the operand.
    Prefix,
    /// Unary prefix or binary depending on what precedes it (`+`, `-`, `&`).
    PrefixOrInfix,
    /// Unary prefix or unary postfix depending on what precedes it (`++`, `--`).
    PrefixOrPostfix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    Dot,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,

    // Comparison
    EqEq,
    EqEqEq,
    NotEq,
    NotEqEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Spaceship,

    // Logical
    Bang,
    AmpAmp,
    PipePipe,
    Coalesce,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    StarStarEq,
    SlashEq,
    PercentEq,
    DotEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    CoalesceEq,

    // Increment / decrement
    PlusPlus,
    MinusMinus,

    // Markers
    At,
    Ellipsis,
    DoubleArrow,

    // Word operators
    And,
    Or,
    Xor,
    Instanceof,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `spellings` may contain multiple accepted spellings for the same operator id (`!=` and `<>`).
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spellings: &'static [&'static str],
    pub fixity: Fixity,
    pub is_keyword_spelling: bool,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, &["+"], Fixity::PrefixOrInfix, PHP_5),
    op(OperatorId::Minus, &["-"], Fixity::PrefixOrInfix, PHP_5),
    op(OperatorId::Star, &["*"], Fixity::Infix, PHP_5),
    op(OperatorId::StarStar, &["**"], Fixity::Infix, Since(5, 6)),
    op(OperatorId::Slash, &["/"], Fixity::Infix, PHP_5),
    op(OperatorId::Percent, &["%"], Fixity::Infix, PHP_5),
    op(OperatorId::Dot, &["."], Fixity::Infix, PHP_5),
    // Bitwise
    op(OperatorId::Amp, &["&"], Fixity::PrefixOrInfix, PHP_5),
    op(OperatorId::Pipe, &["|"], Fixity::Infix, PHP_5),
    op(OperatorId::Caret, &["^"], Fixity::Infix, PHP_5),
    op(OperatorId::Tilde, &["~"], Fixity::Prefix, PHP_5),
    op(OperatorId::Shl, &["<<"], Fixity::Infix, PHP_5),
    op(OperatorId::Shr, &[">>"], Fixity::Infix, PHP_5),
    // Comparison
    op(OperatorId::EqEq, &["=="], Fixity::Infix, PHP_5),
    op(OperatorId::EqEqEq, &["==="], Fixity::Infix, PHP_5),
    op(OperatorId::NotEq, &["!=", "<>"], Fixity::Infix, PHP_5),
    op(OperatorId::NotEqEq, &["!=="], Fixity::Infix, PHP_5),
    op(OperatorId::Lt, &["<"], Fixity::Infix, PHP_5),
    op(OperatorId::LtEq, &["<="], Fixity::Infix, PHP_5),
    op(OperatorId::Gt, &[">"], Fixity::Infix, PHP_5),
    op(OperatorId::GtEq, &[">="], Fixity::Infix, PHP_5),
    op(OperatorId::Spaceship, &["<=>"], Fixity::Infix, Since(7, 0)),
    // Logical
    op(OperatorId::Bang, &["!"], Fixity::Prefix, PHP_5),
    op(OperatorId::AmpAmp, &["&&"], Fixity::Infix, PHP_5),
    op(OperatorId::PipePipe, &["||"], Fixity::Infix, PHP_5),
    op(OperatorId::Coalesce, &["??"], Fixity::Infix, Since(7, 0)),
    // Assignment
    op(OperatorId::Eq, &["="], Fixity::Infix, PHP_5),
    op(OperatorId::PlusEq, &["+="], Fixity::Infix, PHP_5),
    op(OperatorId::MinusEq, &["-="], Fixity::Infix, PHP_5),
    op(OperatorId::StarEq, &["*="], Fixity::Infix, PHP_5),
    op(OperatorId::StarStarEq, &["**="], Fixity::Infix, Since(5, 6)),
    op(OperatorId::SlashEq, &["/="], Fixity::Infix, PHP_5),
    op(OperatorId::PercentEq, &["%="], Fixity::Infix, PHP_5),
    op(OperatorId::DotEq, &[".="], Fixity::Infix, PHP_5),
    op(OperatorId::AmpEq, &["&="], Fixity::Infix, PHP_5),
    op(OperatorId::PipeEq, &["|="], Fixity::Infix, PHP_5),
    op(OperatorId::CaretEq, &["^="], Fixity::Infix, PHP_5),
    op(OperatorId::ShlEq, &["<<="], Fixity::Infix, PHP_5),
    op(OperatorId::ShrEq, &[">>="], Fixity::Infix, PHP_5),
    op(OperatorId::CoalesceEq, &["??="], Fixity::Infix, Since(7, 4)),
    // Increment / decrement
    op(OperatorId::PlusPlus, &["++"], Fixity::PrefixOrPostfix, PHP_5),
    op(OperatorId::MinusMinus, &["--"], Fixity::PrefixOrPostfix, PHP_5),
    // Markers
    op(OperatorId::At, &["@"], Fixity::Prefix, PHP_5),
    op(OperatorId::Ellipsis, &["..."], Fixity::Prefix, Since(5, 6)),
    op(OperatorId::DoubleArrow, &["=>"], Fixity::Infix, PHP_5),
    // Word operators
    word(OperatorId::And, &["and"], Fixity::Infix, PHP_5),
    word(OperatorId::Or, &["or"], Fixity::Infix, PHP_5),
    word(OperatorId::Xor, &["xor"], Fixity::Infix, PHP_5),
    word(OperatorId::Instanceof, &["instanceof"], Fixity::Infix, PHP_5),
];

/// Return the full metadata entry for an operator.
///
/// ## Parameters
/// - `id`: Operator identifier.
///
/// ## Returns
/// - The associated [`OperatorInfo`] from [`OPERATORS`].
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Canonical (first) spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spellings[0]
}

/// Fixity of an operator.
pub fn fixity(id: OperatorId) -> Fixity {
    info_for(id).fixity
}

/// Resolve an operator spelling to its identifier.
///
/// ## Parameters
/// - `spelling`: Candidate operator token (symbol or word operator).
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| {
            o.spellings.iter().any(|s| {
                if o.is_keyword_spelling {
                    s.eq_ignore_ascii_case(spelling)
                } else {
                    *s == spelling
                }
            })
        })
        .map(|o| o.id)
}

/// Resolve a keyword spelling (`and`, `OR`, `instanceof`) to a word operator.
///
/// ## Returns
/// - `Some(OperatorId)` only for entries spelled with a reserved word; symbol spellings never match.
pub fn from_keyword_spelling(spelling: &str) -> Option<OperatorId> {
    from_str(spelling).filter(|id| info_for(*id).is_keyword_spelling)
}

/// Symbol spellings ordered longest first, for maximal-munch tokenization.
///
/// ## Examples
/// ```rust
/// use chisel_core::lang::operators;
///
/// let symbols = operators::symbols_longest_first();
/// assert!(symbols.iter().position(|s| *s == "**=") < symbols.iter().position(|s| *s == "**"));
/// ```
pub fn symbols_longest_first() -> Vec<&'static str> {
    let mut symbols: Vec<&'static str> = OPERATORS
        .iter()
        .filter(|o| !o.is_keyword_spelling)
        .flat_map(|o| o.spellings.iter().copied())
        .collect();
    symbols.sort_by(|a, b| b.len().cmp(&a.len()));
    symbols
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spellings: &'static [&'static str], fixity: Fixity, since: Since) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        fixity,
        is_keyword_spelling: false,
        since,
        stability: Stability::Stable,
    }
}

const fn word(id: OperatorId, spellings: &'static [&'static str], fixity: Fixity, since: Since) -> OperatorInfo {
    OperatorInfo {
        is_keyword_spelling: true,
        ..op(id, spellings, fixity, since)
    }
}
