//! Shareable metadata for `chisel_core::lang` registries.
//!
//! The `chisel_core::lang` module is a set of **registry-first** vocabularies: keywords,
//! operators and punctuation. This submodule provides the small, dependency-free metadata
//! types that are reused across all registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in
//!   `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; token boundaries still live in the lexer.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::operators`]
//! - [`crate::lang::punctuation`]

/// Identify the PHP release a vocabulary item is available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use chisel_core::lang::registry::Since;
///
/// assert!(Since(7, 4) > Since(7, 0));
/// assert_eq!(Since(8, 1).to_string(), "8.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u8, pub u8);

/// Baseline release for vocabulary that predates every version the analyzer distinguishes.
pub const PHP_5: Since = Since(5, 0);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to flag legacy spellings), not for feature-gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    /// Still tokenized, but discouraged or removed in later releases.
    Legacy,
}
