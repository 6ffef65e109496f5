//! PHP language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators and
//! punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the analyzer and fixers.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The lexer decides token boundaries; registries provide spellings and metadata for shared use (operator
//!   fixity, bracket families, keyword categories).
//!
//! ## Examples
//! ```rust
//! use chisel_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::from_str("WHILE"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
