//! PHP token streams and the structural queries rewrite rules are built on.
//!
//! This crate turns PHP source into an index-addressable [`stream::TokenStream`] and answers the
//! ambiguity-resolving questions a plain lexer cannot: whether an operator is unary or binary, whether
//! `function`/`class` introduce anonymous constructs, whether a bracket opens an array literal, whether a
//! `while` closes a `do` loop, where imports start and which members a type body declares.
//!
//! ## Notes
//! - This crate is intentionally “token-only”: it builds no AST and does no semantic analysis.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `chisel_core::lang` registries.
//! - The analyzer only reads the stream; any producer of `Vec<Token>` can feed it, the bundled [`lexer`]
//!   is one such producer.
//!
//! ## Examples
//! ```rust
//! use chisel_syntax::analyzer::TokensAnalyzer;
//! use chisel_syntax::stream::TokenStream;
//!
//! let stream = TokenStream::from_source("<?php $a = -2 / +5;").unwrap();
//! let analyzer = TokensAnalyzer::new(&stream);
//! assert!(analyzer.is_unary_prefix_operator(5).unwrap());
//! assert!(analyzer.is_binary_operator(8).unwrap());
//! ```

pub mod analyzer;
pub mod blocks;
pub mod diagnostics;
pub mod lexer;
pub mod span;
pub mod stream;
pub mod token_helpers;
