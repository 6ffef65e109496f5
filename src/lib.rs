#![forbid(unsafe_code)]
//! Chisel: token-level structural analysis of PHP source.
//!
//! Rewrite rules for PHP code need to answer questions a tokenizer leaves open: whether an operator
//! is unary or binary, whether `function` opens a closure, whether `[` opens an array, whether a
//! `while` ends a `do` loop, where imports live and what a class declares. This crate bundles the
//! analysis engine from `chisel_syntax` with the rewrite rules built on it.
//!
//! ## Panic Policy
//!
//! - **Production code**: queries return `Result`; an out-of-range index, a query on the wrong token
//!   kind and an unmatched bracket are all reported as [`diagnostics::AnalysisError`].
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: registry lookups use `.expect("… info missing")`; a miss is a bug in the
//!   vocabulary tables.
//!
//! ## Examples
//! ```rust
//! use chisel::{Fixer, InlineTagConfig, PhpdocInlineTagFixer, TokenStream, TokensAnalyzer};
//!
//! let stream = TokenStream::from_source("<?php\n/** @{link} */\n$f = function () {};").unwrap();
//! let analyzer = TokensAnalyzer::new(&stream);
//! let function = stream.iter().position(|t| t.text == "function").unwrap();
//! assert!(analyzer.is_lambda(function).unwrap());
//!
//! let fixer = PhpdocInlineTagFixer::new(&InlineTagConfig::default()).unwrap();
//! assert!(fixer.fix(&stream).contains("{@link}"));
//! ```

pub mod fixer;

pub use chisel_core::lang;
pub use chisel_syntax::{analyzer, diagnostics, lexer, stream};

pub use analyzer::{AnalyzerConfig, TokensAnalyzer, TrailingNewlinePolicy};
pub use fixer::{Fixer, FixerError, InlineTagConfig, PhpdocInlineTagFixer, fix_source};
pub use stream::TokenStream;
