//! Provide the canonical PHP vocabulary shared by the chisel lexer, analyzer and fixers.
//!
//! This crate is intentionally small and dependency-free. It holds the registry tables that
//! name every keyword, operator and punctuation token the rest of the workspace reasons about.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no token or stream types.
//! - Higher layers (`chisel_syntax`) map raw lexemes onto the stable IDs defined here.

pub mod lang;
