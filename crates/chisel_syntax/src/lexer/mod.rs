//! Reference lexer for PHP source.
//!
//! Produces the same token boundaries as PHP's own tokenizer for the supported language subset, so token
//! indices line up with what PHP tooling reports:
//! - Inline HTML and `<?php` / `<?=` / `?>` processing-context switches
//! - Keywords (case-insensitive), names, variables and casts; `enum` is a keyword only before a type name
//! - `#[` attribute openers, distinct from `#` line comments
//! - Numbers, single-quoted strings, interpolated strings, backticks, heredoc and nowdoc
//! - Operators and punctuation by maximal munch over the `chisel_core::lang` registries
//! - Whitespace runs and comments as trivia tokens
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - Quoted string, interpolation and heredoc scanning
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::diagnostics::LexError;
use crate::span::Span;
use chisel_core::lang::keywords::KeywordId;
use chisel_core::lang::operators;
use chisel_core::lang::punctuation::{self, PunctuationCategory, PunctuationId};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// The lexer keeps a stack of scanning modes (simplified):
//
// [InlineHtml] → see `<?php` → [Script] → see `?>` → [InlineHtml]
//                                 ↓
//                                see `"…$x…"` → push [Quoted] → see `{$` → push [Embedded]
//                                                                  ↓
//                                                                 see `}` at depth 0 → pop
// ============================================================================

/// Scanning context; the top of the stack decides how the next token is read.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    InlineHtml,
    Script,
    /// Code inside `{$…}` or `${…}` within a string; `depth` counts nested `{`.
    Embedded { depth: usize },
    /// Inside an interpolated `"…"` or `` `…` ``; `opened_at` is the byte offset of the quote.
    Quoted { quote: char, opened_at: usize },
    /// Inside a heredoc body.
    Heredoc { label: String, opened_at: usize },
}

/// Lexer for PHP source code.
///
/// Converts source text into a stream of tokens whose texts concatenate back to the source.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    modes: Vec<Mode>,
    /// Operator and punctuation spellings, longest first.
    symbols: Vec<(&'static str, TokenKind)>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            modes: vec![Mode::InlineHtml],
            symbols: symbol_table(),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or every lexical error found on failure.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<LexError>> {
        while !self.is_at_end() {
            let before = self.pos;
            self.scan_token();
            if self.pos == before {
                // Every scanner consumes input; this keeps malformed input from looping.
                self.advance();
                self.add_token(TokenKind::Other, before);
            }
        }

        // Strings and heredocs still open at the end of input.
        let end = self.source.len();
        for mode in &self.modes {
            match mode {
                Mode::Quoted { opened_at, .. } => self
                    .errors
                    .push(LexError::unterminated_string(Span::new(*opened_at, end))),
                Mode::Heredoc { label, opened_at } => self
                    .errors
                    .push(LexError::unterminated_heredoc(label, Span::new(*opened_at, end))),
                _ => {}
            }
        }

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Consume one line break (`\r\n`, `\n` or `\r`) if present.
    fn match_newline(&mut self) -> bool {
        if self.starts_with("\r\n") {
            self.pos += 2;
            true
        } else {
            self.match_char('\n') || self.match_char('\r')
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let mut token = Token::new(kind, &self.source[start..self.pos], Span::new(start, self.pos));
        token.position = self.tokens.len();
        self.tokens.push(token);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    fn set_mode(&mut self, mode: Mode) {
        if let Some(top) = self.modes.last_mut() {
            *top = mode;
        } else {
            self.modes.push(mode);
        }
    }

    /// Last non-trivia token emitted so far.
    fn last_significant(&self) -> Option<TokenKind> {
        self.tokens.iter().rev().map(|t| t.kind).find(|k| !k.is_trivia())
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        match self.modes.last().cloned() {
            None | Some(Mode::InlineHtml) => self.scan_inline_html(),
            Some(Mode::Script) => self.scan_code(false),
            Some(Mode::Embedded { .. }) => self.scan_code(true),
            Some(Mode::Quoted { quote, opened_at }) => self.scan_quoted_part(quote, opened_at),
            Some(Mode::Heredoc { label, opened_at }) => self.scan_heredoc_part(&label, opened_at),
        }
    }

    /// Scan inline HTML up to (and including) the next open tag.
    fn scan_inline_html(&mut self) {
        let start = self.pos;
        let rest = self.rest();
        let tag = rest
            .match_indices("<?")
            .map(|(i, _)| i)
            .find_map(|i| open_tag_len(&rest[i..]).map(|len| (i, len)));

        match tag {
            Some((offset, len)) => {
                if offset > 0 {
                    self.pos += offset;
                    self.add_token(TokenKind::InlineHtml, start);
                }
                let tag_start = self.pos;
                self.pos += len;
                let kind = if self.source[tag_start..self.pos].starts_with("<?=") {
                    TokenKind::OpenTagWithEcho
                } else {
                    TokenKind::OpenTag
                };
                self.add_token(kind, tag_start);
                self.set_mode(Mode::Script);
            }
            None => {
                self.pos = self.source.len();
                self.add_token(TokenKind::InlineHtml, start);
            }
        }
    }

    /// Scan one token of PHP code. `embedded` is set inside `{$…}`/`${…}` string interpolation.
    fn scan_code(&mut self, embedded: bool) {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return;
        };

        match c {
            ' ' | '\t' | '\n' | '\r' => {
                self.advance_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
                self.add_token(TokenKind::Whitespace, start);
            }

            // Processing context
            '?' if !embedded && self.starts_with("?>") => {
                self.pos += 2;
                self.match_newline();
                self.add_token(TokenKind::CloseTag, start);
                self.set_mode(Mode::InlineHtml);
            }

            // Attributes
            '#' if self.starts_with("#[") => {
                self.pos += 2;
                self.add_punct(PunctuationId::AttributeOpen, start);
            }

            // Comments
            '#' => self.scan_line_comment(start),
            '/' if self.starts_with("//") => self.scan_line_comment(start),
            '/' if self.starts_with("/*") => self.scan_block_comment(start),

            // Variables
            '$' if self.peek_nth(1).is_some_and(is_ident_start) => {
                self.advance();
                self.advance_while(is_ident_continue);
                self.add_token(TokenKind::Variable, start);
            }

            // Strings
            '\'' => self.scan_single_quoted(start),
            '"' => self.scan_double_quoted(start),
            '`' => {
                self.advance();
                self.add_punct(PunctuationId::Backtick, start);
                self.modes.push(Mode::Quoted {
                    quote: '`',
                    opened_at: start,
                });
            }
            '<' if self.starts_with("<<<") && self.scan_heredoc_start(start) => {}

            // Braces track interpolation depth
            '{' => {
                self.advance();
                self.add_punct(PunctuationId::LBrace, start);
                if let Some(Mode::Embedded { depth }) = self.modes.last_mut() {
                    *depth += 1;
                }
            }
            '}' => {
                self.advance();
                self.add_punct(PunctuationId::RBrace, start);
                match self.modes.last_mut() {
                    Some(Mode::Embedded { depth: 0 }) => {
                        self.modes.pop();
                    }
                    Some(Mode::Embedded { depth }) => *depth -= 1,
                    _ => {}
                }
            }
            '(' => {
                if !self.scan_cast(start) {
                    self.advance();
                    self.add_punct(PunctuationId::LParen, start);
                }
            }

            // Numbers
            '0'..='9' => self.scan_number(start),
            '.' if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => self.scan_number(start),

            // Names and keywords
            _ if is_ident_start(c) => self.scan_word(start),

            _ => self.scan_symbol(start),
        }
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// `//` and `#` comments end before the line break or a `?>`.
    fn scan_line_comment(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if c == '\n' || c == '\r' || self.starts_with("?>") {
                break;
            }
            self.advance();
        }
        self.add_token(TokenKind::Comment, start);
    }

    fn scan_block_comment(&mut self, start: usize) {
        let is_doc = self.starts_with("/**") && self.peek_nth(3).is_some_and(char::is_whitespace);
        self.pos += 2;
        match self.rest().find("*/") {
            Some(end) => self.pos += end + 2,
            None => {
                self.pos = self.source.len();
                self.errors
                    .push(LexError::unterminated_comment(Span::new(start, self.pos)));
            }
        }
        let kind = if is_doc {
            TokenKind::DocComment
        } else {
            TokenKind::Comment
        };
        self.add_token(kind, start);
    }

    // ========================================================================
    // Names, casts and symbols
    // ========================================================================

    fn scan_word(&mut self, start: usize) {
        self.advance_while(is_ident_continue);
        let spelling = &self.source[start..self.pos];

        // Member names (`->list`) and segments of namespaced names (`Foo\Enum`) are plain names even when
        // they spell a keyword.
        let is_name = self.starts_with("\\")
            || self.last_significant().is_some_and(|k| {
                k.is_any_punctuation(&[
                    PunctuationId::Arrow,
                    PunctuationId::NullsafeArrow,
                    PunctuationId::Backslash,
                ])
            });

        match keyword_id(spelling) {
            Some(KeywordId::Enum) if !self.enum_declaration_follows() => self.add_token(TokenKind::Ident, start),
            Some(id) if !is_name => self.add_token(TokenKind::Keyword(id), start),
            _ => self.add_token(TokenKind::Ident, start),
        }
    }

    /// `enum` only declares a type when whitespace and a name other than `extends`/`implements` follow;
    /// elsewhere (`new Enum()`, `extends Enum`) it is an ordinary name.
    fn enum_declaration_follows(&self) -> bool {
        let rest = self.rest();
        let after = rest.trim_start_matches([' ', '\t', '\n', '\r']);
        if after.len() == rest.len() || !after.starts_with(is_ident_start) {
            return false;
        }
        let len = after.find(|c: char| !is_ident_continue(c)).unwrap_or(after.len());
        !matches!(keyword_id(&after[..len]), Some(KeywordId::Extends | KeywordId::Implements))
    }

    /// Try to scan `(type)` as a single cast token.
    fn scan_cast(&mut self, start: usize) -> bool {
        let rest = self.rest();
        let inner = rest[1..].trim_start_matches([' ', '\t']);
        let name_len = inner.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(inner.len());
        let name = &inner[..name_len];
        if !CAST_TYPES.iter().any(|t| t.eq_ignore_ascii_case(name)) {
            return false;
        }
        let after = inner[name_len..].trim_start_matches([' ', '\t']);
        if !after.starts_with(')') {
            return false;
        }
        let consumed = rest.len() - after.len() + 1;
        self.pos += consumed;
        self.add_token(TokenKind::Cast, start);
        true
    }

    fn scan_symbol(&mut self, start: usize) {
        let rest = self.rest();
        let matched = self
            .symbols
            .iter()
            .find(|(spelling, _)| rest.starts_with(spelling))
            .copied();

        match matched {
            Some((spelling, kind)) => {
                self.pos += spelling.len();
                self.add_token(kind, start);
            }
            None => {
                self.advance();
                self.add_token(TokenKind::Other, start);
            }
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Type names accepted inside a cast.
const CAST_TYPES: &[&str] = &[
    "int", "integer", "bool", "boolean", "float", "double", "real", "string", "binary", "array", "object",
    "unset",
];

/// Check if a character can start a PHP label (`[a-zA-Z_\x80-\xff]`).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Check if a character can continue a PHP label.
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

/// Length of the open tag at the start of `s`, if any.
///
/// `<?php` must be followed by whitespace or the end of input, and absorbs one whitespace character
/// (`\r\n` counts as one). `<?=` stands alone.
fn open_tag_len(s: &str) -> Option<usize> {
    if s.starts_with("<?=") {
        return Some(3);
    }
    let head = s.get(..5)?;
    if !head.eq_ignore_ascii_case("<?php") {
        return None;
    }
    let tail = &s[5..];
    if tail.is_empty() {
        Some(5)
    } else if tail.starts_with("\r\n") {
        Some(7)
    } else if tail.starts_with([' ', '\t', '\n', '\r']) {
        Some(6)
    } else {
        None
    }
}

/// Symbol spellings from the registries, longest first. Brackets, braces and quotes are scanned
/// separately.
fn symbol_table() -> Vec<(&'static str, TokenKind)> {
    let mut table: Vec<(&'static str, TokenKind)> = operators::symbols_longest_first()
        .into_iter()
        .filter_map(|s| operators::from_str(s).map(|id| (s, TokenKind::Operator(id))))
        .collect();
    table.extend(
        punctuation::PUNCTUATION
            .iter()
            .filter(|p| !p.interpolation_only && p.category != PunctuationCategory::Quote)
            .map(|p| (p.canonical, TokenKind::Punctuation(p.id))),
    );
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    table
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
