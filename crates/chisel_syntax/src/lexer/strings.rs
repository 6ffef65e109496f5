//! Quoted string, interpolation and heredoc scanning.
//!
//! Strings without interpolation are a single `ConstantString` token. Interpolated strings are split the way
//! PHP splits them: delimiter, `EncapsedText` chunks, and the embedded variables/expressions as regular code
//! tokens, so that brackets inside `"$a[0]"` or `"{$a['k']}"` are visible to the analyzer.

use super::{Lexer, Mode, TokenKind, is_ident_continue, is_ident_start};
use crate::diagnostics::LexError;
use crate::span::Span;
use chisel_core::lang::operators::OperatorId;
use chisel_core::lang::punctuation::PunctuationId;

/// Outcome of looking ahead through a double-quoted string body.
enum QuotedBody {
    /// No interpolation; the body (closing quote included) is this many bytes long.
    Plain(usize),
    Interpolated,
    Unterminated,
}

impl Lexer<'_> {
    // ========================================================================
    // Quoted strings
    // ========================================================================

    pub(super) fn scan_single_quoted(&mut self, start: usize) {
        self.advance();
        loop {
            match self.advance() {
                Some('\\') => {
                    self.advance();
                }
                Some('\'') => break,
                Some(_) => {}
                None => {
                    self.errors
                        .push(LexError::unterminated_string(Span::new(start, self.pos)));
                    break;
                }
            }
        }
        self.add_token(TokenKind::ConstantString, start);
    }

    pub(super) fn scan_double_quoted(&mut self, start: usize) {
        match classify_double_quoted(&self.source[start + 1..]) {
            QuotedBody::Plain(len) => {
                self.pos = start + 1 + len;
                self.add_token(TokenKind::ConstantString, start);
            }
            QuotedBody::Interpolated => {
                self.advance();
                self.add_punct(PunctuationId::DoubleQuote, start);
                self.modes.push(Mode::Quoted {
                    quote: '"',
                    opened_at: start,
                });
            }
            QuotedBody::Unterminated => {
                self.pos = self.source.len();
                self.errors
                    .push(LexError::unterminated_string(Span::new(start, self.pos)));
                self.add_token(TokenKind::ConstantString, start);
            }
        }
    }

    /// Scan the next piece of an interpolated `"…"` or `` `…` `` string.
    pub(super) fn scan_quoted_part(&mut self, quote: char, opened_at: usize) {
        let start = self.pos;
        if self.match_char(quote) {
            let id = if quote == '"' {
                PunctuationId::DoubleQuote
            } else {
                PunctuationId::Backtick
            };
            self.add_punct(id, start);
            self.modes.pop();
            return;
        }
        if self.scan_interpolation() {
            return;
        }

        while let Some(c) = self.peek() {
            if c == quote || self.at_interpolation() {
                break;
            }
            if c == '\\' {
                self.advance();
            }
            self.advance();
        }
        if self.pos > start {
            self.add_token(TokenKind::EncapsedText, start);
        }
        if self.is_at_end() {
            self.errors
                .push(LexError::unterminated_string(Span::new(opened_at, self.pos)));
            self.modes.pop();
        }
    }

    // ========================================================================
    // Interpolation
    // ========================================================================

    fn at_interpolation(&self) -> bool {
        self.starts_with("{$")
            || self.starts_with("${")
            || (self.peek() == Some('$') && self.peek_nth(1).is_some_and(is_ident_start))
    }

    /// Scan `{$`, `${` or a simple `$name…` interpolation. Returns `false` if none starts here.
    fn scan_interpolation(&mut self) -> bool {
        let start = self.pos;
        if self.starts_with("{$") {
            self.advance();
            self.add_punct(PunctuationId::CurlyOpen, start);
            self.modes.push(Mode::Embedded { depth: 0 });
            true
        } else if self.starts_with("${") {
            self.pos += 2;
            self.add_punct(PunctuationId::DollarLBrace, start);
            self.modes.push(Mode::Embedded { depth: 0 });
            self.scan_string_var_name();
            true
        } else if self.peek() == Some('$') && self.peek_nth(1).is_some_and(is_ident_start) {
            self.scan_simple_interpolation();
            true
        } else {
            false
        }
    }

    /// `${name}` and `${name[…]}` name the variable directly.
    fn scan_string_var_name(&mut self) {
        let rest = self.rest();
        if !rest.starts_with(is_ident_start) {
            return;
        }
        let len = rest.find(|c: char| !is_ident_continue(c)).unwrap_or(rest.len());
        if rest[len..].starts_with(['[', '}']) {
            let start = self.pos;
            self.pos += len;
            self.add_token(TokenKind::StringVarName, start);
        }
    }

    /// `$name`, optionally followed by one `[offset]` or one `->name`.
    fn scan_simple_interpolation(&mut self) {
        let start = self.pos;
        self.advance();
        self.advance_while(is_ident_continue);
        self.add_token(TokenKind::Variable, start);

        if self.peek() == Some('[') {
            let start = self.pos;
            self.advance();
            self.add_punct(PunctuationId::LBracket, start);
            self.scan_simple_offset();
            let start = self.pos;
            if self.match_char(']') {
                self.add_punct(PunctuationId::RBracket, start);
            }
        } else if self.starts_with("->") && self.peek_nth(2).is_some_and(is_ident_start) {
            self.scan_simple_property(PunctuationId::Arrow, 2);
        } else if self.starts_with("?->") && self.peek_nth(3).is_some_and(is_ident_start) {
            self.scan_simple_property(PunctuationId::NullsafeArrow, 3);
        }
    }

    fn scan_simple_offset(&mut self) {
        let start = self.pos;
        match self.peek() {
            Some('$') if self.peek_nth(1).is_some_and(is_ident_start) => {
                self.advance();
                self.advance_while(is_ident_continue);
                self.add_token(TokenKind::Variable, start);
            }
            Some('-') if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.advance();
                self.add_token(TokenKind::Operator(OperatorId::Minus), start);
                let start = self.pos;
                self.advance_while(|c| c.is_ascii_alphanumeric());
                self.add_token(TokenKind::IntLiteral, start);
            }
            Some(c) if c.is_ascii_digit() => {
                self.advance_while(|c| c.is_ascii_alphanumeric());
                self.add_token(TokenKind::IntLiteral, start);
            }
            Some(c) if is_ident_start(c) => {
                self.advance_while(is_ident_continue);
                self.add_token(TokenKind::Ident, start);
            }
            _ => {}
        }
    }

    fn scan_simple_property(&mut self, arrow: PunctuationId, arrow_len: usize) {
        let start = self.pos;
        self.pos += arrow_len;
        self.add_punct(arrow, start);
        let start = self.pos;
        self.advance_while(is_ident_continue);
        self.add_token(TokenKind::Ident, start);
    }

    // ========================================================================
    // Heredoc / nowdoc
    // ========================================================================

    /// Scan a `<<<LABEL` header. Returns `false` (consuming nothing) if the header is malformed, in which
    /// case `<<<` is read as operators.
    pub(super) fn scan_heredoc_start(&mut self, start: usize) -> bool {
        let source = self.source;
        let header = source[start + 3..].trim_start_matches([' ', '\t']);
        let (quote, inner) = match header.chars().next() {
            Some(q @ ('"' | '\'')) => (Some(q), &header[1..]),
            _ => (None, header),
        };
        if !inner.starts_with(is_ident_start) {
            return false;
        }
        let label_len = inner.find(|c: char| !is_ident_continue(c)).unwrap_or(inner.len());
        let label = &inner[..label_len];
        let mut after = &inner[label_len..];
        if let Some(q) = quote {
            match after.strip_prefix(q) {
                Some(rest) => after = rest,
                None => return false,
            }
        }
        let newline_len = if after.starts_with("\r\n") {
            2
        } else if after.starts_with(['\n', '\r']) {
            1
        } else {
            return false;
        };

        self.pos = source.len() - after.len() + newline_len;
        self.add_token(TokenKind::HeredocStart, start);

        if quote == Some('\'') {
            self.scan_nowdoc_body(label, start);
        } else {
            self.modes.push(Mode::Heredoc {
                label: label.to_string(),
                opened_at: start,
            });
        }
        true
    }

    /// Nowdoc bodies are never interpolated: one text token, then the closing label.
    fn scan_nowdoc_body(&mut self, label: &str, opened_at: usize) {
        let body_start = self.pos;
        loop {
            if let Some(len) = self.heredoc_end_len(label) {
                if self.pos > body_start {
                    self.add_token(TokenKind::EncapsedText, body_start);
                }
                let start = self.pos;
                self.pos += len;
                self.add_token(TokenKind::HeredocEnd, start);
                return;
            }
            match self.rest().find('\n') {
                Some(i) => self.pos += i + 1,
                None => {
                    self.pos = self.source.len();
                    if self.pos > body_start {
                        self.add_token(TokenKind::EncapsedText, body_start);
                    }
                    self.errors
                        .push(LexError::unterminated_heredoc(label, Span::new(opened_at, self.pos)));
                    return;
                }
            }
        }
    }

    /// Scan the next piece of a heredoc body.
    pub(super) fn scan_heredoc_part(&mut self, label: &str, opened_at: usize) {
        let start = self.pos;
        if self.at_line_start() {
            if let Some(len) = self.heredoc_end_len(label) {
                self.pos += len;
                self.add_token(TokenKind::HeredocEnd, start);
                self.modes.pop();
                return;
            }
        }
        if self.scan_interpolation() {
            return;
        }

        while !self.is_at_end() && !self.at_interpolation() {
            let mut c = self.advance();
            if c == Some('\\') {
                c = self.advance();
            }
            if c == Some('\n') && self.heredoc_end_len(label).is_some() {
                break;
            }
        }
        if self.pos > start {
            self.add_token(TokenKind::EncapsedText, start);
        }
        if self.is_at_end() {
            self.errors
                .push(LexError::unterminated_heredoc(label, Span::new(opened_at, self.pos)));
            self.modes.pop();
        }
    }

    fn at_line_start(&self) -> bool {
        self.pos == 0 || self.source[..self.pos].ends_with(['\n', '\r'])
    }

    /// Length of the closing label line at the current position (indentation included), if it is one.
    fn heredoc_end_len(&self, label: &str) -> Option<usize> {
        let rest = self.rest();
        let after = rest.trim_start_matches([' ', '\t']).strip_prefix(label)?;
        if after.starts_with(is_ident_continue) {
            return None;
        }
        Some(rest.len() - after.len())
    }
}

/// Look ahead through a double-quoted body (after the opening quote).
fn classify_double_quoted(body: &str) -> QuotedBody {
    let mut chars = body.char_indices().peekable();
    let mut interpolated = false;
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' => {
                return if interpolated {
                    QuotedBody::Interpolated
                } else {
                    QuotedBody::Plain(i + 1)
                };
            }
            '$' => {
                if chars.peek().is_some_and(|&(_, n)| n == '{' || is_ident_start(n)) {
                    interpolated = true;
                }
            }
            '{' => {
                if chars.peek().is_some_and(|&(_, n)| n == '$') {
                    interpolated = true;
                }
            }
            _ => {}
        }
    }
    if interpolated {
        QuotedBody::Interpolated
    } else {
        QuotedBody::Unterminated
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, lex};
    use chisel_core::lang::punctuation::PunctuationId;

    fn texts(source: &str) -> Vec<String> {
        lex(source).unwrap().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn plain_strings_are_single_tokens() {
        assert_eq!(texts(r#"<?php 'a\'b' "c\"d$""#), vec!["<?php ", r"'a\'b'", " ", r#""c\"d$""#]);
    }

    #[test]
    fn escaped_dollar_does_not_interpolate() {
        let tokens = lex(r#"<?php "\$a""#).unwrap();
        assert_eq!(tokens[1].kind, TokenKind::ConstantString);
    }

    #[test]
    fn simple_interpolation_with_offset() {
        assert_eq!(
            texts(r#"<?php $text = "foo $bbb[0] bar";"#),
            vec!["<?php ", "$text", " ", "=", " ", "\"", "foo ", "$bbb", "[", "0", "]", " bar", "\"", ";"]
        );
    }

    #[test]
    fn dollar_brace_names_the_variable() {
        let tokens = lex(r#"<?php $text = "foo ${aaa[123]} bar";"#).unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds[7], TokenKind::Punctuation(PunctuationId::DollarLBrace));
        assert_eq!(kinds[8], TokenKind::StringVarName);
        assert_eq!(kinds[9], TokenKind::Punctuation(PunctuationId::LBracket));
        assert_eq!(kinds[12], TokenKind::Punctuation(PunctuationId::RBrace));
        assert_eq!(tokens[13].text, " bar");
    }

    #[test]
    fn curly_interpolation_nests_braces() {
        assert_eq!(
            texts(r#"<?php " ({$a['k']})";"#),
            vec!["<?php ", "\"", " (", "{", "$a", "[", "'k'", "]", "}", ")", "\"", ";"]
        );
    }

    #[test]
    fn property_interpolation() {
        assert_eq!(
            texts(r#"<?php "$o->name!""#),
            vec!["<?php ", "\"", "$o", "->", "name", "!", "\""]
        );
    }

    #[test]
    fn backticks_always_split() {
        assert_eq!(texts("<?php `echo 1` + 1;"), vec!["<?php ", "`", "echo 1", "`", " ", "+", " ", "1", ";"]);
    }

    #[test]
    fn heredoc_with_interpolation() {
        let source = "<?php $a = <<<EOT\nhello $name\n  EOT;\n";
        assert_eq!(
            texts(source),
            vec!["<?php ", "$a", " ", "=", " ", "<<<EOT\n", "hello ", "$name", "\n", "  EOT", ";", "\n"]
        );
    }

    #[test]
    fn nowdoc_is_one_text_token() {
        let tokens = lex("<?php <<<'EOT'\n$not {$var}\nEOT;").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::OpenTag,
                TokenKind::HeredocStart,
                TokenKind::EncapsedText,
                TokenKind::HeredocEnd,
                TokenKind::Punctuation(PunctuationId::Semicolon),
            ]
        );
        assert_eq!(tokens[2].text, "$not {$var}\n");
    }

    #[test]
    fn empty_heredoc() {
        assert_eq!(texts("<?php <<<\"X\"\nX;"), vec!["<?php ", "<<<\"X\"\n", "X", ";"]);
    }

    #[test]
    fn closing_label_must_end_the_word() {
        let tokens = lex("<?php <<<EOT\nEOTX\nEOT\n").unwrap();
        assert_eq!(tokens[2].text, "EOTX\n");
        assert_eq!(tokens[3].kind, TokenKind::HeredocEnd);
    }

    #[test]
    fn shift_operator_is_not_a_heredoc() {
        let tokens = lex("<?php $a <<<$b;").unwrap();
        assert!(tokens.iter().all(|t| t.kind != TokenKind::HeredocStart));
    }

    #[test]
    fn unterminated_strings_are_reported() {
        assert_eq!(lex("<?php 'abc").unwrap_err().len(), 1);
        assert_eq!(lex("<?php \"abc").unwrap_err().len(), 1);
        assert_eq!(lex("<?php \"a $b").unwrap_err().len(), 1);
        assert_eq!(lex("<?php <<<EOT\nabc\n").unwrap_err().len(), 1);
    }
}
