//! Numeric literal scanning.

use super::{Lexer, TokenKind};

impl Lexer<'_> {
    /// Scan an integer or float literal: decimal with `_` separators, `0x…`, `0b…`, `1.5`, `.5`, `1e-3`.
    pub(super) fn scan_number(&mut self, start: usize) {
        if let Some(radix_digits) = self.radix_prefix() {
            self.pos += 2;
            self.advance_while(|c| radix_digits(c) || c == '_');
            self.add_token(TokenKind::IntLiteral, start);
            return;
        }

        let mut is_float = false;
        self.advance_while(|c| c.is_ascii_digit() || c == '_');
        if self.peek() == Some('.') && !self.starts_with("...") {
            is_float = true;
            self.advance();
            self.advance_while(|c| c.is_ascii_digit() || c == '_');
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let digit_at = if matches!(self.peek_nth(1), Some('+' | '-')) { 2 } else { 1 };
            if self.peek_nth(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                self.pos += digit_at;
                self.advance_while(|c| c.is_ascii_digit());
            }
        }

        let kind = if is_float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };
        self.add_token(kind, start);
    }

    /// Digit predicate for a `0x`/`0b` literal starting here.
    fn radix_prefix(&self) -> Option<fn(char) -> bool> {
        let digits: fn(char) -> bool = match self.rest().get(..2)? {
            "0x" | "0X" => |c| c.is_ascii_hexdigit(),
            "0b" | "0B" => |c| c == '0' || c == '1',
            _ => return None,
        };
        self.peek_nth(2).is_some_and(digits).then_some(digits)
    }
}
