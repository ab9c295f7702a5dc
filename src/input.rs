//! Amount entry field
//!
//! A single-line text buffer with a cursor that only ever holds digits and
//! at most one decimal point. Every edit is checked against the text it
//! would produce, so invalid characters never reach the parser.

use crate::models::Money;

const DECIMAL_SEPARATOR: char = '.';

/// Would `candidate` be acceptable content for the amount field?
///
/// Empty text is accepted so the field can be cleared.
pub fn accepts_amount_text(candidate: &str) -> bool {
    candidate
        .chars()
        .all(|c| c.is_ascii_digit() || c == DECIMAL_SEPARATOR)
        && candidate.matches(DECIMAL_SEPARATOR).count() <= 1
}

/// Filtered text input for a budget amount
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountInput {
    content: String,
    cursor: usize,
}

impl AmountInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill with an existing amount, cursor at the end
    pub fn from_amount(amount: Money) -> Self {
        let content = amount.format_plain();
        let cursor = content.len();
        Self { content, cursor }
    }

    /// Insert a character at the cursor
    ///
    /// Returns false, leaving the field untouched, if the result would not
    /// be a valid amount.
    pub fn insert(&mut self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.paste(c.encode_utf8(&mut buf))
    }

    /// Insert a whole string at the cursor, all or nothing
    pub fn paste(&mut self, text: &str) -> bool {
        let mut candidate = self.content.clone();
        candidate.insert_str(self.cursor, text);
        if !accepts_amount_text(&candidate) {
            return false;
        }
        self.content = candidate;
        self.cursor += text.len();
        true
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_amount_text() {
        assert!(accepts_amount_text(""));
        assert!(accepts_amount_text("150"));
        assert!(accepts_amount_text("150.25"));
        assert!(accepts_amount_text(".5"));
        assert!(!accepts_amount_text("1.5.0"));
        assert!(!accepts_amount_text("$150"));
        assert!(!accepts_amount_text("1,000"));
        assert!(!accepts_amount_text("-5"));
        assert!(!accepts_amount_text("1e5"));
    }

    #[test]
    fn test_typing_rejects_bad_characters() {
        let mut input = AmountInput::new();
        for c in "12a.5.0x".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "12.50");
    }

    #[test]
    fn test_second_separator_rejected_anywhere() {
        let mut input = AmountInput::new();
        input.paste("10.5");
        input.move_start();
        assert!(!input.insert('.'));
        assert_eq!(input.value(), "10.5");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_paste_is_all_or_nothing() {
        let mut input = AmountInput::new();
        assert!(input.paste("99"));
        assert!(!input.paste("1,000"));
        assert_eq!(input.value(), "99");
    }

    #[test]
    fn test_prefill_and_edit() {
        let mut input = AmountInput::from_amount(Money::from_cents(10000));
        assert_eq!(input.value(), "100.00");

        input.backspace();
        input.backspace();
        input.backspace();
        input.move_left();
        input.insert('5');
        assert_eq!(input.value(), "1050");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "050");

        input.clear();
        assert!(input.is_empty());
    }
}
