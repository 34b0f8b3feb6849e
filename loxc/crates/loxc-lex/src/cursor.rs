//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking an immutable source buffer. It steps over whole UTF-8
//! characters and counts the newlines it consumes, so the scanner never has
//! to touch byte offsets or line numbers directly.

/// A cursor over source text.
///
/// Every read is bounds-checked: looking past the end yields `'\0'` and
/// advancing at the end is a no-op.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
///
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based): one plus the newlines consumed so far.
    line: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1.5");
    /// assert_eq!(cursor.peek_char(0), '1');
    /// assert_eq!(cursor.peek_char(1), '.');
    /// assert_eq!(cursor.peek_char(2), '5');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes one character and returns it, or `None` at the end.
    ///
    /// Consuming `'\n'` moves to the next line.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('!'));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from byte `start` up to the cursor.
    ///
    /// An out-of-range or non-boundary `start` yields an empty slice.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("print x");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "print");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }
}
