//! Lexer for tag markup.
//!
//! A tag is `<` + optional `/` + a name of word characters + optional
//! whitespace-led attribute text + `>`. Text directly after a tag, up to the
//! next `<`, is that tag's run. Any other text (before the first tag, or a
//! `<` that does not form a tag and what follows it) is literal.

/// A token produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text outside any tag's run. Never styled.
    Literal(&'a str),
    /// Opening tag: `<hex #ff0000>` gives name `hex`, attributes ` #ff0000`.
    OpenTag {
        name: &'a str,
        /// Raw attribute text including its leading whitespace.
        attributes: Option<&'a str>,
    },
    /// Closing tag with its (unchecked) name.
    CloseTag(&'a str),
    /// Non-empty text immediately following a tag.
    Run(&'a str),
}

/// Lexer for tag markup text.
///
/// The lexer never fails: anything that does not form a tag comes out as
/// literal text.
///
/// # Examples
///
/// ```
/// use tagtext::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("a<red>b</red>").collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Literal("a"),
///         Token::OpenTag { name: "red", attributes: None },
///         Token::Run("b"),
///         Token::CloseTag("red"),
///     ]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    /// The previous token was a tag, so the next text is its run.
    after_tag: bool,
    /// Last `>` lookup: (searched from, found at).
    gt_cache: Option<(usize, Option<usize>)>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            after_tag: false,
            gt_cache: None,
        }
    }

    /// Consume text up to the next `<` or end of input.
    fn consume_run(&mut self) -> &'a str {
        let start = self.pos;
        let end = self.input[start..]
            .find('<')
            .map_or(self.input.len(), |offset| start + offset);
        self.pos = end;
        &self.input[start..end]
    }

    /// Position of the first `>` at or after `from`.
    fn next_gt(&mut self, from: usize) -> Option<usize> {
        if let Some((searched, found)) = self.gt_cache {
            if searched <= from && found.is_none_or(|gt| gt >= from) {
                return found;
            }
        }
        let found = self.input[from..].find('>').map(|offset| from + offset);
        self.gt_cache = Some((from, found));
        found
    }

    /// Try to match a tag starting at `start`, which must hold `<`.
    ///
    /// Returns the token and the position just past the closing `>`.
    fn match_tag(&mut self, start: usize) -> Option<(Token<'a>, usize)> {
        let input = self.input;
        let bytes = input.as_bytes();
        let mut i = start + 1;

        let closing = bytes.get(i) == Some(&b'/');
        if closing {
            i += 1;
        }

        let name_start = i;
        while bytes.get(i).is_some_and(|b| is_word_byte(*b)) {
            i += 1;
        }
        if i == name_start {
            return None;
        }
        let name = &input[name_start..i];

        let (attributes, end) = match bytes.get(i) {
            Some(b'>') => (None, i + 1),
            Some(b) if is_space_byte(*b) => {
                // one whitespace then at least one more character before `>`
                let gt = self.next_gt(i)?;
                if gt - i < 2 {
                    return None;
                }
                (Some(&input[i..gt]), gt + 1)
            }
            _ => return None,
        };

        let token = if closing {
            Token::CloseTag(name)
        } else {
            Token::OpenTag { name, attributes }
        };
        Some((token, end))
    }

    /// Find the next tag at or after the current position.
    fn find_tag(&mut self) -> Option<(usize, Token<'a>, usize)> {
        let mut from = self.pos;
        while let Some(offset) = self.input[from..].find('<') {
            let start = from + offset;
            if let Some((token, end)) = self.match_tag(start) {
                return Some((start, token, end));
            }
            from = start + 1;
        }
        None
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.after_tag {
            self.after_tag = false;
            let run = self.consume_run();
            if !run.is_empty() {
                return Some(Token::Run(run));
            }
        }

        if self.pos >= self.input.len() {
            return None;
        }

        match self.find_tag() {
            Some((start, _, _)) if start > self.pos => {
                // emit the gap now, the tag is matched again on the next call
                let literal = &self.input[self.pos..start];
                self.pos = start;
                Some(Token::Literal(literal))
            }
            Some((_, token, end)) => {
                self.pos = end;
                self.after_tag = true;
                Some(token)
            }
            None => {
                let literal = &self.input[self.pos..];
                self.pos = self.input.len();
                Some(Token::Literal(literal))
            }
        }
    }
}

/// `[A-Za-z0-9_]`
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Space, tab, newline, vertical tab, form feed, carriage return.
fn is_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
