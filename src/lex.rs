use std::{borrow::Cow, fmt};

use tracing::trace;

use crate::error::{Error, Result};

const WHITESPACE: &[u8] = b" \r\n";
const DELIMITERS: &[u8] = b" \r\n,():";

pub fn is_whitespace(b: u8) -> bool {
    WHITESPACE.contains(&b)
}

/// A delimiter ends the token before it, and is a one byte token of its own when it comes first.
pub fn is_delimiter(b: u8) -> bool {
    DELIMITERS.contains(&b)
}

/// Half-open byte range `[begin, end)` into a source buffer.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
}

impl Span {
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "span begins after it ends");
        Self { begin, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// Lex the next token of `source`, starting the scan at `cursor`.
///
/// Leading whitespace is skipped. Once the input is exhausted the returned span is empty and
/// sits at the end of `source`. The next call should start from the returned span's end.
pub fn lex(source: &[u8], cursor: usize) -> Result<Span> {
    let Some(rest) = source.get(cursor..) else {
        return Err(Error::arguments(format!(
            "Can not lex from offset {cursor} of a {} byte source.",
            source.len()
        )));
    };

    let begin = cursor + rest.iter().take_while(|&&b| is_whitespace(b)).count();
    if begin == source.len() {
        return Ok(Span::new(begin, begin));
    }

    let run = source[begin..]
        .iter()
        .take_while(|&&b| !is_delimiter(b))
        .count();
    // Always make progress: a leading delimiter is its own token.
    Ok(Span::new(begin, begin + run.max(1)))
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Location<'f> {
    pub file: Option<&'f str>,
    pub pos: (usize, usize),
}

impl<'f> fmt::Display for Location<'f> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (row, col) = self.pos;
        if let Some(file) = self.file {
            write!(f, "{file}:{row}:{col}")
        } else {
            write!(f, "{row}:{col}")
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token<'src> {
    pub span: Span,
    pub value: &'src [u8],
    pub location: Location<'src>, // Can be a separate lifetime if needed.
}

impl<'src> Token<'src> {
    /// The empty token handed out once the input is exhausted.
    pub fn is_eof(&self) -> bool {
        self.span.is_empty()
    }

    pub fn is_delimiter(&self) -> bool {
        matches!(self.value, [b] if is_delimiter(*b))
    }

    pub fn text(&self) -> Cow<'src, str> {
        String::from_utf8_lossy(self.value)
    }
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Lexer<'src> {
    cursor: usize,
    content: &'src [u8],
    line_begin: usize,
    line: usize,
    file: Option<&'src str>, // Can be a separate lifetime if needed.
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src [u8], file: Option<&'src str>) -> Self {
        Lexer {
            content: source,
            cursor: 0,
            line_begin: 0,
            line: 1,
            file,
        }
    }

    fn trim_left(&mut self) {
        while let Some(&c) = self.content.get(self.cursor) {
            if !is_whitespace(c) {
                break;
            }
            self.cursor += 1;
            if c == b'\n' {
                self.line += 1;
                self.line_begin = self.cursor;
            }
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn location(&self) -> Location<'src> {
        Location {
            file: self.file,
            pos: (self.line, self.cursor - self.line_begin + 1),
        }
    }

    /// Lex the token at the cursor and move past it. At the end of input this keeps returning
    /// an empty token.
    pub fn next_token(&mut self) -> Result<Token<'src>> {
        self.trim_left();
        let location = self.location();
        let span = lex(self.content, self.cursor)?;
        self.cursor = span.end;

        let token = Token {
            span,
            value: &self.content[span.begin..span.end],
            location,
        };
        trace!(begin = span.begin, end = span.end, token = %token, "lexed");
        Ok(token)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        // The cursor never passes the end of `content`, so this can't fail. Stop anyway if it
        // does rather than spin on the same error.
        match self.next_token() {
            Ok(t) if !t.is_eof() => Some(t),
            Ok(_) | Err(_) => None,
        }
    }
}
