use std::{fs, io, path::Path};

use tracing::info;

use crate::lex::Lexer;

/// The full contents of one compilation unit.
///
/// Tokens borrow from the buffer, so it has to outlive everything lexed out of it.
#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    path: Option<String>,
    contents: Box<[u8]>,
}

impl Source {
    pub fn new(path: Option<String>, contents: impl Into<Box<[u8]>>) -> Self {
        Self {
            path,
            contents: contents.into(),
        }
    }

    /// Read the file at `path` into memory. The contents are not checked for any particular
    /// encoding.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read(path)?;
        info!(path = %path.display(), bytes = contents.len(), "loaded source");
        Ok(Self::new(
            Some(path.to_string_lossy().into_owned()),
            contents,
        ))
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn lexer(&self) -> Lexer<'_> {
        Lexer::new(&self.contents, self.path())
    }
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        Self::new(None, s.as_bytes())
    }
}
