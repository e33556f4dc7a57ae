use std::fmt;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ErrorKind {
    /// Bad or missing inputs to an internal operation.
    Arguments,
    /// Reserved for type mismatches.
    Type,
    Generic,
    Syntax,
    /// A path that is explicitly not implemented yet.
    Todo,
}

macro_rules! error_kind_str {
    ($($word:tt => $str:literal),+,) => {
        impl fmt::Display for ErrorKind {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self {
                    $(Self::$word => write!(f, $str)),+
                }
            }
        }
    }
}

error_kind_str! {
    Arguments => "Invalid arguments",
    Type => "Mismatched types",
    Generic => "",
    Syntax => "Invalid syntax",
    Todo => "TODO (not implemented)",
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("{kind}{}", message_suffix(.message))]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    pub fn arguments(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Arguments, message)
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Syntax, message)
    }

    pub fn todo(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Todo, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Render the error the way the command line prints it: the kind on one line, then the
    /// message (if any) on the next.
    pub fn report(&self) -> String {
        let mut out = format!("ERROR: {}\n", self.kind);
        if let Some(message) = &self.message {
            out.push_str(&format!(": {message}\n"));
        }
        out
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map_or_else(String::new, |m| format!(": {m}"))
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
