use tracing::debug;

use crate::{
    env::Environment,
    error::{Error, Result},
    lex::{Lexer, Token},
    node::Node,
};

/// Read the next expression, or `None` once the input is exhausted.
///
/// Only integer literals and names bound in `env` are understood so far.
pub fn parse_expr(lexer: &mut Lexer<'_>, env: &Environment) -> Result<Option<Node>> {
    let t = lexer.next_token()?;
    if t.is_eof() {
        return Ok(None);
    }

    if t.is_delimiter() {
        return Err(Error::todo(format!(
            "{}: parsing `{t}` is not implemented",
            t.location
        )));
    }

    let node = if looks_numeric(t.value) {
        Node::Integer(integer_literal(&t)?)
    } else {
        let Ok(ident) = std::str::from_utf8(t.value) else {
            return Err(Error::syntax(format!(
                "{}: `{t}` is not valid UTF-8",
                t.location
            )));
        };
        env.lookup(ident).cloned().ok_or_else(|| {
            Error::syntax(format!(
                "{}: `{ident}` is an unknown name in the current context",
                t.location
            ))
        })?
    };
    debug!(location = %t.location, node = %node, "parsed expression");
    Ok(Some(node))
}

/// Read expressions until the end of input.
pub fn parse_program(lexer: &mut Lexer<'_>, env: &Environment) -> Result<Vec<Node>> {
    let mut program = Vec::new();
    while let Some(node) = parse_expr(lexer, env)? {
        program.push(node);
    }
    Ok(program)
}

fn looks_numeric(value: &[u8]) -> bool {
    match value {
        [b'-', d, ..] | [d, ..] => d.is_ascii_digit(),
        [] => false,
    }
}

fn integer_literal(t: &Token) -> Result<i64> {
    std::str::from_utf8(t.value)
        .ok()
        .and_then(parse_int)
        .ok_or_else(|| {
            Error::syntax(format!(
                "{}: `{t}` is not a valid integer literal",
                t.location
            ))
        })
}

fn parse_int(s: &str) -> Option<i64> {
    let (sign, s) = match s.strip_prefix('-') {
        Some(s) => ("-", s),
        None => ("", s),
    };
    let (radix, digits) = if let Some(s) = s.strip_prefix("0x") {
        (16, s)
    } else if let Some(s) = s.strip_prefix("0o") {
        (8, s)
    } else if let Some(s) = s.strip_prefix("0b") {
        (2, s)
    } else {
        (10, s)
    };
    // `from_str_radix` would accept a second sign here.
    if digits.starts_with(['+', '-']) {
        return None;
    }
    i64::from_str_radix(&format!("{sign}{digits}"), radix).ok()
}
