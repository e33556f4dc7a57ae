#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]

pub mod env;
pub mod error;
pub mod lex;
pub mod node;
pub mod parse;
pub mod source;

pub use crate::{
    env::{Binding, Environment},
    error::{Error, ErrorKind, Result},
    lex::{lex, Lexer, Location, Span, Token},
    node::Node,
    parse::{parse_expr, parse_program},
    source::Source,
};
