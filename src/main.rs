#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

use clap::Parser;
use sprigc::{lex::is_delimiter, parse, Environment, Node, Source};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Front end for the sprig language
#[derive(Parser)]
#[clap(version)]
struct Config {
    /// Print every token before parsing
    #[clap(short, long)]
    tokens: bool,
    /// Print every parsed expression
    #[clap(short, long)]
    ast: bool,
    /// Bind NAME to an integer in the global scope
    #[clap(
        short = 'D',
        long = "define",
        value_name = "NAME=INT",
        parse(try_from_str = parse_define)
    )]
    defines: Vec<(String, i64)>,
    /// Log more (repeat for even more). RUST_LOG takes precedence
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,
    /// Input file
    #[clap()]
    file: Option<String>,
}

fn parse_define(s: &str) -> Result<(String, i64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=INT but found `{s}`"))?;
    if name.is_empty() || name.bytes().any(is_delimiter) {
        return Err(format!("`{name}` is not a valid name"));
    }
    let value = value
        .parse()
        .map_err(|e| format!("`{value}` is not a valid integer: {e}"))?;
    Ok((name.to_owned(), value))
}

fn init_tracing(verbose: usize) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn print_usage() {
    println!(
        "USAGE: {} <path_to_file_to_compile>",
        env!("CARGO_PKG_NAME")
    );
}

fn main() {
    let config = match Config::try_parse() {
        Ok(config) => config,
        // Help and version keep clap's own output. Anything else is reported and we still
        // exit normally.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            print!("{e}");
            return;
        }
    };
    init_tracing(config.verbose);

    let Some(path) = &config.file else {
        print_usage();
        return;
    };
    let source = match Source::load(path) {
        Ok(source) => source,
        Err(e) => {
            debug!(error = %e, "failed to read source");
            println!("Could not open file at {path}");
            return;
        }
    };

    if config.tokens {
        for token in source.lexer() {
            println!("lexed: {token}");
        }
    }

    let mut global = Environment::root();
    for (id, value) in &config.defines {
        global.bind(id.as_str(), Node::integer(*value));
    }

    match parse::parse_program(&mut source.lexer(), &global) {
        Ok(program) => {
            info!(expressions = program.len(), "parsed program");
            if config.ast {
                for node in &program {
                    println!("{node}");
                }
            }
        }
        Err(e) => print!("{}", e.report()),
    }
}
