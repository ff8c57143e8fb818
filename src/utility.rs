use std::{io::Read, str::FromStr};

use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),

    #[error("missing {name} (token {position})")]
    Missing { name: &'static str, position: usize },

    #[error("unable to parse {name} from {token:?} (token {position})")]
    Malformed {
        name: &'static str,
        token: String,
        position: usize,
    },

    #[error("edge {tail} -> {head} references a vertex outside 0..{number_of_vertices}")]
    VertexOutOfRange {
        tail: u32,
        head: u32,
        number_of_vertices: u32,
    },
}

/// Whitespace separated tokens of a text input, parsed one value at a time.
pub struct Tokens<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Tokens<'a> {
        Tokens {
            tokens: input.split_whitespace(),
            position: 0,
        }
    }

    pub fn next_value<T: FromStr>(&mut self, name: &'static str) -> Result<T, InputError> {
        let position = self.position;
        let token = self
            .tokens
            .next()
            .ok_or(InputError::Missing { name, position })?;
        self.position += 1;

        token.parse().map_err(|_| InputError::Malformed {
            name,
            token: token.to_string(),
            position,
        })
    }
}

/// Parses a count `n` followed by `n` values.
pub fn parse_numbers<T: FromStr>(input: &str) -> Result<Vec<T>, InputError> {
    let mut tokens = Tokens::new(input);
    let count: usize = tokens.next_value("count")?;
    (0..count).map(|_| tokens.next_value("value")).collect()
}

pub fn read_numbers<T: FromStr, R: Read>(mut reader: R) -> Result<Vec<T>, InputError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_numbers(&input)
}

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

/// Installs the stderr log subscriber for the binaries. Stdout is reserved for
/// results. The level is taken from `RUST_LOG` and defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
