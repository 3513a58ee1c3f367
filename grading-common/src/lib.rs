//! Shared plumbing for the grading helpers: reading the fixed input files,
//! parsing the integers in them and setting up logging.

use std::path::{Path, PathBuf};

use num_bigint_dig::BigInt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is empty, expected an integer", path.display())]
    Empty { path: PathBuf },
    #[error("{}:{line}: `{token}` is not an integer", path.display())]
    NotAnInteger {
        path: PathBuf,
        line: usize,
        token: String,
    },
}

/// Logs go to stderr, stdout is reserved for verdicts and generated answers.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn read_input(path: &Path) -> Result<String, InputError> {
    tracing::debug!(path = %path.display(), "reading input");
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_owned(),
        source,
    })
}

/// The whole file must hold exactly one integer, surrounding whitespace is ignored.
pub fn parse_single_integer(path: &Path, text: &str) -> Result<BigInt, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty {
            path: path.to_owned(),
        });
    }
    // BigInt::from_str accepts '_' separators, a graded answer never has them
    if trimmed.contains('_') {
        return Err(not_an_integer(path, text));
    }
    trimmed
        .parse::<BigInt>()
        .map_err(|_| not_an_integer(path, text))
}

/// Points at the first non-blank line that is not the lone leading integer.
fn not_an_integer(path: &Path, text: &str) -> InputError {
    let mut seen_integer = false;
    let mut offending = None;
    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if seen_integer || line.contains('_') || line.parse::<BigInt>().is_err() {
            offending = Some((line_idx + 1, line));
            break;
        }
        seen_integer = true;
    }
    let (line, token) = offending.unwrap_or((1, text.trim()));
    InputError::NotAnInteger {
        path: path.to_owned(),
        line,
        token: token.to_owned(),
    }
}

/// One row per non-blank line, whitespace separated.
pub fn parse_integer_rows(path: &Path, text: &str) -> Result<Vec<Vec<i64>>, InputError> {
    let mut rows = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| InputError::NotAnInteger {
                    path: path.to_owned(),
                    line: line_idx + 1,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    tracing::debug!(path = %path.display(), rows = rows.len(), "parsed integer rows");
    Ok(rows)
}
