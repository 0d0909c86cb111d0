//! Batch assembly for the command line.
//!
//! A batch is one invocation's worth of integers handed to a built closure.
//! Trailing positional values form the first batch; each repeated `--batch`
//! flag supplies a further batch as a whitespace-separated list.

use crate::error::{Error, Result};

/// Parse one `--batch` argument.
///
/// An empty or all-whitespace string is a legal zero-element batch, which the
/// stateful builders treat as a no-op call.
pub fn parse_batch(raw: &str) -> Result<Vec<i64>> {
    raw.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|source| Error::InvalidBatch {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Assemble the batches for one command invocation.
pub fn gather_batches(values: Vec<i64>, batches: &[String]) -> Result<Vec<Vec<i64>>> {
    let mut out = Vec::new();
    if !values.is_empty() {
        out.push(values);
    }
    for raw in batches {
        out.push(parse_batch(raw)?);
    }
    Ok(out)
}
