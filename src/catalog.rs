//! Named predicates, transforms, and combiners for the command line.
//!
//! The catalog is a fixed table of plain function pointers; looking up an
//! unknown name is the only way it can fail.

use crate::error::{Error, Result};

/// Look up a predicate by name.
pub fn predicate(name: &str) -> Result<fn(i64) -> bool> {
    match name {
        "odd" => Ok(|v| v % 2 != 0),
        "even" => Ok(|v| v % 2 == 0),
        "positive" => Ok(|v| v > 0),
        "negative" => Ok(|v| v < 0),
        _ => Err(Error::UnknownPredicate(name.to_string())),
    }
}

/// Look up a transform by name.
pub fn transform(name: &str) -> Result<fn(i64) -> i64> {
    match name {
        "double" => Ok(|v| 2 * v),
        "square" => Ok(|v| v * v),
        "negate" => Ok(|v| -v),
        "abs" => Ok(|v| v.abs()),
        _ => Err(Error::UnknownTransform(name.to_string())),
    }
}

/// Look up a combiner by name.
pub fn combiner(name: &str) -> Result<fn(i64, i64) -> i64> {
    match name {
        "add" => Ok(|a, b| a + b),
        "mul" => Ok(|a, b| a * b),
        "min" => Ok(|a, b| a.min(b)),
        "max" => Ok(|a, b| a.max(b)),
        _ => Err(Error::UnknownCombiner(name.to_string())),
    }
}
