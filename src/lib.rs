//! # SeqOps
//!
//! Build reusable filter, map, and fold closures and apply them to integer
//! sequences from the command line.
//!
//! ## Usage
//!
//! ```bash
//! seqops demo
//! seqops filter --predicate odd 1 2 3 4 5
//! seqops reduce --combiner add --batch "1 2 3" --batch "5"
//! ```
//!
//! ## Modules
//!
//! - `catalog` - Named predicates, transforms, and combiners for the CLI
//! - `demo` - Fixed demonstration driver and sequence rendering
//! - `error` - Crate error type
//! - `input` - Batch assembly for the CLI
//! - `ops` - The four closure builders

pub mod catalog;
pub mod demo;
pub mod error;
pub mod input;
pub mod ops;

#[cfg(test)]
mod property_tests;
