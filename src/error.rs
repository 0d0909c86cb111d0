use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown predicate '{0}' (expected one of: odd, even, positive, negative)")]
    UnknownPredicate(String),

    #[error("Unknown transform '{0}' (expected one of: double, square, negate, abs)")]
    UnknownTransform(String),

    #[error("Unknown combiner '{0}' (expected one of: add, mul, min, max)")]
    UnknownCombiner(String),

    #[error("Invalid integer '{token}' in batch")]
    InvalidBatch {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
