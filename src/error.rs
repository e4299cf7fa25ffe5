#![forbid(unsafe_code)]

//! Error types for operand validation and result output

use std::num::ParseIntError;
use thiserror::Error;

/// Number of operands the evaluator takes
pub const OPERAND_COUNT: usize = 2;

/// Errors that stop the program before or while printing a result
#[derive(Debug, Error)]
pub enum Error {
    /// The command line did not carry exactly two operands
    #[error("expected exactly {expected} integers, got {given}", expected = OPERAND_COUNT)]
    ArgumentCount { given: usize },

    /// An operand is not a base-10 integer in range
    #[error("invalid integer '{input}': {source}")]
    ArgumentParse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Writing the result failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
