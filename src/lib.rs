#![forbid(unsafe_code)]

//! Euclid: greatest common divisor of two integers
//!
//! Computes gcd(a, b) with the Euclidean algorithm and prints it, either as a
//! bare number or as JSON Lines.

pub mod cli;
pub mod error;
pub mod euclid;
pub mod output;

pub use error::{Error, Result};
pub use euclid::{gcd, reductions};
