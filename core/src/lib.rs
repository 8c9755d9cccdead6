//! Recursive factorial.
//!
//! [`factorial`] is the plain recursive definition over unsigned input, and
//! [`try_factorial`] accepts any signed integer and reports arguments outside
//! the defined domain as [`FactorialError`].

pub mod error;
pub mod factorial;

pub use error::{FactorialError, Result};
pub use factorial::{factorial, try_factorial, MAX_ARGUMENT};

pub(crate) const LOG_TARGET: &str = "fact-core";
