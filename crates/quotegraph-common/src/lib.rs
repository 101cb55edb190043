//! # QuoteGraph Common
//!
//! Shared error types, logging setup, and small utilities used across
//! all other crates in the QuoteGraph Bot workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod utils;

pub use error::{QuoteGraphError, Result};
pub use utils::*;
