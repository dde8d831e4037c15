//! Core types for the Hashgate token service.
//!
//! This crate holds the pieces every other crate agrees on: the [`Token`]
//! handed back to callers, the [`Salt`] mixed into its digest, the fixed-width
//! base62 codec and the digest functions themselves.

pub mod base62;
pub mod digest;
pub mod error;
pub mod salt;
pub mod token;

pub use error::{CoreError, Result};
pub use salt::Salt;
pub use token::Token;
