//! Token generators.
//!
//! A [`Generator`] turns one input into one [`Token`]. Generators are pure
//! with respect to shared state: they never remember what they produced, which
//! is left to the cache sitting in front of them.

pub mod content;
pub mod salt;
pub mod salted;

pub use content::ContentHashGenerator;
pub use salt::{OsSaltSource, SaltSource};
pub use salted::SaltedGenerator;

use hashgate_core::{Result, Token};

/// Trait for generating tokens.
///
/// Implementations can vary from deterministic content hashes to salted
/// digests whose output differs on every call.
pub trait Generator: Send + Sync + 'static {
    /// Generates a token for `input`.
    ///
    /// The only expected failure is the entropy source refusing to produce a
    /// salt; hashing and encoding cannot fail.
    fn generate(&self, input: &str) -> Result<Token>;
}

impl<G: Generator> Generator for std::sync::Arc<G> {
    fn generate(&self, input: &str) -> Result<Token> {
        (**self).generate(input)
    }
}
