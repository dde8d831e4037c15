use crate::TokenCache;
use async_trait::async_trait;
use hashgate_core::{Result, Token};
use hashgate_generator::Generator;
use tracing::trace;

/// A pass-through [`TokenCache`] that runs the generator on every call.
///
/// This is only stable when the generator is deterministic, such as
/// [`ContentHashGenerator`](hashgate_generator::ContentHashGenerator). Putting
/// a salted generator behind it gives a new token per call.
#[derive(Debug, Clone, Default)]
pub struct Uncached<G> {
    generator: G,
}

impl<G> Uncached<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl<G: Generator> TokenCache for Uncached<G> {
    async fn get_or_create(&self, input: &str) -> Result<Token> {
        trace!(input = %input, "generating token without cache");
        self.generator.generate(input)
    }
}
