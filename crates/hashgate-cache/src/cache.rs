use async_trait::async_trait;
use hashgate_core::{Result, Token};

/// A memoizing front for a token generator.
///
/// Callers ask for the token of an input; the implementation decides whether
/// a generator has to run. Implementations are shared across request tasks,
/// so every method takes `&self`.
#[async_trait]
pub trait TokenCache: Send + Sync + 'static {
    /// Returns the token for `input`, generating it on first use.
    ///
    /// Once this has returned `Ok(token)` for an input, every later call for
    /// the same input on the same cache returns that same token.
    async fn get_or_create(&self, input: &str) -> Result<Token>;
}

#[async_trait]
impl<C: TokenCache + ?Sized> TokenCache for std::sync::Arc<C> {
    async fn get_or_create(&self, input: &str) -> Result<Token> {
        (**self).get_or_create(input).await
    }
}
