use crate::salt::{OsSaltSource, SaltSource};
use crate::Generator;
use hashgate_core::{digest, Result, Token};
use tracing::warn;

/// A generator that mixes a fresh random salt into every digest.
///
/// Two calls with the same input almost never agree, so this generator is only
/// useful behind a cache that remembers the first token it produced.
#[derive(Debug, Clone, Default)]
pub struct SaltedGenerator<S = OsSaltSource> {
    source: S,
}

impl SaltedGenerator<OsSaltSource> {
    /// Creates a generator backed by the operating system's entropy source.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SaltSource> SaltedGenerator<S> {
    /// Creates a generator drawing salts from `source`.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: SaltSource> Generator for SaltedGenerator<S> {
    fn generate(&self, input: &str) -> Result<Token> {
        let salt = self.source.next_salt().inspect_err(|e| {
            warn!(error = %e, "failed to draw salt");
        })?;
        Ok(digest::salted(&salt, input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashgate_core::{CoreError, Salt};

    struct FixedSalt([u8; 8]);

    impl SaltSource for FixedSalt {
        fn next_salt(&self) -> Result<Salt> {
            Ok(Salt::from_bytes(self.0))
        }
    }

    struct FailingSalt;

    impl SaltSource for FailingSalt {
        fn next_salt(&self) -> Result<Salt> {
            Err(CoreError::Entropy("simulated outage".to_string()))
        }
    }

    #[test]
    fn fixed_salt_matches_digest() {
        let generator = SaltedGenerator::with_source(FixedSalt([0; 8]));
        let token = generator.generate("abc123").unwrap();
        assert_eq!(token.as_str(), "PvJB6n7yPw");
    }

    #[test]
    fn os_salted_tokens_are_well_formed() {
        let generator = SaltedGenerator::new();
        for input in ["a", "abc123", "AbCdEf123", "Z".repeat(512).as_str()] {
            let token = generator.generate(input).unwrap();
            assert_eq!(token.as_str().len(), 10);
            assert!(token.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn os_salted_tokens_differ_between_calls() {
        let generator = SaltedGenerator::new();
        let first = generator.generate("hello").unwrap();
        let second = generator.generate("hello").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn entropy_failure_is_propagated() {
        let generator = SaltedGenerator::with_source(FailingSalt);
        let err = generator.generate("abc123").unwrap_err();
        assert!(matches!(err, CoreError::Entropy(_)));
    }
}
