use hashgate_core::salt::SALT_LEN;
use hashgate_core::{CoreError, Result, Salt};
use rand::rngs::OsRng;
use rand::TryRngCore;

/// A source of fresh salts.
pub trait SaltSource: Send + Sync + 'static {
    /// Produces a new salt, or fails if no entropy is available.
    fn next_salt(&self) -> Result<Salt>;
}

/// Draws salts from the operating system's cryptographic random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSaltSource;

impl SaltSource for OsSaltSource {
    fn next_salt(&self) -> Result<Salt> {
        let mut bytes = [0u8; SALT_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CoreError::Entropy(e.to_string()))?;
        Ok(Salt::from_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_source_produces_distinct_salts() {
        let source = OsSaltSource;
        let first = source.next_salt().unwrap();
        let second = source.next_salt().unwrap();
        // 2^-64 chance of a false failure
        assert_ne!(first, second);
    }
}
