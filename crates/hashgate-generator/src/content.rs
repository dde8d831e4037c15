use crate::Generator;
use hashgate_core::{digest, Result, Token};

/// A deterministic generator: the first ten hex characters of SHA-256(input).
///
/// The same input always yields the same token, across processes too, which
/// makes this generator handy for fixtures. It never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentHashGenerator;

impl Generator for ContentHashGenerator {
    fn generate(&self, input: &str) -> Result<Token> {
        Ok(digest::content(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_generator_produces_fixture_hashes() {
        let generator = ContentHashGenerator;

        assert_eq!(generator.generate("abc123").unwrap().as_str(), "6ca13d52ca");
        assert_eq!(generator.generate("a").unwrap().as_str(), "ca978112ca");
        assert_eq!(generator.generate("hello").unwrap().as_str(), "2cf24dba5f");
    }

    #[test]
    fn content_generator_is_deterministic() {
        let generator = ContentHashGenerator;

        let first = generator.generate("testinput42").unwrap();
        let second = generator.generate("testinput42").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn content_generator_distinguishes_inputs() {
        let generator = ContentHashGenerator;

        let first = generator.generate("input1").unwrap();
        let second = generator.generate("input2").unwrap();

        assert_ne!(first, second);
    }
}
