//! Digest functions turning an input into a [`Token`].
//!
//! Both functions are pure and total; they may be called from any number of
//! threads at once.

use crate::base62::WIDTH;
use crate::salt::Salt;
use crate::token::Token;
use sha2::{Digest, Sha256};

/// Computes the salted token for `input`.
///
/// The SHA-256 digest of `salt || input` is truncated to its first eight bytes,
/// read as a big-endian `u64` and encoded with the fixed-width base62 codec.
pub fn salted(salt: &Salt, input: &str) -> Token {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    Token::from_base62(u64::from_be_bytes(prefix))
}

/// Computes the unsalted content hash for `input`.
///
/// This is the first ten hex characters of SHA-256(`input`). It is a function
/// of the input alone and needs no cache to be stable.
pub fn content(input: &str) -> Token {
    let digest = Sha256::digest(input.as_bytes());
    let hex = hex::encode(&digest[..WIDTH / 2]);
    Token::new_unchecked(&hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_hash_fixtures() {
        let cases = [
            ("abc123", "6ca13d52ca"),
            ("a", "ca978112ca"),
            ("hello", "2cf24dba5f"),
            ("12345", "5994471abb"),
            ("AbCdEf123", "b4f7a3c119"),
        ];
        for (input, expected) in cases {
            assert_eq!(content(input).as_str(), expected, "input {input:?}");
        }
    }

    #[test]
    fn salted_known_vectors() {
        let zero = Salt::from_bytes([0; 8]);
        assert_eq!(salted(&zero, "abc123").as_str(), "PvJB6n7yPw");
        assert_eq!(salted(&zero, "hello").as_str(), "e2a8wWvYsL");

        let counting = Salt::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(salted(&counting, "abc123").as_str(), "AxJBROLW4w");
    }

    #[test]
    fn salt_changes_token() {
        let a = salted(&Salt::from_bytes([0; 8]), "abc123");
        let b = salted(&Salt::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]), "abc123");
        assert_ne!(a, b);
    }

    #[test]
    fn input_is_bound_into_token() {
        let salt = Salt::from_bytes([9; 8]);
        assert_ne!(salted(&salt, "input1"), salted(&salt, "input2"));
    }

    #[test]
    fn salted_is_deterministic_for_fixed_salt() {
        let first = salted(&Salt::from_bytes([7; 8]), "testinput42");
        let second = salted(&Salt::from_bytes([7; 8]), "testinput42");
        assert_eq!(first, second);
    }
}
