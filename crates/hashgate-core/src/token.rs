use crate::base62::{self, WIDTH};
use serde::Serialize;
use smol_str::SmolStr;
use std::fmt::Display;

/// A 10-symbol, display-safe token drawn from `[0-9a-zA-Z]`.
///
/// Tokens are immutable once produced. Ten symbols always fit inline in a
/// [`SmolStr`], so cloning a token never allocates.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(SmolStr);

impl Token {
    /// Creates a token by encoding `value` with the fixed-width base62 codec.
    pub fn from_base62(value: u64) -> Self {
        let symbols = base62::encode_fixed(value);
        Self(SmolStr::new(ascii_str(&symbols)))
    }

    /// Creates a token without validation.
    ///
    /// Only for symbols produced by this crate's own encoders.
    pub(crate) fn new_unchecked(token: &str) -> Self {
        Self(SmolStr::new(token))
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn ascii_str(symbols: &[u8; WIDTH]) -> &str {
    // every base62 symbol is a single ASCII byte
    std::str::from_utf8(symbols).unwrap_or_default()
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Token").field(&self.0).finish()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_base62_pads_small_values() {
        assert_eq!(Token::from_base62(0).as_str(), "0000000000");
        assert_eq!(Token::from_base62(62).as_str(), "0000000010");
    }

    #[test]
    fn display_matches_as_str() {
        let token = Token::from_base62(u64::MAX);
        assert_eq!(token.to_string(), "YGhA16ahyf");
        assert_eq!(token.as_ref(), token.as_str());
    }

    #[test]
    fn serializes_as_plain_string() {
        let token = Token::from_base62(u64::MAX);
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"YGhA16ahyf\"");
    }
}
