//! Fixed-width base62 encoding.

/// The base62 alphabet: digits, then lower case, then upper case.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in every encoded token.
pub const WIDTH: usize = 10;

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes `value` as exactly [`WIDTH`] base62 symbols.
///
/// Digits are filled from the rightmost position leftwards and the result is
/// left-padded with `'0'`. Values of `62^10` or more do not fit in ten symbols,
/// so only the low-order digits are kept.
///
/// # Examples
///
/// ```
/// use hashgate_core::base62::encode_fixed;
///
/// assert_eq!(&encode_fixed(62), b"0000000010");
/// ```
pub fn encode_fixed(mut value: u64) -> [u8; WIDTH] {
    let mut out = [ALPHABET[0]; WIDTH];
    for slot in out.iter_mut().rev() {
        *slot = ALPHABET[(value % BASE) as usize];
        value /= BASE;
    }
    out
}
