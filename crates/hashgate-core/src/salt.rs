/// Number of random bytes mixed into every salted digest.
pub const SALT_LEN: usize = 8;

/// An ephemeral salt, consumed by a single digest computation.
///
/// The type is deliberately not `Clone`: a salt is produced for one cache miss
/// and dropped once the token exists.
#[derive(PartialEq, Eq)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for Salt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print salt bytes into logs
        f.write_str("Salt(..)")
    }
}
