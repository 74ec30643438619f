use sha3::Digest;

/// Output width of Keccak-256, in bytes.
pub const HASH_LENGTH: usize = 32;

/// Hashes `data` with Keccak-256.
pub fn keccak_hash(data: impl AsRef<[u8]>) -> [u8; HASH_LENGTH] {
    sha3::Keccak256::digest(data.as_ref()).into()
}

/// Streaming Keccak-256 hasher.
///
/// Feeding several slices is equivalent to hashing their concatenation, which
/// is how `abi.encodePacked` arguments are hashed without building the packed
/// buffer first.
#[derive(Default, Clone)]
pub struct Keccak256(sha3::Keccak256);

impl Keccak256 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(mut self, data: impl AsRef<[u8]>) -> Self {
        self.0.update(data.as_ref());
        self
    }

    pub fn finalize(self) -> [u8; HASH_LENGTH] {
        self.0.finalize().into()
    }
}
