//! Key normalization.
//!
//! HMAC operates on a key `k0` which is exactly one hash block long. A key of
//! arbitrary length is reduced to `k0` as follows:
//!
//! * longer than the block: `k0 = H(key)` padded with zero bytes
//! * otherwise: `k0 = key` padded with zero bytes
//!
//! An empty key is valid and yields a block of zeros.

use core::fmt;

use tracing::trace;
use zeroize::Zeroizing;

use crate::{
    hash::{check_digest_len, HashFunction, Sizes},
    HmacError,
};

/// A key normalized to exactly one hash block.
///
/// The buffer is zeroized on drop.
#[derive(Clone)]
pub struct NormalizedKey(Zeroizing<Vec<u8>>);

impl NormalizedKey {
    /// Returns the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the key in bytes, which is always the block
    /// size of the hash function it was normalized for.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedKey")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

/// Normalizes `key` to the block size of `hash`.
///
/// The hash function is invoked exactly once if the key is longer than a
/// block, and not at all otherwise.
///
/// # Arguments
///
/// * `hash` - The hash function.
/// * `key` - The key, of any length.
pub fn normalize_key<H: HashFunction>(hash: &H, key: &[u8]) -> Result<NormalizedKey, HmacError> {
    let block_len = Sizes::<H>::BLOCK_LEN;

    let mut k0 = Zeroizing::new(Vec::with_capacity(block_len));
    if key.len() > block_len {
        trace!(key_len = key.len(), "hashing oversized key");

        let digest = Zeroizing::new(hash.hash(key).map_err(HmacError::hash)?);
        check_digest_len::<H>(&digest)?;
        k0.extend_from_slice(&digest);
    } else {
        trace!(key_len = key.len(), "padding key");

        k0.extend_from_slice(key);
    }
    k0.resize(block_len, 0);

    Ok(NormalizedKey(k0))
}
