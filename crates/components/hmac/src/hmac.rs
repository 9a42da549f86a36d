//! Computation of HMAC.
//!
//! HMAC is defined as
//!
//! HMAC(k, m) = H((k0 xor opad) || H((k0 xor ipad) || m))
//!
//! * H     - hash function with block length B and output length L
//! * k0    - key normalized to B bytes, see [`normalize_key`]
//! * opad  - B bytes of 0x5c
//! * ipad  - B bytes of 0x36
//! * m     - message
//!
//! All intermediate blocks are plain byte strings, so the bytes passed to `H`
//! are exactly the bytes of the key and message in their original order.

use subtle::ConstantTimeEq;
use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::{
    hash::{check_digest_len, HashFunction, Sizes},
    key::normalize_key,
    HmacConfig, HmacError, Tag,
};

/// Inner padding byte.
pub const IPAD: u8 = 0x36;
/// Outer padding byte.
pub const OPAD: u8 = 0x5c;

/// Computes HMAC over a hash function `H`.
#[derive(Debug, Clone, Default)]
pub struct Hmac<H> {
    hash: H,
    config: HmacConfig,
}

impl<H: HashFunction> Hmac<H> {
    /// The block length of `H` in bytes.
    pub const BLOCK_LEN: usize = H::BLOCK_LEN;
    /// The tag length in bytes.
    pub const OUTPUT_LEN: usize = H::OUTPUT_LEN;

    /// Creates a new instance with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `hash` - The hash function.
    pub fn new(hash: H) -> Self {
        Self::with_config(hash, HmacConfig::default())
    }

    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    /// * `hash` - The hash function.
    /// * `config` - The configuration.
    pub fn with_config(hash: H, config: HmacConfig) -> Self {
        Self { hash, config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HmacConfig {
        &self.config
    }

    /// Returns the hash function.
    pub fn hash_function(&self) -> &H {
        &self.hash
    }

    /// Computes the HMAC tag of `message` under `key`.
    ///
    /// The hash function is invoked twice, or three times if the key is
    /// longer than a block.
    ///
    /// # Arguments
    ///
    /// * `key` - The key, of any length.
    /// * `message` - The message.
    #[instrument(
        level = "trace",
        skip_all,
        fields(key_len = key.len(), message_len = message.len()),
        err
    )]
    pub fn compute(&self, key: &[u8], message: &[u8]) -> Result<Tag, HmacError> {
        self.config.check(key.len(), message.len())?;

        let block_len = Sizes::<H>::BLOCK_LEN;
        let k0 = normalize_key(&self.hash, key)?;

        // (k0 xor ipad) || m
        let mut inner_block = Zeroizing::new(Vec::with_capacity(block_len + message.len()));
        inner_block.extend(k0.as_bytes().iter().map(|b| b ^ IPAD));
        inner_block.extend_from_slice(message);

        let inner_digest = self.digest(&inner_block)?;
        drop(inner_block);

        // (k0 xor opad) || H((k0 xor ipad) || m)
        let mut outer_block = Zeroizing::new(Vec::with_capacity(block_len + H::OUTPUT_LEN));
        outer_block.extend(k0.as_bytes().iter().map(|b| b ^ OPAD));
        outer_block.extend_from_slice(&inner_digest);

        let tag = self.digest(&outer_block)?;

        Ok(Tag::new(tag.to_vec()))
    }

    /// Verifies that `tag` is the HMAC tag of `message` under `key`.
    ///
    /// The comparison is performed in constant time. Returns an error of kind
    /// [`Verify`](crate::ErrorKind::Verify) if the tag does not match.
    ///
    /// # Arguments
    ///
    /// * `key` - The key, of any length.
    /// * `message` - The message.
    /// * `tag` - The tag to check.
    #[instrument(level = "trace", skip_all)]
    pub fn verify(&self, key: &[u8], message: &[u8], tag: &[u8]) -> Result<(), HmacError> {
        let expected = self.compute(key, message)?;

        if bool::from(expected.as_bytes().ct_eq(tag)) {
            Ok(())
        } else {
            debug!("tag mismatch");
            Err(HmacError::verify())
        }
    }

    /// Computes the HMAC tag of a key and message given as 32-bit words.
    ///
    /// Each word is serialized big-endian, most significant byte first, and
    /// the result is passed to [`compute`](Self::compute). A key and message
    /// of exactly `BLOCK_LEN / 4` words each make up a single block apiece.
    ///
    /// # Arguments
    ///
    /// * `key` - The key words.
    /// * `message` - The message words.
    pub fn compute_words(&self, key: &[u32], message: &[u32]) -> Result<Tag, HmacError> {
        let key = Zeroizing::new(words_to_bytes(key));
        let message = words_to_bytes(message);

        self.compute(&key, &message)
    }

    fn digest(&self, input: &[u8]) -> Result<Zeroizing<Vec<u8>>, HmacError> {
        let digest = Zeroizing::new(self.hash.hash(input).map_err(HmacError::hash)?);
        check_digest_len::<H>(&digest)?;

        Ok(digest)
    }
}

/// Serializes words into big-endian bytes.
fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_be_bytes()).collect()
}
