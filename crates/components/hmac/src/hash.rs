//! Hash functions usable with [`Hmac`](crate::Hmac).

use core::{convert::Infallible, fmt, marker::PhantomData};

use digest::{core_api::BlockSizeUser, typenum::Unsigned, Digest};

use crate::HmacError;

/// A fixed-output hash function.
///
/// HMAC only needs a one-shot `hash(bytes) -> digest` from the underlying
/// function, together with its block and output sizes. Implementations may
/// run the hash however they like, including inside a proving backend, and
/// may fail.
pub trait HashFunction {
    /// The internal block size of the hash function in bytes.
    const BLOCK_LEN: usize;
    /// The length of the digest in bytes.
    ///
    /// Must not exceed [`BLOCK_LEN`](Self::BLOCK_LEN).
    const OUTPUT_LEN: usize;

    /// The error returned when hashing fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Hashes the provided input, returning a digest of
    /// [`OUTPUT_LEN`](Self::OUTPUT_LEN) bytes.
    fn hash(&self, input: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

/// Sizes of a [`HashFunction`] which HMAC relies on.
pub(crate) struct Sizes<H>(PhantomData<H>);

impl<H: HashFunction> Sizes<H> {
    /// The block length. Fails to compile for a hash whose digest does not
    /// fit into one block.
    pub(crate) const BLOCK_LEN: usize = {
        assert!(
            H::OUTPUT_LEN <= H::BLOCK_LEN,
            "digest must not be longer than a block"
        );
        H::BLOCK_LEN
    };
}

/// Checks that a digest returned by `H` has the advertised length.
pub(crate) fn check_digest_len<H: HashFunction>(digest: &[u8]) -> Result<(), HmacError> {
    if digest.len() != H::OUTPUT_LEN {
        return Err(HmacError::digest(format!(
            "hash function returned {} bytes, expected {}",
            digest.len(),
            H::OUTPUT_LEN
        )));
    }

    Ok(())
}

/// Adapter implementing [`HashFunction`] for any [`Digest`] with a known
/// block size.
pub struct DigestHash<D>(PhantomData<fn() -> D>);

/// The SHA-256 hash function.
pub type Sha256 = DigestHash<sha2::Sha256>;

/// The SHA-512 hash function.
pub type Sha512 = DigestHash<sha2::Sha512>;

impl<D> DigestHash<D> {
    /// Creates a new instance.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<D> Default for DigestHash<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestHash<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DigestHash<D> {}

impl<D> fmt::Debug for DigestHash<D>
where
    D: Digest + BlockSizeUser,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestHash")
            .field("block_len", &<D::BlockSize as Unsigned>::USIZE)
            .field("output_len", &<D::OutputSize as Unsigned>::USIZE)
            .finish()
    }
}

impl<D> HashFunction for DigestHash<D>
where
    D: Digest + BlockSizeUser,
{
    const BLOCK_LEN: usize = <D::BlockSize as Unsigned>::USIZE;
    const OUTPUT_LEN: usize = <D::OutputSize as Unsigned>::USIZE;

    type Error = Infallible;

    fn hash(&self, input: &[u8]) -> Result<Vec<u8>, Self::Error> {
        Ok(D::digest(input).to_vec())
    }
}
