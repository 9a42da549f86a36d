//! HMAC (RFC 2104) over a pluggable fixed-output hash function.
//!
//! The hash function is abstracted by [`HashFunction`], which only needs to
//! expose a one-shot hash together with its block and output lengths. SHA-256
//! and SHA-512 implementations are provided.
//!
//! ```
//! use hmac_engine::{Hmac, Sha256};
//!
//! let hmac = Hmac::new(Sha256::new());
//! let tag = hmac.compute(b"Jefe", b"what do ya want for nothing?").unwrap();
//!
//! assert_eq!(
//!     tag.to_string(),
//!     "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
//! );
//! assert!(hmac.verify(b"Jefe", b"what do ya want for nothing?", tag.as_bytes()).is_ok());
//! ```

#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod error;
pub mod hash;
mod hmac;
mod key;
mod tag;
#[cfg(test)]
mod test_utils;

pub use config::{HmacConfig, HmacConfigBuilder, HmacConfigBuilderError};
pub use error::{ErrorKind, HmacError};
pub use hash::{DigestHash, HashFunction, Sha256, Sha512};
pub use hmac::{Hmac, IPAD, OPAD};
pub use key::{normalize_key, NormalizedKey};
pub use tag::Tag;
