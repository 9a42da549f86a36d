use core::fmt;

use subtle::{Choice, ConstantTimeEq};

use crate::HmacError;

/// An HMAC authentication tag.
///
/// Equality is evaluated in constant time.
#[derive(Clone)]
pub struct Tag(Vec<u8>);

impl Tag {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the tag as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the tag in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the tag bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Tag> for Vec<u8> {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl<const N: usize> TryFrom<Tag> for [u8; N] {
    type Error = HmacError;

    fn try_from(tag: Tag) -> Result<Self, Self::Error> {
        let len = tag.0.len();
        tag.0
            .try_into()
            .map_err(|_| HmacError::digest(format!("tag is {len} bytes, expected {N}")))
    }
}

impl ConstantTimeEq for Tag {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.as_slice().ct_eq(other.0.as_slice())
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Tag {}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&hex::encode(&self.0)).finish()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}
