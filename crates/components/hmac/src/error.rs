use core::fmt;
use std::error::Error;

/// An HMAC error.
#[derive(Debug, thiserror::Error)]
pub struct HmacError {
    kind: ErrorKind,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl HmacError {
    pub(crate) fn new<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self {
            kind,
            source: Some(source.into()),
        }
    }

    pub(crate) fn hash<E: Into<Box<dyn Error + Send + Sync>>>(err: E) -> Self {
        Self::new(ErrorKind::Hash, err)
    }

    pub(crate) fn input_size(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InputSize, msg.into())
    }

    pub(crate) fn digest(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Digest, msg.into())
    }

    pub(crate) fn verify() -> Self {
        Self {
            kind: ErrorKind::Verify,
            source: None,
        }
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Kinds of [`HmacError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The hash function failed.
    Hash,
    /// A key or message exceeded a configured maximum length.
    InputSize,
    /// A digest or tag had an unexpected length.
    Digest,
    /// A tag did not match the expected value.
    Verify,
}

impl fmt::Display for HmacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Hash => write!(f, "hash error")?,
            ErrorKind::InputSize => write!(f, "input size error")?,
            ErrorKind::Digest => write!(f, "digest error")?,
            ErrorKind::Verify => write!(f, "verification error")?,
        }

        if let Some(ref source) = self.source {
            write!(f, " caused by: {}", source)?;
        }

        Ok(())
    }
}
