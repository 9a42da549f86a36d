use derive_builder::Builder;

use crate::HmacError;

/// Configuration for [`Hmac`](crate::Hmac).
///
/// Both limits are unset by default, in which case keys and messages of any
/// length are accepted.
#[derive(Debug, Clone, Default, Builder)]
pub struct HmacConfig {
    /// Maximum key length in bytes.
    #[builder(setter(strip_option), default)]
    max_key_len: Option<usize>,
    /// Maximum message length in bytes.
    #[builder(setter(strip_option), default)]
    max_message_len: Option<usize>,
}

impl HmacConfig {
    /// Creates a new builder for the HMAC configuration.
    pub fn builder() -> HmacConfigBuilder {
        HmacConfigBuilder::default()
    }

    /// Returns the maximum key length, if any.
    pub fn max_key_len(&self) -> Option<usize> {
        self.max_key_len
    }

    /// Returns the maximum message length, if any.
    pub fn max_message_len(&self) -> Option<usize> {
        self.max_message_len
    }

    /// Checks the input lengths against the configured limits.
    pub(crate) fn check(&self, key_len: usize, message_len: usize) -> Result<(), HmacError> {
        if let Some(max) = self.max_key_len {
            if key_len > max {
                return Err(HmacError::input_size(format!(
                    "key length {key_len} exceeds maximum of {max}"
                )));
            }
        }

        if let Some(max) = self.max_message_len {
            if message_len > max {
                return Err(HmacError::input_size(format!(
                    "message length {message_len} exceeds maximum of {max}"
                )));
            }
        }

        Ok(())
    }
}
