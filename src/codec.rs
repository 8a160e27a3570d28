use std::borrow::Cow;
use std::collections::BTreeSet;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::core::alphabet::Alphabet;
use crate::core::config::{CodecBuilder, CodecConfig};
use crate::encoders::algorithms::errors::{ConfigError, DecodeError};
use crate::encoders::algorithms::{chunked, integer};

/// Base32 encoder and decoder for one alphabet and padding policy.
///
/// A `Codec` never changes after construction, so a single instance can be
/// shared freely between threads. Failed calls leave it usable.
///
/// # Example
///
/// ```
/// use base32_codec::Codec;
///
/// let codec = Codec::default();
/// assert_eq!(codec.encode(b"foobar"), "MZXW6YTBOI======");
/// assert_eq!(codec.decode("MZXW6YTBOI======").unwrap(), b"foobar");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Creates a codec from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PaddingInAlphabet`] if the padding symbol is
    /// also an alphabet symbol.
    pub fn new(config: CodecConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Codec { config })
    }

    pub fn builder() -> CodecBuilder {
        CodecBuilder::default()
    }

    /// RFC 4648 alphabet with `=` padding.
    pub fn rfc4648() -> Self {
        Codec::default()
    }

    /// Crockford alphabet, unpadded, with decode normalization.
    pub fn crockford() -> Self {
        Codec {
            config: CodecConfig {
                alphabet: Alphabet::crockford(),
                padding: None,
                crockford: true,
            },
        }
    }

    /// z-base-32 alphabet, unpadded.
    pub fn zbase32() -> Self {
        Codec {
            config: CodecConfig {
                alphabet: Alphabet::zbase32(),
                padding: None,
                crockford: false,
            },
        }
    }

    /// RFC 4648 extended hex alphabet with `=` padding.
    pub fn hex() -> Self {
        Codec {
            config: CodecConfig {
                alphabet: Alphabet::hex(),
                padding: Some('='),
                crockford: false,
            },
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.config.alphabet
    }

    pub fn padding(&self) -> Option<char> {
        self.config.padding
    }

    /// Encodes bytes. Empty input gives an empty string.
    pub fn encode(&self, data: &[u8]) -> String {
        chunked::encode_chunked(data, &self.config.alphabet, self.config.padding)
    }

    /// Decodes text back to bytes.
    ///
    /// Padding symbols are skipped wherever they appear and bits that do not
    /// complete a byte are dropped. Empty input gives empty output.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidCharacters`] if the input holds anything
    /// other than alphabet symbols and padding.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        if encoded.is_empty() {
            return Ok(Vec::new());
        }

        let digits = self.digits(encoded)?;
        Ok(chunked::decode_chunked(&digits))
    }

    /// Encodes an unsigned integer.
    ///
    /// ```
    /// use base32_codec::Codec;
    ///
    /// let codec = Codec::builder().no_padding().build().unwrap();
    /// assert_eq!(codec.encode_integer(987654321u64), "5N42FR");
    /// ```
    pub fn encode_integer(&self, value: impl Into<BigUint>) -> String {
        integer::encode_integer(&value.into(), &self.config.alphabet, self.config.padding)
    }

    /// Decodes text produced by [`Codec::encode_integer`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::EmptyInput`] for an empty string and
    /// [`DecodeError::InvalidCharacters`] for malformed input.
    pub fn decode_integer(&self, encoded: &str) -> Result<BigUint, DecodeError> {
        if encoded.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let digits = self.digits(encoded)?;
        Ok(integer::decode_integer(&digits))
    }

    /// Like [`Codec::decode_integer`], narrowed to `u64`.
    ///
    /// # Errors
    ///
    /// Additionally returns [`DecodeError::IntegerOverflow`] when the value
    /// needs more than 64 bits.
    pub fn decode_u64(&self, encoded: &str) -> Result<u64, DecodeError> {
        let value = self.decode_integer(encoded)?;
        value
            .to_u64()
            .ok_or(DecodeError::IntegerOverflow { bits: value.bits() })
    }

    /// Applies Crockford normalization when enabled.
    fn normalize<'a>(&self, encoded: &'a str) -> Cow<'a, str> {
        if !self.config.crockford {
            return Cow::Borrowed(encoded);
        }

        Cow::Owned(
            encoded
                .chars()
                .filter(|&c| c != '-')
                .map(|c| match c.to_ascii_uppercase() {
                    'O' => '0',
                    'L' | 'I' => '1',
                    other => other,
                })
                .collect(),
        )
    }

    /// Normalizes and validates input, returning the 5-bit value of every
    /// non-padding symbol.
    fn digits(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        let normalized = self.normalize(encoded);
        let alphabet = &self.config.alphabet;
        let padding = self.config.padding;

        let mut digits = Vec::with_capacity(normalized.len());
        let mut invalid = BTreeSet::new();
        let mut first_invalid = None;

        for (position, c) in normalized.chars().enumerate() {
            if Some(c) == padding {
                continue;
            }
            match alphabet.decode_char(c) {
                Some(digit) => digits.push(digit),
                None => {
                    invalid.insert(c);
                    if first_invalid.is_none() {
                        first_invalid = Some(position);
                    }
                }
            }
        }

        if let Some(position) = first_invalid {
            let chars: String = invalid.into_iter().collect();
            return Err(DecodeError::invalid_characters(
                chars,
                position,
                &normalized,
                &alphabet.to_string(),
            ));
        }

        Ok(digits)
    }
}
