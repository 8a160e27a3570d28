//! Base32 encoding and decoding over configurable 32-symbol alphabets.
//!
//! A [`Codec`] pairs an [`Alphabet`] with a padding policy and optional
//! Crockford normalization. It encodes byte slices and unsigned integers and
//! decodes them back:
//!
//! ```
//! use base32_codec::Codec;
//!
//! let codec = Codec::crockford();
//! let decoded = codec.decode("91jp-rv3f4-1vpyw-kccgg-joy3r").unwrap();
//! assert_eq!(decoded, b"Hello world! xx");
//!
//! let id = codec.encode_integer(987654321u64);
//! assert_eq!(codec.decode_u64(&id).unwrap(), 987654321);
//! ```
//!
//! Named alphabets can also be loaded from TOML through
//! [`AlphabetRegistry`].

mod codec;
mod core;
mod encoders;

pub mod prelude;

pub use crate::codec::Codec;
pub use crate::core::alphabet::{ALPHABET_SIZE, Alphabet, CROCKFORD, GMP, HEX, RFC4648, ZBASE32};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, CodecBuilder, CodecConfig, Settings};
pub use crate::encoders::algorithms::{
    AlphabetNotFoundError, ConfigError, DecodeError, find_closest_alphabet,
};
pub use num_bigint::BigUint;
