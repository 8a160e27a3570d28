//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base32_codec::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let codec = registry.find("zbase32").unwrap().to_codec().unwrap();
//! assert_eq!(codec.decode(&codec.encode(b"hi")).unwrap(), b"hi");
//! ```

pub use crate::{
    Alphabet, AlphabetConfig, AlphabetRegistry, BigUint, Codec, CodecBuilder, CodecConfig,
    ConfigError, DecodeError,
};
