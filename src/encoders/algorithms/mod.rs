pub mod chunked;
pub mod errors;
pub mod integer;

// Re-export error types for public API
pub use errors::{AlphabetNotFoundError, ConfigError, DecodeError, find_closest_alphabet};
