use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::encoders::algorithms::errors::ConfigError;

/// Number of symbols in every base32 alphabet.
pub const ALPHABET_SIZE: usize = 32;

/// RFC 4648 section 6 alphabet.
pub const RFC4648: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
/// Douglas Crockford's alphabet, without I, L, O and U.
pub const CROCKFORD: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";
/// Human-oriented z-base-32 alphabet.
pub const ZBASE32: &str = "ybndrfg8ejkmcpqxot1uwisza345h769";
/// Digits used by GMP for radix 32.
pub const GMP: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";
/// RFC 4648 section 7 "extended hex" alphabet. Same symbols as [`GMP`].
pub const HEX: &str = GMP;

/// An ordered set of exactly 32 distinct symbols.
///
/// The symbol at position `i` stands for the 5-bit value `i`. Construction
/// validates the size and uniqueness, so every `Alphabet` value can be used
/// for lookups without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    char_to_index: HashMap<char, u8>,
}

impl Alphabet {
    /// Creates an alphabet from its symbols.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLength`] unless there are exactly 32
    /// symbols and [`ConfigError::DuplicateCharacter`] if a symbol repeats.
    pub fn new(chars: Vec<char>) -> Result<Self, ConfigError> {
        if chars.len() != ALPHABET_SIZE {
            return Err(ConfigError::InvalidLength {
                actual: chars.len(),
            });
        }

        let mut char_to_index = HashMap::with_capacity(ALPHABET_SIZE);
        for (i, &c) in chars.iter().enumerate() {
            if char_to_index.insert(c, i as u8).is_some() {
                return Err(ConfigError::DuplicateCharacter { char: c });
            }
        }

        Ok(Alphabet {
            chars,
            char_to_index,
        })
    }

    /// Builds one of the built-in alphabets, which are known to be valid.
    fn preset(symbols: &'static str) -> Self {
        let chars: Vec<char> = symbols.chars().collect();
        let char_to_index = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u8))
            .collect::<HashMap<_, _>>();
        debug_assert_eq!(char_to_index.len(), ALPHABET_SIZE);

        Alphabet {
            chars,
            char_to_index,
        }
    }

    pub fn rfc4648() -> Self {
        Self::preset(RFC4648)
    }

    pub fn crockford() -> Self {
        Self::preset(CROCKFORD)
    }

    pub fn zbase32() -> Self {
        Self::preset(ZBASE32)
    }

    pub fn gmp() -> Self {
        Self::preset(GMP)
    }

    pub fn hex() -> Self {
        Self::preset(HEX)
    }

    /// Returns the symbols in value order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Encodes a 5-bit value as its symbol.
    ///
    /// Only the low five bits of `digit` are used.
    #[inline]
    pub fn encode_digit(&self, digit: u8) -> char {
        self.chars[(digit & 0x1F) as usize]
    }

    /// Decodes a symbol back to its 5-bit value.
    ///
    /// Returns `None` if the character is not in the alphabet.
    #[inline]
    pub fn decode_char(&self, c: char) -> Option<u8> {
        self.char_to_index.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.char_to_index.contains_key(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::rfc4648()
    }
}

impl FromStr for Alphabet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for symbols in [RFC4648, CROCKFORD, ZBASE32, GMP, HEX] {
            let alphabet: Alphabet = symbols.parse().unwrap();
            assert_eq!(alphabet.chars().len(), ALPHABET_SIZE);
            assert_eq!(alphabet.to_string(), symbols);
        }
        assert_eq!(Alphabet::hex(), Alphabet::gmp());
        assert_eq!(Alphabet::default(), Alphabet::rfc4648());
    }

    #[test]
    fn test_rejects_short_alphabet() {
        let err = "123456789ABCDEFGHIJKLMNOPQRSTUV".parse::<Alphabet>().unwrap_err();
        assert_eq!(err, ConfigError::InvalidLength { actual: 31 });
    }

    #[test]
    fn test_rejects_duplicate_characters() {
        // 33 characters, one repeated
        let err = "00123456789ABCDEFGHIJKLMNOPQRSTUV".parse::<Alphabet>().unwrap_err();
        assert_eq!(err, ConfigError::InvalidLength { actual: 33 });

        let err = "0023456789ABCDEFGHIJKLMNOPQRSTUV".parse::<Alphabet>().unwrap_err();
        assert_eq!(err, ConfigError::DuplicateCharacter { char: '0' });
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let symbols: String = ('α'..='ω').chain('А'..='И').take(32).collect();
        let alphabet: Alphabet = symbols.parse().unwrap();
        assert_eq!(alphabet.encode_digit(0), 'α');
        assert_eq!(alphabet.decode_char('α'), Some(0));
    }

    #[test]
    fn test_digit_lookup() {
        let alphabet = Alphabet::crockford();
        assert_eq!(alphabet.encode_digit(0), '0');
        assert_eq!(alphabet.encode_digit(31), 'Z');
        assert_eq!(alphabet.decode_char('Z'), Some(31));
        assert_eq!(alphabet.decode_char('U'), None);
        assert!(!alphabet.contains('O'));
    }
}
