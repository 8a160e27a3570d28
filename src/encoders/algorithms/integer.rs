use crate::core::alphabet::Alphabet;
use num_bigint::BigUint;
use num_traits::Zero;

use super::chunked::pad_output;

/// Encodes an unsigned integer as base 32 digits, most significant first.
///
/// The binary form is padded with zero bits on the left to a multiple of five,
/// so zero becomes a single zero symbol.
pub fn encode_integer(value: &BigUint, alphabet: &Alphabet, padding: Option<char>) -> String {
    let digits = value.to_radix_be(32);
    let mut result: String = digits.iter().map(|&d| alphabet.encode_digit(d)).collect();

    if let Some(pad_char) = padding {
        pad_output(&mut result, digits.len(), pad_char);
    }

    result
}

/// Reads validated 5-bit values as one big-endian unsigned integer.
///
/// Every bit counts; nothing is truncated at byte boundaries.
pub fn decode_integer(digits: &[u8]) -> BigUint {
    digits.iter().fold(BigUint::zero(), |acc, &digit| {
        (acc << 5u32) | BigUint::from(digit & 0x1F)
    })
}
