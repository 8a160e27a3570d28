use crate::core::alphabet::Alphabet;
use num_integer::lcm;

const BITS_PER_CHAR: usize = 5;

/// Characters per padded group: lcm(5, 8) / 5, i.e. five bytes per eight symbols.
pub fn padding_group_size() -> usize {
    lcm(BITS_PER_CHAR, 8) / BITS_PER_CHAR
}

/// Right-pads `encoded` with `pad_char` to a whole number of groups.
pub fn pad_output(encoded: &mut String, symbol_count: usize, pad_char: char) {
    let group_size = padding_group_size();
    let padded_chars = symbol_count.div_ceil(group_size) * group_size;

    for _ in symbol_count..padded_chars {
        encoded.push(pad_char);
    }
}

/// Packs bytes into 5-bit symbols, big-endian.
///
/// A trailing group shorter than five bits is filled with zero bits on the
/// right before lookup.
pub fn encode_chunked(data: &[u8], alphabet: &Alphabet, padding: Option<char>) -> String {
    if data.is_empty() {
        return String::new();
    }

    let output_chars = (data.len() * 8).div_ceil(BITS_PER_CHAR);
    let capacity = if padding.is_some() {
        output_chars.div_ceil(padding_group_size()) * padding_group_size()
    } else {
        output_chars
    };
    let mut result = String::with_capacity(capacity);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= BITS_PER_CHAR {
            bits_in_buffer -= BITS_PER_CHAR;
            let index = ((bit_buffer >> bits_in_buffer) & 0x1F) as u8;
            result.push(alphabet.encode_digit(index));
        }
    }

    // Handle remaining bits
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (BITS_PER_CHAR - bits_in_buffer)) & 0x1F) as u8;
        result.push(alphabet.encode_digit(index));
    }

    if let Some(pad_char) = padding {
        pad_output(&mut result, output_chars, pad_char);
    }

    result
}

/// Unpacks 5-bit values into bytes.
///
/// `digits` must already be validated and stripped of padding. Bits left over
/// after the last complete byte are discarded.
pub fn decode_chunked(digits: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(digits.len() * BITS_PER_CHAR / 8);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &digit in digits {
        bit_buffer = (bit_buffer << BITS_PER_CHAR) | (digit as u32 & 0x1F);
        bits_in_buffer += BITS_PER_CHAR;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    result
}
