//! Little-endian hex encoding of u32/u64 word arrays
//!
//! # Format
//!
//! Each word is written as its little-endian bytes, two lowercase hex digits
//! per byte, words concatenated in order. A u32 word takes 8 characters and
//! a u64 word takes 16.
//!
//! Decoding accepts either letter case but requires the exact length for the
//! requested word count.

use thiserror::Error;

/// Errors produced when an encoded state token cannot be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Invalid token length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid hex character '{found}' at position {position}")]
    InvalidCharacter { position: usize, found: char },

    #[error("Decoded state is outside the generator domain: {0}")]
    InvalidState(String),
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn push_bytes(out: &mut String, bytes: &[u8]) {
    for byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
}

fn nibble(position: usize, c: char) -> Result<u8, DecodeError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(DecodeError::InvalidCharacter { position, found: c })
}

/// Decode `token` into raw bytes, checking the exact expected length first
fn decode_bytes(token: &str, byte_len: usize) -> Result<Vec<u8>, DecodeError> {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() != byte_len * 2 {
        return Err(DecodeError::InvalidLength {
            expected: byte_len * 2,
            actual: chars.len(),
        });
    }

    chars
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let high = nibble(i * 2, pair[0])?;
            let low = nibble(i * 2 + 1, pair[1])?;
            Ok((high << 4) | low)
        })
        .collect()
}

/// Encode u32 words as a hex token
///
/// # Example
/// ```
/// use seedstream_core::codec::encode_u32_words;
///
/// assert_eq!(encode_u32_words(&[1, 0xdeadbeef]), "01000000efbeadde");
/// ```
pub fn encode_u32_words(words: &[u32]) -> String {
    let mut out = String::with_capacity(words.len() * 8);
    for word in words {
        push_bytes(&mut out, &word.to_le_bytes());
    }
    out
}

/// Decode exactly `count` u32 words from a hex token
pub fn decode_u32_words(token: &str, count: usize) -> Result<Vec<u32>, DecodeError> {
    let bytes = decode_bytes(token, count * 4)?;
    Ok(bytes
        .chunks_exact(4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Encode u64 words as a hex token
///
/// # Example
/// ```
/// use seedstream_core::codec::encode_u64_words;
///
/// assert_eq!(encode_u64_words(&[15]), "0f00000000000000");
/// ```
pub fn encode_u64_words(words: &[u64]) -> String {
    let mut out = String::with_capacity(words.len() * 16);
    for word in words {
        push_bytes(&mut out, &word.to_le_bytes());
    }
    out
}

/// Decode exactly `count` u64 words from a hex token
pub fn decode_u64_words(token: &str, count: usize) -> Result<Vec<u64>, DecodeError> {
    let bytes = decode_bytes(token, count * 8)?;
    Ok(bytes
        .chunks_exact(8)
        .map(|b| u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
        .collect())
}

/// Reduce an arbitrary seed string to exactly `len` lowercase hex digits
///
/// Non-hex characters are dropped, the remainder is truncated to `len` and
/// right-padded with `f`. A UUID therefore maps onto its 32 hex digits.
///
/// # Example
/// ```
/// use seedstream_core::codec::sanitize_hex_seed;
///
/// assert_eq!(sanitize_hex_seed("A-b_9", 6), "ab9fff");
/// ```
pub fn sanitize_hex_seed(seed: &str, len: usize) -> String {
    let mut out: String = seed
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .map(|c| c.to_ascii_lowercase())
        .take(len)
        .collect();
    // `f` padding reproduces the legacy LCG64 vector for hex-free seeds
    while out.len() < len {
        out.push('f');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_words_little_endian() {
        assert_eq!(
            encode_u32_words(&[2099335663, 4110573609, 1758352871, 1]),
            "ef51217d296002f5e755ce6801000000"
        );
    }

    #[test]
    fn test_u64_words_little_endian() {
        let token = encode_u64_words(&[0xa7ae0bd2b36a80e2, 15]);
        assert_eq!(token, "e2806ab3d20baea70f00000000000000");
        assert_eq!(
            decode_u64_words(&token, 2).unwrap(),
            vec![0xa7ae0bd2b36a80e2, 15]
        );
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        assert_eq!(decode_u32_words("EFBEADDE", 1).unwrap(), vec![0xdeadbeef]);
    }

    #[test]
    fn test_decode_wrong_length() {
        let err = decode_u32_words("0011", 1).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidLength {
                expected: 8,
                actual: 4
            }
        );
    }

    #[test]
    fn test_decode_bad_character() {
        let err = decode_u32_words("0011zz33", 1).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidCharacter {
                position: 4,
                found: 'z'
            }
        );
    }

    #[test]
    fn test_decode_counts_characters_not_bytes() {
        // 8 characters but more than 8 bytes
        let err = decode_u32_words("ééééééé1", 1).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidCharacter { position: 0, .. }));
    }

    #[test]
    fn test_sanitize_uuid() {
        assert_eq!(
            sanitize_hex_seed("e7e3c27f-ccca-4830-b700-83ab59a7a6b8", 32),
            "e7e3c27fccca4830b70083ab59a7a6b8"
        );
    }

    #[test]
    fn test_sanitize_pads_and_truncates() {
        assert_eq!(sanitize_hex_seed("ii", 4), "ffff");
        assert_eq!(sanitize_hex_seed("0123456789", 4), "0123");
    }
}
