// src/utils/string_encoding.rs
use crate::error::{BtsError, Result};

/// Strict ASCII decode for the header trailer. No lossy substitution: a
/// single byte outside the 7-bit range fails the whole decode.
pub fn decode_ascii(bytes: &[u8]) -> Result<String> {
    if !bytes.is_ascii() {
        return Err(BtsError::InvalidEncoding);
    }
    String::from_utf8(bytes.to_vec()).map_err(|_| BtsError::InvalidEncoding)
}

/// Borrow a string's bytes for encoding, rejecting non-ASCII content.
pub fn encode_ascii(s: &str) -> Result<&[u8]> {
    if !s.is_ascii() {
        return Err(BtsError::InvalidEncoding);
    }
    Ok(s.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii() {
        assert_eq!(decode_ascii(b"TurbSim").unwrap(), "TurbSim");
        assert_eq!(decode_ascii(b"").unwrap(), "");
        assert!(matches!(
            decode_ascii(&[b'T', 0x80]),
            Err(BtsError::InvalidEncoding)
        ));
    }

    #[test]
    fn test_encode_ascii() {
        assert_eq!(encode_ascii("TEST").unwrap(), b"TEST");
        assert!(matches!(encode_ascii("gr\u{fc}n"), Err(BtsError::InvalidEncoding)));
    }
}
