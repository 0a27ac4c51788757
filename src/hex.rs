//! Uppercase hex rendering of raw digest bytes.

/// Render a raw byte sequence as uppercase hexadecimal text.
///
/// Each byte becomes two characters from `0-9A-F`, most-significant nibble
/// first, so the output is always exactly twice the input length. No
/// separators, no locale sensitivity; an empty input yields an empty string.
pub fn bytes_to_hex(raw: &[u8]) -> String {
    hex::encode_upper(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn test_nibble_order() {
        assert_eq!(bytes_to_hex(&[0x00]), "00");
        assert_eq!(bytes_to_hex(&[0x0F]), "0F");
        assert_eq!(bytes_to_hex(&[0xF0]), "F0");
        assert_eq!(bytes_to_hex(&[0xAB, 0xCD, 0xEF]), "ABCDEF");
    }

    #[test]
    fn test_length_and_alphabet() {
        let all_bytes: Vec<u8> = (0..=255).collect();
        let text = bytes_to_hex(&all_bytes);
        assert_eq!(text.len(), all_bytes.len() * 2);
        assert!(text.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }
}
