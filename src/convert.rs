//! Hex conveniences for front ends and trace output.

/// Renders a byte block as upper-case hex.
pub fn to_hex(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Parses a hex string into bytes.
///
/// Characters that are not hex digits (spaces, punctuation) are skipped, and
/// a trailing half byte is dropped, so text pasted from formatted displays
/// parses without preprocessing.
pub fn from_hex(text: &str) -> Vec<u8> {
    let mut digits: String = text.chars().filter(char::is_ascii_hexdigit).collect();
    if digits.len() % 2 == 1 {
        digits.pop();
    }
    hex::decode(&digits).expect("filtered to hex digits")
}
