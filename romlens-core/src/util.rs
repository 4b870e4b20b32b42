/// Format a byte count as megabytes with one decimal, regardless of size.
///
/// ROM lists show every entry in the same unit so columns line up.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Decode header bytes as ASCII without ever failing.
///
/// Bytes above 0x7F are not ASCII and become U+FFFD. Control bytes are kept
/// as-is; see [`read_printable`] for display-safe text.
pub fn decode_permissive(buf: &[u8]) -> String {
    buf.iter()
        .map(|&b| if b.is_ascii() { b as char } else { char::REPLACEMENT_CHARACTER })
        .collect()
}

/// Decode a fixed-length text field into printable, trimmed text.
///
/// The field is decoded with [`decode_permissive`], every non-printable
/// character (ASCII controls and DEL) becomes a space, and the result is
/// trimmed. Header fields are padded with spaces, 0x00 or 0xFF depending on
/// the mastering tool, so the whole buffer is processed.
pub fn read_printable(buf: &[u8]) -> String {
    decode_permissive(buf)
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}
