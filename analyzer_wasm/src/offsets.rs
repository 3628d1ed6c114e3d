/// JS/editor boundary uses UTF-16 code units (CodeMirror positions).
/// Ranges are half-open `[start, end)`; `end` is exclusive.
pub fn utf16_offset_to_byte(source: &str, utf16: usize) -> usize {
    if utf16 == 0 {
        return 0;
    }

    let mut u16_count = 0usize;
    for (byte_idx, ch) in source.char_indices() {
        if u16_count >= utf16 {
            return byte_idx;
        }
        u16_count += ch.len_utf16();
    }

    source.len()
}

/// Converts a byte offset to UTF-16 code units. Offsets inside a char round down to
/// its start; offsets past the end clamp to the full length.
pub fn byte_offset_to_utf16(source: &str, byte: usize) -> usize {
    let mut byte = byte.min(source.len());
    while !source.is_char_boundary(byte) {
        byte -= 1;
    }
    source[..byte].encode_utf16().count()
}
