//! Text codec for the native boundary.
//!
//! The native automation library speaks NUL-terminated wide (UTF-16)
//! strings. All conversion lives behind these two functions so the rest of
//! the crate stays on Rust strings.

/// Encode a Rust string as a NUL-terminated UTF-16 buffer.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Decode a fixed-size UTF-16 output buffer, truncating at the first NUL.
///
/// Invalid code units are replaced rather than rejected; the native layer
/// owns the buffer contents and can hand back anything.
pub fn from_wide(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wide_appends_terminator() {
        let wide = to_wide("ab");
        assert_eq!(wide, vec![b'a' as u16, b'b' as u16, 0]);
    }

    #[test]
    fn test_to_wide_empty_string_is_just_terminator() {
        assert_eq!(to_wide(""), vec![0]);
    }

    #[test]
    fn test_from_wide_truncates_at_nul() {
        let buf = [b'h' as u16, b'i' as u16, 0, b'x' as u16];
        assert_eq!(from_wide(&buf), "hi");
    }

    #[test]
    fn test_from_wide_without_terminator_takes_whole_buffer() {
        let buf = [b'o' as u16, b'k' as u16];
        assert_eq!(from_wide(&buf), "ok");
    }

    #[test]
    fn test_round_trip_non_ascii() {
        let original = "Fenster — Übersicht";
        let wide = to_wide(original);
        assert_eq!(from_wide(&wide), original);
    }

    #[test]
    fn test_from_wide_replaces_lone_surrogate() {
        // 0xD800 is an unpaired high surrogate; lossy decode must not panic.
        let buf = [0xD800u16, 0];
        assert_eq!(from_wide(&buf), "\u{FFFD}");
    }
}
