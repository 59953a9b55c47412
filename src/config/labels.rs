//! Hostname label rule
//!
//! Dependency-free so that `build.rs` and the const declaration checks can
//! share it with the runtime validator.

/// Dot-separated, non-empty labels of ASCII alphanumerics and '-'
pub const fn is_hostname_segment(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut label_len = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'.' {
            if label_len == 0 {
                return false;
            }
            label_len = 0;
        } else if b.is_ascii_alphanumeric() || b == b'-' {
            label_len += 1;
        } else {
            return false;
        }
        i += 1;
    }

    label_len > 0
}
