//! String utility functions
//!
//! Utilities for working with strings and text data.

/// Decodes an ASCII field, dropping the first NUL byte and any garbage
/// after it
pub fn cut_at_nul(buffer: &[u8]) -> String {
    let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
    String::from_utf8_lossy(&buffer[..end]).into_owned()
}
