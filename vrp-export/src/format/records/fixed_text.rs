#[cfg(test)]
#[path = "../../../tests/unit/format/records/fixed_text_test.rs"]
mod fixed_text_test;

/// A null-terminated text field of fixed capacity `N - 1` bytes.
///
/// Longer input is truncated silently on a character boundary, the remaining bytes are zeroed.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedText<const N: usize>([u8; N]);

impl<const N: usize> FixedText<N> {
    /// Max amount of visible bytes.
    pub const CAPACITY: usize = N - 1;

    /// Creates a new field copying at most `CAPACITY` bytes of given text.
    pub fn new(text: &str) -> Self {
        let mut bytes = [0; N];
        let size = truncate_at_char_boundary(text, Self::CAPACITY).len();
        bytes[..size].copy_from_slice(&text.as_bytes()[..size]);

        Self(bytes)
    }

    /// Returns text stored before the first terminator.
    ///
    /// Bytes which do not form valid utf-8 are cut off.
    pub fn as_str(&self) -> &str {
        let end = self.0.iter().position(|&byte| byte == 0).unwrap_or(N);
        let bytes = &self.0[..end];

        match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => std::str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default(),
        }
    }

    /// Returns raw bytes including terminator and padding.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> Default for FixedText<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> std::fmt::Debug for FixedText<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl<const N: usize> std::fmt::Display for FixedText<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn truncate_at_char_boundary(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }

    let end = (0..=max_len).rev().find(|&idx| text.is_char_boundary(idx)).unwrap_or(0);

    &text[..end]
}
