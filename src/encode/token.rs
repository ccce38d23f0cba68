//! Palette index tokens.
//!
//! Indices 0-9 are written as decimal digits and 10-61 as letters, lowercase
//! first. Transparent pixels use `.`.

/// Token for fully transparent pixels.
pub const TRANSPARENT_TOKEN: char = '.';

/// Letters used for indices 10 and up, in order.
const LETTERS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of distinct colours a token can address.
pub const MAX_COLOURS: usize = 10 + LETTERS.len();

/// Map a palette index to its token, or `None` past [`MAX_COLOURS`].
pub fn token_for_index(index: usize) -> Option<char> {
    match index {
        0..=9 => char::from_digit(index as u32, 10),
        _ => LETTERS.get(index - 10).map(|&b| b as char),
    }
}

/// Map a token back to its palette index.
///
/// Returns `None` for the transparent token and anything outside the alphabet.
pub fn index_for_token(token: char) -> Option<usize> {
    match token {
        '0'..='9' => token.to_digit(10).map(|d| d as usize),
        'a'..='z' => Some(10 + (token as usize - 'a' as usize)),
        'A'..='Z' => Some(36 + (token as usize - 'A' as usize)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_digits() {
        assert_eq!(token_for_index(0), Some('0'));
        assert_eq!(token_for_index(9), Some('9'));
    }

    #[test]
    fn test_letters() {
        assert_eq!(token_for_index(10), Some('a'));
        assert_eq!(token_for_index(35), Some('z'));
        assert_eq!(token_for_index(36), Some('A'));
        assert_eq!(token_for_index(61), Some('Z'));
    }

    #[test]
    fn test_capacity_boundary() {
        assert_eq!(MAX_COLOURS, 62);
        assert_eq!(token_for_index(62), None);
        assert_eq!(token_for_index(1000), None);
    }

    #[test]
    fn test_tokens_are_a_bijection() {
        let mut seen = HashSet::new();
        for index in 0..MAX_COLOURS {
            let token = token_for_index(index).unwrap();
            assert_ne!(token, TRANSPARENT_TOKEN);
            assert!(seen.insert(token), "token {} reused", token);
            assert_eq!(index_for_token(token), Some(index));
        }
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(index_for_token(TRANSPARENT_TOKEN), None);
        assert_eq!(index_for_token('#'), None);
        assert_eq!(index_for_token('é'), None);
    }
}
