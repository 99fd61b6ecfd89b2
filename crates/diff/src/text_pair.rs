#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects one of the two sequences of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// The old version of the text
    Old,

    /// The new version of the text
    New,
}

/// Access to the two symbol sequences of one comparison
///
/// The alignment engine only needs lengths, constant-time symbol access
/// and an equality check between the sides, so alternative backends (a
/// filtered view, a token stream) can plug in behind this trait.
pub trait SymbolSource {
    /// The length of one sequence
    fn len(&self, side: Side) -> usize;

    /// The symbol at `idx` of one sequence
    fn symbol(&self, side: Side, idx: usize) -> char;

    /// Compare one symbol of the old sequence against one of the new
    fn eq_at(&self, old_idx: usize, new_idx: usize) -> bool {
        self.symbol(Side::Old, old_idx) == self.symbol(Side::New, new_idx)
    }

    /// Check if one sequence is empty
    fn is_empty(&self, side: Side) -> bool {
        self.len(side) == 0
    }
}

/// A pair of decoded texts, immutable for the duration of one comparison
#[derive(Debug, Clone)]
pub struct TextPair {
    old: Vec<char>,
    new: Vec<char>,
}

impl TextPair {
    /// Create a pair from the old and new version of a text
    pub fn new(old_text: &str, new_text: &str) -> Self {
        Self {
            old: old_text.chars().collect(),
            new: new_text.chars().collect(),
        }
    }

    fn side(&self, side: Side) -> &[char] {
        match side {
            Side::Old => &self.old,
            Side::New => &self.new,
        }
    }
}

impl SymbolSource for TextPair {
    fn len(&self, side: Side) -> usize {
        self.side(side).len()
    }

    fn symbol(&self, side: Side, idx: usize) -> char {
        self.side(side)[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        let pair = TextPair::new("héllo", "h\u{1F600}");
        assert_eq!(pair.len(Side::Old), 5);
        assert_eq!(pair.len(Side::New), 2);
    }

    #[test]
    fn test_eq_at() {
        let pair = TextPair::new("abc", "axc");
        assert!(pair.eq_at(0, 0));
        assert!(!pair.eq_at(1, 1));
        assert!(pair.eq_at(2, 2));
    }

    #[test]
    fn test_empty_sides() {
        let pair = TextPair::new("", "abc");
        assert!(pair.is_empty(Side::Old));
        assert!(!pair.is_empty(Side::New));
    }
}
