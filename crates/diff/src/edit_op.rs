use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents one step of an edit path
///
/// An edit path, read left to right, transforms the old sequence into the
/// new one: `Insert` produces one symbol of the new sequence, `Delete`
/// consumes one symbol of the old sequence, `Replace` and `Ignore` consume
/// one of each (differing only in whether the two symbols were equal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditOp {
    /// A symbol exists only in the new sequence
    #[display(fmt = "Insert")]
    Insert,

    /// A symbol exists only in the old sequence
    #[display(fmt = "Delete")]
    Delete,

    /// A symbol of the old sequence is substituted in the new sequence
    #[display(fmt = "Replace")]
    Replace,

    /// The symbol is unchanged between both sequences
    #[display(fmt = "Ignore")]
    Ignore,
}

/// The result of aligning two sequences: the minimum edit distance and
/// the ordered edit path realizing it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alignment {
    distance: usize,
    ops: Vec<EditOp>,
}

impl Alignment {
    pub(crate) fn new(distance: usize, ops: Vec<EditOp>) -> Self {
        Self { distance, ops }
    }

    /// Get the edit distance
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Get the edit path
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Check if the two sequences were identical
    pub fn is_unchanged(&self) -> bool {
        self.distance == 0
    }

    /// Get the number of inserted symbols in this path
    pub fn inserted(&self) -> usize {
        self.ops.iter().filter(|&&op| op == EditOp::Insert).count()
    }

    /// Get the number of deleted symbols in this path
    pub fn deleted(&self) -> usize {
        self.ops.iter().filter(|&&op| op == EditOp::Delete).count()
    }

    /// Get the number of substituted symbols in this path
    pub fn replaced(&self) -> usize {
        self.ops.iter().filter(|&&op| op == EditOp::Replace).count()
    }

    /// Get the number of unchanged symbols in this path
    pub fn unchanged(&self) -> usize {
        self.ops.iter().filter(|&&op| op == EditOp::Ignore).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_counts() {
        let alignment = Alignment::new(
            3,
            vec![
                EditOp::Replace,
                EditOp::Ignore,
                EditOp::Ignore,
                EditOp::Delete,
                EditOp::Insert,
                EditOp::Insert,
            ],
        );

        assert_eq!(alignment.distance(), 3);
        assert_eq!(alignment.inserted(), 2);
        assert_eq!(alignment.deleted(), 1);
        assert_eq!(alignment.replaced(), 1);
        assert_eq!(alignment.unchanged(), 2);
        assert!(!alignment.is_unchanged());
    }

    #[test]
    fn test_display() {
        assert_eq!(EditOp::Insert.to_string(), "Insert");
        assert_eq!(EditOp::Ignore.to_string(), "Ignore");
    }
}
