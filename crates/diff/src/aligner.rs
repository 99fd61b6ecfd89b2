use log::{log_enabled, trace, Level};

use crate::edit_op::{Alignment, EditOp};
use crate::error::DiffError;
use crate::matrix::Matrix;
use crate::text_pair::{Side, SymbolSource};

/// One cell of the action table, recording which transition produced the
/// minimal value at that cell. `None` only ever appears at (0, 0) and
/// terminates the backtrace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Cell {
    #[default]
    None,
    Insert,
    Delete,
    Replace,
    Ignore,
}

/// The alignment engine
///
/// Computes the minimum edit distance between the two sequences of a
/// [`SymbolSource`], and on request the full edit path realizing it.
/// The value and action tables are owned by the engine and reused across
/// comparisons, so one `Aligner` amortizes its allocations over a batch
/// of runs.
#[derive(Debug, Default)]
pub struct Aligner {
    values: Matrix<usize>,
    actions: Matrix<Cell>,
}

impl Aligner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the edit distance only
    ///
    /// Runs the recurrence over a single row of width `len(old) + 1`,
    /// reused in place across `len(new)` iterations: O(m*n) time but only
    /// O(len(old)) space. Use [`Aligner::alignment`] when the edit path
    /// is needed as well.
    pub fn distance(&mut self, src: &impl SymbolSource) -> Result<usize, DiffError> {
        let len_old = src.len(Side::Old);
        let len_new = src.len(Side::New);

        // With one side empty the distance is the other side's length
        if len_old == 0 {
            return Ok(len_new);
        }
        if len_new == 0 {
            return Ok(len_old);
        }

        self.values.resize(1, len_old + 1)?;
        for j in 0..=len_old {
            self.values.set(0, j, j);
        }

        for i in 1..=len_new {
            // The row buffer is overwritten in place, so the diagonal
            // neighbour must be captured before each update
            let mut diag = i - 1;
            for j in 1..=len_old {
                let ins = self.values.get(0, j) + 1;
                // Column 0 of the current row is never stored; its value
                // is always i
                let del = if j == 1 {
                    i + 1
                } else {
                    self.values.get(0, j - 1) + 1
                };
                let sub = diag + usize::from(!src.eq_at(j - 1, i - 1));

                diag = self.values.get(0, j);
                self.values.set(0, j, ins.min(del).min(sub));
            }
        }

        Ok(self.values.get(0, len_old))
    }

    /// Compute the edit distance and the full edit path
    ///
    /// Fills an `(len(new)+1) x (len(old)+1)` value table plus an action
    /// table of the same shape, then backtraces from the bottom-right
    /// corner. The backtrace is capped at `len(old) + len(new)` steps; a
    /// longer walk means the tables are corrupt and is reported as
    /// [`DiffError::CorruptTable`].
    pub fn alignment(&mut self, src: &impl SymbolSource) -> Result<Alignment, DiffError> {
        let len_old = src.len(Side::Old);
        let len_new = src.len(Side::New);

        // One side empty: the path is a single pure run, no tables needed
        if len_old == 0 {
            return Ok(Alignment::new(len_new, vec![EditOp::Insert; len_new]));
        }
        if len_new == 0 {
            return Ok(Alignment::new(len_old, vec![EditOp::Delete; len_old]));
        }

        self.values.resize(len_new + 1, len_old + 1)?;
        self.actions.resize(len_new + 1, len_old + 1)?;

        // Row 0: only deletions can consume the remaining old prefix.
        // Column 0: only insertions can produce the new prefix.
        for j in 0..=len_old {
            self.values.set(0, j, j);
            self.actions.set(0, j, Cell::Delete);
        }
        for i in 0..=len_new {
            self.values.set(i, 0, i);
            self.actions.set(i, 0, Cell::Insert);
        }
        self.actions.set(0, 0, Cell::None);

        for i in 1..=len_new {
            for j in 1..=len_old {
                let ins = self.values.get(i - 1, j) + 1;
                let del = self.values.get(i, j - 1) + 1;
                let equal = src.eq_at(j - 1, i - 1);
                let sub = self.values.get(i - 1, j - 1) + usize::from(!equal);

                // The precedence on exact ties is fixed: a three-way tie
                // resolves to Delete, an Insert/Replace tie to Insert, a
                // Delete/Replace tie to Replace. Downstream output depends
                // on this order, so the branches mirror it exactly.
                let (val, cell) = if ins < del {
                    if sub < ins {
                        (sub, if equal { Cell::Ignore } else { Cell::Replace })
                    } else {
                        (ins, Cell::Insert)
                    }
                } else if sub < ins {
                    if del < sub {
                        (del, Cell::Delete)
                    } else {
                        (sub, if equal { Cell::Ignore } else { Cell::Replace })
                    }
                } else {
                    (del, Cell::Delete)
                };

                self.values.set(i, j, val);
                self.actions.set(i, j, cell);
            }
        }

        if log_enabled!(Level::Trace) {
            self.trace_tables(len_old, len_new);
        }

        let bound = len_old + len_new;
        let mut ops = Vec::with_capacity(bound);
        let mut i = len_new;
        let mut j = len_old;
        loop {
            let op = match self.actions.get(i, j) {
                Cell::None => break,
                Cell::Insert => {
                    i -= 1;
                    EditOp::Insert
                }
                Cell::Delete => {
                    j -= 1;
                    EditOp::Delete
                }
                Cell::Replace => {
                    i -= 1;
                    j -= 1;
                    EditOp::Replace
                }
                Cell::Ignore => {
                    i -= 1;
                    j -= 1;
                    EditOp::Ignore
                }
            };
            ops.push(op);
            if ops.len() > bound {
                return Err(DiffError::CorruptTable { bound });
            }
        }
        ops.reverse();

        Ok(Alignment::new(self.values.get(len_new, len_old), ops))
    }

    /// Dump the filled tables at trace level, one row per line
    fn trace_tables(&self, len_old: usize, len_new: usize) {
        for i in 0..=len_new {
            let values: Vec<usize> = (0..=len_old).map(|j| self.values.get(i, j)).collect();
            let actions: String = (0..=len_old)
                .map(|j| match self.actions.get(i, j) {
                    Cell::None => 'x',
                    Cell::Insert => 'S',
                    Cell::Delete => 'D',
                    Cell::Replace => 'R',
                    Cell::Ignore => 'I',
                })
                .collect();
            trace!("row {i:4}: {values:?} {actions}");
        }
    }
}
