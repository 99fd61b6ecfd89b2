use derive_more::{Display, Error};

/// Errors produced by the alignment engine
///
/// Allocation failure and table corruption are kept as distinct variants
/// so that tests can assert the second never occurs rather than both
/// collapsing into one opaque failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum DiffError {
    /// The edit tables for the requested comparison could not be allocated
    #[display(fmt = "cannot allocate a {}x{} edit table", rows, cols)]
    TableAlloc { rows: usize, cols: usize },

    /// The backtrace walked more steps than any valid edit path contains,
    /// which means the action table is corrupt
    #[display(fmt = "backtrace exceeded the {} step bound, edit tables are corrupt", bound)]
    CorruptTable { bound: usize },
}
