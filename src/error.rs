//! Error kinds surfaced by [`crate::Table`].
//!
//! Both kinds are programmer errors: they are raised before any mutation
//! happens, so the table is always left in a valid state.

/// Errors returned by [`Table::new`](crate::Table::new),
/// [`Table::put`](crate::Table::put), and [`Table::find`](crate::Table::find).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SwissTableError {
    /// A constructor or call-time argument was out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `put` would have inserted a new entry past `max_size`.
    #[error("capacity exceeded: table already holds max_size={max_size} entries")]
    CapacityExceeded {
        /// The configured maximum size of the table.
        max_size: usize,
    },
}

pub type Result<T> = std::result::Result<T, SwissTableError>;
