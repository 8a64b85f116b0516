use core::fmt;

/// Errors reported by tree operations.
///
/// Absent results from plain navigation (`search`, `min`, `successor`, ...)
/// are reported as `None`; this type covers the calls whose failure is a
/// caller-side contract violation or a lookup that must produce a value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The requested key is not stored in the tree.
    NotFound,
    /// An order-statistic index was outside `0..len`.
    IndexOutOfRange {
        /// The index that was asked for.
        index: usize,
        /// The number of keys in the tree at the time of the call.
        len: usize,
    },
    /// The position does not name a live node of this tree.
    InvalidPosition,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => f.write_str("key not found"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for a tree of {len} keys")
            }
            Error::InvalidPosition => f.write_str("position does not name a live node"),
        }
    }
}

impl core::error::Error for Error {}
