use thiserror::Error;

/// Failures surfaced by the unshredding stages.
///
/// All of them are input or programming errors; nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnshredError {
    /// Width or height is zero, the strip width is zero, or the width is not
    /// a whole number of strips. Raised before any scoring happens.
    #[error("invalid dimensions {width}x{height} for strip width {chunk_size}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        chunk_size: usize,
    },
    /// The chain walk found no unplaced successor before placing every strip.
    #[error("chain walk found no unplaced successor of strip {after} after placing {placed} of {total} strips")]
    DegenerateOrder {
        after: usize,
        placed: usize,
        total: usize,
    },
    /// An order handed to the compositor is not a permutation of the strips.
    #[error("order of length {len} is not a permutation of {strips} strips")]
    InvalidOrder { len: usize, strips: usize },
}
