//! Map configuration error types.

/// Errors raised when a map configuration is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    /// The requested map width was zero.
    #[error("map width must be greater than zero")]
    ZeroWidth,

    /// The requested map height was zero.
    #[error("map height must be greater than zero")]
    ZeroHeight,

    /// `width * height` is too large to allocate as a single grid.
    #[error("map of {width}x{height} cells is too large")]
    TooManyCells {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The fill probability was NaN or outside `[0, 1]`.
    #[error("fill probability must be within [0, 1], got {0}")]
    FillProbabilityOutOfRange(f64),
}
