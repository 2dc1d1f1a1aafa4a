//! Error types for the chart3d renderers.

use thiserror::Error;

/// Result type alias for chart3d operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations reported by the renderers.
///
/// These are programming errors on the caller side and are never retried.
/// Hit-region widening failures are not errors: the renderers fall back to
/// the unwidened path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A box needs exactly eight corners.
    #[error("expected {expected} box corners, got {actual}")]
    InvalidCornerCount { expected: usize, actual: usize },

    /// Marker style code outside the known shapes.
    #[error("unknown marker style code {0}")]
    UnknownMarkerStyle(u8),

    /// Input that cannot form the requested primitive.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}
