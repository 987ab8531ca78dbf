//! Error types for the geometry core.

use thiserror::Error;

/// Precondition violations raised while building or rendering geometry.
///
/// Every variant is fatal for the operation that produced it; nothing is
/// retried or replaced by a default value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A basis input direction has (near) zero length.
    #[error("{axis} direction is degenerate (norm {norm:e})")]
    DegenerateVector {
        /// Which input was degenerate: `"x"` or `"y"`.
        axis: &'static str,
        /// The measured norm.
        norm: f64,
    },

    /// The two basis inputs are not orthogonal within tolerance.
    #[error("basis directions are not orthogonal (dot product {dot:e})")]
    NonOrthogonalBasis {
        /// Dot product of the normalized inputs.
        dot: f64,
    },

    /// A link references a node that does not exist.
    #[error("link {link} ({from}, {to}) is out of range for {node_count} nodes")]
    InvalidLinkIndex {
        /// Position of the link in the input sequence.
        link: usize,
        /// First endpoint index.
        from: usize,
        /// Second endpoint index.
        to: usize,
        /// Number of nodes in the model.
        node_count: usize,
    },

    /// A node projects to a NaN or infinite point.
    #[error("node {node} does not project to a finite point")]
    NonFiniteNode {
        /// Index of the offending node.
        node: usize,
    },

    /// Projected geometry has no extent along a screen axis.
    #[error("projected bounding box is degenerate ({width} x {height})")]
    DegenerateBoundingBox {
        /// Horizontal extent of the projected points.
        width: f64,
        /// Vertical extent of the projected points.
        height: f64,
    },

    /// The requested or derived canvas has no pixels.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas {
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
    },

    /// Wireframe text could not be read.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
