/// WF3D Core Library - Wireframe geometry for oblique line drawings
///
/// This library provides the pure geometry pipeline: orthonormal basis
/// construction, wireframe models, the fixed cabinet projection, and the
/// canvas mapping that turns projected points into drawing commands for an
/// external drawing surface.

pub mod basis;
pub mod canvas;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod obj;
pub mod projection;
pub mod render;
pub mod surface;

// Re-export commonly used types
pub use basis::{build_basis, OrthonormalBasis};
pub use canvas::{BoundingBox, CanvasTransform, PixelPos};
pub use config::RenderOptions;
pub use error::{GeometryError, Result};
pub use format::{format_general, node_label};
pub use model::{build_model, Link, WireframeModel};
pub use obj::read_wireframe;
pub use projection::{project, ObliqueProjection, ProjectedModel};
pub use render::{render, render_with, DrawCommand, Drawing};
pub use surface::{Color, DrawSurface};
