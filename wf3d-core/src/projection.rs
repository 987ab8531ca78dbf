/// Oblique parallel projections from model space to the drawing plane
use nalgebra::{Matrix2x3, Vector2, Vector3};
use std::f64::consts::SQRT_2;

use crate::canvas::BoundingBox;

/// A parallel projection that keeps model x and z as the screen axes and
/// draws model y (depth) along a slanted, foreshortened screen direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliqueProjection {
    x_axis: Vector2<f64>,
    y_axis: Vector2<f64>,
    z_axis: Vector2<f64>,
}

impl ObliqueProjection {
    /// Depth drawn at `angle` radians from the screen x axis, scaled by `depth_scale`.
    pub fn new(angle: f64, depth_scale: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x_axis: Vector2::new(1.0, 0.0),
            y_axis: Vector2::new(cos * depth_scale, sin * depth_scale),
            z_axis: Vector2::new(0.0, 1.0),
        }
    }

    /// Cabinet projection: depth at 45° and half length, i.e. `(√2/4, √2/4)`.
    pub fn cabinet() -> Self {
        let s = SQRT_2 / 4.0;
        Self {
            x_axis: Vector2::new(1.0, 0.0),
            y_axis: Vector2::new(s, s),
            z_axis: Vector2::new(0.0, 1.0),
        }
    }

    /// Cavalier projection: depth at 45° and full length.
    pub fn cavalier() -> Self {
        Self::new(std::f64::consts::FRAC_PI_4, 1.0)
    }

    /// Screen directions of the model x, y and z axes, as matrix columns.
    pub fn matrix(&self) -> Matrix2x3<f64> {
        Matrix2x3::from_columns(&[self.x_axis, self.y_axis, self.z_axis])
    }

    pub fn apply(&self, node: &Vector3<f64>) -> Vector2<f64> {
        self.x_axis * node.x + self.y_axis * node.y + self.z_axis * node.z
    }
}

impl Default for ObliqueProjection {
    fn default() -> Self {
        Self::cabinet()
    }
}

/// Project a single node with the fixed cabinet projection.
pub fn project(node: &Vector3<f64>) -> Vector2<f64> {
    ObliqueProjection::cabinet().apply(node)
}

/// 2D images of a model's nodes, in the same index order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedModel {
    points: Vec<Vector2<f64>>,
}

impl ProjectedModel {
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds of all points, or `None` for an empty model.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }
}
