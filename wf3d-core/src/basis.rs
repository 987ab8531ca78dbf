/// Right-handed orthonormal basis construction
use nalgebra::{Matrix3, Vector3};

use crate::config::MATH_EPS;
use crate::error::{GeometryError, Result};

/// Three mutually orthogonal unit axes with `z_dir = x_dir × y_dir`.
///
/// Built once by [`build_basis`] and immutable afterwards. Nothing in the
/// render path consumes it; it is a standalone utility for moving vectors
/// into and out of a camera-style frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthonormalBasis {
    x_dir: Vector3<f64>,
    y_dir: Vector3<f64>,
    z_dir: Vector3<f64>,
}

impl OrthonormalBasis {
    /// Same as [`build_basis`].
    pub fn new(x_dir: Vector3<f64>, y_dir: Vector3<f64>) -> Result<Self> {
        build_basis(x_dir, y_dir)
    }

    pub fn x_dir(&self) -> Vector3<f64> {
        self.x_dir
    }

    pub fn y_dir(&self) -> Vector3<f64> {
        self.y_dir
    }

    pub fn z_dir(&self) -> Vector3<f64> {
        self.z_dir
    }

    /// The basis as a 3x3 matrix whose columns are x_dir, y_dir, z_dir.
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[self.x_dir, self.y_dir, self.z_dir])
    }

    /// Express a world-space vector in this basis.
    pub fn to_local(&self, v: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(self.x_dir.dot(v), self.y_dir.dot(v), self.z_dir.dot(v))
    }

    /// Map basis coordinates back to world space.
    pub fn to_world(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.matrix() * v
    }
}

/// Build a right-handed orthonormal basis from two orthogonal directions.
///
/// Both inputs are normalized first. The builder never orthogonalizes: if
/// the normalized inputs are not orthogonal to within [`MATH_EPS`] the call
/// fails with [`GeometryError::NonOrthogonalBasis`].
pub fn build_basis(x_dir: Vector3<f64>, y_dir: Vector3<f64>) -> Result<OrthonormalBasis> {
    let x_dir = unit(x_dir, "x")?;
    let y_dir = unit(y_dir, "y")?;

    let dot = x_dir.dot(&y_dir);
    if !(dot.abs() < MATH_EPS) {
        return Err(GeometryError::NonOrthogonalBasis { dot });
    }

    let z_dir = unit(x_dir.cross(&y_dir), "z")?;

    Ok(OrthonormalBasis { x_dir, y_dir, z_dir })
}

fn unit(v: Vector3<f64>, axis: &'static str) -> Result<Vector3<f64>> {
    let norm = v.norm();
    // Also rejects NaN norms.
    if !(norm >= MATH_EPS) {
        return Err(GeometryError::DegenerateVector { axis, norm });
    }
    Ok(v / norm)
}
