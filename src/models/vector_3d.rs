use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use crate::models::{FromCoordinates, ToCoordinates};

/// A point or force vector in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub const ZERO: Vector3D = Vector3D { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D { x, y, z }
    }

    /// Sum of the squared components.
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// True when every component is neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Components in x, y, z order.
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl FromCoordinates<(f64, f64, f64)> for Vector3D {
    fn from_coord(position: (f64, f64, f64)) -> Self {
        Vector3D::new(position.0, position.1, position.2)
    }
}

impl FromCoordinates<[f64; 3]> for Vector3D {
    fn from_coord(position: [f64; 3]) -> Self {
        Vector3D::new(position[0], position[1], position[2])
    }
}

impl ToCoordinates<(f64, f64, f64)> for Vector3D {
    fn to_coord(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, rhs: Vector3D) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, scalar: f64) -> Vector3D {
        Vector3D::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, vector: Vector3D) -> Vector3D {
        vector * self
    }
}

impl Div<f64> for Vector3D {
    type Output = Vector3D;

    fn div(self, scalar: f64) -> Vector3D {
        Vector3D::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}
