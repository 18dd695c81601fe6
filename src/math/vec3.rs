use std::ops::{Add, Mul};

use super::vec2::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn add(&self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Orthographic projection onto the screen plane: z is dropped.
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3::add(&self, rhs)
    }
}

/// Scalar multiplication of a vector.
impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl From<Vec2> for Vec3 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_commutes() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let q = Vec3::new(-0.5, 4.0, 10.0);
        assert_eq!(p.add(q), q.add(p));
    }

    #[test]
    fn test_add_associates() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let q = Vec3::new(-4.0, 0.5, 1.0);
        let r = Vec3::new(8.0, -16.0, 0.25);
        assert_eq!((p + q) + r, p + (q + r));
    }

    #[test]
    fn test_scale_composes() {
        let p = Vec3::new(0.3, -1.7, 2.9);
        let twice = p.scale(3.0).scale(0.5);
        let once = p.scale(1.5);
        assert_relative_eq!(twice.x, once.x, epsilon = 1e-12);
        assert_relative_eq!(twice.y, once.y, epsilon = 1e-12);
        assert_relative_eq!(twice.z, once.z, epsilon = 1e-12);
    }

    #[test]
    fn test_operands_untouched() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        let _ = p.scale(5.0);
        let _ = p.add(Vec3::ONE);
        assert_eq!(p, Vec3::ONE);
    }

    #[test]
    fn test_to_vec2_drops_z() {
        let p = Vec3::new(4.0, -2.0, 99.0);
        assert_eq!(p.to_vec2(), Vec2::new(4.0, -2.0));
    }
}
