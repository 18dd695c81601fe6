use std::ops::{Add, Mul};

/// A point in screen space. X grows right, Y grows down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2::add(&self, rhs)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_commutes() {
        let p = Vec2::new(1.5, -2.0);
        let q = Vec2::new(-4.0, 8.25);
        assert_eq!(p.add(q), q.add(p));
        assert_eq!(p + q, Vec2::new(-2.5, 6.25));
    }

    #[test]
    fn test_scale_composes() {
        let p = Vec2::new(3.0, -7.0);
        assert_eq!(p.scale(2.0).scale(4.0), p.scale(8.0));
        assert_eq!(p * 0.5, Vec2::new(1.5, -3.5));
    }
}
