use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A 2D point or vector in footprint space (mm, KiCad orientation: +y points down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same value on both axes, the way a scalar pad size or drill expands.
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    #[must_use]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction. A zero-length vector normalizes to zero.
    #[must_use]
    pub fn normalize(self) -> Vec2 {
        let (radius, _) = self.to_polar();
        if radius == 0.0 {
            Vec2::ZERO
        } else {
            self / radius
        }
    }

    /// `(radius, angle_deg)` about the origin.
    #[must_use]
    pub fn to_polar(self) -> (f64, f64) {
        (self.length(), self.y.atan2(self.x).to_degrees())
    }

    #[must_use]
    pub fn from_polar(radius: f64, angle_deg: f64) -> Vec2 {
        let (s, c) = angle_deg.to_radians().sin_cos();
        Vec2::new(radius * c, radius * s)
    }

    /// Rotate about the origin by `angle_deg`.
    #[must_use]
    pub fn rotate(self, angle_deg: f64) -> Vec2 {
        let (s, c) = angle_deg.to_radians().sin_cos();
        Vec2::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Rotate about `origin` by `angle_deg`.
    #[must_use]
    pub fn rotate_about(self, angle_deg: f64, origin: Vec2) -> Vec2 {
        (self - origin).rotate(angle_deg) + origin
    }

    /// Left-hand perpendicular in KiCad space, `(y, -x)`.
    #[must_use]
    pub fn perp(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }

    /// Snap both coordinates to the nearest multiple of `step`.
    #[must_use]
    pub fn round_to(self, step: f64) -> Vec2 {
        Vec2::new(round_to(self.x, step), round_to(self.y, step))
    }

    #[must_use]
    pub fn abs_diff_max(self, other: Vec2) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// Snap `v` to the nearest multiple of `step`; negative zero is folded to zero.
#[must_use]
pub fn round_to(v: f64, step: f64) -> f64 {
    let r = (v / step).round() * step;
    // Re-round in decimal space so 0.1 steps do not print as 0.30000000000000004.
    let decimals = (-step.log10()).ceil().max(0.0) as i32;
    let scale = 10_f64.powi(decimals);
    let r = (r * scale).round() / scale;
    if r == 0.0 { 0.0 } else { r }
}

impl From<[f64; 2]> for Vec2 {
    fn from(v: [f64; 2]) -> Self {
        Vec2::new(v[0], v[1])
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from(v: (f64, f64)) -> Self {
        Vec2::new(v.0, v.1)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// 3D triple used for model placement (`at`, `scale`, `rotate`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rotate_about_origin_quarter_turn() {
        let p = Vec2::new(1.0, 0.0).rotate(90.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn rotate_about_point() {
        let p = Vec2::new(2.0, 1.0).rotate_about(180.0, Vec2::new(1.0, 1.0));
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn normalize_zero_is_zero() {
        let n = Vec2::ZERO.normalize();
        assert_eq!(n, Vec2::ZERO);
        assert!(!n.x.is_nan());
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vec2::new(3.0, -4.0).normalize();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(n.x, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn polar_round_trip() {
        let (r, a) = Vec2::new(0.0, 2.0).to_polar();
        assert_abs_diff_eq!(r, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a, 90.0, epsilon = 1e-12);
        let p = Vec2::from_polar(r, a);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn round_to_grid() {
        assert_eq!(round_to(1.23456, 0.001), 1.235);
        assert_eq!(round_to(-0.0004, 0.001), 0.0);
        assert_eq!(Vec2::new(0.1 + 0.2, 1.0006).round_to(0.001), Vec2::new(0.3, 1.001));
    }

    #[test]
    fn perp_is_left_hand_in_kicad_space() {
        assert_eq!(Vec2::new(1.0, 0.0).perp(), Vec2::new(0.0, -1.0));
    }
}
