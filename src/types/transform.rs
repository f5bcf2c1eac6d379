//! 2D affine transforms for block expansion
//!
//! Block references place their block's geometry through a translate ∘
//! rotate ∘ scale chain; nested references compose their transforms.

use crate::types::Vector2;
use std::ops::Mul;

/// A 2D affine transform (2x3 matrix: linear part + translation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2 {
    /// Linear part, row-major: `[[a, b], [c, d]]`
    pub m: [[f64; 2]; 2],
    /// Translation column
    pub t: Vector2,
}

impl Transform2 {
    /// Identity transform
    pub const IDENTITY: Transform2 = Transform2 {
        m: [[1.0, 0.0], [0.0, 1.0]],
        t: Vector2::ZERO,
    };

    /// Pure translation
    pub fn translation(t: Vector2) -> Self {
        Transform2 {
            m: [[1.0, 0.0], [0.0, 1.0]],
            t,
        }
    }

    /// Rotation about the origin, angle in radians
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Transform2 {
            m: [[cos, -sin], [sin, cos]],
            t: Vector2::ZERO,
        }
    }

    /// Non-uniform scaling about the origin
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Transform2 {
            m: [[sx, 0.0], [0.0, sy]],
            t: Vector2::ZERO,
        }
    }

    /// Block-insertion transform: translate to `position`, rotate by
    /// `rotation` radians, then scale.
    pub fn insertion(position: Vector2, rotation: f64, sx: f64, sy: f64) -> Self {
        Transform2::translation(position) * Transform2::rotation(rotation) * Transform2::scaling(sx, sy)
    }

    /// Apply the transform to a point
    pub fn apply(&self, p: Vector2) -> Vector2 {
        Vector2::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y + self.t.x,
            self.m[1][0] * p.x + self.m[1][1] * p.y + self.t.y,
        )
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Transform2::IDENTITY
    }
}

impl Mul for Transform2 {
    type Output = Transform2;

    /// Compose: `(self * rhs).apply(p) == self.apply(rhs.apply(p))`
    fn mul(self, rhs: Transform2) -> Transform2 {
        Transform2 {
            m: [
                [
                    self.m[0][0] * rhs.m[0][0] + self.m[0][1] * rhs.m[1][0],
                    self.m[0][0] * rhs.m[0][1] + self.m[0][1] * rhs.m[1][1],
                ],
                [
                    self.m[1][0] * rhs.m[0][0] + self.m[1][1] * rhs.m[1][0],
                    self.m[1][0] * rhs.m[0][1] + self.m[1][1] * rhs.m[1][1],
                ],
            ],
            t: self.apply(rhs.t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: Vector2, b: Vector2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_identity() {
        let p = Vector2::new(3.0, 4.0);
        assert_eq!(Transform2::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_translation() {
        let t = Transform2::translation(Vector2::new(1.0, 2.0));
        assert_eq!(t.apply(Vector2::new(3.0, 4.0)), Vector2::new(4.0, 6.0));
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let r = Transform2::rotation(FRAC_PI_2);
        assert!(close(r.apply(Vector2::new(1.0, 0.0)), Vector2::new(0.0, 1.0)));
    }

    #[test]
    fn test_composition_order() {
        // translate after rotate: rotate (1,0) to (0,1), then shift by (10,10)
        let t = Transform2::translation(Vector2::new(10.0, 10.0)) * Transform2::rotation(FRAC_PI_2);
        assert!(close(t.apply(Vector2::new(1.0, 0.0)), Vector2::new(10.0, 11.0)));
    }

    #[test]
    fn test_insertion_matches_manual_chain() {
        let ins = Transform2::insertion(Vector2::new(5.0, 0.0), FRAC_PI_2, 2.0, 2.0);
        let manual = Transform2::translation(Vector2::new(5.0, 0.0))
            * Transform2::rotation(FRAC_PI_2)
            * Transform2::scaling(2.0, 2.0);
        assert!(close(
            ins.apply(Vector2::new(1.0, 1.0)),
            manual.apply(Vector2::new(1.0, 1.0))
        ));
    }
}
