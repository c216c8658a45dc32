//! Place-and-transform math.
//!
//! A [`Placement`] maps one unit-space primitive into a cell: scale, then
//! offset, optionally mirrored through z and turned about a vertical axis.
//! A [`SubmeshTransform`] maps an already-built buffer set into another one
//! (wall merges and wings).

use bevy::math::{Quat, Vec3};
use grammar::FacadeError;

use crate::primitives::Primitive;

fn xyz(v: [f32; 4]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

/// Rotation about the vertical axis through `pivot`. Positive angles turn
/// +x toward -z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn {
    pub angle: f32,
    pub pivot: Vec3,
}

impl Turn {
    pub fn about(angle: f32, pivot: Vec3) -> Self {
        Self { angle, pivot }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.angle)
    }

    pub fn apply_point(&self, p: Vec3) -> Vec3 {
        self.pivot + self.rotation() * (p - self.pivot)
    }
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Per-axis magnitudes; must be finite and positive.
    pub scale: Vec3,
    pub offset: Vec3,
    /// Negates the z scale and reverses winding.
    pub mirror_z: bool,
    pub turn: Option<Turn>,
}

impl Placement {
    pub fn new(scale: Vec3, offset: Vec3) -> Self {
        Self {
            scale,
            offset,
            mirror_z: false,
            turn: None,
        }
    }

    pub fn mirrored(mut self) -> Self {
        self.mirror_z = true;
        self
    }

    pub fn turned(mut self, turn: Option<Turn>) -> Self {
        self.turn = turn;
        self
    }

    pub fn validate(&self, primitive: Primitive) -> Result<(), FacadeError> {
        let ok = self.scale.is_finite() && self.scale.cmpgt(Vec3::ZERO).all();
        if ok && self.offset.is_finite() {
            Ok(())
        } else {
            Err(FacadeError::DegenerateGeometry {
                primitive: primitive.name(),
                scale: self.scale.to_array(),
            })
        }
    }

    pub fn signed_scale(&self) -> Vec3 {
        if self.mirror_z {
            self.scale * Vec3::new(1.0, 1.0, -1.0)
        } else {
            self.scale
        }
    }

    pub fn flips_winding(&self) -> bool {
        self.mirror_z
    }

    pub fn point(&self, p: [f32; 4]) -> [f32; 4] {
        let local = xyz(p) * self.signed_scale() + self.offset;
        let world = match &self.turn {
            Some(turn) => turn.apply_point(local),
            None => local,
        };
        [world.x, world.y, world.z, p[3]]
    }

    /// Inverse-transpose of the scale, renormalized, then turned.
    pub fn normal(&self, n: [f32; 4]) -> [f32; 4] {
        let scaled = (xyz(n) / self.signed_scale()).normalize_or_zero();
        let world = match &self.turn {
            Some(turn) => turn.rotation() * scaled,
            None => scaled,
        };
        [world.x, world.y, world.z, n[3]]
    }
}

// ---------------------------------------------------------------------------
// SubmeshTransform
// ---------------------------------------------------------------------------

/// `p' = R_y(yaw) * (p * scale) + translation`. A negative scale product
/// mirrors the submesh and reverses its winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmeshTransform {
    pub scale: Vec3,
    pub yaw: f32,
    pub translation: Vec3,
}

impl Default for SubmeshTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            yaw: 0.0,
            translation: Vec3::ZERO,
        }
    }
}

impl SubmeshTransform {
    pub fn new(scale: Vec3, yaw: f32, translation: Vec3) -> Self {
        Self {
            scale,
            yaw,
            translation,
        }
    }

    /// The same motion as `turn`, expressed as rotation plus translation.
    pub fn from_turn(turn: Turn) -> Self {
        let translation = turn.pivot - turn.rotation() * turn.pivot;
        Self::new(Vec3::ONE, turn.angle, translation)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    pub fn flips_winding(&self) -> bool {
        self.scale.x * self.scale.y * self.scale.z < 0.0
    }

    pub fn point(&self, p: [f32; 4]) -> [f32; 4] {
        let world = self.rotation() * (xyz(p) * self.scale) + self.translation;
        [world.x, world.y, world.z, p[3]]
    }

    pub fn normal(&self, n: [f32; 4]) -> [f32; 4] {
        let world = self.rotation() * (xyz(n) / self.scale).normalize_or_zero();
        [world.x, world.y, world.z, n[3]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_scale_then_offset() {
        let placement = Placement::new(Vec3::new(2.0, 3.0, 4.0), Vec3::new(1.0, 0.0, -1.0));
        assert!(close(placement.point([1.0, 1.0, 1.0, 1.0]), [3.0, 3.0, 3.0, 1.0]));
    }

    #[test]
    fn test_normal_uses_inverse_scale() {
        // a 45 degree slope squashed to half height becomes steeper-facing
        let placement = Placement::new(Vec3::new(1.0, 0.5, 1.0), Vec3::ZERO);
        let s = std::f32::consts::FRAC_1_SQRT_2;
        let n = placement.normal([s, s, 0.0, 0.0]);
        let expected = Vec3::new(1.0, 2.0, 0.0).normalize();
        assert!(close(n, [expected.x, expected.y, expected.z, 0.0]), "{n:?}");
    }

    #[test]
    fn test_mirror_flips_z_normal_and_winding() {
        let placement = Placement::new(Vec3::ONE, Vec3::ZERO).mirrored();
        assert!(close(placement.normal([0.0, 0.0, 1.0, 0.0]), [0.0, 0.0, -1.0, 0.0]));
        assert!(close(placement.point([0.0, 0.0, 0.5, 1.0]), [0.0, 0.0, -0.5, 1.0]));
        assert!(placement.flips_winding());
    }

    #[test]
    fn test_turn_about_pivot() {
        let turn = Turn::about(PI, Vec3::new(2.0, 0.0, 1.0));
        let p = turn.apply_point(Vec3::new(0.0, 5.0, 0.0));
        assert!((p - Vec3::new(4.0, 5.0, 2.0)).length() < 1e-5, "{p:?}");
    }

    #[test]
    fn test_positive_quarter_turn_takes_x_to_minus_z() {
        let turn = Turn::about(FRAC_PI_2, Vec3::ZERO);
        let p = turn.apply_point(Vec3::X);
        assert!((p - Vec3::NEG_Z).length() < 1e-6, "{p:?}");
    }

    #[test]
    fn test_degenerate_scale_rejected() {
        for scale in [
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, -2.0, 1.0),
            Vec3::new(1.0, 1.0, f32::INFINITY),
            Vec3::new(f32::NAN, 1.0, 1.0),
        ] {
            let err = Placement::new(scale, Vec3::ZERO)
                .validate(Primitive::Cube)
                .unwrap_err();
            assert!(matches!(err, FacadeError::DegenerateGeometry { primitive: "cube", .. }));
        }
        assert!(Placement::new(Vec3::ONE, Vec3::ZERO)
            .validate(Primitive::Cube)
            .is_ok());
    }

    #[test]
    fn test_from_turn_matches_turn() {
        let turn = Turn::about(0.7, Vec3::new(3.0, 0.0, -2.0));
        let transform = SubmeshTransform::from_turn(turn);
        for p in [Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.5, 9.0)] {
            let a = turn.apply_point(p);
            let b = transform.point([p.x, p.y, p.z, 1.0]);
            assert!(close([a.x, a.y, a.z, 1.0], b));
        }
        assert!(!transform.flips_winding());
    }

    #[test]
    fn test_negative_scale_flips_submesh_winding() {
        let transform = SubmeshTransform::new(Vec3::new(-1.0, 1.0, 1.0), 0.0, Vec3::ZERO);
        assert!(transform.flips_winding());
        assert!(close(transform.normal([1.0, 0.0, 0.0, 0.0]), [-1.0, 0.0, 0.0, 0.0]));
    }
}
