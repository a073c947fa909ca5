//! Quaternions.

use crate::{
    angle,
    vector::{Vector3, Vector4},
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::ops::{Index, IndexMut};

/// A rotation represented by four `f32` components.
///
/// Operations assume a unit-length quaternion but never check or enforce it;
/// keeping the quaternion normalized is the caller's responsibility.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 4]", from = "[f32; 4]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Quaternion {
    /// Creates a new quaternion with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates the identity rotation (0, 0, 0, 1).
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates the rotation given by the Euler angles in the given vector, in
    /// degrees, composed intrinsically in x-y-z order.
    pub fn from_euler_degrees(angles: Vector3) -> Self {
        let half = angles.mapped(angle::degrees_to_radians) * 0.5;
        let s = half.mapped(f32::sin);
        let c = half.mapped(f32::cos);

        Self::new(
            s.x() * c.y() * c.z() - c.x() * s.y() * s.z(),
            c.x() * s.y() * c.z() + s.x() * c.y() * s.z(),
            c.x() * c.y() * s.z() - s.x() * s.y() * c.z(),
            c.x() * c.y() * c.z() + s.x() * s.y() * s.z(),
        )
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.w
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Vector4> for Quaternion {
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::new(vector.x(), vector.y(), vector.z(), vector.w())
    }
}

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        [quaternion.x, quaternion.y, quaternion.z, quaternion.w]
    }
}

// Hamilton product. Rotation composition is not commutative, so the order of
// the operands matters.
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |l, r| {
    Quaternion::new(
        l.w * r.x + l.x * r.w + l.y * r.z - l.z * r.y,
        l.w * r.y + l.y * r.w + l.z * r.x - l.x * r.z,
        l.w * r.z + l.z * r.w + l.x * r.y - l.y * r.x,
        l.w * r.w - l.x * r.x - l.y * r.y - l.z * r.z,
    )
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    *a = *a * *b;
});

impl Index<usize> for Quaternion {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Quaternion {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::consts::f32::FRAC_1_SQRT_2;
    use approx::assert_abs_diff_eq;

    // Test constants
    const EPSILON: f32 = 1e-6;

    #[test]
    fn default_quaternion_is_identity() {
        let quaternion = Quaternion::default();
        assert_eq!(quaternion, Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(quaternion, Quaternion::identity());
    }

    #[test]
    fn multiplying_with_identity_leaves_quaternion_unchanged() {
        let quaternion = Quaternion::new(0.1, 0.2, 0.3, 0.9);

        assert_abs_diff_eq!(
            Quaternion::identity() * quaternion,
            quaternion,
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            quaternion * Quaternion::identity(),
            quaternion,
            epsilon = EPSILON
        );
    }

    #[test]
    fn hamilton_product_of_basis_quaternions_works() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);

        assert_abs_diff_eq!(i * j, k, epsilon = EPSILON);
        assert_abs_diff_eq!(j * i, Quaternion::new(0.0, 0.0, -1.0, 0.0), epsilon = EPSILON);
        assert_abs_diff_eq!(i * i, Quaternion::new(0.0, 0.0, 0.0, -1.0), epsilon = EPSILON);
    }

    #[test]
    fn euler_construction_about_single_axes_works() {
        let about_x = Quaternion::from_euler_degrees(Vector3::new(90.0, 0.0, 0.0));
        assert_abs_diff_eq!(
            about_x,
            Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2),
            epsilon = EPSILON
        );

        let about_y = Quaternion::from_euler_degrees(Vector3::new(0.0, 90.0, 0.0));
        assert_abs_diff_eq!(
            about_y,
            Quaternion::new(0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
            epsilon = EPSILON
        );

        let about_z = Quaternion::from_euler_degrees(Vector3::new(0.0, 0.0, 90.0));
        assert_abs_diff_eq!(
            about_z,
            Quaternion::new(0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            epsilon = EPSILON
        );
    }

    #[test]
    fn euler_construction_of_zero_angles_gives_identity() {
        assert_abs_diff_eq!(
            Quaternion::from_euler_degrees(Vector3::zeros()),
            Quaternion::identity(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotation_composition_is_not_commutative() {
        let a = Quaternion::from_euler_degrees(Vector3::new(90.0, 0.0, 0.0));
        let b = Quaternion::from_euler_degrees(Vector3::new(0.0, 90.0, 0.0));

        let ab = a * b;
        let ba = b * a;

        // The z-components differ by a sign (0.5 vs -0.5).
        assert_abs_diff_eq!(ab.z(), 0.5, epsilon = EPSILON);
        assert_abs_diff_eq!(ba.z(), -0.5, epsilon = EPSILON);
        assert!((ab.z() - ba.z()).abs() > EPSILON);
    }

    #[test]
    fn multiply_assign_matches_multiplication() {
        let a = Quaternion::from_euler_degrees(Vector3::new(30.0, 45.0, 60.0));
        let b = Quaternion::from_euler_degrees(Vector3::new(10.0, 20.0, 30.0));

        let mut assigned = a;
        assigned *= b;

        assert_abs_diff_eq!(assigned, a * b, epsilon = EPSILON);
    }

    #[test]
    fn equality_is_exact_and_component_wise() {
        let a = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        let b = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        let c = Quaternion::new(0.1, 0.2, 0.3, 0.9 + 1e-7);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn indexing_quaternion_components_works() {
        let mut quaternion = Quaternion::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(quaternion[0], 1.0);
        assert_eq!(quaternion[1], 2.0);
        assert_eq!(quaternion[2], 3.0);
        assert_eq!(quaternion[3], 4.0);

        quaternion[3] = 9.0;
        assert_eq!(quaternion.w(), 9.0);
    }

    #[test]
    #[should_panic]
    fn indexing_quaternion_out_of_bounds_panics() {
        let quaternion = Quaternion::identity();
        let _ = quaternion[4];
    }

    #[test]
    fn creating_quaternion_from_vector4_works() {
        let quaternion = Quaternion::from(Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(quaternion, Quaternion::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn formatting_quaternion_works() {
        assert_eq!(
            format!("{}", Quaternion::new(0.0, 0.5, -1.0, 1.0)),
            "(0, 0.5, -1, 1)"
        );
    }
}
