//! Matrices.

use crate::{
    angle::Angle,
    consts,
    quaternion::Quaternion,
    vector::{Vector3, Vector4},
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, IndexMut};

/// A 4x4 `f32` matrix storing its columns contiguously (column-major order).
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    columns: [Vector4; 4],
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_columns(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::unit_w(),
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_columns(
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
        )
    }

    /// Creates a matrix with the given value for all four diagonal entries and
    /// zeros elsewhere.
    #[inline]
    pub const fn from_uniform_diagonal(value: f32) -> Self {
        let mut m = Self::zeros();
        *m.columns[0].x_mut() = value;
        *m.columns[1].y_mut() = value;
        *m.columns[2].z_mut() = value;
        *m.columns[3].w_mut() = value;
        m
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
        column_4: Vector4,
    ) -> Self {
        Self {
            columns: [column_1, column_2, column_3, column_4],
        }
    }

    /// Creates an orthographic projection matrix mapping the given left-right
    /// and bottom-top ranges into -1 to 1 in x and y. The z-axis is flipped
    /// but not rescaled.
    pub fn orthographic_2d(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        let mut result = Self::identity();
        *result.columns[0].x_mut() = 2.0 / (right - left);
        *result.columns[1].y_mut() = 2.0 / (top - bottom);
        *result.columns[2].z_mut() = -1.0;
        *result.columns[3].x_mut() = -(right + left) / (right - left);
        *result.columns[3].y_mut() = -(top + bottom) / (top - bottom);
        result
    }

    /// Creates an orthographic projection matrix mapping the given view box
    /// into the cube spanning from -1 to 1 along every axis.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut result = Self::identity();
        *result.columns[0].x_mut() = 2.0 / (right - left);
        *result.columns[1].y_mut() = 2.0 / (top - bottom);
        *result.columns[2].z_mut() = -2.0 / (far - near);
        *result.columns[3].x_mut() = -(right + left) / (right - left);
        *result.columns[3].y_mut() = -(top + bottom) / (top - bottom);
        *result.columns[3].z_mut() = -(far + near) / (far - near);
        result
    }

    /// Creates a perspective projection matrix with the given vertical field
    /// of view, width-to-height aspect ratio and near and far clip distances.
    ///
    /// # Panics
    /// If the magnitude of `aspect` does not exceed machine epsilon (only
    /// checked when debug assertions are enabled).
    pub fn perspective<A: Angle>(fov: A, aspect: f32, near: f32, far: f32) -> Self {
        debug_assert!(
            aspect.abs() > consts::f32::EPSILON,
            "aspect ratio is too small"
        );
        let t = (fov.radians() * 0.5).tan();

        let mut result = Self::zeros();
        *result.columns[0].x_mut() = 1.0 / (aspect * t);
        *result.columns[1].y_mut() = 1.0 / t;
        *result.columns[2].z_mut() = -(far + near) / (far - near);
        *result.columns[2].w_mut() = -1.0;
        *result.columns[3].z_mut() = -(2.0 * far * near) / (far - near);
        result
    }

    /// Creates a homogeneous transform matrix translating by the given
    /// vector.
    pub fn translation(position: &Vector3) -> Self {
        let mut result = Self::identity();
        *result.columns[3].x_mut() = position.x();
        *result.columns[3].y_mut() = position.y();
        *result.columns[3].z_mut() = position.z();
        result
    }

    /// Creates a matrix with the given scale vector written into the x-, y-
    /// and z-slots of the last column.
    pub fn scaling(scale: &Vector3) -> Self {
        let mut result = Self::identity();
        *result.columns[3].x_mut() = scale.x();
        *result.columns[3].y_mut() = scale.y();
        *result.columns[3].z_mut() = scale.z();
        result
    }

    /// Creates a homogeneous transform matrix applying the given rotation,
    /// which is assumed to be a unit quaternion.
    pub fn rotation(rotation: &Quaternion) -> Self {
        let (x, y, z, w) = (rotation.x(), rotation.y(), rotation.z(), rotation.w());

        let qxx = x * x;
        let qyy = y * y;
        let qzz = z * z;
        let qxz = x * z;
        let qxy = x * y;
        let qyz = y * z;
        let qwx = w * x;
        let qwy = w * y;
        let qwz = w * z;

        let mut result = Self::identity();
        result.columns[0] = Vector4::new(
            1.0 - 2.0 * (qyy + qzz),
            2.0 * (qxy + qwz),
            2.0 * (qxz - qwy),
            0.0,
        );
        result.columns[1] = Vector4::new(
            2.0 * (qxy - qwz),
            1.0 - 2.0 * (qxx + qzz),
            2.0 * (qyz + qwx),
            0.0,
        );
        result.columns[2] = Vector4::new(
            2.0 * (qxz + qwy),
            2.0 * (qyz - qwx),
            1.0 - 2.0 * (qxx + qyy),
            0.0,
        );
        result
    }

    /// Returns the inverse of this matrix, computed with the closed-form
    /// adjugate/determinant method. If the matrix is not invertible, the
    /// result will be non-finite.
    pub fn inverted(&self) -> Self {
        let (adjugate, determinant) = self.adjugate_and_determinant();
        adjugate * (1.0 / determinant)
    }

    /// Returns the inverse of this matrix, or [`None`] if the magnitude of
    /// the determinant does not exceed machine epsilon.
    pub fn try_inverted(&self) -> Option<Self> {
        let (adjugate, determinant) = self.adjugate_and_determinant();
        (determinant.abs() > consts::f32::EPSILON).then(|| adjugate * (1.0 / determinant))
    }

    /// The 16 matrix elements as a flat column-major array, suitable for
    /// upload as a shader uniform.
    #[inline]
    pub fn as_flat_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// Computes the column given by the linear combination of this matrix's
    /// columns, weighted by the components of the given vector.
    #[inline]
    fn linear_combination(&self, weights: &Vector4) -> Vector4 {
        &self.columns[0] * weights.x()
            + &self.columns[1] * weights.y()
            + &self.columns[2] * weights.z()
            + &self.columns[3] * weights.w()
    }

    fn adjugate_and_determinant(&self) -> (Self, f32) {
        let m = &self.columns;

        // 2x2 sub-determinants of the lower three rows.
        let m00 = m[2].z() * m[3].w() - m[3].z() * m[2].w();
        let m01 = m[1].z() * m[3].w() - m[3].z() * m[1].w();
        let m02 = m[1].z() * m[2].w() - m[2].z() * m[1].w();

        let m03 = m[2].y() * m[3].w() - m[3].y() * m[2].w();
        let m04 = m[1].y() * m[3].w() - m[3].y() * m[1].w();
        let m05 = m[1].y() * m[2].w() - m[2].y() * m[1].w();

        let m06 = m[2].y() * m[3].z() - m[3].y() * m[2].z();
        let m07 = m[1].y() * m[3].z() - m[3].y() * m[1].z();
        let m08 = m[1].y() * m[2].z() - m[2].y() * m[1].z();

        let m09 = m[2].x() * m[3].w() - m[3].x() * m[2].w();
        let m10 = m[1].x() * m[3].w() - m[3].x() * m[1].w();
        let m11 = m[1].x() * m[2].w() - m[2].x() * m[1].w();

        let m12 = m[2].x() * m[3].z() - m[3].x() * m[2].z();
        let m13 = m[1].x() * m[3].z() - m[3].x() * m[1].z();
        let m14 = m[1].x() * m[2].z() - m[2].x() * m[1].z();

        let m15 = m[2].x() * m[3].y() - m[3].x() * m[2].y();
        let m16 = m[1].x() * m[3].y() - m[3].x() * m[1].y();
        let m17 = m[1].x() * m[2].y() - m[2].x() * m[1].y();

        let v0 = Vector4::new(m00, m00, m01, m02);
        let v1 = Vector4::new(m03, m03, m04, m05);
        let v2 = Vector4::new(m06, m06, m07, m08);
        let v3 = Vector4::new(m09, m09, m10, m11);
        let v4 = Vector4::new(m12, m12, m13, m14);
        let v5 = Vector4::new(m15, m15, m16, m17);

        let s0 = Vector4::new(m[1].x(), m[0].x(), m[0].x(), m[0].x());
        let s1 = Vector4::new(m[1].y(), m[0].y(), m[0].y(), m[0].y());
        let s2 = Vector4::new(m[1].z(), m[0].z(), m[0].z(), m[0].z());
        let s3 = Vector4::new(m[1].w(), m[0].w(), m[0].w(), m[0].w());

        let a0 = s1 * v0 - s2 * v1 + s3 * v2;
        let a1 = s0 * v0 - s2 * v3 + s3 * v4;
        let a2 = s0 * v1 - s1 * v3 + s3 * v5;
        let a3 = s0 * v2 - s1 * v4 + s2 * v5;

        let sign_a = Vector4::new(1.0, -1.0, 1.0, -1.0);
        let sign_b = Vector4::new(-1.0, 1.0, -1.0, 1.0);

        let adjugate = Self::from_columns(a0 * sign_a, a1 * sign_b, a2 * sign_a, a3 * sign_b);

        let row = Vector4::new(
            adjugate.columns[0].x(),
            adjugate.columns[1].x(),
            adjugate.columns[2].x(),
            adjugate.columns[3].x(),
        );
        let determinant = m[0].dot(&row);

        (adjugate, determinant)
    }
}

impl Default for Matrix4 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

// Column-major composition: each result column is the linear combination of
// the left operand's columns weighted by the corresponding right column.
impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_columns(
        a.linear_combination(&b.columns[0]),
        a.linear_combination(&b.columns[1]),
        a.linear_combination(&b.columns[2]),
        a.linear_combination(&b.columns[3]),
    )
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    a.linear_combination(b)
});

impl_binop!(Mul, mul, Matrix4, f32, Matrix4, |a, b| {
    Matrix4::from_columns(
        &a.columns[0] * b,
        &a.columns[1] * b,
        &a.columns[2] * b,
        &a.columns[3] * b,
    )
});

impl_binop!(Mul, mul, f32, Matrix4, Matrix4, |a, b| { b * *a });

impl_binop_assign!(MulAssign, mul_assign, Matrix4, Matrix4, |a, b| {
    *a = *a * *b;
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, f32, |a, b| {
    *a = *a * *b;
});

impl Index<usize> for Matrix4 {
    type Output = Vector4;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.columns[idx]
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.columns[idx]
    }
}

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.columns[0].abs_diff_eq(&b.columns[0], epsilon)
        && a.columns[1].abs_diff_eq(&b.columns[1], epsilon)
        && a.columns[2].abs_diff_eq(&b.columns[2], epsilon)
        && a.columns[3].abs_diff_eq(&b.columns[3], epsilon)
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.columns[0].relative_eq(&b.columns[0], epsilon, max_relative)
        && a.columns[1].relative_eq(&b.columns[1], epsilon, max_relative)
        && a.columns[2].relative_eq(&b.columns[2], epsilon, max_relative)
        && a.columns[3].relative_eq(&b.columns[3], epsilon, max_relative)
});

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::angle::Degrees;
    use approx::assert_abs_diff_eq;

    // Test constants
    const EPSILON: f32 = 1e-6;

    fn example_matrix() -> Matrix4 {
        Matrix4::from_columns(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(5.0, 6.0, 7.0, 8.0),
            Vector4::new(9.0, 10.0, 11.0, 12.0),
            Vector4::new(13.0, 14.0, 15.0, 16.0),
        )
    }

    fn example_transform() -> Matrix4 {
        Matrix4::translation(&Vector3::new(1.0, -2.0, 3.0))
            * Matrix4::rotation(&Quaternion::from_euler_degrees(Vector3::new(
                30.0, 45.0, 60.0,
            )))
            * Matrix4::from_uniform_diagonal(2.0)
    }

    #[test]
    fn default_matrix_is_identity() {
        assert_eq!(Matrix4::default(), Matrix4::identity());
    }

    #[test]
    fn creating_identity_matrix_works() {
        let identity = Matrix4::identity();
        for i in 0..4 {
            for j in 0..4 {
                if i == j {
                    assert_eq!(identity[j][i], 1.0);
                } else {
                    assert_eq!(identity[j][i], 0.0);
                }
            }
        }
    }

    #[test]
    fn creating_matrix_from_uniform_diagonal_works() {
        let matrix = Matrix4::from_uniform_diagonal(2.5);
        for i in 0..4 {
            for j in 0..4 {
                if i == j {
                    assert_eq!(matrix[j][i], 2.5);
                } else {
                    assert_eq!(matrix[j][i], 0.0);
                }
            }
        }
    }

    #[test]
    fn multiplying_with_identity_leaves_matrix_unchanged() {
        let matrix = example_matrix();
        assert_abs_diff_eq!(Matrix4::identity() * matrix, matrix, epsilon = EPSILON);
        assert_abs_diff_eq!(matrix * Matrix4::identity(), matrix, epsilon = EPSILON);
    }

    #[test]
    fn matrix_product_combines_left_columns() {
        let left = example_matrix();
        let mut right = Matrix4::zeros();
        right[0] = Vector4::new(1.0, 2.0, 0.0, 0.0);

        let product = left * right;

        // First result column is left[0] + 2 * left[1].
        assert_abs_diff_eq!(
            product[0],
            Vector4::new(11.0, 14.0, 17.0, 20.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(product[1], Vector4::zeros(), epsilon = EPSILON);
    }

    #[test]
    fn multiplying_matrix_by_scalar_scales_every_column() {
        let matrix = example_matrix();
        let scaled = matrix * 2.0;

        for j in 0..4 {
            assert_abs_diff_eq!(scaled[j], matrix[j] * 2.0, epsilon = EPSILON);
        }

        assert_abs_diff_eq!(2.0 * matrix, scaled, epsilon = EPSILON);
    }

    #[test]
    fn multiply_assign_matches_multiplication() {
        let a = example_matrix();
        let b = Matrix4::translation(&Vector3::new(1.0, 2.0, 3.0));

        let mut assigned = a;
        assigned *= b;
        assert_abs_diff_eq!(assigned, a * b, epsilon = EPSILON);

        let mut assigned = a;
        assigned *= 3.0;
        assert_abs_diff_eq!(assigned, a * 3.0, epsilon = EPSILON);
    }

    #[test]
    fn translation_moves_homogeneous_point() {
        let translation = Matrix4::translation(&Vector3::new(1.0, 0.0, 0.0));
        let point = Vector4::new(0.0, 0.0, 0.0, 1.0);

        assert_abs_diff_eq!(
            translation * point,
            Vector4::new(1.0, 0.0, 0.0, 1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn translation_does_not_move_homogeneous_direction() {
        let translation = Matrix4::translation(&Vector3::new(1.0, 2.0, 3.0));
        let direction = Vector4::new(0.0, 1.0, 0.0, 0.0);

        assert_abs_diff_eq!(translation * direction, direction, epsilon = EPSILON);
    }

    #[test]
    fn scaling_writes_vector_into_last_column() {
        let scaling = Matrix4::scaling(&Vector3::new(2.0, 3.0, 4.0));

        assert_eq!(scaling[3], Vector4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(scaling[0], Vector4::unit_x());
        assert_eq!(scaling[1], Vector4::unit_y());
        assert_eq!(scaling[2], Vector4::unit_z());
    }

    #[test]
    fn rotation_about_z_maps_x_axis_to_y_axis() {
        let rotation =
            Matrix4::rotation(&Quaternion::from_euler_degrees(Vector3::new(0.0, 0.0, 90.0)));

        assert_abs_diff_eq!(
            rotation * Vector4::unit_x(),
            Vector4::unit_y(),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            rotation * Vector4::unit_y(),
            -Vector4::unit_x(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotation_of_identity_quaternion_is_identity() {
        assert_abs_diff_eq!(
            Matrix4::rotation(&Quaternion::identity()),
            Matrix4::identity(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotation_preserves_homogeneous_w() {
        let rotation = Matrix4::rotation(&Quaternion::from_euler_degrees(Vector3::new(
            10.0, 20.0, 30.0,
        )));
        let point = Vector4::new(1.0, 2.0, 3.0, 1.0);

        assert_abs_diff_eq!((rotation * point).w(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn constructing_perspective_projection_works() {
        let perspective = Matrix4::perspective(Degrees(90.0), 1.0, 0.1, 100.0);

        // tan(45 degrees) = 1
        assert_abs_diff_eq!(perspective[0][0], 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(perspective[1][1], 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(perspective[2][2], -100.1 / 99.9, epsilon = EPSILON);
        assert_abs_diff_eq!(perspective[2][3], -1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(perspective[3][2], -20.0 / 99.9, epsilon = 1e-4);
        assert_eq!(perspective[3][3], 0.0);
        assert_eq!(perspective[0][1], 0.0);
        assert_eq!(perspective[1][0], 0.0);
    }

    #[test]
    fn perspective_aspect_ratio_scales_x() {
        let perspective = Matrix4::perspective(Degrees(90.0), 2.0, 0.1, 100.0);
        assert_abs_diff_eq!(perspective[0][0], 0.5, epsilon = EPSILON);
        assert_abs_diff_eq!(perspective[1][1], 1.0, epsilon = EPSILON);
    }

    #[test]
    #[should_panic]
    fn constructing_perspective_projection_with_zero_aspect_ratio_panics() {
        Matrix4::perspective(Degrees(45.0), 0.0, 0.1, 100.0);
    }

    #[test]
    fn constructing_orthographic_2d_projection_works() {
        let orthographic = Matrix4::orthographic_2d(0.0, 800.0, 0.0, 600.0);

        assert_abs_diff_eq!(orthographic[0][0], 2.0 / 800.0, epsilon = EPSILON);
        assert_abs_diff_eq!(orthographic[1][1], 2.0 / 600.0, epsilon = EPSILON);
        assert_abs_diff_eq!(orthographic[2][2], -1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(orthographic[3][0], -1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(orthographic[3][1], -1.0, epsilon = EPSILON);
        assert_eq!(orthographic[3][3], 1.0);
    }

    #[test]
    fn constructing_orthographic_projection_works() {
        let orthographic = Matrix4::orthographic(-10.0, 10.0, -5.0, 5.0, 0.1, 100.0);

        assert_abs_diff_eq!(orthographic[0][0], 0.1, epsilon = EPSILON);
        assert_abs_diff_eq!(orthographic[1][1], 0.2, epsilon = EPSILON);
        assert_abs_diff_eq!(orthographic[2][2], -2.0 / 99.9, epsilon = EPSILON);
        assert_abs_diff_eq!(orthographic[3][0], 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(orthographic[3][1], 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(orthographic[3][2], -100.1 / 99.9, epsilon = EPSILON);
    }

    #[test]
    fn orthographic_projection_maps_view_box_corners_to_unit_cube() {
        let orthographic = Matrix4::orthographic(-2.0, 4.0, -1.0, 3.0, 0.5, 10.5);

        let lower = orthographic * Vector4::new(-2.0, -1.0, -0.5, 1.0);
        assert_abs_diff_eq!(lower, Vector4::new(-1.0, -1.0, -1.0, 1.0), epsilon = EPSILON);

        let upper = orthographic * Vector4::new(4.0, 3.0, -10.5, 1.0);
        assert_abs_diff_eq!(upper, Vector4::new(1.0, 1.0, 1.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn inverting_identity_gives_identity() {
        assert_abs_diff_eq!(
            Matrix4::identity().inverted(),
            Matrix4::identity(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn inverse_composed_with_original_gives_identity() {
        let matrix = example_transform();

        assert_abs_diff_eq!(
            matrix.inverted() * matrix,
            Matrix4::identity(),
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            matrix * matrix.inverted(),
            Matrix4::identity(),
            epsilon = 1e-4
        );
    }

    #[test]
    fn inverting_translation_negates_it() {
        let translation = Matrix4::translation(&Vector3::new(1.0, -2.0, 3.0));

        assert_abs_diff_eq!(
            translation.inverted(),
            Matrix4::translation(&Vector3::new(-1.0, 2.0, -3.0)),
            epsilon = EPSILON
        );
    }

    #[test]
    fn inverting_does_not_modify_receiver() {
        let matrix = example_transform();
        let copy = matrix;
        let _ = matrix.inverted();
        assert_eq!(matrix, copy);
    }

    #[test]
    fn try_inverting_invertible_matrix_works() {
        let matrix = example_transform();
        let inverted = matrix.try_inverted().unwrap();

        assert_abs_diff_eq!(inverted * matrix, Matrix4::identity(), epsilon = 1e-4);
    }

    #[test]
    fn try_inverting_singular_matrix_gives_none() {
        assert!(Matrix4::zeros().try_inverted().is_none());

        // Two identical columns make the matrix singular.
        let singular = Matrix4::from_columns(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::unit_z(),
            Vector4::unit_w(),
        );
        assert!(singular.try_inverted().is_none());
    }

    #[test]
    fn indexing_matrix_yields_columns() {
        let mut matrix = example_matrix();

        assert_eq!(matrix[0], Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(matrix[3], Vector4::new(13.0, 14.0, 15.0, 16.0));
        assert_eq!(matrix[1][2], 7.0);

        matrix[2] = Vector4::zeros();
        assert_eq!(matrix[2], Vector4::zeros());
    }

    #[test]
    #[should_panic]
    fn indexing_matrix_out_of_bounds_panics() {
        let matrix = Matrix4::identity();
        let _ = matrix[4];
    }

    #[test]
    fn flat_array_is_column_major() {
        let matrix = Matrix4::translation(&Vector3::new(1.0, 2.0, 3.0));
        let flat = matrix.as_flat_array();

        assert_eq!(flat[0], 1.0);
        assert_eq!(flat[5], 1.0);
        assert_eq!(flat[10], 1.0);
        assert_eq!(&flat[12..16], &[1.0, 2.0, 3.0, 1.0]);
    }
}
