//! Vectors.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::ops::{Index, IndexMut, Mul};

/// A 2-dimensional `f32` vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 2]", from = "[f32; 2]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    x: f32,
    y: f32,
}

/// A 3-dimensional `f32` vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 3]", from = "[f32; 3]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

/// A 4-dimensional `f32` vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 4]", from = "[f32; 4]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

/// A 2-dimensional `i32` vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[i32; 2]", from = "[i32; 2]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct IVector2 {
    x: i32,
    y: i32,
}

/// A 3-dimensional `i32` vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[i32; 3]", from = "[i32; 3]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct IVector3 {
    x: i32,
    y: i32,
    z: i32,
}

/// A 4-dimensional `i32` vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[i32; 4]", from = "[i32; 4]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct IVector4 {
    x: i32,
    y: i32,
    z: i32,
    w: i32,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The unit vector pointing along the positive x-axis.
    #[inline]
    pub const fn right() -> Self {
        Self::unit_x()
    }

    /// The unit vector pointing along the negative x-axis.
    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0)
    }

    /// The unit vector pointing along the positive y-axis.
    #[inline]
    pub const fn up() -> Self {
        Self::unit_y()
    }

    /// The unit vector pointing along the negative y-axis.
    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0)
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

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Computes the normalized version of the vector.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y))
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x, vector.y]
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Add, add, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x + b, a.y + b)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x - b.x, a.y - b.y)
});

impl_binop!(Sub, sub, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x - b, a.y - b)
});

impl_binop!(Mul, mul, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x * b.x, a.y * b.y)
});

impl_binop!(Mul, mul, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x * b, a.y * b)
});

impl_binop!(Mul, mul, f32, Vector2, Vector2, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x / b.x, a.y / b.y)
});

impl_binop!(Div, div, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x / b, a.y / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.x += b.x;
    a.y += b.y;
});

impl_binop_assign!(AddAssign, add_assign, Vector2, f32, |a, b| {
    a.x += b;
    a.y += b;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, f32, |a, b| {
    a.x -= b;
    a.y -= b;
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, Vector2, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, f32, |a, b| {
    a.x *= b;
    a.y *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector2, Vector2, |a, b| {
    a.x /= b.x;
    a.y /= b.y;
});

impl_binop_assign!(DivAssign, div_assign, Vector2, f32, |a, b| {
    a.x /= b;
    a.y /= b;
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::new(-val.x, -val.y)
});

impl Index<usize> for Vector2 {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector2, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon) && a.y.abs_diff_eq(&b.y, epsilon)
});

impl_relative_eq!(Vector2, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative) && a.y.relative_eq(&b.y, epsilon, max_relative)
});

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The unit vector pointing along the positive x-axis.
    #[inline]
    pub const fn right() -> Self {
        Self::unit_x()
    }

    /// The unit vector pointing along the negative x-axis.
    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    /// The unit vector pointing along the positive y-axis.
    #[inline]
    pub const fn up() -> Self {
        Self::unit_y()
    }

    /// The unit vector pointing along the negative y-axis.
    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    /// The unit vector pointing along the positive z-axis.
    #[inline]
    pub const fn forward() -> Self {
        Self::unit_z()
    }

    /// The unit vector pointing along the negative z-axis.
    #[inline]
    pub const fn back() -> Self {
        Self::new(0.0, 0.0, -1.0)
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

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Computes the normalized version of the vector.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Add, add, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x + b, a.y + b, a.z + b)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Sub, sub, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x - b, a.y - b, a.z - b)
});

impl_binop!(Mul, mul, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x * b.x, a.y * b.y, a.z * b.z)
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x / b.x, a.y / b.y, a.z / b.z)
});

impl_binop!(Div, div, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x / b, a.y / b, a.z / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(AddAssign, add_assign, Vector3, f32, |a, b| {
    a.x += b;
    a.y += b;
    a.z += b;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, f32, |a, b| {
    a.x -= b;
    a.y -= b;
    a.z -= b;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, Vector3, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
    a.z *= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector3, Vector3, |a, b| {
    a.x /= b.x;
    a.y /= b.y;
    a.z /= b.z;
});

impl_binop_assign!(DivAssign, div_assign, Vector3, f32, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
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

    /// The 3D vector containing the x-, y- and z-components of this vector.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Add, add, Vector4, f32, Vector4, |a, b| {
    Vector4::new(a.x + b, a.y + b, a.z + b, a.w + b)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Sub, sub, Vector4, f32, Vector4, |a, b| {
    Vector4::new(a.x - b, a.y - b, a.z - b, a.w - b)
});

impl_binop!(Mul, mul, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x * b.x, a.y * b.y, a.z * b.z, a.w * b.w)
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, b| {
    Vector4::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_binop!(Mul, mul, f32, Vector4, Vector4, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x / b.x, a.y / b.y, a.z / b.z, a.w / b.w)
});

impl_binop!(Div, div, Vector4, f32, Vector4, |a, b| {
    Vector4::new(a.x / b, a.y / b, a.z / b, a.w / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector4, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
    a.w += b.w;
});

impl_binop_assign!(AddAssign, add_assign, Vector4, f32, |a, b| {
    a.x += b;
    a.y += b;
    a.z += b;
    a.w += b;
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector4, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
    a.w -= b.w;
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, f32, |a, b| {
    a.x -= b;
    a.y -= b;
    a.z -= b;
    a.w -= b;
});

impl_binop_assign!(MulAssign, mul_assign, Vector4, Vector4, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
    a.z *= b.z;
    a.w *= b.w;
});

impl_binop_assign!(MulAssign, mul_assign, Vector4, f32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
    a.w *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector4, Vector4, |a, b| {
    a.x /= b.x;
    a.y /= b.y;
    a.z /= b.z;
    a.w /= b.w;
});

impl_binop_assign!(DivAssign, div_assign, Vector4, f32, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
    a.w /= b;
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl Index<usize> for Vector4 {
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

impl IndexMut<usize> for Vector4 {
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

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl IVector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: i32) -> Self {
        Self::new(value, value)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut i32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut i32 {
        &mut self.y
    }

    /// Adds 1 to every component and returns the updated vector.
    #[inline]
    pub fn increment(&mut self) -> Self {
        self.x += 1;
        self.y += 1;
        *self
    }

    /// Adds 1 to every component and returns the vector held before the
    /// mutation.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// Subtracts 1 from every component and returns the updated vector.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        self.x -= 1;
        self.y -= 1;
        *self
    }

    /// Subtracts 1 from every component and returns the vector held before
    /// the mutation.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }
}

impl From<[i32; 2]> for IVector2 {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<IVector2> for [i32; 2] {
    #[inline]
    fn from(vector: IVector2) -> Self {
        [vector.x, vector.y]
    }
}

impl_binop!(Add, add, IVector2, IVector2, IVector2, |a, b| {
    IVector2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Add, add, IVector2, i32, IVector2, |a, b| {
    IVector2::new(a.x + b, a.y + b)
});

impl_binop!(Sub, sub, IVector2, IVector2, IVector2, |a, b| {
    IVector2::new(a.x - b.x, a.y - b.y)
});

impl_binop!(Sub, sub, IVector2, i32, IVector2, |a, b| {
    IVector2::new(a.x - b, a.y - b)
});

impl_binop!(Mul, mul, IVector2, IVector2, IVector2, |a, b| {
    IVector2::new(a.x * b.x, a.y * b.y)
});

impl_binop!(Mul, mul, IVector2, i32, IVector2, |a, b| {
    IVector2::new(a.x * b, a.y * b)
});

impl_binop!(Mul, mul, i32, IVector2, IVector2, |a, b| { b.mul(*a) });

impl_binop!(Div, div, IVector2, IVector2, IVector2, |a, b| {
    IVector2::new(a.x / b.x, a.y / b.y)
});

impl_binop!(Div, div, IVector2, i32, IVector2, |a, b| {
    IVector2::new(a.x / b, a.y / b)
});

impl_binop_assign!(AddAssign, add_assign, IVector2, IVector2, |a, b| {
    a.x += b.x;
    a.y += b.y;
});

impl_binop_assign!(AddAssign, add_assign, IVector2, i32, |a, b| {
    a.x += b;
    a.y += b;
});

impl_binop_assign!(SubAssign, sub_assign, IVector2, IVector2, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
});

impl_binop_assign!(SubAssign, sub_assign, IVector2, i32, |a, b| {
    a.x -= b;
    a.y -= b;
});

impl_binop_assign!(MulAssign, mul_assign, IVector2, IVector2, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
});

impl_binop_assign!(MulAssign, mul_assign, IVector2, i32, |a, b| {
    a.x *= b;
    a.y *= b;
});

impl_binop_assign!(DivAssign, div_assign, IVector2, IVector2, |a, b| {
    a.x /= b.x;
    a.y /= b.y;
});

impl_binop_assign!(DivAssign, div_assign, IVector2, i32, |a, b| {
    a.x /= b;
    a.y /= b;
});

impl_unary_op!(Neg, neg, IVector2, IVector2, |val| {
    IVector2::new(-val.x, -val.y)
});

impl Index<usize> for IVector2 {
    type Output = i32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for IVector2 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl fmt::Display for IVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl IVector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> i32 {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut i32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut i32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut i32 {
        &mut self.z
    }

    /// Adds 1 to every component and returns the updated vector.
    #[inline]
    pub fn increment(&mut self) -> Self {
        self.x += 1;
        self.y += 1;
        self.z += 1;
        *self
    }

    /// Adds 1 to every component and returns the vector held before the
    /// mutation.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// Subtracts 1 from every component and returns the updated vector.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        self.x -= 1;
        self.y -= 1;
        self.z -= 1;
        *self
    }

    /// Subtracts 1 from every component and returns the vector held before
    /// the mutation.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }
}

impl From<[i32; 3]> for IVector3 {
    #[inline]
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<IVector3> for [i32; 3] {
    #[inline]
    fn from(vector: IVector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_binop!(Add, add, IVector3, IVector3, IVector3, |a, b| {
    IVector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Add, add, IVector3, i32, IVector3, |a, b| {
    IVector3::new(a.x + b, a.y + b, a.z + b)
});

impl_binop!(Sub, sub, IVector3, IVector3, IVector3, |a, b| {
    IVector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Sub, sub, IVector3, i32, IVector3, |a, b| {
    IVector3::new(a.x - b, a.y - b, a.z - b)
});

impl_binop!(Mul, mul, IVector3, IVector3, IVector3, |a, b| {
    IVector3::new(a.x * b.x, a.y * b.y, a.z * b.z)
});

impl_binop!(Mul, mul, IVector3, i32, IVector3, |a, b| {
    IVector3::new(a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, i32, IVector3, IVector3, |a, b| { b.mul(*a) });

impl_binop!(Div, div, IVector3, IVector3, IVector3, |a, b| {
    IVector3::new(a.x / b.x, a.y / b.y, a.z / b.z)
});

impl_binop!(Div, div, IVector3, i32, IVector3, |a, b| {
    IVector3::new(a.x / b, a.y / b, a.z / b)
});

impl_binop_assign!(AddAssign, add_assign, IVector3, IVector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(AddAssign, add_assign, IVector3, i32, |a, b| {
    a.x += b;
    a.y += b;
    a.z += b;
});

impl_binop_assign!(SubAssign, sub_assign, IVector3, IVector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(SubAssign, sub_assign, IVector3, i32, |a, b| {
    a.x -= b;
    a.y -= b;
    a.z -= b;
});

impl_binop_assign!(MulAssign, mul_assign, IVector3, IVector3, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
    a.z *= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, IVector3, i32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_binop_assign!(DivAssign, div_assign, IVector3, IVector3, |a, b| {
    a.x /= b.x;
    a.y /= b.y;
    a.z /= b.z;
});

impl_binop_assign!(DivAssign, div_assign, IVector3, i32, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
});

impl_unary_op!(Neg, neg, IVector3, IVector3, |val| {
    IVector3::new(-val.x, -val.y, -val.z)
});

impl Index<usize> for IVector3 {
    type Output = i32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for IVector3 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl fmt::Display for IVector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl IVector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> i32 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> i32 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut i32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut i32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut i32 {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut i32 {
        &mut self.w
    }

    /// Adds 1 to every component and returns the updated vector.
    #[inline]
    pub fn increment(&mut self) -> Self {
        self.x += 1;
        self.y += 1;
        self.z += 1;
        self.w += 1;
        *self
    }

    /// Adds 1 to every component and returns the vector held before the
    /// mutation.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// Subtracts 1 from every component and returns the updated vector.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        self.x -= 1;
        self.y -= 1;
        self.z -= 1;
        self.w -= 1;
        *self
    }

    /// Subtracts 1 from every component and returns the vector held before
    /// the mutation.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }
}

impl From<[i32; 4]> for IVector4 {
    #[inline]
    fn from([x, y, z, w]: [i32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<IVector4> for [i32; 4] {
    #[inline]
    fn from(vector: IVector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl_binop!(Add, add, IVector4, IVector4, IVector4, |a, b| {
    IVector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Add, add, IVector4, i32, IVector4, |a, b| {
    IVector4::new(a.x + b, a.y + b, a.z + b, a.w + b)
});

impl_binop!(Sub, sub, IVector4, IVector4, IVector4, |a, b| {
    IVector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Sub, sub, IVector4, i32, IVector4, |a, b| {
    IVector4::new(a.x - b, a.y - b, a.z - b, a.w - b)
});

impl_binop!(Mul, mul, IVector4, IVector4, IVector4, |a, b| {
    IVector4::new(a.x * b.x, a.y * b.y, a.z * b.z, a.w * b.w)
});

impl_binop!(Mul, mul, IVector4, i32, IVector4, |a, b| {
    IVector4::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_binop!(Mul, mul, i32, IVector4, IVector4, |a, b| { b.mul(*a) });

impl_binop!(Div, div, IVector4, IVector4, IVector4, |a, b| {
    IVector4::new(a.x / b.x, a.y / b.y, a.z / b.z, a.w / b.w)
});

impl_binop!(Div, div, IVector4, i32, IVector4, |a, b| {
    IVector4::new(a.x / b, a.y / b, a.z / b, a.w / b)
});

impl_binop_assign!(AddAssign, add_assign, IVector4, IVector4, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
    a.w += b.w;
});

impl_binop_assign!(AddAssign, add_assign, IVector4, i32, |a, b| {
    a.x += b;
    a.y += b;
    a.z += b;
    a.w += b;
});

impl_binop_assign!(SubAssign, sub_assign, IVector4, IVector4, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
    a.w -= b.w;
});

impl_binop_assign!(SubAssign, sub_assign, IVector4, i32, |a, b| {
    a.x -= b;
    a.y -= b;
    a.z -= b;
    a.w -= b;
});

impl_binop_assign!(MulAssign, mul_assign, IVector4, IVector4, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
    a.z *= b.z;
    a.w *= b.w;
});

impl_binop_assign!(MulAssign, mul_assign, IVector4, i32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
    a.w *= b;
});

impl_binop_assign!(DivAssign, div_assign, IVector4, IVector4, |a, b| {
    a.x /= b.x;
    a.y /= b.y;
    a.z /= b.z;
    a.w /= b.w;
});

impl_binop_assign!(DivAssign, div_assign, IVector4, i32, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
    a.w /= b;
});

impl_unary_op!(Neg, neg, IVector4, IVector4, |val| {
    IVector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl Index<usize> for IVector4 {
    type Output = i32;

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

impl IndexMut<usize> for IVector4 {
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

impl fmt::Display for IVector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
