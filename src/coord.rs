//! This module contains a struct, [`Coord`], that models a point with three components and supports
//! limited math with scalars and other points. Every arithmetic operation on a
//! [`ColorModel`](crate::color::ColorModel) is carried out here: the color is projected onto a
//! `Coord` with hue on the x-axis, saturation on the y-axis, and luminosity on the z-axis, the math
//! is done, and the result is brought back.

use std::ops::{Add, Div, Mul, Sub};

use float_cmp::ApproxEq;
use num::{Num, NumCast};
use serde_derive::{Deserialize, Serialize};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. Supports the component-wise arithmetic that colors need.
///
/// # Examples
/// ```
/// # use colorwheel::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 0.};
/// // addition and subtraction work component by component
/// let sum = point_1 + point_2;  // the point (8, 10, 7)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 7.});
/// // so does the product of two points
/// let prod = point_1.component_mul(&point_2); // the point (7, 16, 0)
/// assert_eq!(prod, Coord{x: 7., y: 16., z: 0.});
/// // division never fails: a zero divisor gives a zero component
/// let quot = point_1.guarded_div(&point_2);
/// assert_eq!(quot.z, 0.);
/// // scaling works with any primitive number on the right
/// assert_eq!(point_1 * 2u8, Coord{x: 2., y: 16., z: 14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// For any Coords c1, c2, and c3, c1 + c2 = c3 implies c3 - c2 = c1, down to floating point error.
impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// scalar multiplication: (a, b, c) * s = (sa, sb, sc)
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        // every primitive numeric type casts to f64
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

// scalar division, with the same zero policy as `guarded_div`
impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        self.guarded_div(&Coord { x: r, y: r, z: r })
    }
}

impl Coord {
    /// The component-wise (Hadamard) product of two points.
    pub fn component_mul(&self, other: &Coord) -> Coord {
        Coord {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }

    /// The component-wise quotient of two points. Any component whose divisor is zero comes out as
    /// zero instead of an infinity or NaN.
    /// # Example
    /// ```
    /// # use colorwheel::coord::Coord;
    /// let num = Coord{x: 3., y: 1., z: 1.};
    /// let den = Coord{x: 0., y: 2., z: 4.};
    /// assert_eq!(num.guarded_div(&den), Coord{x: 0., y: 0.5, z: 0.25});
    /// ```
    pub fn guarded_div(&self, other: &Coord) -> Coord {
        fn div(n: f64, d: f64) -> f64 {
            if d == 0.0 {
                0.0
            } else {
                n / d
            }
        }
        Coord {
            x: div(self.x, other.x),
            y: div(self.y, other.y),
            z: div(self.z, other.z),
        }
    }

    /// Linear interpolation toward `other`: `self + (other - self) * amount`. An amount of 0 gives
    /// back `self`, 1 gives `other`, and anything outside of that range extrapolates along the same
    /// line.
    /// # Example
    /// ```
    /// # use colorwheel::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.lerp(&point2, 0.25);
    /// assert!((mid.x - 0.4).abs() <= 1e-10);
    /// assert!((mid.y - 0.2).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn lerp(&self, other: &Coord, amount: f64) -> Coord {
        *self + (*other - *self) * amount
    }

    /// Whether every component of the two points is within `epsilon` or a couple of ulps of the
    /// other's.
    pub fn approx_equal(&self, other: &Coord, epsilon: f64) -> bool {
        self.x.approx_eq(&other.x, epsilon, 2)
            && self.y.approx_eq(&other.y, epsilon, 2)
            && self.z.approx_eq(&other.z, epsilon, 2)
    }
}
