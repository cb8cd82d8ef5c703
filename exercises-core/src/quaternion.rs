//! Quaternion value type
//!
//! A quaternion q = a + bi + cj + dk where `a` is the scalar (real) part and
//! `(b, c, d)` are the coefficients of the imaginary units. Values are
//! immutable; every operation produces a new quaternion.
//!
//! Multiplication is the Hamilton product and does not commute:
//!
//! ```text
//! ij = k    ji = -k
//! jk = i    kj = -i
//! ki = j    ik = -j
//! ```

use core::fmt::{self, Write};
use core::ops::{Add, Mul, Neg};

use bytemuck::{Pod, Zeroable};

use crate::error::{ExerciseError, Result};

/// Quaternion with f64 coefficients
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quaternion {
    /// 0 + 0i + 0j + 0k
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Real unit
    pub const ONE: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Imaginary unit i
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Imaginary unit j
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Imaginary unit k
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion holding the given coefficients exactly
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Create a quaternion, rejecting NaN and infinite coefficients
    pub fn try_new(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        if [a, b, c, d].iter().all(|v| v.is_finite()) {
            Ok(Self::new(a, b, c, d))
        } else {
            Err(ExerciseError::NonFiniteCoefficient)
        }
    }

    /// Create a quaternion from `[a, b, c, d]`
    pub const fn from_array(coefficients: [f64; 4]) -> Self {
        let [a, b, c, d] = coefficients;
        Self::new(a, b, c, d)
    }

    /// Scalar part
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// i coefficient
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// j coefficient
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// k coefficient
    pub const fn d(&self) -> f64 {
        self.d
    }

    /// Coefficients in `(a, b, c, d)` order
    pub const fn coefficients(&self) -> (f64, f64, f64, f64) {
        (self.a, self.b, self.c, self.d)
    }

    /// Borrow the coefficients as an array without copying
    pub fn as_array(&self) -> &[f64; 4] {
        bytemuck::cast_ref(self)
    }

    /// View a slice of quaternions as a flat slice of coefficients
    pub fn flatten(quaternions: &[Quaternion]) -> &[f64] {
        bytemuck::cast_slice(quaternions)
    }

    /// Conjugate: a - bi - cj - dk
    pub fn conjugate(&self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }

    /// Squared norm a² + b² + c² + d²
    pub fn norm_squared(&self) -> f64 {
        self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.a + other.a,
            self.b + other.b,
            self.c + other.c,
            self.d + other.d,
        )
    }
}

impl Add<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn add(self, other: &Quaternion) -> Quaternion {
        *self + *other
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.a * other.a - self.b * other.b - self.c * other.c - self.d * other.d,
            self.a * other.b + self.b * other.a + self.c * other.d - self.d * other.c,
            self.a * other.c - self.b * other.d + self.c * other.a + self.d * other.b,
            self.a * other.d + self.b * other.c - self.c * other.b + self.d * other.a,
        )
    }
}

impl Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn mul(self, other: &Quaternion) -> Quaternion {
        *self * *other
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(coefficients: [f64; 4]) -> Self {
        Self::from_array(coefficients)
    }
}

impl From<Quaternion> for (f64, f64, f64, f64) {
    fn from(q: Quaternion) -> Self {
        q.coefficients()
    }
}

/// Renders zero parts as nothing, unit magnitudes without a numeral, and the
/// all-zero quaternion as `0`. Numbers use the `f64` `Display` form, so
/// integral values print without a decimal point.
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = false;

        if self.a != 0.0 {
            write!(f, "{}", self.a)?;
            written = true;
        }

        for (coefficient, unit) in [(self.b, 'i'), (self.c, 'j'), (self.d, 'k')] {
            if coefficient == 0.0 {
                continue;
            }
            if coefficient > 0.0 && written {
                f.write_char('+')?;
            }
            if coefficient == -1.0 {
                f.write_char('-')?;
            } else if coefficient != 1.0 {
                write!(f, "{coefficient}")?;
            }
            f.write_char(unit)?;
            written = true;
        }

        if !written {
            f.write_char('0')?;
        }
        Ok(())
    }
}
