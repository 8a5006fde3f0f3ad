//! Unit newtypes for the quantities shown in the demo.
//!
//! Everything on screen is normalized: voltage, current and the three
//! powers are per-unit values on the unit circle, angles are radians
//! (degrees only for display), and the waveform time axis is in
//! milliseconds. Wrapping these in `#[repr(transparent)]` newtypes keeps
//! per-unit magnitudes, angles and times from being mixed up, at zero
//! runtime cost.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Macro to implement common arithmetic operations for unit types
macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Mul<$type> for f64 {
            type Output = $type;
            fn mul(self, rhs: $type) -> Self::Output {
                <$type>::new(self * rhs.0)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Div<$type> for $type {
            type Output = f64;
            fn div(self, rhs: $type) -> Self::Output {
                self.0 / rhs.0
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.4} {}", self.0, $unit_name)
            }
        }

        impl $type {
            /// Create a new value
            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Get the raw numeric value
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }

            /// Absolute value
            #[inline]
            pub fn abs(self) -> Self {
                Self(self.0.abs())
            }

            /// Check if value is finite
            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }

            /// Minimum of two values
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            /// Maximum of two values
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }
        }
    };
}

/// Normalized per-unit magnitude.
///
/// The quadrant plot works on the unit circle, so voltage RMS, current
/// RMS and the three power quantities are all expressed in per-unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PerUnit(pub f64);

impl_unit_ops!(PerUnit, "pu");

/// Angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Radians(pub f64);

impl_unit_ops!(Radians, "rad");

/// Angle in degrees (display only; all math happens in radians).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl_unit_ops!(Degrees, "deg");

/// Time on the waveform axis, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Milliseconds(pub f64);

impl_unit_ops!(Milliseconds, "ms");

impl Radians {
    /// Convert to degrees
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    /// Wrap the angle into (-π, π].
    pub fn wrap_to_pi(self) -> Self {
        let two_pi = 2.0 * std::f64::consts::PI;
        let mut a = self.0 % two_pi;
        if a <= -std::f64::consts::PI {
            a += two_pi;
        } else if a > std::f64::consts::PI {
            a -= two_pi;
        }
        Radians(a)
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

impl Degrees {
    /// Convert to radians
    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_per_unit_arithmetic() {
        let a = PerUnit(0.8);
        let b = PerUnit(0.2);
        assert_eq!((a + b).value(), 1.0);
        assert!(((a - b).value() - 0.6).abs() < 1e-12);
        assert_eq!((a * 2.0).value(), 1.6);
        assert!((a / b - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_conversion_roundtrip() {
        let rad = Radians(PI / 3.0);
        let back = rad.to_degrees().to_radians();
        assert!((back.value() - rad.value()).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_to_pi() {
        assert!((Radians(3.0 * PI).wrap_to_pi().value() - PI).abs() < 1e-12);
        assert!((Radians(-3.0 * PI).wrap_to_pi().value() - PI).abs() < 1e-12);
        assert!((Radians(0.5).wrap_to_pi().value() - 0.5).abs() < 1e-12);
        // Boundary: exactly -π wraps to +π, +π stays.
        assert!((Radians(-PI).wrap_to_pi().value() - PI).abs() < 1e-12);
        assert!((Radians(PI).wrap_to_pi().value() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_display_includes_unit() {
        assert_eq!(format!("{}", PerUnit(1.0)), "1.0000 pu");
        assert_eq!(format!("{}", Milliseconds(20.0)), "20.0000 ms");
    }
}
