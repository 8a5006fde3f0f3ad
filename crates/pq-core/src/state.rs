//! The shared state model behind the quadrant, waveform and readout
//! views.
//!
//! [`QuadrantState`] is created once at startup and mutated in place for
//! the whole process lifetime. The independent degrees of freedom are
//! the power phasor (apparent power + power angle), the voltage phasor
//! and the sign convention; everything else — current phasor, impedance,
//! cos φ, power factor, P, Q and the waveform table — is derived, and
//! rebuilt in full on every change.
//!
//! Mutations validate their inputs and build the derived set on a
//! scratch copy before committing, so a rejected update leaves the
//! previous snapshot (and its revision token) untouched.

use serde::{Deserialize, Serialize};

use crate::error::{PqError, PqResult};
use crate::phasor::{phi_to_pf, Phasor, SignConvention};
use crate::units::{PerUnit, Radians};
use crate::waveform::WaveformTable;

/// Voltage RMS below this is treated as zero.
pub const MIN_VOLTAGE_RMS: f64 = 1e-9;

/// The independent degrees of freedom.
///
/// The power phasor is the source of truth and current is always
/// derived; see DESIGN.md for the rationale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Inputs {
    apparent_power: PerUnit,
    power_angle: Radians,
    voltage_rms: PerUnit,
    voltage_angle: Radians,
    sign_convention: SignConvention,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            apparent_power: PerUnit(1.0),
            power_angle: Radians(0.0),
            voltage_rms: PerUnit(1.0),
            voltage_angle: Radians(0.0),
            sign_convention: SignConvention::Eei,
        }
    }
}

impl Inputs {
    fn validate(&self) -> PqResult<()> {
        if !self.apparent_power.is_finite() {
            return Err(PqError::NonFinite {
                field: "apparent_power",
            });
        }
        if !self.power_angle.is_finite() {
            return Err(PqError::NonFinite {
                field: "power_angle",
            });
        }
        if !self.voltage_rms.is_finite() {
            return Err(PqError::NonFinite {
                field: "voltage_rms",
            });
        }
        if !self.voltage_angle.is_finite() {
            return Err(PqError::NonFinite {
                field: "voltage_angle",
            });
        }
        if self.voltage_rms.value() < MIN_VOLTAGE_RMS {
            return Err(PqError::ZeroVoltage);
        }
        Ok(())
    }
}

/// The recomputed-on-every-change half of the state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Derived {
    current_rms: PerUnit,
    current_angle: Radians,
    impedance: PerUnit,
    cos_phi: f64,
    power_factor: f64,
    active_power: PerUnit,
    reactive_power: PerUnit,
    waveforms: WaveformTable,
}

impl Derived {
    /// Build the full derived set from validated inputs.
    fn compute(inputs: &Inputs) -> PqResult<Self> {
        inputs.validate()?;

        let phi = inputs.power_angle;

        // Current phasor from the power and voltage phasors.
        let current_rms = PerUnit(inputs.apparent_power.value() / inputs.voltage_rms.value());
        let current_angle = inputs.voltage_angle - phi;

        // Impedance magnitude Z = V/I = V²/S; its angle equals φ. At the
        // exact origin (S = 0) this blows up, which is what makes a drag
        // to the origin an invalid interaction rather than a crash.
        let impedance = PerUnit(inputs.voltage_rms.value().powi(2) / inputs.apparent_power.value());
        if !impedance.is_finite() {
            return Err(PqError::NonFinite { field: "impedance" });
        }

        let cos_phi = phi.cos();
        let power_factor = phi_to_pf(phi, inputs.sign_convention);
        let active_power = PerUnit(inputs.apparent_power.value() * phi.cos());
        let reactive_power = PerUnit(inputs.apparent_power.value() * phi.sin());

        let waveforms = WaveformTable::generate(
            Phasor::new(inputs.voltage_rms, inputs.voltage_angle),
            Phasor::new(current_rms, current_angle),
        );

        Ok(Self {
            current_rms,
            current_angle,
            impedance,
            cos_phi,
            power_factor,
            active_power,
            reactive_power,
            waveforms,
        })
    }
}

/// The single source of truth shared by every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantState {
    inputs: Inputs,
    derived: Derived,
    revision: u8,
}

impl Default for QuadrantState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadrantState {
    /// Unit voltage, unit apparent power, φ = 0, EEI convention.
    ///
    /// The constructor runs one recomputation so every derived field is
    /// valid from the start; the revision token therefore begins at 1.
    pub fn new() -> Self {
        let inputs = Inputs::default();
        let derived = Derived::compute(&inputs)
            .unwrap_or_else(|_| unreachable!("default inputs are always valid"));
        Self {
            inputs,
            derived,
            revision: 1,
        }
    }

    /// Recompute on a scratch copy of the inputs, then commit.
    ///
    /// Exactly one revision bump per completed recomputation; a failure
    /// changes nothing.
    fn try_update(&mut self, candidate: Inputs) -> PqResult<()> {
        let derived = Derived::compute(&candidate)?;
        self.inputs = candidate;
        self.derived = derived;
        self.revision = self.revision.wrapping_add(1);
        Ok(())
    }

    /// Update the power phasor from quadrant-plot coordinates.
    ///
    /// The magnitude is clamped to the unit circle:
    /// `S = min(1, √(x² + y²))`, `φ = atan2(y, x)`.
    pub fn set_power_phasor(&mut self, x: f64, y: f64) -> PqResult<()> {
        if !x.is_finite() {
            return Err(PqError::NonFinite { field: "x" });
        }
        if !y.is_finite() {
            return Err(PqError::NonFinite { field: "y" });
        }

        let candidate = Inputs {
            apparent_power: PerUnit(x.hypot(y).min(1.0)),
            power_angle: Radians(y.atan2(x)),
            ..self.inputs
        };
        self.try_update(candidate)
    }

    /// Replace the voltage phasor.
    pub fn set_voltage_phasor(&mut self, rms: PerUnit, angle: Radians) -> PqResult<()> {
        let candidate = Inputs {
            voltage_rms: rms,
            voltage_angle: angle,
            ..self.inputs
        };
        self.try_update(candidate)
    }

    /// Switch the power factor sign convention.
    pub fn set_sign_convention(&mut self, convention: SignConvention) -> PqResult<()> {
        let candidate = Inputs {
            sign_convention: convention,
            ..self.inputs
        };
        self.try_update(candidate)
    }

    /// Switch the convention from its textual key ("EEI" / "IEC").
    pub fn set_sign_convention_str(&mut self, key: &str) -> PqResult<()> {
        self.set_sign_convention(key.parse()?)
    }

    /// Re-run the recomputation with unchanged inputs.
    ///
    /// Derived fields come out identical; only the revision moves.
    pub fn refresh(&mut self) -> PqResult<()> {
        self.try_update(self.inputs)
    }

    // --- independent fields ---

    pub fn apparent_power(&self) -> PerUnit {
        self.inputs.apparent_power
    }

    pub fn power_angle(&self) -> Radians {
        self.inputs.power_angle
    }

    pub fn voltage_rms(&self) -> PerUnit {
        self.inputs.voltage_rms
    }

    pub fn voltage_angle(&self) -> Radians {
        self.inputs.voltage_angle
    }

    pub fn sign_convention(&self) -> SignConvention {
        self.inputs.sign_convention
    }

    // --- derived fields ---

    pub fn current_rms(&self) -> PerUnit {
        self.derived.current_rms
    }

    pub fn current_angle(&self) -> Radians {
        self.derived.current_angle
    }

    /// Impedance magnitude in per-unit; its angle equals the power angle.
    pub fn impedance(&self) -> PerUnit {
        self.derived.impedance
    }

    pub fn cos_phi(&self) -> f64 {
        self.derived.cos_phi
    }

    pub fn power_factor(&self) -> f64 {
        self.derived.power_factor
    }

    pub fn active_power(&self) -> PerUnit {
        self.derived.active_power
    }

    pub fn reactive_power(&self) -> PerUnit {
        self.derived.reactive_power
    }

    pub fn waveforms(&self) -> &WaveformTable {
        &self.derived.waveforms
    }

    /// Change-notification token. Views compare it for inequality only;
    /// the numeric value carries no meaning.
    pub fn revision(&self) -> u8 {
        self.revision
    }

    // --- phasor accessors ---

    pub fn voltage_phasor(&self) -> Phasor {
        Phasor::new(self.inputs.voltage_rms, self.inputs.voltage_angle)
    }

    pub fn current_phasor(&self) -> Phasor {
        Phasor::new(self.derived.current_rms, self.derived.current_angle)
    }

    pub fn power_phasor(&self) -> Phasor {
        Phasor::new(self.inputs.apparent_power, self.inputs.power_angle)
    }
}
