//! # pq-core: Power Quadrant State Model
//!
//! The numeric heart of the power quadrant demo: an observable state
//! model relating AC electrical quantities (voltage, current,
//! apparent/active/reactive power, power factor) as a point is dragged
//! around a four-quadrant unit circle.
//!
//! ## Design Philosophy
//!
//! One mutable [`QuadrantState`] is the single source of truth. Its
//! independent degrees of freedom are the power phasor (apparent power
//! S and power angle φ), the voltage phasor and the power factor sign
//! convention; the current phasor, impedance, cos φ, power factor,
//! P, Q and the 100-sample waveform table are derived and rebuilt in
//! full after every change. A wrapping revision token tells observers
//! that a recomputation committed.
//!
//! ## Quick Start
//!
//! ```rust
//! use pq_core::QuadrantState;
//!
//! let mut state = QuadrantState::new();
//!
//! // Drag the power point to the top of the unit circle: φ = π/2.
//! state.set_power_phasor(0.0, 1.0)?;
//!
//! assert!(state.active_power().value().abs() < 1e-12);
//! assert!((state.reactive_power().value() - 1.0).abs() < 1e-12);
//! # Ok::<(), pq_core::PqError>(())
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Per-unit, angle and time newtypes
//! - [`phasor`] - Polar phasors and the EEI/IEC sign conventions
//! - [`waveform`] - Instantaneous waveform table generation
//! - [`state`] - The observable state model
//! - [`error`] - Domain errors

pub mod error;
pub mod phasor;
pub mod state;
pub mod units;
pub mod waveform;

pub use error::{PqError, PqResult};
pub use phasor::{phi_to_pf, Phasor, SignConvention, SQRT_TWO};
pub use state::{QuadrantState, MIN_VOLTAGE_RMS};
pub use units::{Degrees, Milliseconds, PerUnit, Radians};
pub use waveform::{WaveformSample, WaveformTable, MAX_TIME, MIN_TIME, OMEGA, PERIOD, SAMPLE_COUNT};
