//! Instantaneous waveform generation from the voltage and current
//! phasors.
//!
//! The table covers a fixed window of −10 ms to +30 ms with one full
//! 20 ms cycle between t = 0 and t = 20, sampled at 100 points. The
//! time axis and the complex phase basis `e^{iωt}` never change, so
//! both are computed once per process and reused on every call.
//!
//! Every refresh regenerates the whole table: it is a pure function of
//! the two phasors, never patched in place.

use num_complex::Complex64;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::phasor::Phasor;
use crate::units::Milliseconds;

/// Number of samples across the window.
pub const SAMPLE_COUNT: usize = 100;

/// Start of the time window, in milliseconds.
pub const MIN_TIME: f64 = -10.0;

/// End of the time window, in milliseconds.
pub const MAX_TIME: f64 = 30.0;

/// One AC period, in milliseconds (50 Hz mains).
pub const PERIOD: f64 = 20.0;

/// Angular frequency matching [`PERIOD`].
pub const OMEGA: f64 = 2.0 * std::f64::consts::PI / PERIOD;

/// Evenly spaced time axis over [MIN_TIME, MAX_TIME], inclusive.
static TIME_AXIS: Lazy<Vec<f64>> = Lazy::new(|| {
    let step = (MAX_TIME - MIN_TIME) / (SAMPLE_COUNT - 1) as f64;
    (0..SAMPLE_COUNT).map(|i| MIN_TIME + step * i as f64).collect()
});

/// Complex rotation `e^{iωt}` for each time sample.
static PHASE_BASIS: Lazy<Vec<Complex64>> = Lazy::new(|| {
    TIME_AXIS
        .iter()
        .map(|&t| Complex64::from_polar(1.0, OMEGA * t))
        .collect()
});

/// One row of the waveform table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveformSample {
    /// Sample time in milliseconds.
    pub time: Milliseconds,
    /// Instantaneous voltage.
    pub voltage: f64,
    /// Instantaneous current.
    pub current: f64,
    /// In-phase component of the current.
    pub active_current: f64,
    /// Quadrature component of the current.
    pub reactive_current: f64,
    /// Recomposed current (active + reactive); equals `current` up to
    /// floating point noise.
    pub summed_current: f64,
    /// voltage × active_current.
    pub active_power: f64,
    /// voltage × reactive_current.
    pub reactive_power: f64,
    /// voltage × current.
    pub apparent_power: f64,
}

/// The fully generated waveform table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WaveformTable {
    pub samples: Vec<WaveformSample>,
}

impl WaveformTable {
    /// Generate the table from the voltage and current phasors.
    ///
    /// The decomposition splits the peak current phasor into its real
    /// (in phase with the 0°-reference) and imaginary (quadrature)
    /// parts, then projects each onto the rotating basis separately.
    pub fn generate(voltage: Phasor, current: Phasor) -> Self {
        let voltage_peak = voltage.to_peak_complex();
        let current_peak = current.to_peak_complex();

        let samples = TIME_AXIS
            .iter()
            .zip(PHASE_BASIS.iter())
            .map(|(&t, &phase)| {
                let v = (voltage_peak * phase).re;
                let i = (current_peak * phase).re;

                let active_current = (current_peak.re * phase).re;
                let reactive_current = (current_peak.im * phase * Complex64::i()).re;
                let summed_current = active_current + reactive_current;

                WaveformSample {
                    time: Milliseconds(t),
                    voltage: v,
                    current: i,
                    active_current,
                    reactive_current,
                    summed_current,
                    active_power: v * active_current,
                    reactive_power: v * reactive_current,
                    apparent_power: v * i,
                }
            })
            .collect();

        Self { samples }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The shared time axis, in milliseconds.
    pub fn time_axis() -> &'static [f64] {
        &TIME_AXIS
    }
}
