//! The three stacked waveform panels.
//!
//! Upper: voltage and current. Middle: the current split into its
//! active and reactive components. Lower: the corresponding power
//! decomposition. All three share the time axis and the y range.

use serde::Serialize;

use pq_core::{QuadrantState, WaveformTable, MAX_TIME, MIN_TIME};

use crate::scene::Series;

/// One plot panel: a title and its series over the shared time axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveformPanel {
    pub title: String,
    pub series: Vec<Series>,
}

/// The complete waveform view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveformScenes {
    /// Shared x axis, milliseconds.
    pub time: Vec<f64>,
    /// x range of all panels.
    pub x_range: (f64, f64),
    /// Shared symmetric y range, scaled to the peak apparent power.
    pub y_range: (f64, f64),
    pub upper: WaveformPanel,
    pub middle: WaveformPanel,
    pub lower: WaveformPanel,
}

/// Build the three panels from the current state.
pub fn waveform_scenes(state: &QuadrantState) -> WaveformScenes {
    let table = state.waveforms();

    // Peak apparent power (√2·V)·(√2·I) sets the scale for every panel.
    let peak_power =
        2.0 * state.voltage_rms().value() * state.current_rms().value();
    let y_limit = peak_power * 1.1;

    // When cos φ goes negative the machine is exporting: dim the
    // current trace and light up its negation instead.
    let importing = state.power_angle().cos() > 0.0;

    let current = column(table, |s| s.current);
    let current_negated: Vec<f64> = current.iter().map(|v| -v).collect();

    let mut current_series = Series::new("Current", current);
    let mut inverse_series = Series::new("-Current", current_negated);
    if importing {
        inverse_series = inverse_series.de_emphasized();
    } else {
        current_series = current_series.de_emphasized();
    }

    let upper = WaveformPanel {
        title: "Voltage/Current Waveforms".to_string(),
        series: vec![
            Series::new("Voltage", column(table, |s| s.voltage)),
            current_series,
            inverse_series,
        ],
    };

    let middle = WaveformPanel {
        title: "Current Decomposition".to_string(),
        series: vec![
            Series::new("Active Current", column(table, |s| s.active_current)),
            Series::new("Reactive Current", column(table, |s| s.reactive_current)),
            Series::new("Apparent Current", column(table, |s| s.summed_current)).dashed(),
        ],
    };

    let lower = WaveformPanel {
        title: "Power Decomposition".to_string(),
        series: vec![
            Series::new("Active Power", column(table, |s| s.active_power)),
            Series::new("Reactive Power", column(table, |s| s.reactive_power)),
            Series::new("Apparent Power", column(table, |s| s.apparent_power)).dashed(),
        ],
    };

    WaveformScenes {
        time: WaveformTable::time_axis().to_vec(),
        x_range: (MIN_TIME, MAX_TIME),
        y_range: (-y_limit, y_limit),
        upper,
        middle,
        lower,
    }
}

fn column(table: &WaveformTable, f: impl Fn(&pq_core::WaveformSample) -> f64) -> Vec<f64> {
    table.samples.iter().map(|s| f(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pq_core::SAMPLE_COUNT;

    #[test]
    fn test_panel_shapes() {
        let state = QuadrantState::new();
        let scenes = waveform_scenes(&state);

        assert_eq!(scenes.time.len(), SAMPLE_COUNT);
        assert_eq!(scenes.x_range, (MIN_TIME, MAX_TIME));
        assert_eq!(scenes.upper.series.len(), 3);
        assert_eq!(scenes.middle.series.len(), 3);
        assert_eq!(scenes.lower.series.len(), 3);
        for panel in [&scenes.upper, &scenes.middle, &scenes.lower] {
            for series in &panel.series {
                assert_eq!(series.values.len(), SAMPLE_COUNT);
            }
        }
    }

    #[test]
    fn test_y_range_tracks_peak_power() {
        // Defaults: V = I = 1 pu, so peak power is 2 and the margin 10%.
        let state = QuadrantState::new();
        let scenes = waveform_scenes(&state);
        assert!((scenes.y_range.1 - 2.2).abs() < 1e-12);
        assert_eq!(scenes.y_range.0, -scenes.y_range.1);
    }

    #[test]
    fn test_current_emphasis_flips_when_exporting() {
        let mut state = QuadrantState::new();

        state.set_power_phasor(0.9, 0.1).unwrap();
        let scenes = waveform_scenes(&state);
        assert!(scenes.upper.series[1].emphasized);
        assert!(!scenes.upper.series[2].emphasized);

        // cos φ < 0: exporting, emphasis swaps to the negated trace.
        state.set_power_phasor(-0.9, 0.1).unwrap();
        let scenes = waveform_scenes(&state);
        assert!(!scenes.upper.series[1].emphasized);
        assert!(scenes.upper.series[2].emphasized);
    }

    #[test]
    fn test_apparent_series_are_dashed() {
        let state = QuadrantState::new();
        let scenes = waveform_scenes(&state);
        assert!(scenes.middle.series[2].dashed);
        assert!(scenes.lower.series[2].dashed);
    }
}
