//! The numeric readout panel and its display formatting.
//!
//! All user-visible numbers go through the two helpers here so every
//! view agrees on width and sign handling.

use serde::Serialize;

use pq_core::{QuadrantState, SignConvention};

/// Round to the displayed two decimals, coercing a negative zero
/// result to positive zero. The coercion has to happen after rounding:
/// a value like -0.001 is not zero, but its display is, and it must
/// not read as a stuck `-0.00` while the point crosses an axis.
fn round_for_display(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a value with an explicit sign and two decimals.
pub fn format_signed(value: f64) -> String {
    format!("{:+.2}", round_for_display(value))
}

/// Format the power angle: 5 characters wide including the sign.
pub fn format_phi(value: f64) -> String {
    format!("{:+5.2}", round_for_display(value))
}

/// One labeled value in the readout grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadoutField {
    /// Symbol shown to the left of the value.
    pub label: String,
    /// Formatted value text.
    pub text: String,
    /// Raw value, for frontends that format their own.
    pub value: f64,
}

impl ReadoutField {
    fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            text: format_signed(value),
            value,
        }
    }
}

/// The readout panel: two rows of values plus the convention selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadoutPanel {
    /// Row-major grid of fields (Vrms/Irms/cosφ over S/P/Q).
    pub rows: Vec<Vec<ReadoutField>>,
    /// Currently selected sign convention.
    pub convention: SignConvention,
    /// Choices offered by the selector.
    pub conventions: Vec<SignConvention>,
}

/// Build the readout panel from the current state.
pub fn readout_panel(state: &QuadrantState) -> ReadoutPanel {
    let rows = vec![
        vec![
            ReadoutField::new("Vrms", state.voltage_rms().value()),
            ReadoutField::new("Irms", state.current_rms().value()),
            ReadoutField::new("cos(φ)", state.cos_phi()),
        ],
        vec![
            ReadoutField::new("S", state.apparent_power().value()),
            ReadoutField::new("P", state.active_power().value()),
            ReadoutField::new("Q", state.reactive_power().value()),
        ],
    ];

    ReadoutPanel {
        rows,
        convention: state.sign_convention(),
        conventions: vec![SignConvention::Eei, SignConvention::Iec],
    }
}
