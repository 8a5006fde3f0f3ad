//! Event types for reactive UI updates.

/// Pointer input from the quadrant plot surface, in plot-data
/// coordinates.
///
/// Only the left button drives the demo: a press inside the axes moves
/// the power point immediately, and motion keeps moving it for as long
/// as the button stays held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Left button pressed at (x, y).
    Pressed { x: f64, y: f64 },

    /// Pointer moved to (x, y); only acted on while the button is held.
    Moved { x: f64, y: f64 },

    /// Left button released.
    Released,
}

/// Events published by the controller after state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEvent {
    /// A recomputation committed and every view was refreshed.
    Recomputed {
        /// The state's change-notification token after the commit.
        revision: u8,
    },
}
