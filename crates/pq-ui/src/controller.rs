//! The controller: wires pointer input into state mutations and state
//! changes into view refreshes.
//!
//! Everything is synchronous and single-threaded. Each pointer sample
//! that lands on the plot runs one full recomputation and one full
//! publish — no debouncing, no batching. That is fine here because a
//! recomputation touches a fixed 100-sample table.
//!
//! A rejected mutation (dragging to the exact origin, a NaN coordinate,
//! zero voltage) is logged and swallowed: the previous snapshot stays
//! committed and no view refresh happens.

use tracing::{debug, trace};

use pq_core::{PerUnit, QuadrantState, Radians, SignConvention};

use crate::error::Result;
use crate::events::{PointerEvent, StateEvent};
use crate::view::View;

/// Callback invoked after every publish.
pub type Subscriber = Box<dyn FnMut(StateEvent)>;

/// Owns the shared state and the ordered list of views.
pub struct Controller {
    state: QuadrantState,
    views: Vec<Box<dyn View>>,
    subscribers: Vec<Subscriber>,
    button_held: bool,
}

impl Controller {
    /// Controller over a freshly initialized state, with no views yet.
    pub fn new() -> Self {
        Self::with_state(QuadrantState::new())
    }

    /// Controller over a fresh state with configured defaults applied.
    pub fn from_config(config: &crate::config::PqConfig) -> Result<Self> {
        let mut state = QuadrantState::new();
        state.set_sign_convention(config.core.sign_convention)?;
        Ok(Self::with_state(state))
    }

    /// Controller over an existing state snapshot.
    pub fn with_state(state: QuadrantState) -> Self {
        Self {
            state,
            views: Vec::new(),
            subscribers: Vec::new(),
            button_held: false,
        }
    }

    /// Append a view to the refresh order and bring it up to date with
    /// the current snapshot immediately.
    pub fn register_view(&mut self, mut view: Box<dyn View>) {
        view.refresh(&self.state);
        debug!(view = view.name(), "view registered");
        self.views.push(view);
    }

    /// Subscribe a callback to post-publish notifications.
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Read-only access to the shared state.
    pub fn state(&self) -> &QuadrantState {
        &self.state
    }

    /// The registered views, in refresh order.
    pub fn views(&self) -> &[Box<dyn View>] {
        &self.views
    }

    /// Look up a registered view by name.
    pub fn view(&self, name: &str) -> Option<&dyn View> {
        self.views
            .iter()
            .find(|v| v.name() == name)
            .map(|v| v.as_ref())
    }

    /// Whether a drag is currently in progress.
    pub fn dragging(&self) -> bool {
        self.button_held
    }

    /// Feed one pointer event; returns whether the state changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Pressed { x, y } => {
                self.button_held = true;
                self.apply_drag(x, y)
            }
            PointerEvent::Moved { x, y } if self.button_held => self.apply_drag(x, y),
            PointerEvent::Moved { .. } => false,
            PointerEvent::Released => {
                self.button_held = false;
                false
            }
        }
    }

    /// Switch the power factor sign convention and republish.
    pub fn set_sign_convention(&mut self, convention: SignConvention) -> Result<()> {
        self.state.set_sign_convention(convention)?;
        self.publish();
        Ok(())
    }

    /// Switch the convention from its textual key ("EEI" / "IEC").
    pub fn set_sign_convention_str(&mut self, key: &str) -> Result<()> {
        self.state.set_sign_convention_str(key)?;
        self.publish();
        Ok(())
    }

    /// Replace the voltage phasor and republish.
    pub fn set_voltage_phasor(&mut self, rms: PerUnit, angle: Radians) -> Result<()> {
        self.state.set_voltage_phasor(rms, angle)?;
        self.publish();
        Ok(())
    }

    fn apply_drag(&mut self, x: f64, y: f64) -> bool {
        match self.state.set_power_phasor(x, y) {
            Ok(()) => {
                self.publish();
                true
            }
            Err(err) => {
                // Previous snapshot stays visible; nothing to redraw.
                debug!(%err, x, y, "pointer input rejected");
                false
            }
        }
    }

    /// Refresh every view in registration order, then notify
    /// subscribers.
    fn publish(&mut self) {
        let revision = self.state.revision();
        for view in &mut self.views {
            view.refresh(&self.state);
            trace!(view = view.name(), revision, "view refreshed");
        }

        let event = StateEvent::Recomputed { revision };
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
        debug!(revision, views = self.views.len(), "state change published");
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
