//! # pq-ui: Controller and view coordination
//!
//! The glue between pointer input, the shared [`pq_core::QuadrantState`]
//! and the display panels. A frontend feeds [`PointerEvent`]s and
//! convention changes into the [`Controller`]; after every committed
//! recomputation the controller refreshes its views in registration
//! order and notifies subscribers.
//!
//! ## Architecture
//!
//! ```text
//! pointer events ──► Controller ──► QuadrantState (pq-core)
//!                        │
//!                        ├──► QuadrantView ──► pq_viz::quadrant_scene
//!                        ├──► WaveformView ──► pq_viz::waveform_scenes
//!                        └──► ReadoutView ───► pq_viz::readout_panel
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pq_ui::{Controller, PointerEvent, QuadrantView};
//!
//! let mut controller = Controller::new();
//! controller.register_view(Box::new(QuadrantView::new()));
//!
//! controller.handle_pointer(PointerEvent::Pressed { x: 0.6, y: 0.4 });
//! controller.handle_pointer(PointerEvent::Released);
//!
//! let view = controller.view("quadrant").unwrap();
//! let quadrant = view.as_any().downcast_ref::<QuadrantView>().unwrap();
//! assert!(quadrant.scene().is_some());
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod view;

// Re-exports for convenience
pub use config::{CoreConfig, GuiConfig, GuiTheme, PqConfig};
pub use controller::{Controller, Subscriber};
pub use error::{Error, Result};
pub use events::{PointerEvent, StateEvent};
pub use view::{QuadrantView, ReadoutView, View, WaveformView};
