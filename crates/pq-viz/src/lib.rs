//! # pq-viz: Scene data for power quadrant frontends
//!
//! Pure functions from a [`pq_core::QuadrantState`] snapshot to
//! serializable draw primitives. A frontend (desktop canvas, web,
//! terminal) takes these scenes and paints them; no rendering toolkit
//! is referenced here.
//!
//! - [`quadrant_scene`] - the four-quadrant unit circle with the power
//!   vector, angle arc and labels
//! - [`waveform_scenes`] - the three stacked waveform panels
//! - [`readout_panel`] - the formatted numeric readout grid

pub mod quadrant;
pub mod readout;
pub mod scene;
pub mod waveform_panel;

pub use quadrant::{quadrant_scene, QuadrantScene, ARC_RADIUS, AXIS_LIMIT};
pub use readout::{format_phi, format_signed, readout_panel, ReadoutField, ReadoutPanel};
pub use scene::{ArcSpec, HAlign, Label, Point, Polyline, Series, VAlign};
pub use waveform_panel::{waveform_scenes, WaveformPanel, WaveformScenes};
