//! View coordination.
//!
//! A [`View`] rebuilds its display data from the state snapshot when
//! told to. There is no implicit registry: the controller owns an
//! explicit, ordered list of views and walks it after every committed
//! recomputation, so redraw order is deterministic and views stay
//! read-only with respect to the state.
//!
//! The three built-in views wrap the pq-viz scene builders and cache
//! the scene they last produced; a frontend paints from the cache.

use pq_core::QuadrantState;
use pq_viz::{
    quadrant_scene, readout_panel, waveform_scenes, QuadrantScene, ReadoutPanel, WaveformScenes,
};

/// A display panel that rebuilds itself from the shared state.
pub trait View {
    /// Stable name, for logging and lookup.
    fn name(&self) -> &str;

    /// Discard the previous display data and rebuild from `state`.
    fn refresh(&mut self, state: &QuadrantState);

    /// Downcasting hook so a frontend can reach the concrete view (and
    /// its cached scene) behind the trait object.
    fn as_any(&self) -> &dyn std::any::Any;
}

/// The four-quadrant phasor diagram.
#[derive(Debug, Default)]
pub struct QuadrantView {
    scene: Option<QuadrantScene>,
}

impl QuadrantView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently built scene, if any refresh has run.
    pub fn scene(&self) -> Option<&QuadrantScene> {
        self.scene.as_ref()
    }
}

impl View for QuadrantView {
    fn name(&self) -> &str {
        "quadrant"
    }

    fn refresh(&mut self, state: &QuadrantState) {
        self.scene = Some(quadrant_scene(state));
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// The three stacked waveform panels.
#[derive(Debug, Default)]
pub struct WaveformView {
    scenes: Option<WaveformScenes>,
}

impl WaveformView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scenes(&self) -> Option<&WaveformScenes> {
        self.scenes.as_ref()
    }
}

impl View for WaveformView {
    fn name(&self) -> &str {
        "waveforms"
    }

    fn refresh(&mut self, state: &QuadrantState) {
        self.scenes = Some(waveform_scenes(state));
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// The numeric readout grid with the convention selector.
#[derive(Debug, Default)]
pub struct ReadoutView {
    panel: Option<ReadoutPanel>,
}

impl ReadoutView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> Option<&ReadoutPanel> {
        self.panel.as_ref()
    }
}

impl View for ReadoutView {
    fn name(&self) -> &str {
        "readout"
    }

    fn refresh(&mut self, state: &QuadrantState) {
        self.panel = Some(readout_panel(state));
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
