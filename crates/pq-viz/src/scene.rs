//! Shared drawing primitives.
//!
//! Frontends receive these as plain data (everything is `Serialize`)
//! and decide how to paint them; nothing in this crate touches a
//! rendering toolkit.

use serde::Serialize;

/// A point in plot-data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An open polyline through the given points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<Point>,
}

/// A circular arc, angles in degrees counter-clockwise from +x.
///
/// `theta1 <= theta2` always holds; builders swap the endpoints when a
/// sweep would otherwise run backwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcSpec {
    pub center: Point,
    pub radius: f64,
    pub theta1: f64,
    pub theta2: f64,
}

/// Horizontal anchoring of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchoring of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Bottom,
}

/// A text label anchored at a point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub position: Point,
    pub text: String,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

impl Label {
    pub fn new(position: Point, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
            h_align: HAlign::Left,
            v_align: VAlign::Bottom,
        }
    }

    pub fn aligned(mut self, h: HAlign, v: VAlign) -> Self {
        self.h_align = h;
        self.v_align = v;
        self
    }
}

/// A named data series over a shared x axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    /// Painted at reduced opacity when false (used to de-emphasize the
    /// exporting-direction current trace).
    pub emphasized: bool,
    /// Dashed rather than solid stroke.
    pub dashed: bool,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            emphasized: true,
            dashed: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn de_emphasized(mut self) -> Self {
        self.emphasized = false;
        self
    }
}
