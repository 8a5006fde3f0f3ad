//! The four-quadrant unit circle scene.
//!
//! Static geometry (circle, axis range, quadrant annotations) plus the
//! transient elements rebuilt on every change: the power vector, its
//! marker, the angle arc, and the φ / PF labels.

use serde::Serialize;

use pq_core::QuadrantState;

use crate::readout::{format_phi, format_signed};
use crate::scene::{ArcSpec, HAlign, Label, Point, Polyline, VAlign};

/// Half-width of the square plot window, in plot-data units.
pub const AXIS_LIMIT: f64 = 1.4;

/// Radius of the power-angle arc; the arc is hidden when the apparent
/// power is inside it.
pub const ARC_RADIUS: f64 = 0.1;

/// Points along the unit circle polyline.
const CIRCLE_POINTS: usize = 100;

/// Everything a frontend needs to paint the quadrant view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantScene {
    /// Symmetric axis range: both axes span ±`axis_limit`.
    pub axis_limit: f64,
    /// The unit circle.
    pub unit_circle: Polyline,
    /// Fixed quadrant annotations (+P, −P, ±Q).
    pub annotations: Vec<Label>,
    /// Dashed line from the origin to the power point.
    pub power_vector: [Point; 2],
    /// Marker at the power point.
    pub marker: Point,
    /// Arc from the +x axis to the power angle, when visible.
    pub angle_arc: Option<ArcSpec>,
    /// "φ = …" label in the lower-left corner.
    pub phi_label: Label,
    /// "PF = …" label floating just outside the power point.
    pub pf_label: Label,
}

/// Build the quadrant scene from the current state.
pub fn quadrant_scene(state: &QuadrantState) -> QuadrantScene {
    let apparent_power = state.apparent_power().value();
    let power_angle = state.power_angle();
    let phi = power_angle.value();

    let unit_circle = Polyline {
        points: (0..CIRCLE_POINTS)
            .map(|i| {
                let a = 2.0 * std::f64::consts::PI * i as f64 / (CIRCLE_POINTS - 1) as f64;
                Point::new(a.cos(), a.sin())
            })
            .collect(),
    };

    let annotations = vec![
        Label::new(Point::new(1.23, 0.03), "+P"),
        Label::new(Point::new(-1.37, 0.03), "-P"),
        Label::new(Point::new(-0.14, 1.29), "+Q  (OverExcited)"),
        Label::new(Point::new(-0.11, -1.34), "-Q  (UnderExcited)"),
    ];

    let tip = Point::new(apparent_power * phi.cos(), apparent_power * phi.sin());

    // The arc sweeps from the +x axis to φ; endpoints are kept ordered
    // so a negative angle doesn't draw the long way round.
    let angle_arc = (apparent_power > ARC_RADIUS).then(|| {
        let phi_deg = power_angle.to_degrees().value();
        let (theta1, theta2) = if phi_deg < 0.0 {
            (phi_deg, 0.0)
        } else {
            (0.0, phi_deg)
        };
        ArcSpec {
            center: Point::new(0.0, 0.0),
            radius: ARC_RADIUS,
            theta1,
            theta2,
        }
    });

    let phi_label = Label::new(
        Point::new(-1.34, -1.34),
        format!("φ = {}", format_phi(phi)),
    );

    let pf_label = Label::new(
        Point::new(tip.x * 1.05, tip.y * 1.05),
        format!("PF = {}", format_signed(state.power_factor())),
    )
    .aligned(pf_h_align(phi), pf_v_align(phi));

    QuadrantScene {
        axis_limit: AXIS_LIMIT,
        unit_circle,
        annotations,
        power_vector: [Point::new(0.0, 0.0), tip],
        marker: tip,
        angle_arc,
        phi_label,
        pf_label,
    }
}

/// Keep the PF label outside the circle: anchor it away from the point
/// as the angle moves from the +x axis (left) through vertical (center)
/// to the -x axis (right).
fn pf_h_align(phi: f64) -> HAlign {
    let bucket = ((phi.abs() * 10.0).round() / 10.0 / (std::f64::consts::PI / 3.0)) as usize;
    match bucket {
        0 => HAlign::Left,
        1 => HAlign::Center,
        _ => HAlign::Right,
    }
}

fn pf_v_align(phi: f64) -> VAlign {
    if phi > 0.0 {
        VAlign::Bottom
    } else {
        VAlign::Top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_scene_geometry() {
        let mut state = QuadrantState::new();
        state.set_power_phasor(0.0, 0.8).unwrap();

        let scene = quadrant_scene(&state);
        assert_eq!(scene.axis_limit, AXIS_LIMIT);
        assert_eq!(scene.unit_circle.points.len(), 100);

        // Vector tip sits at S∠φ.
        assert!(scene.marker.x.abs() < 1e-12);
        assert!((scene.marker.y - 0.8).abs() < 1e-12);
        assert_eq!(scene.power_vector[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn test_arc_hidden_inside_radius() {
        let mut state = QuadrantState::new();
        state.set_power_phasor(0.05, 0.0).unwrap();
        assert!(quadrant_scene(&state).angle_arc.is_none());

        state.set_power_phasor(0.5, 0.5).unwrap();
        let arc = quadrant_scene(&state).angle_arc.unwrap();
        assert_eq!(arc.theta1, 0.0);
        assert!((arc.theta2 - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_arc_endpoints_ordered_for_negative_phi() {
        let mut state = QuadrantState::new();
        state.set_power_phasor(0.5, -0.5).unwrap();
        let arc = quadrant_scene(&state).angle_arc.unwrap();
        assert!(arc.theta1 < arc.theta2);
        assert_eq!(arc.theta2, 0.0);
    }

    #[test]
    fn test_pf_label_alignment_buckets() {
        assert_eq!(pf_h_align(0.1), HAlign::Left);
        assert_eq!(pf_h_align(FRAC_PI_2), HAlign::Center);
        assert_eq!(pf_h_align(PI - 0.1), HAlign::Right);
        assert_eq!(pf_v_align(0.5), VAlign::Bottom);
        assert_eq!(pf_v_align(-0.5), VAlign::Top);
    }

    #[test]
    fn test_scene_serializes() {
        let scene = quadrant_scene(&QuadrantState::new());
        let json = serde_json::to_value(&scene).unwrap();
        assert!(json.get("unit_circle").is_some());
        assert!(json.get("pf_label").is_some());
    }

    #[test]
    fn test_phi_label_text() {
        let state = QuadrantState::new();
        let scene = quadrant_scene(&state);
        assert_eq!(scene.phi_label.text, "φ = +0.00");
    }
}
