//! Projection of LAB points onto the a*/b* chart plane.
//!
//! `project` turns a point collection and a wheel backdrop into a
//! `PlotScene`: a rendering-ready description of marker positions,
//! annotation labels, and L* bar ticks. The scene is rebuilt in full on
//! every call and never mutates its inputs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::lab::LabPoint;
use crate::wheel::ColorWheelImage;

/// One projected scatter point on the a*/b* plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    /// Horizontal position: the point's b* value.
    pub x: f64,
    /// Vertical position: the point's a* value.
    pub y: f64,
    /// Annotation drawn above the marker, formatted `(a;b)`.
    pub label: String,
    /// Whether the marker body is filled. Always false in practice; the
    /// quadrant rule this derives from selects "no fill" on both sides
    /// (kept behavior-identical to the reference charts, not corrected).
    pub filled: bool,
}

/// A rendering-ready chart description.
///
/// Ephemeral output of [`project`]; the backdrop is shared, the rest is
/// rebuilt per call.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotScene {
    /// Wheel backdrop, drawn warped to the full a*/b* extent.
    pub background: Arc<ColorWheelImage>,
    /// Scatter points in input order.
    pub points: Vec<ScenePoint>,
    /// One grayscale-bar tick per point: L* normalized to 0.0–1.0.
    pub l_markers: Vec<f64>,
}

/// Fill flag for the quadrant rule carried over from the reference charts:
/// both sides of the first-quadrant check resolve to "no fill", so every
/// point renders outline-only.
#[allow(clippy::if_same_then_else)]
fn point_fill(a: f64, b: f64) -> bool {
    if a >= 0.0 && b >= 0.0 { false } else { false }
}

/// Project `points` onto the a*/b* plane over the `background` wheel.
///
/// Validates every point up front and fails with `InvalidInput` before
/// building anything, so a scene is never partially valid. The horizontal
/// axis is b* and the vertical axis is a* (axis swap); each point also
/// contributes an L*/100 tick for the grayscale bar.
pub fn project(
    background: Arc<ColorWheelImage>,
    points: &[LabPoint],
) -> Result<PlotScene, ChartError> {
    for point in points {
        point.validate()?;
    }

    let mut scene_points = Vec::with_capacity(points.len());
    let mut l_markers = Vec::with_capacity(points.len());

    for point in points {
        scene_points.push(ScenePoint {
            x: point.b(),
            y: point.a(),
            label: format!("({};{})", point.a(), point.b()),
            filled: point_fill(point.a(), point.b()),
        });
        l_markers.push(point.l() / 100.0);
    }

    Ok(PlotScene {
        background,
        points: scene_points,
        l_markers,
    })
}
