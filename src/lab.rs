//! LabPoint: the public CIELAB representation for lab-chart.
//!
//! Stores L*/a*/b* as f64. Range validation happens at construction and
//! again at projection time; a `LabPoint` obtained from `new` or `parse`
//! is always in range.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::ChartError;

/// A CIELAB color point. L* in 0–100, a*/b* in -100–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabPoint {
    pub(crate) l: f64,
    pub(crate) a: f64,
    pub(crate) b: f64,
}

impl LabPoint {
    /// Create a validated point. Fails with `InvalidInput` when any
    /// component is out of range or non-finite.
    pub fn new(l: f64, a: f64, b: f64) -> Result<Self, ChartError> {
        let point = LabPoint { l, a, b };
        point.validate()?;
        Ok(point)
    }

    /// Parse three numeric strings from an input form into a validated point.
    ///
    /// This is the authoritative gate for raw user text: unparseable text
    /// and out-of-range values both fail with `InvalidInput`.
    pub fn parse(l: &str, a: &str, b: &str) -> Result<Self, ChartError> {
        let l = parse_component("L*", l)?;
        let a = parse_component("a*", a)?;
        let b = parse_component("b*", b)?;
        LabPoint::new(l, a, b)
    }

    /// Lightness, 0–100.
    pub fn l(&self) -> f64 {
        self.l
    }
    /// Green–red axis, -100–100.
    pub fn a(&self) -> f64 {
        self.a
    }
    /// Blue–yellow axis, -100–100.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Check every component against its documented range.
    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        check_range("L*", self.l, constants::L_MIN, constants::L_MAX)?;
        check_range("a*", self.a, constants::AXIS_MIN, constants::AXIS_MAX)?;
        check_range("b*", self.b, constants::AXIS_MIN, constants::AXIS_MAX)?;
        Ok(())
    }
}

fn parse_component(component: &str, raw: &str) -> Result<f64, ChartError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ChartError::unparseable(component, raw))
}

fn check_range(component: &str, value: f64, min: f64, max: f64) -> Result<(), ChartError> {
    // NaN fails the combined comparison as well.
    if !(value >= min && value <= max) {
        return Err(ChartError::component_out_of_range(component, value, min, max));
    }
    Ok(())
}

/// An ordered, insertion-order-preserving set of validated points.
///
/// `push` is the insertion gate: a rejected point leaves the collection
/// untouched. `clear` backs the caller's "clear chart" action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCollection {
    points: Vec<LabPoint>,
}

impl PointCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append. Fails with `InvalidInput` without partial insertion.
    pub fn push(&mut self, point: LabPoint) -> Result<(), ChartError> {
        point.validate()?;
        self.points.push(point);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn as_slice(&self) -> &[LabPoint] {
        &self.points
    }
}

impl Deref for PointCollection {
    type Target = [LabPoint];

    fn deref(&self) -> &[LabPoint] {
        &self.points
    }
}
