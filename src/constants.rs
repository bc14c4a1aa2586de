//! Fixed chart parameters shared across modules.

use std::f64::consts::PI;

/// Default wheel raster side length (hue and saturation bucket count)
pub const WHEEL_RESOLUTION: u32 = 360;

/// Fixed lightness for the wheel backdrop (50%)
pub const WHEEL_LIGHTNESS: f64 = 0.5;

/// Angular offset applied when the hue axis is mapped to polar angle
pub const WHEEL_ANGLE_OFFSET: f64 = PI / 6.0;

/// Radius tick labels along the saturation axis, center outward
pub const RADIUS_TICKS: [u32; 6] = [0, 20, 40, 60, 80, 100];

/// a*/b* axis extent of the chart plane
pub const AXIS_MIN: f64 = -100.0;
pub const AXIS_MAX: f64 = 100.0;

/// L* range covered by the grayscale bar
pub const L_MIN: f64 = 0.0;
pub const L_MAX: f64 = 100.0;

/// Rendered figure dimensions (pixels)
pub const FIGURE_WIDTH: u32 = 640;
pub const FIGURE_HEIGHT: u32 = 480;

/// Width reserved on the right for the grayscale L* bar (pixels)
pub const BAR_WIDTH: u32 = 60;

/// Scatter marker radius (pixels)
pub const MARKER_RADIUS: u32 = 5;
