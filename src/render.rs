//! Rendering surfaces for `PlotScene`.
//!
//! The core hands a scene to a [`RenderSurface`]; what happens next is the
//! surface's business. Two implementations ship here: [`RecordingSurface`]
//! captures the draw order as data (for tests and for callers bridging to
//! their own toolkit), and [`PngSurface`] rasterizes the scene to an
//! in-memory PNG via the plotters bitmap backend. Neither holds global
//! state; rendered figures go wherever the caller's [`FigureRegistry`]
//! lives.

use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::prelude::*;
use plotters::style::RGBAColor;

use crate::constants;
use crate::error::ChartError;
use crate::scene::PlotScene;

/// Draws a projected scene and produces some rendered artifact.
pub trait RenderSurface {
    type Output;

    fn render(&mut self, scene: &PlotScene) -> Result<Self::Output, ChartError>;
}

/// A rendered chart artifact: encoded PNG plus its pixel dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Caller-owned registry of rendered figures.
///
/// Replaces the module-level figure list of the reference charts with an
/// explicitly injected collection: the caller controls lifetime and
/// teardown, and dropping the registry releases everything.
#[derive(Debug, Clone, Default)]
pub struct FigureRegistry {
    figures: Vec<Figure>,
}

impl FigureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn latest(&self) -> Option<&Figure> {
        self.figures.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Figure> {
        self.figures.iter()
    }

    pub fn clear(&mut self) {
        self.figures.clear();
    }
}

/// One recorded drawing step, in the order a surface performs them.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Background { resolution: u32 },
    Grid,
    AxisLine { vertical: bool },
    Point { x: f64, y: f64, filled: bool },
    Annotation { x: f64, y: f64, label: String },
    GrayscaleBar,
    LMarker { value: f64 },
}

/// Records the drawing steps for a scene instead of rasterizing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordingSurface;

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface
    }
}

impl RenderSurface for RecordingSurface {
    type Output = Vec<DrawOp>;

    fn render(&mut self, scene: &PlotScene) -> Result<Vec<DrawOp>, ChartError> {
        let mut ops = Vec::with_capacity(5 + 2 * scene.points.len() + scene.l_markers.len());

        ops.push(DrawOp::Background {
            resolution: scene.background.resolution(),
        });
        ops.push(DrawOp::Grid);
        ops.push(DrawOp::AxisLine { vertical: false });
        ops.push(DrawOp::AxisLine { vertical: true });
        for point in &scene.points {
            ops.push(DrawOp::Point {
                x: point.x,
                y: point.y,
                filled: point.filled,
            });
            ops.push(DrawOp::Annotation {
                x: point.x,
                y: point.y,
                label: point.label.clone(),
            });
        }
        ops.push(DrawOp::GrayscaleBar);
        for &value in &scene.l_markers {
            ops.push(DrawOp::LMarker { value });
        }

        Ok(ops)
    }
}

/// Axis and grid color.
const AXIS_COLOR: RGBColor = RGBColor(88, 91, 112);
/// L* marker tick color.
const MARKER_COLOR: RGBColor = RGBColor(220, 40, 40);

/// Rasterizes scenes to in-memory PNG figures.
///
/// Runs font-free (annotation text travels in the scene, not the bitmap),
/// so output is deterministic on headless hosts: equal scenes yield
/// byte-identical PNGs.
#[derive(Debug, Clone, Copy)]
pub struct PngSurface {
    width: u32,
    height: u32,
}

impl PngSurface {
    pub fn new() -> Self {
        PngSurface {
            width: constants::FIGURE_WIDTH,
            height: constants::FIGURE_HEIGHT,
        }
    }

    /// Custom figure dimensions. Fails with `InvalidParameter` when either
    /// side is zero or the width leaves no room for the L* bar.
    pub fn with_size(width: u32, height: u32) -> Result<Self, ChartError> {
        if width <= constants::BAR_WIDTH {
            return Err(ChartError::InvalidParameter {
                what: "width",
                value: width as i64,
            });
        }
        if height == 0 {
            return Err(ChartError::InvalidParameter {
                what: "height",
                value: height as i64,
            });
        }
        Ok(PngSurface { width, height })
    }
}

impl Default for PngSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for PngSurface {
    type Output = Figure;

    fn render(&mut self, scene: &PlotScene) -> Result<Figure, ChartError> {
        let (width, height) = (self.width, self.height);
        let mut buf = vec![0u8; (width * height * 3) as usize];

        {
            let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let (chart_area, bar_area) =
                root.split_horizontally((width - constants::BAR_WIDTH) as i32);

            draw_chart(&chart_area, scene)?;
            draw_l_bar(&bar_area, &scene.l_markers)?;

            root.present().map_err(render_err)?;
        }

        let png_bytes = encode_rgb_to_png(&buf, width, height)?;

        Ok(Figure {
            png_bytes,
            width,
            height,
        })
    }
}

type Area<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;

/// Wheel backdrop, grid, reference lines, and scatter markers on the
/// a*/b* plane.
fn draw_chart(area: &Area<'_>, scene: &PlotScene) -> Result<(), ChartError> {
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .build_cartesian_2d(
            constants::AXIS_MIN..constants::AXIS_MAX,
            constants::AXIS_MIN..constants::AXIS_MAX,
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .axis_style(AXIS_COLOR)
        .bold_line_style(AXIS_COLOR.mix(0.3))
        .light_line_style(AXIS_COLOR.mix(0.1))
        .x_labels(0)
        .y_labels(0)
        .draw()
        .map_err(render_err)?;

    // Warp the hue/saturation grid onto the polar disc, pixel by pixel.
    let plotting_area = chart.plotting_area();
    let pixel_range = plotting_area.get_pixel_range();
    let cols = (pixel_range.0.end - pixel_range.0.start).max(1) as usize;
    let rows = (pixel_range.1.end - pixel_range.1.start).max(1) as usize;
    let span = constants::AXIS_MAX - constants::AXIS_MIN;

    for row in 0..rows {
        let y = constants::AXIS_MAX - (row as f64 + 0.5) * span / rows as f64;
        for col in 0..cols {
            let x = constants::AXIS_MIN + (col as f64 + 0.5) * span / cols as f64;
            if let Some([r, g, b]) = scene
                .background
                .sample_polar(x / constants::AXIS_MAX, y / constants::AXIS_MAX)
            {
                plotting_area
                    .draw_pixel((x, y), &RGBColor(r, g, b))
                    .map_err(render_err)?;
            }
        }
    }

    // Dashed reference lines through 0 on both axes.
    chart
        .draw_series(DashedLineSeries::new(
            [(constants::AXIS_MIN, 0.0), (constants::AXIS_MAX, 0.0)],
            8,
            5,
            BLACK.stroke_width(1),
        ))
        .map_err(render_err)?;
    chart
        .draw_series(DashedLineSeries::new(
            [(0.0, constants::AXIS_MIN), (0.0, constants::AXIS_MAX)],
            8,
            5,
            BLACK.stroke_width(1),
        ))
        .map_err(render_err)?;

    chart
        .draw_series(scene.points.iter().map(|point| {
            let style = ShapeStyle {
                color: RGBAColor(0, 0, 0, 1.0),
                filled: point.filled,
                stroke_width: 2,
            };
            Circle::new((point.x, point.y), constants::MARKER_RADIUS as i32, style)
        }))
        .map_err(render_err)?;

    Ok(())
}

/// Vertical grayscale gradient spanning L* 0–100, with one red tick per
/// marker value.
fn draw_l_bar(area: &Area<'_>, l_markers: &[f64]) -> Result<(), ChartError> {
    let mut bar = ChartBuilder::on(area)
        .margin(10)
        .build_cartesian_2d(0.0..1.0, constants::L_MIN..constants::L_MAX)
        .map_err(render_err)?;

    let plotting_area = bar.plotting_area();
    let pixel_range = plotting_area.get_pixel_range();
    let cols = (pixel_range.0.end - pixel_range.0.start).max(1) as usize;
    let rows = (pixel_range.1.end - pixel_range.1.start).max(1) as usize;
    let span = constants::L_MAX - constants::L_MIN;

    for row in 0..rows {
        // Black at the bottom (L*=0) up to white at the top.
        let l = constants::L_MAX - (row as f64 + 0.5) * span / rows as f64;
        let gray = (l / span * 255.0).round() as u8;
        let color = RGBColor(gray, gray, gray);
        for col in 0..cols {
            let x = (col as f64 + 0.5) / cols as f64;
            plotting_area.draw_pixel((x, l), &color).map_err(render_err)?;
        }
    }

    for &value in l_markers {
        let l = value * span;
        bar.draw_series(LineSeries::new(
            [(0.0, l), (1.0, l)],
            MARKER_COLOR.stroke_width(3),
        ))
        .map_err(render_err)?;
    }

    Ok(())
}

fn render_err(err: impl std::fmt::Display) -> ChartError {
    ChartError::Render(err.to_string())
}

/// Encode an RGB8 buffer to PNG bytes.
fn encode_rgb_to_png(buf: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ChartError> {
    let mut png_bytes = Vec::new();
    PngEncoder::new(&mut png_bytes)
        .write_image(buf, width, height, image::ColorType::Rgb8)
        .map_err(|e| render_err(format!("png encode: {e}")))?;
    Ok(png_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lab::LabPoint;
    use crate::scene::project;
    use crate::wheel::ColorWheelImage;
    use std::sync::Arc;

    fn sample_scene() -> PlotScene {
        let wheel = Arc::new(ColorWheelImage::generate(36).unwrap());
        let points = [
            LabPoint::new(50.0, 20.0, -30.0).unwrap(),
            LabPoint::new(80.0, -10.0, 40.0).unwrap(),
        ];
        project(wheel, &points).unwrap()
    }

    #[test]
    fn recording_surface_captures_the_draw_order() {
        let scene = sample_scene();
        let ops = RecordingSurface::new().render(&scene).unwrap();

        assert_eq!(ops[0], DrawOp::Background { resolution: 36 });
        assert_eq!(ops[1], DrawOp::Grid);
        assert_eq!(ops[2], DrawOp::AxisLine { vertical: false });
        assert_eq!(ops[3], DrawOp::AxisLine { vertical: true });
        assert_eq!(
            ops[4],
            DrawOp::Point {
                x: -30.0,
                y: 20.0,
                filled: false,
            }
        );
        assert_eq!(
            ops[5],
            DrawOp::Annotation {
                x: -30.0,
                y: 20.0,
                label: "(20;-30)".to_string(),
            }
        );
        // Second point, then the bar and its two markers.
        assert!(matches!(ops[6], DrawOp::Point { x: 40.0, .. }));
        assert!(matches!(ops[7], DrawOp::Annotation { .. }));
        assert_eq!(ops[8], DrawOp::GrayscaleBar);
        assert_eq!(ops[9], DrawOp::LMarker { value: 0.5 });
        assert_eq!(ops[10], DrawOp::LMarker { value: 0.8 });
        assert_eq!(ops.len(), 11);
    }

    #[test]
    fn png_surface_is_deterministic() {
        let scene = sample_scene();
        let first = PngSurface::new().render(&scene).unwrap();
        let second = PngSurface::new().render(&scene).unwrap();
        assert_eq!(first, second);
        assert!(!first.png_bytes.is_empty());
    }

    #[test]
    fn png_surface_reports_its_dimensions() {
        let scene = sample_scene();
        let figure = PngSurface::with_size(320, 240).unwrap().render(&scene).unwrap();
        assert_eq!((figure.width, figure.height), (320, 240));

        use image::GenericImageView;
        let decoded =
            image::load_from_memory_with_format(&figure.png_bytes, image::ImageFormat::Png)
                .unwrap();
        assert_eq!(decoded.dimensions(), (320, 240));
    }

    #[test]
    fn zero_or_bar_sized_dimensions_are_rejected() {
        assert!(PngSurface::with_size(0, 240).is_err());
        assert!(PngSurface::with_size(constants::BAR_WIDTH, 240).is_err());
        assert!(PngSurface::with_size(320, 0).is_err());
    }

    #[test]
    fn registry_is_caller_owned_and_clearable() {
        let scene = sample_scene();
        let mut registry = FigureRegistry::new();
        assert!(registry.is_empty());

        let figure = PngSurface::new().render(&scene).unwrap();
        registry.register(figure.clone());
        registry.register(figure);
        assert_eq!(registry.len(), 2);
        assert!(registry.latest().is_some());

        registry.clear();
        assert!(registry.is_empty());
    }
}
