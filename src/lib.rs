//! # lab-chart
//!
//! The toolkit-independent core of a CIELAB color chart: a polar
//! hue/saturation color wheel raster and a projector that maps L*a*b*
//! points onto the a*/b* plane with a grayscale L* bar.
//!
//! Both core operations are pure and deterministic: wheel generation is a
//! function of its resolution, projection is a function of its input
//! points. Rendering is delegated to a [`RenderSurface`]; a font-free PNG
//! surface and a draw-order recording surface ship with the crate.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lab_chart::{
//!     ColorWheelImage, FigureRegistry, LabPoint, PngSurface, PointCollection, RenderSurface,
//! };
//!
//! # fn main() -> Result<(), lab_chart::ChartError> {
//! let mut points = PointCollection::new();
//! points.push(LabPoint::parse("50", "20", "-30")?)?;
//!
//! let wheel = Arc::new(ColorWheelImage::generate_default()?);
//! let scene = lab_chart::project(wheel, &points)?;
//!
//! let mut registry = FigureRegistry::new();
//! registry.register(PngSurface::new().render(&scene)?);
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod error;
mod lab;
mod math;
mod render;
mod scene;
mod wheel;

pub use error::ChartError;
pub use lab::{LabPoint, PointCollection};
pub use render::{
    DrawOp, Figure, FigureRegistry, PngSurface, RecordingSurface, RenderSurface,
};
pub use scene::{project, PlotScene, ScenePoint};
pub use wheel::ColorWheelImage;
