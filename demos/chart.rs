//! Renders a small LAB point set to `lab_chart.png`.
//!
//! Non-interactive stand-in for an input form: the points below play the
//! role of user-entered L*a*b* values.

use std::error::Error;
use std::sync::Arc;

use lab_chart::{
    ColorWheelImage, FigureRegistry, LabPoint, PngSurface, PointCollection, RenderSurface,
};

fn main() -> Result<(), Box<dyn Error>> {
    let mut points = PointCollection::new();
    points.push(LabPoint::parse("50", "20", "-30")?)?;
    points.push(LabPoint::parse("80", "-10", "40")?)?;
    points.push(LabPoint::parse("25", "60", "60")?)?;

    let wheel = Arc::new(ColorWheelImage::generate_default()?);
    let scene = lab_chart::project(wheel, &points)?;

    let mut registry = FigureRegistry::new();
    registry.register(PngSurface::new().render(&scene)?);

    let figure = registry.latest().ok_or("no figure rendered")?;
    std::fs::write("lab_chart.png", &figure.png_bytes)?;

    println!(
        "rendered {} points ({} L* markers) to lab_chart.png ({}x{}, {} bytes)",
        scene.points.len(),
        scene.l_markers.len(),
        figure.width,
        figure.height,
        figure.png_bytes.len(),
    );
    for point in &scene.points {
        println!("  {} at ({}, {})", point.label, point.x, point.y);
    }

    Ok(())
}
