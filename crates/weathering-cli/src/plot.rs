//! Static time-series plot of a model trajectory.
//!
//! Renders the three trajectory variables as labeled line series against
//! step index and writes a single PNG image.

use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;
use weathering_core::trajectory::Trajectory;

const BROWN: RGBColor = RGBColor(139, 69, 19);

/// Configuration for the rendered image.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    /// Line colors for the rock, atmosphere and temperature series
    pub rock_color: RGBColor,
    pub atmosphere_color: RGBColor,
    pub temperature_color: RGBColor,
    /// Line thickness in pixels
    pub line_width: u32,
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            title: "Chemical Weathering Feedback Model".to_string(),
            xlabel: "Time Step".to_string(),
            ylabel: "Value".to_string(),
            rock_color: BROWN,
            atmosphere_color: GREEN,
            temperature_color: RED,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Render the trajectory to a PNG file at `path`.
///
/// The parent directory must exist; a missing or unwritable directory
/// surfaces as an error from the backend.
pub fn render_time_series(
    trajectory: &Trajectory,
    path: &Path,
    config: &PlotConfig,
) -> Result<()> {
    let steps = trajectory.step_indices();

    let series = [
        ("Carbon in Rock (GtC)", trajectory.rock(), config.rock_color),
        (
            "Carbon in Atmosphere (GtC)",
            trajectory.atmosphere(),
            config.atmosphere_color,
        ),
        (
            "Global Temperature (°C)",
            trajectory.temperature(),
            config.temperature_color,
        ),
    ];

    // Global value range across all three series, with 10% headroom. A
    // single-step trajectory still needs a non-empty axis.
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (_, values, _) in &series {
        for &v in values.iter() {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
    }
    let y_pad = (0.1 * (y_max - y_min)).max(1.0);
    let x_max = ((trajectory.len() - 1) as f64).max(1.0);

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 32.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, (y_min - y_pad)..(y_max + y_pad))?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);
    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    for (label, values, color) in series {
        let line_width = config.line_width;
        chart
            .draw_series(LineSeries::new(
                steps.iter().zip(values.iter()).map(|(t, v)| (*t, *v)),
                color.stroke_width(line_width),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
