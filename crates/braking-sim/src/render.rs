//! Chart Rendering
//!
//! Draws the 2x3 panel figure: physics velocity and distance, parameter echo,
//! rule-of-thumb normal and danger ramps, and the hint panel.

use crate::error::SimError;
use crate::pipeline::SimulationOutcome;
use crate::settings::{AppConfig, ChartFormat};
use crate::summary::HINT_LINES;
use plotters::coord::Shift;
use plotters::prelude::*;
use rule_of_thumb::ThumbEstimate;
use std::fmt::Display;
use std::path::PathBuf;
use tracing::{debug, info};

const FIGURE_SIZE: (u32, u32) = (1500, 800);
const FONT: &str = "sans-serif";
const TITLE: &str = "Visualizing of the braking velocity and braking distance of a vehicle";

const ORANGE: RGBColor = RGBColor(255, 165, 0);
const DARK_GREEN: RGBColor = RGBColor(0, 100, 0);

const LINE_HEIGHT: i32 = 22;
const BOX_PADDING: i32 = 10;

fn draw_err(err: impl Display) -> SimError {
    SimError::Render(err.to_string())
}

/// Axis upper bound with headroom; degenerate curves still get a drawable range
fn axis_limit(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max.is_finite() && max > 0.0 {
        max * 1.05
    } else {
        1.0
    }
}

/// Writes the comparison chart to disk
pub struct ChartRenderer {
    output_dir: PathBuf,
    format: ChartFormat,
}

impl ChartRenderer {
    /// Create a renderer writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>, format: ChartFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
        }
    }

    /// Renderer for the configured directory and format
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.output_dir.clone(), config.format)
    }

    /// Path the chart for this outcome is written to
    pub fn output_path(&self, outcome: &SimulationOutcome) -> PathBuf {
        self.output_dir.join(format!(
            "{}.{}",
            outcome.summary.file_stem(),
            self.format.extension()
        ))
    }

    /// Draw and save the chart, returning its path
    pub fn render(&self, outcome: &SimulationOutcome) -> Result<PathBuf, SimError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_path(outcome);
        debug!("Rendering {:?} chart to {}", self.format, path.display());

        match self.format {
            ChartFormat::Svg => {
                let root = SVGBackend::new(&path, FIGURE_SIZE).into_drawing_area();
                draw_figure(&root, outcome)?;
            }
            ChartFormat::Png => {
                let root = BitMapBackend::new(&path, FIGURE_SIZE).into_drawing_area();
                draw_figure(&root, outcome)?;
            }
        }

        info!("Plots have been saved to {}", path.display());
        Ok(path)
    }
}

fn ramp_points(estimate: &ThumbEstimate) -> Vec<(f64, f64)> {
    estimate
        .times
        .iter()
        .copied()
        .zip(estimate.distances.iter().copied())
        .collect()
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    outcome: &SimulationOutcome,
) -> Result<(), SimError> {
    root.fill(&WHITE).map_err(draw_err)?;
    let body = root
        .titled(TITLE, (FONT, 24).into_font().color(&BLUE))
        .map_err(draw_err)?;
    let panels = body.split_evenly((2, 3));

    let summary = &outcome.summary;
    let samples = &outcome.series.samples;
    let thumb = &outcome.thumb;

    draw_curve(
        &panels[0],
        "Velocity",
        "Velocity in m/s",
        samples.iter().map(|s| (s.time_s, s.velocity_ms)).collect(),
        &ORANGE,
        &summary.velocity_lines(),
    )?;
    draw_curve(
        &panels[1],
        "Distance",
        "Distance in m",
        samples.iter().map(|s| (s.time_s, s.distance_m)).collect(),
        &RED,
        &summary.distance_lines(),
    )?;
    draw_text_box(&panels[2], &summary.parameter_lines())?;
    draw_curve(
        &panels[3],
        "Distance Rule of Thumb normal",
        "Distance in m",
        ramp_points(&thumb.normal),
        &RED,
        &summary.thumb_normal_lines(),
    )?;
    draw_curve(
        &panels[4],
        "Distance Rule of Thumb danger",
        "Distance in m",
        ramp_points(&thumb.danger),
        &RED,
        &summary.thumb_danger_lines(),
    )?;
    let hint: Vec<String> = HINT_LINES.iter().map(|line| line.to_string()).collect();
    draw_text_box(&panels[5], &hint)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_curve<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    y_desc: &str,
    points: Vec<(f64, f64)>,
    color: &RGBColor,
    info: &[String],
) -> Result<(), SimError> {
    let x_max = axis_limit(points.iter().map(|p| p.0));
    let y_max = axis_limit(points.iter().map(|p| p.1));

    let mut chart = ChartBuilder::on(area)
        .caption(caption, (FONT, 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Time in s")
        .y_desc(y_desc)
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(points, color))
        .map_err(draw_err)?;

    draw_text_box(area, info)
}

/// Centered dark-green box with one text line per entry
fn draw_text_box<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    lines: &[String],
) -> Result<(), SimError> {
    let (width, height) = area.dim_in_pixel();
    let (width, height) = (width as i32, height as i32);

    let box_width = width * 3 / 5;
    let box_height = LINE_HEIGHT * lines.len() as i32 + 2 * BOX_PADDING;
    let left = (width - box_width) / 2;
    let top = (height - box_height) / 2;

    area.draw(&Rectangle::new(
        [(left, top), (left + box_width, top + box_height)],
        DARK_GREEN.mix(0.7).filled(),
    ))
    .map_err(draw_err)?;

    let style = (FONT, 16).into_font().color(&WHITE);
    for (i, line) in lines.iter().enumerate() {
        let y = top + BOX_PADDING + i as i32 * LINE_HEIGHT;
        area.draw(&Text::new(line.clone(), (left + BOX_PADDING, y), style.clone()))
            .map_err(draw_err)?;
    }
    Ok(())
}
