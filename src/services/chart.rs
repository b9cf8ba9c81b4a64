//! Weather graph rendering
//!
//! Rasterizes the snapshot's 24-hour series to `weather-graph.png`: a filled
//! temperature curve with precipitation and humidity traces, per-point value
//! labels, hour labels, and a vertical marker at the current time.
//!
//! All three series share the fixed [-10, 110] degree axis. For the
//! percentage series that scaling is not physically meaningful, but it is
//! the chart's established visual identity and is deliberate; do not "fix"
//! it without changing the display design.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use plotters::prelude::*;

use crate::models::WeatherSnapshot;
use crate::utils::DashboardError;

pub const WIDTH: u32 = 780;
pub const HEIGHT: u32 = 160;

const PLOT_X: i32 = 20;
const PLOT_Y: i32 = 20;
const PLOT_W: i32 = 760;
const PLOT_H: i32 = 120;

const RANGE_MIN: f64 = -10.0;
const RANGE_MAX: f64 = 110.0;

/// Render the weather graph for one snapshot.
///
/// `now` positions the current-time marker and is passed in so tests control
/// the clock. The image is rendered to a temporary sibling file and renamed
/// over the target so readers never see a partial PNG.
///
/// Series with fewer than two points produce a blank canvas instead of an
/// error; stale data (no timestamp pair bracketing `now`) just omits the
/// marker.
pub fn render(
    path: &Path,
    snapshot: &WeatherSnapshot,
    now: NaiveDateTime,
) -> Result<(), DashboardError> {
    let tmp = tmp_path(path);

    {
        let root = BitMapBackend::new(&tmp, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        if snapshot.temps.len() >= 2 {
            draw_series(&root, snapshot, now)?;
        }

        root.present().map_err(chart_err)?;
    }

    std::fs::rename(&tmp, path)?;
    Ok(())
}

fn draw_series<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    snapshot: &WeatherSnapshot,
    now: NaiveDateTime,
) -> Result<(), DashboardError> {
    let step_x = PLOT_W as f64 / (snapshot.temps.len() - 1) as f64;

    let temp_points = project(&snapshot.temps, step_x);
    let precip_points = project(&snapshot.precipitation, step_x);
    let humidity_points = project(&snapshot.humidity, step_x);

    // Filled area under the temperature curve.
    let first = temp_points[0];
    let last = temp_points[temp_points.len() - 1];
    let mut area = Vec::with_capacity(temp_points.len() + 2);
    area.push((first.0, PLOT_Y + PLOT_H));
    area.extend_from_slice(&temp_points);
    area.push((last.0, PLOT_Y + PLOT_H));
    root.draw(&Polygon::new(area, YELLOW.filled()))
        .map_err(chart_err)?;

    root.draw(&PathElement::new(temp_points.clone(), RED.stroke_width(2)))
        .map_err(chart_err)?;
    if precip_points.len() >= 2 {
        root.draw(&PathElement::new(
            precip_points.clone(),
            GREEN.stroke_width(2),
        ))
        .map_err(chart_err)?;
    }
    if humidity_points.len() >= 2 {
        root.draw(&PathElement::new(
            humidity_points.clone(),
            BLUE.stroke_width(2),
        ))
        .map_err(chart_err)?;
    }

    // Value labels; temperature is drawn last so it overprints.
    let label_font = ("sans-serif", 10).into_font().color(&BLACK);
    for (i, &(px, py)) in precip_points.iter().enumerate() {
        let label = format!("{}%", snapshot.precipitation[i]);
        root.draw(&Text::new(label, (px - 10, py - 10), label_font.clone()))
            .map_err(chart_err)?;
    }
    for (i, &(px, py)) in humidity_points.iter().enumerate() {
        let label = format!("{}%", snapshot.humidity[i]);
        root.draw(&Text::new(label, (px - 10, py - 10), label_font.clone()))
            .map_err(chart_err)?;
    }
    for (i, &(px, py)) in temp_points.iter().enumerate() {
        let label = format!("{}°", snapshot.temps[i].round());
        root.draw(&Text::new(label, (px - 10, py - 10), label_font.clone()))
            .map_err(chart_err)?;
    }

    // Hour labels along the bottom.
    let times: Vec<Option<NaiveDateTime>> = snapshot.times.iter().map(|t| parse_time(t)).collect();
    for (i, &(px, _)) in temp_points.iter().enumerate() {
        let Some(Some(t)) = times.get(i) else {
            continue;
        };
        let label = t.format("%-I%p").to_string();
        root.draw(&Text::new(
            label,
            (px - 15, PLOT_Y + PLOT_H + 10),
            label_font.clone(),
        ))
        .map_err(chart_err)?;
    }

    // Vertical marker at the current time; omitted when the data is stale.
    let xs: Vec<i32> = temp_points.iter().map(|p| p.0).collect();
    let parsed: Vec<NaiveDateTime> = times.iter().flatten().copied().collect();
    if parsed.len() == snapshot.times.len() {
        if let Some(px) = marker_x(&xs, &parsed, now) {
            root.draw(&PathElement::new(
                vec![(px, PLOT_Y), (px, PLOT_Y + PLOT_H)],
                BLACK.stroke_width(2),
            ))
            .map_err(chart_err)?;
        }
    }

    Ok(())
}

/// Map a value series to pixel coordinates on the shared [-10, 110] axis.
fn project(values: &[f64], step_x: f64) -> Vec<(i32, i32)> {
    let range = RANGE_MAX - RANGE_MIN;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let px = PLOT_X + (i as f64 * step_x).round() as i32;
            let py = PLOT_Y + PLOT_H - (((v - RANGE_MIN) / range) * PLOT_H as f64).round() as i32;
            (px, py)
        })
        .collect()
}

/// X coordinate of the current-time marker.
///
/// Finds the pair of hourly timestamps strictly bracketing `now` and
/// linearly interpolates between their x positions. `None` when no pair
/// brackets `now`.
fn marker_x(xs: &[i32], times: &[NaiveDateTime], now: NaiveDateTime) -> Option<i32> {
    let n = xs.len().min(times.len());
    for i in 0..n.saturating_sub(1) {
        if now > times[i] && now < times[i + 1] {
            let span = (times[i + 1] - times[i]).num_seconds();
            if span <= 0 {
                continue;
            }
            let ratio = (now - times[i]).num_seconds() as f64 / span as f64;
            let px = xs[i] as f64 + ratio * (xs[i + 1] - xs[i]) as f64;
            return Some(px.round() as i32);
        }
    }
    None
}

/// Open-Meteo emits local timestamps like `2026-08-23T14:00`.
fn parse_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

fn tmp_path(path: &Path) -> PathBuf {
    // Keep the .png extension so the bitmap backend picks the right encoder.
    let mut name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string());
    name.push_str(".tmp.png");
    path.with_file_name(name)
}

fn chart_err<E: std::fmt::Display>(e: E) -> DashboardError {
    DashboardError::Chart(e.to_string())
}
