//! Band score history charts.
//!
//! [`ProgressRenderer`] draws a line chart with circular markers for
//! `(session, band score)` points, encodes it as PNG,
//! and optionally base64-encodes the result for embedding in JSON.
//!
//! Title and axis labels need a TrueType font. One is registered with
//! plotters the first time a labelled renderer is built, from the configured
//! path or a list of common system locations. Without a usable font the
//! chart is drawn without text.

use std::io::Cursor;
use std::sync::OnceLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bandwise_types::config::ChartConfig;
use plotters::prelude::*;
use plotters::style::FontStyle;
use tracing::{debug, info, warn};

use crate::error::{CoreError, Result};

pub const CHART_TITLE: &str = "User Progress Over Time";
pub const X_LABEL: &str = "Session";
pub const Y_LABEL: &str = "Band Score";

const FONT_FAMILY: &str = "sans-serif";

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Whether a font was registered. Set once per process; the first
/// configured path wins.
static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOR: RGBColor = RGBColor(220, 220, 220);
const MARKER_RADIUS: i32 = 4;
/// Upper bound on grid lines per axis in text-free charts.
const MAX_GRID_LINES: usize = 10;

/// Renders band score histories to PNG.
#[derive(Debug, Clone)]
pub struct ProgressRenderer {
    width: u32,
    height: u32,
    labels: bool,
}

impl ProgressRenderer {
    /// Build a renderer from config, registering a font if one is found.
    pub fn new(config: &ChartConfig) -> Self {
        let labels = *FONT_REGISTERED.get_or_init(|| register_font(config.font_path.as_deref()));
        Self {
            width: config.width,
            height: config.height,
            labels,
        }
    }

    /// A renderer that never draws text.
    pub fn without_labels(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            labels: false,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Render `(session, score)` points as a PNG image.
    pub fn render_png(&self, points: &[(f64, f64)]) -> Result<Vec<u8>> {
        if points.is_empty() {
            return Err(CoreError::Render("no band scores to plot".into()));
        }
        if let Some((_, bad)) = points.iter().find(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(CoreError::Render(format!("band score {bad} is not finite")));
        }
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Render(format!(
                "chart size {}x{} is empty",
                self.width, self.height
            )));
        }

        let mut buf = vec![0u8; self.width as usize * self.height as usize * 3];

        if self.labels {
            if let Err(e) = self.draw(&mut buf, points, true) {
                warn!(error = %e, "labelled chart failed, retrying without text");
                buf.fill(0);
                self.draw(&mut buf, points, false)?;
            }
        } else {
            self.draw(&mut buf, points, false)?;
        }

        let image = image::RgbImage::from_raw(self.width, self.height, buf)
            .ok_or_else(|| CoreError::Render("pixel buffer size mismatch".into()))?;
        let mut png = Cursor::new(Vec::new());
        image
            .write_to(&mut png, image::ImageFormat::Png)
            .map_err(render_err)?;

        debug!(points = points.len(), bytes = png.get_ref().len(), "progress chart rendered");
        Ok(png.into_inner())
    }

    /// Render `points` and base64-encode the PNG bytes.
    pub fn render_base64(&self, points: &[(f64, f64)]) -> Result<String> {
        Ok(STANDARD.encode(self.render_png(points)?))
    }

    fn draw(&self, buf: &mut [u8], points: &[(f64, f64)], labelled: bool) -> Result<()> {
        let root = BitMapBackend::with_buffer(buf, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let (x_range, y_range) = axis_ranges(points);
        let (x_lo, x_hi) = (x_range.start, x_range.end);
        let (y_lo, y_hi) = (y_range.start, y_range.end);

        let mut builder = ChartBuilder::on(&root);
        builder.margin(20u32);
        if labelled {
            builder
                .caption(CHART_TITLE, (FONT_FAMILY, 22).into_font())
                .x_label_area_size(40u32)
                .y_label_area_size(50u32);
        }
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_err)?;

        if labelled {
            let x_formatter = |x: &f64| {
                if x.fract().abs() < 1e-9 {
                    format!("{x:.0}")
                } else {
                    String::new()
                }
            };
            chart
                .configure_mesh()
                .light_line_style(GRID_COLOR)
                .x_labels(points.len().clamp(2, 12))
                .x_label_formatter(&x_formatter)
                .x_desc(X_LABEL)
                .y_desc(Y_LABEL)
                .draw()
                .map_err(render_err)?;
        } else {
            let vertical = grid_positions(x_lo + 0.5, x_hi - 0.5)
                .into_iter()
                .map(|x| PathElement::new(vec![(x, y_lo), (x, y_hi)], GRID_COLOR));
            chart.draw_series(vertical).map_err(render_err)?;

            let horizontal = grid_positions(y_lo, y_hi)
                .into_iter()
                .map(|y| PathElement::new(vec![(x_lo, y), (x_hi, y)], GRID_COLOR));
            chart.draw_series(horizontal).map_err(render_err)?;
        }

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                LINE_COLOR.stroke_width(2),
            ))
            .map_err(render_err)?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, MARKER_RADIUS, LINE_COLOR.filled())),
            )
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }
}

/// X spans half a session either side; y spans whole bands with a margin
/// of at least one band.
fn axis_ranges(points: &[(f64, f64)]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let n = points.len() as f64;
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });
    (0.5..n + 0.5, (min - 1.0).floor()..(max + 1.0).ceil())
}

/// Grid positions across `lo..=hi`: every whole unit when the span is
/// small, otherwise [`MAX_GRID_LINES`] evenly spaced steps.
fn grid_positions(lo: f64, hi: f64) -> Vec<f64> {
    let span = hi - lo;
    if !span.is_finite() || span < 0.0 {
        return Vec::new();
    }
    if span <= MAX_GRID_LINES as f64 {
        return (lo.ceil() as i64..=hi.floor() as i64).map(|v| v as f64).collect();
    }
    let step = span / MAX_GRID_LINES as f64;
    (0..=MAX_GRID_LINES).map(|i| lo + step * i as f64).collect()
}

fn render_err<E: std::fmt::Display>(e: E) -> CoreError {
    CoreError::Render(e.to_string())
}

fn register_font(configured: Option<&str>) -> bool {
    let candidates = configured.into_iter().chain(FONT_CANDIDATES.iter().copied());
    for path in candidates {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        // plotters keeps registered fonts for the life of the process.
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                info!(path, "chart font registered");
                return true;
            }
            Err(_) => warn!(path, "unusable chart font"),
        }
    }
    warn!("no chart font found; progress charts will be drawn without text");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandwise_types::progress::session_points;
    use std::time::{Duration, Instant};

    const BLUE_PIXEL: [u8; 3] = [LINE_COLOR.0, LINE_COLOR.1, LINE_COLOR.2];

    fn decode(png: &[u8]) -> image::RgbImage {
        image::load_from_memory(png).unwrap().to_rgb8()
    }

    fn render(renderer: &ProgressRenderer, scores: &[f64]) -> Result<Vec<u8>> {
        renderer.render_png(&session_points(scores))
    }

    /// Count runs of adjacent pixel columns holding a tall stack of line
    /// pixels. The line itself is a few pixels thick; a marker is
    /// `2 * MARKER_RADIUS + 1` tall.
    fn marker_columns(img: &image::RgbImage) -> usize {
        let tall = (2 * MARKER_RADIUS - 1) as usize;
        let mut runs = 0;
        let mut in_run = false;
        for x in 0..img.width() {
            let blue = (0..img.height())
                .filter(|&y| img.get_pixel(x, y).0 == BLUE_PIXEL)
                .count();
            let is_tall = blue >= tall;
            if is_tall && !in_run {
                runs += 1;
            }
            in_run = is_tall;
        }
        runs
    }

    #[test]
    fn renders_png_of_configured_size() {
        let renderer = ProgressRenderer::without_labels(320, 240);
        let png = render(&renderer, &[5.0, 6.0, 6.0, 7.0]).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let img = decode(&png);
        assert_eq!(img.dimensions(), (320, 240));
        assert!(img.pixels().any(|p| p.0 == BLUE_PIXEL));
        assert!(img.pixels().any(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn one_marker_per_session() {
        let renderer = ProgressRenderer::without_labels(320, 240);
        let points = session_points(&[5.0, 6.0, 6.0, 7.0]);
        assert_eq!(points.len(), 4);

        let img = decode(&renderer.render_png(&points).unwrap());
        assert_eq!(marker_columns(&img), 4);
    }

    #[test]
    fn single_point_renders() {
        let renderer = ProgressRenderer::without_labels(200, 150);
        let img = decode(&render(&renderer, &[6.5]).unwrap());
        assert!(img.pixels().any(|p| p.0 == BLUE_PIXEL));
        assert_eq!(marker_columns(&img), 1);
    }

    #[test]
    fn flat_history_renders() {
        let renderer = ProgressRenderer::without_labels(200, 150);
        assert!(render(&renderer, &[7.0, 7.0, 7.0]).is_ok());
    }

    #[test]
    fn huge_score_range_renders_quickly() {
        let renderer = ProgressRenderer::without_labels(320, 240);
        let started = Instant::now();
        for scores in [[0.0, 1e12], [5.0, 1e12], [-1e15, 1e15]] {
            let img = decode(&render(&renderer, &scores).unwrap());
            assert_eq!(img.dimensions(), (320, 240));
        }
        assert!(
            started.elapsed() < Duration::from_secs(10),
            "took {:?}",
            started.elapsed()
        );
    }

    #[test]
    fn empty_history_is_an_error() {
        let renderer = ProgressRenderer::without_labels(200, 150);
        assert!(matches!(renderer.render_png(&[]), Err(CoreError::Render(_))));
    }

    #[test]
    fn non_finite_score_is_an_error() {
        let renderer = ProgressRenderer::without_labels(200, 150);
        assert!(render(&renderer, &[5.0, f64::NAN]).is_err());
    }

    #[test]
    fn zero_size_chart_is_an_error() {
        let renderer = ProgressRenderer::without_labels(0, 0);
        assert!(matches!(
            render(&renderer, &[5.0, 6.0]),
            Err(CoreError::Render(_))
        ));
    }

    #[test]
    fn base64_round_trips_to_png() {
        let renderer = ProgressRenderer::without_labels(160, 120);
        let encoded = renderer.render_base64(&session_points(&[5.0, 6.0])).unwrap();
        let bytes = STANDARD.decode(encoded).unwrap();
        assert_eq!(decode(&bytes).dimensions(), (160, 120));
    }

    #[test]
    fn configured_renderer_works_with_or_without_fonts() {
        let config = ChartConfig {
            width: 400,
            height: 300,
            font_path: None,
        };
        let renderer = ProgressRenderer::new(&config);
        assert_eq!(renderer.dimensions(), (400, 300));
        let img = decode(&render(&renderer, &[4.0, 5.5, 6.0, 8.0]).unwrap());
        assert_eq!(img.dimensions(), (400, 300));
    }

    #[test]
    fn axis_ranges_pad_by_a_band() {
        let (x, y) = axis_ranges(&[(1.0, 5.0), (2.0, 6.5), (3.0, 7.0)]);
        assert_eq!(x, 0.5..3.5);
        assert_eq!(y, 4.0..8.0);
    }

    #[test]
    fn axis_ranges_single_point() {
        let (x, y) = axis_ranges(&[(1.0, 6.5)]);
        assert_eq!(x, 0.5..1.5);
        assert_eq!(y, 5.0..8.0);
    }

    #[test]
    fn grid_uses_whole_bands_for_small_spans() {
        assert_eq!(grid_positions(4.0, 8.0), vec![4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(grid_positions(1.0, 1.0), vec![1.0]);
    }

    #[test]
    fn grid_is_bounded_for_large_spans() {
        let ys = grid_positions(-1.0, 1e12 + 1.0);
        assert_eq!(ys.len(), MAX_GRID_LINES + 1);
        assert_eq!(ys[0], -1.0);
        assert!(ys.windows(2).all(|w| w[0] < w[1]));

        assert!(grid_positions(f64::MIN, f64::MAX).is_empty());
    }
}
