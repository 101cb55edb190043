//! Chart rendering trait and the line-chart implementation.

use crate::window::WindowedSeries;
use image::{ImageOutputFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use quotegraph_common::{QuoteGraphError, Result};
use std::io::Cursor;

/// Series line color, matplotlib's default blue.
const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Trait for rendering a windowed series to an encoded image.
pub trait ChartRenderer {
    /// Render the series under the given title, returning PNG bytes.
    fn render(&self, series: &WindowedSeries, title: &str) -> Result<Vec<u8>>;
}

/// Renders a windowed series as a single-line chart on a white background.
///
/// Points are plotted at their series index; the x axis shows the series'
/// down-sampled timestamp labels, rotated vertically so intraday timestamps
/// fit.
pub struct LineChartRenderer {
    width: u32,
    height: u32,
}

impl LineChartRenderer {
    /// Create a renderer producing images of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Vertical axis bounds with a small margin so the line never touches
    /// the plot edge. A flat series still gets a non-degenerate range.
    fn value_range(series: &WindowedSeries) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (_, value) in &series.points {
            min = min.min(*value);
            max = max.max(*value);
        }

        let padding = ((max - min) * 0.05).max(max.abs() * 0.001).max(0.5);
        (min - padding, max + padding)
    }
}

impl Default for LineChartRenderer {
    fn default() -> Self {
        Self::new(1000, 600)
    }
}

impl ChartRenderer for LineChartRenderer {
    fn render(&self, series: &WindowedSeries, title: &str) -> Result<Vec<u8>> {
        if series.points.is_empty() {
            return Err(QuoteGraphError::chart("cannot render an empty series"));
        }

        let mut buffer = vec![0u8; (self.width * self.height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| QuoteGraphError::chart(format!("failed to fill background: {e}")))?;

            let last_index = (series.points.len() - 1).max(1) as i32;
            let (y_min, y_max) = Self::value_range(series);

            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 24))
                .margin(12)
                .x_label_area_size(90)
                .y_label_area_size(70)
                .build_cartesian_2d(0..last_index, y_min..y_max)
                .map_err(|e| QuoteGraphError::chart(format!("failed to build chart: {e}")))?;

            let label_style = TextStyle::from(("sans-serif", 12).into_font())
                .transform(FontTransform::Rotate90)
                .pos(Pos::new(HPos::Center, VPos::Top));

            chart
                .configure_mesh()
                .x_labels(series.points.len())
                .x_label_style(label_style)
                .x_label_formatter(&|index: &i32| {
                    // only indices carrying a down-sampled label get text
                    series
                        .label_at(*index as usize)
                        .unwrap_or_default()
                        .to_string()
                })
                .y_label_formatter(&|value: &f64| format!("{value:.2}"))
                .draw()
                .map_err(|e| QuoteGraphError::chart(format!("failed to draw mesh: {e}")))?;

            chart
                .draw_series(LineSeries::new(
                    series
                        .points
                        .iter()
                        .enumerate()
                        .map(|(i, (_, value))| (i as i32, *value)),
                    &LINE_COLOR,
                ))
                .map_err(|e| QuoteGraphError::chart(format!("failed to draw series: {e}")))?;

            root.present()
                .map_err(|e| QuoteGraphError::chart(format!("failed to finalize chart: {e}")))?;
        }

        let image = RgbImage::from_raw(self.width, self.height, buffer)
            .ok_or_else(|| QuoteGraphError::chart("rendered buffer has unexpected size"))?;
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
            .map_err(|e| QuoteGraphError::chart_with_source("failed to encode PNG", e))?;

        Ok(png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample_series(len: usize) -> WindowedSeries {
        let points: Vec<(String, f64)> = (0..len)
            .map(|i| (format!("2020-01-{:02}", i + 1), 100.0 + i as f64))
            .collect();
        let labels = points
            .iter()
            .enumerate()
            .map(|(i, (ts, _))| (i, ts.clone()))
            .collect();
        WindowedSeries { points, labels }
    }

    #[test]
    fn test_render_produces_png_bytes() {
        let renderer = LineChartRenderer::new(400, 300);
        let png = renderer.render(&sample_series(10), "AAPL").unwrap();

        assert!(png.len() > PNG_MAGIC.len());
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_render_single_point() {
        let renderer = LineChartRenderer::new(400, 300);
        let png = renderer.render(&sample_series(1), "AAPL").unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_render_flat_series() {
        let points: Vec<(String, f64)> =
            (0..5).map(|i| (format!("t{i}"), 42.0)).collect();
        let series = WindowedSeries {
            labels: vec![(0, "t0".to_string())],
            points,
        };

        let renderer = LineChartRenderer::new(400, 300);
        let png = renderer.render(&series, "FLAT").unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_render_rejects_empty_series() {
        let renderer = LineChartRenderer::default();
        let empty = WindowedSeries {
            points: vec![],
            labels: vec![],
        };

        let err = renderer.render(&empty, "AAPL").unwrap_err();
        assert!(err.to_string().contains("empty series"));
    }

    #[test]
    fn test_value_range_has_padding() {
        let (min, max) = LineChartRenderer::value_range(&sample_series(10));
        assert!(min < 100.0);
        assert!(max > 109.0);
    }
}
