use plotters::coord::ranged1d::SegmentValue;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::io::Cursor;
use tracing::debug;

use crate::styles::{ChartStyle, ChartTheme, PALETTE};
use crate::{ChartRenderer, RenderError, Result};

const FONT: &str = "sans-serif";
/// Smallest canvas side that leaves room for the title, axes and labels.
pub const MIN_CANVAS_SIDE: u32 = 160;

/// [`ChartRenderer`] backed by plotters' bitmap backend; PNG encoding via `image`.
#[derive(Debug, Clone, Default)]
pub struct PlottersRenderer {
    theme: ChartTheme,
    style: ChartStyle,
}

impl PlottersRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Height reserved under the bars for rotated labels, grown with the longest label.
    /// Never more than half the canvas.
    pub(crate) fn x_label_area(&self, data: &[(String, u64)], height: u32) -> u32 {
        let longest = data
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0) as u32;
        (longest * self.style.font_size * 6 / 10 + 20)
            .max(40)
            .min(height / 2)
    }
}

fn check_canvas((width, height): (u32, u32)) -> Result<()> {
    if width < MIN_CANVAS_SIDE || height < MIN_CANVAS_SIDE {
        return Err(RenderError::CanvasTooSmall { width, height });
    }
    Ok(())
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>> {
    let image = image::RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| RenderError::Encode("pixel buffer does not match canvas size".to_string()))?;
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

impl ChartRenderer for PlottersRenderer {
    fn bar_chart(&self, title: &str, data: &[(String, u64)]) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Err(RenderError::EmptyData);
        }

        check_canvas(self.style.bar_size)?;
        let (width, height) = self.style.bar_size;
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        let labels: Vec<String> = data.iter().map(|(label, _)| label.clone()).collect();
        let max = data.iter().map(|(_, n)| *n).max().unwrap_or(0);
        let y_max = max + (max / 10).max(1);

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&self.theme.background_color).map_err(draw_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(
                    title,
                    (FONT, self.style.title_font_size)
                        .into_font()
                        .color(&self.theme.text_color),
                )
                .margin(self.style.margin)
                .x_label_area_size(self.x_label_area(data, height))
                .y_label_area_size(self.style.label_area_size)
                .build_cartesian_2d((0..data.len()).into_segmented(), 0u64..y_max)
                .map_err(draw_err)?;

            let label_for = |v: &SegmentValue<usize>| match v {
                SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            };

            chart
                .configure_mesh()
                .disable_x_mesh()
                .bold_line_style(self.theme.grid_color)
                .light_line_style(TRANSPARENT)
                .axis_style(self.theme.axis_color)
                .y_desc("Commits")
                .x_labels(data.len())
                .x_label_formatter(&label_for)
                .x_label_style(
                    (FONT, self.style.font_size)
                        .into_font()
                        .color(&self.theme.text_color)
                        .transform(FontTransform::Rotate90)
                        .pos(Pos::new(HPos::Left, VPos::Center)),
                )
                .y_label_style(
                    (FONT, self.style.font_size)
                        .into_font()
                        .color(&self.theme.text_color),
                )
                .draw()
                .map_err(draw_err)?;

            chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(self.theme.bar_color.filled())
                        .margin(self.style.bar_margin)
                        .data(data.iter().enumerate().map(|(i, (_, n))| (i, *n))),
                )
                .map_err(draw_err)?;

            root.present().map_err(draw_err)?;
        }

        debug!(bars = data.len(), max, "Bar chart drawn");
        encode_png(buffer, width, height)
    }

    fn pie_chart(&self, title: &str, data: &[(String, u64)]) -> Result<Vec<u8>> {
        if data.iter().map(|(_, n)| *n).sum::<u64>() == 0 {
            return Err(RenderError::EmptyData);
        }

        check_canvas(self.style.pie_size)?;
        let (width, height) = self.style.pie_size;
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        let sizes: Vec<f64> = data.iter().map(|(_, n)| *n as f64).collect();
        let colors: Vec<RGBColor> = (0..data.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();
        let labels: Vec<&str> = data.iter().map(|(label, _)| label.as_str()).collect();

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&self.theme.background_color).map_err(draw_err)?;
            let area = root
                .titled(
                    title,
                    (FONT, self.style.title_font_size)
                        .into_font()
                        .color(&self.theme.text_color),
                )
                .map_err(draw_err)?;

            let (area_w, area_h) = area.dim_in_pixel();
            let center = ((area_w / 2) as i32, (area_h / 2) as i32);
            let radius = f64::from(area_w.min(area_h)) * 0.32;

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.start_angle(-90.0);
            pie.label_style(
                (FONT, self.style.font_size)
                    .into_font()
                    .color(&self.theme.text_color),
            );
            pie.percentages(
                (FONT, self.style.font_size)
                    .into_font()
                    .color(&self.theme.slice_text_color),
            );
            area.draw(&pie).map_err(draw_err)?;

            root.present().map_err(draw_err)?;
        }

        debug!(slices = data.len(), "Pie chart drawn");
        encode_png(buffer, width, height)
    }
}
