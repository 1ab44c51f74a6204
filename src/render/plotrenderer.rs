use std::fmt::Display;
use std::ops::Range;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use plotters::prelude::*;

use crate::catalog::functionspec::FunctionSpec;
use crate::evaluation::curve::Curve;
use crate::evaluation::evaluationerror::EvaluationError;
use crate::evaluation::evaluationresult::EvaluationResult;
use crate::render::plotstyle::*;

pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Base64 encoded image plus the MIME type needed to decode it.
#[derive(Debug, Clone)]
pub struct PlotImage {
    data: String,
    mime_type: &'static str
}

impl PlotImage {
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }
}

pub struct PlotRenderer {
    width: u32,
    height: u32
}

fn render_error<E: Display>(error: E) -> EvaluationError {
    EvaluationError::Render(error.to_string())
}

fn padded_y_range(curve: &Curve, marker: Option<&EvaluationResult>) -> Range<f64> {
    let (mut lo, mut hi) = curve.y_bounds().unwrap_or((-1.0, 1.0));
    if let Some(m) = marker {
        lo = lo.min(m.output);
        hi = hi.max(m.output);
    }
    let span = hi - lo;
    if span < f64::EPSILON {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = span * Y_PADDING_FRACTION;
    (lo - pad)..(hi + pad)
}

/// Splits the segment `from -> to` into dash segments.
fn dashes(from: (f64, f64), to: (f64, f64), dash: f64) -> Vec<[(f64, f64); 2]> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 || dash <= 0.0 {
        return Vec::new();
    }
    let at = |t: f64| (from.0 + dx * t / length, from.1 + dy * t / length);
    let mut segments = Vec::new();
    let mut t = 0.0;
    while t < length {
        let end = (t + dash).min(length);
        segments.push([at(t), at(end)]);
        t += 2.0 * dash;
    }
    segments
}

impl PlotRenderer {
    pub fn new(width: u32, height: u32) -> PlotRenderer {
        PlotRenderer { width, height }
    }

    pub fn render(&self,
                  spec: &FunctionSpec,
                  curve: &Curve,
                  marker: Option<&EvaluationResult>) -> Result<PlotImage, EvaluationError> {
        let mut svg = String::new();
        self.draw(&mut svg, spec, curve, marker)?;
        Ok(PlotImage { data: STANDARD.encode(svg), mime_type: SVG_MIME_TYPE })
    }

    fn draw(&self,
            svg: &mut String,
            spec: &FunctionSpec,
            curve: &Curve,
            marker: Option<&EvaluationResult>) -> Result<(), EvaluationError> {
        let root = SVGBackend::with_string(svg, (self.width, self.height)).into_drawing_area();
        root.fill(&BACKGROUND).map_err(render_error)?;

        let x_range = spec.domain().min()..spec.domain().max();
        let y_range = padded_y_range(curve, marker);
        let title = format!("{} Activation Function", spec.display_name());

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT_FAMILY, TITLE_FONT_SIZE).into_font().style(FontStyle::Bold).color(&FOREGROUND))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range.clone(), y_range.clone())
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .bold_line_style(GRID.mix(0.3))
            .light_line_style(TRANSPARENT)
            .axis_style(FOREGROUND)
            .label_style((FONT_FAMILY, LABEL_FONT_SIZE).into_font().color(&FOREGROUND))
            .axis_desc_style((FONT_FAMILY, AXIS_FONT_SIZE).into_font().color(&FOREGROUND))
            .x_desc("Input (x)")
            .y_desc("Output f(x)")
            .draw()
            .map_err(render_error)?;

        let zero_style = FOREGROUND.mix(0.5).stroke_width(1);
        if y_range.contains(&0.0) {
            chart
                .draw_series(std::iter::once(PathElement::new(vec![(x_range.start, 0.0), (x_range.end, 0.0)], zero_style)))
                .map_err(render_error)?;
        }
        if x_range.contains(&0.0) {
            chart
                .draw_series(std::iter::once(PathElement::new(vec![(0.0, y_range.start), (0.0, y_range.end)], zero_style)))
                .map_err(render_error)?;
        }

        let curve_style = CURVE.stroke_width(CURVE_WIDTH);
        chart
            .draw_series(LineSeries::new(curve.points().map(|pt| (pt.x(), pt.y())), curve_style))
            .map_err(render_error)?
            .label(spec.display_name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], curve_style));

        if let Some(m) = marker {
            let guide_style = MARKER.mix(0.7).stroke_width(2);
            let vertical = dashes((m.input, y_range.start), (m.input, y_range.end), (y_range.end - y_range.start) * DASH_FRACTION);
            let horizontal = dashes((x_range.start, m.output), (x_range.end, m.output), (x_range.end - x_range.start) * DASH_FRACTION);
            chart
                .draw_series(vertical.into_iter().chain(horizontal).map(|seg| PathElement::new(seg.to_vec(), guide_style)))
                .map_err(render_error)?;
            chart
                .draw_series(std::iter::once(Circle::new((m.input, m.output), MARKER_RADIUS, MARKER.filled())))
                .map_err(render_error)?
                .label(m.marker_label())
                .legend(|(x, y)| Circle::new((x + 10, y), MARKER_RADIUS - 2, MARKER.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(LEGEND_BACKGROUND.mix(0.9))
            .border_style(CURVE)
            .label_font((FONT_FAMILY, LABEL_FONT_SIZE).into_font().color(&FOREGROUND))
            .draw()
            .map_err(render_error)?;

        root.present().map_err(render_error)
    }
}
