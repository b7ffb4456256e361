use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use tracing::debug;

use crate::constants::{
    CHART_MAX_Y_TICKS, CHART_SIZE, CHART_Y_LIMIT_MM, CHART_Y_STEP_MM, RAIN_GLYPH, SUN_GLYPH,
};
use crate::error::PipelineError;
use crate::models::ForecastTable;

const BAR_FILL: RGBColor = RGBColor(173, 216, 230);
const BAR_EDGE: RGBColor = RGBColor(0, 0, 255);
const FONT: &str = "sans-serif";

/// Draws the forecast as an SVG bar chart, one bar per day.
///
/// Each bar carries its value on top and a rain or sun glyph above that.
pub fn render_svg(table: &ForecastTable, title: &str) -> Result<String, PipelineError> {
    if table.is_empty() {
        return Err(PipelineError::Chart("no forecast days to draw".to_string()));
    }

    let rows = table.rows();
    let y_max = y_axis_limit(table.peak());
    let label_lift = y_max * 0.01;
    let glyph_lift = y_max * 0.05;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT, 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d((0..rows.len()).into_segmented(), 0f64..y_max)
            .map_err(draw_error)?;

        let date_label = |value: &SegmentValue<usize>| match value {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => rows
                .get(*i)
                .map(|row| row.date.format("%d/%m").to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        };
        let amount_label = |value: &f64| format!("{value:.0}");

        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(WHITE)
            .bold_line_style(BLACK.mix(0.15))
            .x_labels(rows.len() + 1)
            .y_labels(y_tick_count(y_max))
            .x_label_formatter(&date_label)
            .y_label_formatter(&amount_label)
            .x_desc("Date")
            .y_desc("Precipitation (mm)")
            .axis_desc_style((FONT, 16))
            .draw()
            .map_err(draw_error)?;

        let bars = || rows.iter().enumerate().map(|(i, row)| (i, row.precipitation));

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR_FILL.mix(0.9).filled())
                    .margin(12)
                    .data(bars()),
            )
            .map_err(draw_error)?;
        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR_EDGE.stroke_width(1))
                    .margin(12)
                    .data(bars()),
            )
            .map_err(draw_error)?;

        let value_style =
            TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(rows.iter().enumerate().map(|(i, row)| {
                Text::new(
                    format!("{:.2}", row.precipitation),
                    (SegmentValue::CenterOf(i), row.precipitation + label_lift),
                    value_style.clone(),
                )
            }))
            .map_err(draw_error)?;

        let glyph_style =
            TextStyle::from((FONT, 28).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(rows.iter().enumerate().map(|(i, row)| {
                let glyph = if row.is_rainy() { RAIN_GLYPH } else { SUN_GLYPH };
                Text::new(
                    glyph,
                    (SegmentValue::CenterOf(i), row.precipitation + glyph_lift),
                    glyph_style.clone(),
                )
            }))
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
    }

    debug!("Rendered chart with {} bars ({} bytes)", rows.len(), svg.len());
    Ok(svg)
}

/// Upper bound of the precipitation axis: the fixed limit, or the next tick
/// that leaves headroom above the tallest bar.
pub fn y_axis_limit(peak: f64) -> f64 {
    let needed = peak * 1.15;
    if needed <= CHART_Y_LIMIT_MM {
        CHART_Y_LIMIT_MM
    } else {
        (needed / CHART_Y_STEP_MM).ceil() * CHART_Y_STEP_MM
    }
}

/// Tick hint for the precipitation axis, one per step up to a fixed cap
fn y_tick_count(y_max: f64) -> usize {
    ((y_max / CHART_Y_STEP_MM) as usize)
        .saturating_add(1)
        .min(CHART_MAX_Y_TICKS)
}

fn draw_error(e: impl Display) -> PipelineError {
    PipelineError::Chart(e.to_string())
}
