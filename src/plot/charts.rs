//! Plotters-powered PNG charts.
//!
//! Both charts are data-driven: series and bounds come from `plot::layout`,
//! so the functions here only draw. Text uses the embedded font registered by
//! `plot::font`.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::domain::{AnalysisConfig, DerivedRecord};
use crate::plot::font::CHART_FONT_FAMILY;
use crate::plot::layout::{
    BAR_HALF_WIDTH, category_label, category_labels, category_range, gap_points, growth_points, value_range,
};

type DrawResult = Result<(), Box<dyn Error>>;

const GROWTH_COLOR: RGBColor = RGBColor(31, 119, 180);
const TARGET_COLOR: RGBColor = RGBColor(255, 127, 14);
const GAP_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Line chart of growth per quarter with a dashed target line.
pub fn draw_trend_chart(path: &Path, records: &[DerivedRecord], config: &AnalysisConfig) -> DrawResult {
    let root = BitMapBackend::new(path, (config.chart_width, config.chart_height)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels = category_labels(records);
    let points = growth_points(records);
    let (x0, x1) = category_range(records.len());
    let (y0, y1) = value_range(records.iter().map(|r| r.growth), config.target);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("MRR Growth Trend vs. Industry Target ({})", config.period),
            (CHART_FONT_FAMILY, 26).into_font(),
        )
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Quarter")
        .y_desc("MRR Growth")
        .x_labels(records.len() * 2 + 1)
        .y_labels(8)
        .x_label_formatter(&|v| category_label(&labels, *v))
        .y_label_formatter(&|v| format!("{v:.1}"))
        .label_style((CHART_FONT_FAMILY, 16).into_font())
        .draw()?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), GROWTH_COLOR.stroke_width(2)))?
        .label("MRR Growth (Quarterly)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GROWTH_COLOR.stroke_width(2)));
    chart.draw_series(points.iter().map(|&p| Circle::new(p, 5, GROWTH_COLOR.filled())))?;

    chart
        .draw_series(DashedLineSeries::new(
            vec![(x0, config.target), (x1, config.target)],
            10,
            6,
            TARGET_COLOR.stroke_width(2),
        ))?
        .label(format!("Industry Target ({})", config.target))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], TARGET_COLOR.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((CHART_FONT_FAMILY, 16).into_font())
        .draw()?;

    root.present()?;
    Ok(())
}

/// Bar chart of gap-to-target per quarter with a zero line.
pub fn draw_gap_chart(path: &Path, records: &[DerivedRecord], config: &AnalysisConfig) -> DrawResult {
    let root = BitMapBackend::new(path, (config.chart_width, config.chart_height)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels = category_labels(records);
    let bars = gap_points(records);
    let (x0, x1) = category_range(records.len());
    let (y0, y1) = value_range(records.iter().map(|r| r.gap_to_target), 0.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Gap to Industry Target by Quarter ({})", config.period),
            (CHART_FONT_FAMILY, 26).into_font(),
        )
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Quarter")
        .y_desc(format!("Gap (Growth - {})", config.target))
        .x_labels(records.len() * 2 + 1)
        .y_labels(8)
        .x_label_formatter(&|v| category_label(&labels, *v))
        .y_label_formatter(&|v| format!("{v:.1}"))
        .label_style((CHART_FONT_FAMILY, 16).into_font())
        .draw()?;

    chart
        .draw_series(bars.iter().map(|&(x, gap)| {
            Rectangle::new([(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, gap)], GAP_COLOR.filled())
        }))?
        .label("Gap to Target")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], GAP_COLOR.filled()));

    chart.draw_series(LineSeries::new(vec![(x0, 0.0), (x1, 0.0)], BLACK.stroke_width(1)))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((CHART_FONT_FAMILY, 16).into_font())
        .draw()?;

    root.present()?;
    Ok(())
}
