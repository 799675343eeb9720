//! Bar-chart rendering for the length-bucketed pass.

use std::path::Path;

use plotters::prelude::*;
use sqleval::{Aggregates, EvalResult, length::LengthCategory};

const EXACT_COLOR: RGBColor = RGBColor(255, 165, 0); // orange
const PARTIAL_COLOR: RGBColor = RGBColor(128, 0, 128); // purple

/// Render a grouped bar chart comparing exact and partial match percentages
/// per length bucket: one pair of bars per category, y in [0, 100].
pub fn render_match_chart(
    path: &Path,
    results: &[(LengthCategory, Aggregates)],
) -> EvalResult<()> {
    let root = SVGBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Match Percentage by Query Length", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0usize..results.len()).into_segmented(), 0f64..100f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Length Category")
        .y_desc("Matching Percentage")
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => results
                .get(*i)
                .map(|(category, _)| category.to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()?;

    // left half of each segment is the exact series, right half the partial
    chart
        .draw_series(results.iter().enumerate().map(|(i, (_, aggregates))| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::CenterOf(i), aggregates.exact_match_percentage),
                ],
                EXACT_COLOR.filled(),
            )
        }))?
        .label("Exact Matches")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], EXACT_COLOR.filled()));

    chart
        .draw_series(results.iter().enumerate().map(|(i, (_, aggregates))| {
            Rectangle::new(
                [
                    (SegmentValue::CenterOf(i), 0.0),
                    (
                        SegmentValue::Exact(i + 1),
                        aggregates.average_partial_match,
                    ),
                ],
                PARTIAL_COLOR.filled(),
            )
        }))?
        .label("Partial Matches")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], PARTIAL_COLOR.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
