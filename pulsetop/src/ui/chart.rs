//! Time-series line chart for one metric.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::ui::theme;
use crate::ui::util::fmt_axis;

/// Line chart of one derived series over the window's time labels. Samples
/// missing the metric leave a gap rather than plotting zero; an empty series
/// renders the bordered frame only.
pub fn draw_series_chart(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    labels: &[&str],
    series: &[Option<f64>],
    color: Color,
) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|y| (i as f64, y)))
        .collect();
    if points.is_empty() {
        f.render_widget(block, area);
        return;
    }

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(_, y) in &points {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    // Flat series still needs a visible band
    if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    } else {
        let pad = (y_max - y_min) * 0.05;
        y_min -= pad;
        y_max += pad;
    }
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;

    let x_labels: Vec<Span> = match (labels.first(), labels.last()) {
        (Some(a), Some(b)) if labels.len() > 1 => vec![Span::raw(a.to_string()), Span::raw(b.to_string())],
        (Some(a), _) => vec![Span::raw(a.to_string())],
        _ => Vec::new(),
    };
    let y_mid = (y_min + y_max) / 2.0;
    let y_labels = vec![
        Span::raw(fmt_axis(y_min)),
        Span::raw(fmt_axis(y_mid)),
        Span::raw(fmt_axis(y_max)),
    ];

    let dataset = Dataset::default()
        .name(title.to_string())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme::AXIS))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme::AXIS))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}
