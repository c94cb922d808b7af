//! Top header with the polled endpoint and cadence.

use std::time::Duration;

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, endpoint: &str, interval: Duration) {
    let title = format!(
        "pulsetop — {} | polling every {}s  (press 'q' to quit)",
        endpoint,
        interval.as_secs()
    );
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}
