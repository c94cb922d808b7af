//! Summary cards: latest value per tracked metric.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::types::Sample;
use crate::ui::util::fmt_value;

/// One card: metric title on the border, latest value centered inside.
/// An empty window renders the placeholder, never panics.
pub fn draw_card(f: &mut ratatui::Frame<'_>, area: Rect, title: &str, key: &str, latest: Option<&Sample>) {
    let value = fmt_value(latest.and_then(|s| s.values.get(key)));
    let text = Text::from(vec![
        Line::default(),
        Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ]);
    let card = Paragraph::new(text)
        .centered()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(card, area);
}
