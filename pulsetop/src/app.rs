//! App state and main loop: input handling, polling the metrics source,
//! and drawing.

use std::{
    io,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Color,
    Terminal,
};
use tokio::time::sleep;
use tracing::warn;

use crate::sampler::Sampler;
use crate::source::{MetricsSource, SystemClock};
use crate::ui::{cards::draw_card, chart::draw_series_chart, header::draw_header, theme};

// Summary cards: (title, metric key)
const CARDS: [(&str, &str); 4] = [
    ("CPU (%)", "cpu"),
    ("Latency (ms)", "latency_ms"),
    ("Req Rate", "request_rate"),
    ("Counter", "counter"),
];

// Line charts: (title, metric key, color). The plain counter is cards-only.
const CHARTS: [(&str, &str, Color); 3] = [
    ("CPU %", "cpu", theme::CPU),
    ("Latency (ms)", "latency_ms", theme::LATENCY),
    ("Req/sec", "request_rate", theme::RATE),
];

pub struct App<S> {
    sampler: Sampler<S, SystemClock>,
    endpoint: String,
    should_quit: bool,
}

impl<S: MetricsSource> App<S> {
    pub fn new(source: S, endpoint: String) -> Self {
        Self {
            sampler: Sampler::new(source, SystemClock),
            endpoint,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal).await;

        // Teardown runs on the error path too
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    let ctrl_c = k.code == KeyCode::Char('c')
                        && k.modifiers.contains(KeyModifiers::CONTROL);
                    if matches!(k.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
                        || ctrl_c
                    {
                        self.should_quit = true;
                    }
                }
            }
            if self.should_quit {
                break;
            }

            // Tick when due. Awaited inline, so polls never overlap and the
            // loop drains any in-flight fetch before teardown.
            let now = Instant::now();
            if self.sampler.tick_due(now) {
                if let Err(e) = self.sampler.poll(now).await {
                    warn!("metrics tick failed: {e}");
                }
            }

            // Draw
            terminal.draw(|f| self.draw(f))?;

            sleep(Duration::from_millis(200)).await;
        }

        Ok(())
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let area = f.area();

        // Root rows: header, card row, chart stack
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(5), // summary cards
                Constraint::Min(0),    // charts
            ])
            .split(area);

        draw_header(f, rows[0], &self.endpoint, self.sampler.interval());

        let window = self.sampler.window();
        let latest = window.latest();

        let card_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[1]);
        for (i, (title, key)) in CARDS.iter().enumerate() {
            draw_card(f, card_cols[i], title, key, latest);
        }

        let chart_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[2]);
        let labels = window.labels();
        for (i, (title, key, color)) in CHARTS.iter().enumerate() {
            let series = window.series(key);
            draw_series_chart(f, chart_rows[i], title, &labels, &series, *color);
        }
    }
}
