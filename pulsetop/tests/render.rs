//! Presenter smoke tests on ratatui's TestBackend: an empty window renders
//! placeholders, a populated one renders values, and neither panics.

use pulsetop::app::App;
use pulsetop::history::SampleWindow;
use pulsetop::source::ScriptedSource;
use pulsetop::types::{MetricsPayload, Sample};
use pulsetop::ui::{cards::draw_card, chart::draw_series_chart, theme};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use serde_json::{json, Value};

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn empty_window_draws_placeholders_without_panicking() {
    let app = App::new(ScriptedSource::default(), "http://localhost:8080/api/metrics".into());
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();

    let text = buffer_text(&terminal);
    for title in ["CPU (%)", "Latency (ms)", "Req Rate", "Counter", "CPU %", "Req/sec"] {
        assert!(text.contains(title), "missing panel title {title:?}");
    }
    assert!(text.contains('–'), "empty cards must show the placeholder");
}

#[test]
fn populated_window_draws_latest_values_and_charts() {
    let mut window = SampleWindow::new();
    for (i, cpu) in [35, 42, 57].iter().enumerate() {
        let mut m = MetricsPayload::new();
        m.insert("cpu".into(), Value::from(*cpu));
        m.insert("counter".into(), Value::from(i as i64 + 1));
        window.push(Sample::new(format!("10:00:{:02}", i * 10), m));
    }

    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            let card = Rect::new(0, 0, 30, 5);
            draw_card(f, card, "CPU (%)", "cpu", window.latest());
            let chart = Rect::new(0, 5, area.width, 20);
            let labels = window.labels();
            let series = window.series("cpu");
            draw_series_chart(f, chart, "CPU %", &labels, &series, theme::CPU);
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("57"), "latest cpu value shown on the card");
    assert!(text.contains("10:00:00"), "first time label on the x-axis");
    assert!(text.contains("10:00:20"), "last time label on the x-axis");
}

#[test]
fn chart_with_wholly_missing_series_renders_frame_only() {
    let mut window = SampleWindow::new();
    let mut m = MetricsPayload::new();
    m.insert("cpu".into(), json!(10));
    window.push(Sample::new("10:00:00".into(), m));

    let backend = TestBackend::new(80, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let labels = window.labels();
            let series = window.series("latency_ms");
            draw_series_chart(f, f.area(), "Latency (ms)", &labels, &series, theme::LATENCY);
        })
        .unwrap();
    assert!(buffer_text(&terminal).contains("Latency (ms)"));
}
