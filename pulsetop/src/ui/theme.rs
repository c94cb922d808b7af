//! Shared UI theme constants.

use ratatui::style::Color;

pub const CPU: Color = Color::Cyan;
pub const LATENCY: Color = Color::Yellow;
pub const RATE: Color = Color::Green;

// Axis ticks and labels
pub const AXIS: Color = Color::Rgb(170, 170, 180);
