use memopad::commands::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

pub const PIN_MARKER: &str = "📌";
pub const FAVORITE_MARKER: &str = "★";
pub const PLAIN_MARKER: &str = "☆";

pub const HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const FOOTER: Style = Style::new().fg(Color::DarkGray);
pub const PINNED: Style = Style::new().fg(Color::Yellow);
pub const FAVORITE: Style = Style::new().add_modifier(Modifier::BOLD);
pub const SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);
pub const PROMPT: Style = Style::new().fg(Color::Cyan);

pub fn message(level: &MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::new().fg(Color::Gray),
        MessageLevel::Success => Style::new().fg(Color::Green),
        MessageLevel::Warning => Style::new().fg(Color::Yellow),
        MessageLevel::Error => Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}
