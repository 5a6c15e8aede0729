use super::styles::{FAVORITE_MARKER, PIN_MARKER, PLAIN_MARKER};
use colored::Colorize;
use memopad::commands::{CmdMessage, MessageLevel};
use memopad::config::{MemoPadConfig, CONFIG_KEYS};
use memopad::model::{Note, NotePad};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_config(config: &MemoPadConfig) {
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key, value);
    }
}

/// Pinned notes are numbered `p1.`, `p2.`, ... and the rest `1.`, `2.`, ...,
/// with a blank line between the two groups.
pub(super) fn print_notes(pad: &NotePad) {
    if pad.is_empty() {
        println!("No notes yet.");
        return;
    }

    let mut pinned_seen = 0;
    for (i, note) in pad.notes().iter().enumerate() {
        if i > 0 && i == pad.pinned_count() {
            println!();
        }

        let label = if note.pinned {
            pinned_seen += 1;
            format!("p{}. ", pinned_seen)
        } else {
            format!("{}. ", i - pad.pinned_count() + 1)
        };
        let (prefix, body) = row_parts(note);
        let available = LINE_WIDTH.saturating_sub(prefix.width() + label.width());
        let label = if note.pinned {
            label.yellow()
        } else {
            label.normal()
        };

        println!("{}{}{}", prefix, label, truncate_to_width(&body, available));
    }
}

/// Leading marker column and the indented, starred note text.
fn row_parts(note: &Note) -> (String, String) {
    let prefix = if note.pinned {
        format!("  {} ", PIN_MARKER)
    } else {
        "     ".to_string()
    };
    let star = if note.favorite {
        FAVORITE_MARKER
    } else {
        PLAIN_MARKER
    };
    let text: String = note
        .text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let body = format!("{}{} {}", "  ".repeat(note.indent as usize), star, text);
    (prefix, body)
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
