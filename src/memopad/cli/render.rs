use super::app::{App, Mode};
use super::keys::HELP;
use super::styles::{self, FAVORITE_MARKER, PIN_MARKER, PLAIN_MARKER};
use memopad::commands::MessageLevel;
use memopad::model::{Note, NotePad};
use memopad::store::DataStore;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 5;
const PROMPT: &str = "New note: ";

pub(super) struct Areas {
    pub header: Rect,
    pub list: Rect,
    pub status: Rect,
    pub footer: Rect,
}

pub(super) fn layout(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    Areas {
        header: chunks[0],
        list: chunks[1],
        status: chunks[2],
        footer: chunks[3],
    }
}

pub(super) fn draw<S: DataStore>(frame: &mut Frame, app: &App<S>, areas: &Areas) {
    let area = frame.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        frame.render_widget(Paragraph::new("Window too small"), area);
        return;
    }

    frame.render_widget(Paragraph::new(HELP).style(styles::HEADER), areas.header);

    let pad = app.pad();
    let list = if pad.is_empty() {
        Paragraph::new("No notes yet. Press Alt+n to add one.").style(styles::FOOTER)
    } else {
        let scroll = u16::try_from(app.scroll()).unwrap_or(u16::MAX);
        Paragraph::new(note_lines(pad, app.selected())).scroll((scroll, 0))
    };
    frame.render_widget(list, areas.list);

    draw_status(frame, app, areas.status);

    let footer = footer_text(&app.path(), pad, app.is_dirty());
    frame.render_widget(Paragraph::new(footer).style(styles::FOOTER), areas.footer);
}

fn draw_status<S: DataStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let line = match app.mode() {
        Mode::Input(buffer) => {
            let cursor_x = area.x + (PROMPT.width() + buffer.width()) as u16;
            frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
            Line::from(vec![
                Span::styled(PROMPT, styles::PROMPT),
                Span::raw(buffer.clone()),
            ])
        }
        Mode::ConfirmQuit => Line::styled(
            "Unsaved changes. Save before quitting? (y/n)",
            styles::message(&MessageLevel::Warning),
        ),
        Mode::Normal => match app.status() {
            Some(msg) => Line::styled(msg.content.clone(), styles::message(&msg.level)),
            None => Line::default(),
        },
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// One row per note followed by `zoom - 1` blank rows.
pub(super) fn note_lines(pad: &NotePad, selected: usize) -> Vec<Line<'static>> {
    let spacing = pad.zoom() as usize;
    let mut lines = Vec::with_capacity(pad.len() * spacing);

    for (i, note) in pad.notes().iter().enumerate() {
        let mut style = Style::default();
        if note.pinned {
            style = style.patch(styles::PINNED);
        }
        if note.favorite {
            style = style.patch(styles::FAVORITE);
        }
        if i == selected {
            style = style.patch(styles::SELECTED);
        }
        lines.push(Line::styled(format_note(note), style));
        lines.extend((1..spacing).map(|_| Line::default()));
    }
    lines
}

pub(super) fn format_note(note: &Note) -> String {
    let pin = if note.pinned { PIN_MARKER } else { "  " };
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
    format!(
        "{}{} {} {}",
        "  ".repeat(note.indent as usize),
        pin,
        star,
        text
    )
}

pub(super) fn footer_text(path: &Path, pad: &NotePad, dirty: bool) -> String {
    format!(
        "{}{} | {} notes, {} pinned, {} favorites | zoom {}",
        path.display(),
        if dirty { " [modified]" } else { "" },
        pad.len(),
        pad.pinned_count(),
        pad.favorite_count(),
        pad.zoom()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use memopad::api::MemoPadApi;
    use memopad::store::memory::InMemoryStore;
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;
    use ratatui::Terminal;

    fn pad_with(texts: &[&str]) -> NotePad {
        let mut pad = NotePad::new();
        for text in texts {
            pad.add_note(*text);
        }
        pad
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn format_note_layout() {
        let mut note = Note::new("groceries");
        assert_eq!(format_note(&note), "   ☆ groceries");

        note.pinned = true;
        note.favorite = true;
        note.indent = 1;
        assert_eq!(format_note(&note), "  📌 ★ groceries");
    }

    #[test]
    fn pinned_and_plain_rows_line_up() {
        let mut pinned = Note::new("x");
        pinned.pinned = true;
        let plain = Note::new("x");
        assert_eq!(
            format_note(&pinned).width(),
            format_note(&plain).width()
        );
    }

    #[test]
    fn zoom_adds_blank_rows_per_note() {
        let mut pad = pad_with(&["a", "b"]);
        pad.zoom_in();
        pad.zoom_in();

        let lines = note_lines(&pad, 0);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].width(), format_note(&pad.notes()[0]).width());
        assert_eq!(lines[1].width(), 0);
        assert_eq!(lines[2].width(), 0);
        assert_eq!(lines[3].width(), format_note(&pad.notes()[1]).width());
        assert_eq!(lines[4].width(), 0);
    }

    #[test]
    fn only_selected_row_is_reversed() {
        let pad = pad_with(&["a", "b"]);
        let lines = note_lines(&pad, 1);
        assert!(!lines[0].style.add_modifier.contains(Modifier::REVERSED));
        assert!(lines[1].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn footer_summarizes_pad() {
        let mut pad = pad_with(&["a", "b", "c"]);
        pad.toggle_pin(1);
        pad.toggle_favorite(2);

        let text = footer_text(Path::new("/tmp/memopad.json"), &pad, true);
        assert_eq!(
            text,
            "/tmp/memopad.json [modified] | 3 notes, 1 pinned, 1 favorites | zoom 1"
        );
    }

    #[test]
    fn draws_notes_and_help() {
        let mut store = InMemoryStore::new();
        store.save(&pad_with(&["buy milk", "call mom"])).unwrap();
        let app = App::new(MemoPadApi::open(store).unwrap());

        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal
            .draw(|frame| {
                let areas = layout(frame.area());
                draw(frame, &app, &areas);
            })
            .unwrap();

        let screen = screen(&terminal);
        assert!(screen.contains("Alt[o]"));
        assert!(screen.contains("buy milk"));
        assert!(screen.contains("call mom"));
        assert!(screen.contains("2 notes, 0 pinned"));
    }

    #[test]
    fn tiny_window_shows_warning() {
        let app = App::new(MemoPadApi::open(InMemoryStore::new()).unwrap());
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal
            .draw(|frame| {
                let areas = layout(frame.area());
                draw(frame, &app, &areas);
            })
            .unwrap();
        assert!(screen(&terminal).contains("Window"));
    }
}
