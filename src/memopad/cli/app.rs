//! Interactive session state and key handling.
//!
//! [`App`] is generic over the store so every key path can be driven in tests
//! with an [`memopad::store::memory::InMemoryStore`]; only [`run`] touches the
//! real terminal.

use super::keys::{self, Action};
use super::render;
use super::terminal::{setup_terminal, Tui};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use memopad::api::MemoPadApi;
use memopad::commands::{CmdMessage, CmdResult};
use memopad::error::{MemoPadError, Result};
use memopad::model::NotePad;
use memopad::store::DataStore;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Mode {
    Normal,
    /// Typing a new note; holds the text entered so far
    Input(String),
    /// Esc with unsaved changes, waiting for y/n
    ConfirmQuit,
}

pub(super) struct App<S: DataStore> {
    api: MemoPadApi<S>,
    selected: usize,
    scroll: usize,
    mode: Mode,
    status: Option<CmdMessage>,
    should_quit: bool,
}

pub(super) fn run<S: DataStore>(api: MemoPadApi<S>) -> Result<()> {
    let (_guard, mut terminal) = setup_terminal()?;
    let mut app = App::new(api);
    let result = app.event_loop(&mut terminal);
    terminal.show_cursor()?;
    result
}

impl<S: DataStore> App<S> {
    pub(super) fn new(api: MemoPadApi<S>) -> Self {
        Self {
            api,
            selected: 0,
            scroll: 0,
            mode: Mode::Normal,
            status: None,
            should_quit: false,
        }
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        tracing::info!(
            path = %self.path().display(),
            notes = self.pad().len(),
            "session started"
        );
        while !self.should_quit() {
            terminal.draw(|frame| {
                let areas = render::layout(frame.area());
                self.ensure_visible(areas.list.height as usize);
                render::draw(frame, self, &areas);
            })?;

            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        tracing::info!(dirty = self.api.is_dirty(), "session ended");
        Ok(())
    }

    pub(super) fn pad(&self) -> &NotePad {
        self.api.pad()
    }

    pub(super) fn path(&self) -> PathBuf {
        self.api.path()
    }

    pub(super) fn is_dirty(&self) -> bool {
        self.api.is_dirty()
    }

    pub(super) fn selected(&self) -> usize {
        self.selected
    }

    pub(super) fn scroll(&self) -> usize {
        self.scroll
    }

    pub(super) fn mode(&self) -> &Mode {
        &self.mode
    }

    pub(super) fn status(&self) -> Option<&CmdMessage> {
        self.status.as_ref()
    }

    pub(super) fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.mode {
            Mode::Normal => {
                if let Some(action) = keys::action_for(key) {
                    self.handle_action(action);
                }
            }
            Mode::Input(_) => self.handle_input_key(key),
            Mode::ConfirmQuit => self.handle_confirm_key(key),
        }
    }

    /// Keep the selected note's block inside a list area `height` rows tall.
    pub(super) fn ensure_visible(&mut self, height: usize) {
        let spacing = self.pad().zoom() as usize;
        let top = self.selected * spacing;
        if top < self.scroll {
            self.scroll = top;
        } else if top + spacing > self.scroll + height {
            self.scroll = (top + spacing).saturating_sub(height).min(top);
        }
    }

    fn handle_action(&mut self, action: Action) {
        let len = self.pad().len();
        match action {
            Action::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Action::SelectNext => {
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
            }
            Action::ZoomIn => {
                let result = self.api.zoom_in();
                self.apply(result);
            }
            Action::ZoomOut => {
                let result = self.api.zoom_out();
                self.apply(result);
            }
            Action::NewNote => {
                self.mode = Mode::Input(String::new());
                self.status = None;
            }
            Action::SaveAndQuit => match self.api.save() {
                Ok(_) => self.should_quit = true,
                Err(e) => self.report_error(e),
            },
            Action::Quit => {
                if self.api.is_dirty() {
                    self.mode = Mode::ConfirmQuit;
                } else {
                    self.should_quit = true;
                }
            }
            Action::ToggleFavorite
            | Action::TogglePin
            | Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::DeleteNote => {
                if len == 0 {
                    return;
                }
                let index = self.selected;
                let result = match action {
                    Action::ToggleFavorite => self.api.toggle_favorite(index),
                    Action::TogglePin => self.api.toggle_pin(index),
                    Action::MoveUp => self.api.move_up(index),
                    Action::MoveDown => self.api.move_down(index),
                    Action::MoveLeft => self.api.move_left(index),
                    Action::MoveRight => self.api.move_right(index),
                    _ => self.api.remove_note(index),
                };
                self.apply(result);
            }
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let Mode::Input(buffer) = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.status = Some(CmdMessage::info("New note cancelled"));
            }
            KeyCode::Enter => {
                let text = std::mem::take(buffer);
                self.mode = Mode::Normal;
                if text.trim().is_empty() {
                    self.status = Some(CmdMessage::info("Empty note discarded"));
                    return;
                }
                let result = self.api.add_note(text);
                self.apply(result);
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        self.mode = Mode::Normal;
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => match self.api.save() {
                Ok(_) => self.should_quit = true,
                Err(e) => self.report_error(e),
            },
            KeyCode::Char('n') | KeyCode::Char('N') => {
                tracing::info!("discarding unsaved changes");
                self.should_quit = true;
            }
            _ => self.status = Some(CmdMessage::info("Quit cancelled")),
        }
    }

    fn apply(&mut self, result: Result<CmdResult>) {
        match result {
            Ok(result) => {
                if let Some(selected) = result.selected {
                    self.selected = selected;
                }
                self.status = result.messages.into_iter().last();
            }
            Err(e) => self.report_error(e),
        }
    }

    fn report_error(&mut self, e: MemoPadError) {
        tracing::error!(error = %e, "operation failed");
        self.status = Some(CmdMessage::error(e.to_string()));
    }
}
