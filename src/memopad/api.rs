//! # API Facade
//!
//! [`MemoPadApi`] is the single entry point a UI uses. It owns the [`NotePad`]
//! and the store it came from, and has a clear lifecycle:
//!
//! 1. [`MemoPadApi::open`] loads the pad (empty if nothing is stored yet).
//! 2. Each UI action calls exactly one operation method.
//! 3. [`MemoPadApi::save`] persists the pad, at minimum once before exit.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the [`NotePad`] operations
//! - **Tracks unsaved changes** (`is_dirty`), and saves after each change when autosave is on
//! - **Returns structured types** (`Result<CmdResult>`) with the note's new index and messages
//!
//! It does no terminal I/O and never exits the process. Index contracts are
//! the model's: an out-of-range index panics.
//!
//! ## Generic Over DataStore
//!
//! - Production: `MemoPadApi<FileStore>`
//! - Testing: `MemoPadApi<InMemoryStore>`

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NotePad;
use crate::store::DataStore;
use std::path::PathBuf;

const PREVIEW_CHARS: usize = 40;

pub struct MemoPadApi<S: DataStore> {
    store: S,
    pad: NotePad,
    dirty: bool,
    autosave: bool,
}

impl<S: DataStore> MemoPadApi<S> {
    /// Load the pad from `store`. Unreadable data is an error, never replaced.
    pub fn open(store: S) -> Result<Self> {
        let pad = store.load()?.unwrap_or_default();
        Ok(Self {
            store,
            pad,
            dirty: false,
            autosave: false,
        })
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn pad(&self) -> &NotePad {
        &self.pad
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn path(&self) -> PathBuf {
        self.store.path()
    }

    /// Persist the pad. On failure the in-memory pad and dirty flag are kept.
    pub fn save(&mut self) -> Result<CmdResult> {
        self.store.save(&self.pad)?;
        self.dirty = false;
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Saved {} notes to {}",
            self.pad.len(),
            self.store.path().display()
        ))))
    }

    pub fn add_note(&mut self, text: impl Into<String>) -> Result<CmdResult> {
        let index = self.pad.add_note(text);
        let msg = format!("Added: {}", self.preview(index));
        self.finish(index, true, CmdMessage::success(msg))
    }

    pub fn remove_note(&mut self, index: usize) -> Result<CmdResult> {
        let note = self.pad.remove(index);
        let msg = format!("Deleted: {}", preview_text(&note.text));
        let selected = index.min(self.pad.len().saturating_sub(1));
        self.finish(selected, true, CmdMessage::success(msg))
    }

    pub fn toggle_favorite(&mut self, index: usize) -> Result<CmdResult> {
        self.pad.toggle_favorite(index);
        let verb = if self.pad.notes()[index].favorite {
            "Favorited"
        } else {
            "Unfavorited"
        };
        let msg = format!("{}: {}", verb, self.preview(index));
        self.finish(index, true, CmdMessage::success(msg))
    }

    pub fn toggle_pin(&mut self, index: usize) -> Result<CmdResult> {
        let new_index = self.pad.toggle_pin(index);
        let verb = if self.pad.notes()[new_index].pinned {
            "Pinned"
        } else {
            "Unpinned"
        };
        let msg = format!("{}: {}", verb, self.preview(new_index));
        self.finish(new_index, true, CmdMessage::success(msg))
    }

    pub fn move_up(&mut self, index: usize) -> Result<CmdResult> {
        let new_index = self.pad.move_up(index);
        if new_index == index {
            return self.finish(index, false, self.group_edge_message(index, "top"));
        }
        self.finish(new_index, true, CmdMessage::info("Moved up"))
    }

    pub fn move_down(&mut self, index: usize) -> Result<CmdResult> {
        let new_index = self.pad.move_down(index);
        if new_index == index {
            return self.finish(index, false, self.group_edge_message(index, "bottom"));
        }
        self.finish(new_index, true, CmdMessage::info("Moved down"))
    }

    pub fn move_left(&mut self, index: usize) -> Result<CmdResult> {
        let changed = self.pad.move_left(index);
        let msg = if changed {
            CmdMessage::info(format!("Indent {}", self.pad.notes()[index].indent))
        } else {
            CmdMessage::info("Already at the left margin")
        };
        self.finish(index, changed, msg)
    }

    pub fn move_right(&mut self, index: usize) -> Result<CmdResult> {
        let changed = self.pad.move_right(index);
        let msg = if changed {
            CmdMessage::info(format!("Indent {}", self.pad.notes()[index].indent))
        } else {
            CmdMessage::warning("Maximum indent reached")
        };
        self.finish(index, changed, msg)
    }

    pub fn zoom_in(&mut self) -> Result<CmdResult> {
        let changed = self.pad.zoom_in();
        let msg = if changed {
            CmdMessage::info(format!("Zoom {}", self.pad.zoom()))
        } else {
            CmdMessage::warning("Maximum zoom reached")
        };
        self.finish_zoom(changed, msg)
    }

    pub fn zoom_out(&mut self) -> Result<CmdResult> {
        let changed = self.pad.zoom_out();
        let msg = CmdMessage::info(format!("Zoom {}", self.pad.zoom()));
        self.finish_zoom(changed, msg)
    }

    fn finish(&mut self, selected: usize, changed: bool, msg: CmdMessage) -> Result<CmdResult> {
        let result = CmdResult::default().with_selected(selected);
        Ok(self.complete(result, changed, msg))
    }

    fn finish_zoom(&mut self, changed: bool, msg: CmdMessage) -> Result<CmdResult> {
        Ok(self.complete(CmdResult::default(), changed, msg))
    }

    /// The pad has already changed by now, so an autosave failure is reported
    /// alongside the result rather than replacing it.
    fn complete(&mut self, result: CmdResult, changed: bool, msg: CmdMessage) -> CmdResult {
        let mut result = result.with_changed(changed).with_message(msg);
        if let Err(e) = self.after_change(changed) {
            result.add_message(CmdMessage::error(format!("Autosave failed: {}", e)));
        }
        result
    }

    fn after_change(&mut self, changed: bool) -> Result<()> {
        if !changed {
            return Ok(());
        }
        self.dirty = true;
        if self.autosave {
            self.store.save(&self.pad)?;
            self.dirty = false;
        }
        Ok(())
    }

    fn group_edge_message(&self, index: usize, edge: &str) -> CmdMessage {
        let group = if self.pad.notes()[index].pinned {
            "pinned"
        } else {
            "unpinned"
        };
        CmdMessage::info(format!("Already at the {} of the {} notes", edge, group))
    }

    fn preview(&self, index: usize) -> String {
        preview_text(&self.pad.notes()[index].text)
    }
}

fn preview_text(text: &str) -> String {
    if text.is_empty() {
        return "(empty note)".to_string();
    }
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        preview.push('…');
    }
    preview
}
