//! # Note Model
//!
//! A [`NotePad`] is a single ordered `Vec<Note>`. The order is both the
//! display order and the persisted order.
//!
//! ## Pinned Prefix
//!
//! Pinned notes always form a prefix of the list:
//!
//! ```text
//! [ pinned, pinned, | unpinned, unpinned, unpinned ]
//!                   ^ pinned_count()
//! ```
//!
//! Every mutating method keeps that shape. Toggling a pin moves the note to
//! the boundary, and `move_up`/`move_down` never cross it.
//!
//! ## Addressing
//!
//! Notes are addressed by their current index. Methods that can move a note
//! return its new index; callers holding on to a note across several calls
//! should use [`Note::id`] with [`NotePad::position`].
//!
//! Passing an index that is out of range is a caller bug and panics.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Deepest indentation level a note can have.
pub const MAX_INDENT: u32 = 8;
/// Smallest zoom level; also the default.
pub const MIN_ZOOM: u32 = 1;
/// Largest zoom level the list can be rendered at.
pub const MAX_ZOOM: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub text: String,
    pub favorite: bool,
    pub pinned: bool,
    pub indent: u32,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            favorite: false,
            pinned: false,
            indent: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PadFile")]
pub struct NotePad {
    zoom: u32,
    notes: Vec<Note>,
}

impl Default for NotePad {
    fn default() -> Self {
        Self {
            zoom: MIN_ZOOM,
            notes: Vec::new(),
        }
    }
}

impl NotePad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pad from arbitrary notes, restoring the pinned prefix and
    /// clamping indents if needed.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self::from_parts(notes, i64::from(MIN_ZOOM))
    }

    fn from_parts(mut notes: Vec<Note>, zoom: i64) -> Self {
        for note in &mut notes {
            note.indent = note.indent.min(MAX_INDENT);
        }

        let partitioned = notes.iter().skip_while(|n| n.pinned).all(|n| !n.pinned);
        if !partitioned {
            tracing::warn!(
                notes = notes.len(),
                "pinned notes were interleaved with unpinned ones; moving them to the top"
            );
            let (mut pinned, unpinned): (Vec<Note>, Vec<Note>) =
                notes.into_iter().partition(|n| n.pinned);
            pinned.extend(unpinned);
            notes = pinned;
        }

        Self {
            zoom: clamp_u32(zoom, MIN_ZOOM, MAX_ZOOM),
            notes,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Number of pinned notes, which is also the index of the first unpinned note.
    pub fn pinned_count(&self) -> usize {
        self.notes.iter().take_while(|n| n.pinned).count()
    }

    pub fn favorite_count(&self) -> usize {
        self.notes.iter().filter(|n| n.favorite).count()
    }

    /// Current index of the note with the given id.
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    /// Appends a new unpinned note and returns its index.
    pub fn add_note(&mut self, text: impl Into<String>) -> usize {
        self.notes.push(Note::new(text));
        self.notes.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Note {
        self.check_index(index);
        self.notes.remove(index)
    }

    pub fn toggle_favorite(&mut self, index: usize) {
        self.check_index(index);
        let note = &mut self.notes[index];
        note.favorite = !note.favorite;
    }

    /// Flips the pin and moves the note to the pinned/unpinned boundary.
    ///
    /// A newly pinned note lands at the end of the pinned group, a newly
    /// unpinned one at the start of the unpinned group. Returns the new index.
    pub fn toggle_pin(&mut self, index: usize) -> usize {
        self.check_index(index);
        let mut note = self.notes.remove(index);
        note.pinned = !note.pinned;
        let boundary = self.pinned_count();
        self.notes.insert(boundary, note);
        boundary
    }

    /// Swaps the note with the one above it if both share a pin group.
    /// Returns the note's index after the call.
    pub fn move_up(&mut self, index: usize) -> usize {
        self.check_index(index);
        if index > 0 && self.notes[index - 1].pinned == self.notes[index].pinned {
            self.notes.swap(index - 1, index);
            return index - 1;
        }
        index
    }

    /// Swaps the note with the one below it if both share a pin group.
    /// Returns the note's index after the call.
    pub fn move_down(&mut self, index: usize) -> usize {
        self.check_index(index);
        if index + 1 < self.notes.len() && self.notes[index + 1].pinned == self.notes[index].pinned
        {
            self.notes.swap(index, index + 1);
            return index + 1;
        }
        index
    }

    /// Decreases the indent. Returns `false` when already at 0.
    pub fn move_left(&mut self, index: usize) -> bool {
        self.check_index(index);
        let note = &mut self.notes[index];
        if note.indent == 0 {
            return false;
        }
        note.indent -= 1;
        true
    }

    /// Increases the indent. Returns `false` when already at [`MAX_INDENT`].
    pub fn move_right(&mut self, index: usize) -> bool {
        self.check_index(index);
        let note = &mut self.notes[index];
        if note.indent >= MAX_INDENT {
            return false;
        }
        note.indent += 1;
        true
    }

    pub fn zoom_in(&mut self) -> bool {
        if self.zoom >= MAX_ZOOM {
            return false;
        }
        self.zoom += 1;
        true
    }

    pub fn zoom_out(&mut self) -> bool {
        if self.zoom <= MIN_ZOOM {
            return false;
        }
        self.zoom -= 1;
        true
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.notes.len(),
            "note index {} out of range for a pad of {} notes",
            index,
            self.notes.len()
        );
    }
}

fn clamp_u32(value: i64, min: u32, max: u32) -> u32 {
    // Bounds are u32, so the clamped value always fits.
    value.clamp(i64::from(min), i64::from(max)) as u32
}

// On-disk shape. Missing fields take defaults and out-of-range numbers are
// clamped; anything else that fails to parse is reported as corruption by the store.
enum PadFile {
    // Older pad files were a bare list of strings.
    Plain(Vec<String>),
    Full(PadRecord),
}

#[derive(Deserialize)]
struct PadRecord {
    #[serde(default = "default_zoom")]
    zoom: i64,
    #[serde(default)]
    notes: Vec<NoteRecord>,
}

// Dispatch on the JSON shape so a bad field reports its own error instead of
// a generic "no variant matched".
impl<'de> Deserialize<'de> for PadFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Array(_) => Vec::<String>::deserialize(value)
                .map(PadFile::Plain)
                .map_err(de::Error::custom),
            serde_json::Value::Object(_) => PadRecord::deserialize(value)
                .map(PadFile::Full)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected an object with zoom and notes, or a list of strings, found {}",
                other
            ))),
        }
    }
}

#[derive(Deserialize)]
struct NoteRecord {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    #[serde(default)]
    text: String,
    #[serde(default)]
    favorite: bool,
    #[serde(default)]
    pinned: bool,
    #[serde(default)]
    indent: i64,
}

fn default_zoom() -> i64 {
    i64::from(MIN_ZOOM)
}

impl From<NoteRecord> for Note {
    fn from(record: NoteRecord) -> Self {
        Self {
            id: record.id,
            text: record.text,
            favorite: record.favorite,
            pinned: record.pinned,
            indent: clamp_u32(record.indent, 0, MAX_INDENT),
        }
    }
}

impl From<PadFile> for NotePad {
    fn from(file: PadFile) -> Self {
        match file {
            PadFile::Plain(texts) => Self::with_notes(texts.into_iter().map(Note::new).collect()),
            PadFile::Full(record) => Self::from_parts(
                record.notes.into_iter().map(Note::from).collect(),
                record.zoom,
            ),
        }
    }
}
