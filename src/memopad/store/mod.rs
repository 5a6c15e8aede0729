//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam for memopad. The rest of the
//! crate only ever asks a store to load or save a whole [`NotePad`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one pretty-printed JSON file
//!   (`memopad.json` by default). Writes go to a temporary sibling file that is
//!   renamed over the target, so a crash mid-write leaves the old file intact.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing. It still runs
//!   the JSON codec so round-trip behaviour matches the file store, and it can
//!   simulate write failures.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "zoom": 1,
//!   "notes": [
//!     { "id": "…", "text": "…", "favorite": false, "pinned": true, "indent": 0 }
//!   ]
//! }
//! ```
//!
//! List order is the display order. Field order inside a record does not matter.

use crate::error::Result;
use crate::model::NotePad;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for pad storage.
pub trait DataStore {
    /// Load the stored pad.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet and
    /// [`crate::error::MemoPadError::Corrupt`] when stored data cannot be read.
    fn load(&self) -> Result<Option<NotePad>>;

    /// Replace the stored pad. Must be atomic.
    fn save(&mut self, pad: &NotePad) -> Result<()>;

    /// Move unreadable stored data out of the way.
    ///
    /// Returns where the data went, or `None` if there was nothing stored.
    fn quarantine(&mut self) -> Result<Option<PathBuf>>;

    /// Where the pad lives. For non-file stores this is a virtual path.
    fn path(&self) -> PathBuf;
}
