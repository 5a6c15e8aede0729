use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MemoPadError, Result};
use crate::model::NotePad;
use crate::store::DataStore;

/// Check that the pad file can be read.
///
/// An unreadable file is moved aside (never deleted) and replaced by an empty
/// pad, so the user can start over and still recover the old data by hand.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let path = store.path();

    match store.load() {
        Ok(Some(pad)) => {
            result.add_message(CmdMessage::success(format!(
                "{} is healthy: {} notes ({} pinned, {} favorites).",
                path.display(),
                pad.len(),
                pad.pinned_count(),
                pad.favorite_count()
            )));
        }
        Ok(None) => {
            result.add_message(CmdMessage::info(format!(
                "No pad file at {} yet; one will be created on first save.",
                path.display()
            )));
        }
        Err(MemoPadError::Corrupt { source, .. }) => {
            result.add_message(CmdMessage::warning(format!(
                "{} is unreadable: {}",
                path.display(),
                source
            )));
            if let Some(backup) = store.quarantine()? {
                result.add_message(CmdMessage::info(format!(
                    "  - Backed up the unreadable file to {}",
                    backup.display()
                )));
            }
            store.save(&NotePad::new())?;
            result.add_message(CmdMessage::success(format!(
                "  - Started a fresh pad at {}",
                path.display()
            )));
            result.changed = true;
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}
