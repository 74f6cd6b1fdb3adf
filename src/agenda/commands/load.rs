use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ContactStore, LoadOutcome};

/// Reload from the backing. Entries merge in by key; contacts only present
/// in memory are kept.
pub fn run<S: ContactStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.load()? {
        LoadOutcome::Loaded { count } => {
            result.add_message(CmdMessage::success(format!("Loaded {} contact(s).", count)));
        }
        LoadOutcome::FileMissing => {
            result.add_message(CmdMessage::info(
                "File not found. A new one will be created on save.",
            ));
        }
    }
    Ok(result)
}
