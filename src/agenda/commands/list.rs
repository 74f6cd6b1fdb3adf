use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;

use super::helpers::sort_for_display;

pub fn run<S: ContactStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.is_empty() {
        result.add_message(CmdMessage::info("No contacts in the phone book."));
        return Ok(result);
    }

    let mut entries = store.entries();
    sort_for_display(&mut entries);
    result.add_message(CmdMessage::info(format!(
        "{} contact(s) total.",
        entries.len()
    )));
    Ok(result.with_listed(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_entries_sorted_by_name() {
        let mut store = InMemoryStore::new();
        store.insert("555-9999".into(), "Juan Ana".into());
        store.insert("555-1234".into(), "Ana García".into());

        let result = run(&store).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[0].name, "Ana García");
        assert_eq!(result.listed[1].name, "Juan Ana");
    }

    #[test]
    fn empty_store_reports_info_only() {
        let store = InMemoryStore::new();

        let result = run(&store).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
