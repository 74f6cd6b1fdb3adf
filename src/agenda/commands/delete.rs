use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AgendaError, Result};
use crate::model::Contact;
use crate::store::ContactStore;

/// Remove a contact after caller confirmation and persist immediately.
pub fn run<S, F>(store: &mut S, number: &str, confirm: F) -> Result<CmdResult>
where
    S: ContactStore,
    F: FnOnce(&Contact) -> bool,
{
    if store.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("There are no contacts to delete."));
        return Ok(result);
    }

    let number = number.trim();
    let name = store
        .get(number)
        .map(str::to_string)
        .ok_or_else(|| AgendaError::NotFound(number.to_string()))?;
    let contact = Contact::new(number, name);

    let mut result = CmdResult::default();
    if !confirm(&contact) {
        result.add_message(CmdMessage::warning("Deletion cancelled."));
        return Ok(result);
    }

    store.remove(number);
    store.save()?;
    result.add_message(CmdMessage::success(format!(
        "Contact deleted: {} - {}",
        contact.number, contact.name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, MessageLevel};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_and_persists_on_confirmation() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "555-1234", "Ana", |_| true).unwrap();

        run(&mut store, "555-1234", |contact| {
            assert_eq!(contact.name, "Ana");
            true
        })
        .unwrap();

        assert_eq!(store.len(), 0);
        assert!(store.backing().unwrap().is_empty());
    }

    #[test]
    fn declined_confirmation_keeps_the_contact() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "555-1234", "Ana", |_| true).unwrap();

        let result = run(&mut store, "555-1234", |_| false).unwrap();

        assert_eq!(store.get("555-1234"), Some("Ana"));
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn unknown_number_is_not_found_and_leaves_size_unchanged() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "555-1234", "Ana", |_| true).unwrap();

        let err = run(&mut store, "555-9999", |_| true).unwrap_err();
        assert!(matches!(err, AgendaError::NotFound(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_store_is_informational() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "555-1234", |_| true).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
