use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AgendaError, Result};
use crate::model::{is_valid_number, Contact};
use crate::store::ContactStore;

/// Create or overwrite a contact and persist immediately.
///
/// `confirm_overwrite` is only consulted when the number is already taken;
/// it receives the existing contact and decides whether to replace it.
/// The empty-name check deliberately runs after that branch, so a declined
/// overwrite never reaches name validation.
pub fn run<S, F>(store: &mut S, number: &str, name: &str, confirm_overwrite: F) -> Result<CmdResult>
where
    S: ContactStore,
    F: FnOnce(&Contact) -> bool,
{
    let number = number.trim();
    let name = name.trim();

    if number.is_empty() {
        return Err(AgendaError::Validation(
            "The phone number cannot be empty.".into(),
        ));
    }
    if !is_valid_number(number) {
        return Err(AgendaError::Validation(
            "Invalid number format. Use digits, spaces, hyphens, parentheses or '+' only.".into(),
        ));
    }

    let existing = store
        .get(number)
        .map(|current| Contact::new(number, current));
    if let Some(existing) = &existing {
        if !confirm_overwrite(existing) {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(
                "Operation cancelled; the existing contact was kept.",
            ));
            return Ok(result);
        }
    }

    if name.is_empty() {
        return Err(AgendaError::Validation("The name cannot be empty.".into()));
    }

    store.insert(number.to_string(), name.to_string());
    store.save()?;

    let verb = if existing.is_some() { "updated" } else { "created" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact {}: {} - {}",
        verb, number, name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_and_persists_immediately() {
        let mut store = InMemoryStore::new();
        run(&mut store, "555-1234", "Ana García", |_| true).unwrap();

        assert_eq!(store.get("555-1234"), Some("Ana García"));
        let backing = store.backing().expect("create must trigger a save");
        assert_eq!(
            backing.get("555-1234").map(String::as_str),
            Some("Ana García")
        );
    }

    #[test]
    fn does_not_ask_confirmation_for_a_new_number() {
        let mut store = InMemoryStore::new();
        run(&mut store, "555-1234", "Ana", |_| {
            panic!("no confirmation expected for a new number")
        })
        .unwrap();
    }

    #[test]
    fn rejects_empty_number() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "   ", "Ana", |_| true).unwrap_err();
        assert!(matches!(err, AgendaError::Validation(_)));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn rejects_letters_in_number() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "555-ABCD", "Ana", |_| true).unwrap_err();
        assert!(matches!(err, AgendaError::Validation(_)));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn rejects_empty_name() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "555-1234", "", |_| true).unwrap_err();
        assert!(matches!(err, AgendaError::Validation(_)));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn empty_name_is_checked_after_the_overwrite_confirmation() {
        let mut store = InMemoryStore::new();
        run(&mut store, "555-1234", "Ana", |_| true).unwrap();

        let mut asked = false;
        let err = run(&mut store, "555-1234", "  ", |_| {
            asked = true;
            true
        })
        .unwrap_err();
        assert!(asked);
        assert!(matches!(err, AgendaError::Validation(_)));
        assert_eq!(store.get("555-1234"), Some("Ana"));
    }

    #[test]
    fn declined_overwrite_keeps_the_existing_contact() {
        let mut store = InMemoryStore::new();
        run(&mut store, "555-1234", "Ana", |_| true).unwrap();

        let result = run(&mut store, "555-1234", "Betty", |existing| {
            assert_eq!(existing.name, "Ana");
            false
        })
        .unwrap();

        assert_eq!(store.get("555-1234"), Some("Ana"));
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn confirmed_overwrite_replaces_the_name() {
        let mut store = InMemoryStore::new();
        run(&mut store, "555-1234", "Ana", |_| true).unwrap();
        run(&mut store, "555-1234", "Betty", |_| true).unwrap();

        assert_eq!(store.get("555-1234"), Some("Betty"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mut store = InMemoryStore::new();
        run(&mut store, "  555-1234  ", "  Ana  ", |_| true).unwrap();
        assert_eq!(store.get("555-1234"), Some("Ana"));
    }
}
