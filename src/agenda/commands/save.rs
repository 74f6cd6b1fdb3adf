use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;

/// Explicit persist of the whole map to the backing.
pub fn run<S: ContactStore>(store: &mut S) -> Result<CmdResult> {
    store.save()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} contact(s).",
        store.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn writes_the_map_to_the_backing() {
        let mut store = InMemoryStore::new();
        store.insert("555-1234".into(), "Ana".into());

        run(&mut store).unwrap();

        let backing = store.backing().unwrap();
        assert_eq!(backing.get("555-1234").map(String::as_str), Some("Ana"));
    }

    #[test]
    fn saving_an_empty_store_yields_an_empty_backing() {
        let mut store = InMemoryStore::new();
        run(&mut store).unwrap();
        assert!(store.backing().unwrap().is_empty());
    }
}
