use super::{ContactStore, LoadOutcome};
use crate::error::Result;
use std::collections::BTreeMap;

/// In-memory storage for testing.
///
/// `backing` stands in for the backing file (`None` means the file does not
/// exist yet), so save/load round-trips can be exercised without touching
/// the filesystem.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: BTreeMap<String, String>,
    backing: Option<BTreeMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend the backing file already holds these entries.
    pub fn with_backing(entries: &[(&str, &str)]) -> Self {
        let backing = entries
            .iter()
            .map(|(number, name)| (number.to_string(), name.to_string()))
            .collect();
        Self {
            contacts: BTreeMap::new(),
            backing: Some(backing),
        }
    }

    /// What the fake backing currently holds, if it exists.
    pub fn backing(&self) -> Option<&BTreeMap<String, String>> {
        self.backing.as_ref()
    }
}

impl ContactStore for InMemoryStore {
    fn get(&self, number: &str) -> Option<&str> {
        self.contacts.get(number).map(String::as_str)
    }

    fn insert(&mut self, number: String, name: String) -> Option<String> {
        self.contacts.insert(number, name)
    }

    fn remove(&mut self, number: &str) -> Option<String> {
        self.contacts.remove(number)
    }

    fn contacts(&self) -> &BTreeMap<String, String> {
        &self.contacts
    }

    fn load(&mut self) -> Result<LoadOutcome> {
        let Self { contacts, backing } = self;
        match backing {
            None => Ok(LoadOutcome::FileMissing),
            Some(backing) => {
                for (number, name) in backing.iter() {
                    contacts.insert(number.clone(), name.clone());
                }
                Ok(LoadOutcome::Loaded {
                    count: backing.len(),
                })
            }
        }
    }

    fn save(&mut self) -> Result<()> {
        self.backing = Some(self.contacts.clone());
        Ok(())
    }
}
