//! # Storage Layer
//!
//! The [`ContactStore`] trait is the directory store: the in-memory
//! number → name map plus the load/save contract with its backing.
//! Abstracting it behind a trait keeps command logic testable without a
//! real file behind it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. One `<number>,<name>` entry per
//!   non-blank line of a plain text file.
//! - [`memory::InMemoryStore`]: in-memory storage for tests. Keeps a fake
//!   backing snapshot so save/load behavior can be exercised too.
//!
//! ## Load/save contract
//!
//! Loading merges by key and never clears entries absent from the backing.
//! Saving rewrites the backing completely from the map, so entries removed
//! in memory disappear from it. The map iterates in ascending number order,
//! which makes repeated saves byte-identical.

use crate::error::Result;
use crate::model::Contact;
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

/// Result of a load from the backing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The backing existed; `count` entries were read into the map.
    Loaded { count: usize },
    /// No backing yet. Not an error: the map stays as-is.
    FileMissing,
}

pub trait ContactStore {
    fn get(&self, number: &str) -> Option<&str>;

    /// Insert or overwrite a mapping. Returns the replaced name, if any.
    fn insert(&mut self, number: String, name: String) -> Option<String>;

    /// Remove a mapping. Returns the removed name, if any.
    fn remove(&mut self, number: &str) -> Option<String>;

    /// The full map, in ascending number order.
    fn contacts(&self) -> &BTreeMap<String, String>;

    /// Merge entries from the backing into the map.
    fn load(&mut self) -> Result<LoadOutcome>;

    /// Rewrite the backing from the map.
    fn save(&mut self) -> Result<()>;

    fn len(&self) -> usize {
        self.contacts().len()
    }

    fn is_empty(&self) -> bool {
        self.contacts().is_empty()
    }

    /// All entries as owned values, in map order.
    fn entries(&self) -> Vec<Contact> {
        self.contacts()
            .iter()
            .map(|(number, name)| Contact::new(number.clone(), name.clone()))
            .collect()
    }
}
