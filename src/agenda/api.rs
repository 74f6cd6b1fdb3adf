//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for every
//! operation, regardless of the UI driving it. Dispatch only — business
//! logic stays in `commands/*.rs`, presentation stays in the session.
//!
//! `AgendaApi<S: ContactStore>` is generic over the storage backend:
//! production wires in `FileStore`, tests run against `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::model::Contact;
use crate::store::ContactStore;

pub struct AgendaApi<S: ContactStore> {
    store: S,
}

impl<S: ContactStore> AgendaApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn create_contact(
        &mut self,
        number: &str,
        name: &str,
        confirm_overwrite: impl FnOnce(&Contact) -> bool,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, number, name, confirm_overwrite)
    }

    pub fn delete_contact(
        &mut self,
        number: &str,
        confirm: impl FnOnce(&Contact) -> bool,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, number, confirm)
    }

    pub fn search_contacts(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store)
    }

    pub fn reload(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
