use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AgendaError, Result};
use crate::model::Contact;
use crate::store::ContactStore;

use super::helpers::sort_for_display;

/// Case-insensitive substring match against both the number and the name.
pub fn run<S: ContactStore>(store: &S, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        return Err(AgendaError::Validation(
            "The search term cannot be empty.".into(),
        ));
    }

    let term_lower = term.to_lowercase();
    let mut matches: Vec<Contact> = store
        .entries()
        .into_iter()
        .filter(|c| {
            c.number.to_lowercase().contains(&term_lower)
                || c.name.to_lowercase().contains(&term_lower)
        })
        .collect();
    sort_for_display(&mut matches);

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No contacts match '{}'.",
            term
        )));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!(
        "{} match(es) found.",
        matches.len()
    )));
    Ok(result.with_listed(matches))
}
