use crate::model::Contact;

/// Sort entries for presentation: by display name, ties broken by number so
/// the order is stable run to run.
pub fn sort_for_display(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.number.cmp(&b.number)));
}
