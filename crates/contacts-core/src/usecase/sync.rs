use contacts_domain::contact::{Contact, ContactField, ContactInfo, InfoField};
use contacts_domain::id::InfoId;
use contacts_domain::mutation::Mutation;

use crate::address_book::AddressBook;
use crate::error::AddressBookError;

// ── diff ─────────────────────────────────────────────────────────────────────

/// Mutations that turn `before` into `after`, addressed to `before`'s id.
///
/// Scalar fields come first in [`ContactField::ALL`] order, then each
/// [`InfoField`] as deletes, updates, adds. Info entries are matched by
/// `info_id`; an entry in `after` without a known id is an add.
pub fn diff_contacts(before: &Contact, after: &Contact) -> Vec<Mutation> {
    let contact_id = before.contact_id.as_str();
    let mut mutations = Vec::new();

    for field in ContactField::ALL {
        match (before.field(field), after.field(field)) {
            (Some(_), None) => {
                mutations.push(Mutation::delete_field(contact_id, field.as_str()));
            }
            (old, Some(new)) if old != Some(new) => {
                mutations.push(Mutation::update_field(contact_id, field.as_str(), new));
            }
            _ => {}
        }
    }

    for field in InfoField::ALL {
        diff_infos(
            contact_id,
            field,
            before.infos(field),
            after.infos(field),
            &mut mutations,
        );
    }

    mutations
}

fn diff_infos(
    contact_id: &str,
    field: InfoField,
    before: &[ContactInfo],
    after: &[ContactInfo],
    out: &mut Vec<Mutation>,
) {
    for old in before {
        if let Some(id) = &old.info_id {
            if position_of(after, id).is_none() {
                out.push(Mutation::delete_info(contact_id, field.as_str(), id.as_str()));
            }
        }
    }

    for new in after {
        let Some(id) = &new.info_id else { continue };
        if let Some(idx) = position_of(before, id) {
            let old = &before[idx];
            if old.label != new.label || old.value != new.value {
                out.push(Mutation::update_info(
                    contact_id,
                    field.as_str(),
                    id.as_str(),
                    &new.label,
                    &new.value,
                ));
            }
        }
    }

    for new in after {
        let known = new
            .info_id
            .as_ref()
            .is_some_and(|id| position_of(before, id).is_some());
        if !known {
            out.push(Mutation::add_info(
                contact_id,
                field.as_str(),
                &new.label,
                &new.value,
            ));
        }
    }
}

fn position_of(infos: &[ContactInfo], id: &InfoId) -> Option<usize> {
    infos.iter().position(|i| i.info_id.as_ref() == Some(id))
}

// ── apply ────────────────────────────────────────────────────────────────────

/// Send one mutation to the address book.
pub fn apply_mutation<B: AddressBook>(book: &B, mutation: &Mutation) -> Result<(), AddressBookError> {
    match mutation {
        Mutation::UpdateField {
            contact_id,
            field,
            value,
        } => book.update_field(contact_id.as_str(), field, value),
        Mutation::DeleteField { contact_id, field } => {
            book.delete_field(contact_id.as_str(), field)
        }
        Mutation::UpdateInfo {
            contact_id,
            field,
            info_id,
            label,
            value,
        } => book.update_info(contact_id.as_str(), field, info_id.as_str(), label, value),
        Mutation::AddInfo {
            contact_id,
            field,
            label,
            value,
        } => book.add_info(contact_id.as_str(), field, label, value),
        Mutation::DeleteInfo {
            contact_id,
            field,
            info_id,
        } => book.delete_info(contact_id.as_str(), field, info_id.as_str()),
    }
}

// ── SyncContact ──────────────────────────────────────────────────────────────

pub struct SyncContactUseCase<B: AddressBook> {
    pub book: B,
}

impl<B: AddressBook> SyncContactUseCase<B> {
    /// Bring the stored contact in line with `desired`.
    ///
    /// Returns the mutations sent, in order. A failed read aborts before any
    /// mutation is sent; a failed mutation aborts the remaining ones.
    pub fn execute(
        &self,
        contact_id: &str,
        desired: &Contact,
    ) -> Result<Vec<Mutation>, AddressBookError> {
        let current = self.book.get(contact_id)?;
        let mutations = diff_contacts(&current, desired);
        for mutation in &mutations {
            apply_mutation(&self.book, mutation)?;
        }
        tracing::info!(contact_id, mutations = mutations.len(), "synced contact");
        Ok(mutations)
    }
}
