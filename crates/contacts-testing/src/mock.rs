//! In-memory address book for client tests.
//!
//! Reads are served from contacts loaded out of fixture files; mutations are
//! recorded, never applied, so tests can assert on exactly what a client
//! asked the backend to do.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::PathBuf;

use contacts_core::address_book::AddressBook;
use contacts_core::error::{AddressBookError, ReadOperation};
use contacts_domain::contact::Contact;
use contacts_domain::id::ContactId;
use contacts_domain::mutation::Mutation;

use crate::config::FixtureConfig;
use crate::fixture::{Fixture, FixtureError};

/// Stateful [`AddressBook`] double.
///
/// Not thread-safe: one instance per test.
#[derive(Debug)]
pub struct MockAddressBook {
    fixture_dir: PathBuf,
    error: bool,
    data: BTreeMap<ContactId, Contact>,
    updates: RefCell<Vec<Mutation>>,
    adds: RefCell<Vec<Mutation>>,
    deletes: RefCell<Vec<Mutation>>,
}

impl MockAddressBook {
    pub fn new(fixture_dir: impl Into<PathBuf>) -> Self {
        Self {
            fixture_dir: fixture_dir.into(),
            error: false,
            data: BTreeMap::new(),
            updates: RefCell::new(Vec::new()),
            adds: RefCell::new(Vec::new()),
            deletes: RefCell::new(Vec::new()),
        }
    }

    pub fn from_config(config: &FixtureConfig) -> Self {
        Self::new(config.fixture_dir.clone())
    }

    /// Make every subsequent `count`, `find` and `get` fail.
    ///
    /// There is no way back. Mutations keep being recorded.
    pub fn configure_error(&mut self) {
        self.error = true;
    }

    pub fn is_failing(&self) -> bool {
        self.error
    }

    /// Replace the loaded contacts with the fixtures named by `identifiers`.
    ///
    /// Contacts are keyed by their own `contact_id`, not by fixture name. If
    /// any fixture fails to load the previous contacts are kept.
    pub fn provide<I, S>(&mut self, identifiers: I) -> Result<(), FixtureError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = BTreeMap::new();
        for identifier in identifiers {
            let contact = Fixture::load_contact(&self.fixture_dir, identifier.as_ref())?;
            data.insert(contact.contact_id.clone(), contact);
        }
        tracing::debug!(
            contacts = data.len(),
            fixture_dir = %self.fixture_dir.display(),
            "provided contact fixtures"
        );
        self.data = data;
        Ok(())
    }

    /// Contacts currently served by reads.
    pub fn loaded(&self) -> &BTreeMap<ContactId, Contact> {
        &self.data
    }

    /// `update_field` and `update_info` calls, in call order.
    pub fn updates(&self) -> Vec<Mutation> {
        self.updates.borrow().clone()
    }

    /// `add_info` calls, in call order.
    pub fn adds(&self) -> Vec<Mutation> {
        self.adds.borrow().clone()
    }

    /// `delete_field` and `delete_info` calls, in call order.
    pub fn deletes(&self) -> Vec<Mutation> {
        self.deletes.borrow().clone()
    }

    fn check(&self, operation: ReadOperation) -> Result<(), AddressBookError> {
        if self.error {
            tracing::debug!(%operation, "simulated failure");
            return Err(AddressBookError::SimulatedFailure(operation));
        }
        Ok(())
    }
}

fn record(log: &RefCell<Vec<Mutation>>, mutation: Mutation) -> Result<(), AddressBookError> {
    tracing::debug!(
        operation = mutation.operation(),
        contact_id = %mutation.contact_id(),
        field = mutation.field(),
        "recorded mutation"
    );
    log.borrow_mut().push(mutation);
    Ok(())
}

impl AddressBook for MockAddressBook {
    fn count(&self, _keywords: &[&str]) -> Result<usize, AddressBookError> {
        self.check(ReadOperation::Count)?;
        Ok(self.data.len())
    }

    fn find(&self, _keywords: &[&str]) -> impl Iterator<Item = Result<Contact, AddressBookError>> {
        FindContacts {
            state: FindState::Pending(self),
        }
    }

    fn get(&self, contact_id: &str) -> Result<Contact, AddressBookError> {
        self.check(ReadOperation::Get)?;
        self.data
            .get(contact_id)
            .cloned()
            .ok_or_else(|| AddressBookError::NotFound(contact_id.into()))
    }

    fn update_field(
        &self,
        contact_id: &str,
        field: &str,
        value: &str,
    ) -> Result<(), AddressBookError> {
        record(&self.updates, Mutation::update_field(contact_id, field, value))
    }

    fn delete_field(&self, contact_id: &str, field: &str) -> Result<(), AddressBookError> {
        record(&self.deletes, Mutation::delete_field(contact_id, field))
    }

    fn update_info(
        &self,
        contact_id: &str,
        field: &str,
        info_id: &str,
        label: &str,
        value: &str,
    ) -> Result<(), AddressBookError> {
        record(
            &self.updates,
            Mutation::update_info(contact_id, field, info_id, label, value),
        )
    }

    fn add_info(
        &self,
        contact_id: &str,
        field: &str,
        label: &str,
        value: &str,
    ) -> Result<(), AddressBookError> {
        record(&self.adds, Mutation::add_info(contact_id, field, label, value))
    }

    fn delete_info(
        &self,
        contact_id: &str,
        field: &str,
        info_id: &str,
    ) -> Result<(), AddressBookError> {
        record(&self.deletes, Mutation::delete_info(contact_id, field, info_id))
    }
}

/// Iterator returned by [`MockAddressBook::find`].
///
/// The error flag is checked on the first `next`, mirroring a backend that
/// only fails once results are actually fetched.
struct FindContacts<'a> {
    state: FindState<'a>,
}

enum FindState<'a> {
    Pending(&'a MockAddressBook),
    Yielding(btree_map::Values<'a, ContactId, Contact>),
    Done,
}

impl Iterator for FindContacts<'_> {
    type Item = Result<Contact, AddressBookError>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.state, FindState::Done) {
            FindState::Pending(book) => {
                if let Err(e) = book.check(ReadOperation::Find) {
                    return Some(Err(e));
                }
                self.state = FindState::Yielding(book.data.values());
                self.next()
            }
            FindState::Yielding(mut values) => {
                let contact = values.next()?.clone();
                self.state = FindState::Yielding(values);
                Some(Ok(contact))
            }
            FindState::Done => None,
        }
    }
}
