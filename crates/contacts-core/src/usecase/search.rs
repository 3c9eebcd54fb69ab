use contacts_domain::contact::Contact;

use crate::address_book::AddressBook;
use crate::error::AddressBookError;

/// Result of a keyword search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// What the address book reported via `count`.
    pub total: usize,
    pub contacts: Vec<Contact>,
}

pub struct SearchContactsUseCase<B: AddressBook> {
    pub book: B,
}

impl<B: AddressBook> SearchContactsUseCase<B> {
    /// Count, then drain `find`. Stops at the first error.
    pub fn execute(&self, keywords: &[&str]) -> Result<SearchResult, AddressBookError> {
        let total = self.book.count(keywords)?;
        let contacts = self
            .book
            .find(keywords)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(total, fetched = contacts.len(), "searched contacts");
        Ok(SearchResult { total, contacts })
    }
}
