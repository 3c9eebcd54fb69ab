use contacts_domain::contact::Contact;

use crate::error::AddressBookError;

/// Remote contact directory: search, fetch and field-level mutation.
///
/// Calls are synchronous. Implementations are not required to be `Sync`;
/// share one across threads only if the concrete type allows it.
pub trait AddressBook {
    /// Number of contacts matching `keywords`.
    fn count(&self, keywords: &[&str]) -> Result<usize, AddressBookError>;

    /// Contacts matching `keywords`.
    ///
    /// Lazy: errors surface when the iterator is advanced, not when `find`
    /// is called.
    fn find(&self, keywords: &[&str]) -> impl Iterator<Item = Result<Contact, AddressBookError>>;

    fn get(&self, contact_id: &str) -> Result<Contact, AddressBookError>;

    fn update_field(
        &self,
        contact_id: &str,
        field: &str,
        value: &str,
    ) -> Result<(), AddressBookError>;

    fn delete_field(&self, contact_id: &str, field: &str) -> Result<(), AddressBookError>;

    /// Replace label and value of an existing structured-info entry.
    fn update_info(
        &self,
        contact_id: &str,
        field: &str,
        info_id: &str,
        label: &str,
        value: &str,
    ) -> Result<(), AddressBookError>;

    /// Append a structured-info entry; the backend assigns its id.
    fn add_info(
        &self,
        contact_id: &str,
        field: &str,
        label: &str,
        value: &str,
    ) -> Result<(), AddressBookError>;

    fn delete_info(
        &self,
        contact_id: &str,
        field: &str,
        info_id: &str,
    ) -> Result<(), AddressBookError>;
}
