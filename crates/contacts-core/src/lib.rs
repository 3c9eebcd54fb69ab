//! The address-book capability set and the client code built on it.
//!
//! Anything implementing [`address_book::AddressBook`] can back the use cases
//! in [`usecase`], including the in-memory double from `contacts-testing`.

pub mod address_book;
pub mod error;
pub mod tracing;
pub mod usecase;
