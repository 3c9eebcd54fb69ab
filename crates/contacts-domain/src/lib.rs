//! Domain types shared by address-book clients and their test doubles.
//!
//! This crate contains only pure types with no I/O. The `AddressBook` trait
//! lives in `contacts-core`; the in-memory double in `contacts-testing`.

pub mod contact;
pub mod id;
pub mod mutation;
