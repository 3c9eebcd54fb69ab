//! Test utilities for address-book clients.
//!
//! Provides `MockAddressBook`, the fixture loader and its configuration.
//! Import from tests only — never in production code.

pub mod config;
pub mod fixture;
pub mod mock;

pub use mock::MockAddressBook;
