use contacts_core::tracing::init_test_tracing;
use contacts_testing::MockAddressBook;
use contacts_testing::config::FixtureConfig;

/// Fresh mock over the seed fixtures, with test tracing enabled.
pub fn mock_book() -> MockAddressBook {
    init_test_tracing();
    MockAddressBook::from_config(&FixtureConfig::from_env())
}

/// Mock with `identifiers` already provided.
pub fn mock_book_with(identifiers: &[&str]) -> MockAddressBook {
    let mut book = mock_book();
    book.provide(identifiers).unwrap();
    book
}
