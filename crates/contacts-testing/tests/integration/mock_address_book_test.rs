use contacts_core::address_book::AddressBook;
use contacts_core::error::{AddressBookError, ReadOperation};
use contacts_domain::mutation::Mutation;
use contacts_testing::fixture::FixtureError;

use crate::helpers::{mock_book, mock_book_with};

// ── provide / reads ──────────────────────────────────────────────────────────

#[test]
fn should_return_nothing_before_provide() {
    let book = mock_book();
    assert_eq!(book.count(&[]).unwrap(), 0);
    assert_eq!(book.find(&[]).count(), 0);
}

#[test]
fn should_serve_exactly_the_provided_contacts() {
    let book = mock_book_with(&["alice", "bob"]);

    assert_eq!(book.count(&[]).unwrap(), 2);
    assert_eq!(book.get("c1").unwrap().first_name.as_deref(), Some("Alice"));
    assert_eq!(book.get("c2").unwrap().first_name.as_deref(), Some("Bob"));
    assert!(matches!(book.get("people/c3"), Err(AddressBookError::NotFound(_))));
}

#[test]
fn should_key_contacts_by_their_own_id_not_fixture_name() {
    let book = mock_book_with(&["carol"]);

    assert!(book.get("people/c3").is_ok());
    assert!(matches!(
        book.get("carol"),
        Err(AddressBookError::NotFound(id)) if id.as_str() == "carol"
    ));
}

#[test]
fn should_replace_loaded_contacts_on_each_provide() {
    let mut book = mock_book_with(&["alice"]);
    book.provide(["bob"]).unwrap();

    assert_eq!(book.count(&[]).unwrap(), 1);
    assert!(book.get("c1").is_err());
    assert_eq!(book.get("c2").unwrap().last_name.as_deref(), Some("Builder"));
}

#[test]
fn should_ignore_keywords() {
    let book = mock_book_with(&["alice", "bob"]);

    assert_eq!(book.count(&["nobody-matches-this"]).unwrap(), 2);
    assert_eq!(book.find(&["zzz"]).count(), 2);
}

#[test]
fn should_find_every_loaded_contact() {
    let book = mock_book_with(&["bob", "alice", "carol"]);

    let ids: Vec<String> = book
        .find(&[])
        .map(|c| c.unwrap().contact_id.to_string())
        .collect();
    assert_eq!(ids, vec!["c1", "c2", "people/c3"]);
}

#[test]
fn should_propagate_fixture_errors_from_provide() {
    let mut book = mock_book();

    let missing = book.provide(["does-not-exist"]).unwrap_err();
    assert!(matches!(missing, FixtureError::Io { .. }));

    let malformed = book.provide(["malformed"]).unwrap_err();
    assert!(matches!(malformed, FixtureError::Parse { .. }));

    let mismatch = book.provide(["unknown_field"]).unwrap_err();
    assert!(matches!(mismatch, FixtureError::Parse { .. }));
}

// ── simulated failure ────────────────────────────────────────────────────────

#[test]
fn should_fail_every_read_after_configure_error() {
    let mut book = mock_book_with(&["alice"]);
    book.configure_error();

    assert!(matches!(
        book.count(&[]),
        Err(AddressBookError::SimulatedFailure(ReadOperation::Count))
    ));
    assert!(matches!(
        book.get("any"),
        Err(AddressBookError::SimulatedFailure(ReadOperation::Get))
    ));
    assert!(matches!(
        book.get("c1"),
        Err(AddressBookError::SimulatedFailure(ReadOperation::Get))
    ));
    let found: Result<Vec<_>, _> = book.find(&[]).collect();
    assert!(matches!(
        found,
        Err(AddressBookError::SimulatedFailure(ReadOperation::Find))
    ));
}

#[test]
fn should_not_fail_find_until_iterated() {
    let mut book = mock_book();
    book.configure_error();

    // Creating the iterator is fine; only advancing it fails.
    let found = book.find(&[]);
    assert!(book.is_failing());
    assert_eq!(found.filter(Result::is_err).count(), 1);
}

#[test]
fn should_keep_recording_mutations_after_configure_error() {
    let mut book = mock_book();
    book.configure_error();

    book.update_field("c1", "nickname", "Al").unwrap();
    book.add_info("c1", "emails", "home", "a@x.com").unwrap();
    book.delete_field("c1", "birthday").unwrap();

    assert_eq!(book.updates(), vec![Mutation::update_field("c1", "nickname", "Al")]);
    assert_eq!(book.adds(), vec![Mutation::add_info("c1", "emails", "home", "a@x.com")]);
    assert_eq!(book.deletes(), vec![Mutation::delete_field("c1", "birthday")]);
}

// ── mutation logs ────────────────────────────────────────────────────────────

#[test]
fn should_record_update_field() {
    let book = mock_book();
    book.update_field("c1", "name", "Alice").unwrap();

    assert_eq!(book.updates(), vec![Mutation::update_field("c1", "name", "Alice")]);
    assert!(book.adds().is_empty());
    assert!(book.deletes().is_empty());
}

#[test]
fn should_record_adds_and_deletes_independently() {
    let book = mock_book();
    book.add_info("c1", "emails", "home", "a@x.com").unwrap();
    book.delete_info("c1", "emails", "e1").unwrap();

    assert_eq!(book.adds(), vec![Mutation::add_info("c1", "emails", "home", "a@x.com")]);
    assert_eq!(book.deletes(), vec![Mutation::delete_info("c1", "emails", "e1")]);
    assert!(book.updates().is_empty());
}

#[test]
fn should_interleave_field_and_info_mutations_in_call_order() {
    let book = mock_book();
    book.update_info("c1", "phones", "p1", "cell", "555-0100").unwrap();
    book.update_field("c1", "last_name", "Liddell").unwrap();
    book.delete_info("c1", "urls", "u1").unwrap();
    book.delete_field("c1", "nickname").unwrap();
    book.update_field("c1", "last_name", "Liddell").unwrap();

    assert_eq!(
        book.updates(),
        vec![
            Mutation::update_info("c1", "phones", "p1", "cell", "555-0100"),
            Mutation::update_field("c1", "last_name", "Liddell"),
            Mutation::update_field("c1", "last_name", "Liddell"),
        ]
    );
    assert_eq!(
        book.deletes(),
        vec![
            Mutation::delete_info("c1", "urls", "u1"),
            Mutation::delete_field("c1", "nickname"),
        ]
    );
}

#[test]
fn should_record_mutations_for_unknown_contacts_and_fields() {
    let book = mock_book();
    book.update_field("ghost", "not_a_field", "x").unwrap();

    assert_eq!(
        book.updates(),
        vec![Mutation::update_field("ghost", "not_a_field", "x")]
    );
    assert!(book.loaded().is_empty());
}
