use crate::FieldValue;
use crate::validators::{email, integer_range, max_items, non_blank, slug, text_length};

use std::collections::BTreeSet;

use googletest::prelude::*;
use uuid::Uuid;

fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

#[test]
fn given_text_length_bounds_when_validated_then_counts_characters() {
    let check = text_length(3, 5);

    assert_that!(check(&text("ab")), err(anything()));
    assert_that!(check(&text("abc")), ok(anything()));
    assert_that!(check(&text("äöüßé")), ok(anything()));
    assert_that!(check(&text("abcdef")), err(anything()));
}

#[test]
fn given_too_long_text_when_validated_then_message_names_limit() {
    let message = text_length(0, 4)(&text("too long")).unwrap_err();
    assert_that!(message, contains_substring("4 characters"));
}

#[test]
fn given_whitespace_when_non_blank_then_rejected() {
    assert_that!(non_blank()(&text("  \t")), err(anything()));
    assert_that!(non_blank()(&text(" a ")), ok(anything()));
}

#[test]
fn given_non_text_when_text_validator_then_rejected() {
    assert_that!(non_blank()(&FieldValue::Integer(1)), err(anything()));
}

#[test]
fn given_addresses_when_email_then_only_well_formed_pass() {
    let check = email();

    assert_that!(check(&text("jane@example.com")), ok(anything()));
    assert_that!(check(&text("jane.doe@mail.example.org")), ok(anything()));
    assert_that!(check(&text("jane@example")), err(anything()));
    assert_that!(check(&text("@example.com")), err(anything()));
    assert_that!(check(&text("jane@@example.com")), err(anything()));
    assert_that!(check(&text("jane doe@example.com")), err(anything()));
    assert_that!(check(&text("jane@example..com")), err(anything()));
}

#[test]
fn given_slugs_when_validated_then_lowercase_identifiers_pass() {
    let check = slug();

    assert_that!(check(&text("in_progress")), ok(anything()));
    assert_that!(check(&text("to-do2")), ok(anything()));
    assert_that!(check(&text("InProgress")), err(anything()));
    assert_that!(check(&text("2do")), err(anything()));
    assert_that!(check(&text("")), err(anything()));
    assert_that!(check(&text("in progress")), err(anything()));
}

#[test]
fn given_integer_range_when_validated_then_bounds_inclusive() {
    let check = integer_range(0, 10);

    assert_that!(check(&FieldValue::Integer(0)), ok(anything()));
    assert_that!(check(&FieldValue::Integer(10)), ok(anything()));
    assert_that!(check(&FieldValue::Integer(-1)), err(anything()));
    assert_that!(check(&FieldValue::Integer(11)), err(anything()));
    assert_that!(check(&text("5")), err(anything()));
}

#[test]
fn given_too_many_ids_when_max_items_then_rejected() {
    // Given
    let ids: BTreeSet<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
    let value = FieldValue::References(ids);

    // Then
    assert_that!(max_items(3)(&value), ok(anything()));
    assert_that!(max_items(2)(&value), err(anything()));
}
