#![allow(missing_docs)]

use hydrator::{AliasTable, MapEntry};

fn pairs(table: &AliasTable) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(k, f)| (k.to_string(), f.to_string()))
        .collect()
}

// --- TESTS ---

/// A bare field name aliases to itself.
#[test]
fn bare_names_alias_to_themselves() {
    let table = AliasTable::normalize(["one", "two"]);

    assert_eq!(
        pairs(&table),
        vec![
            ("one".to_string(), "one".to_string()),
            ("two".to_string(), "two".to_string()),
        ]
    );
    assert_eq!(table.field_for("one"), Some("one"));
}

/// Explicit pairs keep both sides and their declaration order.
#[test]
fn explicit_pairs_are_preserved_in_order() {
    let table = AliasTable::normalize([("first", "one"), ("second", "two")]);

    assert_eq!(
        pairs(&table),
        vec![
            ("first".to_string(), "one".to_string()),
            ("second".to_string(), "two".to_string()),
        ]
    );
    assert_eq!(table.field_for("first"), Some("one"));
    assert_eq!(table.field_for("one"), None);
}

/// Bare and aliased declarations mix freely, order intact.
#[test]
fn mixed_declarations_preserve_first_seen_order() {
    let entries: Vec<MapEntry> = vec![
        "one".into(),
        ("second", "two").into(),
        "three".into(),
    ];
    let table = AliasTable::normalize(entries);

    assert_eq!(
        pairs(&table),
        vec![
            ("one".to_string(), "one".to_string()),
            ("second".to_string(), "two".to_string()),
            ("three".to_string(), "three".to_string()),
        ]
    );
}

/// A duplicated external key overwrites the earlier field name but keeps the
/// first-seen position.
#[test]
fn duplicate_keys_are_last_write_wins_in_place() {
    let table = AliasTable::normalize([("a", "one"), ("b", "two"), ("a", "three")]);

    assert_eq!(
        pairs(&table),
        vec![
            ("a".to_string(), "three".to_string()),
            ("b".to_string(), "two".to_string()),
        ]
    );
    assert_eq!(table.len(), 2);
}

/// Normalizing an already-canonical table of explicit pairs reproduces it
/// unchanged.
#[test]
fn normalization_is_idempotent() {
    let first = AliasTable::normalize([("first", "one"), ("second", "two"), ("two", "two")]);

    let second = AliasTable::normalize(
        first
            .iter()
            .map(|(k, f)| (k.to_string(), f.to_string()))
            .collect::<Vec<_>>(),
    );

    assert_eq!(first, second);
}

/// Entries missing either side are dropped, keeping the non-empty invariant.
#[test]
fn empty_keys_and_fields_are_dropped() {
    let table = AliasTable::normalize([("", "one"), ("second", ""), ("third", "three")]);

    assert_eq!(
        pairs(&table),
        vec![("third".to_string(), "three".to_string())]
    );

    let bare: Vec<MapEntry> = vec!["".into(), "one".into()];
    assert_eq!(AliasTable::normalize(bare).len(), 1);
}

/// The documented configuration shapes deserialize into entries.
#[test]
fn entries_deserialize_from_config_shapes() {
    let entries: Vec<MapEntry> =
        serde_json::from_str(r#"["one", {"key": "second", "field": "two"}]"#)
            .expect("documented shapes");

    assert_eq!(
        entries,
        vec![
            MapEntry::Field("one".into()),
            MapEntry::Aliased {
                key: "second".into(),
                field: "two".into(),
            },
        ]
    );

    let table = AliasTable::normalize(entries);
    assert_eq!(table.field_for("second"), Some("two"));
}

/// An empty declaration sequence yields an empty canonical table.
#[test]
fn empty_input_yields_empty_table() {
    let table = AliasTable::normalize(std::iter::empty::<MapEntry>());
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}
