#![allow(missing_docs)]

use hydrator::resolver::{resolve, ReadStrategy, WriteStrategy};
use hydrator::{HydratorOptions, TypeDescriptor, Value, Visibility};

fn described() -> TypeDescriptor {
    TypeDescriptor::builder("stub.Described")
        .field("plain", Visibility::Protected)
        .field("wrapped", Visibility::Private)
        .static_field("shared", Visibility::Public)
        .mutator("setWrapped", |obj, v| obj.set_field("wrapped", v))
        .accessor("getWrapped", |obj| {
            obj.field("wrapped").cloned().unwrap_or(Value::Null)
        })
        .build()
}

// --- TESTS ---

/// Every non-static field is reachable: a direct fallback exists in both
/// tables, and static fields appear in neither.
#[test]
fn every_non_static_field_gets_a_direct_fallback() {
    let tables = resolve(&described(), &HydratorOptions::default());

    assert!(matches!(tables.write.get("plain"), Some(WriteStrategy::Direct)));
    assert!(matches!(tables.read.get("plain"), Some(ReadStrategy::Direct)));
    assert!(tables.write.get("shared").is_none());
    assert!(tables.read.get("shared").is_none());
}

/// Qualifying convention methods override the fallback, pre-bound by name.
#[test]
fn qualifying_methods_override_the_fallback() {
    let tables = resolve(&described(), &HydratorOptions::default());

    assert!(matches!(
        tables.write.get("wrapped"),
        Some(WriteStrategy::Method { name, .. }) if name == "setWrapped"
    ));
    assert!(matches!(
        tables.read.get("wrapped"),
        Some(ReadStrategy::Method { name, .. }) if name == "getWrapped"
    ));
}

/// The write and read tables are independent: a setter-only field keeps
/// direct reads, a getter-only field keeps direct writes.
#[test]
fn write_and_read_tables_are_independent() {
    let ty = TypeDescriptor::builder("stub.Lopsided")
        .field("in_only", Visibility::Protected)
        .field("out_only", Visibility::Protected)
        .mutator("setIn_only", |obj, v| obj.set_field("in_only", v))
        .accessor("getOut_only", |obj| {
            obj.field("out_only").cloned().unwrap_or(Value::Null)
        })
        .build();

    let tables = resolve(&ty, &HydratorOptions::default());

    assert!(matches!(tables.write.get("in_only"), Some(WriteStrategy::Method { .. })));
    assert!(matches!(tables.read.get("in_only"), Some(ReadStrategy::Direct)));
    assert!(matches!(tables.write.get("out_only"), Some(WriteStrategy::Direct)));
    assert!(matches!(tables.read.get("out_only"), Some(ReadStrategy::Method { .. })));
}

/// The ignore flags suppress method selection per direction.
#[test]
fn ignore_flags_suppress_method_selection() {
    let ty = described();

    let tables = resolve(
        &ty,
        &HydratorOptions {
            ignore_mutators: true,
            ignore_accessors: false,
        },
    );
    assert!(matches!(tables.write.get("wrapped"), Some(WriteStrategy::Direct)));
    assert!(matches!(tables.read.get("wrapped"), Some(ReadStrategy::Method { .. })));

    let tables = resolve(
        &ty,
        &HydratorOptions {
            ignore_mutators: false,
            ignore_accessors: true,
        },
    );
    assert!(matches!(tables.write.get("wrapped"), Some(WriteStrategy::Method { .. })));
    assert!(matches!(tables.read.get("wrapped"), Some(ReadStrategy::Direct)));
}

/// A convention-named method whose body kind does not match the direction
/// never qualifies.
#[test]
fn body_kind_must_match_direction() {
    use std::sync::Arc;

    use hydrator::{MethodBody, MethodDef};

    let ty = TypeDescriptor::builder("stub.Mismatched")
        .field("one", Visibility::Protected)
        .method(MethodDef {
            name: "setOne".into(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            arity: 1,
            // Accessor body behind a mutator name.
            body: MethodBody::Accessor(Arc::new(|_| Value::Null)),
        })
        .build();

    let tables = resolve(&ty, &HydratorOptions::default());
    assert!(matches!(tables.write.get("one"), Some(WriteStrategy::Direct)));
}
