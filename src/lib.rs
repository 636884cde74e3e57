//! # Hydrator
//!
//! A mapping-driven hydration engine: moves values between plain string-keyed
//! records (e.g. decoded request payloads) and the fields of fixed-shape
//! object instances, in both directions.
//!
//! ## Overview
//!
//! Most of the engine's work happens once, at construction. Given a target
//! type and an aliasing table, it decides *per field* whether that field is
//! accessed through a mutator/accessor method pair or through direct field
//! manipulation, and then replays that decision on every call. The moving
//! parts:
//!
//! *   **Mapping Normalizer:** turns the caller's aliasing declarations
//!     (bare field names and explicit `key → field` pairs) into one canonical
//!     ordered table with no implicit entries.
//! *   **Field Access Resolver:** inspects the target type once and builds
//!     two independent per-field lookup tables — one for writing, one for
//!     reading — because a field may have a mutator but no accessor or vice
//!     versa.
//! *   **Engine:** [`Hydrator::hydrate`] copies present record values into an
//!     object; [`Hydrator::extract`] reads mapped fields into a fresh record.
//!     Both consult only the precomputed tables.
//!
//! ## Access Strategy Selection
//!
//! For every non-static field the resolver registers a direct-access
//! fallback, then upgrades it to method access when the type declares a
//! public, concrete, instance method named `set<CapitalizedField>` (one
//! parameter) or `get<CapitalizedField>` (no parameters). Method access wins
//! so the target type can transform or validate stored values; direct access
//! is the universal fallback and deliberately bypasses declared field
//! visibility. [`HydratorOptions`] can suppress either upgrade.
//!
//! ## Type Descriptions
//!
//! Rust has no runtime reflection, so target types are described explicitly:
//! a [`TypeDescriptor`] enumerates fields and methods (with pre-bound
//! callables), and a [`TypeRegistry`] resolves fully-qualified type names for
//! engine construction. Objects are [`Instance`] values carrying their
//! descriptor handle; type identity checks are exact.
//!
//! ## Usage
//!
//! ```rust
//! use hydrator::{Hydrator, Instance, Record, TypeDescriptor, TypeRegistry, Value, Visibility};
//!
//! let mut registry = TypeRegistry::new();
//! let invoice = registry.register(
//!     TypeDescriptor::builder("billing.Invoice")
//!         .field("amount", Visibility::Protected)
//!         .field("currency", Visibility::Protected)
//!         // Stores cents; the engine prefers this over a direct write.
//!         .mutator("setAmount", |obj, v| {
//!             let units = v.as_i64().unwrap_or(0);
//!             obj.set_field("amount", Value::from(units * 100));
//!         })
//!         .build(),
//! );
//!
//! let hydrator = Hydrator::new(
//!     &registry,
//!     "billing.Invoice",
//!     [("total", "amount"), ("currency", "currency")],
//! )?;
//!
//! let record: Record = serde_json::json!({ "total": 12, "currency": "EUR" })
//!     .as_object()
//!     .cloned()
//!     .unwrap_or_default();
//!
//! let mut object = Instance::new(invoice);
//! hydrator.hydrate(&mut object, &record)?;
//! assert_eq!(object.field("amount"), Some(&Value::from(1200)));
//!
//! let out = hydrator.extract(&object)?;
//! assert_eq!(out.get("total"), Some(&Value::from(1200)));
//! assert_eq!(out.get("currency"), Some(&Value::from("EUR")));
//! # Ok::<(), hydrator::HydrateError>(())
//! ```
//!
//! ## Error Semantics
//!
//! * Both operations fail with [`HydrateError::TypeMismatch`] when the object
//!   is not an instance of the configured type.
//! * `hydrate` fails with [`HydrateError::UnknownField`] when a present
//!   record value maps to a field the type never declared; `extract` silently
//!   omits such keys instead. The asymmetry is deliberate.
//! * A record key bound to `null` counts as absent, so callers can skip
//!   updating a field by sending `null` rather than omitting the key.
//!
//! ## Safety and Error Handling
//!
//! * **No Panics:** no `unwrap()` or `panic!()` in the library (enforced by
//!   clippy lints).
//! * **No Unsafe:** the visibility bypass is plain data access on the
//!   instance's field store, not pointer tricks.
//! * **Comprehensive Errors:** all failures map to a [`HydrateError`].

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

// --- PUBLIC API MODULES ---
pub mod descriptor;
pub mod error;
pub mod hydrator;
pub mod instance;
pub mod mapping;
pub mod resolver;

// --- RE-EXPORTS ---

pub use descriptor::{
    AccessorFn, FieldDef, MethodBody, MethodDef, MutatorFn, TypeDescriptor, TypeDescriptorBuilder,
    TypeRegistry, Visibility,
};
pub use error::{HydrateError, Result};
pub use hydrator::{Hydrator, HydratorOptions, Record};
pub use instance::Instance;
pub use mapping::{AliasTable, MapEntry};

// Record values are `serde_json` values; re-exported so callers and tests
// don't need a direct dependency for the common case.
pub use serde_json::Value;
