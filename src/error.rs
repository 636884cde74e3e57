//! Centralized error handling for the hydration engine.
//!
//! All failure conditions are propagated through the `Result` type; the crate
//! enforces this with `#![deny(clippy::panic)]` and
//! `#![deny(clippy::unwrap_used)]`.
//!
//! ## Error Categories
//!
//! Errors are categorized by the phase that raises them:
//!
//! - **Reflection** ([`HydrateError::Reflection`]): engine construction — the
//!   target type could not be introspected (unknown type name).
//! - **TypeMismatch** ([`HydrateError::TypeMismatch`]): hydrate/extract
//!   precondition — the supplied object is not an instance of the configured
//!   type.
//! - **UnknownField** ([`HydrateError::UnknownField`]): hydrate only — the
//!   record supplied a value for a mapped key whose field does not exist on
//!   the type.
//!
//! Errors surface immediately to the caller. There is no internal retry and
//! no rollback: fields already written before a failing key in `hydrate`
//! stay written.
//!
//! ## Usage Patterns
//!
//! ```rust
//! use hydrator::{HydrateError, Hydrator, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! match Hydrator::new(&registry, "app.User", ["name"]) {
//!     Ok(_) => unreachable!("nothing registered"),
//!     Err(HydrateError::Reflection(msg)) => assert!(msg.contains("app.User")),
//!     Err(e) => panic!("unexpected error: {e}"),
//! }
//! ```

use std::fmt;

/// A specialized `Result` type for hydration operations.
///
/// Used throughout the library to simplify error handling. Equivalent to
/// `std::result::Result<T, HydrateError>`.
pub type Result<T> = std::result::Result<T, HydrateError>;

/// The master error enum covering all failure domains of the engine.
///
/// The type is `Clone` so errors can be stored for later analysis or shared
/// across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrateError {
    /// The target type could not be introspected at construction time.
    ///
    /// Raised by [`crate::TypeRegistry::describe`] (and therefore by the
    /// [`crate::Hydrator`] constructors) when the requested type name has no
    /// registered descriptor. The string names the offending type.
    Reflection(String),

    /// The supplied object is not an instance of the configured type.
    ///
    /// Both `hydrate` and `extract` check type identity before touching any
    /// field. Identity is exact: an object of a different descriptor fails
    /// even if the descriptors share a name.
    TypeMismatch {
        /// Fully-qualified name of the type the engine was configured with.
        expected: String,
    },

    /// A mapped key carried a value but its field does not exist on the type.
    ///
    /// Raised only by `hydrate`, and only when the record actually supplies a
    /// present (non-null) value for the key. This can only happen when the
    /// alias table references a field name the type never declared; `extract`
    /// silently omits such keys instead.
    UnknownField {
        /// Fully-qualified name of the configured type.
        type_name: String,
        /// The field name the alias table pointed at.
        field: String,
    },
}

impl fmt::Display for HydrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reflection(s) => write!(f, "Reflection Error: {s}"),
            Self::TypeMismatch { expected } => {
                write!(f, "Type Mismatch: object must be an instance of {expected}")
            }
            Self::UnknownField { type_name, field } => {
                write!(f, "Unknown Field: type {type_name} has no field `{field}`")
            }
        }
    }
}

impl std::error::Error for HydrateError {}
