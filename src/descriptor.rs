//! Runtime type descriptions: the introspection surface the engine resolves
//! against.
//!
//! Rust has no ambient reflection, so the member directory a hydration engine
//! needs — field names, method names, visibility, arity — is modeled as plain
//! data. A [`TypeDescriptor`] is built once (usually at startup) through
//! [`TypeDescriptorBuilder`] and registered in a [`TypeRegistry`], which plays
//! the role of the reflection facility: engines look types up by their
//! fully-qualified name and fail with [`crate::HydrateError::Reflection`] when
//! the name is unknown.
//!
//! Methods carry *pre-bound* callables ([`MutatorFn`] / [`AccessorFn`])
//! alongside their metadata. The resolver validates name, visibility and
//! arity once at engine construction and stores the callable in its strategy
//! table, so `hydrate`/`extract` never resolve names again.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{HydrateError, Result};
use crate::instance::Instance;

/// Declared visibility of a field or method.
///
/// Only [`Visibility::Public`] methods qualify for method-based access;
/// direct field access deliberately ignores field visibility (see
/// [`Instance::set_field`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Accessible from anywhere.
    Public,
    /// Accessible from the type and its subtypes.
    Protected,
    /// Accessible only from the type itself.
    Private,
}

/// A declared field of a [`TypeDescriptor`].
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// The field's name as the type declares it.
    pub name: String,
    /// Declared visibility. Recorded for completeness; direct access
    /// intentionally bypasses it.
    pub visibility: Visibility,
    /// Static fields belong to the type, not to instances, and are never
    /// reachable through the engine.
    pub is_static: bool,
}

/// A pre-bound mutator body: writes one value into an instance.
pub type MutatorFn = Arc<dyn Fn(&mut Instance, Value) + Send + Sync>;

/// A pre-bound accessor body: reads one value out of an instance.
pub type AccessorFn = Arc<dyn Fn(&Instance) -> Value + Send + Sync>;

/// The executable body of a declared method.
///
/// The engine only ever invokes convention-named `set*`/`get*` methods, so a
/// body is either a mutator (one value in) or an accessor (one value out).
#[derive(Clone)]
pub enum MethodBody {
    /// Consumes a value; invoked by `hydrate`.
    Mutator(MutatorFn),
    /// Produces a value; invoked by `extract`.
    Accessor(AccessorFn),
}

impl fmt::Debug for MethodBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mutator(_) => write!(f, "Mutator(..)"),
            Self::Accessor(_) => write!(f, "Accessor(..)"),
        }
    }
}

/// A declared method of a [`TypeDescriptor`]: metadata plus body.
///
/// The metadata mirrors what a member directory exposes. The resolver selects
/// a method only when it is public, non-abstract, non-static and its declared
/// parameter count matches the direction (1 for mutators, 0 for accessors);
/// anything else leaves the direct-access fallback in place.
#[derive(Debug, Clone)]
pub struct MethodDef {
    /// Exact method name, e.g. `setAmount`.
    pub name: String,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Static methods never qualify for per-instance access.
    pub is_static: bool,
    /// Abstract methods have no invokable implementation and never qualify.
    pub is_abstract: bool,
    /// Declared parameter count (excluding the receiver).
    pub arity: usize,
    /// The invokable body.
    pub body: MethodBody,
}

/// An introspectable description of a target object type.
///
/// Descriptors are immutable once built. Field order is preserved as
/// declared; the method directory is keyed by exact name for O(1) lookup
/// during resolution.
#[derive(Debug)]
pub struct TypeDescriptor {
    name: String,
    fields: Vec<FieldDef>,
    methods: HashMap<String, Arc<MethodDef>>,
}

impl TypeDescriptor {
    /// Starts building a descriptor for the type with the given
    /// fully-qualified name.
    pub fn builder(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            name: name.into(),
            fields: Vec::new(),
            methods: HashMap::new(),
        }
    }

    /// The type's fully-qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Looks up a declared method by exact name.
    pub fn method(&self, name: &str) -> Option<&Arc<MethodDef>> {
        self.methods.get(name)
    }
}

/// Builder for [`TypeDescriptor`].
///
/// The `mutator`/`accessor` shorthands register a public, concrete instance
/// method with the conventional arity; [`TypeDescriptorBuilder::method`]
/// accepts a full [`MethodDef`] when other metadata is needed (for stubbing a
/// private, static or abstract member, for instance).
#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    name: String,
    fields: Vec<FieldDef>,
    methods: HashMap<String, Arc<MethodDef>>,
}

impl TypeDescriptorBuilder {
    /// Declares an instance field.
    pub fn field(mut self, name: impl Into<String>, visibility: Visibility) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            visibility,
            is_static: false,
        });
        self
    }

    /// Declares a static field. Static fields are enumerated but never
    /// hydrated or extracted.
    pub fn static_field(mut self, name: impl Into<String>, visibility: Visibility) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            visibility,
            is_static: true,
        });
        self
    }

    /// Declares a public instance mutator with a single parameter.
    pub fn mutator(
        self,
        name: impl Into<String>,
        f: impl Fn(&mut Instance, Value) + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        self.method(MethodDef {
            name,
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            arity: 1,
            body: MethodBody::Mutator(Arc::new(f)),
        })
    }

    /// Declares a public instance accessor with no parameters.
    pub fn accessor(
        self,
        name: impl Into<String>,
        f: impl Fn(&Instance) -> Value + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        self.method(MethodDef {
            name,
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            arity: 0,
            body: MethodBody::Accessor(Arc::new(f)),
        })
    }

    /// Declares a method with full metadata control. A method with the same
    /// name replaces the earlier declaration.
    pub fn method(mut self, def: MethodDef) -> Self {
        self.methods.insert(def.name.clone(), Arc::new(def));
        self
    }

    /// Finalizes the descriptor.
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name,
            fields: self.fields,
            methods: self.methods,
        }
    }
}

/// The introspection facility: a directory of type descriptors keyed by
/// fully-qualified name.
///
/// Registration is last-write-wins; [`TypeRegistry::describe`] is the single
/// entry point engines use, and the only place a
/// [`crate::HydrateError::Reflection`] error originates.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<String, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor under its own name and returns the shared
    /// handle. Objects of this type are created from the returned handle so
    /// that type identity stays exact.
    pub fn register(&mut self, ty: TypeDescriptor) -> Arc<TypeDescriptor> {
        let ty = Arc::new(ty);
        self.types.insert(ty.name().to_string(), Arc::clone(&ty));
        ty
    }

    /// Looks up the descriptor for `name`.
    ///
    /// # Errors
    /// [`HydrateError::Reflection`] when no descriptor is registered under
    /// `name`.
    pub fn describe(&self, name: &str) -> Result<Arc<TypeDescriptor>> {
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| HydrateError::Reflection(format!("type `{name}` is not registered")))
    }
}
