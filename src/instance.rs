//! Runtime object instances.
//!
//! An [`Instance`] pairs a shared [`TypeDescriptor`] handle (its runtime type
//! identity) with a raw field-value store. The store is the crate's stand-in
//! for reflective field access that ignores declared visibility: the engine's
//! direct-access strategy and descriptor method bodies read and write it
//! without any visibility check. This breaks encapsulation intentionally and
//! only within the hydration machinery.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::descriptor::TypeDescriptor;

/// An object instance of a described type.
#[derive(Debug, Clone)]
pub struct Instance {
    ty: Arc<TypeDescriptor>,
    values: HashMap<String, Value>,
}

impl Instance {
    /// Creates an instance of the given type with every declared instance
    /// field initialized to `Value::Null`.
    pub fn new(ty: Arc<TypeDescriptor>) -> Self {
        let values = ty
            .fields()
            .iter()
            .filter(|f| !f.is_static)
            .map(|f| (f.name.clone(), Value::Null))
            .collect();
        Self { ty, values }
    }

    /// The instance's type descriptor handle.
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.ty
    }

    /// True when this instance's type is exactly `ty` (pointer identity, not
    /// name equality).
    pub fn is_instance_of(&self, ty: &Arc<TypeDescriptor>) -> bool {
        Arc::ptr_eq(&self.ty, ty)
    }

    /// Reads a field's current value, ignoring declared visibility.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Writes a field's value, ignoring declared visibility.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }
}
