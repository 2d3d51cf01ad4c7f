//! Plain objects with property descriptors
//!
//! Objects hold insertion-ordered own properties (data or accessor
//! descriptors) and an optional delegate ("prototype") reference fixed at
//! creation. Reads fall back along the delegate chain; accessor properties
//! invoke their getter/setter with the holding value as receiver.

use crate::error::ShimResult;
use crate::value::Value;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Property attributes
#[derive(Clone, Copy, Debug, Default)]
pub struct PropertyAttributes {
    /// Property is writable
    pub writable: bool,
    /// Property is enumerable
    pub enumerable: bool,
    /// Property is configurable
    pub configurable: bool,
}

impl PropertyAttributes {
    /// Default attributes for plain assignment
    pub const fn data() -> Self {
        Self {
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }
}

/// Property descriptor
#[derive(Clone, Debug)]
pub enum PropertyDescriptor {
    /// Data property
    Data {
        /// The value
        value: Value,
        /// Attributes
        attributes: PropertyAttributes,
    },
    /// Accessor property (getter/setter pair)
    Accessor {
        /// Getter function
        get: Option<Value>,
        /// Setter function
        set: Option<Value>,
        /// Attributes
        attributes: PropertyAttributes,
    },
}

impl PropertyDescriptor {
    /// Create a data property with plain-assignment attributes
    pub fn data(value: Value) -> Self {
        Self::Data {
            value,
            attributes: PropertyAttributes::data(),
        }
    }

    /// Create a data property with specific attributes
    pub fn data_with_attrs(value: Value, attributes: PropertyAttributes) -> Self {
        Self::Data { value, attributes }
    }

    /// Create an accessor property
    pub fn accessor(get: Option<Value>, set: Option<Value>, attributes: PropertyAttributes) -> Self {
        Self::Accessor {
            get,
            set,
            attributes,
        }
    }

    /// Get the value (for data properties)
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Data { value, .. } => Some(value),
            Self::Accessor { .. } => None,
        }
    }

    /// Check if writable (accessors are never directly writable)
    pub fn is_writable(&self) -> bool {
        match self {
            Self::Data { attributes, .. } => attributes.writable,
            Self::Accessor { .. } => false,
        }
    }

    /// Check if enumerable
    pub fn is_enumerable(&self) -> bool {
        match self {
            Self::Data { attributes, .. } | Self::Accessor { attributes, .. } => {
                attributes.enumerable
            }
        }
    }
}

/// A plain object
///
/// Thread-safe with interior mutability; the delegate reference is fixed
/// at creation.
pub struct PlainObject {
    properties: RwLock<IndexMap<String, PropertyDescriptor>>,
    prototype: Option<Arc<PlainObject>>,
}

impl PlainObject {
    /// Create a new object delegating to `prototype`
    pub fn new(prototype: Option<Arc<PlainObject>>) -> Self {
        Self {
            properties: RwLock::new(IndexMap::new()),
            prototype,
        }
    }

    /// The delegate reference, if any
    pub fn prototype(&self) -> Option<Arc<PlainObject>> {
        self.prototype.clone()
    }

    /// Read a property, walking the delegate chain.
    ///
    /// `this` is the receiver passed to a getter if the property turns out
    /// to be an accessor.
    pub fn get(&self, this: &Value, name: &str) -> ShimResult<Option<Value>> {
        // Clone the descriptor out first so the read lock is released
        // before any getter runs; a getter may write back to this object.
        let own = self.properties.read().get(name).cloned();
        if let Some(desc) = own {
            return match desc {
                PropertyDescriptor::Data { value, .. } => Ok(Some(value)),
                PropertyDescriptor::Accessor { get, .. } => match get.and_then(|g| g.as_function())
                {
                    Some(getter) => getter.call(this, &[]).map(Some),
                    None => Ok(Some(Value::undefined())),
                },
            };
        }
        match &self.prototype {
            Some(proto) => proto.get(this, name),
            None => Ok(None),
        }
    }

    /// Read an own data property without touching accessors or the chain
    pub fn get_own_value(&self, name: &str) -> Option<Value> {
        self.properties.read().get(name).and_then(|d| d.value().cloned())
    }

    /// Write a property.
    ///
    /// An accessor anywhere on the chain wins: its setter is invoked with
    /// `this` (or the write is rejected if there is no setter). A
    /// non-writable own data property rejects the write. Returns whether
    /// the write took effect.
    pub fn set(&self, this: &Value, name: &str, value: Value) -> ShimResult<bool> {
        if let Some(PropertyDescriptor::Accessor { set, .. }) = self.lookup_descriptor(name) {
            return match set.and_then(|s| s.as_function()) {
                Some(setter) => {
                    setter.call(this, &[value])?;
                    Ok(true)
                }
                None => Ok(false),
            };
        }

        let mut props = self.properties.write();
        if let Some(existing) = props.get(name)
            && !existing.is_writable()
        {
            return Ok(false);
        }
        props.insert(name.to_string(), PropertyDescriptor::data(value));
        Ok(true)
    }

    /// Plain assignment of an own enumerable data property
    pub fn set_value(&self, name: &str, value: Value) {
        self.properties
            .write()
            .insert(name.to_string(), PropertyDescriptor::data(value));
    }

    /// Install a descriptor on an own property, replacing any existing one
    pub fn define_property(&self, name: &str, descriptor: PropertyDescriptor) {
        self.properties.write().insert(name.to_string(), descriptor);
    }

    /// Clone the own descriptor for `name`, if any
    pub fn get_own_descriptor(&self, name: &str) -> Option<PropertyDescriptor> {
        self.properties.read().get(name).cloned()
    }

    /// Check for an own property
    pub fn has_own(&self, name: &str) -> bool {
        self.properties.read().contains_key(name)
    }

    /// Own enumerable property names, in insertion order
    pub fn own_keys(&self) -> Vec<String> {
        self.properties
            .read()
            .iter()
            .filter(|(_, desc)| desc.is_enumerable())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// All own property names, in insertion order
    pub fn own_property_names(&self) -> Vec<String> {
        self.properties.read().keys().cloned().collect()
    }

    /// Find the getter for `name` anywhere on the chain
    pub fn lookup_getter(&self, name: &str) -> Option<Value> {
        match self.lookup_descriptor(name) {
            Some(PropertyDescriptor::Accessor { get, .. }) => get,
            _ => None,
        }
    }

    /// Find the setter for `name` anywhere on the chain
    pub fn lookup_setter(&self, name: &str) -> Option<Value> {
        match self.lookup_descriptor(name) {
            Some(PropertyDescriptor::Accessor { set, .. }) => set,
            _ => None,
        }
    }

    fn lookup_descriptor(&self, name: &str) -> Option<PropertyDescriptor> {
        if let Some(desc) = self.properties.read().get(name) {
            return Some(desc.clone());
        }
        self.prototype.as_ref().and_then(|p| p.lookup_descriptor(name))
    }
}

impl std::fmt::Debug for PlainObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlainObject{{{}}}", self.own_property_names().join(", "))
    }
}
