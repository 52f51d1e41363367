//! JavaScript object representation.

use super::value::Value;
use rustc_hash::FxHashMap;

/// A JavaScript object.
///
/// Own properties are kept in a hash map for lookup, with a separate key list
/// so enumeration follows insertion order the way engines do for string keys.
#[derive(Debug, Clone, Default)]
pub struct Object {
    /// The properties
    properties: FxHashMap<String, Property>,
    /// Property keys in insertion order
    keys: Vec<String>,
    /// Whether this is an array exotic object
    array: bool,
}

impl Object {
    /// Creates a new empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an array: index properties plus a hidden `length`.
    pub fn array(values: impl IntoIterator<Item = Value>) -> Self {
        let mut obj = Self {
            array: true,
            ..Self::default()
        };
        let mut len = 0usize;
        for value in values {
            obj.set(len.to_string(), value);
            len += 1;
        }
        obj.define("length", Property::hidden(Value::Number(len as f64)));
        obj
    }

    /// Returns true for arrays.
    pub fn is_array(&self) -> bool {
        self.array
    }

    /// Gets the value of a data property.
    ///
    /// Accessor properties return `None`: reading them would run the getter,
    /// which only the evaluator may do.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key).and_then(|p| p.value())
    }

    /// Gets the full property descriptor.
    pub fn get_property(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    /// Sets an enumerable, writable data property.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.define(key, Property::data(value.into()));
    }

    /// Defines a property with an explicit descriptor.
    ///
    /// Redefining an existing key keeps its enumeration position.
    pub fn define(&mut self, key: impl Into<String>, property: Property) {
        let key = key.into();
        if !self.properties.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.properties.insert(key, property);
    }

    /// Checks if an own property exists, enumerable or not.
    pub fn has(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// All own property keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Own enumerable keys in insertion order (`Object.keys`).
    pub fn enumerable_keys(&self) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .filter(|k| self.properties[k.as_str()].enumerable)
            .map(String::as_str)
    }

    /// Iterates own properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.keys
            .iter()
            .map(|k| (k.as_str(), &self.properties[k.as_str()]))
    }

    /// Number of own properties.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the object has no own properties.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Where a property's value lives.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// Plain value
    Data(Value),
    /// Getter/setter pair
    Accessor {
        /// Getter function, if any
        get: Option<Value>,
        /// Setter function, if any
        set: Option<Value>,
    },
}

/// A property descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property's value or accessor pair
    pub slot: Slot,
    /// Whether the property is writable
    pub writable: bool,
    /// Whether the property is enumerable
    pub enumerable: bool,
    /// Whether the property is configurable
    pub configurable: bool,
}

impl Property {
    /// An ordinary enumerable, writable, configurable data property.
    pub fn data(value: Value) -> Self {
        Self {
            slot: Slot::Data(value),
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// A non-enumerable data property, as `Object.defineProperty` produces
    /// when only `value` is given.
    pub fn hidden(value: Value) -> Self {
        Self {
            slot: Slot::Data(value),
            writable: false,
            enumerable: false,
            configurable: false,
        }
    }

    /// An enumerable accessor property.
    pub fn accessor(get: Option<Value>, set: Option<Value>) -> Self {
        Self {
            slot: Slot::Accessor { get, set },
            writable: false,
            enumerable: true,
            configurable: true,
        }
    }

    /// The stored value, if this is a data property.
    pub fn value(&self) -> Option<&Value> {
        match &self.slot {
            Slot::Data(value) => Some(value),
            Slot::Accessor { .. } => None,
        }
    }

    /// Returns true if this is an accessor property.
    pub fn is_accessor(&self) -> bool {
        matches!(self.slot, Slot::Accessor { .. })
    }
}
