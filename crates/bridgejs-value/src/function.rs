//! Function representation.

use super::object::Object;
use super::value::Value;

/// A native (Rust) function.
pub type NativeFunction = fn(&[Value]) -> Result<Value, String>;

/// A callable value backed by a native function.
///
/// Functions are objects too: `module.exports = fn; fn.bar = 1` hangs own
/// properties off the function, so each callable carries a property table.
#[derive(Clone)]
pub struct Callable {
    /// The function name
    pub name: String,
    /// The arity (-1 for variadic)
    pub arity: i32,
    /// The native function pointer
    pub func: NativeFunction,
    /// Own properties of the function object
    pub properties: Object,
}

impl Callable {
    /// Creates a new native function with no own properties.
    pub fn new(name: impl Into<String>, arity: i32, func: NativeFunction) -> Self {
        Self::with_properties(name, arity, func, Object::new())
    }

    /// Creates a native function carrying own properties.
    pub fn with_properties(
        name: impl Into<String>,
        arity: i32,
        func: NativeFunction,
        properties: Object,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            func,
            properties,
        }
    }

    /// Invokes the function with the given arguments.
    pub fn call(&self, args: &[Value]) -> Result<Value, String> {
        (self.func)(args)
    }
}

impl std::fmt::Debug for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}
