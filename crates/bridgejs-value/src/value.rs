//! JavaScript value representation.

use super::function::{Callable, NativeFunction};
use super::object::{Object, Slot};
use std::fmt;
use std::sync::Arc;

/// A JavaScript value.
///
/// Objects and functions are reference types: cloning a `Value` shares the
/// same allocation, and equality between them is identity. Values are
/// thread-safe and can be shared between tasks.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// undefined
    #[default]
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// String
    String(String),
    /// Object reference
    Object(Arc<Object>),
    /// Function reference
    Function(Arc<Callable>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            // IEEE comparison already makes NaN unequal to itself
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// Wraps an object into a fresh object reference.
    pub fn object(object: Object) -> Self {
        Value::Object(Arc::new(object))
    }

    /// Creates a native function value.
    pub fn function(name: impl Into<String>, arity: i32, func: NativeFunction) -> Self {
        Value::Function(Arc::new(Callable::new(name, arity, func)))
    }

    /// Creates a native function value with own properties.
    pub fn function_with_properties(
        name: impl Into<String>,
        arity: i32,
        func: NativeFunction,
        properties: Object,
    ) -> Self {
        Value::Function(Arc::new(Callable::with_properties(
            name, arity, func, properties,
        )))
    }

    /// Returns the object behind this value, if it is a plain object.
    pub fn as_object(&self) -> Option<&Arc<Object>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Own property table of an object or function; `None` for primitives.
    pub fn own_properties(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(&**obj),
            Value::Function(callable) => Some(&callable.properties),
            _ => None,
        }
    }

    /// Calls this value as a function.
    pub fn call(&self, args: &[Value]) -> Result<Value, String> {
        match self {
            Value::Function(callable) => callable.call(args),
            other => Err(format!("TypeError: {} is not a function", other)),
        }
    }

    /// Converts the value to a boolean (ToBoolean).
    pub fn to_boolean(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Object(_) | Value::Function(_) => true,
        }
    }

    /// Returns the type of this value as a string.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Formats the value the way it appears nested inside an object, with
    /// strings quoted.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
            other => write!(f, "{}", other),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
    } else {
        write!(f, "{}", n)
    }
}

/// Writes the enumerable properties of `obj` between braces, or brackets
/// for arrays, where index keys are printed as bare values.
fn fmt_properties(obj: &Object, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (open, close) = if obj.is_array() { ("[", "]") } else { ("{", "}") };
    let mut entries = obj.properties().filter(|(_, p)| p.enumerable).peekable();
    if entries.peek().is_none() {
        return write!(f, "{}{}", open, close);
    }
    write!(f, "{} ", open)?;
    let mut first = true;
    for (key, prop) in entries {
        if !first {
            write!(f, ", ")?;
        }
        first = false;
        if !(obj.is_array() && key.parse::<usize>().is_ok()) {
            write!(f, "{}: ", key)?;
        }
        match &prop.slot {
            Slot::Data(value) => value.fmt_nested(f)?,
            Slot::Accessor {
                get: Some(_),
                set: Some(_),
            } => write!(f, "[Getter/Setter]")?,
            Slot::Accessor { get: Some(_), set: None } => write!(f, "[Getter]")?,
            Slot::Accessor { get: None, .. } => write!(f, "[Setter]")?,
        }
    }
    write!(f, " {}", close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(*n, f),
            Value::String(s) => write!(f, "{}", s),
            Value::Object(obj) => fmt_properties(obj, f),
            Value::Function(callable) => {
                if callable.name.is_empty() {
                    write!(f, "[Function (anonymous)]")?;
                } else {
                    write!(f, "[Function: {}]", callable.name)?;
                }
                if callable.properties.enumerable_keys().next().is_some() {
                    write!(f, " ")?;
                    fmt_properties(&callable.properties, f)?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::object(obj)
    }
}

impl From<Arc<Object>> for Value {
    fn from(obj: Arc<Object>) -> Self {
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Property;

    fn first_arg(args: &[Value]) -> Result<Value, String> {
        Ok(args.first().cloned().unwrap_or_default())
    }

    #[test]
    fn test_objects_compare_by_identity() {
        let a = Value::object(Object::new());
        let b = Value::object(Object::new());

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_eq!(Value::Number(1.5), Value::Number(1.5));
    }

    #[test]
    fn test_call_function() {
        let f = Value::function("id", 1, first_arg);
        assert_eq!(f.call(&[Value::from("x")]), Ok(Value::from("x")));
        assert!(Value::Null.call(&[]).is_err());
    }

    #[test]
    fn test_function_own_properties() {
        let mut props = Object::new();
        props.set("bar", "hello");
        let f = Value::function_with_properties("greet", 1, first_arg, props);

        let own = f.own_properties().expect("functions are objects");
        assert_eq!(own.get("bar"), Some(&Value::from("hello")));
        assert!(f.as_object().is_none());
        assert!(Value::Number(1.0).own_properties().is_none());
        assert_eq!(f.call(&[Value::Null]), Ok(Value::Null));
    }

    #[test]
    fn test_display_nested() {
        let mut obj = Object::new();
        obj.set("a", 1);
        obj.set("b", "it's");
        obj.define("hidden", Property::hidden(Value::Boolean(true)));
        obj.define("lazy", Property::accessor(Some(Value::Null), None));
        obj.set("f", Value::function("greet", 0, first_arg));

        assert_eq!(
            Value::object(obj).to_string(),
            "{ a: 1, b: 'it\\'s', lazy: [Getter], f: [Function: greet] }"
        );
        assert_eq!(Value::object(Object::new()).to_string(), "{}");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_display_arrays() {
        let arr = Value::object(Object::array(vec![Value::from(1), Value::from("x")]));
        assert_eq!(arr.to_string(), "[ 1, 'x' ]");
        assert_eq!(Value::object(Object::array(Vec::new())).to_string(), "[]");
    }

    #[test]
    fn test_display_function_with_properties() {
        let mut props = Object::new();
        props.set("bar", "hello");
        props.define("__esModule", Property::hidden(Value::Boolean(true)));
        let f = Value::function_with_properties("greet", 1, first_arg, props);

        assert_eq!(f.to_string(), "[Function: greet] { bar: 'hello' }");
        assert_eq!(Value::function("", 0, first_arg).to_string(), "[Function (anonymous)]");
    }

    #[test]
    fn test_to_boolean() {
        assert!(!Value::from("").to_boolean());
        assert!(!Value::Number(0.0).to_boolean());
        assert!(Value::object(Object::new()).to_boolean());
        assert!(!Value::Undefined.to_boolean());
    }
}
