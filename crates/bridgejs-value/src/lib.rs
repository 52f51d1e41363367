//! # bridgejs-value
//!
//! The JavaScript value model the interop resolver works over.
//!
//! Only what module interop needs is modelled: primitives, shared objects
//! with full property descriptors (data or accessor, enumerable or not), and
//! callable native functions. Objects and functions are reference types with
//! identity semantics, so a resolver can hand back "the same object" and a
//! caller can check that it did.
//!
//! ```
//! use bridgejs_value::{js_object, Value};
//!
//! let exports = Value::object(js_object! {
//!     "bar" => "hello",
//!     "answer" => 42,
//! });
//!
//! assert_eq!(exports.to_string(), "{ bar: 'hello', answer: 42 }");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod function;
pub mod object;
pub mod value;

// Re-exports for convenience
pub use function::{Callable, NativeFunction};
pub use object::{Object, Property, Slot};
pub use value::Value;

/// Create an [`Object`] from `"key" => value` pairs.
///
/// Every property is an ordinary enumerable data property, inserted in the
/// order written. Values go through `Into<Value>`.
///
/// # Example
///
/// ```
/// use bridgejs_value::{js_object, Value};
///
/// let obj = js_object! {
///     "name" => "Alice",
///     "age" => 30,
/// };
///
/// assert_eq!(obj.get("age"), Some(&Value::Number(30.0)));
/// assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["name", "age"]);
/// ```
#[macro_export]
macro_rules! js_object {
    () => {
        $crate::Object::new()
    };
    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut obj = $crate::Object::new();
        $(obj.set($key, $crate::Value::from($value));)+
        obj
    }};
}
