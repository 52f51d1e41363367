//! End-to-end interop scenarios
//!
//! A module migrated from `module.exports = X` to `export default X` must look
//! the same to every existing consumer.

use bridgejs_interop::module_system::{ES_MODULE_MARKER, bind_imports};
use bridgejs_interop::{ImportSpecifier, ModuleKind, ModuleRegistry, ResolvedView};
use bridgejs_value::{Property, Value, js_object};

fn add(args: &[Value]) -> Result<Value, String> {
    let mut total = 0.0;
    for arg in args {
        if let Value::Number(n) = arg {
            total += n;
        }
    }
    Ok(Value::Number(total))
}

/// Registers the same value as a pre-migration CommonJS module and as a
/// post-migration ES module.
fn migrated_pair(value: Value) -> ModuleRegistry {
    let registry = ModuleRegistry::new();
    registry.register_commonjs("./before.cjs", value.clone()).unwrap();
    registry.register_esm("./after.mjs", js_object! { "default" => value }).unwrap();
    registry
}

#[test]
fn test_export_default_matches_module_exports_for_require() {
    let candidates = vec![
        Value::function("add", -1, add),
        Value::object(js_object! { "bar" => "hello", "n" => 1 }),
        Value::from("plain string"),
        Value::Number(0.0),
        Value::Null,
    ];

    for value in candidates {
        let registry = migrated_pair(value.clone());
        let before = registry.require("./before.cjs").unwrap();
        let after = registry.require("./after.mjs").unwrap();

        assert_eq!(before, value, "module.exports must come back untouched");
        assert_eq!(after, before, "export default {} must require like module.exports", value);
    }
}

#[test]
fn test_migrated_function_stays_callable() {
    let registry = migrated_pair(Value::function("add", -1, add));
    let args = [Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)];

    let before = registry.require("./before.cjs").unwrap().call(&args);
    let after = registry.require("./after.mjs").unwrap().call(&args);

    assert_eq!(before, Ok(Value::Number(6.0)));
    assert_eq!(after, before);
}

#[test]
fn test_default_import_matches_across_migration() {
    let value = Value::object(js_object! { "bar" => "hello" });
    let registry = migrated_pair(value.clone());
    let default = [ImportSpecifier::Default("dep".into())];

    let before = registry.import_bindings("./before.cjs", &default).unwrap();
    let after = registry.import_bindings("./after.mjs", &default).unwrap();

    assert_eq!(before[0].value(), Some(&value));
    assert_eq!(after[0].value(), before[0].value());
}

#[test]
fn test_adding_named_export_exposes_wrapper() {
    let registry = ModuleRegistry::new();
    registry
        .register_esm("./lib.mjs", js_object! { "default" => "x", "extra" => 1 })
        .unwrap();

    let required = registry.require("./lib.mjs").unwrap();
    let wrapper = required.as_object().expect("wrapper object");

    assert_eq!(wrapper.get("default"), Some(&Value::from("x")));
    assert_eq!(wrapper.get("extra"), Some(&Value::Number(1.0)));
    assert_eq!(wrapper.get(ES_MODULE_MARKER), Some(&Value::Boolean(true)));
    assert_eq!(required.to_string(), "{ default: 'x', extra: 1 }");
}

#[test]
fn test_transpiled_commonjs_round_trips_through_import() {
    // What a transpiler emits for `export const farewell = ...`
    let registry = ModuleRegistry::new();
    registry
        .register_commonjs(
            "./bye.cjs",
            Value::object(js_object! { "farewell" => "hello!", "__esModule" => true }),
        )
        .unwrap();

    let view = registry.import("./bye.cjs").unwrap();
    assert!(view.is_namespace());

    let specs = [ImportSpecifier::named("farewell")];
    let bindings = bind_imports("./bye.cjs", &view, &specs).unwrap();
    assert_eq!(bindings[0].value(), Some(&Value::from("hello!")));
}

#[test]
fn test_callable_exports_with_marker_expose_named_imports() {
    // `module.exports = fn; fn.bar = ...; Object.defineProperty(fn, '__esModule', ...)`
    let mut props = js_object! { "bar" => "hello" };
    props.define(ES_MODULE_MARKER, Property::hidden(Value::Boolean(true)));
    let flagged = Value::function_with_properties("add", -1, add, props);
    let plain = Value::function_with_properties("add", -1, add, js_object! { "bar" => "hello" });

    let registry = ModuleRegistry::new();
    registry.register_commonjs("./flagged.cjs", flagged.clone()).unwrap();
    registry.register_commonjs("./plain.cjs", plain.clone()).unwrap();

    let bar = [ImportSpecifier::named("bar")];
    let bindings = registry.import_bindings("./flagged.cjs", &bar).unwrap();
    assert_eq!(bindings[0].value(), Some(&Value::from("hello")));
    assert_eq!(registry.require("./flagged.cjs").unwrap(), flagged);

    assert!(registry.import_bindings("./plain.cjs", &bar).is_err());
    assert_eq!(registry.import("./plain.cjs").unwrap(), ResolvedView::Default(plain));
}

#[test]
fn test_plain_commonjs_never_exposes_named_imports() {
    let exports = Value::object(js_object! { "bar" => "hello" });
    let registry = ModuleRegistry::new();
    registry.register_commonjs("./foo.cjs", exports.clone()).unwrap();

    let view = registry.import("./foo.cjs").unwrap();
    assert_eq!(view, ResolvedView::Default(exports));
    assert!(registry.import_bindings("./foo.cjs", &[ImportSpecifier::named("bar")]).is_err());
}

#[test]
fn test_every_kind_and_flag_combination_resolves() {
    let exports = Value::object(js_object! { "default" => 1 });
    for kind in [ModuleKind::Esm, ModuleKind::CommonJs] {
        for flag in [false, true] {
            let view = bridgejs_interop::resolve_for_native_import(kind, &exports, flag);
            let required = bridgejs_interop::resolve_for_foreign_require(kind, &exports, flag);

            let expect_namespace = kind == ModuleKind::Esm || flag;
            assert_eq!(view.is_namespace(), expect_namespace, "{:?}/{}", kind, flag);
            if kind == ModuleKind::CommonJs {
                assert_eq!(required, exports);
            } else {
                assert_eq!(required, Value::Number(1.0));
            }
        }
    }
}
