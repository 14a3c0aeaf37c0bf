//! Value tests

use ecmawalk::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Display
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_number_display() {
    let cases = [
        (0.0, "0"),
        (-0.0, "-0"),
        (42.0, "42"),
        (-1.5, "-1.5"),
        (0.1, "0.1"),
        (123456789012345680000.0, "123456789012345680000"),
        (1e21, "1e+21"),
        (1.5e-7, "1.5e-7"),
        (0.000001, "0.000001"),
        (f64::NAN, "NaN"),
        (f64::INFINITY, "Infinity"),
        (f64::NEG_INFINITY, "-Infinity"),
    ];
    for (n, expected) in cases {
        assert_eq!(Value::Number(n).to_string(), expected, "display of {}", n);
    }
}

#[test]
fn test_top_level_and_nested_strings() {
    let obj = Value::object(ObjectValue::new().with_property("s", Value::from("hi")));
    assert_eq!(Value::from("hi").to_string(), "hi");
    assert_eq!(obj.to_string(), "{ s: 'hi' }");
}

#[test]
fn test_other_display_forms() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::BigInt(-5).to_string(), "-5n");
    assert_eq!(Value::regex("a|b", "").to_string(), "/a|b/");
    assert_eq!(
        Value::callable(BuiltinFn::new("f", 0, |_| Ok(Value::Undefined))).to_string(),
        "[Function: f]"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Properties
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_regex_properties() {
    let re = Value::regex("a.c", "gimsuy");
    assert_eq!(re.property("source"), Some(Value::from("a.c")));
    assert_eq!(re.property("flags"), Some(Value::from("gimsuy")));
    assert_eq!(re.property("global"), Some(Value::Boolean(true)));
    assert_eq!(re.property("dotAll"), Some(Value::Boolean(true)));
    assert_eq!(re.property("lastIndex"), Some(Value::Number(0.0)));
    assert_eq!(re.property("exec"), None);
}

#[test]
fn test_callable_properties() {
    let f = Value::callable(BuiltinFn::new("pair", 2, |_| Ok(Value::Undefined)));
    assert_eq!(f.property("name"), Some(Value::from("pair")));
    assert_eq!(f.property("length"), Some(Value::Number(2.0)));
}

#[test]
fn test_primitives_have_no_properties() {
    assert_eq!(Value::Number(1.0).property("toFixed"), None);
    assert_eq!(Value::Boolean(true).property("valueOf"), None);
    assert_eq!(Value::BigInt(1).property("length"), None);
    assert_eq!(Value::Undefined.property("x"), None);
}

// ═══════════════════════════════════════════════════════════════════════
// Conversions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_to_number() {
    assert_eq!(Value::from(" 42 ").to_number(), Some(42.0));
    assert_eq!(Value::from("").to_number(), Some(0.0));
    assert_eq!(Value::from("-Infinity").to_number(), Some(f64::NEG_INFINITY));
    assert_eq!(Value::from("0b101").to_number(), Some(5.0));
    assert!(Value::from("1_000").to_number().unwrap().is_nan());
    assert_eq!(Value::Null.to_number(), Some(0.0));
    assert_eq!(Value::BigInt(1).to_number(), None);
    assert_eq!(Value::object(ObjectValue::new()).to_number(), None);
}

#[test]
fn test_type_names() {
    use ecmawalk::error::type_name;
    assert_eq!(type_name(&Value::Null), "object");
    assert_eq!(type_name(&Value::regex("a", "")), "object");
    assert_eq!(type_name(&Value::BigInt(0)), "bigint");
    assert_eq!(
        type_name(&Value::callable(BuiltinFn::new("f", -1, |_| Ok(Value::Undefined)))),
        "function"
    );
}

#[test]
fn test_identity_equality() {
    let a = Value::regex("a", "");
    let b = Value::regex("a", "");
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert_eq!(Value::from("x"), Value::from("x"));
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
}
