//! Equality, relational comparison and `in`

use std::cmp::Ordering;
use std::mem::discriminant;

use crate::ast::BinaryOperator;
use crate::error::EvalError;
use crate::value::number::{compare_bigint_number, string_to_bigint, string_to_number};
use crate::value::Value;

use super::unsupported;

/// `===`: same type and same value; object-like values by identity.
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    // PartialEq for Value already has exactly these semantics:
    // NaN !== NaN, +0 === -0, Arc identity for object-like values.
    left == right
}

/// `==` with the primitive coercions of abstract equality.
///
/// # Errors
///
/// - `UnsupportedOperation` when an object-like value meets a primitive
///   other than null/undefined
pub fn loose_equals(left: &Value, right: &Value) -> Result<bool, EvalError> {
    if discriminant(left) == discriminant(right) {
        return Ok(strict_equals(left, right));
    }

    match (left, right) {
        (Value::Null | Value::Undefined, Value::Null | Value::Undefined) => Ok(true),
        (Value::Null | Value::Undefined, _) | (_, Value::Null | Value::Undefined) => Ok(false),

        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            Ok(*n == string_to_number(s))
        }
        (Value::BigInt(b), Value::String(s)) | (Value::String(s), Value::BigInt(b)) => {
            Ok(string_to_bigint(s) == Some(*b))
        }

        (Value::Boolean(b), other) => loose_equals(&Value::Number(bool_to_number(*b)), other),
        (other, Value::Boolean(b)) => loose_equals(other, &Value::Number(bool_to_number(*b))),

        (Value::BigInt(b), Value::Number(n)) | (Value::Number(n), Value::BigInt(b)) => {
            Ok(compare_bigint_number(*b, *n) == Some(Ordering::Equal))
        }

        // Different kinds of object-like value are never the same object
        (l, r) if l.is_object_like() && r.is_object_like() => Ok(false),

        _ => Err(unsupported(BinaryOperator::LooseEq, left, right)),
    }
}

fn bool_to_number(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// `< <= > >=`.
pub(super) fn compare(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, EvalError> {
    if left.is_object_like() || right.is_object_like() {
        return Err(unsupported(op, left, right));
    }

    let ordering = match (left, right) {
        (Value::String(a), Value::String(b)) => Some(a.encode_utf16().cmp(b.encode_utf16())),
        (Value::BigInt(a), Value::BigInt(b)) => Some(a.cmp(b)),
        (Value::BigInt(a), Value::String(s)) => string_to_bigint(s).map(|b| a.cmp(&b)),
        (Value::String(s), Value::BigInt(b)) => string_to_bigint(s).map(|a| a.cmp(b)),
        (Value::BigInt(a), other) => match other.to_number() {
            Some(n) => compare_bigint_number(*a, n),
            None => return Err(unsupported(op, left, right)),
        },
        (other, Value::BigInt(b)) => match other.to_number() {
            Some(n) => compare_bigint_number(*b, n).map(Ordering::reverse),
            None => return Err(unsupported(op, left, right)),
        },
        (l, r) => match (l.to_number(), r.to_number()) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => return Err(unsupported(op, left, right)),
        },
    };

    // An undefined ordering (NaN, unparseable BigInt string) is false for all four
    let result = match op {
        BinaryOperator::Lt => matches!(ordering, Some(Ordering::Less)),
        BinaryOperator::Le => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOperator::Gt => matches!(ordering, Some(Ordering::Greater)),
        BinaryOperator::Ge => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        _ => return Err(unsupported(op, left, right)),
    };
    Ok(Value::Boolean(result))
}

/// `key in object`.
pub(super) fn has_property(key: &Value, object: &Value) -> Result<Value, EvalError> {
    if !object.is_object_like() {
        return Err(unsupported(BinaryOperator::In, key, object));
    }
    let name = key
        .to_js_string()
        .ok_or_else(|| unsupported(BinaryOperator::In, key, object))?;
    Ok(Value::Boolean(object.property(&name).is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ObjectValue;

    fn cmp(op: BinaryOperator, a: Value, b: Value) -> bool {
        compare(op, &a, &b).unwrap().as_bool().unwrap()
    }

    #[test]
    fn test_strict_equals() {
        assert!(strict_equals(&Value::Number(1.0), &Value::Number(1.0)));
        assert!(strict_equals(&Value::Number(0.0), &Value::Number(-0.0)));
        assert!(!strict_equals(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
        assert!(!strict_equals(&Value::Number(1.0), &Value::from("1")));
        assert!(!strict_equals(&Value::Null, &Value::Undefined));
    }

    #[test]
    fn test_loose_equals_coercions() {
        let eq = |a: Value, b: Value| loose_equals(&a, &b).unwrap();
        assert!(eq(Value::Null, Value::Undefined));
        assert!(!eq(Value::Null, Value::Number(0.0)));
        assert!(eq(Value::Number(1.0), Value::from("1")));
        assert!(eq(Value::from(""), Value::Number(0.0)));
        assert!(eq(Value::Boolean(true), Value::Number(1.0)));
        assert!(eq(Value::Boolean(false), Value::from("0")));
        assert!(eq(Value::BigInt(2), Value::from("2")));
        assert!(eq(Value::BigInt(2), Value::Number(2.0)));
        assert!(!eq(Value::BigInt(2), Value::Number(2.5)));
        assert!(!eq(Value::Number(f64::NAN), Value::from("NaN")));
    }

    #[test]
    fn test_loose_equals_objects() {
        let obj = Value::object(ObjectValue::new());
        assert!(loose_equals(&obj, &obj.clone()).unwrap());
        assert!(!loose_equals(&obj, &Value::Null).unwrap());
        assert!(loose_equals(&obj, &Value::Number(1.0)).is_err());
    }

    #[test]
    fn test_compare_numbers_and_strings() {
        assert!(cmp(BinaryOperator::Lt, Value::Number(1.0), Value::Number(2.0)));
        assert!(cmp(BinaryOperator::Ge, Value::Number(2.0), Value::Number(2.0)));
        assert!(cmp(BinaryOperator::Lt, Value::from("a"), Value::from("b")));
        assert!(cmp(BinaryOperator::Lt, Value::from("B"), Value::from("a")));
        // String vs number compares numerically
        assert!(cmp(BinaryOperator::Gt, Value::from("10"), Value::Number(9.0)));
        // Two strings compare lexicographically
        assert!(cmp(BinaryOperator::Lt, Value::from("10"), Value::from("9")));
    }

    #[test]
    fn test_compare_nan_is_false() {
        for op in [
            BinaryOperator::Lt,
            BinaryOperator::Le,
            BinaryOperator::Gt,
            BinaryOperator::Ge,
        ] {
            assert!(!cmp(op, Value::Number(f64::NAN), Value::Number(1.0)));
            assert!(!cmp(op, Value::Undefined, Value::Number(1.0)));
        }
    }

    #[test]
    fn test_compare_bigint() {
        assert!(cmp(BinaryOperator::Lt, Value::BigInt(1), Value::Number(1.5)));
        assert!(cmp(BinaryOperator::Gt, Value::Number(1.5), Value::BigInt(1)));
        assert!(cmp(BinaryOperator::Le, Value::BigInt(3), Value::from("3")));
        assert!(!cmp(BinaryOperator::Lt, Value::BigInt(3), Value::from("x")));
    }

    #[test]
    fn test_bigint_against_numbers_near_i128_max() {
        let exact = 169_999_999_999_999_998_061_923_293_023_115_935_744_i128;
        assert!(cmp(BinaryOperator::Gt, Value::BigInt(i128::MAX), Value::Number(1.7e38)));
        assert!(cmp(BinaryOperator::Lt, Value::Number(1.7e38), Value::BigInt(i128::MAX)));
        assert!(cmp(BinaryOperator::Ge, Value::BigInt(exact), Value::Number(1.7e38)));
        assert!(loose_equals(&Value::BigInt(exact), &Value::Number(1.7e38)).unwrap());
        assert!(!loose_equals(&Value::BigInt(exact + 1), &Value::Number(1.7e38)).unwrap());
    }

    #[test]
    fn test_in_operator() {
        let obj = Value::object(ObjectValue::new().with_property("log", Value::Null));
        assert_eq!(
            has_property(&Value::from("log"), &obj).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            has_property(&Value::from("warn"), &obj).unwrap(),
            Value::Boolean(false)
        );
        assert!(has_property(&Value::from("length"), &Value::from("abc")).is_err());
    }
}
