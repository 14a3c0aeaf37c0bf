//! Arithmetic operators: `+ - * / % **`

use crate::ast::BinaryOperator;
use crate::error::EvalError;
use crate::value::Value;

use super::{range_error, to_numeric, unsupported, Numeric};

const BIGINT_RANGE: &str = "BigInt value exceeds the supported 128-bit range";

/// `+`: string concatenation when either side is a string, numeric
/// addition otherwise.
pub(super) fn add(left: &Value, right: &Value) -> Result<Value, EvalError> {
    if left.is_object_like() || right.is_object_like() {
        return Err(unsupported(BinaryOperator::Add, left, right));
    }

    if left.is_string() || right.is_string() {
        return match (left.to_js_string(), right.to_js_string()) {
            (Some(a), Some(b)) => Ok(Value::string(a + &b)),
            _ => Err(unsupported(BinaryOperator::Add, left, right)),
        };
    }

    numeric(BinaryOperator::Add, left, right)
}

/// Numeric operators after ToNumeric on both sides.
pub(super) fn numeric(
    op: BinaryOperator,
    left: &Value,
    right: &Value,
) -> Result<Value, EvalError> {
    match (to_numeric(left), to_numeric(right)) {
        (Some(Numeric::Number(a)), Some(Numeric::Number(b))) => number_op(op, a, b)
            .map(Value::Number)
            .ok_or_else(|| unsupported(op, left, right)),
        (Some(Numeric::BigInt(a)), Some(Numeric::BigInt(b))) => match bigint_op(op, a, b) {
            Some(result) => result.map(Value::BigInt),
            None => Err(unsupported(op, left, right)),
        },
        // Mixing BigInt and Number, or an object-like operand
        _ => Err(unsupported(op, left, right)),
    }
}

fn number_op(op: BinaryOperator, a: f64, b: f64) -> Option<f64> {
    match op {
        BinaryOperator::Add => Some(a + b),
        BinaryOperator::Sub => Some(a - b),
        BinaryOperator::Mul => Some(a * b),
        BinaryOperator::Div => Some(a / b),
        // Truncating remainder, sign follows the dividend
        BinaryOperator::Rem => Some(a % b),
        BinaryOperator::Exp => Some(number_pow(a, b)),
        _ => None,
    }
}

/// `**` on numbers. Differs from `powf` where the base is ±1 and the
/// exponent is NaN or infinite: those are NaN.
pub(crate) fn number_pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() {
        return f64::NAN;
    }
    if base.abs() == 1.0 && exponent.is_infinite() {
        return f64::NAN;
    }
    base.powf(exponent)
}

fn bigint_op(op: BinaryOperator, a: i128, b: i128) -> Option<Result<i128, EvalError>> {
    let result = match op {
        BinaryOperator::Add => a.checked_add(b).ok_or_else(|| range_error(BIGINT_RANGE)),
        BinaryOperator::Sub => a.checked_sub(b).ok_or_else(|| range_error(BIGINT_RANGE)),
        BinaryOperator::Mul => a.checked_mul(b).ok_or_else(|| range_error(BIGINT_RANGE)),
        BinaryOperator::Div => {
            if b == 0 {
                Err(range_error("Division by zero"))
            } else {
                a.checked_div(b).ok_or_else(|| range_error(BIGINT_RANGE))
            }
        }
        BinaryOperator::Rem => {
            if b == 0 {
                Err(range_error("Division by zero"))
            } else if b == -1 {
                Ok(0)
            } else {
                Ok(a % b)
            }
        }
        BinaryOperator::Exp => bigint_pow(a, b),
        _ => return None,
    };
    Some(result)
}

fn bigint_pow(base: i128, exponent: i128) -> Result<i128, EvalError> {
    if exponent < 0 {
        return Err(range_error("Exponent must be non-negative"));
    }
    if let Ok(exp) = u32::try_from(exponent) {
        return base.checked_pow(exp).ok_or_else(|| range_error(BIGINT_RANGE));
    }
    // Exponents past u32 only stay in range for these bases
    match base {
        0 => Ok(0),
        1 => Ok(1),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => Err(range_error(BIGINT_RANGE)),
    }
}
