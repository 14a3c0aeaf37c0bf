//! Bitwise and shift operators: `& | ^ << >> >>>`

use crate::ast::BinaryOperator;
use crate::error::EvalError;
use crate::value::number::{to_int32, to_uint32};
use crate::value::Value;

use super::{range_error, to_numeric, unsupported, Numeric};

pub(super) fn eval(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match (to_numeric(left), to_numeric(right)) {
        (Some(Numeric::Number(a)), Some(Numeric::Number(b))) => number_op(op, a, b)
            .map(Value::Number)
            .ok_or_else(|| unsupported(op, left, right)),
        (Some(Numeric::BigInt(a)), Some(Numeric::BigInt(b))) => match bigint_op(op, a, b) {
            Some(result) => result.map(Value::BigInt),
            // `>>>` has no BigInt form
            None => Err(unsupported(op, left, right)),
        },
        _ => Err(unsupported(op, left, right)),
    }
}

fn number_op(op: BinaryOperator, a: f64, b: f64) -> Option<f64> {
    let shift = to_uint32(b) & 31;
    let result = match op {
        BinaryOperator::BitAnd => f64::from(to_int32(a) & to_int32(b)),
        BinaryOperator::BitOr => f64::from(to_int32(a) | to_int32(b)),
        BinaryOperator::BitXor => f64::from(to_int32(a) ^ to_int32(b)),
        BinaryOperator::Shl => f64::from(to_int32(a).wrapping_shl(shift)),
        BinaryOperator::Shr => f64::from(to_int32(a) >> shift),
        BinaryOperator::UShr => f64::from(to_uint32(a) >> shift),
        _ => return None,
    };
    Some(result)
}

fn bigint_op(op: BinaryOperator, a: i128, b: i128) -> Option<Result<i128, EvalError>> {
    let result = match op {
        BinaryOperator::BitAnd => Ok(a & b),
        BinaryOperator::BitOr => Ok(a | b),
        BinaryOperator::BitXor => Ok(a ^ b),
        BinaryOperator::Shl if b >= 0 => shift_left(a, b.unsigned_abs()),
        BinaryOperator::Shl => Ok(shift_right(a, b.unsigned_abs())),
        BinaryOperator::Shr if b >= 0 => Ok(shift_right(a, b.unsigned_abs())),
        BinaryOperator::Shr => shift_left(a, b.unsigned_abs()),
        _ => return None,
    };
    Some(result)
}

fn shift_left(value: i128, count: u128) -> Result<i128, EvalError> {
    if value == 0 {
        return Ok(0);
    }
    if count >= 128 {
        return Err(range_error("BigInt value exceeds the supported 128-bit range"));
    }
    let count = count as u32;
    let shifted = value << count;
    if shifted >> count != value {
        return Err(range_error("BigInt value exceeds the supported 128-bit range"));
    }
    Ok(shifted)
}

/// Arithmetic shift, i.e. floor division by 2^count.
fn shift_right(value: i128, count: u128) -> i128 {
    if count >= 128 {
        return if value < 0 { -1 } else { 0 };
    }
    value >> (count as u32)
}
