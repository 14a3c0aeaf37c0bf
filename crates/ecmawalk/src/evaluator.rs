//! Binary operator evaluation
//!
//! Stateless: given two operand values and an operator token, produce the
//! result value. Each operator spells out its own coercion rules; nothing
//! is delegated to a host "evaluate this expression" facility.

mod arithmetic;
mod bitwise;
mod relational;

use crate::ast::BinaryOperator;
use crate::error::{type_name, EvalError};
use crate::value::Value;

pub use relational::{loose_equals, strict_equals};

/// Evaluate `left <op> right`.
///
/// # Errors
///
/// - `UnsupportedOperation` for operator/operand combinations without
///   defined semantics (object-like operands to arithmetic, BigInt mixed
///   with other numerics, `instanceof`, ...)
/// - `RangeError` for BigInt results that do not fit, or BigInt division
///   by zero
pub fn perform_binary_operation(
    left: Value,
    op: BinaryOperator,
    right: Value,
) -> Result<Value, EvalError> {
    match op {
        // Arithmetic
        BinaryOperator::Add => arithmetic::add(&left, &right),
        BinaryOperator::Sub
        | BinaryOperator::Mul
        | BinaryOperator::Div
        | BinaryOperator::Rem
        | BinaryOperator::Exp => arithmetic::numeric(op, &left, &right),

        // Bitwise
        BinaryOperator::BitAnd
        | BinaryOperator::BitOr
        | BinaryOperator::BitXor
        | BinaryOperator::Shl
        | BinaryOperator::Shr
        | BinaryOperator::UShr => bitwise::eval(op, &left, &right),

        // Equality
        BinaryOperator::StrictEq => Ok(Value::Boolean(strict_equals(&left, &right))),
        BinaryOperator::StrictNe => Ok(Value::Boolean(!strict_equals(&left, &right))),
        BinaryOperator::LooseEq => loose_equals(&left, &right).map(Value::Boolean),
        BinaryOperator::LooseNe => loose_equals(&left, &right).map(|eq| Value::Boolean(!eq)),

        // Relational
        BinaryOperator::Lt | BinaryOperator::Le | BinaryOperator::Gt | BinaryOperator::Ge => {
            relational::compare(op, &left, &right)
        }
        BinaryOperator::In => relational::has_property(&left, &right),
        BinaryOperator::InstanceOf => Err(unsupported(op, &left, &right)),
    }
}

/// Build the error for an operator that has no meaning for these operands.
pub(crate) fn unsupported(op: BinaryOperator, left: &Value, right: &Value) -> EvalError {
    EvalError::UnsupportedOperation {
        op: op.as_str().to_string(),
        left_type: type_name(left).to_string(),
        right_type: type_name(right).to_string(),
        span: None,
    }
}

/// Build the error for a BigInt result that cannot be represented.
pub(crate) fn range_error(message: impl Into<String>) -> EvalError {
    EvalError::RangeError {
        message: message.into(),
        span: None,
    }
}

/// Operand after ToNumeric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Numeric {
    Number(f64),
    BigInt(i128),
}

/// ToNumeric: BigInt stays BigInt, other primitives go through ToNumber.
/// `None` for object-like values.
pub(crate) fn to_numeric(value: &Value) -> Option<Numeric> {
    match value {
        Value::BigInt(b) => Some(Numeric::BigInt(*b)),
        other => other.to_number().map(Numeric::Number),
    }
}
