//! Literal evaluation

use crate::ast::{Literal, LiteralValue};
use crate::{Environment, EvalContext, EvalError, Value};

use super::Visit;

impl Visit for Literal {
    fn visit(&self, _env: &mut Environment, _ctx: &EvalContext) -> Result<Value, EvalError> {
        Ok(literal_value(&self.value))
    }
}

/// Convert a literal to its value, without coercion.
///
/// Regex literals produce a fresh object on every call.
pub fn literal_value(lit: &LiteralValue) -> Value {
    match lit {
        LiteralValue::String(s) => Value::string(s.as_str()),
        LiteralValue::Number(n) => Value::Number(*n),
        LiteralValue::Boolean(b) => Value::Boolean(*b),
        LiteralValue::Null => Value::Null,
        LiteralValue::BigInt(b) => Value::BigInt(*b),
        LiteralValue::Regex(re) => Value::regex(re.pattern.as_str(), re.flags.as_str()),
    }
}
