//! Program and statement evaluation

use crate::ast::{ExpressionStatement, Program};
use crate::{Environment, EvalContext, EvalError, Value};

use super::Visit;

impl Visit for Program {
    /// Visit each statement in order; the result is the last statement's
    /// value, or `undefined` for an empty program.
    fn visit(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        let mut last = Value::Undefined;
        for stmt in &self.body {
            last = stmt.visit(env, ctx)?;
        }
        Ok(last)
    }
}

impl Visit for ExpressionStatement {
    fn visit(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        self.expression.visit(env, ctx)
    }
}
