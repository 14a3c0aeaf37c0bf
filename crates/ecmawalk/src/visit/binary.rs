//! Binary expression evaluation

use crate::ast::BinaryExpression;
use crate::evaluator::perform_binary_operation;
use crate::{Environment, EvalContext, EvalError, Value};

use super::Visit;

impl Visit for BinaryExpression {
    fn visit(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        // Left strictly before right: operand side effects are ordered
        let left = self.left.visit(env, ctx)?;
        let right = self.right.visit(env, ctx)?;

        perform_binary_operation(left, self.operator, right)
    }
}
