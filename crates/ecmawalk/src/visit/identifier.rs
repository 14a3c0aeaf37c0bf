//! Identifier resolution

use crate::ast::Identifier;
use crate::{Environment, EvalContext, EvalError, Value};

use super::Visit;

impl Visit for Identifier {
    fn visit(&self, env: &mut Environment, _ctx: &EvalContext) -> Result<Value, EvalError> {
        env.get_binding(&self.name)
            .cloned()
            .map_err(|e| EvalError::from(e).with_span(self.span))
    }
}
