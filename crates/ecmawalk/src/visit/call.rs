//! Function call evaluation

use crate::ast::CallExpression;
use crate::error::type_name;
use crate::{BuiltinFn, Environment, EvalContext, EvalError, Value};

use super::Visit;

impl Visit for CallExpression {
    /// Calls are evaluated for their side effects only: the callee's
    /// return value is discarded and the expression yields `undefined`.
    fn visit(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        // Resolve the callee before touching the arguments
        let callee = self.callee.visit(env, ctx)?;

        let func = match callee {
            Value::Callable(f) => f,
            other => {
                return Err(EvalError::NotCallable {
                    type_name: type_name(&other).to_string(),
                    span: Some(self.callee.span().unwrap_or(self.span)),
                })
            }
        };

        // Evaluate arguments
        let args: Vec<Value> = self
            .arguments
            .iter()
            .map(|arg| arg.visit(env, ctx))
            .collect::<Result<Vec<_>, _>>()?;

        call_builtin(&func, &args)?;
        Ok(Value::Undefined)
    }
}

/// Invoke a builtin after checking its arity.
///
/// # Errors
///
/// Returns `ArityMismatch` if the argument count doesn't match.
/// Returns `BuiltinError` if the native function reports a failure.
pub fn call_builtin(func: &BuiltinFn, args: &[Value]) -> Result<Value, EvalError> {
    if !func.is_variadic() && args.len() != func.arity as usize {
        return Err(EvalError::ArityMismatch {
            expected: func.arity as usize,
            got: args.len(),
            name: func.name.clone(),
            span: None,
        });
    }

    tracing::debug!(name = %func.name, args = args.len(), "calling builtin");

    func.call(args).map_err(|message| EvalError::BuiltinError {
        name: func.name.clone(),
        message,
        span: None,
    })
}
