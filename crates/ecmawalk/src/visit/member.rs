//! Member expression evaluation

use crate::ast::{MemberExpression, Node};
use crate::{Environment, EvalContext, EvalError, Value};

use super::Visit;

impl Visit for MemberExpression {
    /// Static property lookup.
    ///
    /// A property the base value does not define yields `undefined`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedPropertyAccess` for computed (`a[b]`) or
    /// private (`a.#b`) keys, and for a `null`/`undefined` base.
    fn visit(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        // Evaluate the base expression
        let base = self.object.visit(env, ctx)?;

        if self.computed {
            return Err(access_error("computed property keys are not supported", self));
        }

        let name = match self.property.as_ref() {
            Node::Identifier(ident) => ident.name.as_str(),
            _ => return Err(access_error("property key is not a static name", self)),
        };

        if base.is_nullish() {
            return Err(access_error(
                format!("cannot read properties of {} (reading '{}')", base, name),
                self,
            ));
        }

        Ok(base.property(name).unwrap_or(Value::Undefined))
    }
}

fn access_error(reason: impl Into<String>, node: &MemberExpression) -> EvalError {
    EvalError::UnsupportedPropertyAccess {
        reason: reason.into(),
        span: Some(node.span),
    }
}
