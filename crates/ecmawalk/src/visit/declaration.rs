//! Variable declaration evaluation

use crate::ast::{Node, VariableDeclaration, VariableDeclarator};
use crate::{Environment, EvalContext, EvalError, Value};

use super::Visit;

impl Visit for VariableDeclaration {
    /// Bind every declarator in order, then yield `undefined`.
    ///
    /// Declarators before a failing one stay bound.
    fn visit(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        for declarator in &self.declarations {
            let (name, value) = visit_variable_declarator(declarator, env, ctx)?;
            env.set_binding(name, value, self.kind)
                .map_err(|e| EvalError::from(e).with_span(declarator.span))?;
        }
        Ok(Value::Undefined)
    }
}

/// Compute the `(name, value)` pair a declarator binds.
///
/// The initializer defaults to `undefined`.
///
/// # Errors
///
/// Returns `UnsupportedNodeType` if the target is a destructuring pattern
/// or anything else that is not a plain identifier.
pub fn visit_variable_declarator(
    declarator: &VariableDeclarator,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<(String, Value), EvalError> {
    let name = match declarator.id.as_ref() {
        Node::Identifier(ident) => ident.name.clone(),
        other => {
            return Err(EvalError::UnsupportedNodeType {
                kind: format!("declaration target {}", other.kind_name()),
                span: Some(other.span().unwrap_or(declarator.span)),
            })
        }
    };

    let value = match &declarator.init {
        Some(init) => init.visit(env, ctx)?,
        None => Value::Undefined,
    };

    Ok((name, value))
}
