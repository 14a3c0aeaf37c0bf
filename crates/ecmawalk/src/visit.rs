//! Tree walking
//!
//! [`Visit`] is implemented once per node kind; the [`Node`] impl is the
//! single dispatcher that every child visit goes through, so interrupt
//! checks, depth accounting, tracing and span attachment happen in one
//! place.

mod binary;
mod call;
mod declaration;
mod identifier;
mod literal;
mod member;
mod stmt;

use crate::ast::Node;
use crate::{Environment, EvalContext, EvalError, Value};

pub use call::call_builtin;
pub use declaration::visit_variable_declarator;
pub use literal::literal_value;

/// Trait for evaluating syntax tree nodes to values.
///
/// This is the core abstraction for the tree-walking evaluator.
/// Each ESTree node kind implements this trait.
pub trait Visit {
    /// Evaluate this node in the given environment.
    fn visit(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Node Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Visit for Node {
    fn visit(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        // Check for interruption before each node
        if ctx.is_interrupted() {
            return Err(EvalError::Interrupted);
        }

        let mut env = env.nesting_guard(ctx.max_depth)?;

        if ctx.trace {
            tracing::trace!(kind = self.kind_name(), depth = env.depth(), "visit");
        }

        let result = match self {
            Node::Program(node) => node.visit(&mut env, ctx),
            Node::ExpressionStatement(node) => node.visit(&mut env, ctx),
            Node::BinaryExpression(node) => node.visit(&mut env, ctx),
            Node::Literal(node) => node.visit(&mut env, ctx),
            Node::CallExpression(node) => node.visit(&mut env, ctx),
            Node::MemberExpression(node) => node.visit(&mut env, ctx),
            Node::Identifier(node) => node.visit(&mut env, ctx),
            Node::VariableDeclaration(node) => node.visit(&mut env, ctx),

            // Only meaningful inside its declaration
            Node::VariableDeclarator(node) => Err(EvalError::UnsupportedNodeType {
                kind: "VariableDeclarator outside a declaration".to_string(),
                span: Some(node.span),
            }),

            Node::Unsupported => Err(EvalError::UnsupportedNodeType {
                kind: self.kind_name().to_string(),
                span: None,
            }),
        };

        match self.span() {
            Some(span) => result.map_err(|e| e.with_span(span)),
            None => result,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a node (convenience wrapper).
pub fn visit_node(
    node: &Node,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    node.visit(env, ctx)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::ast::Node;
    use crate::output::Output;
    use crate::{Environment, EvalContext, EvalError, Value};

    use super::Visit;

    /// Deserialize an ESTree JSON fragment.
    pub fn node(json: serde_json::Value) -> Node {
        serde_json::from_value(json).unwrap()
    }

    /// Environment whose console writes into a buffer.
    pub fn buffered_env() -> (Environment, Arc<Output>) {
        let output = Arc::new(Output::buffer());
        (Environment::with_output(Arc::clone(&output)), output)
    }

    /// Visit a JSON fragment in a fresh buffered environment.
    pub fn run(json: serde_json::Value) -> Result<Value, EvalError> {
        let (mut env, _) = buffered_env();
        node(json).visit(&mut env, &EvalContext::new())
    }
}
