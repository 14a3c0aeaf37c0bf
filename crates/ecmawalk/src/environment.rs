//! Runtime environment: the single flat binding table of one run

mod guard;
mod prelude;

pub use guard::NestingGuard;

use indexmap::IndexMap;
use std::sync::Arc;

use crate::ast::DeclarationKind;
use crate::error::EnvironmentError;
use crate::output::Output;
use crate::value::Value;

/// A single variable binding.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The binding's name
    pub name: String,

    /// The bound value
    pub value: Value,

    /// Declaration keyword that created or last rebound it
    pub kind: DeclarationKind,
}

/// The runtime environment holding every binding of an evaluation run.
///
/// There are no nested scopes: each declaration targets the same flat
/// table, and a name maps to exactly one binding. Names bound as `const`
/// can never be rebound.
///
/// # Example
///
/// ```
/// use ecmawalk::{DeclarationKind, Environment, Value};
///
/// let mut env = Environment::new();
///
/// env.set_binding("x", Value::Number(1.0), DeclarationKind::Let).unwrap();
/// env.set_binding("x", Value::Number(2.0), DeclarationKind::Var).unwrap();
/// assert_eq!(env.get_binding("x").unwrap(), &Value::Number(2.0));
///
/// env.set_binding("k", Value::Number(3.0), DeclarationKind::Const).unwrap();
/// assert!(env.set_binding("k", Value::Number(4.0), DeclarationKind::Let).is_err());
///
/// assert!(env.get_binding("missing").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    /// Bindings in declaration order
    bindings: IndexMap<String, Binding>,

    /// Current node nesting depth
    depth: usize,

    /// Destination for console output
    output: Arc<Output>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create an environment seeded with the built-in `console`,
    /// writing to stdout.
    pub fn new() -> Self {
        Self::with_output(Arc::new(Output::Stdout))
    }

    /// Create an environment whose `console` writes to `output`.
    pub fn with_output(output: Arc<Output>) -> Self {
        let mut env = Self {
            bindings: IndexMap::new(),
            depth: 0,
            output,
        };
        env.load_prelude();
        env
    }

    /// Console output destination.
    pub fn output(&self) -> &Arc<Output> {
        &self.output
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Resolve a name to its value.
    ///
    /// # Errors
    ///
    /// - `UnboundIdentifier` if the name was never declared
    pub fn get_binding(&self, name: &str) -> Result<&Value, EnvironmentError> {
        self.bindings
            .get(name)
            .map(|b| &b.value)
            .ok_or_else(|| EnvironmentError::UnboundIdentifier {
                name: name.to_string(),
            })
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name).map(|b| &b.value)
    }

    /// Look up the full Binding struct.
    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Check if a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Insert or overwrite a binding, recording the declaration kind.
    ///
    /// # Errors
    ///
    /// - `ConstReassignment` if the name is already bound as `const`,
    ///   whatever the new declaration's kind
    pub fn set_binding(
        &mut self,
        name: impl Into<String>,
        value: Value,
        kind: DeclarationKind,
    ) -> Result<(), EnvironmentError> {
        let name = name.into();

        if let Some(existing) = self.bindings.get(&name) {
            if existing.kind.is_const() {
                tracing::debug!(name = %name, "rejected rebinding of const");
                return Err(EnvironmentError::ConstReassignment { name });
            }
        }

        tracing::debug!(name = %name, kind = %kind, "binding set");
        self.bindings.insert(
            name.clone(),
            Binding {
                name,
                value,
                kind,
            },
        );
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Nesting Depth Tracking (Stack Overflow Protection)
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a node. Returns error if `max` depth is exceeded.
    pub fn enter_node(&mut self, max: usize) -> Result<(), EnvironmentError> {
        if self.depth >= max {
            return Err(EnvironmentError::NestingTooDeep {
                depth: self.depth + 1,
                max,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a node.
    pub fn exit_node(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over all bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    /// Get all binding names.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Get the number of bindings, built-ins included.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut env = Environment::new();
        env.set_binding("a", Value::Number(1.0), DeclarationKind::Let)
            .unwrap();
        assert_eq!(env.get_binding("a").unwrap(), &Value::Number(1.0));
        assert_eq!(env.binding("a").unwrap().kind, DeclarationKind::Let);
    }

    #[test]
    fn test_overwrite_records_new_kind() {
        let mut env = Environment::new();
        env.set_binding("a", Value::Number(1.0), DeclarationKind::Var)
            .unwrap();
        env.set_binding("a", Value::Number(2.0), DeclarationKind::Const)
            .unwrap();
        assert_eq!(env.binding("a").unwrap().kind, DeclarationKind::Const);
        assert_eq!(env.get("a"), Some(&Value::Number(2.0)));
        // Still one binding for the name
        assert_eq!(env.names().iter().filter(|n| **n == "a").count(), 1);
    }

    #[test]
    fn test_const_blocks_every_kind() {
        let mut env = Environment::new();
        env.set_binding("k", Value::Number(1.0), DeclarationKind::Const)
            .unwrap();

        for kind in [
            DeclarationKind::Const,
            DeclarationKind::Let,
            DeclarationKind::Var,
            DeclarationKind::Using,
            DeclarationKind::AwaitUsing,
        ] {
            let err = env.set_binding("k", Value::Null, kind).unwrap_err();
            assert_eq!(
                err,
                EnvironmentError::ConstReassignment {
                    name: "k".to_string()
                }
            );
        }
        assert_eq!(env.get("k"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn test_unbound_identifier() {
        let env = Environment::new();
        assert_eq!(
            env.get_binding("nope").unwrap_err(),
            EnvironmentError::UnboundIdentifier {
                name: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut env = Environment::new();
        env.enter_node(2).unwrap();
        env.enter_node(2).unwrap();
        assert!(matches!(
            env.enter_node(2),
            Err(EnvironmentError::NestingTooDeep { depth: 3, max: 2 })
        ));
        env.exit_node();
        assert_eq!(env.depth(), 1);
    }
}
