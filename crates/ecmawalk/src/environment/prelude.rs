//! Built-in bindings seeded into every environment

use std::sync::Arc;

use super::Environment;
use crate::ast::DeclarationKind;
use crate::output::Output;
use crate::value::{BuiltinFn, ObjectValue, Value};

impl Environment {
    /// Seed the built-in bindings.
    ///
    /// `console` is declared like a `var` so programs may shadow it.
    pub(super) fn load_prelude(&mut self) {
        let console = ObjectValue::new().with_property("log", console_log(self.output.clone()));

        // The table is empty at this point, so this cannot hit a const.
        if let Err(err) = self.set_binding("console", Value::object(console), DeclarationKind::Var) {
            tracing::warn!(%err, "failed to seed console");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Built-in Function Implementations
// ═══════════════════════════════════════════════════════════════════════

fn console_log(output: Arc<Output>) -> Value {
    Value::callable(BuiltinFn::new("log", -1, move |args| {
        output.write_line(&format_log_line(args));
        Ok(Value::Undefined)
    }))
}

/// Join arguments the way `console.log` does: top-level strings raw,
/// everything else inspected, separated by single spaces.
fn format_log_line(args: &[Value]) -> String {
    args.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
