//! ESTree JSON frontend
//!
//! Reads the JSON an ESTree-conforming parser (acorn, espree, meriyah, ...)
//! emits for a script and reports errors in the style of a JavaScript engine.

use crate::ast::Node;
use crate::frontend::{Frontend, ParseError, SourceLocation};
use crate::{EvalError, Value};

/// ESTree JSON frontend.
///
/// # Example
///
/// ```
/// use ecmawalk::frontends::EstreeFrontend;
/// use ecmawalk::Frontend;
///
/// let frontend = EstreeFrontend::new();
/// let program = frontend.parse(r#"{"type": "Program", "body": []}"#).unwrap();
/// assert_eq!(program.kind_name(), "Program");
/// assert!(frontend.parse(r#"{"type": "Identifier", "name": "x"}"#).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EstreeFrontend {
    source_name: String,
}

impl Default for EstreeFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl EstreeFrontend {
    /// Create a frontend that reports locations against `input.json`.
    pub fn new() -> Self {
        Self::with_source_name("input.json")
    }

    /// Create a frontend that reports locations against `name`.
    pub fn with_source_name(name: impl Into<String>) -> Self {
        Self {
            source_name: name.into(),
        }
    }
}

impl Frontend for EstreeFrontend {
    fn parse(&self, source: &str) -> Result<Node, ParseError> {
        let node: Node = serde_json::from_str(source).map_err(|e| {
            ParseError::new(format!("invalid ESTree document: {}", e)).with_location(
                SourceLocation::new(self.source_name.clone(), e.line(), e.column()),
            )
        })?;

        match node {
            Node::Program(_) => Ok(node),
            other => Err(ParseError::new(format!(
                "expected a Program root, found {}",
                other.kind_name()
            ))),
        }
    }

    fn format_error(&self, error: &EvalError, _source: &str) -> String {
        // Offsets refer to the script the parser read, not to the JSON
        let message = match error {
            EvalError::UnboundIdentifier { name, .. } => {
                format!("ReferenceError: {} is not defined", name)
            }
            EvalError::ConstReassignment { name, .. } => {
                format!("TypeError: Assignment to constant variable '{}'.", name)
            }
            EvalError::NotCallable { type_name, .. } => {
                format!("TypeError: value of type {} is not a function", type_name)
            }
            EvalError::UnsupportedOperation {
                op,
                left_type,
                right_type,
                ..
            } => format!(
                "TypeError: cannot apply `{}` to {} and {}",
                op, left_type, right_type
            ),
            EvalError::UnsupportedPropertyAccess { reason, .. } => {
                format!("TypeError: {}", reason)
            }
            EvalError::RangeError { message, .. } => format!("RangeError: {}", message),
            EvalError::ArityMismatch {
                expected,
                got,
                name,
                ..
            } => format!(
                "TypeError: {} expects {} argument{} but got {}",
                name,
                expected,
                if *expected == 1 { "" } else { "s" },
                got
            ),
            _ => format!("error: {}", error),
        };

        match error.span() {
            Some(span) => format!("{} (at {}..{})", message, span.start, span.end),
            None => message,
        }
    }

    fn format_value(&self, value: &Value) -> String {
        format!("{:?}", value)
    }

    fn name(&self) -> &str {
        "ESTree"
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
