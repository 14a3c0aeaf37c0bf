//! Frontend trait for ecmawalk
//!
//! A frontend turns an external parser's output into the typed tree the
//! evaluator walks, and presents evaluation errors to the user:
//!
//! ```text
//! Source Code → [External Parser] → ESTree JSON → [Frontend] → Node → [Visit] → Value
//! ```
//!
//! Frontends are responsible for:
//! - Decoding the parser's output into [`Node`]
//! - Rejecting documents that are not a `Program`
//! - Error formatting
//!
//! The evaluator core is responsible for:
//! - Evaluating [`Node`] trees
//! - Managing the runtime environment

use crate::ast::Node;
use crate::{EvalError, Value};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Error that occurred while decoding a tree.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Optional source location
    pub location: Option<SourceLocation>,
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Add location information to the error.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}:{}:{}", loc.file, loc.line, loc.column)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Location in the decoded document, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File name or identifier
    pub file: String,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FRONTEND TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// Boundary between a tree producer and the evaluator core.
///
/// # Example Implementation
///
/// ```rust
/// use ecmawalk::frontend::{Frontend, ParseError};
/// use ecmawalk::{EvalError, Node, Value};
///
/// struct InlineJson;
///
/// impl Frontend for InlineJson {
///     fn parse(&self, source: &str) -> Result<Node, ParseError> {
///         serde_json::from_str(source).map_err(|e| ParseError::new(e.to_string()))
///     }
///
///     fn format_error(&self, error: &EvalError, _source: &str) -> String {
///         format!("error: {}", error)
///     }
///
///     fn format_value(&self, value: &Value) -> String {
///         format!("{:?}", value)
///     }
///
///     fn name(&self) -> &str {
///         "inline"
///     }
///
///     fn file_extension(&self) -> &str {
///         "json"
///     }
/// }
///
/// let tree = InlineJson.parse(r#"{"type": "Program", "body": []}"#).unwrap();
/// assert_eq!(tree.kind_name(), "Program");
/// ```
pub trait Frontend: Send + Sync {
    /// Decode a document into a tree rooted at a `Program` node.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the document is malformed or its root is
    /// not a `Program`.
    fn parse(&self, source: &str) -> Result<Node, ParseError>;

    /// Format an evaluation error for display to the user.
    ///
    /// `source` is the document the tree was decoded from.
    fn format_error(&self, error: &EvalError, source: &str) -> String;

    /// Format a value the way the console shows a nested value.
    fn format_value(&self, value: &Value) -> String;

    /// Return the name of this frontend.
    fn name(&self) -> &str;

    /// Return the file extension of documents this frontend reads.
    fn file_extension(&self) -> &str;
}
