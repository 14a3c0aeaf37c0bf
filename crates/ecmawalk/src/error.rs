//! Error types for evaluation

use thiserror::Error;

use crate::ast::Span;
use crate::value::Value;

/// Errors raised by the binding table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvironmentError {
    /// Read of a name that was never declared
    #[error("{name} is not defined")]
    UnboundIdentifier {
        /// The unbound name
        name: String,
    },

    /// Any declaration targeting a name already bound as `const`
    #[error("assignment to constant variable `{name}`")]
    ConstReassignment {
        /// The constant's name
        name: String,
    },

    /// The tree is nested deeper than the configured limit
    #[error("maximum nesting depth exceeded ({depth} > {max})")]
    NestingTooDeep {
        /// Depth reached
        depth: usize,
        /// Configured limit
        max: usize,
    },
}

/// Main error type for tree evaluation.
///
/// Every variant aborts the run; nothing is recovered locally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Node kind outside the handled set, or an unhandled sub-case of one
    #[error("unsupported node type: {kind}")]
    UnsupportedNodeType {
        /// What was encountered
        kind: String,
        /// Source location
        span: Option<Span>,
    },

    /// Read of an undeclared name
    #[error("{name} is not defined")]
    UnboundIdentifier {
        /// The unbound name
        name: String,
        /// Source location
        span: Option<Span>,
    },

    /// Declaration of a name previously bound as `const`
    #[error("assignment to constant variable `{name}`")]
    ConstReassignment {
        /// The constant's name
        name: String,
        /// Source location
        span: Option<Span>,
    },

    /// Property access this evaluator does not perform
    #[error("unsupported property access: {reason}")]
    UnsupportedPropertyAccess {
        /// Why the access was rejected
        reason: String,
        /// Source location
        span: Option<Span>,
    },

    /// Operator applied to operands it has no defined semantics for
    #[error("unsupported operation: {left_type} {op} {right_type}")]
    UnsupportedOperation {
        /// Operator token
        op: String,
        /// Type of the left operand
        left_type: String,
        /// Type of the right operand
        right_type: String,
        /// Source location
        span: Option<Span>,
    },

    /// BigInt result outside the representable range, or BigInt division by zero
    #[error("range error: {message}")]
    RangeError {
        /// Description
        message: String,
        /// Source location
        span: Option<Span>,
    },

    /// Call on a value that is not a function
    #[error("{type_name} is not a function")]
    NotCallable {
        /// Type of the callee value
        type_name: String,
        /// Source location
        span: Option<Span>,
    },

    /// Builtin called with the wrong number of arguments
    #[error("{name} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        /// Expected argument count
        expected: usize,
        /// Actual argument count
        got: usize,
        /// Builtin name
        name: String,
        /// Source location
        span: Option<Span>,
    },

    /// Builtin reported a failure
    #[error("error in builtin {name}: {message}")]
    BuiltinError {
        /// Builtin name
        name: String,
        /// Failure message
        message: String,
        /// Source location
        span: Option<Span>,
    },

    /// Tree nested deeper than the configured limit
    #[error("maximum nesting depth exceeded ({depth} > {max})")]
    NestingTooDeep {
        /// Depth reached
        depth: usize,
        /// Configured limit
        max: usize,
    },

    /// Evaluation was interrupted through the context flag
    #[error("evaluation interrupted")]
    Interrupted,
}

impl EvalError {
    /// Source location attached to this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::UnsupportedNodeType { span, .. }
            | EvalError::UnboundIdentifier { span, .. }
            | EvalError::ConstReassignment { span, .. }
            | EvalError::UnsupportedPropertyAccess { span, .. }
            | EvalError::UnsupportedOperation { span, .. }
            | EvalError::RangeError { span, .. }
            | EvalError::NotCallable { span, .. }
            | EvalError::ArityMismatch { span, .. }
            | EvalError::BuiltinError { span, .. } => *span,
            EvalError::NestingTooDeep { .. } | EvalError::Interrupted => None,
        }
    }

    /// Attach a span when the error does not already carry one.
    pub fn with_span(mut self, at: Span) -> Self {
        match &mut self {
            EvalError::UnsupportedNodeType { span, .. }
            | EvalError::UnboundIdentifier { span, .. }
            | EvalError::ConstReassignment { span, .. }
            | EvalError::UnsupportedPropertyAccess { span, .. }
            | EvalError::UnsupportedOperation { span, .. }
            | EvalError::RangeError { span, .. }
            | EvalError::NotCallable { span, .. }
            | EvalError::ArityMismatch { span, .. }
            | EvalError::BuiltinError { span, .. } => {
                span.get_or_insert(at);
            }
            EvalError::NestingTooDeep { .. } | EvalError::Interrupted => {}
        }
        self
    }
}

impl From<EnvironmentError> for EvalError {
    fn from(err: EnvironmentError) -> Self {
        match err {
            EnvironmentError::UnboundIdentifier { name } => {
                EvalError::UnboundIdentifier { name, span: None }
            }
            EnvironmentError::ConstReassignment { name } => {
                EvalError::ConstReassignment { name, span: None }
            }
            EnvironmentError::NestingTooDeep { depth, max } => {
                EvalError::NestingTooDeep { depth, max }
            }
        }
    }
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;

/// The `typeof` name of a value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Undefined => "undefined",
        Value::Null => "object",
        Value::Boolean(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::BigInt(_) => "bigint",
        Value::Regex(_) => "object",
        Value::Callable(_) => "function",
        Value::Object(_) => "object",
    }
}
