//! # ecmawalk
//!
//! A tree-walking evaluator for a small ECMAScript subset.
//!
//! ecmawalk does not parse JavaScript itself. An external ESTree-conforming
//! parser produces the syntax tree as JSON; ecmawalk decodes it into typed
//! nodes and evaluates them by recursive traversal.
//!
//! ## Architecture
//!
//! - **Frontend**: Decode ESTree JSON into [`Node`] trees
//! - **Visit**: Walk nodes depth-first, producing [`Value`]s
//! - **Evaluator**: Compute binary operator results with explicit coercions
//! - **Environment**: The single flat binding table, seeded with `console`
//!
//! ## Supported subset
//!
//! Programs, expression statements, literals, identifiers, binary
//! expressions, static member access, calls to built-ins and variable
//! declarations. Any other node kind fails with
//! [`EvalError::UnsupportedNodeType`] when it is reached.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use ecmawalk::{Environment, EstreeFrontend, EvalContext, Frontend, Output, Visit};
//!
//! let tree = EstreeFrontend::new()
//!     .parse(r#"{
//!         "type": "Program",
//!         "body": [{
//!             "type": "ExpressionStatement",
//!             "expression": {
//!                 "type": "CallExpression",
//!                 "callee": {
//!                     "type": "MemberExpression",
//!                     "object": {"type": "Identifier", "name": "console"},
//!                     "property": {"type": "Identifier", "name": "log"},
//!                     "computed": false
//!                 },
//!                 "arguments": [{"type": "Literal", "value": "hi", "raw": "'hi'"}]
//!             }
//!         }]
//!     }"#)
//!     .unwrap();
//!
//! let output = Arc::new(Output::buffer());
//! let mut env = Environment::with_output(output.clone());
//! tree.visit(&mut env, &EvalContext::new()).unwrap();
//!
//! assert_eq!(output.lines(), vec!["hi"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod frontend;
pub mod frontends;
pub mod output;
pub mod value;
pub mod visit;

// Re-export main types
pub use ast::{BinaryOperator, DeclarationKind, Node, Span};
pub use context::EvalContext;
pub use environment::{Binding, Environment, NestingGuard};
pub use error::{EnvironmentError, EvalError, Result};
pub use evaluator::{loose_equals, perform_binary_operation, strict_equals};
pub use frontend::{Frontend, ParseError, SourceLocation};
pub use frontends::EstreeFrontend;
pub use output::Output;
pub use value::{BuiltinFn, BuiltinFnPtr, ObjectValue, RegexValue, Value};
pub use visit::{visit_node, Visit};

/// ecmawalk version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
