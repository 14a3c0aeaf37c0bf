//! Value representation for runtime values

mod callable;
mod display;
mod impls;
pub mod number;
mod object;

pub use callable::{BuiltinFn, BuiltinFnPtr};
pub use object::{ObjectValue, RegexValue};

use std::sync::Arc;

/// Runtime value produced while walking the tree.
///
/// Values are organized into two tiers:
/// - Tier 1: Primitives (compared by value)
/// - Tier 2: Object-like values (Arc-wrapped, compared by identity)
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// `undefined`, also the result of nodes that produce no value
    Undefined,

    /// `null`
    Null,

    /// `true` or `false`
    Boolean(bool),

    /// IEEE-754 double
    Number(f64),

    /// Immutable string
    String(Arc<String>),

    /// Arbitrary-precision integer, limited to 128 bits here
    BigInt(i128),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Object-like Values
    // ═══════════════════════════════════════════════════════════════════
    /// Regular expression created by a literal
    Regex(Arc<RegexValue>),

    /// Built-in native function
    Callable(Arc<BuiltinFn>),

    /// Plain object: ordered name → value mapping
    Object(Arc<ObjectValue>),
}
