//! ESTree-shaped syntax tree consumed by the evaluator
//!
//! The tree is produced by an external ESTree-conforming parser and handed
//! over as JSON. Only the node kinds the evaluator understands get a typed
//! variant; every other `"type"` lands in [`Node::Unsupported`] and is
//! rejected when visited.

mod literal;

pub use literal::{Literal, LiteralValue, RegexLiteral};

use serde::Deserialize;

/// Source offsets of a node, as reported by the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Span {
    /// Offset where the node starts, in the parser's units (UTF-16 code
    /// units for acorn, not bytes)
    #[serde(default)]
    pub start: usize,

    /// Offset just past the end of the node, in the same units as `start`
    #[serde(default)]
    pub end: usize,
}

impl Span {
    /// Create a span from two offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A syntax tree node, tagged by its ESTree `type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Root of a parsed source unit
    Program(Program),

    /// An expression evaluated for its value or side effects
    ExpressionStatement(ExpressionStatement),

    /// `left <op> right`
    BinaryExpression(BinaryExpression),

    /// A literal value
    Literal(Literal),

    /// `callee(arg, ...)`
    CallExpression(CallExpression),

    /// `object.property` or `object[property]`
    MemberExpression(MemberExpression),

    /// A bare name
    Identifier(Identifier),

    /// `const`/`let`/`var`/`using` declaration list
    VariableDeclaration(VariableDeclaration),

    /// One `name = init` entry of a declaration
    VariableDeclarator(VariableDeclarator),

    /// Any node kind this evaluator does not handle
    #[serde(other)]
    Unsupported,
}

impl Node {
    /// ESTree name of this node's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Program(_) => "Program",
            Node::ExpressionStatement(_) => "ExpressionStatement",
            Node::BinaryExpression(_) => "BinaryExpression",
            Node::Literal(_) => "Literal",
            Node::CallExpression(_) => "CallExpression",
            Node::MemberExpression(_) => "MemberExpression",
            Node::Identifier(_) => "Identifier",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::VariableDeclarator(_) => "VariableDeclarator",
            Node::Unsupported => "unsupported node",
        }
    }

    /// Source span of this node, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            Node::Program(n) => Some(n.span),
            Node::ExpressionStatement(n) => Some(n.span),
            Node::BinaryExpression(n) => Some(n.span),
            Node::Literal(n) => Some(n.span),
            Node::CallExpression(n) => Some(n.span),
            Node::MemberExpression(n) => Some(n.span),
            Node::Identifier(n) => Some(n.span),
            Node::VariableDeclaration(n) => Some(n.span),
            Node::VariableDeclarator(n) => Some(n.span),
            Node::Unsupported => None,
        }
    }
}

/// Root node holding the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Program {
    /// Source offsets
    #[serde(flatten)]
    pub span: Span,

    /// Top-level statements
    pub body: Vec<Node>,
}

/// Statement wrapping a single expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpressionStatement {
    /// Source offsets
    #[serde(flatten)]
    pub span: Span,

    /// The wrapped expression
    pub expression: Box<Node>,
}

/// Binary operator application.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BinaryExpression {
    /// Source offsets
    #[serde(flatten)]
    pub span: Span,

    /// Left operand, evaluated first
    pub left: Box<Node>,

    /// Operator token
    pub operator: BinaryOperator,

    /// Right operand, evaluated second
    pub right: Box<Node>,
}

/// Function call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallExpression {
    /// Source offsets
    #[serde(flatten)]
    pub span: Span,

    /// Expression producing the function
    pub callee: Box<Node>,

    /// Arguments in source order
    #[serde(default)]
    pub arguments: Vec<Node>,

    /// Whether this is an optional call `f?.()`
    #[serde(default)]
    pub optional: bool,
}

/// Property access.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberExpression {
    /// Source offsets
    #[serde(flatten)]
    pub span: Span,

    /// Expression producing the base value
    pub object: Box<Node>,

    /// Property name (static) or key expression (computed)
    pub property: Box<Node>,

    /// `true` for bracket access `object[property]`
    #[serde(default)]
    pub computed: bool,

    /// Whether this is an optional access `object?.property`
    #[serde(default)]
    pub optional: bool,
}

/// A name reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Identifier {
    /// Source offsets
    #[serde(flatten)]
    pub span: Span,

    /// The name
    pub name: String,
}

/// Declaration statement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclaration {
    /// Source offsets
    #[serde(flatten)]
    pub span: Span,

    /// Declaration keyword
    pub kind: DeclarationKind,

    /// Declared names in source order
    pub declarations: Vec<VariableDeclarator>,
}

/// One declared name and its optional initializer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclarator {
    /// Source offsets
    #[serde(flatten)]
    pub span: Span,

    /// Declaration target; only a plain identifier is supported
    pub id: Box<Node>,

    /// Initializer expression
    #[serde(default)]
    pub init: Option<Box<Node>>,
}

/// Declaration keyword, which decides whether a binding may be rebound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum DeclarationKind {
    /// `const`
    #[serde(rename = "const")]
    Const,

    /// `let`
    #[serde(rename = "let")]
    Let,

    /// `var`
    #[serde(rename = "var")]
    Var,

    /// `using`
    #[serde(rename = "using")]
    Using,

    /// `await using`
    #[serde(rename = "await using")]
    AwaitUsing,
}

impl DeclarationKind {
    /// Source keyword for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Const => "const",
            DeclarationKind::Let => "let",
            DeclarationKind::Var => "var",
            DeclarationKind::Using => "using",
            DeclarationKind::AwaitUsing => "await using",
        }
    }

    /// Whether a binding of this kind can never be rebound.
    pub fn is_const(self) -> bool {
        matches!(self, DeclarationKind::Const)
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ESTree binary operator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum BinaryOperator {
    /// `==`
    #[serde(rename = "==")]
    LooseEq,
    /// `!=`
    #[serde(rename = "!=")]
    LooseNe,
    /// `===`
    #[serde(rename = "===")]
    StrictEq,
    /// `!==`
    #[serde(rename = "!==")]
    StrictNe,
    /// `<`
    #[serde(rename = "<")]
    Lt,
    /// `<=`
    #[serde(rename = "<=")]
    Le,
    /// `>`
    #[serde(rename = ">")]
    Gt,
    /// `>=`
    #[serde(rename = ">=")]
    Ge,
    /// `<<`
    #[serde(rename = "<<")]
    Shl,
    /// `>>`
    #[serde(rename = ">>")]
    Shr,
    /// `>>>`
    #[serde(rename = ">>>")]
    UShr,
    /// `+`
    #[serde(rename = "+")]
    Add,
    /// `-`
    #[serde(rename = "-")]
    Sub,
    /// `*`
    #[serde(rename = "*")]
    Mul,
    /// `/`
    #[serde(rename = "/")]
    Div,
    /// `%`
    #[serde(rename = "%")]
    Rem,
    /// `**`
    #[serde(rename = "**")]
    Exp,
    /// `|`
    #[serde(rename = "|")]
    BitOr,
    /// `^`
    #[serde(rename = "^")]
    BitXor,
    /// `&`
    #[serde(rename = "&")]
    BitAnd,
    /// `in`
    #[serde(rename = "in")]
    In,
    /// `instanceof`
    #[serde(rename = "instanceof")]
    InstanceOf,
}

impl BinaryOperator {
    /// Source token for this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::LooseEq => "==",
            BinaryOperator::LooseNe => "!=",
            BinaryOperator::StrictEq => "===",
            BinaryOperator::StrictNe => "!==",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Shl => "<<",
            BinaryOperator::Shr => ">>",
            BinaryOperator::UShr => ">>>",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Rem => "%",
            BinaryOperator::Exp => "**",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::In => "in",
            BinaryOperator::InstanceOf => "instanceof",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
