// AST (Abstract Syntax Tree) definitions for the C-like front end

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Type names accepted by the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Int,
    Float,
    Void,
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Int => write!(f, "int"),
            TypeName::Float => write!(f, "float"),
            TypeName::Void => write!(f, "void"),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        };
        write!(f, "{}", symbol)
    }
}

/// Unary prefix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,    // -x
    Not,    // !x
    PreInc, // ++x
    PreDec, // --x
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            UnOp::Neg => "-",
            UnOp::Not => "!",
            UnOp::PreInc => "++",
            UnOp::PreDec => "--",
        };
        write!(f, "{}", symbol)
    }
}

/// Function parameter. The name may be omitted in a declaration
/// (`int f(int, float)`), so it is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub param_type: TypeName,
    pub name: Option<String>,
}

/// AST nodes representing declarations, statements, and expressions.
///
/// Every node carries the [`SourceLocation`] of the token that introduced it
/// (the keyword for statements, the operator for binary/unary nodes, the
/// first token otherwise). Literal nodes keep the raw source text; this
/// front end performs no escape processing or numeric conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Root of a translation unit; items are Function and GlobalVar nodes.
    Program {
        items: Vec<AstNode>,
        location: SourceLocation,
    },
    Function {
        return_type: TypeName,
        name: String,
        params: Vec<Param>,
        body: Box<AstNode>, // always a Block
        location: SourceLocation,
    },
    GlobalVar {
        var_type: TypeName,
        name: String,
        location: SourceLocation,
    },

    // Statements
    Block {
        statements: Vec<AstNode>,
        location: SourceLocation,
    },
    /// Local declaration without initializer: `int x;`
    Decl {
        var_type: TypeName,
        name: String,
        location: SourceLocation,
    },
    If {
        condition: Box<AstNode>,
        then_branch: Box<AstNode>,
        else_branch: Option<Box<AstNode>>,
        location: SourceLocation,
    },
    While {
        condition: Box<AstNode>,
        body: Box<AstNode>,
        location: SourceLocation,
    },
    /// `for` with each clause optional; an omitted clause is `None`, never a
    /// placeholder node.
    For {
        init: Option<Box<AstNode>>,
        condition: Option<Box<AstNode>>,
        post: Option<Box<AstNode>>,
        body: Box<AstNode>,
        location: SourceLocation,
    },
    Return {
        expr: Option<Box<AstNode>>,
        location: SourceLocation,
    },
    ExprStmt {
        expr: Box<AstNode>,
        location: SourceLocation,
    },

    // Expressions
    /// `lhs = rhs`; the left side is syntactically unrestricted (no lvalue
    /// check happens in the front end).
    Assign {
        lhs: Box<AstNode>,
        rhs: Box<AstNode>,
        location: SourceLocation,
    },
    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<AstNode>,
        location: SourceLocation,
    },
    Call {
        name: String,
        args: Vec<AstNode>,
        location: SourceLocation,
    },
    Var(String, SourceLocation),
    IntLiteral(String, SourceLocation),
    FloatLiteral(String, SourceLocation),
    StringLiteral(String, SourceLocation),
    CharLiteral(String, SourceLocation),
}

impl AstNode {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            AstNode::Program { location, .. }
            | AstNode::Function { location, .. }
            | AstNode::GlobalVar { location, .. }
            | AstNode::Block { location, .. }
            | AstNode::Decl { location, .. }
            | AstNode::If { location, .. }
            | AstNode::While { location, .. }
            | AstNode::For { location, .. }
            | AstNode::Return { location, .. }
            | AstNode::ExprStmt { location, .. }
            | AstNode::Assign { location, .. }
            | AstNode::BinaryOp { location, .. }
            | AstNode::UnaryOp { location, .. }
            | AstNode::Call { location, .. } => *location,
            AstNode::Var(_, loc)
            | AstNode::IntLiteral(_, loc)
            | AstNode::FloatLiteral(_, loc)
            | AstNode::StringLiteral(_, loc)
            | AstNode::CharLiteral(_, loc) => *loc,
        }
    }

    /// Name of the syntactic construct, as used in the serialized record
    /// form. All four literal variants report `"Literal"`.
    pub fn kind(&self) -> &'static str {
        match self {
            AstNode::Program { .. } => "Program",
            AstNode::Function { .. } => "Function",
            AstNode::GlobalVar { .. } => "GlobalVar",
            AstNode::Block { .. } => "Block",
            AstNode::Decl { .. } => "Decl",
            AstNode::If { .. } => "If",
            AstNode::While { .. } => "While",
            AstNode::For { .. } => "For",
            AstNode::Return { .. } => "Return",
            AstNode::ExprStmt { .. } => "ExprStmt",
            AstNode::Assign { .. } => "Assign",
            AstNode::BinaryOp { .. } => "BinaryOp",
            AstNode::UnaryOp { .. } => "UnaryOp",
            AstNode::Call { .. } => "Call",
            AstNode::Var(_, _) => "Var",
            AstNode::IntLiteral(_, _)
            | AstNode::FloatLiteral(_, _)
            | AstNode::StringLiteral(_, _)
            | AstNode::CharLiteral(_, _) => "Literal",
        }
    }
}
