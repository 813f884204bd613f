//! AST serialization into generic key-value records
//!
//! The typed [`AstNode`] tree is the parser's contract; tools that consume
//! the tree as data (the batch driver, external graders) get a uniform
//! record per node instead:
//!
//! ```text
//! { "kind": str, "value": any|null, "lineno": int|null, "col": int|null,
//!   "children": [record, ...] }
//! ```
//!
//! Every record carries exactly those five keys. Parsed nodes populate
//! `lineno`/`col` from their source location; records synthesized during
//! export (`Type`, `Name`, `Params`, `Param` wrappers and the `"None"`
//! placeholders standing in for omitted `for` clauses) leave them null,
//! since they are projections of typed fields rather than located nodes.
//! All four literal node variants flatten to kind `"Literal"` with the raw
//! source text as value.

use crate::parser::ast::{AstNode, Param, SourceLocation, TypeName};
use serde::Serialize;
use serde_json::{json, Value};

/// One exported AST node in the five-key record shape.
#[derive(Debug, Serialize)]
pub struct NodeRecord {
    pub kind: &'static str,
    pub value: Value,
    pub lineno: Option<usize>,
    pub col: Option<usize>,
    pub children: Vec<NodeRecord>,
}

impl NodeRecord {
    fn new(kind: &'static str, location: SourceLocation) -> Self {
        Self {
            kind,
            value: Value::Null,
            lineno: Some(location.line),
            col: Some(location.column),
            children: Vec::new(),
        }
    }

    fn synthesized(kind: &'static str) -> Self {
        Self {
            kind,
            value: Value::Null,
            lineno: None,
            col: None,
            children: Vec::new(),
        }
    }
}

/// Convert a parsed node (and its whole subtree) into records.
pub fn to_record(node: &AstNode) -> NodeRecord {
    let mut record = NodeRecord::new(node.kind(), node.location());

    match node {
        AstNode::Program { items, .. } => {
            record.children = items.iter().map(to_record).collect();
        }
        AstNode::Function {
            return_type,
            name,
            params,
            body,
            ..
        } => {
            record.children.push(type_record(*return_type));
            record.children.push(name_record(name));
            record.children.push(params_record(params));
            record.children.push(to_record(body));
        }
        AstNode::GlobalVar { var_type, name, .. } | AstNode::Decl { var_type, name, .. } => {
            record.children.push(type_record(*var_type));
            record.children.push(name_record(name));
        }
        AstNode::Block { statements, .. } => {
            record.children = statements.iter().map(to_record).collect();
        }
        AstNode::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => {
            record.children.push(to_record(condition));
            record.children.push(to_record(then_branch));
            if let Some(else_branch) = else_branch {
                record.children.push(to_record(else_branch));
            }
        }
        AstNode::While {
            condition, body, ..
        } => {
            record.children.push(to_record(condition));
            record.children.push(to_record(body));
        }
        AstNode::For {
            init,
            condition,
            post,
            body,
            ..
        } => {
            // Always four children; empty clauses become "None" markers
            record.children.push(clause_record(init.as_deref()));
            record.children.push(clause_record(condition.as_deref()));
            record.children.push(clause_record(post.as_deref()));
            record.children.push(to_record(body));
        }
        AstNode::Return { expr, .. } => {
            if let Some(expr) = expr {
                record.children.push(to_record(expr));
            }
        }
        AstNode::ExprStmt { expr, .. } => {
            record.children.push(to_record(expr));
        }
        AstNode::Assign { lhs, rhs, .. } => {
            record.value = Value::from("=");
            record.children.push(to_record(lhs));
            record.children.push(to_record(rhs));
        }
        AstNode::BinaryOp {
            op, left, right, ..
        } => {
            record.value = Value::from(op.to_string());
            record.children.push(to_record(left));
            record.children.push(to_record(right));
        }
        AstNode::UnaryOp { op, operand, .. } => {
            record.value = Value::from(op.to_string());
            record.children.push(to_record(operand));
        }
        AstNode::Call { name, args, .. } => {
            record.value = Value::from(name.as_str());
            record.children = args.iter().map(to_record).collect();
        }
        AstNode::Var(name, _) => {
            record.value = Value::from(name.as_str());
        }
        AstNode::IntLiteral(text, _)
        | AstNode::FloatLiteral(text, _)
        | AstNode::StringLiteral(text, _)
        | AstNode::CharLiteral(text, _) => {
            record.value = Value::from(text.as_str());
        }
    }

    record
}

/// Render the tree as pretty-printed JSON (2-space indentation).
pub fn to_json_pretty(node: &AstNode) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_record(node))
}

fn type_record(type_name: TypeName) -> NodeRecord {
    let mut record = NodeRecord::synthesized("Type");
    record.value = Value::from(type_name.to_string());
    record
}

fn name_record(name: &str) -> NodeRecord {
    let mut record = NodeRecord::synthesized("Name");
    record.value = Value::from(name);
    record
}

fn params_record(params: &[Param]) -> NodeRecord {
    let mut record = NodeRecord::synthesized("Params");
    record.children = params.iter().map(param_record).collect();
    record
}

fn param_record(param: &Param) -> NodeRecord {
    let mut record = NodeRecord::synthesized("Param");
    record.value = json!({
        "type": param.param_type.to_string(),
        "name": param.name,
    });
    record
}

fn clause_record(clause: Option<&AstNode>) -> NodeRecord {
    match clause {
        Some(node) => to_record(node),
        None => NodeRecord::synthesized("None"),
    }
}
