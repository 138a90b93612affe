//! Node shapes built from the token stream by later stages.
//!
//! Each binary node owns its two children, so a tree of nodes is acyclic by
//! construction.

use std::fmt;

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(Literal),
    Variable(Variable),
    Binary(BinaryExpr),
}

impl Node {
    pub fn int(value: i64) -> Self {
        Node::Literal(Literal::Int { value })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Node::Variable(Variable { name: name.into() })
    }

    pub fn binary(op: BinaryOperator, left: Node, right: Node) -> Self {
        Node::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(lit) => write!(f, "{}", lit),
            Node::Variable(var) => write!(f, "{}", var.name),
            Node::Binary(bin) => write!(f, "({} {} {})", bin.left, bin.op, bin.right),
        }
    }
}

// ============================================================================
// Literals
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Int { value: i64 },
}

impl Literal {
    /// Name of the literal's type.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Literal::Int { .. } => "int",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int { value } => write!(f, "{}", value),
        }
    }
}

// ============================================================================
// Variables
// ============================================================================

/// A reference to a named variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
}

// ============================================================================
// Binary operators
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Assign,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Assign => "=",
        }
    }

    /// Map an operator token's text to the operator it denotes.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOperator::Plus),
            "=" => Some(BinaryOperator::Assign),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub op: BinaryOperator,
    pub left: Box<Node>,
    pub right: Box<Node>,
}
