//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for arithmetic expressions.
//! CONTEXT: After the Lexer tokenizes an expression string, the Parser converts
//! those tokens into this tree structure. The Evaluator then traverses
//! this tree to compute the final result.
//!
//! SUPPORTED EXPRESSIONS:
//! - Number literals: 42
//! - Binary operations: +, -, *, /, ^
//! - Unary operations: - (negation)
//!
//! The Display impl renders a fully parenthesized form, e.g. `(1 + (2 * 3))`,
//! which is itself valid parser input.

use serde::{Deserialize, Serialize};

/// Represents a parsed expression.
/// Every node owns its children; the tree is never mutated once built.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Expression {
    NumberLiteral(f64),

    /// A unary operation: op operand (e.g., -5).
    UnaryExpr {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    /// A binary operation: left op right (e.g., 5 + 3).
    BinaryExpr {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

/// Binary operators, listed from lowest to highest precedence group.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Power,    // ^
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Negate, // -
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Power => '^',
        }
    }
}

impl UnaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            UnaryOperator::Negate => '-',
        }
    }
}

impl Expression {
    pub fn number(value: f64) -> Self {
        Expression::NumberLiteral(value)
    }

    pub fn negate(operand: Expression) -> Self {
        Expression::UnaryExpr {
            op: UnaryOperator::Negate,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Height of the tree; a lone literal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expression::NumberLiteral(_) => 1,
            Expression::UnaryExpr { operand, .. } => 1 + operand.depth(),
            Expression::BinaryExpr { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expression::NumberLiteral(_) => 1,
            Expression::UnaryExpr { operand, .. } => 1 + operand.node_count(),
            Expression::BinaryExpr { left, right, .. } => {
                1 + left.node_count() + right.node_count()
            }
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::NumberLiteral(n) => write!(f, "{}", n),
            Expression::UnaryExpr { op, operand } => write!(f, "({}{})", op, operand),
            Expression::BinaryExpr { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
        }
    }
}
