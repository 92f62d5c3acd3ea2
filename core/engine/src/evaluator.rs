//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates AST expressions to compute a numeric result.
//! CONTEXT: After an expression is parsed into an AST, this module traverses
//! the tree and computes the final value.
//!
//! SUPPORTED FEATURES:
//! - Literal evaluation: Numbers
//! - Binary operations: +, -, *, /, ^
//! - Unary operations: - (negation)
//!
//! Arithmetic follows IEEE-754 double semantics throughout. Division by zero
//! yields a signed infinity (or NaN for 0/0) and invalid power domains such as
//! a negative base with a fractional exponent yield NaN. None of these are
//! errors; callers inspect the returned value if they care.

use calc_parser::{BinaryOperator, Expression, UnaryOperator};
use log::trace;

/// The expression evaluator. Holds no state; every call is a pure tree walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    /// Evaluates an AST expression and returns the result.
    pub fn evaluate(&self, expr: &Expression) -> f64 {
        match expr {
            Expression::NumberLiteral(n) => *n,
            Expression::UnaryExpr { op, operand } => self.eval_unary_op(op, operand),
            Expression::BinaryExpr { op, left, right } => self.eval_binary_op(left, op, right),
        }
    }

    /// Evaluates a binary operation, left operand first.
    fn eval_binary_op(&self, left: &Expression, op: &BinaryOperator, right: &Expression) -> f64 {
        let left_val = self.evaluate(left);
        let right_val = self.evaluate(right);

        match op {
            BinaryOperator::Add => left_val + right_val,
            BinaryOperator::Subtract => left_val - right_val,
            BinaryOperator::Multiply => left_val * right_val,
            BinaryOperator::Divide => left_val / right_val,
            BinaryOperator::Power => left_val.powf(right_val),
        }
    }

    fn eval_unary_op(&self, op: &UnaryOperator, operand: &Expression) -> f64 {
        let val = self.evaluate(operand);

        match op {
            UnaryOperator::Negate => -val,
        }
    }
}

/// Convenience function to evaluate a tree without constructing an Evaluator.
pub fn evaluate(expr: &Expression) -> f64 {
    let value = Evaluator::new().evaluate(expr);
    trace!(target: "EVAL", "{} node(s) evaluated to {}", expr.node_count(), value);
    value
}
