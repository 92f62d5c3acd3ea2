//! FILENAME: core/parser/src/precedence.rs
//! PURPOSE: Binding power table used by the precedence-climbing loop.
//! CONTEXT: A Precedence value is both a table entry (how tightly an operator
//! binds) and the threshold passed down recursive parse calls.
//!
//! TABLE (low --> high):
//!   + -   Sum        left-associative
//!   * /   Product    left-associative
//!   ^     Exponent   right-associative
//!   unary -  Prefix  (operand of a negation)

use crate::ast::BinaryOperator;
use crate::token::TokenKind;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Precedence {
    Lowest,
    Sum,
    Product,
    Exponent,
    Prefix,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Associativity {
    Left,
    Right,
}

impl Precedence {
    /// Binding precedence of a token in infix position.
    /// Tokens without an entry bind at `Lowest`, which stops the climbing loop.
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Star | TokenKind::Slash => Precedence::Product,
            TokenKind::Caret => Precedence::Exponent,
            _ => Precedence::Lowest,
        }
    }

    /// The next level down. `Lowest` has nothing below it.
    fn lower(self) -> Precedence {
        match self {
            Precedence::Lowest | Precedence::Sum => Precedence::Lowest,
            Precedence::Product => Precedence::Sum,
            Precedence::Exponent => Precedence::Product,
            Precedence::Prefix => Precedence::Exponent,
        }
    }
}

impl BinaryOperator {
    /// Infix rule table: the operator a token builds, if any.
    pub fn from_token(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::Caret => Some(BinaryOperator::Power),
            _ => None,
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => Precedence::Sum,
            BinaryOperator::Multiply | BinaryOperator::Divide => Precedence::Product,
            BinaryOperator::Power => Precedence::Exponent,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Threshold for parsing this operator's right operand.
    ///
    /// The loop only continues on strictly higher precedence, so a
    /// left-associative operator passes its own level (an equal operator
    /// returns to the caller's loop) while a right-associative one passes the
    /// level below (an equal operator is absorbed into the right operand).
    pub fn right_binding(&self) -> Precedence {
        match self.associativity() {
            Associativity::Left => self.precedence(),
            Associativity::Right => self.precedence().lower(),
        }
    }
}
