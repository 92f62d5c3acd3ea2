//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Operator-precedence (Pratt) parser that converts Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. It takes the
//! token vector from the Lexer and builds an Expression tree that can be
//! evaluated.
//!
//! GRAMMAR:
//!   expression --> prefix ( INFIX_OP expression )*      (precedence climbing)
//!   prefix     --> NUMBER | "-" expression | "(" expression ")"
//!   INFIX_OP   --> "+" | "-" | "*" | "/" | "^"
//!
//! Prefix and infix rules are dispatched by matching on the token kind; the
//! binding powers live in precedence.rs. Unary minus binds tighter than every
//! binary operator, so `-2^2` parses as `((-2) ^ 2)`.

use crate::ast::{BinaryOperator, Expression};
use crate::error::{ParseError, ParseResult};
use crate::lexer::tokenize_with;
use crate::options::ParseOptions;
use crate::precedence::Precedence;
use crate::token::{Token, TokenKind};
use log::debug;

/// The Parser owns the token vector and a single forward cursor into it.
///
/// `current` is the token most recently moved onto; `peek` is the one-token
/// lookahead. When a rule finishes, `current` is the last token of the
/// expression it built.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
    options: ParseOptions,
}

impl Parser {
    /// Creates a parser over an already tokenized input.
    /// A missing trailing `EndOfInput` is appended.
    pub fn new(mut tokens: Vec<Token>, options: ParseOptions) -> Self {
        if !tokens.last().is_some_and(Token::is_end) {
            let end = tokens
                .last()
                .map(|t| t.position + t.literal.as_ref().map_or(1, String::len))
                .unwrap_or(0);
            tokens.push(Token::end_of_input(end));
        }

        Parser {
            tokens,
            position: 0,
            depth: 0,
            options,
        }
    }

    /// Parses the whole token sequence and returns the AST.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        let parsed = self.parse_expression(Precedence::Lowest)?;

        // Ensure we consumed all tokens
        let next = self.peek();
        if !next.is_end() && !self.options.allow_trailing_input {
            return Err(ParseError::TrailingInput {
                found: next.kind,
                position: next.position,
            });
        }

        Ok(parsed.expr)
    }

    fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.position + 1).min(last)]
    }

    /// Moves the cursor one token forward. Never moves past `EndOfInput`.
    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Moves onto the lookahead token if it has the expected kind.
    fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek().kind == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Fails once a subtree grows taller than `max_depth`. Long flat chains
    /// such as `1+1+...+1` never recurse in the parser but still build a tree
    /// as tall as the chain is long.
    fn check_height(&self, height: usize) -> ParseResult<()> {
        if let Some(limit) = self.options.max_depth {
            if height > limit {
                return Err(ParseError::NestingTooDeep { limit });
            }
        }
        Ok(())
    }

    /// Precedence-climbing core. Parses one prefix expression, then keeps
    /// folding infix operators into it while they bind tighter than
    /// `min_precedence`.
    fn parse_expression(&mut self, min_precedence: Precedence) -> ParseResult<Subtree> {
        if let Some(limit) = self.options.max_depth {
            if self.depth >= limit {
                return Err(ParseError::NestingTooDeep { limit });
            }
        }

        self.depth += 1;
        let result = self.parse_climbing(min_precedence);
        self.depth -= 1;
        result
    }

    fn parse_climbing(&mut self, min_precedence: Precedence) -> ParseResult<Subtree> {
        let mut left = self.parse_prefix()?;

        loop {
            let next = self.peek().kind;
            if next == TokenKind::EndOfInput || Precedence::of(next) <= min_precedence {
                break;
            }

            let Some(op) = BinaryOperator::from_token(next) else {
                break;
            };

            self.advance(); // onto the operator
            left = self.parse_infix(op, left)?;
        }

        Ok(left)
    }

    /// Prefix rule table: Number, "-" and "(".
    fn parse_prefix(&mut self) -> ParseResult<Subtree> {
        let (kind, position) = (self.current().kind, self.current().position);
        match kind {
            TokenKind::Number => self.parse_number(),
            TokenKind::Minus => self.parse_negation(),
            TokenKind::LParen => self.parse_grouped(),
            found => Err(ParseError::UnexpectedToken { found, position }),
        }
    }

    /// Literals that overflow `f64` are rejected: `inf` has no source form.
    fn parse_number(&self) -> ParseResult<Subtree> {
        let literal = self.current().literal.as_deref().unwrap_or_default();
        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Subtree::leaf(value)),
            _ => Err(ParseError::InvalidNumber {
                literal: literal.to_string(),
            }),
        }
    }

    fn parse_negation(&mut self) -> ParseResult<Subtree> {
        self.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;
        let height = operand.height + 1;
        self.check_height(height)?;

        Ok(Subtree {
            expr: Expression::negate(operand.expr),
            height,
        })
    }

    fn parse_grouped(&mut self) -> ParseResult<Subtree> {
        let open = self.current().position;
        self.advance();

        let inner = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return Err(ParseError::UnclosedParenthesis { position: open });
        }

        Ok(inner)
    }

    /// Infix rule shared by all five binary operators. The cursor sits on
    /// the operator token.
    fn parse_infix(&mut self, op: BinaryOperator, left: Subtree) -> ParseResult<Subtree> {
        self.advance();
        let right = self.parse_expression(op.right_binding())?;
        let height = left.height.max(right.height) + 1;
        self.check_height(height)?;

        Ok(Subtree {
            expr: Expression::binary(op, left.expr, right.expr),
            height,
        })
    }
}

/// A parsed expression together with its tree height, tracked as the tree is
/// built so the height limit costs nothing extra.
struct Subtree {
    expr: Expression,
    height: usize,
}

impl Subtree {
    fn leaf(value: f64) -> Self {
        Subtree {
            expr: Expression::NumberLiteral(value),
            height: 1,
        }
    }
}

/// Parses an expression string with the default (strict) options.
pub fn parse(input: &str) -> ParseResult<Expression> {
    parse_with(input, &ParseOptions::default())
}

pub fn parse_with(input: &str, options: &ParseOptions) -> ParseResult<Expression> {
    let tokens = tokenize_with(input, options.lex_mode)?;
    let expr = parse_tokens(tokens, options)?;
    debug!(target: "PARSER", "parsed {:?} as {}", input, expr);
    Ok(expr)
}

/// Parses a token sequence produced by the lexer (or built by hand).
pub fn parse_tokens(tokens: Vec<Token>, options: &ParseOptions) -> ParseResult<Expression> {
    let mut parser = Parser::new(tokens, *options);
    parser.parse()
}
