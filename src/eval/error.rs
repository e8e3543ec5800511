use thiserror::Error;

use crate::operator::Operator;
use crate::span::Span;
use crate::token::Token;

/// The single failure every evaluator reports. Variants only refine the
/// diagnostic; callers treat them all as "not a valid expression".
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidExpression {
    #[error("Expression is empty")]
    Empty,

    #[error("Expression ended while more input was expected")]
    UnexpectedEnd,

    #[error("Unexpected token `{0}` at position {1}")]
    UnexpectedToken(Token, Span),

    #[error("Operator `{0}` at position {1} does not have two operands")]
    InsufficientOperands(Operator, Span),

    #[error("Expression leaves {0} operands instead of one")]
    WrongOperandCount(usize),

    #[error("Closing parenthesis at position {0} has no matching opening parenthesis")]
    UnbalancedParen(Span),

    #[error("{0} opening parenthesis are never closed")]
    UnclosedParen(usize),

    #[error("Expression nests deeper than the supported limit at position {0}")]
    TooDeep(Span),

    #[error("Parse have leftover tokens start with `{0}` at {1}")]
    Unfinished(Token, Span),
}

impl InvalidExpression {
    /// Source position the diagnostic points at, if it has one.
    pub fn span(&self) -> Option<Span> {
        use InvalidExpression::*;
        match self {
            UnexpectedToken(_, s) | InsufficientOperands(_, s) | UnbalancedParen(s) => Some(*s),
            Unfinished(_, s) | TooDeep(s) => Some(*s),
            Empty | UnexpectedEnd | WrongOperandCount(_) | UnclosedParen(_) => None,
        }
    }
}
