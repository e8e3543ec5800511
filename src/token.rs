use derive_more::Display;

use crate::number::Number;
use crate::operator::Operator;
use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum Token {
    #[display("(")]
    LeftParen,
    #[display(")")]
    RightParen,

    #[display("{}", _0)]
    Number(Number),

    #[display("{}", _0)]
    Operator(Operator),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexItem {
    pub span: Span,
    pub token: Token,
}

impl LexItem {
    pub fn new(token: Token, span: Span) -> Self {
        LexItem { token, span }
    }
}
