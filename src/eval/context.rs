use std::iter::Peekable;

use crate::number::Number;
use crate::operator::Operator;
use crate::span::Span;
use crate::token::{LexItem, Token};

use super::error::InvalidExpression;

/// Deepest nesting of groups, operands or unary minus accepted before the
/// expression is rejected instead of exhausting the native stack.
pub const MAX_DEPTH: usize = 256;

/// Pull-based cursor over a token stream, shared by every evaluator.
pub struct Context<I: Iterator<Item = LexItem>> {
    items: Peekable<I>,
    consumed: usize,
    // only the infix evaluator opens groups without closing them in place
    paren_depth: usize,
    depth: usize,
}

impl<I: Iterator<Item = LexItem>> Context<I> {
    pub fn new<T>(items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            items: items.into_iter().peekable(),
            consumed: 0,
            paren_depth: 0,
            depth: 0,
        }
    }

    pub fn is_at_end(&mut self) -> bool {
        self.items.peek().is_none()
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn advance(&mut self) -> Option<LexItem> {
        let li = self.items.next()?;
        self.consumed += 1;
        Some(li)
    }

    pub fn next_item(&mut self) -> Result<LexItem, InvalidExpression> {
        self.advance().ok_or(InvalidExpression::UnexpectedEnd)
    }

    pub fn consume_token(&mut self, token: Token) -> Result<LexItem, InvalidExpression> {
        let li = self.next_item()?;
        if li.token != token {
            return Err(InvalidExpression::UnexpectedToken(li.token, li.span));
        }
        Ok(li)
    }

    pub fn consume_operator(&mut self) -> Result<Operator, InvalidExpression> {
        let li = self.next_item()?;
        match li.token {
            Token::Operator(op) => Ok(op),
            _ => Err(InvalidExpression::UnexpectedToken(li.token, li.span)),
        }
    }

    pub fn open_paren(&mut self) {
        self.paren_depth += 1;
    }

    pub fn close_paren(&mut self, span: Span) -> Result<(), InvalidExpression> {
        self.paren_depth = self
            .paren_depth
            .checked_sub(1)
            .ok_or(InvalidExpression::UnbalancedParen(span))?;
        Ok(())
    }

    /// Runs `f` one nesting level deeper. `span` locates the token that
    /// opened the level when [`MAX_DEPTH`] is exceeded.
    pub fn nested<T, F>(&mut self, span: Span, f: F) -> Result<T, InvalidExpression>
    where
        F: FnOnce(&mut Self) -> Result<T, InvalidExpression>,
    {
        if self.depth >= MAX_DEPTH {
            return Err(InvalidExpression::TooDeep(span));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Accepts `value` only when the stream is exhausted and every group
    /// opened through [`Context::open_paren`] was closed.
    pub fn finish(mut self, value: Number) -> Result<Number, InvalidExpression> {
        if let Some(li) = self.advance() {
            return Err(InvalidExpression::Unfinished(li.token, li.span));
        }
        if self.paren_depth != 0 {
            return Err(InvalidExpression::UnclosedParen(self.paren_depth));
        }
        Ok(value)
    }
}
