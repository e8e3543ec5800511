//! Precedence-aware infix evaluation with optional parentheses.
//!
//! Two tiers encode the precedence. An additive operator takes the whole
//! remainder of the current group as its right operand. A multiplicative
//! operator takes a single operand and folds it into the running value. Only
//! groups and unary minus recurse; operators at one level are read in a loop.
//!
//! ```text
//! Single := Number | '-' Single | '(' Chain
//! Chain  := Single Tail
//! Tail   := <end> | ')' | AddOp Chain | MulOp Single Tail
//! ```

use std::ops::Neg;

use log::debug;

use crate::number::Number;
use crate::operator::{Operator, Precedence};
use crate::token::{LexItem, Token};

use super::context::Context;
use super::error::InvalidExpression;

/// Evaluates an infix expression such as `1 + 2 * 3` or `(1 + 2) * 3`.
pub fn evaluate_infix<T>(tokens: T) -> Result<Number, InvalidExpression>
where
    T: IntoIterator<Item = LexItem>,
{
    let mut ctx = Context::new(tokens);
    if ctx.is_at_end() {
        return Err(InvalidExpression::Empty);
    }
    let result = parse_chain(&mut ctx, None).and_then(|value| ctx.finish(value));
    debug!("infix: {:?}", result);
    result
}

fn parse_single<I>(ctx: &mut Context<I>) -> Result<Number, InvalidExpression>
where
    I: Iterator<Item = LexItem>,
{
    let li = ctx.next_item()?;
    match li.token {
        Token::Number(n) => Ok(n),
        Token::Operator(Operator::Minus) => ctx.nested(li.span, parse_single).map(Neg::neg),
        Token::LeftParen => {
            ctx.open_paren();
            // the matching ')' is consumed inside the chain
            ctx.nested(li.span, |ctx| parse_chain(ctx, None))
        }
        _ => Err(InvalidExpression::UnexpectedToken(li.token, li.span)),
    }
}

/// Reads operands and operators up to the end of the stream or the `)`
/// closing the current group. Multiplicative operators fold into the running
/// value immediately; each additive operator takes everything after it as its
/// right operand, so those are folded from the right once the group ends.
fn parse_chain<I>(ctx: &mut Context<I>, lhs: Option<Number>) -> Result<Number, InvalidExpression>
where
    I: Iterator<Item = LexItem>,
{
    let mut lhs = match lhs {
        Some(value) => value,
        None => parse_single(ctx)?,
    };
    let mut pending: Vec<(Number, Operator)> = vec![];

    while let Some(li) = ctx.advance() {
        match li.token {
            Token::RightParen => {
                ctx.close_paren(li.span)?;
                break;
            }
            Token::Operator(op) => match op.precedence() {
                Precedence::Additive => {
                    pending.push((lhs, op));
                    lhs = parse_single(ctx)?;
                }
                Precedence::Multiplicative => {
                    let rhs = parse_single(ctx)?;
                    lhs = op.apply(lhs, rhs);
                }
            },
            _ => return Err(InvalidExpression::UnexpectedToken(li.token, li.span)),
        }
    }

    while let Some((left, op)) = pending.pop() {
        lhs = op.apply(left, lhs);
    }
    Ok(lhs)
}
