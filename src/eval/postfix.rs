use log::{debug, trace};

use crate::number::Number;
use crate::stack::Stack;
use crate::token::{LexItem, Token};

use super::context::Context;
use super::error::InvalidExpression;

/// Evaluates a postfix expression such as `1 2 3 * +` with a single
/// operand stack.
pub fn evaluate_postfix<T>(tokens: T) -> Result<Number, InvalidExpression>
where
    T: IntoIterator<Item = LexItem>,
{
    let mut ctx = Context::new(tokens);
    let mut operands = Stack::new();

    while let Some(li) = ctx.advance() {
        match li.token {
            Token::Number(n) => operands.push(n),
            Token::Operator(op) => {
                // top of the stack is the right operand
                let Some((lhs, rhs)) = operands.pop_pair() else {
                    debug!("postfix: `{}` at {} lacks operands", op, li.span);
                    return Err(InvalidExpression::InsufficientOperands(op, li.span));
                };
                operands.push(op.apply(lhs, rhs));
            }
            _ => return Err(InvalidExpression::UnexpectedToken(li.token, li.span)),
        }
        trace!("postfix: {} -> {:?}", li.token, operands);
    }

    let result = operands.into_single().map_err(|n| match n {
        0 => InvalidExpression::Empty,
        n => InvalidExpression::WrongOperandCount(n),
    });
    debug!("postfix: {:?} after {} tokens", result, ctx.consumed());
    result
}
