//! `Expr := Number | '(' Expr Operator Expr ')'`

use log::debug;

use crate::number::Number;
use crate::token::{LexItem, Token};

use super::context::Context;
use super::error::InvalidExpression;

/// Evaluates a fully parenthesized infix expression such as
/// `(1 + (2 * 3))`. Every binary operation needs its own parentheses.
pub fn evaluate_paren_infix<T>(tokens: T) -> Result<Number, InvalidExpression>
where
    T: IntoIterator<Item = LexItem>,
{
    let mut ctx = Context::new(tokens);
    if ctx.is_at_end() {
        return Err(InvalidExpression::Empty);
    }
    let result = parse_expr(&mut ctx).and_then(|value| ctx.finish(value));
    debug!("paren infix: {:?}", result);
    result
}

fn parse_expr<I>(ctx: &mut Context<I>) -> Result<Number, InvalidExpression>
where
    I: Iterator<Item = LexItem>,
{
    let li = ctx.next_item()?;
    match li.token {
        Token::Number(n) => Ok(n),
        Token::LeftParen => ctx.nested(li.span, parse_group),
        _ => Err(InvalidExpression::UnexpectedToken(li.token, li.span)),
    }
}

// '(' already consumed
fn parse_group<I>(ctx: &mut Context<I>) -> Result<Number, InvalidExpression>
where
    I: Iterator<Item = LexItem>,
{
    let lhs = parse_expr(ctx)?;
    let op = ctx.consume_operator()?;
    let rhs = parse_expr(ctx)?;
    ctx.consume_token(Token::RightParen)?;
    Ok(op.apply(lhs, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::context::MAX_DEPTH;
    use crate::lex::tokenize;
    use crate::span::Span;
    use rstest::rstest;

    fn eval(input: &str) -> Result<Number, InvalidExpression> {
        evaluate_paren_infix(tokenize(input))
    }

    #[rstest]
    #[case("(1 + (2 * 3))", Number::Integer(7))]
    #[case("((1 + 2) * 3)", Number::Integer(9))]
    #[case("8", Number::Integer(8))]
    #[case("(1 - 10)", Number::Integer(-9))]
    #[case("(3 / 4)", Number::Floating(0.75))]
    #[case("((1.5 + 1.5) * (2 - 4))", Number::Floating(-6.0))]
    fn valid(#[case] input: &str, #[case] expected: Number) {
        assert_eq!(eval(input), Ok(expected));
    }

    #[test]
    fn leftover_closing_paren() {
        assert_eq!(
            eval("(1 + 2))"),
            Err(InvalidExpression::Unfinished(Token::RightParen, Span::one(7)))
        );
    }

    #[test]
    fn missing_closing_paren() {
        assert_eq!(eval("(1 + 2"), Err(InvalidExpression::UnexpectedEnd));
    }

    #[test]
    fn bare_infix_needs_parentheses() {
        assert!(matches!(
            eval("1 + 2"),
            Err(InvalidExpression::Unfinished(_, _))
        ));
        assert!(matches!(
            eval("(1 + 2 * 3)"),
            Err(InvalidExpression::UnexpectedToken(_, _))
        ));
    }

    #[test]
    fn operator_slot_must_hold_operator() {
        assert_eq!(
            eval("(1 2 3)"),
            Err(InvalidExpression::UnexpectedToken(
                Token::Number(Number::Integer(2)),
                Span::one(3)
            ))
        );
        assert_eq!(
            eval("(1 ( 3)"),
            Err(InvalidExpression::UnexpectedToken(Token::LeftParen, Span::one(3)))
        );
    }

    #[test]
    fn empty_and_empty_group() {
        assert_eq!(eval(""), Err(InvalidExpression::Empty));
        assert_eq!(
            eval("()"),
            Err(InvalidExpression::UnexpectedToken(Token::RightParen, Span::one(1)))
        );
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let n = 100_000;
        let input = format!("{}1{}", "(1 + ".repeat(n), ")".repeat(n));
        assert_eq!(
            eval(&input),
            Err(InvalidExpression::TooDeep(Span::one(5 * MAX_DEPTH)))
        );

        let n = MAX_DEPTH;
        let input = format!("{}1{}", "(1 + ".repeat(n), ")".repeat(n));
        assert_eq!(eval(&input), Ok(Number::Integer(n as i64 + 1)));
    }
}
