//! `Expr := Number | Operator Expr Expr`

use log::debug;

use crate::number::Number;
use crate::token::{LexItem, Token};

use super::context::Context;
use super::error::InvalidExpression;

/// Evaluates a prefix expression such as `+ 1 * 2 3`.
pub fn evaluate_prefix<T>(tokens: T) -> Result<Number, InvalidExpression>
where
    T: IntoIterator<Item = LexItem>,
{
    let mut ctx = Context::new(tokens);
    if ctx.is_at_end() {
        return Err(InvalidExpression::Empty);
    }
    let result = parse_expr(&mut ctx).and_then(|value| ctx.finish(value));
    debug!("prefix: {:?}", result);
    result
}

fn parse_expr<I>(ctx: &mut Context<I>) -> Result<Number, InvalidExpression>
where
    I: Iterator<Item = LexItem>,
{
    let li = ctx.next_item()?;
    match li.token {
        Token::Number(n) => Ok(n),
        Token::Operator(op) => ctx.nested(li.span, |ctx| {
            let lhs = parse_expr(ctx)?;
            let rhs = parse_expr(ctx)?;
            Ok(op.apply(lhs, rhs))
        }),
        _ => Err(InvalidExpression::UnexpectedToken(li.token, li.span)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::tokenize;
    use crate::eval::context::MAX_DEPTH;
    use crate::operator::Operator;
    use crate::span::Span;
    use rstest::rstest;

    fn eval(input: &str) -> Result<Number, InvalidExpression> {
        evaluate_prefix(tokenize(input))
    }

    #[rstest]
    #[case("+ 1 * 2 3", Number::Integer(7))]
    #[case("42", Number::Integer(42))]
    #[case("- 10 4", Number::Integer(6))]
    #[case("/ 9 2", Number::Floating(4.5))]
    #[case("* + 1 2 - 5 3", Number::Integer(6))]
    #[case("+ 1.5 2", Number::Floating(3.5))]
    fn valid(#[case] input: &str, #[case] expected: Number) {
        assert_eq!(eval(input), Ok(expected));
    }

    #[test]
    fn operand_order_is_left_then_right() {
        assert_eq!(eval("- 1 10"), Ok(Number::Integer(-9)));
        assert_eq!(eval("/ 1 4"), Ok(Number::Floating(0.25)));
    }

    #[test]
    fn empty_input() {
        assert_eq!(eval(""), Err(InvalidExpression::Empty));
        assert_eq!(eval("  ?? "), Err(InvalidExpression::Empty));
    }

    #[test]
    fn missing_operand() {
        assert_eq!(eval("+ 1"), Err(InvalidExpression::UnexpectedEnd));
        assert_eq!(eval("*"), Err(InvalidExpression::UnexpectedEnd));
    }

    #[test]
    fn leftover_token() {
        assert_eq!(
            eval("+ 1 2 3"),
            Err(InvalidExpression::Unfinished(
                Token::Number(Number::Integer(3)),
                Span::one(6)
            ))
        );
    }

    #[test]
    fn parenthesis_is_not_prefix_syntax() {
        assert_eq!(
            eval("(+ 1 2)"),
            Err(InvalidExpression::UnexpectedToken(Token::LeftParen, Span::one(0)))
        );
    }

    #[test]
    fn postfix_input_is_rejected() {
        assert!(matches!(
            eval("1 2 +"),
            Err(InvalidExpression::Unfinished(_, _))
        ));
        assert!(matches!(
            eval("1 +"),
            Err(InvalidExpression::Unfinished(
                Token::Operator(Operator::Plus),
                _
            ))
        ));
    }

    #[test]
    fn nesting_up_to_the_limit_is_accepted() {
        let n = MAX_DEPTH;
        let input = format!("{}1{}", "+ ".repeat(n), " 1".repeat(n));
        assert_eq!(eval(&input), Ok(Number::Integer(n as i64 + 1)));
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let n = 20_000;
        let input = format!("{}1{}", "+ ".repeat(n), " 1".repeat(n));
        assert_eq!(
            eval(&input),
            Err(InvalidExpression::TooDeep(Span::one(2 * MAX_DEPTH)))
        );
    }
}
