use std::str::FromStr;

use derive_more::Display;
use thiserror::Error;

use crate::eval::{
    evaluate_infix, evaluate_paren_infix, evaluate_postfix, evaluate_prefix, InvalidExpression,
};
use crate::lex::tokenize;
use crate::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Notation {
    #[display("prefix")]
    Prefix,
    #[display("postfix")]
    Postfix,
    #[display("parenthetical infix")]
    ParenInfix,
    #[display("infix")]
    Infix,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown notation `{0}`, expected prefix, postfix, paren-infix, infix or 1-4")]
pub struct UnknownNotation(pub String);

impl Notation {
    /// Menu order; position + 1 is the menu number.
    pub const ALL: [Notation; 4] = [
        Notation::Prefix,
        Notation::Postfix,
        Notation::ParenInfix,
        Notation::Infix,
    ];

    pub fn example(self) -> &'static str {
        match self {
            Self::Prefix => "+ 1 * 2 3",
            Self::Postfix => "1 2 3 * +",
            Self::ParenInfix => "(1 + (2 * 3))",
            Self::Infix => "1 + 2 * 3",
        }
    }

    pub fn from_menu_number(n: i64) -> Option<Self> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn evaluate(self, input: &str) -> Result<Number, InvalidExpression> {
        let tokens = tokenize(input);
        match self {
            Self::Prefix => evaluate_prefix(tokens),
            Self::Postfix => evaluate_postfix(tokens),
            Self::ParenInfix => evaluate_paren_infix(tokens),
            Self::Infix => evaluate_infix(tokens),
        }
    }
}

impl FromStr for Notation {
    type Err = UnknownNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "1" | "prefix" => Ok(Self::Prefix),
            "2" | "postfix" => Ok(Self::Postfix),
            "3" | "paren-infix" | "paren_infix" | "parenthetical" | "parenthetical infix" => {
                Ok(Self::ParenInfix)
            }
            "4" | "infix" => Ok(Self::Infix),
            _ => Err(UnknownNotation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn every_example_evaluates_to_seven() {
        for notation in Notation::ALL {
            assert_eq!(
                notation.evaluate(notation.example()),
                Ok(Number::Integer(7)),
                "{notation}"
            );
        }
    }

    #[rstest]
    #[case("prefix", Notation::Prefix)]
    #[case("Postfix", Notation::Postfix)]
    #[case("paren-infix", Notation::ParenInfix)]
    #[case(" infix ", Notation::Infix)]
    #[case("3", Notation::ParenInfix)]
    fn parses_names_and_numbers(#[case] text: &str, #[case] expected: Notation) {
        assert_eq!(text.parse::<Notation>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_name() {
        assert_eq!(
            "reverse".parse::<Notation>(),
            Err(UnknownNotation("reverse".to_string()))
        );
    }

    #[rstest]
    #[case(1, Some(Notation::Prefix))]
    #[case(4, Some(Notation::Infix))]
    #[case(0, None)]
    #[case(5, None)]
    #[case(-1, None)]
    fn menu_numbers(#[case] n: i64, #[case] expected: Option<Notation>) {
        assert_eq!(Notation::from_menu_number(n), expected);
    }

    #[test]
    fn display_names() {
        assert_eq!(Notation::ParenInfix.to_string(), "parenthetical infix");
        assert_eq!(Notation::Prefix.to_string(), "prefix");
    }
}
