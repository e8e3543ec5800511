use derive_more::Display;
use phf::phf_map;

use crate::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Operator {
    #[display("+")]
    Plus,
    #[display("-")]
    Minus,
    #[display("*")]
    Star,
    #[display("/")]
    Slash,
}

/// Binding strength of a binary operator. Multiplicative binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Additive,
    Multiplicative,
}

static OPERATORS: phf::Map<char, Operator> = phf_map! {
    '+' => Operator::Plus,
    '-' => Operator::Minus,
    '*' => Operator::Star,
    '/' => Operator::Slash,
};

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        OPERATORS.get(&c).copied()
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Self::Plus | Self::Minus => Precedence::Additive,
            Self::Star | Self::Slash => Precedence::Multiplicative,
        }
    }

    pub fn apply(self, lhs: Number, rhs: Number) -> Number {
        match self {
            Self::Plus => lhs + rhs,
            Self::Minus => lhs - rhs,
            Self::Star => lhs * rhs,
            Self::Slash => lhs / rhs,
        }
    }
}
