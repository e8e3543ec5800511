//! Evaluation of arithmetic expressions written in prefix, postfix, fully
//! parenthesized infix, or precedence-aware infix notation.
//!
//! ```
//! use notation_calc::{evaluate_infix, tokenize, Number};
//!
//! assert_eq!(evaluate_infix(tokenize("(1 + 2) * 3")), Ok(Number::Integer(9)));
//! ```

pub mod config;
pub mod eval;
pub mod lex;
pub mod menu;
pub mod notation;
pub mod number;
pub mod operator;
pub mod span;
pub mod stack;
pub mod token;

pub use eval::{
    evaluate_infix, evaluate_paren_infix, evaluate_postfix, evaluate_prefix, InvalidExpression,
};
pub use lex::{tokenize, Tokens};
pub use notation::Notation;
pub use number::Number;
pub use operator::{Operator, Precedence};
pub use span::Span;
pub use token::{LexItem, Token};
