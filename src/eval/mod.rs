mod context;
mod error;
mod infix;
mod paren_infix;
mod postfix;
mod prefix;

pub use context::Context;
pub use error::InvalidExpression;
pub use infix::evaluate_infix;
pub use paren_infix::evaluate_paren_infix;
pub use postfix::evaluate_postfix;
pub use prefix::evaluate_prefix;
