use std::ops::{Add, Div, Mul, Neg, Sub};

/// A numeric value flowing through the evaluators.
///
/// Literals without a `.` are `Integer`, everything else is `Floating`.
/// Integer arithmetic that would overflow falls back to `f64`.
#[derive(derive_more::Debug, derive_more::Display, Clone, Copy)]
pub enum Number {
    #[display("{}", _0)]
    #[debug("Integer({})", _0)]
    Integer(i64),

    #[display("{:?}", _0)]
    #[debug("Floating({:?})", _0)]
    Floating(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Integer(v) => v as f64,
            Self::Floating(v) => v,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Floating(v)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for Number {
            type Output = Self;
            fn $method(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Self::Integer(l), Self::Integer(r)) => match l.$checked(r) {
                        Some(v) => Self::Integer(v),
                        None => Self::Floating((l as f64).$method(r as f64)),
                    },
                    (l, r) => Self::Floating(l.to_f64().$method(r.to_f64())),
                }
            }
        }
    };
}

impl_binary_op!(Add, add, checked_add);
impl_binary_op!(Sub, sub, checked_sub);
impl_binary_op!(Mul, mul, checked_mul);

impl Div for Number {
    type Output = Self;

    // true division, never integer division
    fn div(self, rhs: Self) -> Self::Output {
        Self::Floating(self.to_f64() / rhs.to_f64())
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Integer(v) => match v.checked_neg() {
                Some(n) => Self::Integer(n),
                None => Self::Floating(-(v as f64)),
            },
            Self::Floating(v) => Self::Floating(-v),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        use Number::*;
        const NUMBER_DELTA: f64 = 1e-10;

        match (*self, *other) {
            (Integer(l), Integer(r)) => l == r,
            (l, r) => {
                let (l, r) = (l.to_f64(), r.to_f64());
                l == r || (l - r).abs() < NUMBER_DELTA
            }
        }
    }
}
