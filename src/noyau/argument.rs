// src/noyau/argument.rs
//
// Coercion des arguments à la frontière de l'API.
// - IntegerLike : une valeur qui DOIT se réduire à un entier exact
// - Operand     : ce qu'acceptent plus/minus/times/div/equals (une valeur, ou une paire n/d)
//
// Toute la décision "est-ce un entier ?" vit dans IntegerLike::to_bigint,
// et toute la décision "quel couple (n, d) ?" dans Operand::resolve.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, Zero};

use super::erreurs::{FractionError, Result};
use super::fraction::Fraction;
use super::litteraux::parse_integer;

/// Valeur convertible (ou non) en entier exact.
#[derive(Clone, Debug, PartialEq)]
pub enum IntegerLike {
    Integer(BigInt),
    /// Nombre machine : accepté seulement s'il est fini et entier (3.0 oui, 3.5 non).
    Number(f64),
    /// Chaîne : acceptée seulement si elle suit la grammaire entière.
    Text(String),
    /// Fraction : acceptée seulement si sa valeur est entière.
    Fraction(Fraction),
}

impl IntegerLike {
    pub fn to_bigint(&self) -> Option<BigInt> {
        match self {
            IntegerLike::Integer(n) => Some(n.clone()),
            IntegerLike::Number(x) => {
                if x.is_finite() && x.fract() == 0.0 {
                    BigInt::from_f64(*x)
                } else {
                    None
                }
            }
            IntegerLike::Text(s) => parse_integer(s),
            IntegerLike::Fraction(f) => f.is_integer().then(|| f.numerator().clone()),
        }
    }
}

impl fmt::Display for IntegerLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegerLike::Integer(n) => write!(f, "{n}"),
            IntegerLike::Number(x) => write!(f, "{x}"),
            IntegerLike::Text(s) => write!(f, "{s}"),
            IntegerLike::Fraction(r) => write!(f, "{r}"),
        }
    }
}

/// Argument d'une opération : une valeur seule, ou un couple (numérateur, dénominateur).
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Single(IntegerLike),
    Pair(IntegerLike, IntegerLike),
}

impl Operand {
    /// Réduit l'argument en couple (n, d) avec d ≠ 0.
    ///
    /// - Fraction seule : son propre couple
    /// - valeur seule   : (valeur, 1)
    /// - paire          : chaque membre doit être entier ; les deux fautes sont rapportées ensemble
    pub fn resolve(self) -> Result<(BigInt, BigInt)> {
        let (n, d) = match self {
            Operand::Single(IntegerLike::Fraction(f)) => f.into_parts(),
            Operand::Single(x) => match x.to_bigint() {
                Some(n) => (n, BigInt::one()),
                None => {
                    return Err(FractionError::InvalidArgument {
                        first: Some(x.to_string()),
                        second: None,
                    })
                }
            },
            Operand::Pair(a, b) => match (a.to_bigint(), b.to_bigint()) {
                (Some(n), Some(d)) => (n, d),
                (n, d) => {
                    return Err(FractionError::InvalidArgument {
                        first: n.is_none().then(|| a.to_string()),
                        second: d.is_none().then(|| b.to_string()),
                    })
                }
            },
        };

        if d.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok((n, d))
    }
}

/* ------------------------ Conversions ------------------------ */

macro_rules! impl_entier_machine {
    ($($t:ty),*) => {
        $(
            impl From<$t> for IntegerLike {
                fn from(n: $t) -> Self {
                    IntegerLike::Integer(BigInt::from(n))
                }
            }

            impl From<$t> for Operand {
                fn from(n: $t) -> Self {
                    Operand::Single(n.into())
                }
            }
        )*
    };
}

impl_entier_machine!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_valeur {
    ($($t:ty => |$v:ident| $conv:expr),* $(,)?) => {
        $(
            impl From<$t> for IntegerLike {
                fn from($v: $t) -> Self {
                    $conv
                }
            }

            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Single(v.into())
                }
            }
        )*
    };
}

impl_valeur!(
    BigInt => |n| IntegerLike::Integer(n),
    &BigInt => |n| IntegerLike::Integer(n.clone()),
    f64 => |x| IntegerLike::Number(x),
    &str => |s| IntegerLike::Text(s.to_string()),
    String => |s| IntegerLike::Text(s),
    Fraction => |f| IntegerLike::Fraction(f),
    &Fraction => |f| IntegerLike::Fraction(f.clone()),
);

impl From<IntegerLike> for Operand {
    fn from(v: IntegerLike) -> Self {
        Operand::Single(v)
    }
}

impl<A, B> From<(A, B)> for Operand
where
    A: Into<IntegerLike>,
    B: Into<IntegerLike>,
{
    fn from((a, b): (A, B)) -> Self {
        Operand::Pair(a.into(), b.into())
    }
}
