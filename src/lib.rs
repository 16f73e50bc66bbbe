//! fraction_qpur : fractions exactes à grands entiers + évaluateur d'expressions infixes.
//!
//! ```
//! use fraction_qpur::{evaluate, Fraction};
//!
//! let x = evaluate("3 + (5 - 54 * 203) / (1)").unwrap();
//! assert_eq!(x, Fraction::new(-10954, 1).unwrap());
//!
//! let y = Fraction::parse_str("2.5").unwrap().plus((1, 3)).unwrap();
//! assert_eq!(y.to_string(), "17/6");
//! assert_eq!(y.to_decimal(3), "2.833");
//! ```

pub mod noyau;

pub use noyau::{
    eval_expression, evaluate, gcd, is_decimal_literal, is_integer_literal, tokenize, Fraction,
    FractionError, IntegerLike, Operand, Operator, Result, Resultat, Token,
};
