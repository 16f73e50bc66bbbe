// src/noyau/format.rs

use std::fmt;

use super::fraction::Fraction;
use super::jetons::{Operator, Token};

/* ------------------------ Affichage EXACT ------------------------ */

/// "n" si le dénominateur vaut 1, sinon "n/d".
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

/* ------------------------ Jetons ------------------------ */

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(r) => write!(f, "{r}"),
            Token::Operator(op) => write!(f, "{op}"),
        }
    }
}
