// src/noyau/fraction.rs
//
// Fraction exacte n/d sur grands entiers.
//
// Invariants (vrais à la sortie de toute opération publique) :
// - gcd(|n|, |d|) = 1
// - d > 0 (le signe est porté par le numérateur)
//
// Valeur immuable : chaque opération rend une nouvelle Fraction canonique.

use std::cmp::Ordering;
use std::ops::Neg;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use super::argument::{IntegerLike, Operand};
use super::erreurs::{FractionError, Result};
use super::litteraux::{is_decimal_literal, parse_integer};
use super::pgcd::gcd;

/// Rationnel exact. L'égalité dérivée est structurelle, ce qui équivaut
/// à l'égalité mathématique grâce à la forme canonique.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Default for Fraction {
    /// 0/1
    fn default() -> Self {
        Self::from_integer(BigInt::zero())
    }
}

impl Fraction {
    /// Construit a/b ; chaque argument doit être convertible en entier exact.
    ///
    /// ```
    /// use fraction_qpur::Fraction;
    ///
    /// let f = Fraction::new(6, "-8").unwrap();
    /// assert_eq!(f.to_string(), "-3/4");
    /// assert!(Fraction::new(3.5, 7.5).is_err());
    /// ```
    pub fn new(a: impl Into<IntegerLike>, b: impl Into<IntegerLike>) -> Result<Self> {
        let (n, d) = Operand::Pair(a.into(), b.into()).resolve()?;
        Ok(Self::from_parts(n, d))
    }

    pub fn from_integer(n: BigInt) -> Self {
        Fraction {
            numerator: n,
            denominator: BigInt::one(),
        }
    }

    /// `d` doit être non nul (garanti par `Operand::resolve` et par les appelants).
    fn from_parts(n: BigInt, d: BigInt) -> Self {
        Fraction {
            numerator: n,
            denominator: d,
        }
        .simplify()
    }

    /// Lit un littéral décimal : "12", "-3.25", ".5".
    ///
    /// Le point est retiré et le dénominateur vaut 10^(chiffres après le point) ;
    /// le signe voyage avec les chiffres.
    pub fn parse_str(s: &str) -> Result<Self> {
        let invalide = || FractionError::InvalidNumberLiteral(s.to_string());

        if !is_decimal_literal(s) {
            return Err(invalide());
        }

        match s.find('.') {
            None => parse_integer(s).map(Self::from_integer).ok_or_else(invalide),
            Some(point) => {
                let decimales = u32::try_from(s.len() - point - 1).map_err(|_| invalide())?;
                let chiffres = s.replacen('.', "", 1);
                let n = parse_integer(&chiffres).ok_or_else(invalide)?;
                Ok(Self::from_parts(n, BigInt::from(10).pow(decimales)))
            }
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative() != self.denominator.is_negative() && !self.is_zero()
    }

    /// Forme canonique : divise par le PGCD et place le signe au numérateur.
    /// Idempotent ; appliqué par tous les constructeurs.
    pub fn simplify(mut self) -> Self {
        let commun = gcd(&self.numerator, &self.denominator);
        if !commun.is_zero() && !commun.is_one() {
            self.numerator /= &commun;
            self.denominator /= &commun;
        }
        if self.denominator.is_negative() {
            self.numerator = -self.numerator;
            self.denominator = -self.denominator;
        }
        self
    }

    /* ------------------------ Arithmétique ------------------------ */

    /// (a·q + p·b) / (b·q)
    pub fn plus(&self, rhs: impl Into<Operand>) -> Result<Self> {
        let (p, q) = rhs.into().resolve()?;
        Ok(Self::from_parts(
            &self.numerator * &q + p * &self.denominator,
            &self.denominator * q,
        ))
    }

    /// (a·q − p·b) / (b·q)
    pub fn minus(&self, rhs: impl Into<Operand>) -> Result<Self> {
        let (p, q) = rhs.into().resolve()?;
        Ok(Self::from_parts(
            &self.numerator * &q - p * &self.denominator,
            &self.denominator * q,
        ))
    }

    /// (a·p) / (b·q)
    pub fn times(&self, rhs: impl Into<Operand>) -> Result<Self> {
        let (p, q) = rhs.into().resolve()?;
        Ok(Self::from_parts(&self.numerator * p, &self.denominator * q))
    }

    /// (a·q) / (b·p) ; échoue si l'argument vaut zéro.
    pub fn div(&self, rhs: impl Into<Operand>) -> Result<Self> {
        let (p, q) = rhs.into().resolve()?;
        if p.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self::from_parts(&self.numerator * q, &self.denominator * p))
    }

    /// Égalité après coercion de l'argument en Fraction canonique.
    pub fn equals(&self, rhs: impl Into<Operand>) -> Result<bool> {
        let autre = Fraction::try_from(rhs.into())?;
        Ok(*self == autre)
    }
}

/* ------------------------ Conversions ------------------------ */

impl TryFrom<Operand> for Fraction {
    type Error = FractionError;

    fn try_from(op: Operand) -> Result<Self> {
        let (n, d) = op.resolve()?;
        Ok(Self::from_parts(n, d))
    }
}

impl From<BigInt> for Fraction {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInt::from(n))
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        -self.clone()
    }
}

/* ------------------------ Ordre ------------------------ */

impl Ord for Fraction {
    // dénominateurs > 0 : le produit croisé conserve l'ordre
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
