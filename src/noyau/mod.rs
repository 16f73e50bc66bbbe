//! Noyau exact Q-pur (fractions)
//!
//! Organisation interne :
//! - erreurs.rs   : FractionError + Result
//! - litteraux.rs : reconnaissance des littéraux entiers / décimaux
//! - pgcd.rs      : pgcd binaire (Stein) sur BigInt
//! - argument.rs  : entrées acceptées par new/plus/minus/times/div/equals
//! - fraction.rs  : Fraction (forme canonique, arithmétique, ordre)
//! - lecture.rs   : lecture décimale arrondie (division longue)
//! - format.rs    : affichage EXACT "n/d" + jetons
//! - jetons.rs    : tokenisation
//! - eval.rs      : évaluation (parenthèses internes puis * / puis + -)

pub mod argument;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod fraction;
pub mod jetons;
pub mod lecture;
pub mod litteraux;
pub mod pgcd;

#[cfg(test)]
mod tests_scientifiques;


// API publique
pub use argument::{IntegerLike, Operand};
pub use erreurs::{FractionError, Parenthesis, Result, Side};
pub use eval::{
    eval_expression, evaluate, evaluate_tokens, find_innermost_parens, reduce_no_parens,
    DemarcheNoyau, Resultat,
};
pub use fraction::Fraction;
pub use jetons::{format_tokens, match_token_at_start, remove_whitespace, tokenize, Operator, Token};
pub use litteraux::{is_decimal_literal, is_integer_literal};
pub use pgcd::gcd;
