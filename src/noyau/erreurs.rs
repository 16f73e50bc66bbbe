// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau.
// - Une seule énumération pour tout le noyau (fraction, jetons, évaluation).
// - Chaque variante porte assez de contexte pour corriger l'entrée.
// - Aucune erreur n'est réessayée ni avalée : l'appelant décide.

use std::fmt;

use thiserror::Error;

use super::jetons::Operator;

/// Résultat du noyau.
pub type Result<T> = std::result::Result<T, FractionError>;

/// Parenthèse restée sans partenaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parenthesis {
    Left,
    Right,
}

impl fmt::Display for Parenthesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parenthesis::Left => write!(f, "("),
            Parenthesis::Right => write!(f, ")"),
        }
    }
}

/// Côté(s) où l'opérande manque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Both,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "gauche"),
            Side::Right => write!(f, "droite"),
            Side::Both => write!(f, "gauche ni à droite"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// Argument non convertible en entier exact (position 1 et/ou 2).
    #[error("argument(s) invalide(s) {} : attendu un entier, un BigInt, une chaîne entière ou une Fraction entière", arguments_invalides(.first, .second))]
    InvalidArgument {
        first: Option<String>,
        second: Option<String>,
    },

    /// Chaîne hors de la grammaire décimale.
    #[error("nombre invalide : \"{0}\" ne peut pas être converti en Fraction")]
    InvalidNumberLiteral(String),

    #[error("division par zéro")]
    DivisionByZero,

    /// Préfixe non reconnu par le tokenizer (on rapporte le reste non consommé).
    #[error("jeton invalide : {0}")]
    InvalidToken(String),

    #[error("parenthèse \"{0}\" sans correspondance")]
    UnmatchedParenthesis(Parenthesis),

    #[error("opérateur {operator} à l'index {index} sans opérande à {side}")]
    MissingOperand {
        operator: Operator,
        index: usize,
        side: Side,
    },

    /// Deux valeurs côte à côte sans opérateur (ex: "1.2.3", "2(3)").
    #[error("opérateur manquant avant la valeur à l'index {index}")]
    MissingOperator { index: usize },

    #[error("l'expression doit contenir au moins un terme")]
    EmptyExpression,
}

fn arguments_invalides(first: &Option<String>, second: &Option<String>) -> String {
    match (first, second) {
        (Some(a), Some(b)) => format!("\"{a}\", \"{b}\""),
        (Some(a), None) => format!("\"{a}\""),
        (None, Some(b)) => format!("(2e) \"{b}\""),
        (None, None) => String::new(),
    }
}
