// src/noyau/jetons.rs
//
// Tokenisation : chaîne -> suite de jetons (opérateur | Fraction).
//
// 1. tous les blancs sont supprimés d'abord ("3 0" devient "30")
// 2. à chaque pas on essaie, dans l'ordre : la table des opérateurs, puis un littéral décimal
// 3. le premier qui reconnaît le début du reste le consomme
//
// Pas de moins unaire : "-3" donne [Sub, 3].

use tracing::trace;

use super::erreurs::{FractionError, Result};
use super::fraction::Fraction;
use super::litteraux::decimal_prefix;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    LeftParen,
    RightParen,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::LeftParen => '(',
            Operator::RightParen => ')',
        }
    }

    /// Niveau fort : * /
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }

    /// Niveau faible : + -
    pub fn is_additive(self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }
}

/// Table figée, consultée dans cet ordre avant les nombres.
pub const OPERATEURS: [(char, Operator); 6] = [
    ('+', Operator::Add),
    ('-', Operator::Sub),
    ('*', Operator::Mul),
    ('/', Operator::Div),
    ('(', Operator::LeftParen),
    (')', Operator::RightParen),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Number(Fraction),
    Operator(Operator),
}

impl Token {
    pub fn as_number(&self) -> Option<&Fraction> {
        match self {
            Token::Number(r) => Some(r),
            Token::Operator(_) => None,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Token::Operator(op) => Some(*op),
            Token::Number(_) => None,
        }
    }
}

/// Supprime tout caractère blanc (Unicode, plus U+FEFF), sans préserver les frontières.
pub fn remove_whitespace(s: &str) -> String {
    s.chars()
        .filter(|&c| !c.is_whitespace() && c != '\u{FEFF}')
        .collect()
}

/// Reconnaît un jeton au début de `s` : (jeton, octets consommés), ou None.
pub fn match_token_at_start(s: &str) -> Result<Option<(Token, usize)>> {
    if let Some(c) = s.chars().next() {
        if let Some(&(_, op)) = OPERATEURS.iter().find(|(symbole, _)| *symbole == c) {
            return Ok(Some((Token::Operator(op), c.len_utf8())));
        }
    }

    match decimal_prefix(s) {
        Some(litteral) => {
            let valeur = Fraction::parse_str(litteral).map_err(|_| {
                FractionError::InvalidToken(format!(
                    "nombre \"{litteral}\" non convertible en Fraction"
                ))
            })?;
            Ok(Some((Token::Number(valeur), litteral.len())))
        }
        None => Ok(None),
    }
}

/// Tokenize une expression. Une chaîne vide (ou blanche) donne une suite vide.
pub fn tokenize(s: &str) -> Result<Vec<Token>> {
    let compact = remove_whitespace(s);
    let mut reste = compact.as_str();
    let mut out = Vec::new();

    while !reste.is_empty() {
        let Some((jeton, consomme)) = match_token_at_start(reste)? else {
            return Err(FractionError::InvalidToken(format!("à \"{reste}\"")));
        };
        trace!(jeton = %jeton, "jeton reconnu");
        out.push(jeton);
        reste = &reste[consomme..];
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
