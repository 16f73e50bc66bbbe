// src/noyau/litteraux.rs
//
// Grammaires des littéraux numériques (ASCII seulement).
// - entier  : [+-]? chiffres+
// - décimal : entier | [+-]? chiffres* '.' chiffres+
//
// Asymétrie voulue : ".5" est valide, "5." ne l'est pas
// (un point doit être suivi d'au moins un chiffre).

use std::sync::OnceLock;

use num_bigint::BigInt;
use regex::Regex;

static ENTIER_RE: OnceLock<Regex> = OnceLock::new();
static DECIMAL_RE: OnceLock<Regex> = OnceLock::new();
static DECIMAL_DEBUT_RE: OnceLock<Regex> = OnceLock::new();

fn entier_re() -> &'static Regex {
    ENTIER_RE.get_or_init(|| Regex::new(r"^[-+]?[0-9]+$").expect("motif entier"))
}

fn decimal_re() -> &'static Regex {
    DECIMAL_RE
        .get_or_init(|| Regex::new(r"^[-+]?(?:[0-9]+|[0-9]*\.[0-9]+)$").expect("motif décimal"))
}

// L'alternative avec point passe en premier : "3.5" doit l'emporter sur "3".
fn decimal_debut_re() -> &'static Regex {
    DECIMAL_DEBUT_RE.get_or_init(|| {
        Regex::new(r"^[-+]?(?:[0-9]*\.[0-9]+|[0-9]+)").expect("motif décimal (début)")
    })
}

/// Vrai ssi `s` est un entier : signe optionnel puis au moins un chiffre, rien d'autre.
pub fn is_integer_literal(s: &str) -> bool {
    entier_re().is_match(s)
}

/// Vrai ssi `s` est un entier ou un décimal dont le point est suivi d'au moins un chiffre.
pub fn is_decimal_literal(s: &str) -> bool {
    decimal_re().is_match(s)
}

/// Plus long littéral décimal ancré au début de `s` (utilisé par le tokenizer).
pub fn decimal_prefix(s: &str) -> Option<&str> {
    decimal_debut_re().find(s).map(|m| m.as_str())
}

/// Valeur d'un littéral entier ; `None` hors grammaire.
pub fn parse_integer(s: &str) -> Option<BigInt> {
    if !is_integer_literal(s) {
        return None;
    }
    let sans_plus = s.strip_prefix('+').unwrap_or(s);
    BigInt::parse_bytes(sans_plus.as_bytes(), 10)
}
