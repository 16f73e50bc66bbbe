//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> (groupe parenthésé le plus interne -> réduction -> ré-insertion)* -> réduction finale
//!
//! La réduction sans parenthèses traite d'abord * et /, puis + et -, chaque niveau
//! strictement de gauche à droite : "a / b * c" = (a/b)*c, "a - b + c" = (a-b)+c.

use tracing::{debug, trace};

use super::erreurs::{FractionError, Parenthesis, Result, Side};
use super::fraction::Fraction;
use super::jetons::{format_tokens, tokenize, Operator, Token};

/// Évalue une expression infixe en Fraction exacte.
///
/// ```
/// use fraction_qpur::evaluate;
///
/// let r = evaluate("3 * 5 + 10 / 2").unwrap();
/// assert_eq!(r.to_string(), "20");
/// ```
pub fn evaluate(expr: &str) -> Result<Fraction> {
    let resultat = evaluate_tokens(tokenize(expr)?)?;
    debug!(expr, resultat = %resultat, "expression évaluée");
    Ok(resultat)
}

/// Évalue une suite de jetons déjà produite par `tokenize` (consommée sur place).
pub fn evaluate_tokens(mut jetons: Vec<Token>) -> Result<Fraction> {
    if jetons.is_empty() {
        return Err(FractionError::EmptyExpression);
    }

    while let Some((ouvrante, fermante)) = find_innermost_parens(&jetons)? {
        let groupe: Vec<Token> = jetons.drain(ouvrante + 1..fermante).collect();
        let valeur = reduce_no_parens(groupe)?;
        debug!(index = ouvrante, valeur = %valeur, "groupe parenthésé réduit");
        // il reste "(" ")" aux index ouvrante, ouvrante + 1
        jetons.splice(ouvrante..ouvrante + 2, [Token::Number(valeur)]);
    }

    reduce_no_parens(jetons)
}

/// Première paire de parenthèses la plus interne : la première ")" et la dernière "(" vue avant elle.
pub fn find_innermost_parens(jetons: &[Token]) -> Result<Option<(usize, usize)>> {
    let mut ouvrante = None;

    for (i, jeton) in jetons.iter().enumerate() {
        match jeton.as_operator() {
            Some(Operator::LeftParen) => ouvrante = Some(i),
            Some(Operator::RightParen) => {
                return match ouvrante {
                    Some(o) => Ok(Some((o, i))),
                    None => Err(FractionError::UnmatchedParenthesis(Parenthesis::Right)),
                };
            }
            _ => {}
        }
    }

    match ouvrante {
        Some(_) => Err(FractionError::UnmatchedParenthesis(Parenthesis::Left)),
        None => Ok(None),
    }
}

/// Réduit une suite sans parenthèses en une seule Fraction (priorités * / puis + -).
pub fn reduce_no_parens(mut jetons: Vec<Token>) -> Result<Fraction> {
    if jetons.is_empty() {
        return Err(FractionError::EmptyExpression);
    }

    reduire_niveau(&mut jetons, Operator::is_multiplicative)?;
    reduire_niveau(&mut jetons, Operator::is_additive)?;

    let mut reste = jetons.into_iter();
    match (reste.next(), reste.next()) {
        (Some(Token::Number(valeur)), None) => Ok(valeur),
        (Some(Token::Number(_)), Some(_)) => Err(FractionError::MissingOperator { index: 1 }),
        (Some(autre), _) => Err(FractionError::InvalidToken(format!(
            "jeton final {autre} : pas une fraction"
        ))),
        (None, _) => Err(FractionError::EmptyExpression),
    }
}

/// Remplace [gauche, op, droite] par sa valeur, op le plus à gauche du niveau d'abord,
/// jusqu'à épuisement des opérateurs de ce niveau.
fn reduire_niveau(jetons: &mut Vec<Token>, niveau: fn(Operator) -> bool) -> Result<()> {
    loop {
        let Some((index, op)) = jetons
            .iter()
            .enumerate()
            .find_map(|(i, j)| j.as_operator().filter(|&o| niveau(o)).map(|o| (i, o)))
        else {
            return Ok(());
        };

        let gauche = index
            .checked_sub(1)
            .and_then(|i| jetons.get(i))
            .and_then(Token::as_number);
        let droite = jetons.get(index + 1).and_then(Token::as_number);

        let valeur = match (gauche, droite) {
            (Some(a), Some(b)) => appliquer(op, a, b)?,
            (a, b) => {
                let side = match (a.is_some(), b.is_some()) {
                    (false, true) => Side::Left,
                    (true, false) => Side::Right,
                    _ => Side::Both,
                };
                return Err(FractionError::MissingOperand {
                    operator: op,
                    index,
                    side,
                });
            }
        };

        trace!(index, operateur = %op, valeur = %valeur, "réduction");
        jetons.splice(index - 1..=index + 1, [Token::Number(valeur)]);
    }
}

fn appliquer(op: Operator, a: &Fraction, b: &Fraction) -> Result<Fraction> {
    match op {
        Operator::Add => a.plus(b),
        Operator::Sub => a.minus(b),
        Operator::Mul => a.times(b),
        Operator::Div => a.div(b),
        Operator::LeftParen | Operator::RightParen => Err(FractionError::InvalidToken(format!(
            "{op} n'est pas un opérateur binaire"
        ))),
    }
}

/* ------------------------ Pipeline (front-end) ------------------------ */

/// Résultat complet : valeur exacte, textes EXACT / lecture décimale, démarche.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resultat {
    pub valeur: Fraction,
    pub exact: String,
    pub lecture: String,
    pub demarche: DemarcheNoyau,
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub note: String,
}

/// API publique : évalue une expression et retourne EXACT (n/d) + lecture à `digits` décimales.
pub fn eval_expression(expr_str: &str, digits: usize) -> Result<Resultat> {
    let jetons = tokenize(expr_str)?;
    let jetons_txt = format_tokens(&jetons);
    let valeur = evaluate_tokens(jetons)?;
    debug!(expr = expr_str, exact = %valeur, "pipeline");

    Ok(Resultat {
        exact: valeur.to_string(),
        lecture: valeur.to_decimal(digits),
        valeur,
        demarche: DemarcheNoyau {
            jetons: jetons_txt,
            note: "Pipeline: jetons → parenthèses internes → * / → + - → EXACT → lecture.".into(),
        },
    })
}
