//! Tests scientifiques (campagne) : invariants + oracle + limites contrôlées.
//!
//! But : vérifier le noyau contre une arithmétique rationnelle indépendante
//! (num_rational::BigRational) sans faire chauffer la machine.
//! - budget temps global
//! - grilles bornées de fractions
//! - digits limités pour la lecture décimale

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::{eval_expression, evaluate, gcd, Fraction, FractionError};

fn oracle(f: &Fraction) -> BigRational {
    BigRational::new(f.numerator().clone(), f.denominator().clone())
}

fn assert_meme_valeur(f: &Fraction, r: &BigRational, ctx: &str) {
    assert_eq!(f.numerator(), r.numer(), "numérateur, {ctx}");
    assert_eq!(f.denominator(), r.denom(), "dénominateur, {ctx}");
}

fn eval_ok(expr: &str) -> Fraction {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_exact_eq(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr).to_string(), attendu, "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/// Petite grille de fractions, signes mélangés, dénominateurs non nuls.
fn grille() -> Vec<Fraction> {
    let mut out = Vec::new();
    for n in [-12i64, -7, -3, -1, 0, 1, 2, 5, 9, 144] {
        for d in [-8i64, -3, 1, 2, 6, 35] {
            out.push(Fraction::new(n, d).unwrap());
        }
    }
    out
}

/* ------------------------ Forme canonique ------------------------ */

#[test]
fn sci_forme_canonique_vs_oracle() {
    for n in -30i64..=30 {
        for d in (-30i64..=30).filter(|&d| d != 0) {
            let f = Fraction::new(n, d).unwrap();
            let r = BigRational::new(BigInt::from(n), BigInt::from(d));
            assert_meme_valeur(&f, &r, &format!("{n}/{d}"));

            // dénominateur > 0, pgcd(n, d) = 1 (sauf zéro, toujours 0/1)
            assert!(f.denominator() > &BigInt::zero());
            if f.is_zero() {
                assert!(f.denominator().is_one());
            } else {
                assert!(gcd(f.numerator(), f.denominator()).is_one());
            }
        }
    }
}

#[test]
fn sci_simplify_idempotent() {
    for f in grille() {
        assert_eq!(f.clone().simplify(), f);
        assert_eq!(f.clone().simplify().simplify(), f);
    }
}

#[test]
fn sci_denominateur_nul() {
    for n in [-3i64, 0, 7] {
        assert_eq!(Fraction::new(n, 0), Err(FractionError::DivisionByZero));
    }
    assert_eq!(evaluate("1/0"), Err(FractionError::DivisionByZero));
    assert_eq!(evaluate("0/0"), Err(FractionError::DivisionByZero));
    assert_eq!(evaluate("5/(3-3)"), Err(FractionError::DivisionByZero));
}

/* ------------------------ Arithmétique vs oracle ------------------------ */

#[test]
fn sci_operations_vs_oracle() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);
    let g = grille();

    for a in &g {
        for b in &g {
            budget(t0, max);
            let (ra, rb) = (oracle(a), oracle(b));
            let ctx = format!("a={a} b={b}");

            assert_meme_valeur(&a.plus(b).unwrap(), &(&ra + &rb), &ctx);
            assert_meme_valeur(&a.minus(b).unwrap(), &(&ra - &rb), &ctx);
            assert_meme_valeur(&a.times(b).unwrap(), &(&ra * &rb), &ctx);

            if b.is_zero() {
                assert_eq!(a.div(b), Err(FractionError::DivisionByZero), "{ctx}");
            } else {
                assert_meme_valeur(&a.div(b).unwrap(), &(&ra / &rb), &ctx);
            }

            assert_eq!(a.equals(b).unwrap(), ra == rb, "{ctx}");
            assert_eq!(a.cmp(b), ra.cmp(&rb), "{ctx}");
        }
    }
}

#[test]
fn sci_identites_algebriques() {
    let g = grille();
    for a in &g {
        // a - a = 0, a + 0 = a, a * 1 = a
        assert!(a.minus(a).unwrap().is_zero());
        assert_eq!(&a.plus(0).unwrap(), a);
        assert_eq!(&a.times(1).unwrap(), a);
        assert_eq!(-(-a.clone()), *a);

        for b in &g {
            // (a + b) - b = a
            assert_eq!(&a.plus(b).unwrap().minus(b).unwrap(), a);
            if !b.is_zero() {
                // (a * b) / b = a
                assert_eq!(&a.times(b).unwrap().div(b).unwrap(), a);
            }
        }

        if !a.is_zero() {
            assert_eq!(a.div(a).unwrap(), Fraction::from(1i64));
        }
    }
}

#[test]
fn sci_zero_algebrique() {
    assert_exact_eq("(1/2 + 1/3) - 5/6", "0");
    assert_exact_eq("(2/3 * 3/4) - 1/2", "0");
    assert_exact_eq("0.1 + 0.2 - 0.3", "0");
    assert_exact_eq("1/3 + 1/3 + 1/3 - 1", "0");
}

#[test]
fn sci_ordre_total() {
    let mut g = grille();
    g.sort();
    for w in g.windows(2) {
        assert_ne!(w[0].cmp(&w[1]), Ordering::Greater);
        assert!(oracle(&w[0]) <= oracle(&w[1]));
    }
}

/* ------------------------ Priorités / associativité ------------------------ */

#[test]
fn sci_priorites_gauche_a_droite() {
    // a / b * c = (a/b)*c, pas a/(b*c)
    assert_exact_eq("8 / 2 * 4", "16");
    // a - b + c = (a-b)+c
    assert_exact_eq("10 - 4 + 3", "9");
    // a - b - c = (a-b)-c
    assert_exact_eq("10 - 4 - 3", "3");
    // a / b / c = (a/b)/c
    assert_exact_eq("64 / 4 / 2", "8");
    // * avant +
    assert_exact_eq("1 + 2 * 3", "7");
    assert_exact_eq("(1 + 2) * 3", "9");
}

/* ------------------------ Lecture décimale ------------------------ */

#[test]
fn sci_lecture_a_moins_d_un_demi_ulp() {
    // |x - lecture(x, p)| <= 1/2 * 10^-p
    let dix = BigInt::from(10);
    for f in grille() {
        for p in 0..8usize {
            let texte = f.to_decimal(p);
            let relu = Fraction::parse_str(&texte)
                .unwrap_or_else(|e| panic!("{f} p={p} -> {texte:?} illisible : {e}"));

            let ecart = f.minus(&relu).unwrap();
            let ecart = if ecart.is_negative() { -ecart } else { ecart };
            let demi_ulp =
                Fraction::new(1, BigInt::from(2) * num_traits::pow(dix.clone(), p)).unwrap();
            assert!(ecart <= demi_ulp, "{f} p={p} -> {texte}");
        }
    }
}

#[test]
fn sci_lecture_via_pipeline() {
    let r = eval_expression("22/7", 6).unwrap();
    assert_eq!(r.exact, "22/7");
    assert_eq!(r.lecture, "3.142857");
    assert_eq!(r.valeur, Fraction::new(22, 7).unwrap());
    assert_eq!(r.demarche.jetons, "22 / 7");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_taille_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    let mut expr = String::new();
    for k in 0..80 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("1/2");
        budget(t0, max);
    }

    // 80*(1/2)=40
    assert_exact_eq(&expr, "40");
    budget(t0, max);
}

#[test]
fn sci_stress_bigint_safe() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    // gros numérateur contrôlé (100 chiffres) : (10^100 - 1)/7 + 1/7 = 10^100/7
    let big = "9".repeat(100);
    let x = eval_ok(&format!("{big}/7 + 1/7"));
    budget(t0, max);

    let attendu = Fraction::new(num_traits::pow(BigInt::from(10), 100), 7).unwrap();
    assert_eq!(x, attendu);

    let lecture = x.to_decimal(200);
    assert!(lecture.starts_with("14285714285714285714"));
    budget(t0, max);
}

#[test]
fn sci_stress_profondeur_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    // ((((1 + 1) + 1) + 1) ...) : 200 niveaux, réduits du plus interne vers l'extérieur
    let mut expr = "1".to_string();
    for _ in 0..200 {
        expr = format!("({expr} + 1)");
    }
    assert_exact_eq(&expr, "201");
    budget(t0, max);
}
