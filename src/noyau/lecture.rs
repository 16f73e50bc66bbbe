// src/noyau/lecture.rs
//
// Lecture décimale d'une Fraction (sans flottants).
// - division longue chiffre par chiffre sur |n| / |d|
// - un chiffre de garde au-delà de la précision, arrondi "half-up"
// - la retenue peut remonter jusque dans la partie entière (9.996 -> 10.00)

use num_bigint::BigUint;
use num_traits::{Signed, ToPrimitive, Zero};

use super::fraction::Fraction;

/* ------------------------ Division longue ------------------------ */

/// Un pas de division longue : (chiffre du quotient, nouveau reste).
fn pas(dividende: BigUint, diviseur: &BigUint) -> (u8, BigUint) {
    let q = &dividende / diviseur;
    // q < 10 puisque reste < diviseur
    (q.to_u8().unwrap_or_default(), dividende % diviseur)
}

/// Ajoute 1 au dernier chiffre et propage la retenue vers la gauche.
/// Renvoie vrai si la retenue déborde du chiffre le plus à gauche.
fn propage_retenue(chiffres: &mut [u8]) -> bool {
    for c in chiffres.iter_mut().rev() {
        if *c == 9 {
            *c = 0;
        } else {
            *c += 1;
            return false;
        }
    }
    true
}

impl Fraction {
    /// Texte décimal avec `precision` chiffres après le point, arrondi au plus proche
    /// (demi vers le haut, en valeur absolue).
    ///
    /// Les zéros de tête de la partie entière sont retirés (au moins un chiffre reste) ;
    /// une partie fractionnaire entièrement nulle disparaît avec son point.
    /// Le signe "-" n'est écrit que si le résultat arrondi est non nul (-1/3000 à 2 donne "0").
    ///
    /// ```
    /// use fraction_qpur::evaluate;
    ///
    /// assert_eq!(evaluate("2/3").unwrap().to_decimal(3), "0.667");
    /// assert_eq!(evaluate("15/2").unwrap().to_decimal(3), "7.500");
    /// assert_eq!(evaluate("1").unwrap().to_decimal(3), "1");
    /// ```
    pub fn to_decimal(&self, precision: usize) -> String {
        let negatif = self.numerator().is_negative() != self.denominator().is_negative();
        let diviseur = self.denominator().magnitude();
        let texte_num = self.numerator().magnitude().to_str_radix(10);

        // Partie entière : un chiffre de quotient par chiffre du numérateur.
        let mut reste = BigUint::zero();
        let mut entiers: Vec<u8> = Vec::with_capacity(texte_num.len() + 1);
        for b in texte_num.bytes() {
            let (q, r) = pas(reste * 10u32 + u32::from(b - b'0'), diviseur);
            entiers.push(q);
            reste = r;
        }

        // Partie fractionnaire + chiffre de garde.
        let mut decimales: Vec<u8> = Vec::with_capacity(precision.saturating_add(1).min(4096));
        for _ in 0..=precision {
            let (q, r) = pas(reste * 10u32, diviseur);
            decimales.push(q);
            reste = r;
        }

        let garde = decimales.pop().unwrap_or_default();
        if garde >= 5 && propage_retenue(&mut decimales) && propage_retenue(&mut entiers) {
            entiers.insert(0, 1);
        }

        let debut = entiers
            .iter()
            .position(|&c| c != 0)
            .unwrap_or(entiers.len() - 1);
        let entiers = &entiers[debut..];
        let fraction_nulle = decimales.iter().all(|&c| c == 0);
        let tout_nul = fraction_nulle && entiers.iter().all(|&c| c == 0);

        let mut out = String::with_capacity(entiers.len() + decimales.len() + 2);
        if negatif && !tout_nul {
            out.push('-');
        }
        out.extend(entiers.iter().map(|&c| char::from(b'0' + c)));
        if !fraction_nulle {
            out.push('.');
            out.extend(decimales.iter().map(|&c| char::from(b'0' + c)));
        }
        out
    }
}
