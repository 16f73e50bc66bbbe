// src/noyau/pgcd.rs
//
// PGCD binaire (Stein) sur grands entiers.
// - travaille sur les valeurs absolues, résultat ≥ 0
// - gcd(0, v) = |v|, gcd(u, 0) = |u|, gcd(0, 0) = 0
// - itératif : pile constante, quelle que soit la taille des opérandes

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// PGCD de |u| et |v| par décalages et soustractions.
pub fn gcd(u: &BigInt, v: &BigInt) -> BigInt {
    BigInt::from(gcd_magnitude(u.magnitude().clone(), v.magnitude().clone()))
}

fn gcd_magnitude(mut u: BigUint, mut v: BigUint) -> BigUint {
    if u.is_zero() {
        return v;
    }
    if v.is_zero() {
        return u;
    }

    // Facteur 2^k commun, remis à la fin.
    let tu = u.trailing_zeros().unwrap_or(0);
    let tv = v.trailing_zeros().unwrap_or(0);
    let k = tu.min(tv);

    u >>= tu;
    loop {
        // u et v impairs ici ; leur différence est paire
        v >>= v.trailing_zeros().unwrap_or(0);
        if u > v {
            std::mem::swap(&mut u, &mut v);
        }
        v -= &u;
        if v.is_zero() {
            break;
        }
    }

    u << k
}
