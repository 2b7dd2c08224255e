// src/noyau/nombre.rs

use num_bigint::BigInt;
use num_rational::BigRational;

/// Lit un littéral décimal signé en rationnel EXACT.
/// Supporte:
/// - entiers (ex: 12, -3, +7)
/// - décimaux (ex: 2.5, -0.75, .25, 7.)
///
/// Toute la chaîne doit être consommée ; au moins un chiffre est exigé.
/// Renvoie None sur littéral malformé (jamais de panique).
pub fn rationnel_depuis_decimal(txt: &str) -> Option<BigRational> {
    let chars: Vec<char> = txt.chars().collect();
    let mut i: usize = 0;

    let mut negatif = false;
    if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
        negatif = chars[i] == '-';
        i += 1;
    }

    let debut_ent = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    let partie_ent: String = chars[debut_ent..i].iter().collect();

    let mut partie_frac = String::new();
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        let debut_frac = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        partie_frac = chars[debut_frac..i].iter().collect();
    }

    if i != chars.len() || (partie_ent.is_empty() && partie_frac.is_empty()) {
        return None;
    }

    let mut numer = if partie_ent.is_empty() {
        BigInt::from(0)
    } else {
        BigInt::parse_bytes(partie_ent.as_bytes(), 10)?
    };
    let mut denom = BigInt::from(1);

    if !partie_frac.is_empty() {
        let frac = BigInt::parse_bytes(partie_frac.as_bytes(), 10)?;
        let echelle = BigInt::from(10).pow(partie_frac.len() as u32);
        numer = numer * &echelle + frac;
        denom = echelle;
    }

    if negatif {
        numer = -numer;
    }

    Some(BigRational::new(numer, denom))
}
