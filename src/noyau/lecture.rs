// src/noyau/lecture.rs
//
// Lecture décimale des valeurs exactes (jamais de flottants) :
// - rationnels : arrondi exact « moitié loin de zéro » à l'échelle 10^digits
// - racines    : plancher entier par Newton, chiffres de garde, puis arrondi
// - rendu      : texte décimal signé, zéro-complété
//
// Les grandeurs irrationnelles (a, b, c, e, coordonnées décalées d'une
// racine) passent par GARDE chiffres supplémentaires avant l'arrondi final.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Chiffres de garde pour les intermédiaires scalés.
pub const GARDE: usize = 3;

pub fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

/// Convertit un entier « scalé » (×10^digits) en texte décimal.
pub fn scaled_en_texte(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let echelle = pow10(digits);
    let partie_ent = &scaled / &echelle;
    let partie_frac = &scaled % &echelle;

    if digits == 0 {
        return if neg {
            format!("-{partie_ent}")
        } else {
            format!("{partie_ent}")
        };
    }

    let mut frac = partie_frac.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{partie_ent}.{frac}")
    } else {
        format!("{partie_ent}.{frac}")
    }
}

/* ------------------------ Arrondis exacts ------------------------ */

/// round(r × 10^digits), moitié loin de zéro. Exact.
pub fn rationnel_scaled_arrondi(r: &BigRational, digits: usize) -> BigInt {
    let echelle = pow10(digits);
    let numerateur = r.numer() * &echelle;
    let double = &numerateur + &numerateur;
    let denom = r.denom(); // toujours > 0
    let double_denom = denom + denom;

    // la division BigInt tronque vers zéro : (2n ± d)/(2d) arrondit n/d
    if numerateur.is_negative() {
        (double - denom) / double_denom
    } else {
        (double + denom) / double_denom
    }
}

/// trunc(r × 10^digits) vers zéro (intermédiaires sous chiffres de garde).
pub fn rationnel_scaled_tronque(r: &BigRational, digits: usize) -> BigInt {
    (r.numer() * pow10(digits)) / r.denom()
}

/// Retire `garde` chiffres de garde en arrondissant (moitié loin de zéro).
pub fn retire_garde(scaled: BigInt, garde: usize) -> BigInt {
    if garde == 0 {
        return scaled;
    }
    let echelle = pow10(garde);
    let demi = &echelle / BigInt::from(2);

    if scaled.is_negative() {
        -((-scaled + demi) / echelle)
    } else {
        (scaled + demi) / echelle
    }
}

/* ------------------------ √ scalée (plancher exact) ------------------------ */

/// floor( √r × 10^digits ) par Newton entier.
/// Précondition : r ≥ 0 (gardé par les constructeurs en amont).
pub fn racine_scaled_plancher(r: &BigRational, digits: usize) -> BigInt {
    let n = r.numer().clone();
    let d = r.denom().clone();

    if n.is_zero() || n.is_negative() {
        return BigInt::zero();
    }

    // On veut y ≈ √(n/d) × 10^digits
    // => y² ≈ (n × 10^(2·digits)) / d
    let echelle2 = pow10(2 * digits);
    let cible = n * echelle2;

    // point de départ
    let mut y = pow10(digits);
    if y.is_zero() {
        y = BigInt::one();
    }

    // Newton sur y pour √(cible/d)
    loop {
        let denom = &d * &y;
        if denom.is_zero() {
            break;
        }

        let q = &cible / denom;
        let y_suivant = (&y + q) >> 1;

        if y_suivant == y || y_suivant == (&y - 1u32) {
            // ajustement final (plancher)
            let mut y_adj = y_suivant;

            while (&y_adj + 1u32) * (&y_adj + 1u32) * &d <= cible {
                y_adj += 1u32;
            }
            while &y_adj * &y_adj * &d > cible {
                y_adj -= 1u32;
            }
            return y_adj;
        }

        y = y_suivant;
    }

    y
}

/* ------------------------ Rendus de haut niveau ------------------------ */

/// Rationnel -> texte décimal arrondi à `digits` chiffres.
pub fn texte_rationnel(r: &BigRational, digits: usize) -> String {
    scaled_en_texte(rationnel_scaled_arrondi(r, digits), digits)
}

/// √r -> texte décimal arrondi à `digits` chiffres (r ≥ 0).
pub fn texte_racine(r: &BigRational, digits: usize) -> String {
    let brut = racine_scaled_plancher(r, digits + GARDE);
    scaled_en_texte(retire_garde(brut, GARDE), digits)
}

/// base ± √rad -> texte décimal arrondi (coordonnée décalée d'une racine).
/// L'arrondi porte sur la SOMME, pas sur ses morceaux.
pub fn texte_decale_racine(
    base: &BigRational,
    rad: &BigRational,
    positif: bool,
    digits: usize,
) -> String {
    let dg = digits + GARDE;
    let base_scaled = rationnel_scaled_tronque(base, dg);
    let racine = racine_scaled_plancher(rad, dg);

    let somme = if positif {
        base_scaled + racine
    } else {
        base_scaled - racine
    };
    scaled_en_texte(retire_garde(somme, GARDE), digits)
}
