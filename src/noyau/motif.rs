// src/noyau/motif.rs
//
// Mini-moteur de motifs ancrés pour les formes normales de coniques.
//
// Un motif est une suite de segments :
// - Lit("…")         : littéral exact
// - Nombre           : décimal non signé, capturé
// - NombreSigne      : signe optionnel puis décimal, capturé
// - NombreSigneOblig : signe obligatoire puis décimal, capturé
// - Optionnel(&[…])  : groupe avec retour arrière ; absent => chaque
//                      capture du groupe vaut 0
//
// Le motif ne reconnaît que la chaîne ENTIÈRE (ancrage début -> fin).
// Les captures reviennent en rationnels exacts, dans l'ordre des segments.

use num_rational::BigRational;
use num_traits::Zero;

use super::nombre::rationnel_depuis_decimal;

#[derive(Clone, Copy, Debug)]
pub enum Seg {
    Lit(&'static str),
    Nombre,
    NombreSigne,
    NombreSigneOblig,
    Optionnel(&'static [Seg]),
}

enum Signe {
    Interdit,
    Optionnel,
    Obligatoire,
}

/// Applique un motif ancré ; Some(captures) si la chaîne entière correspond.
pub fn applique(motif: &[Seg], texte: &str) -> Option<Vec<BigRational>> {
    let chars: Vec<char> = texte.chars().collect();
    let mut i: usize = 0;
    let mut captures = Vec::new();

    if !applique_segments(motif, &chars, &mut i, &mut captures) {
        return None;
    }
    if i != chars.len() {
        return None; // ancrage fin : aucun reste toléré
    }
    Some(captures)
}

fn applique_segments(
    segs: &[Seg],
    chars: &[char],
    i: &mut usize,
    captures: &mut Vec<BigRational>,
) -> bool {
    for seg in segs {
        match seg {
            Seg::Lit(lit) => {
                for attendu in lit.chars() {
                    if *i >= chars.len() || chars[*i] != attendu {
                        return false;
                    }
                    *i += 1;
                }
            }

            Seg::Nombre => {
                if !capture_nombre(chars, i, captures, Signe::Interdit) {
                    return false;
                }
            }
            Seg::NombreSigne => {
                if !capture_nombre(chars, i, captures, Signe::Optionnel) {
                    return false;
                }
            }
            Seg::NombreSigneOblig => {
                if !capture_nombre(chars, i, captures, Signe::Obligatoire) {
                    return false;
                }
            }

            Seg::Optionnel(interieur) => {
                let sauve_i = *i;
                let sauve_cap = captures.len();

                if !applique_segments(interieur, chars, i, captures) {
                    // retour arrière : groupe absent, captures à zéro
                    *i = sauve_i;
                    captures.truncate(sauve_cap);
                    for _ in 0..compte_captures(interieur) {
                        captures.push(BigRational::zero());
                    }
                }
            }
        }
    }
    true
}

/// Balaye un décimal (signe selon `signe`) et pousse sa valeur exacte.
fn capture_nombre(
    chars: &[char],
    i: &mut usize,
    captures: &mut Vec<BigRational>,
    signe: Signe,
) -> bool {
    let debut = *i;
    let mut j = *i;

    let a_signe = j < chars.len() && (chars[j] == '+' || chars[j] == '-');
    match signe {
        Signe::Interdit if a_signe => return false,
        Signe::Obligatoire if !a_signe => return false,
        _ => {}
    }
    if a_signe {
        j += 1;
    }

    let mut chiffres: usize = 0;
    while j < chars.len() && chars[j].is_ascii_digit() {
        j += 1;
        chiffres += 1;
    }
    if j < chars.len() && chars[j] == '.' {
        j += 1;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
            chiffres += 1;
        }
    }
    if chiffres == 0 {
        return false;
    }

    let texte: String = chars[debut..j].iter().collect();
    match rationnel_depuis_decimal(&texte) {
        Some(r) => {
            captures.push(r);
            *i = j;
            true
        }
        None => false,
    }
}

fn compte_captures(segs: &[Seg]) -> usize {
    let mut n = 0;
    for seg in segs {
        match seg {
            Seg::Lit(_) => {}
            Seg::Nombre | Seg::NombreSigne | Seg::NombreSigneOblig => n += 1,
            Seg::Optionnel(interieur) => n += compte_captures(interieur),
        }
    }
    n
}
