//! Noyau exact — identification de coniques
//!
//! Organisation interne :
//! - canon.rs     : canonisation de l'entrée (blancs, casse, carrés)
//! - nombre.rs    : littéraux décimaux -> rationnels exacts
//! - motif.rs     : moteur de motifs ancrés (première correspondance gagne)
//! - conique.rs   : types valeurs (Parabole, Hyperbole, Reconnaissance)
//! - parabole.rs  : grammaires parabole + gardes de dégénérescence
//! - hyperbole.rs : grammaires hyperbole + gardes dénominateurs
//! - lecture.rs   : lecture décimale scalée (arrondi exact, racine Newton)
//! - format.rs    : rapports texte à précision fixe
//! - identifie.rs : pipeline complet

pub mod canon;
pub mod conique;
pub mod format;
pub mod hyperbole;
pub mod identifie;
pub mod lecture;
pub mod motif;
pub mod nombre;
pub mod parabole;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use identifie::identifier_equation;
