//! Noyau — identification (pipeline réel)
//!
//! canonise -> motifs parabole -> motifs hyperbole -> rapport
//!
//! Chaque appel est une fonction pure de son entrée : aucune E/S, aucun état
//! partagé, toujours une valeur en retour (le repli est un résultat normal,
//! pas une erreur).

use super::canon::canonise;
use super::conique::Reconnaissance;
use super::format::{format_hyperbole, format_parabole};
use super::hyperbole::reconnait_hyperbole;
use super::parabole::reconnait_parabole;

/// Message de repli pour toute entrée non reconnue (contrat : fixe et
/// déterministe ; l'entrée vide ou malformée passe par ici aussi).
pub const MESSAGE_NON_RECONNUE: &str = "L'équation n'est ni une parabole ni une hyperbole.";

/// Reconnaissance typée : parabole d'abord, hyperbole ensuite (ordre fixe,
/// la parabole gagne l'arbitrage).
pub fn reconnait(entree: &str) -> Reconnaissance {
    let eq = canonise(entree);

    if let Some(parabole) = reconnait_parabole(&eq) {
        return Reconnaissance::Parabole(parabole);
    }
    if let Some(hyperbole) = reconnait_hyperbole(&eq) {
        return Reconnaissance::Hyperbole(hyperbole);
    }
    Reconnaissance::NonReconnue
}

/// API publique : équation brute -> rapport texte (ou message de repli).
pub fn identifier_equation(entree: &str) -> String {
    match reconnait(entree) {
        Reconnaissance::Parabole(parabole) => format_parabole(&parabole),
        Reconnaissance::Hyperbole(hyperbole) => format_hyperbole(&hyperbole),
        Reconnaissance::NonReconnue => MESSAGE_NON_RECONNUE.to_string(),
    }
}
