//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de l'identificateur (entrée, rapport, erreur) et
//! offrir des opérations simples (C/CLR/AC) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune reconnaissance ici (pas de noyau, pas de motifs).
//! - Actions déterministes, sans effet de bord caché.

#[derive(Clone, Debug)]
pub struct AppIdent {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub rapport: String,      // rapport texte du noyau (ou message de repli)
    pub erreur: String,       // message d'erreur UI (entrée vide)
    pub rapport_dispo: bool,  // false tant que rien n'a été identifié

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppIdent {
    fn default() -> Self {
        Self {
            entree: String::new(),
            rapport: String::new(),
            erreur: String::new(),
            rapport_dispo: false, // au démarrage : rien à lire
            focus_entree: true,   // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppIdent {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + rapport + erreur).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_rapport();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher au rapport).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer rapport + erreur (sans toucher à l'entrée).
    pub fn clear_rapport(&mut self) {
        self.rapport.clear();
        self.erreur.clear();
        self.rapport_dispo = false;
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur UI.
    ///
    /// Choix UX : on CONSERVE le dernier rapport (ne pas “effacer l'écran”
    /// sur une faute de saisie) mais on le marque indisponible.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.rapport_dispo = false;
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un rapport complet.
    pub fn set_rapport(&mut self, rapport: impl Into<String>) {
        self.erreur.clear();
        self.rapport = rapport.into();
        self.rapport_dispo = true;
        self.focus_entree = true;
    }
}
