// src/noyau/format.rs
//
// Rapports texte à précision fixe :
// - coordonnées et longueurs : 2 décimales
// - excentricité : 4 décimales
// - directrice : équation de droite EXACTE (entier ou fraction réduite)
//
// La précision est un contrat (sorties en or des tests) : ne pas la changer.

use num_rational::BigRational;
use num_traits::One;

use super::conique::{Directrice, Hyperbole, Orientation, Ouverture, Parabole, PointExact};
use super::lecture::{texte_decale_racine, texte_racine, texte_rationnel};

/// Décimales fixes des coordonnées et longueurs.
const DECIMALES: usize = 2;
/// Décimales fixes de l'excentricité.
const DECIMALES_EXCENTRICITE: usize = 4;

/* ------------------------ Helpers rationnels ------------------------ */

/// n si entier, n/d sinon (forme exacte « jolie »).
fn format_rat_pretty(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

fn format_point(p: &PointExact) -> String {
    format!(
        "({}, {})",
        texte_rationnel(&p.x, DECIMALES),
        texte_rationnel(&p.y, DECIMALES)
    )
}

fn format_directrice(d: &Directrice) -> String {
    match d {
        Directrice::X(c) => format!("x = {}", format_rat_pretty(c)),
        Directrice::Y(c) => format!("y = {}", format_rat_pretty(c)),
    }
}

/* ------------------------ Rapport parabole ------------------------ */

pub fn format_parabole(p: &Parabole) -> String {
    let (nom, axe) = match p.orientation {
        Orientation::Verticale => ("verticale", "y"),
        Orientation::Horizontale => ("horizontale", "x"),
    };
    let ouverture = match p.ouverture {
        Ouverture::Haut => "vers le haut",
        Ouverture::Bas => "vers le bas",
        Ouverture::Gauche => "vers la gauche",
        Ouverture::Droite => "vers la droite",
    };

    [
        format!("Parabole {nom}"),
        format!("-> Axe parallèle à {axe}"),
        format!("-> Ouverture {ouverture}"),
        format!("-> Sommet : {}", format_point(&p.sommet)),
        format!("-> Foyer : {}", format_point(&p.foyer)),
        format!("-> Directrice : {}", format_directrice(&p.directrice)),
        format!(
            "-> Paramètre focal (p) : {}",
            texte_rationnel(&p.p, DECIMALES)
        ),
    ]
    .join("\n")
}

/* ------------------------ Rapport hyperbole ------------------------ */

pub fn format_hyperbole(h: &Hyperbole) -> String {
    let axe = match h.orientation {
        Orientation::Horizontale => "-> Axe focal parallèle à x (ouverture latérale)",
        Orientation::Verticale => "-> Axe focal parallèle à y (ouverture haut/bas)",
    };

    let c2 = h.c2();
    let e2 = h.e2();

    let (s1, s2) = points_decales(h, &h.a2);
    let (f1, f2) = points_decales(h, &c2);

    [
        "HYPERBOLE".to_string(),
        axe.to_string(),
        format!("-> Centre : {}", format_point(&h.centre)),
        format!("-> a : {}", texte_racine(&h.a2, DECIMALES)),
        format!("-> b : {}", texte_racine(&h.b2, DECIMALES)),
        format!("-> c : {}", texte_racine(&c2, DECIMALES)),
        format!("-> e : {}", texte_racine(&e2, DECIMALES_EXCENTRICITE)),
        String::new(),
        "Sommets :".to_string(),
        format!("-> S1 : {s1}"),
        format!("-> S2 : {s2}"),
        String::new(),
        "Foyers :".to_string(),
        format!("-> F1 : {f1}"),
        format!("-> F2 : {f2}"),
    ]
    .join("\n")
}

/// Les deux points centre ± √rad le long de l'axe focal, déjà rendus.
fn points_decales(h: &Hyperbole, rad: &BigRational) -> (String, String) {
    match h.orientation {
        Orientation::Horizontale => {
            let y = texte_rationnel(&h.centre.y, DECIMALES);
            let plus = texte_decale_racine(&h.centre.x, rad, true, DECIMALES);
            let moins = texte_decale_racine(&h.centre.x, rad, false, DECIMALES);
            (format!("({plus}, {y})"), format!("({moins}, {y})"))
        }
        Orientation::Verticale => {
            let x = texte_rationnel(&h.centre.x, DECIMALES);
            let plus = texte_decale_racine(&h.centre.y, rad, true, DECIMALES);
            let moins = texte_decale_racine(&h.centre.y, rad, false, DECIMALES);
            (format!("({x}, {plus})"), format!("({x}, {moins})"))
        }
    }
}
