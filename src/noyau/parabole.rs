// src/noyau/parabole.rs
//
// Reconnaissance des paraboles : table ordonnée de (motif, constructeur),
// première correspondance gagne.
//  1. y² = Cx           (canonique horizontale)
//  2. x² = Cy           (canonique verticale)
//  3. y = a(x+u)² + v   (forme sommet ; variante x/y échangés)
//  4. y = ax² + bx + c  (forme développée ; variante x/y échangés)
//
// Gardes : coefficient directeur nul => forme dégénérée, on passe au motif
// suivant (jamais de division par zéro, jamais d'infini).
//
// Inversion de signe : "(x-1)" capture -1, le sommet est en x = +1.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::conique::{Directrice, Orientation, Ouverture, Parabole, PointExact};
use super::motif::{applique, Seg};

/* ------------------------ Table des motifs ------------------------ */

const MOTIF_CANON_H: &[Seg] = &[Seg::Lit("y²="), Seg::NombreSigne, Seg::Lit("x")];
const MOTIF_CANON_V: &[Seg] = &[Seg::Lit("x²="), Seg::NombreSigne, Seg::Lit("y")];

const CONSTANTE: &[Seg] = &[Seg::NombreSigneOblig];

const MOTIF_SOMMET_V: &[Seg] = &[
    Seg::Lit("y="),
    Seg::NombreSigne,
    Seg::Lit("(x"),
    Seg::NombreSigneOblig,
    Seg::Lit(")²"),
    Seg::Optionnel(CONSTANTE),
];
const MOTIF_SOMMET_H: &[Seg] = &[
    Seg::Lit("x="),
    Seg::NombreSigne,
    Seg::Lit("(y"),
    Seg::NombreSigneOblig,
    Seg::Lit(")²"),
    Seg::Optionnel(CONSTANTE),
];

const TERME_BX: &[Seg] = &[Seg::NombreSigneOblig, Seg::Lit("x")];
const TERME_BY: &[Seg] = &[Seg::NombreSigneOblig, Seg::Lit("y")];

const MOTIF_DEV_V: &[Seg] = &[
    Seg::Lit("y="),
    Seg::NombreSigne,
    Seg::Lit("x²"),
    Seg::Optionnel(TERME_BX),
    Seg::Optionnel(CONSTANTE),
];
const MOTIF_DEV_H: &[Seg] = &[
    Seg::Lit("x="),
    Seg::NombreSigne,
    Seg::Lit("y²"),
    Seg::Optionnel(TERME_BY),
    Seg::Optionnel(CONSTANTE),
];

type Constructeur = fn(Vec<BigRational>) -> Option<Parabole>;

const MOTIFS_PARABOLE: &[(&[Seg], Constructeur)] = &[
    (MOTIF_CANON_H, construis_canonique_horizontale),
    (MOTIF_CANON_V, construis_canonique_verticale),
    (MOTIF_SOMMET_V, construis_sommet_verticale),
    (MOTIF_SOMMET_H, construis_sommet_horizontale),
    (MOTIF_DEV_V, construis_developpee_verticale),
    (MOTIF_DEV_H, construis_developpee_horizontale),
];

/// Essaie chaque motif dans l'ordre sur une équation déjà canonisée.
/// Une capture dégénérée (coefficient nul) vaut non-correspondance : on
/// continue avec les motifs suivants.
pub fn reconnait_parabole(eq: &str) -> Option<Parabole> {
    for (motif, construis) in MOTIFS_PARABOLE {
        if let Some(captures) = applique(motif, eq) {
            if let Some(parabole) = construis(captures) {
                return Some(parabole);
            }
        }
    }
    None
}

/* ------------------------ Constructeurs ------------------------ */

fn deux() -> BigRational {
    BigRational::from_integer(BigInt::from(2))
}

fn quatre() -> BigRational {
    BigRational::from_integer(BigInt::from(4))
}

fn construis_canonique_horizontale(captures: Vec<BigRational>) -> Option<Parabole> {
    let c = captures.into_iter().next()?;
    construis_canonique(c, Orientation::Horizontale)
}

fn construis_canonique_verticale(captures: Vec<BigRational>) -> Option<Parabole> {
    let c = captures.into_iter().next()?;
    construis_canonique(c, Orientation::Verticale)
}

/// Forme canonique y² = Cx / x² = Cy : p signé = C/4, sommet à l'origine.
fn construis_canonique(c: BigRational, orientation: Orientation) -> Option<Parabole> {
    if c.is_zero() {
        return None; // dégénérée : p = 0
    }
    let p_signe = c / quatre();
    let p = p_signe.abs();

    let (ouverture, foyer, directrice) = match orientation {
        Orientation::Horizontale => (
            if p_signe.is_positive() {
                Ouverture::Droite
            } else {
                Ouverture::Gauche
            },
            PointExact::nouveau(p_signe.clone(), BigRational::zero()),
            Directrice::X(-p_signe),
        ),
        Orientation::Verticale => (
            if p_signe.is_positive() {
                Ouverture::Haut
            } else {
                Ouverture::Bas
            },
            PointExact::nouveau(BigRational::zero(), p_signe.clone()),
            Directrice::Y(-p_signe),
        ),
    };

    Some(Parabole {
        orientation,
        ouverture,
        sommet: PointExact::origine(),
        p,
        foyer,
        directrice,
    })
}

fn construis_sommet_verticale(captures: Vec<BigRational>) -> Option<Parabole> {
    let [a, u, v] = en_trois(captures)?;
    // motif "(x+u)" : le sommet est en x = -u
    construis_depuis_sommet(a, PointExact::nouveau(-u, v), Orientation::Verticale)
}

fn construis_sommet_horizontale(captures: Vec<BigRational>) -> Option<Parabole> {
    let [a, u, v] = en_trois(captures)?;
    // motif "(y+u)" : sommet en y = -u ; la constante est l'abscisse
    construis_depuis_sommet(a, PointExact::nouveau(v, -u), Orientation::Horizontale)
}

fn construis_developpee_verticale(captures: Vec<BigRational>) -> Option<Parabole> {
    let [a, b, c] = en_trois(captures)?;
    if a.is_zero() {
        return None;
    }
    // complétion du carré : sommet = (-b/(2a), c - b²/(4a))
    let abscisse = -(&b / (deux() * &a));
    let ordonnee = &c - (&b * &b) / (quatre() * &a);
    construis_depuis_sommet(
        a,
        PointExact::nouveau(abscisse, ordonnee),
        Orientation::Verticale,
    )
}

fn construis_developpee_horizontale(captures: Vec<BigRational>) -> Option<Parabole> {
    let [a, b, c] = en_trois(captures)?;
    if a.is_zero() {
        return None;
    }
    // x = ay² + by + c : sommet = (c - b²/(4a), -b/(2a))
    let abscisse = &c - (&b * &b) / (quatre() * &a);
    let ordonnee = -(&b / (deux() * &a));
    construis_depuis_sommet(
        a,
        PointExact::nouveau(abscisse, ordonnee),
        Orientation::Horizontale,
    )
}

/// Construction commune aux formes sommet et développée.
/// `a` est le coefficient directeur (non nul), p = 1/(4|a|) ; le foyer est le
/// sommet décalé de ±p le long de l'axe, la directrice la droite opposée.
fn construis_depuis_sommet(
    a: BigRational,
    sommet: PointExact,
    orientation: Orientation,
) -> Option<Parabole> {
    if a.is_zero() {
        return None;
    }
    let p = (quatre() * a.abs()).recip();
    let decale = if a.is_positive() {
        p.clone()
    } else {
        -p.clone()
    };

    let (ouverture, foyer, directrice) = match orientation {
        Orientation::Verticale => (
            if a.is_positive() {
                Ouverture::Haut
            } else {
                Ouverture::Bas
            },
            PointExact::nouveau(sommet.x.clone(), &sommet.y + &decale),
            Directrice::Y(&sommet.y - &decale),
        ),
        Orientation::Horizontale => (
            if a.is_positive() {
                Ouverture::Droite
            } else {
                Ouverture::Gauche
            },
            PointExact::nouveau(&sommet.x + &decale, sommet.y.clone()),
            Directrice::X(&sommet.x - &decale),
        ),
    };

    Some(Parabole {
        orientation,
        ouverture,
        sommet,
        p,
        foyer,
        directrice,
    })
}

fn en_trois(captures: Vec<BigRational>) -> Option<[BigRational; 3]> {
    let mut it = captures.into_iter();
    let a = it.next()?;
    let b = it.next()?;
    let c = it.next()?;
    Some([a, b, c])
}
