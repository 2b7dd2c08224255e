// src/noyau/hyperbole.rs
//
// Reconnaissance des hyperboles : quatre grammaires (centrées à l'origine ou
// translatées, horizontales ou verticales). Le dénominateur sous le terme
// positif est a², celui sous le terme soustrait est b².
//
// Gardes : dénominateur nul => entrée malformée, non-reconnaissance (la
// grammaire interdit déjà les dénominateurs négatifs).
// Inversion de signe : "(x-2)" capture -2, le centre est en x = +2.

use num_rational::BigRational;
use num_traits::Zero;

use super::conique::{Hyperbole, Orientation, PointExact};
use super::motif::{applique, Seg};

const MOTIF_CENTRE_H: &[Seg] = &[
    Seg::Lit("x²/"),
    Seg::Nombre,
    Seg::Lit("-y²/"),
    Seg::Nombre,
    Seg::Lit("=1"),
];
const MOTIF_TRANSLATE_H: &[Seg] = &[
    Seg::Lit("(x"),
    Seg::NombreSigneOblig,
    Seg::Lit(")²/"),
    Seg::Nombre,
    Seg::Lit("-(y"),
    Seg::NombreSigneOblig,
    Seg::Lit(")²/"),
    Seg::Nombre,
    Seg::Lit("=1"),
];
const MOTIF_CENTRE_V: &[Seg] = &[
    Seg::Lit("y²/"),
    Seg::Nombre,
    Seg::Lit("-x²/"),
    Seg::Nombre,
    Seg::Lit("=1"),
];
const MOTIF_TRANSLATE_V: &[Seg] = &[
    Seg::Lit("(y"),
    Seg::NombreSigneOblig,
    Seg::Lit(")²/"),
    Seg::Nombre,
    Seg::Lit("-(x"),
    Seg::NombreSigneOblig,
    Seg::Lit(")²/"),
    Seg::Nombre,
    Seg::Lit("=1"),
];

/// Essaie chaque grammaire dans l'ordre sur une équation déjà canonisée.
/// Les grammaires sont disjointes ; une capture dégénérée (dénominateur nul)
/// vaut non-correspondance.
pub fn reconnait_hyperbole(eq: &str) -> Option<Hyperbole> {
    if let Some(h) = applique(MOTIF_CENTRE_H, eq)
        .and_then(|c| construis_centree(c, Orientation::Horizontale))
    {
        return Some(h);
    }
    if let Some(h) = applique(MOTIF_TRANSLATE_H, eq)
        .and_then(|c| construis_translatee(c, Orientation::Horizontale))
    {
        return Some(h);
    }
    if let Some(h) =
        applique(MOTIF_CENTRE_V, eq).and_then(|c| construis_centree(c, Orientation::Verticale))
    {
        return Some(h);
    }
    if let Some(h) = applique(MOTIF_TRANSLATE_V, eq)
        .and_then(|c| construis_translatee(c, Orientation::Verticale))
    {
        return Some(h);
    }
    None
}

fn construis_centree(captures: Vec<BigRational>, orientation: Orientation) -> Option<Hyperbole> {
    let mut it = captures.into_iter();
    let a2 = it.next()?;
    let b2 = it.next()?;
    construis(a2, b2, PointExact::origine(), orientation)
}

fn construis_translatee(captures: Vec<BigRational>, orientation: Orientation) -> Option<Hyperbole> {
    let mut it = captures.into_iter();
    let premier = it.next()?; // décalage du terme positif
    let a2 = it.next()?;
    let second = it.next()?; // décalage du terme soustrait
    let b2 = it.next()?;

    // le littéral capturé est le décalage DANS la parenthèse : la coordonnée
    // réelle du centre est son opposé
    let centre = match orientation {
        Orientation::Horizontale => PointExact::nouveau(-premier, -second),
        Orientation::Verticale => PointExact::nouveau(-second, -premier),
    };
    construis(a2, b2, centre, orientation)
}

fn construis(
    a2: BigRational,
    b2: BigRational,
    centre: PointExact,
    orientation: Orientation,
) -> Option<Hyperbole> {
    if a2.is_zero() || b2.is_zero() {
        return None; // dénominateurs strictement positifs exigés
    }
    Some(Hyperbole {
        orientation,
        centre,
        a2,
        b2,
    })
}
