// src/noyau/conique.rs
//
// Types valeurs du noyau (exacts, sans flottants).
// - PointExact : couple de rationnels
// - Parabole   : sommet/foyer/directrice exacts, p > 0
// - Hyperbole  : carrés des demi-axes exacts (les racines restent
//   symboliques jusqu'à la lecture décimale)
//
// Tous immuables : construits une fois par reconnaissance, jamais modifiés.

use num_rational::BigRational;
use num_traits::Zero;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointExact {
    pub x: BigRational,
    pub y: BigRational,
}

impl PointExact {
    pub fn nouveau(x: BigRational, y: BigRational) -> Self {
        Self { x, y }
    }

    pub fn origine() -> Self {
        Self {
            x: BigRational::zero(),
            y: BigRational::zero(),
        }
    }
}

/// Orientation de l'axe focal.
/// Parabole verticale => variable au carré x, ouverture haut/bas.
/// Hyperbole horizontale => axe transverse parallèle à x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontale,
    Verticale,
}

/// Sens d'ouverture d'une parabole (cohérent avec l'orientation :
/// verticale => Haut/Bas, horizontale => Gauche/Droite).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ouverture {
    Haut,
    Bas,
    Gauche,
    Droite,
}

/// Directrice d'une parabole : la droite "x = c" ou "y = c".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directrice {
    X(BigRational),
    Y(BigRational),
}

/// Parabole reconnue.
///
/// Invariant : foyer et directrice sont symétriques par rapport au sommet le
/// long de l'axe focal, chacun à distance exacte `p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parabole {
    pub orientation: Orientation,
    pub ouverture: Ouverture,
    pub sommet: PointExact,
    /// Paramètre focal (distance sommet-foyer), strictement positif.
    pub p: BigRational,
    pub foyer: PointExact,
    pub directrice: Directrice,
}

/// Hyperbole reconnue.
///
/// On stocke les CARRÉS exacts des demi-axes : a = √a², b = √b², c = √c² et
/// e = √e² sont irrationnels en général et ne prennent forme décimale qu'au
/// rendu. Invariant : a² > 0 et b² > 0, donc c² > a² et e² > 1 exactement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hyperbole {
    pub orientation: Orientation,
    pub centre: PointExact,
    /// Carré du demi-axe transverse (> 0).
    pub a2: BigRational,
    /// Carré du demi-axe conjugué (> 0).
    pub b2: BigRational,
}

impl Hyperbole {
    /// c² = a² + b² (carré de la distance focale, exact).
    pub fn c2(&self) -> BigRational {
        &self.a2 + &self.b2
    }

    /// e² = c²/a² (carré de l'excentricité, exact ; > 1 dès que b² > 0).
    pub fn e2(&self) -> BigRational {
        self.c2() / &self.a2
    }
}

/// Résultat étiqueté de la reconnaissance (le repli est un résultat normal,
/// pas une erreur).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reconnaissance {
    Parabole(Parabole),
    Hyperbole(Hyperbole),
    NonReconnue,
}
