//! Tests scientifiques (campagne) : invariants + scénarios + limites contrôlées.
//!
//! But : vérifier les propriétés géométriques SANS passer par des flottants —
//! toutes les comparaisons se font sur les rationnels exacts du noyau ou sur
//! les rapports rendus (précision fixe).
//! - budget temps global sur les grilles
//! - tailles bornées (grilles petites, entrées courtes)

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::canon::canonise;
use super::conique::{Directrice, Orientation, Ouverture, Reconnaissance};
use super::identifie::{identifier_equation, reconnait, MESSAGE_NON_RECONNUE};

fn rat(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn parabole_de(entree: &str) -> super::conique::Parabole {
    match reconnait(entree) {
        Reconnaissance::Parabole(p) => p,
        autre => panic!("entree={entree:?} : attendu une parabole, reçu {autre:?}"),
    }
}

fn hyperbole_de(entree: &str) -> super::conique::Hyperbole {
    match reconnait(entree) {
        Reconnaissance::Hyperbole(h) => h,
        autre => panic!("entree={entree:?} : attendu une hyperbole, reçu {autre:?}"),
    }
}

/// Budget global anti-gel sur les grilles.
fn budget(debut: Instant, max: Duration) {
    if debut.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Invariants parabole ------------------------ */

#[test]
fn sci_foyer_et_directrice_symetriques_du_sommet() {
    // pour chaque parabole reconnue : |foyer - sommet| = p le long de l'axe,
    // et la directrice est à distance p de l'AUTRE côté (symétrie exacte)
    let entrees = [
        "y²=8x",
        "y²=-6x",
        "x²=4y",
        "x²=-10y",
        "y=2(x-1)²+3",
        "x=-0.5(y+2)²-1",
        "y=1x²-2x+3",
        "x=2y²+4y+1",
        "y=-3x²",
    ];

    for entree in entrees {
        let p = parabole_de(entree);
        assert!(p.p.is_positive(), "entree={entree:?} : p doit être > 0");

        let (coord_foyer, coord_sommet, directrice_const) = match p.orientation {
            Orientation::Verticale => {
                assert!(matches!(p.ouverture, Ouverture::Haut | Ouverture::Bas));
                let Directrice::Y(c) = &p.directrice else {
                    panic!("entree={entree:?} : directrice attendue en y");
                };
                // l'axe est vertical : l'abscisse du foyer est celle du sommet
                assert_eq!(p.foyer.x, p.sommet.x, "entree={entree:?}");
                (p.foyer.y.clone(), p.sommet.y.clone(), c.clone())
            }
            Orientation::Horizontale => {
                assert!(matches!(p.ouverture, Ouverture::Gauche | Ouverture::Droite));
                let Directrice::X(c) = &p.directrice else {
                    panic!("entree={entree:?} : directrice attendue en x");
                };
                assert_eq!(p.foyer.y, p.sommet.y, "entree={entree:?}");
                (p.foyer.x.clone(), p.sommet.x.clone(), c.clone())
            }
        };

        let decale_foyer = &coord_foyer - &coord_sommet;
        let decale_directrice = &directrice_const - &coord_sommet;

        // distances égales à p, de part et d'autre
        assert_eq!(decale_foyer.abs(), p.p, "entree={entree:?}");
        assert_eq!(decale_directrice.abs(), p.p, "entree={entree:?}");
        assert_eq!(
            decale_foyer + decale_directrice,
            BigRational::zero(),
            "entree={entree:?} : foyer et directrice du même côté"
        );
    }
}

#[test]
fn sci_ouverture_suit_le_signe() {
    assert_eq!(parabole_de("y²=8x").ouverture, Ouverture::Droite);
    assert_eq!(parabole_de("y²=-8x").ouverture, Ouverture::Gauche);
    assert_eq!(parabole_de("x²=6y").ouverture, Ouverture::Haut);
    assert_eq!(parabole_de("x²=-6y").ouverture, Ouverture::Bas);
    assert_eq!(parabole_de("y=4x²").ouverture, Ouverture::Haut);
    assert_eq!(parabole_de("y=-4x²").ouverture, Ouverture::Bas);
    assert_eq!(parabole_de("x=4y²").ouverture, Ouverture::Droite);
    assert_eq!(parabole_de("x=-4y²").ouverture, Ouverture::Gauche);
}

/* ------------------------ Invariants hyperbole ------------------------ */

#[test]
fn sci_excentricite_toujours_superieure_a_un() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // grille bornée : pour tous A, B > 0, e² = (A+B)/A > 1 exactement
    for a in 1..=6i64 {
        for b in 1..=6i64 {
            budget(t0, max);

            let h = hyperbole_de(&format!("x²/{a}-y²/{b}=1"));
            assert_eq!(h.orientation, Orientation::Horizontale);
            assert_eq!(h.a2, rat(a, 1));
            assert_eq!(h.b2, rat(b, 1));
            assert_eq!(h.c2(), rat(a + b, 1));
            assert!(h.e2() > rat(1, 1), "A={a} B={b}");

            let v = hyperbole_de(&format!("y²/{a}-x²/{b}=1"));
            assert_eq!(v.orientation, Orientation::Verticale);
            assert_eq!(v.a2, rat(a, 1));
            assert!(v.e2() > rat(1, 1), "A={a} B={b}");
        }
    }
}

#[test]
fn sci_centre_translate_inverse_les_signes() {
    // "(x-2)" et "(y+1)" : centre (2, -1), pas (-2, 1)
    let h = hyperbole_de("(x-2)²/4-(y+1)²/9=1");
    assert_eq!(h.centre.x, rat(2, 1));
    assert_eq!(h.centre.y, rat(-1, 1));

    let v = hyperbole_de("(y-3)²/25-(x+5)²/11=1");
    assert_eq!(v.centre.x, rat(-5, 1));
    assert_eq!(v.centre.y, rat(3, 1));
}

#[test]
fn sci_sommets_et_foyers_a_distance_exacte() {
    // pour une hyperbole à racines entières, le rapport rendu expose
    // centre ± a et centre ± c exactement
    let rapport = identifier_equation("(x-2)²/9-(y+1)²/16=1");
    // a = 3, c = √25 = 5, centre (2, -1)
    assert!(rapport.contains("-> S1 : (5.00, -1.00)"), "{rapport}");
    assert!(rapport.contains("-> S2 : (-1.00, -1.00)"), "{rapport}");
    assert!(rapport.contains("-> F1 : (7.00, -1.00)"), "{rapport}");
    assert!(rapport.contains("-> F2 : (-3.00, -1.00)"), "{rapport}");
    assert!(rapport.contains("-> e : 1.6667"), "{rapport}");
}

/* ------------------------ Canonisation ------------------------ */

#[test]
fn sci_canonisation_idempotente() {
    let entrees = [
        "Y² = 8X",
        "x^2 = -4 y",
        "( x - 2 )² / 4 - ( y + 1 )² / 9 = 1",
        "y = 2 ( x - 1 )^2 + 3",
        "n'importe quoi",
    ];
    for entree in entrees {
        let une_fois = canonise(entree);
        assert_eq!(canonise(&une_fois), une_fois, "entree={entree:?}");
    }
}

#[test]
fn sci_reconnaissance_insensible_a_la_forme_brute() {
    let reference = identifier_equation("(x-2)²/4-(y+1)²/9=1");
    assert_ne!(reference, MESSAGE_NON_RECONNUE);
    assert_eq!(
        identifier_equation("( X - 2 )^2 / 4 - ( Y + 1 )^2 / 9 = 1"),
        reference
    );
}

/* ------------------------ Dégénérescences ------------------------ */

#[test]
fn sci_degenerescences_jamais_de_valeur_indefinie() {
    // coefficient directeur nul, dénominateur nul : repli, pas d'infini
    for entree in [
        "y²=0x",
        "x²=0y",
        "y=0x²",
        "y=0x²+2x+1",
        "x=0y²-3y+2",
        "y=0(x-1)²+3",
        "x²/0-y²/4=1",
        "x²/9-y²/0=1",
        "x²/0.0-y²/0.0=1",
    ] {
        assert_eq!(
            identifier_equation(entree),
            MESSAGE_NON_RECONNUE,
            "entree={entree:?}"
        );
    }
}

#[test]
fn sci_determinisme_du_pipeline() {
    // même entrée => même sortie, y compris pour le repli
    for entree in ["x²/9-y²/4=1", "y²=8x", "banana", ""] {
        assert_eq!(
            identifier_equation(entree),
            identifier_equation(entree),
            "entree={entree:?}"
        );
    }
}
