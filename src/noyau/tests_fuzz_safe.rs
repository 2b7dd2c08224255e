//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariant clé : identifier_equation rend TOUJOURS une valeur (un rapport
//!   ou le repli), jamais de panique, jamais de valeur indéfinie

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

use super::conique::Reconnaissance;
use super::identifie::{identifier_equation, reconnait, MESSAGE_NON_RECONNUE};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(debut: Instant, max: Duration) {
    if debut.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Générateurs bornés ------------------------ */

const ALPHABET: &[char] = &[
    'x', 'y', '²', '=', '+', '-', '/', '(', ')', '.', '0', '1', '2', '3', '4', '5', '9', ' ', '^',
    'a',
];

fn gen_salade(rng: &mut Rng) -> String {
    let longueur = 1 + rng.pick(24) as usize;
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn gen_hyperbole_valide(rng: &mut Rng) -> String {
    let a = 1 + rng.pick(99);
    let b = 1 + rng.pick(99);

    match rng.pick(4) {
        0 => format!("x²/{a}-y²/{b}=1"),
        1 => format!("y²/{a}-x²/{b}=1"),
        2 => {
            let h = rng.pick(19) as i64 - 9;
            let k = rng.pick(19) as i64 - 9;
            format!("(x{h:+})²/{a}-(y{k:+})²/{b}=1")
        }
        _ => {
            let h = rng.pick(19) as i64 - 9;
            let k = rng.pick(19) as i64 - 9;
            format!("(y{k:+})²/{a}-(x{h:+})²/{b}=1")
        }
    }
}

fn gen_parabole_valide(rng: &mut Rng) -> String {
    // coefficient directeur non nul (le zéro est testé à part)
    let mut a = rng.pick(9) as i64 - 4;
    if a == 0 {
        a = 1;
    }
    let b = rng.pick(19) as i64 - 9;
    let c = rng.pick(19) as i64 - 9;

    match rng.pick(4) {
        0 => format!("y={a}x²{b:+}x{c:+}"),
        1 => format!("x={a}y²{b:+}y{c:+}"),
        2 => format!("y={a}(x{b:+})²{c:+}"),
        _ => format!("x={a}(y{b:+})²{c:+}"),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_salade_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut replis = 0usize;
    for _ in 0..400 {
        budget(t0, max);

        let entree = gen_salade(&mut rng);
        let sortie = identifier_equation(&entree);

        // toujours une valeur : un rapport ou le repli, rien d'autre
        assert!(!sortie.is_empty(), "entree={entree:?}");
        if sortie == MESSAGE_NON_RECONNUE {
            replis += 1;
        } else {
            assert!(
                sortie.starts_with("Parabole") || sortie.starts_with("HYPERBOLE"),
                "entree={entree:?} sortie={sortie:?}"
            );
        }
    }

    // la salade doit très majoritairement finir dans le repli
    assert!(replis > 300, "trop peu de replis: {replis}");
}

#[test]
fn fuzz_safe_determinisme() {
    // même seed => mêmes entrées => mêmes sorties
    let tirage = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        (0..120)
            .map(|_| {
                let entree = if rng.coin() {
                    gen_salade(&mut rng)
                } else {
                    gen_hyperbole_valide(&mut rng)
                };
                identifier_equation(&entree)
            })
            .collect()
    };

    assert_eq!(tirage(0xBADC0DE_u64), tirage(0xBADC0DE_u64));
}

#[test]
fn fuzz_safe_hyperboles_valides_toujours_reconnues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xFEED_u64);
    let un = BigRational::from_integer(BigInt::from(1));

    for _ in 0..150 {
        budget(t0, max);

        let entree = gen_hyperbole_valide(&mut rng);
        match reconnait(&entree) {
            Reconnaissance::Hyperbole(h) => {
                assert!(h.e2() > un, "entree={entree:?} : e² doit rester > 1");
                assert!(h.c2() > h.a2, "entree={entree:?}");
                assert!(h.c2() > h.b2, "entree={entree:?}");
            }
            autre => panic!("entree={entree:?} : attendu une hyperbole, reçu {autre:?}"),
        }
    }
}

#[test]
fn fuzz_safe_paraboles_valides_toujours_reconnues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xD1CE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let entree = gen_parabole_valide(&mut rng);
        match reconnait(&entree) {
            Reconnaissance::Parabole(p) => {
                // défense en profondeur : p reste fini et strictement positif
                assert!(p.p.is_positive(), "entree={entree:?}");
            }
            autre => panic!("entree={entree:?} : attendu une parabole, reçu {autre:?}"),
        }
    }
}

#[test]
fn fuzz_safe_entree_longue_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // longue salade répétitive : le balayage reste linéaire, pas de gel
    let entree = "x²/9-".repeat(800);
    let sortie = identifier_equation(&entree);
    budget(t0, max);

    assert_eq!(sortie, MESSAGE_NON_RECONNUE);
}
