//! Campagne de propriétés : expressions infixes aléatoires (seed fixe).
//!
//! - RNG déterministe (StdRng, seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants : aller-retour infixe/postfixe, accord des évaluateurs,
//!   chaîne préfixe -> postfixe identique au shunting-yard direct

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::conversion::{postfix_to_infix, postfix_to_prefix, prefix_to_infix, prefix_to_postfix};
use super::eval::{evaluate_infix, evaluate_postfix, evaluate_prefix};
use super::rpn::{infix_to_postfix, infix_to_prefix};

const GRAINE: u64 = 0x5eed_ca1c;
const CAS: usize = 2_000;
const PROFONDEUR_MAX: u32 = 5;

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn gen_nombre(rng: &mut StdRng) -> String {
    let entier = rng.gen_range(0..100u32);
    if rng.gen_bool(0.3) {
        format!("{entier}.{}", rng.gen_range(1..100u32))
    } else {
        format!("{entier}")
    }
}

/// Expression infixe valide (parenthèses équilibrées, opérateurs binaires seulement).
fn gen_infixe(rng: &mut StdRng, profondeur: u32) -> String {
    if profondeur == 0 || rng.gen_bool(0.3) {
        return gen_nombre(rng);
    }

    let op = ['+', '-', '*', '/'][rng.gen_range(0..4)];
    let a = gen_infixe(rng, profondeur - 1);
    let b = gen_infixe(rng, profondeur - 1);

    match rng.gen_range(0..3) {
        0 => format!("({a}{op}{b})"),
        1 => format!("{a} {op} {b}"),
        _ => format!("{a}{op}{b}"),
    }
}

/// Égalité flottante tolérante (même arbre, ordre d’évaluation identique => égalité
/// exacte attendue ; la tolérance couvre les ré-associations d’un parenthésage différent).
fn proches(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn prop_aller_retour_infixe_postfixe() {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(GRAINE);

    for _ in 0..CAS {
        budget(start, Duration::from_secs(10));

        let e = gen_infixe(&mut rng, PROFONDEUR_MAX);
        let postfixe = infix_to_postfix(&e).unwrap_or_else(|err| panic!("expr={e:?} err={err}"));
        let retour = postfix_to_infix(&postfixe).unwrap_or_else(|err| panic!("expr={e:?} err={err}"));

        // même valeur (ou même échec : division par zéro)
        match (evaluate_infix(&e), evaluate_infix(&retour)) {
            (Ok(a), Ok(b)) => assert!(proches(a, b), "expr={e:?} retour={retour:?} {a} != {b}"),
            (Err(a), Err(b)) => assert_eq!(a, b, "expr={e:?}"),
            (a, b) => panic!("expr={e:?} retour={retour:?} : {a:?} vs {b:?}"),
        }

        // le postfixe de la forme parenthésée est identique jeton pour jeton
        assert_eq!(infix_to_postfix(&retour).unwrap(), postfixe, "expr={e:?}");
    }
}

#[test]
fn prop_accord_des_evaluateurs() {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(GRAINE ^ 1);

    for _ in 0..CAS {
        budget(start, Duration::from_secs(10));

        let e = gen_infixe(&mut rng, PROFONDEUR_MAX);
        let postfixe = infix_to_postfix(&e).unwrap();
        let prefixe = infix_to_prefix(&e).unwrap();

        let via_infixe = evaluate_infix(&e);
        assert_eq!(via_infixe, evaluate_postfix(&postfixe), "expr={e:?}");
        assert_eq!(via_infixe, evaluate_prefix(&prefixe), "expr={e:?} prefixe={prefixe:?}");

        if let Ok(v) = via_infixe {
            assert!(v.is_finite());
        }
    }
}

#[test]
fn prop_chaines_de_conversion() {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(GRAINE ^ 2);

    for _ in 0..CAS {
        budget(start, Duration::from_secs(10));

        let e = gen_infixe(&mut rng, PROFONDEUR_MAX);
        let postfixe = infix_to_postfix(&e).unwrap();
        let prefixe = infix_to_prefix(&e).unwrap();

        assert_eq!(prefix_to_postfix(&prefixe).unwrap(), postfixe, "expr={e:?}");
        assert_eq!(postfix_to_prefix(&postfixe).unwrap(), prefixe, "expr={e:?}");
        assert_eq!(
            prefix_to_infix(&prefixe).unwrap(),
            postfix_to_infix(&postfixe).unwrap(),
            "expr={e:?}"
        );
    }
}

#[test]
fn prop_bruit_jamais_de_panique() {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(GRAINE ^ 3);
    let alphabet: Vec<char> = "0123456789.+-*/() x^".chars().collect();

    for _ in 0..CAS {
        budget(start, Duration::from_secs(10));

        let len = rng.gen_range(0..24);
        let s: String = (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();

        // seul contrat : aucun panic, et un succès d’évaluation est fini
        for r in [evaluate_infix(&s), evaluate_postfix(&s), evaluate_prefix(&s)] {
            if let Ok(v) = r {
                assert!(v.is_finite(), "entrée={s:?}");
            }
        }
        let _ = infix_to_prefix(&s);
        let _ = postfix_to_infix(&s);
        let _ = prefix_to_postfix(&s);
    }
}
