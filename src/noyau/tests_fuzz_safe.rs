//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - oracle : chaque expression bien formée est générée avec sa valeur directe
//! - invariant clé : une suite de jetons quelconque ne fait jamais paniquer le noyau

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval::eval_expression;
use super::rpn::{convert_to_postfix, evaluate_postfix};
use super::table::{FONCTIONS, TABLE_OPERATEURS};

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
    fn choose<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.pick(items.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> (String, f64) {
    match rng.pick(6) {
        0 => ("e".to_string(), std::f64::consts::E),
        1 => ("π".to_string(), std::f64::consts::PI),
        2 => {
            let n = rng.pick(20) as i32 - 10;
            (format!("{n}"), f64::from(n))
        }
        _ => {
            let n = rng.pick(1000);
            let s = format!("{}.{:02}", n / 100, n % 100);
            let v = s.parse().unwrap();
            (s, v)
        }
    }
}

/// Expression entièrement parenthésée + sa valeur calculée directement.
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(8) {
        0 => gen_atom(rng),
        1 => {
            let (s, x) = gen_expr(rng, depth - 1);
            let (texte, v) = match rng.pick(4) {
                0 => ("sin", x.sin()),
                1 => ("cos", x.cos()),
                2 => ("arctan", x.atan()),
                _ => ("√", x.sqrt()),
            };
            (format!("{texte} ( {s} )"), v)
        }
        _ => {
            let (a, x) = gen_expr(rng, depth - 1);
            let (b, y) = gen_expr(rng, depth - 1);
            let (op, v) = match rng.pick(5) {
                0 => ("+", x + y),
                1 => ("-", x - y),
                2 => ("*", x * y),
                3 => ("/", x / y),
                _ => ("^", x.powf(y)),
            };
            (format!("( {a} {op} {b} )"), v)
        }
    }
}

/// Suite de jetons quelconque (souvent mal formée).
fn gen_bruit(rng: &mut Rng, n: usize) -> Vec<String> {
    let mut vocab: Vec<&str> = vec!["(", ")", "1", "-2", "0.5", "e", "π", "x", "x^2", ""];
    vocab.extend(TABLE_OPERATEURS.iter().map(|(s, _)| *s));
    vocab.extend(FONCTIONS.iter().copied());

    (0..n).map(|_| rng.choose(&vocab).to_string()).collect()
}

fn meme_valeur(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_oracle_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, direct) = gen_expr(&mut rng, 5);
        let (v, _d) = eval_expression(&expr)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        assert!(
            meme_valeur(v, direct),
            "expr={expr:?} pipeline={v} direct={direct}"
        );
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let n = rng.pick(12) as usize;
        let jetons = gen_bruit(&mut rng, n);
        let rpn = convert_to_postfix(&jetons);

        // jamais de jeton inconnu en sortie de conversion
        assert!(
            rpn.iter().all(|j| j != "x" && j != "x^2" && !j.is_empty()),
            "jetons={jetons:?} rpn={rpn:?}"
        );

        match evaluate_postfix::<f64, _>(&rpn) {
            Ok(_) => seen_ok += 1,
            Err(
                ErreurCalcul::Underflow { .. }
                | ErreurCalcul::PileVide
                | ErreurCalcul::OperandesExcedentaires { .. },
            ) => seen_err += 1,
            Err(e) => panic!("erreur non attendue: jetons={jetons:?} err={e}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 0, "aucun succès vu: bruit trop “sale”");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);

    for _ in 0..50 {
        let (ea, _) = gen_expr(&mut a, 4);
        let (eb, _) = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);

        let va = eval_expression(&ea).map(|(v, _)| v.to_bits());
        let vb = eval_expression(&eb).map(|(v, _)| v.to_bits());
        assert_eq!(va, vb);
    }
}

#[test]
fn fuzz_safe_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // chaîne plate : pile d’opérateurs bornée (associativité gauche)
    let expr = vec!["0.5"; 800].join(" + ");
    budget(t0, max);

    let (v, _d) = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 400.0);
}
