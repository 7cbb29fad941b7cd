//! Tests de scénarios : valeurs attendues, erreurs, idempotence.
//!
//! Tout passe par l’API publique (`Calculatrice`) comme le ferait l’UI.

use proptest::prelude::*;

use super::{Calculatrice, ErreurCalcul};

fn prefixe() -> Calculatrice {
    Calculatrice::new()
}

fn infixe() -> Calculatrice {
    let mut calc = Calculatrice::new();
    calc.set_mode("infix");
    calc
}

fn eval_ok(calc: &Calculatrice, entree: &str) -> f64 {
    calc.evaluate(entree)
        .unwrap_or_else(|e| panic!("entree={entree:?} err={e}"))
}

/* ------------------------ Préfixe ------------------------ */

#[test]
fn sc_prefixe_valeurs() {
    let calc = prefixe();
    assert_eq!(eval_ok(&calc, "+ 1 * 2 3"), 7.0);
    assert_eq!(eval_ok(&calc, "+ 3 2"), 5.0);
    assert_eq!(eval_ok(&calc, "/ 3 2"), 1.5);
    assert_eq!(eval_ok(&calc, "- / 10 + 1 1 * 1 2"), 3.0);
    assert_eq!(eval_ok(&calc, "+ / 3 2 5"), 6.5);
    assert_eq!(eval_ok(&calc, "5"), 5.0);
}

#[test]
fn sc_prefixe_un_operateur_seul_donne_nan() {
    assert!(eval_ok(&prefixe(), "*").is_nan());
}

#[test]
fn sc_prefixe_mal_forme() {
    let calc = prefixe();
    assert!(matches!(
        calc.evaluate("+ 1"),
        Err(ErreurCalcul::MalformedInput(_))
    ));
    assert!(matches!(
        calc.evaluate("1 + 2"),
        Err(ErreurCalcul::MalformedInput(_))
    ));
    assert!(matches!(
        calc.evaluate("+ 1 * 2 trois"),
        Err(ErreurCalcul::MalformedToken(_))
    ));
}

/* ------------------------ Infixe ------------------------ */

#[test]
fn sc_infixe_valeurs() {
    let calc = infixe();
    assert_eq!(eval_ok(&calc, "( 2 + 3 )"), 5.0);
    assert_eq!(eval_ok(&calc, "( 1 + ( 2 * 3 ) )"), 7.0);
    assert_eq!(eval_ok(&calc, "( ( 1 * 2 ) + 3 )"), 5.0);
    assert_eq!(eval_ok(&calc, "( ( ( 1 + 1 ) / 10 ) - ( 1 * 2 ) )"), -1.8);
}

#[test]
fn sc_infixe_parentheses() {
    let calc = infixe();
    assert!(matches!(
        calc.evaluate("(("),
        Err(ErreurCalcul::UnbalancedParentheses(_))
    ));
    assert!(matches!(
        calc.evaluate("()))("),
        Err(ErreurCalcul::UnbalancedParentheses(_))
    ));
}

/* ------------------------ Transverses ------------------------ */

#[test]
fn sc_division_par_zero_dans_les_deux_modes() {
    assert_eq!(prefixe().evaluate("/ 3 0"), Err(ErreurCalcul::DivisionByZero));
    assert_eq!(
        prefixe().evaluate("+ 1 / 3 0 2"),
        Err(ErreurCalcul::DivisionByZero)
    );
    assert_eq!(
        infixe().evaluate("( 3 / 0 )"),
        Err(ErreurCalcul::DivisionByZero)
    );
}

#[test]
fn sc_idempotence_et_pas_de_residu() {
    let calc = prefixe();
    let a = eval_ok(&calc, "- / 10 + 1 1 * 1 2");
    let b = eval_ok(&calc, "- / 10 + 1 1 * 1 2");
    assert_eq!(a, b);
    // un troisième appel indépendant ne voit rien des précédents
    assert_eq!(eval_ok(&calc, "+ 1 * 2 3"), 7.0);

    let calc = infixe();
    assert_eq!(eval_ok(&calc, "( 1 + ( 2 * 3 ) )"), 7.0);
    assert_eq!(eval_ok(&calc, "( 1 + ( 2 * 3 ) )"), 7.0);
    assert_eq!(eval_ok(&calc, "( 2 + 3 )"), 5.0);
}

#[test]
fn sc_echec_ne_laisse_rien_derriere() {
    let calc = prefixe();
    assert!(calc.evaluate("+ 1 * 2 x").is_err());
    assert_eq!(eval_ok(&calc, "+ 1 * 2 3"), 7.0);

    let calc = infixe();
    // échoue après avoir empilé 1, 2 et '+'
    assert!(calc.evaluate("( 1 + 2 ) ( 5 / 0 )").is_err());
    assert_eq!(eval_ok(&calc, "( 2 + 3 )"), 5.0);
}

#[test]
fn sc_mode_inconnu() {
    let mut calc = Calculatrice::new();
    calc.set_mode("polonaise");
    assert_eq!(
        calc.evaluate("+ 1 2"),
        Err(ErreurCalcul::UnsupportedMode("polonaise".into()))
    );
}

/* ------------------------ Propriétés (triplets préfixes) ------------------------ */

fn operateur() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/'])
}

proptest! {
    #[test]
    fn prop_triplet_prefixe_correct(
        op in operateur(),
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
    ) {
        prop_assume!(!(op == '/' && b == 0.0));

        let attendu = match op {
            '+' => a + b,
            '-' => a - b,
            '*' => a * b,
            _ => a / b,
        };

        let obtenu = prefixe().evaluate(&format!("{op} {a} {b}"));
        prop_assert_eq!(obtenu, Ok(attendu));
    }

    #[test]
    fn prop_division_par_zero_prefixe(a in -1.0e6f64..1.0e6) {
        prop_assert_eq!(
            prefixe().evaluate(&format!("/ {a} 0")),
            Err(ErreurCalcul::DivisionByZero)
        );
    }

    #[test]
    fn prop_nombre_seul_prefixe(a in -1.0e9f64..1.0e9) {
        prop_assert_eq!(prefixe().evaluate(&format!("{a}")), Ok(a));
    }
}
