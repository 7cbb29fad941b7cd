//! Noyau — calculatrice préfixe / infixe
//!
//! Organisation interne :
//! - erreur.rs       : erreurs (ensemble fermé)
//! - mode.rs         : Mode (Prefix | Infix)
//! - jetons.rs       : découpe + classement (nombre / opérateur / parenthèse)
//! - operation.rs    : opération atomique a op b
//! - piles.rs        : piles locales à une évaluation + réduction (2 opérandes, 1 opérateur)
//! - prefixe.rs      : réduction préfixe (raccourcis 1/2/3 morceaux + cas général)
//! - infixe.rs       : réduction infixe parenthésée
//! - eval.rs         : aiguillage selon le mode
//! - calculatrice.rs : état (mode courant) + API set_mode / evaluate
//! - format.rs       : affichage d’un résultat

pub mod calculatrice;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod infixe;
pub mod jetons;
pub mod mode;
pub mod operation;
pub mod piles;
pub mod prefixe;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use calculatrice::Calculatrice;
pub use erreur::ErreurCalcul;
pub use eval::eval_expression;
pub use format::format_resultat;
pub use mode::Mode;
