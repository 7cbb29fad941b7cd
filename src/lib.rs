//! Calculatrice à deux notations (préfixe / infixe parenthésée).
//!
//! L’interface (web ou terminal) ne connaît que deux opérations :
//! `Calculatrice::set_mode` et `Calculatrice::evaluate`.

pub mod noyau;

#[cfg(target_arch = "wasm32")]
mod web;

pub use noyau::{eval_expression, format_resultat, Calculatrice, ErreurCalcul, Mode};
