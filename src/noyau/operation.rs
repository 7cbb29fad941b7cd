// src/noyau/operation.rs
//
// Opération atomique : un opérateur, deux opérandes dans un ordre fixé.

use super::erreur::ErreurCalcul;
use super::jetons::Operateur;

/// Calcule `a op b`.
///
/// Tout ce qui n’est ni `*`, ni `/`, ni `+` tombe dans la soustraction.
/// Seule division par zéro échoue.
pub fn appliquer(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    match op {
        Operateur::Star => Ok(a * b),
        Operateur::Slash => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionByZero);
            }
            Ok(a / b)
        }
        Operateur::Plus => Ok(a + b),
        _ => Ok(a - b),
    }
}
