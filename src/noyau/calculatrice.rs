//! src/noyau/calculatrice.rs
//!
//! Calculatrice à deux modes (préfixe / infixe).
//!
//! Contrats :
//! - Mode par défaut : prefix.
//! - `set_mode` mémorise la demande telle quelle (aucune validation ici) ;
//!   un mode inconnu n’échoue qu’à l’évaluation (`UnsupportedMode`).
//! - Aucune pile dans la structure : `evaluate` prend `&self`, deux appels
//!   ne peuvent pas se corrompre, même en parallèle.

use super::erreur::ErreurCalcul;
use super::eval::eval_expression;
use super::mode::Mode;

#[derive(Clone, Debug)]
pub struct Calculatrice {
    mode: String,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            mode: Mode::default().as_str().to_string(),
        }
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change le mode courant (valeur brute, persistante jusqu’au prochain appel).
    pub fn set_mode(&mut self, mode: impl Into<String>) {
        self.mode = mode.into();
        log::info!("mode de la calculatrice : {}", self.mode);
    }

    /// Mode tel que demandé (brut).
    pub fn mode_demande(&self) -> &str {
        &self.mode
    }

    /// Mode interprété (erreur si inconnu).
    pub fn mode(&self) -> Result<Mode, ErreurCalcul> {
        self.mode.parse()
    }

    /// Évalue une entrée dans le mode courant.
    pub fn evaluate(&self, entree: &str) -> Result<f64, ErreurCalcul> {
        let mode = self.mode()?;
        eval_expression(entree, mode)
    }
}
