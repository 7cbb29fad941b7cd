//! Noyau — évaluation (pipeline)
//!
//! découpe -> trace des jetons -> réduction selon le mode (préfixe | infixe)
//!
//! Les piles de travail naissent et meurent dans chaque réduction :
//! cette fonction est pure, sans état partagé entre deux appels.

use super::erreur::ErreurCalcul;
use super::infixe::evaluer_infixe;
use super::jetons::{decouper, format_tokens};
use super::mode::Mode;
use super::prefixe::evaluer_prefixe;

/// API publique : évalue `entree` dans la notation `mode`.
///
/// Retourne la valeur numérique (NaN pour un préfixe d’un seul morceau non numérique),
/// ou l’erreur de la première étape qui échoue.
pub fn eval_expression(entree: &str, mode: Mode) -> Result<f64, ErreurCalcul> {
    let morceaux = decouper(entree);
    log::debug!("{mode} : jetons [{}]", format_tokens(&morceaux));

    let resultat = match mode {
        Mode::Prefix => evaluer_prefixe(&morceaux),
        Mode::Infix => evaluer_infixe(&morceaux),
    };

    match &resultat {
        Ok(v) => log::debug!("{mode} : {entree:?} = {v}"),
        Err(e) => log::debug!("{mode} : {entree:?} échoue : {e}"),
    }

    resultat
}
