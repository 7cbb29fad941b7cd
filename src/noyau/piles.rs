// src/noyau/piles.rs
//
// Piles de travail d’UNE évaluation (créées vides, jetées à la fin).
// Aucune n’est gardée dans la calculatrice : rien ne fuit d’un appel à l’autre,
// même après une erreur.

use std::collections::VecDeque;

use super::erreur::ErreurCalcul;
use super::jetons::{Operateur, Tok};
use super::operation::appliquer;

/// Ordre des opérandes passé à l’opération atomique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ordre {
    /// (dernier empilé, avant-dernier) : préfixe
    Direct,
    /// (avant-dernier, dernier empilé) : infixe
    Inverse,
}

#[derive(Debug, Default)]
pub struct Piles {
    // VecDeque : le préfixe réinsère au fond (push_front)
    pub operandes: VecDeque<f64>,
    pub operateurs: Vec<Operateur>,
}

impl Piles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Range un jeton classé dans la bonne pile.
    pub fn empiler(&mut self, tok: Tok) -> Result<(), ErreurCalcul> {
        match tok {
            Tok::Num(x) => self.operandes.push_back(x),
            Tok::Op(op) => self.operateurs.push(op),
            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::MalformedToken(tok.to_string())),
        }
        Ok(())
    }

    /// Deux opérandes et un opérateur disponibles.
    pub fn prete(&self) -> bool {
        self.operandes.len() >= 2 && !self.operateurs.is_empty()
    }

    /// Dépile deux opérandes + un opérateur et applique l’opération.
    pub fn reduire(&mut self, ordre: Ordre) -> Result<f64, ErreurCalcul> {
        // tailles AVANT dépilement (pour le message)
        let sous_alimentation = ErreurCalcul::StackUnderflow {
            operandes: self.operandes.len(),
            operateurs: self.operateurs.len(),
        };

        let (Some(premier), Some(second), Some(op)) = (
            self.operandes.pop_back(),
            self.operandes.pop_back(),
            self.operateurs.pop(),
        ) else {
            return Err(sous_alimentation);
        };

        match ordre {
            Ordre::Direct => appliquer(op, premier, second),
            Ordre::Inverse => appliquer(op, second, premier),
        }
    }
}
