// src/noyau/infixe.rs
//
// Réduction infixe parenthésée : `( 1 + ( 2 * 3 ) )`
//
// Lecture de gauche à droite :
// - '(' : profondeur + 1
// - ')' : profondeur - 1 (négative => erreur immédiate), puis réduction des
//         deux derniers opérandes avec le dernier opérateur, ordre inversé
//         (l’avant-dernier empilé est à gauche), résultat ré-empilé au sommet
// - sinon : nombre ou opérateur, rangé dans sa pile
//
// Fin : profondeur non nulle => erreur ; sinon la réponse est le PREMIER opérande.
// Pas de priorité entre opérateurs : seules les parenthèses décident.
//
// NOTE: une entrée faite UNIQUEMENT de parenthèses ("((", "()))(") ne peut rien
// calculer ; son équilibre est vérifié d’abord, sinon "()" y réduirait des piles vides.

use super::erreur::ErreurCalcul;
use super::jetons::{classer_infixe, eclater_parentheses, Tok};
use super::piles::{Ordre, Piles};

pub fn evaluer_infixe(morceaux: &[&str]) -> Result<f64, ErreurCalcul> {
    let desequilibre = || ErreurCalcul::UnbalancedParentheses(morceaux.join(" "));

    let jetons: Vec<&str> = morceaux
        .iter()
        .flat_map(|&m| eclater_parentheses(m))
        .collect();

    let que_des_parentheses = jetons.iter().all(|&j| j == "(" || j == ")");
    if que_des_parentheses && !parentheses_equilibrees(&jetons) {
        return Err(desequilibre());
    }

    let mut piles = Piles::new();
    let mut profondeur: usize = 0;

    for morceau in jetons {
        match classer_infixe(morceau)? {
            Tok::LPar => profondeur += 1,
            Tok::RPar => {
                profondeur = profondeur.checked_sub(1).ok_or_else(desequilibre)?;
                let valeur = piles.reduire(Ordre::Inverse)?;
                piles.operandes.push_back(valeur);
            }
            tok => piles.empiler(tok)?,
        }
    }

    if profondeur != 0 {
        return Err(desequilibre());
    }

    piles
        .operandes
        .front()
        .copied()
        .ok_or(ErreurCalcul::StackUnderflow {
            operandes: 0,
            operateurs: piles.operateurs.len(),
        })
}

/// Compteur de profondeur : jamais négatif, nul à la fin.
fn parentheses_equilibrees(jetons: &[&str]) -> bool {
    let mut profondeur: usize = 0;

    for jeton in jetons {
        match *jeton {
            "(" => profondeur += 1,
            ")" => match profondeur.checked_sub(1) {
                Some(p) => profondeur = p,
                None => return false,
            },
            _ => {}
        }
    }

    profondeur == 0
}
