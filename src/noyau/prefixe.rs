// src/noyau/prefixe.rs
//
// Réduction préfixe (notation polonaise) : `+ 1 * 2 3`
//
// Règles:
// - 1 morceau  : le nombre lui-même, ou NaN s’il n’est pas numérique (pas une erreur)
// - 2 morceaux : toujours mal formé
// - 3 morceaux : triplet direct `op a b`
// - 4 et plus  : lecture depuis la FIN, réduction dès que (2 opérandes + 1 opérateur),
//                résultat réinséré au FOND de la pile des opérandes ;
//                puis inversion, puis vidange par SOMME des résultats.
//
// NOTE: la vidange additionne les réductions restantes au lieu de poursuivre
// une vraie évaluation préfixe. C’est le comportement attendu
// (ex: "- / 10 + 1 1 * 1 2" => 3), à ne pas “corriger”.

use super::erreur::ErreurCalcul;
use super::jetons::{classer, lire_nombre, Operateur};
use super::operation::appliquer;
use super::piles::{Ordre, Piles};

pub fn evaluer_prefixe(morceaux: &[&str]) -> Result<f64, ErreurCalcul> {
    match morceaux {
        [seul] => Ok(lire_nombre(seul).unwrap_or(f64::NAN)),

        [_, _] => Err(mal_forme(morceaux)),

        [op, a, b] => match (Operateur::depuis(op), lire_nombre(a), lire_nombre(b)) {
            (Some(op), Some(a), Some(b)) => appliquer(op, a, b),
            _ => Err(mal_forme(morceaux)),
        },

        _ => reduction_generale(morceaux),
    }
}

fn reduction_generale(morceaux: &[&str]) -> Result<f64, ErreurCalcul> {
    let mut restants: Vec<&str> = morceaux.to_vec();
    let mut piles = Piles::new();

    // 1) Consommation depuis la fin
    //    (la condition porte sur les morceaux restants : une réduction possible
    //    au moment où ils sont épuisés est laissée à la vidange)
    while !restants.is_empty() {
        if piles.prete() {
            let valeur = piles.reduire(Ordre::Direct)?;
            piles.operandes.push_front(valeur);
        } else if let Some(morceau) = restants.pop() {
            piles.empiler(classer(morceau)?)?;
        }
    }

    // 2) Inversion unique
    piles.operandes.make_contiguous().reverse();

    // 3) Vidange par somme
    let mut total = 0.0;
    while piles.prete() {
        total += piles.reduire(Ordre::Direct)?;
    }

    Ok(total)
}

fn mal_forme(morceaux: &[&str]) -> ErreurCalcul {
    ErreurCalcul::MalformedInput(morceaux.join(" "))
}
