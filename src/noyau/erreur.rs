// src/noyau/erreur.rs
//
// Erreurs du noyau : ensemble fermé, chaque variante porte son contexte
// (jeton fautif, entrée brute, mode demandé, tailles de piles).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Le mode mémorisé n’est ni prefix ni infix (détecté à l’évaluation).
    #[error("mode inattendu '{0}' : choisir prefix ou infix avant d’évaluer")]
    UnsupportedMode(String),

    /// Un morceau n’est ni un opérateur, ni un nombre (ni une parenthèse en infix).
    #[error("jeton invalide (ni nombre, ni opérateur) : '{0}'")]
    MalformedToken(String),

    /// Expression préfixe de longueur 2, ou triplet qui n’est pas `op a b`.
    #[error("entrée mal formée : '{0}'")]
    MalformedInput(String),

    /// Réduction demandée sans deux opérandes et un opérateur (tailles avant dépilement).
    #[error("opération impossible : il faut deux opérandes et un opérateur (restants : {operandes} opérande(s), {operateurs} opérateur(s))")]
    StackUnderflow { operandes: usize, operateurs: usize },

    /// Diviseur nul dans une opération atomique `/`.
    #[error("division par zéro")]
    DivisionByZero,

    /// Infixe : ')' sans '(' ouverte, ou '(' restée ouverte en fin d’entrée.
    #[error("parenthèses non équilibrées : '{0}'")]
    UnbalancedParentheses(String),
}
