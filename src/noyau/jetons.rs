// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operateur {
    /// Reconnaît exactement `+ - * /` (rien d’autre, pas d’espaces).
    pub fn depuis(morceau: &str) -> Option<Self> {
        match morceau {
            "+" => Some(Operateur::Plus),
            "-" => Some(Operateur::Minus),
            "*" => Some(Operateur::Star),
            "/" => Some(Operateur::Slash),
            _ => None,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operateur::Plus => "+",
            Operateur::Minus => "-",
            Operateur::Star => "*",
            Operateur::Slash => "/",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),

    // infix seulement
    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(x) => write!(f, "{x}"),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Découpe l’entrée sur l’espace simple.
/// Deux espaces consécutifs donnent un morceau vide (refusé plus tard par `classer`).
pub fn decouper(entree: &str) -> Vec<&str> {
    entree.split(' ').collect()
}

/// Nombre fini (entier ou décimal, signe optionnel). `inf`, `NaN`, `1e400` => None.
pub fn lire_nombre(morceau: &str) -> Option<f64> {
    morceau.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Classe un morceau : opérateur d’abord, puis nombre, sinon erreur.
pub fn classer(morceau: &str) -> Result<Tok, ErreurCalcul> {
    if let Some(op) = Operateur::depuis(morceau) {
        return Ok(Tok::Op(op));
    }
    lire_nombre(morceau)
        .map(Tok::Num)
        .ok_or_else(|| ErreurCalcul::MalformedToken(morceau.to_string()))
}

/// Comme `classer`, mais reconnaît aussi `(` et `)`.
pub fn classer_infixe(morceau: &str) -> Result<Tok, ErreurCalcul> {
    match morceau {
        "(" => Ok(Tok::LPar),
        ")" => Ok(Tok::RPar),
        _ => classer(morceau),
    }
}

/// Un morceau fait uniquement de parenthèses ("((", "()))(") est éclaté
/// en une parenthèse par caractère. Les autres morceaux sont rendus tels quels.
pub fn eclater_parentheses(morceau: &str) -> Vec<&str> {
    let que_des_parentheses =
        !morceau.is_empty() && morceau.bytes().all(|b| b == b'(' || b == b')');

    if que_des_parentheses {
        // ASCII seulement => un octet par caractère
        (0..morceau.len()).map(|i| &morceau[i..i + 1]).collect()
    } else {
        vec![morceau]
    }
}

/// Format utilitaire (traces) : liste de jetons en texte.
pub fn format_tokens(morceaux: &[&str]) -> String {
    morceaux
        .iter()
        .map(|m| if m.is_empty() { "∅" } else { *m })
        .collect::<Vec<_>>()
        .join(" ")
}
