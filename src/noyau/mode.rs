// src/noyau/mode.rs

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalcul;

/// Notation attendue par `evaluate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Notation polonaise : `+ 1 * 2 3`
    #[default]
    Prefix,
    /// Notation parenthésée : `( 1 + ( 2 * 3 ) )`
    Infix,
}

impl Mode {
    /// Forme “type” (celle qu’on passe à `set_mode`).
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Prefix => "prefix",
            Mode::Infix => "infix",
        }
    }
}

/// Insensible à la casse : "prefix", "Prefix", "INFIX"...
impl FromStr for Mode {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("prefix") {
            Ok(Mode::Prefix)
        } else if s.eq_ignore_ascii_case("infix") {
            Ok(Mode::Infix)
        } else {
            Err(ErreurCalcul::UnsupportedMode(s.to_string()))
        }
    }
}

/// Libellé affiché (sélecteur de mode).
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Prefix => write!(f, "Prefix"),
            Mode::Infix => write!(f, "Infix"),
        }
    }
}
