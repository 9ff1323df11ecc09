// src/noyau/conversion.rs
//
// Conversions entre notations.
// - infixe -> postfixe / préfixe : shunting-yard (rpn.rs)
// - postfixe/préfixe -> autre forme : réduction à pile (pile.rs)
//
// Sortie infixe : chaque opération binaire est parenthésée, sans espaces : "(3+4)".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::erreur::ErreurNoyau;
use super::jetons::tokenize_espaces;
use super::pile::{reduire, Sens};
use super::rpn::{infix_to_postfix, infix_to_prefix};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notation {
    #[default]
    #[serde(rename = "infix", alias = "infixe")]
    Infixe,
    #[serde(rename = "prefix", alias = "prefixe")]
    Prefixe,
    #[serde(rename = "postfix", alias = "postfixe")]
    Postfixe,
}

impl Notation {
    pub const TOUTES: [Notation; 3] = [Notation::Infixe, Notation::Prefixe, Notation::Postfixe];

    pub fn libelle(self) -> &'static str {
        match self {
            Notation::Infixe => "Infixe",
            Notation::Prefixe => "Préfixe",
            Notation::Postfixe => "Postfixe",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}

impl FromStr for Notation {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "infix" | "infixe" => Ok(Notation::Infixe),
            "prefix" | "prefixe" | "préfixe" => Ok(Notation::Prefixe),
            "postfix" | "postfixe" | "rpn" => Ok(Notation::Postfixe),
            _ => Err(ErreurNoyau::NotationInconnue(s.to_string())),
        }
    }
}

fn feuille(s: &str) -> Result<String, ErreurNoyau> {
    Ok(s.to_string())
}

pub fn postfix_to_infix(expr: &str) -> Result<String, ErreurNoyau> {
    reduire(
        &tokenize_espaces(expr),
        Sens::GaucheDroite,
        feuille,
        |op, a, b| Ok(format!("({a}{op}{b})")),
    )
}

pub fn prefix_to_infix(expr: &str) -> Result<String, ErreurNoyau> {
    reduire(
        &tokenize_espaces(expr),
        Sens::DroiteGauche,
        feuille,
        |op, a, b| Ok(format!("({a}{op}{b})")),
    )
}

pub fn postfix_to_prefix(expr: &str) -> Result<String, ErreurNoyau> {
    reduire(
        &tokenize_espaces(expr),
        Sens::GaucheDroite,
        feuille,
        |op, a, b| Ok(format!("{op} {a} {b}")),
    )
}

pub fn prefix_to_postfix(expr: &str) -> Result<String, ErreurNoyau> {
    reduire(
        &tokenize_espaces(expr),
        Sens::DroiteGauche,
        feuille,
        |op, a, b| Ok(format!("{a} {b} {op}")),
    )
}

/// API publique : convertit `expr` de la notation `de` vers `vers`.
///
/// `de == vers` : l’entrée est rendue telle quelle (aucune analyse).
pub fn convert(expr: &str, de: Notation, vers: Notation) -> Result<String, ErreurNoyau> {
    use Notation::*;

    let res = match (de, vers) {
        (a, b) if a == b => Ok(expr.to_string()),
        (Infixe, Postfixe) => infix_to_postfix(expr),
        (Infixe, Prefixe) => infix_to_prefix(expr),
        (Postfixe, Infixe) => postfix_to_infix(expr),
        (Postfixe, Prefixe) => postfix_to_prefix(expr),
        (Prefixe, Infixe) => prefix_to_infix(expr),
        (Prefixe, Postfixe) => prefix_to_postfix(expr),
        _ => unreachable!("toutes les paires distinctes sont couvertes"),
    };

    match &res {
        Ok(s) => debug!(%de, %vers, entree = expr, sortie = %s, "conversion"),
        Err(e) => debug!(%de, %vers, entree = expr, erreur = %e, "conversion refusée"),
    }
    res
}
