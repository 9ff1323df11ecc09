//! Noyau de la calculatrice multi-fonctions
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (infixe + formes à espaces)
//! - rpn.rs        : shunting-yard (infixe -> postfixe / préfixe)
//! - pile.rs       : machine à pile générique (préfixe / postfixe)
//! - conversion.rs : Notation + les six conversions
//! - eval.rs       : évaluation flottante
//! - base.rs       : bases 2/8/10/16, DCB, 2421
//! - unites.rs     : unités physiques, devises, coût
//! - erreur.rs     : ErreurNoyau

pub mod base;
pub mod conversion;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod pile;
pub mod rpn;
pub mod unites;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use base::{convertir_base, Base, SortieBase};
pub use conversion::{convert, Notation};
pub use eval::{evaluate, format_resultat};
pub use unites::{cout, lire_valeur, Convertisseur, Grandeur};
