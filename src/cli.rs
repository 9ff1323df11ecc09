//! src/cli.rs
//!
//! Ligne de commande (natif seulement).
//! - sans sous-commande : ouvre la fenêtre
//! - avec sous-commande : une opération du noyau, résultat sur stdout

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::Config;
use crate::noyau::{
    self, convertir_base, cout, format_resultat, lire_valeur, Base, Convertisseur, Grandeur,
    Notation, SortieBase,
};

#[derive(Debug, Parser)]
#[command(name = "calculatrice_multi", version, about = "Calculatrice : notations, bases, unités")]
pub struct Cli {
    /// Fichier de configuration JSON
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosité du journal (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub commande: Option<Commande>,
}

#[derive(Debug, Subcommand)]
pub enum Commande {
    /// Évalue une expression (infix, prefix, postfix)
    Eval {
        /// Notation de l’expression (défaut : configuration)
        #[arg(short, long)]
        notation: Option<Notation>,
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Convertit une expression d’une notation à une autre
    Convertir {
        #[arg(long)]
        de: Notation,
        #[arg(long)]
        vers: Notation,
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Convertit un entier entre bases (bin, oct, dec, hex -> ... , bcd, 2421)
    Base {
        #[arg(long)]
        de: Base,
        #[arg(long)]
        vers: SortieBase,
        #[arg(allow_hyphen_values = true)]
        nombre: String,
    },

    /// Convertit une valeur entre deux unités d’une grandeur
    Unite {
        grandeur: Grandeur,
        de: String,
        vers: String,
        #[arg(allow_hyphen_values = true)]
        valeur: String,
    },

    /// Coût d’un poids en grammes au prix du kg
    Cout { grammes: String, prix_kg: String },
}

/// Exécute une sous-commande et renvoie la ligne à afficher.
pub fn executer(cmd: Commande, config: &Config) -> anyhow::Result<String> {
    let ligne = match cmd {
        Commande::Eval { notation, expression } => {
            let n = notation.unwrap_or(config.notation);
            let v = noyau::evaluate(&expression, n).context("expression invalide")?;
            format_resultat(v)
        }

        Commande::Convertir { de, vers, expression } => {
            noyau::convert(&expression, de, vers).context("expression invalide")?
        }

        Commande::Base { de, vers, nombre } => {
            convertir_base(&nombre, de, vers).context("format de nombre invalide")?
        }

        Commande::Unite {
            grandeur,
            de,
            vers,
            valeur,
        } => {
            let c = Convertisseur::avec_taux_devises(&config.taux_devises);
            let i = c.indice_unite(grandeur, &de).with_context(|| {
                format!("unités disponibles : {}", c.unites(grandeur).join(", "))
            })?;
            let j = c.indice_unite(grandeur, &vers).with_context(|| {
                format!("unités disponibles : {}", c.unites(grandeur).join(", "))
            })?;
            let v = lire_valeur(&valeur)?;
            c.convertir(grandeur, i, j, v)?.to_string()
        }

        Commande::Cout { grammes, prix_kg } => {
            cout(lire_valeur(&grammes)?, lire_valeur(&prix_kg)?)?.to_string()
        }
    };

    Ok(ligne)
}
