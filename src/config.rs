//! src/config.rs
//!
//! Configuration utilisateur (JSON), tous les champs optionnels.
//!
//! Exemple :
//! {
//!   "onglet": "unites",
//!   "notation": "postfix",
//!   "taux_devises": { "USD": 0.0119, "CHF": 0.0106 }
//! }
//!
//! Emplacement (natif) : `--config <chemin>` ou `<config_dir>/calculatrice_multi/config.json`.
//! En wasm32 : valeurs par défaut.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::app::etat::Onglet;
use crate::noyau::Notation;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Onglet affiché au lancement.
    pub onglet: Onglet,
    /// Notation proposée par défaut (évaluation + source de conversion).
    pub notation: Notation,
    /// Surcharges de taux de devises (code -> taux relatif à l’INR).
    pub taux_devises: BTreeMap<String, f64>,
}

impl Config {
    pub fn depuis_json(texte: &str) -> serde_json::Result<Self> {
        serde_json::from_str(texte)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::{Path, PathBuf};

    use anyhow::Context;
    use tracing::{debug, info};

    use super::Config;

    const DOSSIER: &str = "calculatrice_multi";
    const FICHIER: &str = "config.json";

    pub fn chemin_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DOSSIER).join(FICHIER))
    }

    impl Config {
        /// Charge la configuration.
        /// - chemin explicite : doit exister et être valide
        /// - chemin par défaut absent : valeurs par défaut
        pub fn charger(explicite: Option<&Path>) -> anyhow::Result<Config> {
            Config::charger_depuis(explicite, chemin_defaut())
        }

        /// `charger` avec un chemin par défaut donné.
        pub(crate) fn charger_depuis(
            explicite: Option<&Path>,
            defaut: Option<PathBuf>,
        ) -> anyhow::Result<Config> {
            let chemin = match explicite {
                Some(p) => p.to_path_buf(),
                None => match defaut {
                    Some(p) if p.exists() => p,
                    _ => {
                        debug!("pas de fichier de configuration, valeurs par défaut");
                        return Ok(Config::default());
                    }
                },
            };

            let texte = std::fs::read_to_string(&chemin)
                .with_context(|| format!("lecture de {}", chemin.display()))?;
            let cfg = Config::depuis_json(&texte)
                .with_context(|| format!("configuration invalide : {}", chemin.display()))?;

            info!(chemin = %chemin.display(), "configuration chargée");
            Ok(cfg)
        }
    }
}
