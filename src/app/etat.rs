//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de chaque onglet (entrées, sélections, message de résultat)
//! et offrir des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Tout l’état d’affichage vit ici et est passé explicitement à la vue.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::noyau::{Base, Convertisseur, Grandeur, Notation, SortieBase};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Onglet {
    #[default]
    Maths,
    Bases,
    Unites,
    Cout,
}

impl Onglet {
    pub const TOUS: [Onglet; 4] = [Onglet::Maths, Onglet::Bases, Onglet::Unites, Onglet::Cout];

    pub fn libelle(self) -> &'static str {
        match self {
            Onglet::Maths => "Mathématiques",
            Onglet::Bases => "Bases",
            Onglet::Unites => "Unités",
            Onglet::Cout => "Coût",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeMaths {
    #[default]
    Evaluation,
    Conversion,
}

#[derive(Clone, Debug, Default)]
pub struct EtatMaths {
    pub mode: ModeMaths,

    // --- évaluation ---
    pub notation: Notation,
    pub expr_eval: String,
    pub resultat_eval: String,

    // --- conversion ---
    pub conv_de: Notation,
    pub conv_vers: Notation,
    pub expr_conv: String,
    pub resultat_conv: String,
}

#[derive(Clone, Debug, Default)]
pub struct EtatBases {
    pub de: Base,
    pub vers: SortieBase,
    pub entree: String,
    pub resultat: String,
}

#[derive(Clone, Debug, Default)]
pub struct EtatUnites {
    pub grandeur: Grandeur,
    // indices dans Convertisseur::unites(grandeur)
    pub de: usize,
    pub vers: usize,
    pub valeur: String,
    pub resultat: String,
}

#[derive(Clone, Debug, Default)]
pub struct EtatCout {
    pub grammes: String,
    pub prix_kg: String,
    pub resultat: String,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub onglet: Onglet,

    pub maths: EtatMaths,
    pub bases: EtatBases,
    pub unites: EtatUnites,
    pub cout: EtatCout,

    // tables d’unités (taux de devises surchargés par la configuration)
    pub convertisseur: Convertisseur,
}

impl AppCalc {
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            onglet: config.onglet,
            convertisseur: Convertisseur::avec_taux_devises(&config.taux_devises),
            ..Default::default()
        };

        app.maths.notation = config.notation;
        app.maths.conv_de = config.notation;
        app.maths.conv_vers = match config.notation {
            Notation::Postfixe => Notation::Infixe,
            _ => Notation::Postfixe,
        };
        app
    }

    /* ------------------------ Actions (état seulement) ------------------------ */

    pub fn set_onglet(&mut self, onglet: Onglet) {
        self.onglet = onglet;
    }

    /// Changer de grandeur = nouveau formulaire : unités remises à zéro, résultat effacé.
    pub fn set_grandeur(&mut self, g: Grandeur) {
        if self.unites.grandeur == g {
            return;
        }
        self.unites = EtatUnites {
            grandeur: g,
            ..Default::default()
        };
    }

    /// Inverse source et cible de la conversion de notation.
    pub fn echanger_notations(&mut self) {
        std::mem::swap(&mut self.maths.conv_de, &mut self.maths.conv_vers);
        self.maths.resultat_conv.clear();
    }

    /// Inverse les unités source et cible.
    pub fn echanger_unites(&mut self) {
        std::mem::swap(&mut self.unites.de, &mut self.unites.vers);
        self.unites.resultat.clear();
    }

    /// Efface entrées et résultats de l’onglet courant.
    pub fn effacer_onglet(&mut self) {
        match self.onglet {
            Onglet::Maths => {
                let m = &mut self.maths;
                m.expr_eval.clear();
                m.resultat_eval.clear();
                m.expr_conv.clear();
                m.resultat_conv.clear();
            }
            Onglet::Bases => {
                self.bases.entree.clear();
                self.bases.resultat.clear();
            }
            Onglet::Unites => {
                self.unites.valeur.clear();
                self.unites.resultat.clear();
            }
            Onglet::Cout => self.cout = EtatCout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_appliquee() {
        let cfg = Config {
            onglet: Onglet::Unites,
            notation: Notation::Postfixe,
            ..Default::default()
        };
        let app = AppCalc::new(&cfg);
        assert_eq!(app.onglet, Onglet::Unites);
        assert_eq!(app.maths.notation, Notation::Postfixe);
        assert_eq!(app.maths.conv_de, Notation::Postfixe);
        assert_eq!(app.maths.conv_vers, Notation::Infixe);
    }

    #[test]
    fn changer_grandeur_reinitialise_le_formulaire() {
        let mut app = AppCalc::default();
        app.unites.de = 2;
        app.unites.valeur = "12".into();
        app.unites.resultat = "12 mètres = ...".into();

        app.set_grandeur(Grandeur::Devise);
        assert_eq!(app.unites.de, 2, "même grandeur : rien ne change");

        app.set_grandeur(Grandeur::Masse);
        assert_eq!(app.unites.grandeur, Grandeur::Masse);
        assert_eq!(app.unites.de, 0);
        assert!(app.unites.valeur.is_empty());
        assert!(app.unites.resultat.is_empty());
    }

    #[test]
    fn echanges() {
        let mut app = AppCalc::default();
        app.maths.conv_vers = Notation::Prefixe;
        app.maths.resultat_conv = "x".into();
        app.echanger_notations();
        assert_eq!(app.maths.conv_de, Notation::Prefixe);
        assert_eq!(app.maths.conv_vers, Notation::Infixe);
        assert!(app.maths.resultat_conv.is_empty());

        app.unites.vers = 1;
        app.echanger_unites();
        assert_eq!((app.unites.de, app.unites.vers), (1, 0));
    }

    #[test]
    fn effacer_seulement_l_onglet_courant() {
        let mut app = AppCalc::default();
        app.maths.expr_eval = "1+1".into();
        app.bases.entree = "1010".into();

        app.set_onglet(Onglet::Bases);
        app.effacer_onglet();
        assert!(app.bases.entree.is_empty());
        assert_eq!(app.maths.expr_eval, "1+1");
    }
}
