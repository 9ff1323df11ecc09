// src/noyau/unites.rs
//
// Conversion d’unités (tables de taux) + calculateur de coût au poids.
//
// Grandeurs linéaires : chaque unité a un taux relatif à l’unité de référence (taux 1.0).
//   resultat = valeur / taux[de] * taux[vers]
// Température : formules affines (pas de taux).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::erreur::ErreurNoyau;

const DEVISES: [(&str, f64); 7] = [
    ("INR", 1.0),
    ("USD", 0.012),
    ("EUR", 0.011),
    ("JPY", 1.75),
    ("GBP", 0.0094),
    ("DZD", 1.0),
    ("BHD", 0.0028),
];

const LONGUEUR: [(&str, f64); 3] = [
    ("mètres", 1.0),
    ("kilomètres", 0.001),
    ("miles", 0.000621371),
];

const AIRE: [(&str, f64); 3] = [("m²", 1.0), ("km²", 0.000001), ("acres", 0.000247105)];

const VOLUME: [(&str, f64); 3] = [("litres", 1.0), ("millilitres", 1000.0), ("gallons", 0.264172)];

const MASSE: [(&str, f64); 3] = [("kg", 1.0), ("grammes", 1000.0), ("livres", 2.20462)];

const TEMPERATURE: [&str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];

const VITESSE: [(&str, f64); 3] = [("km/h", 1.0), ("m/s", 0.277778), ("mph", 0.621371)];

const PRESSION: [(&str, f64); 3] = [("pascal", 1.0), ("atm", 9.8692e-6), ("bar", 1e-5)];

const PUISSANCE: [(&str, f64); 3] = [
    ("watt", 1.0),
    ("kilowatt", 0.001),
    ("cheval-vapeur", 0.001341),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grandeur {
    #[default]
    Devise,
    Longueur,
    Aire,
    Volume,
    Masse,
    Temperature,
    Vitesse,
    Pression,
    Puissance,
}

impl Grandeur {
    pub const TOUTES: [Grandeur; 9] = [
        Grandeur::Devise,
        Grandeur::Longueur,
        Grandeur::Aire,
        Grandeur::Volume,
        Grandeur::Masse,
        Grandeur::Temperature,
        Grandeur::Vitesse,
        Grandeur::Pression,
        Grandeur::Puissance,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            Grandeur::Devise => "Devise",
            Grandeur::Longueur => "Longueur",
            Grandeur::Aire => "Aire",
            Grandeur::Volume => "Volume",
            Grandeur::Masse => "Masse",
            Grandeur::Temperature => "Température",
            Grandeur::Vitesse => "Vitesse",
            Grandeur::Pression => "Pression",
            Grandeur::Puissance => "Puissance",
        }
    }

    /// Décimales affichées dans le résultat.
    pub fn decimales(self) -> usize {
        match self {
            Grandeur::Devise | Grandeur::Temperature | Grandeur::Vitesse => 2,
            Grandeur::Pression => 6,
            _ => 4,
        }
    }

    fn table(self) -> &'static [(&'static str, f64)] {
        match self {
            Grandeur::Devise => &DEVISES,
            Grandeur::Longueur => &LONGUEUR,
            Grandeur::Aire => &AIRE,
            Grandeur::Volume => &VOLUME,
            Grandeur::Masse => &MASSE,
            Grandeur::Vitesse => &VITESSE,
            Grandeur::Pression => &PRESSION,
            Grandeur::Puissance => &PUISSANCE,
            Grandeur::Temperature => &[],
        }
    }
}

impl fmt::Display for Grandeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}

impl FromStr for Grandeur {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let g = match s.trim().to_lowercase().as_str() {
            "devise" | "currency" => Grandeur::Devise,
            "longueur" | "length" => Grandeur::Longueur,
            "aire" | "area" => Grandeur::Aire,
            "volume" => Grandeur::Volume,
            "masse" | "poids" | "weight" => Grandeur::Masse,
            "temperature" | "température" => Grandeur::Temperature,
            "vitesse" | "speed" => Grandeur::Vitesse,
            "pression" | "pressure" => Grandeur::Pression,
            "puissance" | "power" => Grandeur::Puissance,
            _ => return Err(ErreurNoyau::GrandeurInconnue(s.to_string())),
        };
        Ok(g)
    }
}

/// Résultat d’une conversion, prêt à afficher.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    pub valeur: f64,
    pub de: String,
    pub resultat: f64,
    pub vers: String,
    pub decimales: usize,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {:.*} {}",
            self.valeur, self.de, self.decimales, self.resultat, self.vers
        )
    }
}

/// Calcul de coût au poids (prix au kg, roupies).
#[derive(Clone, Debug, PartialEq)]
pub struct Cout {
    pub grammes: f64,
    pub total: f64,
}

impl fmt::Display for Cout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coût total : ₹{:.2} pour {} grammes", self.total, self.grammes)
    }
}

/// Tables d’unités, avec taux de devises éventuellement surchargés (configuration).
#[derive(Clone, Debug)]
pub struct Convertisseur {
    devises: Vec<(String, f64)>,
}

impl Default for Convertisseur {
    fn default() -> Self {
        Self {
            devises: DEVISES.iter().map(|(n, t)| (n.to_string(), *t)).collect(),
        }
    }
}

impl Convertisseur {
    /// Applique des taux de devises (code -> taux relatif à l’INR).
    /// Code inconnu : ajouté. Taux non fini ou <= 0 : ignoré.
    pub fn avec_taux_devises(taux: &BTreeMap<String, f64>) -> Self {
        let mut c = Self::default();

        for (code, &t) in taux {
            if !t.is_finite() || t <= 0.0 {
                warn!(%code, taux = t, "taux de devise ignoré (doit être fini et > 0)");
                continue;
            }
            let code = code.trim().to_uppercase();
            match c.devises.iter_mut().find(|(n, _)| *n == code) {
                Some(entree) => entree.1 = t,
                None => c.devises.push((code, t)),
            }
        }

        c
    }

    /// Noms des unités d’une grandeur (ordre d’affichage).
    pub fn unites(&self, g: Grandeur) -> Vec<&str> {
        match g {
            Grandeur::Devise => self.devises.iter().map(|(n, _)| n.as_str()).collect(),
            Grandeur::Temperature => TEMPERATURE.to_vec(),
            _ => g.table().iter().map(|(n, _)| *n).collect(),
        }
    }

    fn taux(&self, g: Grandeur, i: usize) -> Option<f64> {
        match g {
            Grandeur::Devise => self.devises.get(i).map(|(_, t)| *t),
            _ => g.table().get(i).map(|(_, t)| *t),
        }
    }

    /// Indice d’une unité par son nom (insensible à la casse).
    pub fn indice_unite(&self, g: Grandeur, nom: &str) -> Result<usize, ErreurNoyau> {
        let cherche = nom.trim().to_lowercase();
        self.unites(g)
            .iter()
            .position(|u| u.to_lowercase() == cherche)
            .ok_or_else(|| ErreurNoyau::UniteInconnue(nom.to_string()))
    }

    /// API publique : convertit `valeur` de l’unité `de` vers l’unité `vers` (indices).
    pub fn convertir(
        &self,
        g: Grandeur,
        de: usize,
        vers: usize,
        valeur: f64,
    ) -> Result<Conversion, ErreurNoyau> {
        let unites = self.unites(g);
        let nom = |i: usize| {
            unites
                .get(i)
                .map(|s| s.to_string())
                .ok_or_else(|| ErreurNoyau::UniteInconnue(format!("#{i}")))
        };
        let (nom_de, nom_vers) = (nom(de)?, nom(vers)?);

        let resultat = match g {
            Grandeur::Temperature => temperature(de, vers, valeur)?,
            _ => {
                match (self.taux(g, de), self.taux(g, vers)) {
                    (Some(t_de), Some(t_vers)) => valeur / t_de * t_vers,
                    _ => return Err(ErreurNoyau::UniteInconnue(format!("{nom_de} -> {nom_vers}"))),
                }
            }
        };
        if !resultat.is_finite() {
            return Err(ErreurNoyau::ValeurInvalide(valeur.to_string()));
        }

        let c = Conversion {
            valeur,
            de: nom_de,
            resultat,
            vers: nom_vers,
            decimales: g.decimales(),
        };
        debug!(grandeur = %g, conversion = %c, "conversion d’unité");
        Ok(c)
    }
}

/// 0 = Celsius, 1 = Fahrenheit, 2 = Kelvin.
fn temperature(de: usize, vers: usize, t: f64) -> Result<f64, ErreurNoyau> {
    let r = match (de, vers) {
        (a, b) if a == b && a < TEMPERATURE.len() => t,
        (0, 1) => t * 9.0 / 5.0 + 32.0,
        (0, 2) => t + 273.15,
        (1, 0) => (t - 32.0) * 5.0 / 9.0,
        (1, 2) => (t - 32.0) * 5.0 / 9.0 + 273.15,
        (2, 0) => t - 273.15,
        (2, 1) => (t - 273.15) * 9.0 / 5.0 + 32.0,
        _ => return Err(ErreurNoyau::UniteInconnue(format!("#{de} -> #{vers}"))),
    };
    Ok(r)
}

/// Coût = (grammes / 1000) * prix au kg.
pub fn cout(grammes: f64, prix_kg: f64) -> Result<Cout, ErreurNoyau> {
    for v in [grammes, prix_kg] {
        if !v.is_finite() {
            return Err(ErreurNoyau::ValeurInvalide(v.to_string()));
        }
    }
    let total = grammes / 1000.0 * prix_kg;
    if !total.is_finite() {
        return Err(ErreurNoyau::ValeurInvalide(total.to_string()));
    }
    Ok(Cout { grammes, total })
}

/// Lit une valeur saisie (nombre fini, espaces tolérés autour).
pub fn lire_valeur(texte: &str) -> Result<f64, ErreurNoyau> {
    texte
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ErreurNoyau::ValeurInvalide(texte.to_string()))
}
