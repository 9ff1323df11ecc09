// src/noyau/base.rs
//
// Conversion de bases : binaire / octal / décimal / hexa en entrée,
// binaire / octal / décimal / hexa / DCB 8421 / code 2421 en sortie.
// Entiers exacts (BigInt) : pas de limite de longueur.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Signed;
use tracing::debug;

use super::erreur::ErreurNoyau;

/// Code 2421 (Aiken) des chiffres 0..=9.
const TABLE_2421: [&str; 10] = [
    "0000", "0001", "0010", "0011", "0100", "1011", "1100", "1101", "1110", "1111",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Base {
    Binaire,
    Octal,
    #[default]
    Decimal,
    Hexa,
}

impl Base {
    pub const TOUTES: [Base; 4] = [Base::Binaire, Base::Octal, Base::Decimal, Base::Hexa];

    pub fn radix(self) -> u32 {
        match self {
            Base::Binaire => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexa => 16,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Base::Binaire => "Binaire",
            Base::Octal => "Octal",
            Base::Decimal => "Décimal",
            Base::Hexa => "Hexadécimal",
        }
    }
}

impl FromStr for Base {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bin" | "binary" | "binaire" => Ok(Base::Binaire),
            "oct" | "octal" => Ok(Base::Octal),
            "dec" | "decimal" | "décimal" => Ok(Base::Decimal),
            "hex" | "hexa" | "hexadecimal" | "hexadécimal" => Ok(Base::Hexa),
            _ => Err(ErreurNoyau::BaseInconnue(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortieBase {
    #[default]
    Binaire,
    Octal,
    Decimal,
    Hexa,
    /// DCB 8421 : un quartet binaire par chiffre décimal.
    Bcd,
    Code2421,
}

impl SortieBase {
    pub const TOUTES: [SortieBase; 6] = [
        SortieBase::Binaire,
        SortieBase::Octal,
        SortieBase::Decimal,
        SortieBase::Hexa,
        SortieBase::Bcd,
        SortieBase::Code2421,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            SortieBase::Binaire => "Binaire",
            SortieBase::Octal => "Octal",
            SortieBase::Decimal => "Décimal",
            SortieBase::Hexa => "Hexadécimal",
            SortieBase::Bcd => "DCB (8421)",
            SortieBase::Code2421 => "2421",
        }
    }
}

impl FromStr for SortieBase {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bcd" | "dcb" | "8421" => Ok(SortieBase::Bcd),
            "2421" => Ok(SortieBase::Code2421),
            autre => Ok(match autre.parse::<Base>()? {
                Base::Binaire => SortieBase::Binaire,
                Base::Octal => SortieBase::Octal,
                Base::Decimal => SortieBase::Decimal,
                Base::Hexa => SortieBase::Hexa,
            }),
        }
    }
}

impl fmt::Display for SortieBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}

/// Lit un entier dans la base donnée.
/// - binaire / octal / hexa : chiffres de la base uniquement, sans signe
/// - décimal : signe optionnel puis chiffres
pub fn lire_nombre(entree: &str, base: Base) -> Result<BigInt, ErreurNoyau> {
    let s = entree.trim();
    let invalide = || ErreurNoyau::FormatNombre(entree.to_string());

    let (negatif, chiffres) = match (base, s.as_bytes().first()) {
        (Base::Decimal, Some(b'-')) => (true, &s[1..]),
        (Base::Decimal, Some(b'+')) => (false, &s[1..]),
        _ => (false, s),
    };

    // from_str_radix tolère '_' : on valide nous-mêmes avant
    if chiffres.is_empty() || !chiffres.chars().all(|c| c.is_digit(base.radix())) {
        return Err(invalide());
    }

    let n = BigInt::parse_bytes(chiffres.as_bytes(), base.radix()).ok_or_else(invalide)?;
    Ok(if negatif { -n } else { n })
}

/// Écrit un entier dans la forme de sortie demandée.
pub fn ecrire_nombre(n: &BigInt, sortie: SortieBase) -> String {
    match sortie {
        SortieBase::Binaire => n.to_str_radix(2),
        SortieBase::Octal => n.to_str_radix(8),
        SortieBase::Decimal => n.to_str_radix(10),
        SortieBase::Hexa => n.to_str_radix(16).to_uppercase(),
        SortieBase::Bcd => par_chiffre(n, |d| format!("{d:04b}")),
        SortieBase::Code2421 => par_chiffre(n, |d| TABLE_2421[d].to_string()),
    }
}

/// Un quartet par chiffre décimal de |n|, séparés par un espace (0 => un seul quartet).
fn par_chiffre(n: &BigInt, quartet: impl Fn(usize) -> String) -> String {
    n.abs()
        .to_str_radix(10)
        .bytes()
        .map(|b| quartet(usize::from(b - b'0')))
        .collect::<Vec<_>>()
        .join(" ")
}

/// API publique : lecture dans `de`, écriture vers `vers`.
pub fn convertir_base(entree: &str, de: Base, vers: SortieBase) -> Result<String, ErreurNoyau> {
    let n = lire_nombre(entree, de)?;
    let s = ecrire_nombre(&n, vers);
    debug!(entree, de = de.libelle(), %vers, sortie = %s, "conversion de base");
    Ok(s)
}
