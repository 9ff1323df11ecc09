// src/noyau/pile.rs
//
// Machine à pile générique pour les formes préfixe/postfixe.
//
// - Postfixe : lecture gauche → droite ; au premier dépilement on obtient l’opérande DROIT.
// - Préfixe  : lecture droite → gauche ; au premier dépilement on obtient l’opérande GAUCHE.
//
// `reduire` normalise les deux cas en (gauche, droite) avant d’appeler `composer`,
// ce qui sert autant aux conversions (T = String) qu’aux évaluations (T = f64).

use super::erreur::ErreurNoyau;
use super::jetons::{Op, Tok};

/// Sens de lecture des jetons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sens {
    /// Postfixe (et infixe → postfixe).
    GaucheDroite,
    /// Préfixe (et infixe → préfixe).
    DroiteGauche,
}

impl Sens {
    /// Jetons dans l’ordre de lecture.
    pub fn ordonner(self, tokens: &[Tok]) -> Vec<&Tok> {
        match self {
            Sens::GaucheDroite => tokens.iter().collect(),
            Sens::DroiteGauche => tokens.iter().rev().collect(),
        }
    }
}

/// Réduit une suite de jetons préfixe/postfixe à une seule valeur.
///
/// - `feuille`  : transforme un littéral numérique en valeur
/// - `composer` : combine (op, gauche, droite)
///
/// Erreurs : opérande manquant, pile finale ≠ 1 élément. Les parenthèses sont ignorées.
pub fn reduire<T, F, C>(
    tokens: &[Tok],
    sens: Sens,
    mut feuille: F,
    mut composer: C,
) -> Result<T, ErreurNoyau>
where
    F: FnMut(&str) -> Result<T, ErreurNoyau>,
    C: FnMut(Op, T, T) -> Result<T, ErreurNoyau>,
{
    let mut pile: Vec<T> = Vec::with_capacity(tokens.len());

    for tok in sens.ordonner(tokens) {
        match tok {
            Tok::Num(s) => pile.push(feuille(s)?),

            Tok::Op(op) => {
                let manquant = || ErreurNoyau::OperandeManquant(op.symbole());
                let premier = pile.pop().ok_or_else(manquant)?;
                let second = pile.pop().ok_or_else(manquant)?;

                let (gauche, droite) = match sens {
                    Sens::GaucheDroite => (second, premier),
                    Sens::DroiteGauche => (premier, second),
                };
                pile.push(composer(*op, gauche, droite)?);
            }

            Tok::LPar | Tok::RPar => {}
        }
    }

    if pile.len() != 1 {
        return Err(ErreurNoyau::PileInvalide(pile.len()));
    }
    pile.pop().ok_or(ErreurNoyau::PileInvalide(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::tokenize_espaces;

    fn texte(s: &str) -> Result<String, ErreurNoyau> {
        Ok(s.to_string())
    }

    fn arbre(op: Op, a: String, b: String) -> Result<String, ErreurNoyau> {
        Ok(format!("[{a}{op}{b}]"))
    }

    #[test]
    fn ordre_des_operandes_postfixe() {
        let t = tokenize_espaces("8 2 -");
        assert_eq!(reduire(&t, Sens::GaucheDroite, texte, arbre).unwrap(), "[8-2]");
    }

    #[test]
    fn ordre_des_operandes_prefixe() {
        let t = tokenize_espaces("- 8 2");
        assert_eq!(reduire(&t, Sens::DroiteGauche, texte, arbre).unwrap(), "[8-2]");
    }

    #[test]
    fn operande_manquant() {
        let t = tokenize_espaces("3 +");
        assert_eq!(
            reduire(&t, Sens::GaucheDroite, texte, arbre),
            Err(ErreurNoyau::OperandeManquant('+'))
        );
    }

    #[test]
    fn pile_finale_invalide() {
        let t = tokenize_espaces("3 4");
        assert_eq!(
            reduire(&t, Sens::GaucheDroite, texte, arbre),
            Err(ErreurNoyau::PileInvalide(2))
        );
        assert_eq!(
            reduire(&[], Sens::DroiteGauche, texte, arbre),
            Err(ErreurNoyau::PileInvalide(0))
        );
    }

    #[test]
    fn parentheses_ignorees() {
        let t = vec![
            Tok::LPar,
            Tok::Num("1".into()),
            Tok::Num("2".into()),
            Tok::Op(Op::Plus),
            Tok::RPar,
        ];
        assert_eq!(reduire(&t, Sens::GaucheDroite, texte, arbre).unwrap(), "[1+2]");
    }

    #[test]
    fn erreur_de_composition_propagee() {
        let t = tokenize_espaces("1 2 /");
        let r: Result<f64, _> = reduire(
            &t,
            Sens::GaucheDroite,
            |_| Ok(0.0),
            |_, _, _| Err(ErreurNoyau::NonFini),
        );
        assert_eq!(r, Err(ErreurNoyau::NonFini));
    }
}
