//! Noyau — évaluation en flottant
//!
//! postfixe : jetons -> pile (gauche → droite)
//! préfixe  : jetons -> pile (droite → gauche)
//! infixe   : jetons -> shunting-yard -> évaluation postfixe
//!
//! Contrat : un `f64` fini, ou une erreur (pile finale ≠ 1, opérande manquant,
//! résultat non fini comme 5/0). Jamais de panique sur entrée malformée.

use tracing::debug;

use super::conversion::Notation;
use super::erreur::ErreurNoyau;
use super::jetons::{tokenize, tokenize_espaces, Op, Tok};
use super::pile::{reduire, Sens};
use super::rpn::shunting_yard;

fn lire_flottant(s: &str) -> Result<f64, ErreurNoyau> {
    s.parse::<f64>()
        .map_err(|_| ErreurNoyau::NombreInvalide(s.to_string()))
}

fn appliquer(op: Op, a: f64, b: f64) -> Result<f64, ErreurNoyau> {
    let v = op.appliquer(a, b);
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurNoyau::NonFini)
    }
}

fn evaluer_jetons(tokens: &[Tok], sens: Sens) -> Result<f64, ErreurNoyau> {
    reduire(tokens, sens, lire_flottant, appliquer)
}

pub fn evaluate_postfix(expr: &str) -> Result<f64, ErreurNoyau> {
    evaluer_jetons(&tokenize_espaces(expr), Sens::GaucheDroite)
}

pub fn evaluate_prefix(expr: &str) -> Result<f64, ErreurNoyau> {
    evaluer_jetons(&tokenize_espaces(expr), Sens::DroiteGauche)
}

/// Même résultat que `evaluate_postfix(&infix_to_postfix(expr)?)`, sans repasser par le texte.
pub fn evaluate_infix(expr: &str) -> Result<f64, ErreurNoyau> {
    let rpn = shunting_yard(&tokenize(expr), Sens::GaucheDroite);
    evaluer_jetons(&rpn, Sens::GaucheDroite)
}

/// API publique : évalue `expr` écrite dans la notation donnée.
pub fn evaluate(expr: &str, notation: Notation) -> Result<f64, ErreurNoyau> {
    let res = match notation {
        Notation::Infixe => evaluate_infix(expr),
        Notation::Prefixe => evaluate_prefix(expr),
        Notation::Postfixe => evaluate_postfix(expr),
    };

    match &res {
        Ok(v) => debug!(%notation, entree = expr, valeur = v, "évaluation"),
        Err(e) => debug!(%notation, entree = expr, erreur = %e, "évaluation invalide"),
    }
    res
}

// bornes de l’écriture décimale
const SEUIL_EXPOSANT_HAUT: f64 = 1e21;
const SEUIL_EXPOSANT_BAS: f64 = 1e-6;

/// Affichage d’un résultat : plus courte écriture décimale exacte (11, 0.5, 0.1),
/// exponentielle pour les très grandes et très petites valeurs (1e+21, 1.5e-7).
pub fn format_resultat(v: f64) -> String {
    // évite "-0"
    if v == 0.0 {
        return "0".to_string();
    }

    let abs = v.abs();
    if abs >= SEUIL_EXPOSANT_HAUT || abs < SEUIL_EXPOSANT_BAS {
        let s = format!("{v:e}");
        return match s.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => s,
        };
    }
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::rpn::infix_to_postfix;

    fn ok(r: Result<f64, ErreurNoyau>) -> f64 {
        r.unwrap_or_else(|e| panic!("évaluation en erreur: {e}"))
    }

    #[test]
    fn postfixe() {
        assert_eq!(ok(evaluate_postfix("3 4 2 * +")), 11.0);
        assert_eq!(ok(evaluate_postfix("10 4 -")), 6.0);
        assert_eq!(ok(evaluate_postfix("1.5 0.5 /")), 3.0);
    }

    #[test]
    fn prefixe() {
        assert_eq!(ok(evaluate_prefix("* + 1 2 3")), 9.0);
        assert_eq!(ok(evaluate_prefix("- 10 4")), 6.0);
        assert_eq!(ok(evaluate_prefix("/ 8 - 6 2")), 2.0);
    }

    #[test]
    fn infixe() {
        assert_eq!(ok(evaluate_infix("3+4*2")), 11.0);
        assert_eq!(ok(evaluate_infix("(3+4)*2")), 14.0);
        assert_eq!(ok(evaluate_infix("8-3-2")), 3.0);
        assert_eq!(ok(evaluate_infix("100 / 10 / 5")), 2.0);
        assert_eq!(ok(evaluate_infix("2.5*4")), 10.0);
    }

    #[test]
    fn infixe_egale_postfixe_du_texte() {
        for e in ["3+4*2", "(1+2)*(3-4)/5", "7", "1-2-3", "6/3*2"] {
            let p = infix_to_postfix(e).unwrap();
            assert_eq!(evaluate_infix(e), evaluate_postfix(&p), "expr={e:?}");
        }
    }

    #[test]
    fn division_par_zero_invalide() {
        assert_eq!(evaluate_postfix("5 0 /"), Err(ErreurNoyau::NonFini));
        assert_eq!(evaluate_infix("1/(2-2)"), Err(ErreurNoyau::NonFini));
        assert_eq!(evaluate_prefix("/ 0 0"), Err(ErreurNoyau::NonFini));
    }

    #[test]
    fn structures_invalides() {
        assert_eq!(evaluate_postfix(""), Err(ErreurNoyau::PileInvalide(0)));
        assert_eq!(evaluate_postfix("1 2"), Err(ErreurNoyau::PileInvalide(2)));
        assert_eq!(evaluate_postfix("1 +"), Err(ErreurNoyau::OperandeManquant('+')));
        assert_eq!(evaluate_infix("3+"), Err(ErreurNoyau::OperandeManquant('+')));
        assert_eq!(evaluate_infix("abc"), Err(ErreurNoyau::PileInvalide(0)));
    }

    #[test]
    fn parentheses_desequilibrees_tolerees() {
        assert_eq!(ok(evaluate_infix("3+4)")), 7.0);
        assert_eq!(ok(evaluate_infix("(3+4")), 7.0);
        assert_eq!(ok(evaluate_infix("(2*(3+4)")), 14.0);
        assert_eq!(evaluate_infix("3+4)"), evaluate_postfix(&infix_to_postfix("3+4)").unwrap()));
    }

    #[test]
    fn dispatch_notation() {
        assert_eq!(ok(evaluate("3+4", Notation::Infixe)), 7.0);
        assert_eq!(ok(evaluate("+ 3 4", Notation::Prefixe)), 7.0);
        assert_eq!(ok(evaluate("3 4 +", Notation::Postfixe)), 7.0);
    }

    #[test]
    fn affichage() {
        assert_eq!(format_resultat(11.0), "11");
        assert_eq!(format_resultat(0.5), "0.5");
        assert_eq!(format_resultat(-0.0), "0");
        assert_eq!(format_resultat(-2.25), "-2.25");
    }

    #[test]
    fn affichage_exponentiel() {
        assert_eq!(format_resultat(1e21), "1e+21");
        assert_eq!(format_resultat(-2.5e22), "-2.5e+22");
        assert_eq!(format_resultat(1.5e-7), "1.5e-7");
        assert_eq!(format_resultat(1e20), "100000000000000000000");
        assert_eq!(format_resultat(0.000001), "0.000001");
        assert_eq!(format_resultat(ok(evaluate_postfix("1000000000000 1000000000 *"))), "1e+21");
    }
}
