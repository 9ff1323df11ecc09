// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> postfixe (RPN) et infixe -> préfixe.
//
// Une seule passe paramétrée par le sens :
// - GaucheDroite : '(' ouvre, ')' ferme, on dépile tant que prec(sommet) >= prec(op)
// - DroiteGauche : jetons inversés, ')' ouvre, '(' ferme, on dépile tant que
//   prec(sommet) > prec(op), puis la sortie est inversée
//
// La comparaison stricte en lecture inversée garde l’ordre gauche→droite des
// opérandes pour les opérateurs de même précédence ("1-2-3" => "- - 1 2 3").
//
// Parenthèses déséquilibrées tolérées : une fermante sans ouvrante vide la pile
// puis est ignorée, une ouvrante restante est jetée à la fin ("(3+4" => "3 4 +").

use tracing::debug;

use super::erreur::ErreurNoyau;
use super::jetons::{format_tokens, tokenize, Op, Tok};
use super::pile::Sens;

/// Pile d’opérateurs : une parenthèse ouvrante ou un opérateur.
#[derive(Clone, Copy, Debug)]
enum Attente {
    Ouvrante,
    Op(Op),
}

/// Réordonne des jetons infixes en postfixe (GaucheDroite) ou préfixe (DroiteGauche).
///
/// Exemple:
///   tokens: 3 + 4 * 2
///   postfixe: 3 4 2 * +
///   préfixe:  + 3 * 4 2
pub fn shunting_yard(tokens: &[Tok], sens: Sens) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Attente> = Vec::new();

    let (ouvrante, fermante) = match sens {
        Sens::GaucheDroite => (Tok::LPar, Tok::RPar),
        Sens::DroiteGauche => (Tok::RPar, Tok::LPar),
    };

    let doit_depiler = |sommet: Op, entrant: Op| match sens {
        Sens::GaucheDroite => sommet.precedence() >= entrant.precedence(),
        Sens::DroiteGauche => sommet.precedence() > entrant.precedence(),
    };

    for tok in sens.ordonner(tokens) {
        match tok {
            Tok::Num(_) => out.push(tok.clone()),

            Tok::Op(op) => {
                while let Some(Attente::Op(sommet)) = ops.last().copied() {
                    if !doit_depiler(sommet, *op) {
                        break;
                    }
                    ops.pop();
                    out.push(Tok::Op(sommet));
                }
                ops.push(Attente::Op(*op));
            }

            t if *t == ouvrante => ops.push(Attente::Ouvrante),

            t if *t == fermante => loop {
                // dépile jusqu’à la parenthèse ouvrante (jetée avec la fermante)
                match ops.pop() {
                    Some(Attente::Op(op)) => out.push(Tok::Op(op)),
                    Some(Attente::Ouvrante) | None => break,
                }
            },

            _ => unreachable!("LPar/RPar couverts par ouvrante/fermante"),
        }
    }

    // vide la pile ops (ouvrantes non fermées jetées)
    while let Some(attente) = ops.pop() {
        if let Attente::Op(op) = attente {
            out.push(Tok::Op(op));
        }
    }

    if sens == Sens::DroiteGauche {
        out.reverse();
    }
    out
}

/// Même signature que les autres conversions ; le réordonnancement seul n’échoue pas.
pub fn infix_to_postfix(expr: &str) -> Result<String, ErreurNoyau> {
    let rpn = shunting_yard(&tokenize(expr), Sens::GaucheDroite);
    let s = format_tokens(&rpn);
    debug!(entree = expr, sortie = %s, "infixe -> postfixe");
    Ok(s)
}

pub fn infix_to_prefix(expr: &str) -> Result<String, ErreurNoyau> {
    let pn = shunting_yard(&tokenize(expr), Sens::DroiteGauche);
    let s = format_tokens(&pn);
    debug!(entree = expr, sortie = %s, "infixe -> préfixe");
    Ok(s)
}
