// src/noyau/jetons.rs

use std::fmt;

use tracing::trace;

/// Opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Div,
}

impl Op {
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '*' => Some(Op::Fois),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Div => '/',
        }
    }

    /// `+ -` = 1, `* /` = 2. Pas d’associativité à droite ici.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Div => 2,
        }
    }

    /// Applique l’opérateur en flottant (IEEE : 1/0 donne inf, à filtrer par l’appelant).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Plus => a + b,
            Op::Moins => a - b,
            Op::Fois => a * b,
            Op::Div => a / b,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Littéral tel qu’écrit (ex: "3.50"), jamais signé.
    Num(String),
    Op(Op),

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(s) => f.write_str(s),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Tokenize une expression infixe.
/// Supporte:
/// - nombres décimaux positifs : 12, 3.75 (un point suivi d’au moins un chiffre)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Tout autre caractère (espaces, lettres, symboles) est ignoré en silence.
/// Ne renvoie jamais d’erreur : une entrée vide ou entièrement invalide donne `[]`.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        if let Some(op) = Op::depuis_char(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }

            // partie décimale seulement si un chiffre suit le point ("3." => "3" puis '.' ignoré)
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        if !c.is_whitespace() {
            trace!(caractere = %c, position = i, "caractère ignoré");
        }
        i += 1;
    }

    out
}

/// Tokenize une expression préfixe/postfixe (jetons séparés par des espaces).
///
/// Un mot est gardé seulement s’il est entièrement un nombre ou exactement un opérateur.
/// Le reste (parenthèses, formes collées comme "3+4", lettres) est ignoré.
pub fn tokenize_espaces(s: &str) -> Vec<Tok> {
    s.split_whitespace()
        .filter_map(|mot| {
            if est_nombre(mot) {
                return Some(Tok::Num(mot.to_string()));
            }
            let mut it = mot.chars();
            match (it.next().and_then(Op::depuis_char), it.next()) {
                (Some(op), None) => Some(Tok::Op(op)),
                _ => {
                    trace!(mot, "mot ignoré");
                    None
                }
            }
        })
        .collect()
}

/// `chiffres` ou `chiffres.chiffres`, rien d’autre.
pub fn est_nombre(mot: &str) -> bool {
    fn chiffres(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    match mot.split_once('.') {
        Some((entier, frac)) => chiffres(entier) && chiffres(frac),
        None => chiffres(mot),
    }
}

/// Liste de jetons en texte, séparés par un espace.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
