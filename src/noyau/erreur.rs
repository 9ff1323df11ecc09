// src/noyau/erreur.rs
//
// Erreurs du noyau : une seule énumération pour tout le noyau.
// Le noyau ne panique jamais sur une entrée malformée ; tout échec passe par Err.

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ErreurNoyau {
    /* --- expressions --- */
    #[error("opérande manquant pour '{0}'")]
    OperandeManquant(char),

    #[error("expression incomplète : {0} valeur(s) sur la pile au lieu d’une")]
    PileInvalide(usize),

    /// Garde de `eval` : les littéraux sont déjà validés par le tokeniseur.
    #[error("nombre invalide : {0}")]
    NombreInvalide(String),

    #[error("résultat non fini (division par zéro ?)")]
    NonFini,

    #[error("notation inconnue : {0}")]
    NotationInconnue(String),

    /* --- bases --- */
    #[error("format de nombre invalide : {0:?}")]
    FormatNombre(String),

    #[error("base inconnue : {0}")]
    BaseInconnue(String),

    /* --- unités --- */
    #[error("grandeur inconnue : {0}")]
    GrandeurInconnue(String),

    #[error("unité inconnue : {0}")]
    UniteInconnue(String),

    #[error("valeur invalide : {0:?}")]
    ValeurInvalide(String),
}
