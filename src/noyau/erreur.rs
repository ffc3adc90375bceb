// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs remontées par le noyau (jamais de panique sur une entrée utilisateur).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("Entrée vide")]
    EntreeVide,

    /// Un opérateur ou une fonction réclame plus d’opérandes que la pile n’en contient.
    #[error("pile insuffisante pour '{jeton}' (jeton {position}) : {requis} opérande(s) requise(s), {disponibles} disponible(s)")]
    Underflow {
        jeton: String,
        position: usize,
        requis: usize,
        disponibles: usize,
    },

    /// Fin de l’évaluation sans aucune valeur sur la pile.
    #[error("expression sans valeur")]
    PileVide,

    /// Fin de l’évaluation avec plusieurs valeurs : l’expression est mal formée.
    #[error("expression invalide : {restantes} valeurs restent sur la pile")]
    OperandesExcedentaires { restantes: usize },

    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),
}
