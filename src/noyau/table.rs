// src/noyau/table.rs
//
// Tables fixes du noyau (immuables pour toute la durée du processus).
// - TABLE_OPERATEURS : symbole -> (associativité, précédence)
// - FONCTIONS        : fonctions unaires (préfixes, collées à leur argument)
// - CONSTANTES       : e, π

/// Associativité d’un opérateur binaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Entrée de la table : précédence plus grande = lie plus fort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoOperateur {
    pub assoc: Associativite,
    pub precedence: i32,
}

const fn info(assoc: Associativite, precedence: i32) -> InfoOperateur {
    InfoOperateur { assoc, precedence }
}

pub const TABLE_OPERATEURS: [(&str, InfoOperateur); 5] = [
    ("+", info(Associativite::Gauche, 0)),
    ("-", info(Associativite::Gauche, 0)),
    ("*", info(Associativite::Gauche, 1)),
    ("/", info(Associativite::Gauche, 1)),
    ("^", info(Associativite::Droite, 10)),
];

/// Fonctions unaires reconnues. `x^2` n’y est pas : il arrive déjà réécrit en `^ 2`.
pub const FONCTIONS: [&str; 11] = [
    "sin", "cos", "tan", "cot", "sec", "csc", "arcsin", "arccos", "arctan", "ln", "√",
];

pub const CONSTANTE_E: &str = "e";
pub const CONSTANTE_PI: &str = "π";

pub fn operateur(symbole: &str) -> Option<InfoOperateur> {
    TABLE_OPERATEURS
        .iter()
        .find(|(s, _)| *s == symbole)
        .map(|(_, info)| *info)
}

pub fn est_operateur(symbole: &str) -> bool {
    operateur(symbole).is_some()
}

pub fn est_fonction(nom: &str) -> bool {
    FONCTIONS.contains(&nom)
}

pub fn est_constante(jeton: &str) -> bool {
    jeton == CONSTANTE_E || jeton == CONSTANTE_PI
}
