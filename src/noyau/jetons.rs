// src/noyau/jetons.rs
//
// Jetons = chaînes déjà découpées (l’écran sépare tout par des espaces).
// Ici : découpage + classification totale et déterministe d’un jeton.

use super::table::{est_constante, est_fonction, est_operateur};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classe {
    Nombre,
    Constante,
    Fonction,
    Operateur,
    ParGauche,
    ParDroite,
    // Ni nombre, ni constante, ni fonction, ni opérateur, ni parenthèse.
    Inconnu,
}

/// Classe un jeton. L’ordre des tests compte : nombre, constante, fonction,
/// opérateur, parenthèses, sinon inconnu.
pub fn classer(jeton: &str) -> Classe {
    if est_litteral_numerique(jeton) {
        Classe::Nombre
    } else if est_constante(jeton) {
        Classe::Constante
    } else if est_fonction(jeton) {
        Classe::Fonction
    } else if est_operateur(jeton) {
        Classe::Operateur
    } else if jeton == "(" {
        Classe::ParGauche
    } else if jeton == ")" {
        Classe::ParDroite
    } else {
        Classe::Inconnu
    }
}

/// Littéral décimal signé : `-?\d+(\.\d+)?` (pas d’exposant, pas de `+`, pas de `.5`).
pub fn est_litteral_numerique(jeton: &str) -> bool {
    let corps = jeton.strip_prefix('-').unwrap_or(jeton);

    let (entier, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (corps, None),
    };

    let chiffres = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    chiffres(entier) && frac.is_none_or(chiffres)
}

/// Découpe le texte de l’écran en jetons (espaces multiples tolérés).
pub fn decouper(texte: &str) -> Vec<&str> {
    texte.split_whitespace().collect()
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens<S: AsRef<str>>(jetons: &[S]) -> String {
    jetons
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}
