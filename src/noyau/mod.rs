//! Noyau RPN (f64)
//!
//! Organisation interne :
//! - table.rs    : table des opérateurs + fonctions + constantes (immuables)
//! - jetons.rs   : découpage + classification des jetons
//! - rpn.rs      : shunting-yard (infixe -> RPN) + évaluation RPN
//! - erreur.rs   : erreurs du noyau
//! - format.rs   : affichage du résultat sur l’écran
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod table;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{eval_expression, DemarcheNoyau};
pub use format::format_resultat;
