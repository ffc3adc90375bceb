//! Noyau — évaluation (pipeline réel)
//!
//! texte écran -> jetons -> RPN -> valeur f64
//!
//! Remarque : les tables (opérateurs, fonctions) sont des constantes ;
//! chaque appel a ses propres piles, donc aucune donnée partagée mutable.

use log::{debug, warn};

use super::erreur::ErreurCalcul;
use super::jetons::{decouper, format_tokens};
use super::rpn::{convert_to_postfix, evaluate_postfix};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue le texte de l’écran et retourne la valeur + la démarche.
pub fn eval_expression(texte: &str) -> Result<(f64, DemarcheNoyau), ErreurCalcul> {
    // 1) Jetons
    let jetons = decouper(texte);
    if jetons.is_empty() {
        return Err(ErreurCalcul::EntreeVide);
    }
    let jetons_txt = format_tokens(&jetons);
    debug!("jetons: {jetons_txt}");

    // 2) RPN
    let rpn = convert_to_postfix(&jetons);
    let rpn_txt = format_tokens(&rpn);
    debug!("rpn: {rpn_txt}");

    // 3) Valeur
    let valeur = evaluate_postfix::<f64, _>(&rpn).inspect_err(|e| {
        warn!("évaluation impossible ({rpn_txt}): {e}");
    })?;
    debug!("valeur: {valeur}");

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
    };

    Ok((valeur, d))
}
