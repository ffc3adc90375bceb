//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (écran, erreur, démarche) et
//! traduire chaque touche en texte d’écran, jetons séparés par des espaces.
//!
//! Contrats :
//! - Le noyau n’est appelé que par la touche "=".
//! - Sur erreur, l’écran est conservé (on peut corriger l’expression).

use log::debug;

use crate::noyau::jetons::est_litteral_numerique;
use crate::noyau::table::est_fonction;
use crate::noyau::{eval_expression, format_resultat, DemarcheNoyau};

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

impl From<DemarcheNoyau> for Demarche {
    fn from(d: DemarcheNoyau) -> Self {
        Self {
            jetons: d.jetons,
            rpn: d.rpn,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- écran (entrée puis résultat) ---
    pub ecran: String,

    // --- sorties ---
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’écran après un clic sur une touche.
    pub focus_ecran: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            ecran: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_ecran: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Touches ------------------------ */

    /// Applique une touche du pavé à l’écran.
    pub fn appuyer(&mut self, touche: &str) {
        match touche {
            "=" => self.evaluer(),
            "CLEAR" => self.effacer(),
            "Bksp" => self.retour_arriere(),
            "x^2" => self.ecran.push_str(" ^ 2 "),
            "+/-" => self.ecran.push_str(" -"),
            "." => self.ecran.push('.'),
            t if est_litteral_numerique(t) => self.ecran.push_str(t),
            // fonction : " sin ( " (parenthèse détachée, sinon "(0" ne serait pas un jeton)
            t if est_fonction(t) => {
                self.ecran.push(' ');
                self.ecran.push_str(t);
                self.ecran.push_str(" ( ");
            }
            // e, π, parenthèses, opérateurs
            t => {
                self.ecran.push(' ');
                self.ecran.push_str(t);
                self.ecran.push(' ');
            }
        }
        self.focus_ecran = true;
    }

    /// CLEAR : écran + erreur + démarche.
    pub fn effacer(&mut self) {
        self.ecran.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_ecran = true;
    }

    /// Bksp : retire le dernier caractère (rien si l’écran est vide).
    pub fn retour_arriere(&mut self) {
        self.ecran.pop();
        self.focus_ecran = true;
    }

    /// "=" : évalue l’écran via le noyau, puis remplace l’écran par le résultat.
    pub fn evaluer(&mut self) {
        match eval_expression(&self.ecran) {
            Ok((valeur, d)) => {
                self.ecran = format_resultat(valeur);
                self.erreur.clear();
                self.demarche = d.into();
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_ecran = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE l’écran pour que l’utilisateur puisse corriger.
    /// - La démarche précédente n’est plus fiable : on l’efface.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        debug!("erreur affichée: {}", self.erreur);
        self.demarche = Demarche::default();
        self.focus_ecran = true;
    }
}
