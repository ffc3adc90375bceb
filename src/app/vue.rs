// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé de 36 touches, 4 par ligne (disposition de la calculatrice d’origine)
// - Clavier : Enter évalue, Backspace efface (quand l’écran est focus)
//
// Note :
// - L’écran est en lecture seule : tout passe par AppCalc::appuyer
//   (sinon les espaces entre jetons ne seraient plus garantis).

use eframe::egui;

use super::etat::AppCalc;

/// Disposition du pavé, ligne par ligne.
const PAVE: [[&str; 4]; 9] = [
    ["e", "π", "√", "Bksp"],
    ["sin", "cos", "tan", "("],
    ["sec", "csc", "cot", ")"],
    ["arcsin", "arccos", "arctan", "ln"],
    ["7", "8", "9", "+"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "*"],
    ["0", ".", "+/-", "/"],
    ["CLEAR", "x^2", "^", "="],
];

const TAILLE_TOUCHE: [f32; 2] = [110.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let resp = egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));
                ui.add(egui::Label::new(egui::RichText::new(&self.ecran).monospace().size(18.0)).wrap())
            })
            .response
            .interact(egui::Sense::click());

        if resp.clicked() {
            self.focus_ecran = true;
        }

        // Si on a cliqué une touche, on redonne le focus à l’écran
        if self.focus_ecran {
            resp.request_focus();
            self.focus_ecran = false;
        }

        // --- Clavier (seulement si l’écran est focus) ---
        let (enter, backspace) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });
        if resp.has_focus() && enter {
            self.appuyer("=");
        }
        if resp.has_focus() && backspace {
            self.appuyer("Bksp");
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: &str) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(touche));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
