// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Un onglet par famille : Mathématiques / Bases / Unités / Coût
// - Enter valide le champ qui a le focus
// - Chaque famille d’erreurs du noyau donne UN message uniforme ; le détail part au journal

use eframe::egui;
use tracing::debug;

use super::etat::{AppCalc, ModeMaths, Onglet};
use crate::noyau::{
    self, convertir_base, cout, format_resultat, lire_valeur, Base, Grandeur, Notation, SortieBase,
};

const MSG_EXPRESSION_INVALIDE: &str = "Erreur : expression invalide";
const MSG_FORMAT_NOMBRE: &str = "Format de nombre invalide.";
const MSG_VALEUR_INVALIDE: &str = "Valeur invalide.";

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice multi-fonctions");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            for o in Onglet::TOUS {
                if ui.selectable_label(self.onglet == o, o.libelle()).clicked() {
                    self.set_onglet(o);
                }
            }
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.onglet {
                Onglet::Maths => self.ui_maths(ui),
                Onglet::Bases => self.ui_bases(ui),
                Onglet::Unites => self.ui_unites(ui),
                Onglet::Cout => self.ui_cout(ui),
            });
    }

    /* ------------------------ Mathématiques ------------------------ */

    fn ui_maths(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.maths.mode, ModeMaths::Evaluation, "Évaluation");
            ui.radio_value(&mut self.maths.mode, ModeMaths::Conversion, "Conversion");
        });
        ui.add_space(6.0);

        match self.maths.mode {
            ModeMaths::Evaluation => {
                ui.horizontal(|ui| {
                    ui.label("Notation :");
                    choix_notation(ui, "eval_notation", &mut self.maths.notation);
                });

                let valider = champ(ui, &mut self.maths.expr_eval, "Ex: (3+4)*2 ou 3 4 2 * +");
                if valider | ui.button("Évaluer").clicked() {
                    self.evaluer_via_noyau();
                }
                resultat(ui, &self.maths.resultat_eval);
            }
            ModeMaths::Conversion => {
                ui.horizontal(|ui| {
                    ui.label("De :");
                    choix_notation(ui, "conv_de", &mut self.maths.conv_de);
                    if ui.button("⇄").on_hover_text("Inverser").clicked() {
                        self.echanger_notations();
                    }
                    ui.label("Vers :");
                    choix_notation(ui, "conv_vers", &mut self.maths.conv_vers);
                });

                let valider = champ(ui, &mut self.maths.expr_conv, "Expression à convertir");
                if valider | ui.button("Convertir").clicked() {
                    self.convertir_via_noyau();
                }
                resultat(ui, &self.maths.resultat_conv);
            }
        }

        ui.add_space(6.0);
        if ui.button("Effacer").clicked() {
            self.effacer_onglet();
        }
    }

    /* ------------------------ Bases ------------------------ */

    fn ui_bases(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("De :");
            egui::ComboBox::from_id_salt("base_de")
                .selected_text(self.bases.de.libelle())
                .show_ui(ui, |ui| {
                    for b in Base::TOUTES {
                        ui.selectable_value(&mut self.bases.de, b, b.libelle());
                    }
                });

            ui.label("Vers :");
            egui::ComboBox::from_id_salt("base_vers")
                .selected_text(self.bases.vers.libelle())
                .show_ui(ui, |ui| {
                    for s in SortieBase::TOUTES {
                        ui.selectable_value(&mut self.bases.vers, s, s.libelle());
                    }
                });
        });

        let valider = champ(ui, &mut self.bases.entree, "Nombre");
        if valider | ui.button("Convertir").clicked() {
            self.base_via_noyau();
        }
        resultat(ui, &self.bases.resultat);
    }

    /* ------------------------ Unités ------------------------ */

    fn ui_unites(&mut self, ui: &mut egui::Ui) {
        let mut g = self.unites.grandeur;
        ui.horizontal(|ui| {
            ui.label("Grandeur :");
            egui::ComboBox::from_id_salt("grandeur")
                .selected_text(g.libelle())
                .show_ui(ui, |ui| {
                    for x in Grandeur::TOUTES {
                        ui.selectable_value(&mut g, x, x.libelle());
                    }
                });
        });
        self.set_grandeur(g);

        let noms: Vec<String> = self
            .convertisseur
            .unites(self.unites.grandeur)
            .into_iter()
            .map(String::from)
            .collect();

        let mut echanger = false;
        ui.horizontal(|ui| {
            ui.label("De :");
            choix_unite(ui, "unite_de", &noms, &mut self.unites.de);
            echanger = ui.button("⇄").on_hover_text("Inverser").clicked();
            ui.label("Vers :");
            choix_unite(ui, "unite_vers", &noms, &mut self.unites.vers);
        });
        if echanger {
            self.echanger_unites();
        }

        let valider = champ(ui, &mut self.unites.valeur, "Valeur");
        if valider | ui.button("Convertir").clicked() {
            self.unite_via_noyau();
        }
        resultat(ui, &self.unites.resultat);
    }

    /* ------------------------ Coût ------------------------ */

    fn ui_cout(&mut self, ui: &mut egui::Ui) {
        ui.label("Poids (grammes) :");
        let v1 = champ(ui, &mut self.cout.grammes, "Poids (grammes)");
        ui.label("Prix au kg (₹) :");
        let v2 = champ(ui, &mut self.cout.prix_kg, "Prix au kg");

        if v1 | v2 | ui.button("Calculer le coût").clicked() {
            self.cout_via_noyau();
        }
        resultat(ui, &self.cout.resultat);
    }

    /* ------------------------ Appels noyau ------------------------ */

    fn evaluer_via_noyau(&mut self) {
        let m = &mut self.maths;
        m.resultat_eval = match noyau::evaluate(&m.expr_eval, m.notation) {
            Ok(v) => format!("Résultat : {}", format_resultat(v)),
            Err(e) => {
                debug!(erreur = %e, "évaluation refusée");
                MSG_EXPRESSION_INVALIDE.to_string()
            }
        };
    }

    fn convertir_via_noyau(&mut self) {
        let m = &mut self.maths;
        m.resultat_conv = match noyau::convert(&m.expr_conv, m.conv_de, m.conv_vers) {
            Ok(s) => format!("Résultat converti : {s}"),
            Err(e) => {
                debug!(erreur = %e, "conversion refusée");
                MSG_EXPRESSION_INVALIDE.to_string()
            }
        };
    }

    fn base_via_noyau(&mut self) {
        let b = &mut self.bases;
        b.resultat = match convertir_base(&b.entree, b.de, b.vers) {
            Ok(s) => format!("Résultat : {s}"),
            Err(e) => {
                debug!(erreur = %e, "conversion de base refusée");
                MSG_FORMAT_NOMBRE.to_string()
            }
        };
    }

    fn unite_via_noyau(&mut self) {
        let u = &self.unites;
        let res = lire_valeur(&u.valeur)
            .and_then(|v| self.convertisseur.convertir(u.grandeur, u.de, u.vers, v));

        self.unites.resultat = match res {
            Ok(c) => c.to_string(),
            Err(e) => {
                debug!(erreur = %e, "conversion d’unité refusée");
                MSG_VALEUR_INVALIDE.to_string()
            }
        };
    }

    fn cout_via_noyau(&mut self) {
        let c = &mut self.cout;
        let res = lire_valeur(&c.grammes)
            .and_then(|g| lire_valeur(&c.prix_kg).and_then(|p| cout(g, p)));

        c.resultat = match res {
            Ok(total) => total.to_string(),
            Err(e) => {
                debug!(erreur = %e, "calcul de coût refusé");
                MSG_VALEUR_INVALIDE.to_string()
            }
        };
    }
}

/* ------------------------ Widgets ------------------------ */

/// Champ texte monoligne ; renvoie true si Enter a été pressé dedans.
fn champ(ui: &mut egui::Ui, texte: &mut String, indice: &str) -> bool {
    let resp = ui.add(
        egui::TextEdit::singleline(texte)
            .hint_text(indice)
            .desired_width(ui.available_width())
            .code_editor(),
    );
    resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

fn resultat(ui: &mut egui::Ui, texte: &str) {
    if texte.is_empty() {
        return;
    }
    ui.add_space(4.0);
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.monospace(texte);
        });
}

fn choix_notation(ui: &mut egui::Ui, id: &str, n: &mut Notation) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(n.libelle())
        .show_ui(ui, |ui| {
            for x in Notation::TOUTES {
                ui.selectable_value(n, x, x.libelle());
            }
        });
}

fn choix_unite(ui: &mut egui::Ui, id: &str, noms: &[String], i: &mut usize) {
    let courant = noms.get(*i).map(String::as_str).unwrap_or("—");
    egui::ComboBox::from_id_salt(id)
        .selected_text(courant)
        .show_ui(ui, |ui| {
            for (j, nom) in noms.iter().enumerate() {
                ui.selectable_value(i, j, nom);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_et_message_uniforme() {
        let mut app = AppCalc::default();
        app.maths.expr_eval = "3+4*2".into();
        app.evaluer_via_noyau();
        assert_eq!(app.maths.resultat_eval, "Résultat : 11");

        app.maths.notation = Notation::Postfixe;
        app.maths.expr_eval = "5 0 /".into();
        app.evaluer_via_noyau();
        assert_eq!(app.maths.resultat_eval, MSG_EXPRESSION_INVALIDE);

        app.maths.expr_eval = "1 2".into();
        app.evaluer_via_noyau();
        assert_eq!(app.maths.resultat_eval, MSG_EXPRESSION_INVALIDE);

        app.maths.notation = Notation::Infixe;
        app.maths.expr_eval = "3+4)".into();
        app.evaluer_via_noyau();
        assert_eq!(app.maths.resultat_eval, "Résultat : 7");
    }

    #[test]
    fn conversion_notation() {
        let mut app = AppCalc::default();
        app.maths.conv_de = Notation::Infixe;
        app.maths.conv_vers = Notation::Prefixe;
        app.maths.expr_conv = "(1+2)*3".into();
        app.convertir_via_noyau();
        assert_eq!(app.maths.resultat_conv, "Résultat converti : * + 1 2 3");

        app.maths.expr_conv = "(1+2".into();
        app.convertir_via_noyau();
        assert_eq!(app.maths.resultat_conv, "Résultat converti : + 1 2");

        app.maths.conv_de = Notation::Postfixe;
        app.maths.expr_conv = "1 +".into();
        app.convertir_via_noyau();
        assert_eq!(app.maths.resultat_conv, MSG_EXPRESSION_INVALIDE);
    }

    #[test]
    fn bases() {
        let mut app = AppCalc::default();
        app.bases.de = Base::Binaire;
        app.bases.vers = SortieBase::Hexa;
        app.bases.entree = "11111111".into();
        app.base_via_noyau();
        assert_eq!(app.bases.resultat, "Résultat : FF");

        app.bases.entree = "102".into();
        app.base_via_noyau();
        assert_eq!(app.bases.resultat, MSG_FORMAT_NOMBRE);
    }

    #[test]
    fn unites_et_cout() {
        let mut app = AppCalc::default();
        app.set_grandeur(Grandeur::Temperature);
        app.unites.de = 0;
        app.unites.vers = 1;
        app.unites.valeur = "100".into();
        app.unite_via_noyau();
        assert_eq!(app.unites.resultat, "100 Celsius = 212.00 Fahrenheit");

        app.unites.valeur = "chaud".into();
        app.unite_via_noyau();
        assert_eq!(app.unites.resultat, MSG_VALEUR_INVALIDE);

        app.cout.grammes = "250".into();
        app.cout.prix_kg = "80".into();
        app.cout_via_noyau();
        assert_eq!(app.cout.resultat, "Coût total : ₹20.00 pour 250 grammes");

        app.cout.prix_kg = "".into();
        app.cout_via_noyau();
        assert_eq!(app.cout.resultat, MSG_VALEUR_INVALIDE);
    }
}
