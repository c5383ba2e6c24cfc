use eframe::egui;

use crate::types::{HumanizeOptions, WritingStyle, MAX_INTENSITY, MIN_INTENSITY};

pub struct OptionsPanel<'a> {
    pub options: &'a mut HumanizeOptions,
    pub enabled: bool,
}

impl<'a> OptionsPanel<'a> {
    pub fn show(self, ui: &mut egui::Ui) {
        ui.add_enabled_ui(self.enabled, |ui| {
            ui.heading("Paramètres");
            ui.add_space(8.0);
            style_selector(ui, &mut self.options.style);
            ui.add_space(8.0);
            intensity_slider(ui, self.options);
            ui.add_space(8.0);
            ui.label("Public Cible");
            ui.add(
                egui::TextEdit::singleline(&mut self.options.target_audience)
                    .hint_text("Ex: Professionnels, Étudiants..."),
            );
            ui.separator();
            ui.checkbox(&mut self.options.preserve_structure, "Préserver la Structure")
                .on_hover_text("Garde paragraphes & listes");
        });
    }
}

fn style_selector(ui: &mut egui::Ui, style: &mut WritingStyle) {
    ui.label("Style d'Écriture");
    egui::ComboBox::from_id_source("writing_style")
        .selected_text(style.label())
        .show_ui(ui, |ui| {
            for option in WritingStyle::ALL {
                ui.selectable_value(style, option, option.label());
            }
        });
}

fn intensity_slider(ui: &mut egui::Ui, options: &mut HumanizeOptions) {
    ui.label(format!("Intensité ({}%)", options.intensity));
    let mut intensity = options.intensity;
    ui.add(egui::Slider::new(&mut intensity, MIN_INTENSITY..=MAX_INTENSITY).show_value(false));
    options.set_intensity(intensity);
    ui.horizontal(|ui| {
        ui.small("Léger");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.small("Extrême");
        });
    });
}
