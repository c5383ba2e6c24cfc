use eframe::egui::{self, Color32};

use crate::types::HumanizedResult;

const BADGE_COLOR: Color32 = Color32::from_rgb(0x81, 0x8c, 0xf8);
const PREVIEW_CHARS: usize = 480;

#[derive(Default, Debug)]
pub struct ResultPanelOutput {
    pub copy: bool,
}

/// Humanized output followed by the before/after comparison.
pub struct ResultPanel<'a> {
    pub result: &'a HumanizedResult,
    pub preserve_structure: bool,
}

impl<'a> ResultPanel<'a> {
    pub fn show(&self, ui: &mut egui::Ui) -> ResultPanelOutput {
        let mut output = ResultPanelOutput::default();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong("VERSION HUMANISÉE");
                if self.preserve_structure {
                    ui.colored_label(BADGE_COLOR, "STRUCTURE PRÉSERVÉE");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("COPIER LE RÉSULTAT").clicked() {
                        output.copy = true;
                    }
                });
            });
            ui.separator();
            let body = egui::RichText::new(&self.result.humanized_text).size(16.0);
            ui.add(egui::Label::new(body).wrap(true));
        });
        ui.add_space(16.0);
        ui.columns(2, |columns| {
            comparison_card(&mut columns[0], "AVANT (IA)", &self.result.original_text, true);
            comparison_card(
                &mut columns[1],
                "APRÈS (HUMANISÉ)",
                &self.result.humanized_text,
                false,
            );
        });
        output
    }
}

fn comparison_card(ui: &mut egui::Ui, title: &str, text: &str, italic: bool) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.small(title);
        let mut body = egui::RichText::new(format!("\"{}\"", preview(text))).small();
        if italic {
            body = body.italics();
        }
        ui.add(egui::Label::new(body).wrap(true));
    });
}

/// Shortens long text for the comparison cards.
pub fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(PREVIEW_CHARS).collect();
    short.push('…');
    short
}
