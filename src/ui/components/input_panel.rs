use eframe::egui;

#[derive(Default, Debug)]
pub struct InputPanelOutput {
    pub submit: bool,
    pub clear: bool,
}

pub struct InputPanel<'a> {
    pub text: &'a mut String,
    pub char_count: usize,
    pub is_loading: bool,
    pub can_submit: bool,
}

impl<'a> InputPanel<'a> {
    pub fn show(self, ui: &mut egui::Ui) -> InputPanelOutput {
        let mut output = InputPanelOutput::default();
        ui.add_enabled(
            !self.is_loading,
            egui::TextEdit::multiline(self.text)
                .hint_text("Collez votre texte généré par IA ici (ChatGPT, Claude, etc.)...")
                .desired_rows(12)
                .desired_width(f32::INFINITY),
        );
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.is_loading, egui::Button::new("Effacer"))
                    .clicked()
                {
                    output.clear = true;
                }
                ui.weak(format!("{} caractères", self.char_count));
            });
        });
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            output.submit = submit_button(ui, self.is_loading, self.can_submit);
        });
        output
    }
}

fn submit_button(ui: &mut egui::Ui, is_loading: bool, can_submit: bool) -> bool {
    if is_loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Humanisation...");
        });
        return false;
    }
    ui.add_enabled(
        can_submit,
        egui::Button::new(egui::RichText::new("⚡ Humaniser le Texte").size(18.0)),
    )
    .clicked()
}
