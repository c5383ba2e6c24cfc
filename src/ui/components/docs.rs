use eframe::egui;

pub const STYLE_NOTES: [(&str, &str); 6] = [
    ("Naturel", "Équilibre parfait pour un usage quotidien."),
    ("Décontracté", "Ton amical, parfait pour les blogs ou réseaux sociaux."),
    ("Professionnel", "Idéal pour les emails corporate et rapports."),
    ("Créatif", "Utilise des métaphores et une structure plus variée."),
    ("Académique", "Formel mais sans les lourdeurs typiques de l'IA."),
    ("Conteur", "Récit vivant, idéal pour les anecdotes et les narrations."),
];

pub const INDICATOR_NOTES: [(&str, &str); 3] = [
    (
        "Score Humain",
        "Probabilité que le texte soit perçu comme écrit par un humain.",
    ),
    ("Lisibilité", "Mesure la fluidité et la facilité de lecture."),
    (
        "Burstiness",
        "Variation de la longueur des phrases pour briser la monotonie IA.",
    ),
];

pub const USAGE_TIPS: [&str; 3] = [
    "Utilisez une intensité élevée (80%+) si votre texte source est très robotique ou répétitif.",
    "Activez \"Préserver la Structure\" pour les documents techniques ou les articles structurés avec des listes à puces.",
    "Spécifiez précisément votre Public Cible. Un texte pour \"Étudiants\" n'aura pas le même vocabulaire qu'un texte pour \"Directeurs Financiers\".",
];

/// Static help page. Returns `true` when the user asks to go back.
pub struct DocsView;

impl DocsView {
    pub fn show(&self, ui: &mut egui::Ui) -> bool {
        let mut back = false;
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Documentation Humanoide AI");
            ui.label(
                "Bienvenue dans le guide complet de Humanoide AI. L'outil utilise des modèles de langage avancés pour transformer des textes générés par IA en contenus naturels et fluides.",
            );
            ui.add_space(12.0);
            ui.columns(2, |columns| {
                note_card(&mut columns[0], "STYLES D'ÉCRITURE", &STYLE_NOTES);
                note_card(&mut columns[1], "INDICATEURS CLÉS", &INDICATOR_NOTES);
            });
            ui.add_space(12.0);
            ui.heading("Conseils d'utilisation");
            for (index, tip) in USAGE_TIPS.iter().enumerate() {
                ui.horizontal_wrapped(|ui| {
                    ui.strong(format!("{:02}", index + 1));
                    ui.label(*tip);
                });
            }
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                if ui.button("Retour à l'outil").clicked() {
                    back = true;
                }
            });
        });
        back
    }
}

fn note_card(ui: &mut egui::Ui, title: &str, notes: &[(&str, &str)]) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.strong(title);
        for (name, text) in notes {
            ui.horizontal_wrapped(|ui| {
                ui.strong(format!("{} :", name));
                ui.label(*text);
            });
        }
    });
}
