use crate::types::HumanizeOptions;

pub const TARGET_LANGUAGE: &str = "FRANÇAIS";
pub const AUDIENCE_FALLBACK: &str = "Général";

/// Transitions the model must not use.
pub const FORBIDDEN_PHRASES: [&str; 5] = [
    "En conclusion,",
    "De plus,",
    "Il est important de noter,",
    "Explorons...",
    "Dans le paysage actuel...",
];

pub const STRICT_STRUCTURE_CLAUSE: &str = "7. STRUCTURE STRICTE : Vous DEVEZ conserver la mise en page EXACTE du texte original. Gardez le même nombre de paragraphes, les mêmes puces, les mêmes listes numérotées et les mêmes titres. Ne fusionnez pas les paragraphes.";

pub const FLEXIBLE_STRUCTURE_CLAUSE: &str = "7. STRUCTURE : N'hésitez pas à optimiser légèrement le flux des paragraphes pour une meilleure lisibilité si nécessaire.";

/// Builds the humanization prompt for `text`.
///
/// Pure string interpolation: the same input always yields the same prompt.
pub fn build_prompt(text: &str, options: &HumanizeOptions) -> String {
    let forbidden = FORBIDDEN_PHRASES
        .iter()
        .map(|phrase| format!("\"{}\"", phrase))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!(
            "Transformez le texte suivant généré par IA pour qu'il paraisse plus humain en {}.",
            TARGET_LANGUAGE
        ),
        String::new(),
        "INSTRUCTIONS CRITIQUES :".to_string(),
        format!("1. STYLE : Utilisez un ton {}.", options.style),
        format!(
            "2. INTENSITÉ : L'intensité de l'humanisation est de {}/100. Une intensité plus élevée signifie des changements plus radicaux dans le vocabulaire et la syntaxe, ajoutant plus de personnalité et d'expressions idiomatiques françaises.",
            options.intensity
        ),
        format!("3. PUBLIC : Le public cible est {}.", audience(options)),
        format!(
            "4. ÉVITER LES CLICHÉS IA : N'utilisez pas de phrases courantes d'IA comme {}.",
            forbidden
        ),
        "5. VARIATION DES PHRASES : Variez considérablement la longueur des phrases (facteur de \"Burstiness\").".to_string(),
        "6. PERPLEXITÉ : Utilisez des choix de mots plus naturels, parfois moins prévisibles, comme le ferait un rédacteur humain.".to_string(),
        structure_clause(options.preserve_structure).to_string(),
    ];
    lines.push(String::new());
    lines.push("TEXTE À HUMANISER :".to_string());
    lines.push(format!("\"{}\"", text));
    lines.join("\n")
}

pub fn structure_clause(preserve_structure: bool) -> &'static str {
    if preserve_structure {
        STRICT_STRUCTURE_CLAUSE
    } else {
        FLEXIBLE_STRUCTURE_CLAUSE
    }
}

fn audience(options: &HumanizeOptions) -> &str {
    if options.target_audience.trim().is_empty() {
        AUDIENCE_FALLBACK
    } else {
        &options.target_audience
    }
}
