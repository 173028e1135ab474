use ratatui::style::Color;

pub fn color_for_category(category: &str) -> Color {
    match category.to_lowercase().as_str() {
        "animal welfare" | "animal rescue" => Color::Magenta,
        "sustainability" | "nature" | "environment" => Color::Green,
        "food" | "food drive" => Color::Yellow,
        "community" | "volunteering" => Color::Cyan,
        "music" | "arts" | "culture" => Color::LightBlue,
        "education" | "workshop" => Color::LightYellow,
        "sports" | "recreation" => Color::LightRed,
        _ => Color::White,
    }
}

pub fn pets_icon(pets_allowed: bool) -> &'static str {
    if pets_allowed {
        "\u{1F43E} Yes" // paw prints
    } else {
        "No"
    }
}
