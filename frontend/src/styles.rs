use shared::models::{Candidate, Category};

pub const CONTAINER: &str = "bg-gray-900 container mx-auto px-6 py-10 max-w-5xl rounded-xl shadow-lg mt-16";

pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6 text-center";

pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-100";
pub const HEADING_MD: &str = "text-2xl font-bold mb-5 text-gray-100";
pub const TEXT_MUTED: &str = "text-sm text-gray-400";

pub const CARD_GRID: &str = "flex flex-wrap justify-center gap-6 mb-10";
pub const CARD_SHELL: &str = "relative w-64 h-96 rounded-2xl shadow-2xl border-4 p-4 flex flex-col justify-between";
pub const CARD_BACK: &str = "relative w-64 h-96 rounded-2xl shadow-2xl border-4 bg-green-100 border-green-500 text-green-900 flex items-center justify-center p-4";
pub const CARD_QUOTE: &str = "bg-white rounded-md p-2 mb-2 shadow-inner";
pub const CARD_TOTEM: &str = "bg-gray-100 rounded-lg p-2 shadow-inner mb-3";
pub const VOTE_BUTTON: &str = "px-4 py-2 bg-yellow-400 hover:bg-yellow-500 text-black font-bold rounded-lg shadow-md";

pub const BOARD_ROW: &str = "flex justify-between items-center bg-gray-800 border border-gray-700 rounded-lg px-4 py-3";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white shadow-lg"),
        "success" => combine_classes(ALERT_CARD, "bg-green-500 text-white shadow-lg"),
        "warning" => combine_classes(ALERT_CARD, "bg-yellow-500 text-white shadow-lg"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white shadow-lg"),
    }
}

fn normalised_ward(ward: &str) -> String {
    ward.to_lowercase()
        .replace('ā', "a")
        .replace('ō', "o")
        .replace('ū', "u")
}

/// Pastel face per ward, matching the printed card deck.
pub fn ward_style(candidate: &Candidate) -> &'static str {
    if candidate.category == Category::Mayor {
        return "bg-white border-indigo-800";
    }
    let ward = normalised_ward(candidate.ward);
    if ward.contains("maori") {
        "bg-pink-100 border-red-600"
    } else if ward.contains("east rural") {
        "bg-blue-100 border-teal-600"
    } else if ward.contains("mangakino") {
        "bg-green-100 border-green-600"
    } else if ward.contains("turangi") || ward.contains("tongariro") {
        "bg-yellow-100 border-amber-600"
    } else if ward.contains("taupo") {
        "bg-orange-100 border-gray-600"
    } else {
        "bg-gray-100 border-gray-400"
    }
}

pub fn ward_icon(candidate: &Candidate) -> &'static str {
    if candidate.category == Category::Mayor {
        return "👑";
    }
    let ward = normalised_ward(candidate.ward);
    if ward.contains("maori") {
        "🪶"
    } else if ward.contains("turangi") || ward.contains("tongariro") {
        "🌲"
    } else if ward.contains("mangakino") {
        "⛰️"
    } else if ward.contains("taupo") {
        "💧"
    } else {
        ""
    }
}
