//! Text helpers shared by every front end.

/// Category tags offered by the category selector.
pub const CATEGORIES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

pub const NO_RESULTS: &str = "No entries match these filters.";

/// `#` followed by the id zero-padded to three digits. Wider ids are kept whole.
#[must_use]
pub fn format_id(id: u32) -> String {
    format!("#{id:03}")
}

#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[must_use]
pub fn summary_line(shown: usize, invert: bool) -> String {
    if invert {
        format!("Showing {shown} results (exclusion mode active)")
    } else {
        format!("Showing {shown} results")
    }
}

#[must_use]
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}
