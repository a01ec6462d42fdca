use kanto_core::display::{NO_RESULTS, summary_line};
use kanto_core::{Entity, FilterState, apply, capitalize, format_id};

/// One card per line: `#004 Charmander      fire`.
pub fn card(entity: &Entity) -> String {
    format!(
        "{:<6} {:<16} {}",
        format_id(entity.id),
        capitalize(&entity.name),
        entity.types.join(", ")
    )
}

/// Summary line followed by the visible cards, or the empty-result notice.
pub fn results(entities: &[Entity], state: &FilterState) -> String {
    let visible = apply(entities, state);

    let mut out = summary_line(visible.len(), state.invert);
    out.push('\n');

    if visible.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
        return out;
    }

    for entity in visible {
        out.push_str(&card(entity));
        out.push('\n');
    }
    out
}

pub fn state_line(state: &FilterState) -> String {
    let text = if state.search_text.is_empty() {
        "(any)"
    } else {
        state.search_text.as_str()
    };
    let category = if state.selected_category.is_empty() {
        "(all)"
    } else {
        state.selected_category.as_str()
    };
    let mode = if state.invert {
        "EXCLUDE (NOT)"
    } else {
        "INCLUDE"
    };
    format!("search: {text} | type: {category} | mode: {mode}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charmander() -> Entity {
        Entity {
            id: 4,
            name: "charmander".to_string(),
            types: vec!["fire".to_string()],
            image: None,
        }
    }

    #[test]
    fn card_shows_padded_id_and_capitalized_name() {
        let line = card(&charmander());
        assert!(line.starts_with("#004"));
        assert!(line.contains("Charmander"));
        assert!(line.ends_with("fire"));
    }

    #[test]
    fn results_report_empty_set() {
        let out = results(&[charmander()], &FilterState::new("char", "", true));
        assert!(out.starts_with("Showing 0 results (exclusion mode active)"));
        assert!(out.contains(NO_RESULTS));
    }

    #[test]
    fn results_list_visible_cards() {
        let out = results(&[charmander()], &FilterState::default());
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("#004"));
    }

    #[test]
    fn state_line_shows_placeholders() {
        assert_eq!(
            state_line(&FilterState::default()),
            "search: (any) | type: (all) | mode: INCLUDE"
        );
    }
}
