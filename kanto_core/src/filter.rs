//! Visible-subset derivation for the loaded catalog.
//!
//! Invert mode negates each *active* criterion on its own and then conjoins
//! the results, so with both criteria set it selects entities matching
//! neither of them. It is not the negation of the whole conjunction.

use serde::{Deserialize, Serialize};

use crate::Entity;

/// Current filter criteria. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub selected_category: String,
    #[serde(default)]
    pub invert: bool,
}

impl FilterState {
    #[must_use]
    pub fn new(
        search_text: impl Into<String>,
        selected_category: impl Into<String>,
        invert: bool,
    ) -> Self {
        Self {
            search_text: search_text.into(),
            selected_category: selected_category.into(),
            invert,
        }
    }

    /// True when neither criterion is set, so `apply` is the identity.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.search_text.is_empty() && self.selected_category.is_empty()
    }

    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        let text_active = !self.search_text.is_empty();
        let category_active = !self.selected_category.is_empty();

        let text_match = !text_active || self.text_matches(entity);
        let category_match = !category_active || entity.has_type(&self.selected_category);

        if self.invert {
            let text_result = !text_active || !text_match;
            let category_result = !category_active || !category_match;
            text_result && category_result
        } else {
            text_match && category_match
        }
    }

    fn text_matches(&self, entity: &Entity) -> bool {
        let needle = self.search_text.to_lowercase();
        entity.name.to_lowercase().contains(&needle) || entity.id.to_string().contains(&needle)
    }
}

/// Returns the entities passing `state`, in their original order.
#[must_use]
pub fn apply<'a>(entities: &'a [Entity], state: &FilterState) -> Vec<&'a Entity> {
    entities.iter().filter(|e| state.matches(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: u32, name: &str, types: &[&str]) -> Entity {
        Entity {
            id,
            name: name.to_string(),
            types: types.iter().map(ToString::to_string).collect(),
            image: None,
        }
    }

    fn sample() -> Vec<Entity> {
        vec![
            entity(1, "bulbasaur", &["grass", "poison"]),
            entity(4, "charmander", &["fire"]),
            entity(5, "charmeleon", &["fire"]),
            entity(7, "squirtle", &["water"]),
            entity(14, "kakuna", &["bug", "poison"]),
            entity(41, "zubat", &["poison", "flying"]),
        ]
    }

    fn ids(result: &[&Entity]) -> Vec<u32> {
        result.iter().map(|e| e.id).collect()
    }

    #[test]
    fn empty_state_is_identity_regardless_of_invert() {
        let entities = sample();
        let all: Vec<u32> = entities.iter().map(|e| e.id).collect();

        for invert in [false, true] {
            let state = FilterState::new("", "", invert);
            assert!(state.is_unconstrained());
            assert_eq!(ids(&apply(&entities, &state)), all);
        }
    }

    #[test]
    fn category_only_selects_members() {
        let entities = sample();
        let state = FilterState::new("", "poison", false);
        assert_eq!(ids(&apply(&entities, &state)), vec![1, 14, 41]);
    }

    #[test]
    fn category_is_exact_membership() {
        let entities = sample();
        let state = FilterState::new("", "Fire", false);
        assert!(apply(&entities, &state).is_empty());
    }

    #[test]
    fn text_matches_name_case_insensitively() {
        let entities = sample();
        let state = FilterState::new("CHAR", "", false);
        assert_eq!(ids(&apply(&entities, &state)), vec![4, 5]);
    }

    #[test]
    fn text_matches_id_as_substring() {
        let entities = sample();
        // Substring, not numeric equality.
        let state = FilterState::new("4", "", false);
        assert_eq!(ids(&apply(&entities, &state)), vec![4, 14, 41]);
    }

    #[test]
    fn text_and_category_conjoin() {
        let entities = sample();
        let state = FilterState::new("char", "water", false);
        assert!(apply(&entities, &state).is_empty());

        let state = FilterState::new("a", "poison", false);
        assert_eq!(ids(&apply(&entities, &state)), vec![1, 14, 41]);
    }

    #[test]
    fn invert_text_only_excludes_name_and_id_hits() {
        let entities = sample();
        let state = FilterState::new("4", "", true);
        assert_eq!(ids(&apply(&entities, &state)), vec![1, 5, 7]);

        let state = FilterState::new("char", "", true);
        assert_eq!(ids(&apply(&entities, &state)), vec![1, 7, 14, 41]);
    }

    #[test]
    fn invert_category_only_excludes_members() {
        let entities = sample();
        let state = FilterState::new("", "poison", true);
        assert_eq!(ids(&apply(&entities, &state)), vec![4, 5, 7]);
    }

    #[test]
    fn invert_with_both_criteria_selects_entities_matching_neither() {
        let entities = vec![
            entity(4, "charmander", &["fire"]),
            entity(7, "squirtle", &["water"]),
        ];
        let state = FilterState::new("char", "fire", true);
        assert_eq!(ids(&apply(&entities, &state)), vec![7]);
    }

    #[test]
    fn invert_is_not_negation_of_the_conjunction() {
        // charmeleon matches the text but not the category. Under "not both"
        // it would be kept; per-criterion negation drops it.
        let entities = vec![
            entity(5, "charmeleon", &["fire"]),
            entity(7, "squirtle", &["water"]),
            entity(8, "wartortle", &["water"]),
        ];
        let state = FilterState::new("char", "water", true);
        let per_criterion = ids(&apply(&entities, &state));

        let plain = FilterState::new("char", "water", false);
        let not_both: Vec<u32> = entities
            .iter()
            .filter(|e| !plain.matches(e))
            .map(|e| e.id)
            .collect();

        assert!(per_criterion.is_empty());
        assert_eq!(not_both, vec![5, 7, 8]);
    }

    #[test]
    fn output_preserves_input_order() {
        let mut entities = sample();
        entities.reverse();
        let state = FilterState::new("", "poison", false);
        assert_eq!(ids(&apply(&entities, &state)), vec![41, 14, 1]);
    }

    #[test]
    fn apply_does_not_touch_input() {
        let entities = sample();
        let before = entities.clone();
        let _ = apply(&entities, &FilterState::new("zu", "flying", true));
        assert_eq!(entities, before);
    }

    #[test]
    fn state_deserializes_with_defaults() {
        let Ok(state) = serde_json::from_str::<FilterState>(r#"{"invert": true}"#) else {
            panic!("FilterState should deserialize from partial JSON");
        };
        assert_eq!(state, FilterState::new("", "", true));
    }
}
