//! # Element Store
//!
//! Pure, total functions over [`Forest`] snapshots. Each takes the current
//! forest and returns a new one; an unknown id gives back an equal forest.
//!
//! These are thin wrappers over [`Mutation::apply`] for callers that do not
//! need undo history.

use crate::element::{ElementId, ElementPatch, ElementStyles, ElementType, MockupElement};
use crate::forest::Forest;
use crate::mutations::Mutation;

fn apply_or_keep(forest: &Forest, mutation: Mutation) -> Forest {
    match mutation.apply(forest) {
        Some(applied) => applied.forest,
        None => forest.clone(),
    }
}

/// Append a palette default of `element_type`; returns the new forest and id
pub fn add_element(forest: &Forest, element_type: ElementType) -> (Forest, ElementId) {
    let id = forest.fresh_id(element_type);
    let next = apply_or_keep(forest, Mutation::AddElement { element_type });
    (next, id)
}

pub fn update_element(forest: &Forest, id: &str, patch: ElementPatch) -> Forest {
    apply_or_keep(
        forest,
        Mutation::UpdateElement {
            id: id.to_string(),
            patch,
        },
    )
}

pub fn update_styles(forest: &Forest, id: &str, patch: ElementStyles) -> Forest {
    apply_or_keep(
        forest,
        Mutation::UpdateStyles {
            id: id.to_string(),
            patch,
        },
    )
}

pub fn toggle_visibility(forest: &Forest, id: &str) -> Forest {
    apply_or_keep(forest, Mutation::ToggleVisibility { id: id.to_string() })
}

pub fn toggle_lock(forest: &Forest, id: &str) -> Forest {
    apply_or_keep(forest, Mutation::ToggleLock { id: id.to_string() })
}

pub fn delete_element(forest: &Forest, id: &str) -> Forest {
    apply_or_keep(forest, Mutation::DeleteElement { id: id.to_string() })
}

/// Move among siblings and renumber their `zIndex`
pub fn reorder_element(forest: &Forest, id: &str, index: usize) -> Forest {
    apply_or_keep(
        forest,
        Mutation::ReorderElement {
            id: id.to_string(),
            index,
        },
    )
}

pub fn insert_element(
    forest: &Forest,
    parent: Option<&str>,
    index: usize,
    element: MockupElement,
) -> Forest {
    apply_or_keep(
        forest,
        Mutation::InsertElement {
            parent: parent.map(str::to_string),
            index,
            element,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::default_size;

    #[test]
    fn test_add_appends_with_fresh_id() {
        let (forest, first) = add_element(&Forest::new(), ElementType::Text);
        let (forest, second) = add_element(&forest, ElementType::Text);

        assert_ne!(first, second);
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.get(&second).map(|e| e.z_index), Some(2));
    }

    #[test]
    fn test_add_uses_per_type_defaults() {
        for element_type in ElementType::ALL {
            let (forest, id) = add_element(&Forest::new(), element_type);
            let el = forest.get(&id).unwrap();
            assert_eq!((el.width, el.height), default_size(element_type));
            assert_eq!(el.element_type, element_type);
        }
    }

    #[test]
    fn test_add_is_referentially_transparent() {
        let (base, _) = add_element(&Forest::new(), ElementType::Card);
        let (a, id_a) = add_element(&base, ElementType::Button);
        let (b, id_b) = add_element(&base, ElementType::Button);

        assert_eq!(id_a, id_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_toggles_flip() {
        let (forest, id) = add_element(&Forest::new(), ElementType::Image);

        let hidden = toggle_visibility(&forest, &id);
        assert!(!hidden.get(&id).unwrap().visible);

        let locked = toggle_lock(&forest, &id);
        assert!(locked.get(&id).unwrap().locked);
    }

    #[test]
    fn test_unknown_ids_return_equal_forest() {
        let (forest, _) = add_element(&Forest::new(), ElementType::Card);

        assert_eq!(update_element(&forest, "nope", ElementPatch::position(1.0, 1.0)), forest);
        assert_eq!(update_styles(&forest, "nope", ElementStyles::default()), forest);
        assert_eq!(toggle_visibility(&forest, "nope"), forest);
        assert_eq!(toggle_lock(&forest, "nope"), forest);
        assert_eq!(delete_element(&forest, "nope"), forest);
        assert_eq!(reorder_element(&forest, "nope", 0), forest);
    }
}
