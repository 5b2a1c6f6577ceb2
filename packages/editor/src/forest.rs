//! # Element Forest
//!
//! Canonical storage for a mockup: an ordered list of top-level elements,
//! each owning an ordered list of children.
//!
//! Elements live in an arena keyed by [`NodeKey`] with explicit parent links
//! and child lists, plus an id index, so every id-addressed operation works
//! the same at any depth.
//!
//! ## Duplicate ids
//!
//! Seed data with duplicate ids is a caller precondition violation. It is
//! reported via [`Forest::duplicate_ids`] and never repaired: both elements
//! stay in the tree, and id lookups resolve to the first one in document
//! order.
//!
//! ## Snapshots
//!
//! A `Forest` is a plain value. Mutations (see [`crate::mutations`]) clone it
//! and return the new snapshot; the old one is never touched.

use crate::element::{Element, ElementId, ElementType, MockupElement};
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use std::collections::{HashMap, HashSet};

new_key_type! {
    /// Arena key of a forest node
    pub struct NodeKey;
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
}

/// Where an element sits in the tree
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Parent id, `None` for top-level elements
    pub parent: Option<ElementId>,
    /// Index among siblings
    pub index: usize,
}

/// Ordered forest of mockup elements
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<MockupElement>", into = "Vec<MockupElement>")]
pub struct Forest {
    nodes: SlotMap<NodeKey, Node>,
    roots: Vec<NodeKey>,
    index: HashMap<ElementId, NodeKey>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a forest from nested elements
    pub fn from_elements(elements: Vec<MockupElement>) -> Self {
        let mut forest = Self::new();
        for element in elements {
            let key = forest.attach(element, None);
            forest.roots.push(key);
        }
        forest.reindex();

        let duplicates = forest.duplicate_ids();
        if !duplicates.is_empty() {
            tracing::warn!(?duplicates, "Forest seeded with duplicate element ids");
        }

        forest
    }

    /// Nested view of the whole forest
    pub fn to_elements(&self) -> Vec<MockupElement> {
        self.roots.iter().map(|key| self.subtree(*key)).collect()
    }

    /// Number of top-level elements
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of elements at every depth
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.index.get(id).map(|key| &self.nodes[*key].element)
    }

    /// Nested copy of one element and its descendants
    pub fn element_tree(&self, id: &str) -> Option<MockupElement> {
        self.index.get(id).map(|key| self.subtree(*key))
    }

    /// Top-level elements in forest order
    pub fn roots(&self) -> impl Iterator<Item = &Element> + '_ {
        self.roots.iter().map(move |key| &self.nodes[*key].element)
    }

    /// Children of an element in order (empty for unknown ids)
    pub fn children<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Element> + 'a {
        let keys: &'a [NodeKey] = match self.index.get(id) {
            Some(key) => self.nodes[*key].children.as_slice(),
            None => &[],
        };
        keys.iter().map(move |key| &self.nodes[*key].element)
    }

    /// Top-level nodes with their arena keys.
    ///
    /// Keyed walks stay correct when ids repeat, where id lookups would
    /// resolve every copy to the first one.
    pub fn root_nodes(&self) -> impl Iterator<Item = (NodeKey, &Element)> + '_ {
        self.roots.iter().map(move |key| (*key, &self.nodes[*key].element))
    }

    /// Children of one arena node, in order (empty for stale keys)
    pub fn child_nodes(&self, key: NodeKey) -> impl Iterator<Item = (NodeKey, &Element)> + '_ {
        let keys: &[NodeKey] = match self.nodes.get(key) {
            Some(node) => node.children.as_slice(),
            None => &[],
        };
        keys.iter().map(move |child| (*child, &self.nodes[*child].element))
    }

    pub fn parent_id(&self, id: &str) -> Option<&str> {
        let key = self.index.get(id)?;
        let parent = self.nodes[*key].parent?;
        Some(self.nodes[parent].element.id.as_str())
    }

    pub fn placement(&self, id: &str) -> Option<Placement> {
        let key = *self.index.get(id)?;
        let parent = self.nodes[key].parent;
        let index = self.sibling_keys(parent).iter().position(|k| *k == key)?;

        Some(Placement {
            parent: parent.map(|p| self.nodes[p].element.id.clone()),
            index,
        })
    }

    /// Ids of the element and its siblings, in order
    pub fn sibling_ids(&self, id: &str) -> Vec<ElementId> {
        match self.index.get(id) {
            Some(key) => self
                .sibling_keys(self.nodes[*key].parent)
                .iter()
                .map(|k| self.nodes[*k].element.id.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Depth-first walk in document order, with nesting depth
    pub fn walk(&self) -> Vec<(usize, &Element)> {
        self.walk_nodes()
            .into_iter()
            .map(|(depth, _, element)| (depth, element))
            .collect()
    }

    /// Same as [`Forest::walk`], with each node's arena key
    pub fn walk_nodes(&self) -> Vec<(usize, NodeKey, &Element)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, NodeKey)> =
            self.roots.iter().rev().map(|key| (0, *key)).collect();

        while let Some((depth, key)) = stack.pop() {
            let node = &self.nodes[key];
            out.push((depth, key, &node.element));
            for child in node.children.iter().rev() {
                stack.push((depth + 1, *child));
            }
        }

        out
    }

    /// Ids that occur more than once, in order of first repeat
    pub fn duplicate_ids(&self) -> Vec<ElementId> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for (_, element) in self.walk() {
            if !seen.insert(element.id.as_str()) && !duplicates.contains(&element.id) {
                duplicates.push(element.id.clone());
            }
        }

        duplicates
    }

    /// Generate an id for a new element of this type.
    ///
    /// Deterministic: `<type>-<n>` with the smallest `n` above the current
    /// element count that is not already taken.
    pub fn fresh_id(&self, element_type: ElementType) -> ElementId {
        let mut n = self.nodes.len() + 1;
        loop {
            let candidate = format!("{}-{}", element_type.as_str(), n);
            if !self.index.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    // -- In-place edits, used by mutations on a cloned snapshot --

    pub(crate) fn push_root(&mut self, element: Element) {
        let id = element.id.clone();
        let key = self.nodes.insert(Node {
            element,
            parent: None,
            children: Vec::new(),
        });
        self.roots.push(key);
        self.index.entry(id).or_insert(key);
    }

    /// Insert a subtree under `parent` (or at the top level) at `index`.
    ///
    /// Returns false when the parent id is unknown.
    pub(crate) fn insert_subtree(
        &mut self,
        parent: Option<&str>,
        index: usize,
        element: MockupElement,
    ) -> bool {
        let parent_key = match parent {
            Some(id) => match self.index.get(id) {
                Some(key) => Some(*key),
                None => return false,
            },
            None => None,
        };

        let key = self.attach(element, parent_key);
        let siblings = self.sibling_keys_mut(parent_key);
        let index = index.min(siblings.len());
        siblings.insert(index, key);
        self.reindex();

        true
    }

    /// Detach an element and its descendants
    pub(crate) fn remove(&mut self, id: &str) -> Option<(Placement, MockupElement)> {
        let placement = self.placement(id)?;
        let key = self.index[id];
        let removed = self.subtree(key);

        let parent = self.nodes[key].parent;
        self.sibling_keys_mut(parent).retain(|k| *k != key);

        let mut stack = vec![key];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(next) {
                stack.extend(node.children);
            }
        }
        self.reindex();

        Some((placement, removed))
    }

    pub(crate) fn update<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut Element),
    {
        match self.index.get(id) {
            Some(key) => {
                f(&mut self.nodes[*key].element);
                true
            }
            None => false,
        }
    }

    /// Move an element to `index` among its siblings
    pub(crate) fn move_within_siblings(&mut self, id: &str, index: usize) -> bool {
        let Some(key) = self.index.get(id).copied() else {
            return false;
        };

        let parent = self.nodes[key].parent;
        let siblings = self.sibling_keys_mut(parent);
        let Some(from) = siblings.iter().position(|k| *k == key) else {
            return false;
        };

        siblings.remove(from);
        let to = index.min(siblings.len());
        siblings.insert(to, key);

        true
    }

    fn attach(&mut self, element: MockupElement, parent: Option<NodeKey>) -> NodeKey {
        let MockupElement { element, children } = element;
        let key = self.nodes.insert(Node {
            element,
            parent,
            children: Vec::new(),
        });

        let child_keys: Vec<NodeKey> = children
            .into_iter()
            .map(|child| self.attach(child, Some(key)))
            .collect();
        self.nodes[key].children = child_keys;

        key
    }

    fn subtree(&self, key: NodeKey) -> MockupElement {
        let node = &self.nodes[key];
        MockupElement {
            element: node.element.clone(),
            children: node.children.iter().map(|k| self.subtree(*k)).collect(),
        }
    }

    fn sibling_keys(&self, parent: Option<NodeKey>) -> &[NodeKey] {
        match parent {
            Some(p) => &self.nodes[p].children,
            None => &self.roots,
        }
    }

    fn sibling_keys_mut(&mut self, parent: Option<NodeKey>) -> &mut Vec<NodeKey> {
        match parent {
            Some(p) => &mut self.nodes[p].children,
            None => &mut self.roots,
        }
    }

    /// Rebuild the id index so the first occurrence in document order wins
    fn reindex(&mut self) {
        let mut index = HashMap::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeKey> = self.roots.iter().rev().copied().collect();

        while let Some(key) = stack.pop() {
            let node = &self.nodes[key];
            index.entry(node.element.id.clone()).or_insert(key);
            stack.extend(node.children.iter().rev().copied());
        }

        self.index = index;
    }
}

impl PartialEq for Forest {
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count() && self.to_elements() == other.to_elements()
    }
}

impl From<Vec<MockupElement>> for Forest {
    fn from(elements: Vec<MockupElement>) -> Self {
        Forest::from_elements(elements)
    }
}

impl From<Forest> for Vec<MockupElement> {
    fn from(forest: Forest) -> Self {
        forest.to_elements()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(id: &str, element_type: ElementType) -> Element {
        Element::with_defaults(id, element_type, 1)
    }

    fn sample() -> Forest {
        Forest::from_elements(vec![
            MockupElement::leaf(el("nav", ElementType::Nav)),
            MockupElement::leaf(el("hero", ElementType::Hero))
                .with_child(MockupElement::leaf(el("title", ElementType::Text)))
                .with_child(MockupElement::leaf(el("cta", ElementType::Button))),
            MockupElement::leaf(el("footer", ElementType::Footer)),
        ])
    }

    #[test]
    fn test_round_trip_preserves_nesting() {
        let forest = sample();
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.node_count(), 5);

        let elements = forest.to_elements();
        assert_eq!(elements[1].children.len(), 2);
        assert_eq!(elements[1].children[1].id(), "cta");
    }

    #[test]
    fn test_keyed_children_tell_duplicates_apart() {
        let forest = Forest::from_elements(vec![
            MockupElement::leaf(el("dup", ElementType::Card))
                .with_child(MockupElement::leaf(el("kid", ElementType::Text))),
            MockupElement::leaf(el("dup", ElementType::Card)),
        ]);

        let roots: Vec<NodeKey> = forest.root_nodes().map(|(key, _)| key).collect();
        assert_eq!(forest.child_nodes(roots[0]).count(), 1);
        assert_eq!(forest.child_nodes(roots[1]).count(), 0);
        // Id lookups still see only the first copy
        assert_eq!(forest.children("dup").count(), 1);
    }

    #[test]
    fn test_lookup_at_any_depth() {
        let forest = sample();
        assert!(forest.contains("title"));
        assert_eq!(forest.parent_id("title"), Some("hero"));
        assert_eq!(forest.parent_id("hero"), None);
        assert_eq!(
            forest.placement("cta"),
            Some(Placement {
                parent: Some("hero".to_string()),
                index: 1
            })
        );
    }

    #[test]
    fn test_walk_is_document_order() {
        let forest = sample();
        let order: Vec<(usize, &str)> = forest
            .walk()
            .into_iter()
            .map(|(depth, e)| (depth, e.id.as_str()))
            .collect();

        assert_eq!(
            order,
            vec![(0, "nav"), (0, "hero"), (1, "title"), (1, "cta"), (0, "footer")]
        );
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let mut forest = sample();
        let (placement, removed) = forest.remove("hero").unwrap();

        assert_eq!(placement.index, 1);
        assert_eq!(removed.count(), 3);
        assert_eq!(forest.node_count(), 2);
        assert!(!forest.contains("title"));
    }

    #[test]
    fn test_insert_subtree_restores_position() {
        let mut forest = sample();
        let original = forest.clone();
        let (placement, removed) = forest.remove("hero").unwrap();

        assert!(forest.insert_subtree(placement.parent.as_deref(), placement.index, removed));
        assert_eq!(forest, original);
    }

    #[test]
    fn test_fresh_id_skips_taken_ids() {
        let forest = Forest::from_elements(vec![MockupElement::leaf(el("text-2", ElementType::Text))]);
        assert_eq!(forest.fresh_id(ElementType::Text), "text-3");
        assert_eq!(forest.fresh_id(ElementType::Button), "button-2");
    }

    #[test]
    fn test_duplicates_are_reported_not_repaired() {
        let forest = Forest::from_elements(vec![
            MockupElement::leaf(Element {
                name: "first".to_string(),
                ..el("dup", ElementType::Card)
            }),
            MockupElement::leaf(Element {
                name: "second".to_string(),
                ..el("dup", ElementType::Card)
            }),
        ]);

        assert_eq!(forest.len(), 2);
        assert_eq!(forest.duplicate_ids(), vec!["dup".to_string()]);
        assert_eq!(forest.get("dup").map(|e| e.name.as_str()), Some("first"));
    }

    #[test]
    fn test_serializes_as_nested_list() {
        let forest = sample();
        let json = serde_json::to_value(&forest).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(3));

        let back: Forest = serde_json::from_value(json).unwrap();
        assert_eq!(back, forest);
    }
}
