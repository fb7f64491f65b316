use crate::{Element, ElementId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Immutable, versioned element collection
///
/// Cloning is cheap (shared `Arc`); there is no way to mutate a collection
/// in place, so a clone held by the history can never observe later edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementCollection {
    elements: Arc<Vec<Element>>,
}

impl ElementCollection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_vec(elements: Vec<Element>) -> Self {
        Self {
            elements: Arc::new(elements),
        }
    }

    /// Top-level elements in collection order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Deep copy of the top-level vector, the starting point for a new version
    pub fn to_vec(&self) -> Vec<Element> {
        self.elements.as_ref().clone()
    }

    /// Find an element at any depth
    pub fn find(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find_map(|el| el.find(id))
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.find(id).is_some()
    }

    /// Whether `id` names a top-level element
    pub fn is_top_level(&self, id: &ElementId) -> bool {
        self.elements.iter().any(|el| &el.id == id)
    }

    /// Every id in the collection, depth first, parents before children
    pub fn ids(&self) -> Vec<ElementId> {
        fn collect(elements: &[Element], out: &mut Vec<ElementId>) {
            for el in elements {
                out.push(el.id.clone());
                collect(&el.children, out);
            }
        }

        let mut out = Vec::new();
        collect(&self.elements, &mut out);
        out
    }

    /// Whether two collections share the same allocation
    pub fn ptr_eq(&self, other: &ElementCollection) -> bool {
        Arc::ptr_eq(&self.elements, &other.elements)
    }
}

impl From<Vec<Element>> for ElementCollection {
    fn from(elements: Vec<Element>) -> Self {
        Self::from_vec(elements)
    }
}

impl<'a> IntoIterator for &'a ElementCollection {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Serialize for ElementCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.elements.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ElementCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Element>::deserialize(deserializer).map(Self::from_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementKind;

    fn sample() -> ElementCollection {
        ElementCollection::from_vec(vec![
            Element::new("a".into(), ElementKind::Container, 0.0, 0.0)
                .with_child(Element::new("a1".into(), ElementKind::Text, 0.0, 0.0)),
            Element::new("b".into(), ElementKind::Button, 0.0, 0.0),
        ])
    }

    #[test]
    fn test_ids_are_depth_first() {
        let ids: Vec<String> = sample().ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["a", "a1", "b"]);
    }

    #[test]
    fn test_clone_shares_storage() {
        let c = sample();
        let d = c.clone();
        assert!(c.ptr_eq(&d));
        assert!(!c.ptr_eq(&ElementCollection::from_vec(c.to_vec())));
    }

    #[test]
    fn test_nested_lookup() {
        let c = sample();
        assert!(c.contains(&"a1".into()));
        assert!(!c.is_top_level(&"a1".into()));
        assert!(c.is_top_level(&"b".into()));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        let back: ElementCollection = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
