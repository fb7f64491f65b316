//! # Element Mutations
//!
//! Pure transitions from one [`ElementCollection`] to the next.
//!
//! ## Semantics
//!
//! ### apply
//! - Shallow merge of an [`ElementPatch`] into one element, at any depth
//! - Locked elements reject every patch except one that only toggles `locked`
//! - Geometry must stay finite
//!
//! ### apply_many
//! - Folds `apply` over a batch against one working copy
//! - All or nothing: the first failure rejects the whole batch
//!
//! ### remove
//! - Removes the element together with the subtree it owns
//!
//! ### duplicate / paste
//! - Deep copy with fresh ids for every element in the subtree
//! - Whole subtree shifted by the offset, name suffixed with " (Copy)"
//!
//! ### import
//! - Template batch appended as is, apart from fresh ids
//!
//! None of these touch the input collection; a rejected call leaves the
//! caller's state exactly as it was.

use crate::ElementPatch;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};
use weave_common::{walk_element_mut, Offset, VisitorMut};
use weave_model::{Element, ElementCollection, ElementId, IdGenerator};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Element not found: {0}")]
    NotFound(ElementId),

    #[error("Element is locked: {0}")]
    Locked(ElementId),

    #[error("Invalid geometry for {id}: {field} = {value}")]
    InvalidGeometry {
        id: ElementId,
        field: &'static str,
        value: f64,
    },

    #[error("Duplicate element id: {0}")]
    DuplicateId(ElementId),
}

pub type MutationResult<T> = Result<T, MutationError>;

/// Name suffix given to duplicated and pasted elements
pub const COPY_SUFFIX: &str = " (Copy)";

/// Apply a partial update to one element
pub fn apply(
    collection: &ElementCollection,
    id: &ElementId,
    patch: &ElementPatch,
) -> MutationResult<ElementCollection> {
    let mut elements = collection.to_vec();
    apply_in_place(&mut elements, id, patch)?;

    if patch.children.is_some() {
        ensure_unique_ids(&elements)?;
    }

    debug!(element_id = %id, "Applied patch");
    Ok(ElementCollection::from_vec(elements))
}

/// Apply a batch of updates as one atomic transition
pub fn apply_many(
    collection: &ElementCollection,
    batch: &[(ElementId, ElementPatch)],
) -> MutationResult<ElementCollection> {
    let mut elements = collection.to_vec();

    for (id, patch) in batch {
        apply_in_place(&mut elements, id, patch)?;
    }

    if batch.iter().any(|(_, patch)| patch.children.is_some()) {
        ensure_unique_ids(&elements)?;
    }

    debug!(count = batch.len(), "Applied patch batch");
    Ok(ElementCollection::from_vec(elements))
}

/// Remove an element and everything it owns; a locked element stays put
pub fn remove(collection: &ElementCollection, id: &ElementId) -> MutationResult<ElementCollection> {
    match collection.find(id) {
        None => {
            warn!(element_id = %id, "Remove rejected: element not found");
            return Err(MutationError::NotFound(id.clone()));
        }
        Some(target) if target.locked => {
            warn!(element_id = %id, "Remove rejected: element is locked");
            return Err(MutationError::Locked(id.clone()));
        }
        Some(_) => {}
    }

    let mut elements = collection.to_vec();
    if !remove_from(&mut elements, id) {
        return Err(MutationError::NotFound(id.clone()));
    }

    debug!(element_id = %id, "Removed element");
    Ok(ElementCollection::from_vec(elements))
}

/// Deep-copy an element next to the original
///
/// The copy is appended to the container that owns the source: the top level
/// for top-level elements, the parent's `children` otherwise.
pub fn duplicate(
    collection: &ElementCollection,
    id: &ElementId,
    generator: &mut IdGenerator,
    offset: f64,
) -> MutationResult<(ElementCollection, ElementId)> {
    let source = collection
        .find(id)
        .ok_or_else(|| MutationError::NotFound(id.clone()))?;

    let copy = make_copy(source, generator, offset);
    let copy_id = copy.id.clone();

    let mut elements = collection.to_vec();
    match owning_container(&mut elements, id) {
        Some(container) => container.push(copy),
        None => return Err(MutationError::NotFound(id.clone())),
    }

    debug!(source_id = %id, copy_id = %copy_id, "Duplicated element");
    Ok((ElementCollection::from_vec(elements), copy_id))
}

/// Paste a clipboard element at the top level
pub fn paste(
    collection: &ElementCollection,
    clipboard: &Element,
    generator: &mut IdGenerator,
    offset: f64,
) -> MutationResult<(ElementCollection, ElementId)> {
    let copy = make_copy(clipboard, generator, offset);
    let copy_id = copy.id.clone();

    let mut elements = collection.to_vec();
    elements.push(copy);

    debug!(source_id = %clipboard.id, copy_id = %copy_id, "Pasted element");
    Ok((ElementCollection::from_vec(elements), copy_id))
}

/// Append a new top-level element
pub fn insert(collection: &ElementCollection, element: Element) -> MutationResult<ElementCollection> {
    let mut elements = collection.to_vec();
    let id = element.id.clone();
    elements.push(element);

    ensure_unique_ids(&elements)?;

    debug!(element_id = %id, "Inserted element");
    Ok(ElementCollection::from_vec(elements))
}

/// Check a loaded collection: unique ids and finite geometry everywhere
pub fn validate(collection: &ElementCollection) -> MutationResult<()> {
    fn visit(elements: &[Element]) -> MutationResult<()> {
        for el in elements {
            for (field, value) in [("x", el.x), ("y", el.y), ("width", el.width), ("height", el.height)] {
                if !value.is_finite() {
                    return Err(MutationError::InvalidGeometry {
                        id: el.id.clone(),
                        field,
                        value,
                    });
                }
            }
            visit(&el.children)?;
        }
        Ok(())
    }

    visit(collection.elements())?;
    ensure_unique_ids(collection.elements())
}

/// Append template elements at the top level, each subtree with fresh ids
pub fn import(
    collection: &ElementCollection,
    templates: &[Element],
    generator: &mut IdGenerator,
) -> (ElementCollection, Vec<ElementId>) {
    let mut elements = collection.to_vec();
    let mut ids = Vec::with_capacity(templates.len());

    for template in templates {
        let mut element = template.clone();
        Reassign {
            generator: &mut *generator,
        }
        .visit_element_mut(&mut element);
        ids.push(element.id.clone());
        elements.push(element);
    }

    debug!(count = ids.len(), "Imported elements");
    (ElementCollection::from_vec(elements), ids)
}

/// Gives every element in a subtree a fresh id
struct Reassign<'a> {
    generator: &'a mut IdGenerator,
}

impl VisitorMut for Reassign<'_> {
    fn visit_element_mut(&mut self, element: &mut Element) {
        element.id = self.generator.new_id();
        walk_element_mut(self, element);
    }
}

fn make_copy(source: &Element, generator: &mut IdGenerator, offset: f64) -> Element {
    let mut copy = source.clone();

    Reassign { generator }.visit_element_mut(&mut copy);
    Offset {
        dx: offset,
        dy: offset,
    }
    .visit_element_mut(&mut copy);
    copy.name = format!("{}{}", source.name, COPY_SUFFIX);

    copy
}

fn validate_geometry(id: &ElementId, patch: &ElementPatch) -> MutationResult<()> {
    for (field, value) in patch.geometry() {
        if let Some(value) = value {
            if !value.is_finite() {
                warn!(element_id = %id, field, "Patch rejected: non-finite geometry");
                return Err(MutationError::InvalidGeometry {
                    id: id.clone(),
                    field,
                    value,
                });
            }
        }
    }
    Ok(())
}

fn apply_in_place(elements: &mut [Element], id: &ElementId, patch: &ElementPatch) -> MutationResult<()> {
    validate_geometry(id, patch)?;

    let target = elements
        .iter_mut()
        .find_map(|el| el.find_mut(id))
        .ok_or_else(|| {
            warn!(element_id = %id, "Patch rejected: element not found");
            MutationError::NotFound(id.clone())
        })?;

    if target.locked && !patch.is_lock_only() {
        warn!(element_id = %id, "Patch rejected: element is locked");
        return Err(MutationError::Locked(id.clone()));
    }

    patch.apply_to(target);
    Ok(())
}

fn remove_from(elements: &mut Vec<Element>, id: &ElementId) -> bool {
    if let Some(index) = elements.iter().position(|el| &el.id == id) {
        elements.remove(index);
        return true;
    }

    elements
        .iter_mut()
        .any(|el| remove_from(&mut el.children, id))
}

/// The vector that directly holds `id`
fn owning_container<'a>(elements: &'a mut Vec<Element>, id: &ElementId) -> Option<&'a mut Vec<Element>> {
    if elements.iter().any(|el| &el.id == id) {
        return Some(elements);
    }

    elements
        .iter_mut()
        .find_map(|el| owning_container(&mut el.children, id))
}

fn ensure_unique_ids(elements: &[Element]) -> MutationResult<()> {
    fn visit<'a>(elements: &'a [Element], seen: &mut HashSet<&'a ElementId>) -> MutationResult<()> {
        for el in elements {
            if !seen.insert(&el.id) {
                warn!(element_id = %el.id, "Rejected: duplicate element id");
                return Err(MutationError::DuplicateId(el.id.clone()));
            }
            visit(&el.children, seen)?;
        }
        Ok(())
    }

    visit(elements, &mut HashSet::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weave_model::{ElementKind, StyleKey, StyleValue, Styles};

    fn sample() -> ElementCollection {
        ElementCollection::from_vec(vec![
            Element::new("card".into(), ElementKind::Card, 100.0, 100.0)
                .with_child(Element::new("title".into(), ElementKind::Heading, 110.0, 110.0)),
            Element::new("btn".into(), ElementKind::Button, 0.0, 0.0),
        ])
    }

    #[test]
    fn test_apply_merges_styles_shallowly() {
        let base = ElementCollection::from_vec(vec![Element::new(
            "t".into(),
            ElementKind::Text,
            0.0,
            0.0,
        )
        .with_styles(Styles::new().with(StyleKey::Color, "red").with(StyleKey::Padding, 4))]);

        let next = apply(&base, &"t".into(), &ElementPatch::new().style(StyleKey::Color, "blue")).unwrap();
        let el = next.find(&"t".into()).unwrap();

        assert_eq!(el.styles.get(StyleKey::Color), Some(&StyleValue::from("blue")));
        assert_eq!(el.styles.get(StyleKey::Padding), Some(&StyleValue::Number(4.0)));
        // Base untouched
        assert_eq!(
            base.find(&"t".into()).unwrap().styles.get(StyleKey::Color),
            Some(&StyleValue::from("red"))
        );
    }

    #[test]
    fn test_apply_reaches_nested_elements() {
        let next = apply(&sample(), &"title".into(), &ElementPatch::new().x(500.0)).unwrap();
        assert_eq!(next.find(&"title".into()).unwrap().x, 500.0);
    }

    #[test]
    fn test_locked_rejects_everything_but_unlock() {
        let base = apply(&sample(), &"btn".into(), &ElementPatch::new().locked(true)).unwrap();

        let err = apply(&base, &"btn".into(), &ElementPatch::new().x(10.0)).unwrap_err();
        assert_eq!(err, MutationError::Locked("btn".into()));

        let err = apply(&base, &"btn".into(), &ElementPatch::new().locked(false).x(10.0)).unwrap_err();
        assert_eq!(err, MutationError::Locked("btn".into()));

        let unlocked = apply(&base, &"btn".into(), &ElementPatch::new().locked(false)).unwrap();
        assert!(!unlocked.find(&"btn".into()).unwrap().locked);
    }

    #[test]
    fn test_non_finite_geometry_is_rejected() {
        let err = apply(&sample(), &"btn".into(), &ElementPatch::new().width(f64::NAN)).unwrap_err();
        assert!(matches!(err, MutationError::InvalidGeometry { field: "width", .. }));
    }

    #[test]
    fn test_apply_many_is_atomic() {
        let base = sample();
        let batch: Vec<(ElementId, ElementPatch)> = vec![
            ("btn".into(), ElementPatch::new().x(50.0)),
            ("ghost".into(), ElementPatch::new().x(50.0)),
        ];

        let err = apply_many(&base, &batch).unwrap_err();
        assert_eq!(err, MutationError::NotFound("ghost".into()));
        assert_eq!(base.find(&"btn".into()).unwrap().x, 0.0);
    }

    #[test]
    fn test_remove_drops_subtree() {
        let next = remove(&sample(), &"card".into()).unwrap();
        assert!(!next.contains(&"card".into()));
        assert!(!next.contains(&"title".into()));
        assert_eq!(next.len(), 1);

        assert_eq!(
            remove(&next, &"card".into()).unwrap_err(),
            MutationError::NotFound("card".into())
        );
    }

    #[test]
    fn test_remove_rejects_locked_element() {
        let base = apply(&sample(), &"title".into(), &ElementPatch::new().locked(true)).unwrap();

        let err = remove(&base, &"title".into()).unwrap_err();
        assert_eq!(err, MutationError::Locked("title".into()));
        assert!(base.contains(&"title".into()));

        let unlocked = apply(&base, &"title".into(), &ElementPatch::new().locked(false)).unwrap();
        assert!(!remove(&unlocked, &"title".into()).unwrap().contains(&"title".into()));
    }

    #[test]
    fn test_duplicate_nested_stays_in_parent() {
        let mut generator = IdGenerator::new("test");
        let (next, copy_id) = duplicate(&sample(), &"title".into(), &mut generator, 20.0).unwrap();

        let card = next.find(&"card".into()).unwrap();
        assert_eq!(card.children.len(), 2);
        assert_eq!(card.children[1].id, copy_id);
        assert_eq!((card.children[1].x, card.children[1].y), (130.0, 130.0));
        assert_eq!(card.children[1].name, "Heading (Copy)");
    }

    #[test]
    fn test_duplicate_reassigns_every_id_in_subtree() {
        let mut generator = IdGenerator::new("test");
        let (next, copy_id) = duplicate(&sample(), &"card".into(), &mut generator, 20.0).unwrap();

        let copy = next.find(&copy_id).unwrap();
        assert_ne!(copy.children[0].id, ElementId::from("title"));
        assert_eq!(copy.children[0].x, 130.0);
        assert_eq!(next.ids().len(), 5);
    }

    #[test]
    fn test_import_gives_fresh_ids_and_keeps_names() {
        let mut generator = IdGenerator::new("test");
        let templates = sample().to_vec();

        let (next, ids) = import(&sample(), &templates, &mut generator);

        assert_eq!(ids.len(), 2);
        assert_eq!(next.len(), 4);
        assert_eq!(next.ids().len(), 6);
        let imported = next.find(&ids[0]).unwrap();
        assert_eq!(imported.name, "Card");
        assert_eq!(imported.x, 100.0);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let err = insert(
            &sample(),
            Element::new("title".into(), ElementKind::Text, 0.0, 0.0),
        )
        .unwrap_err();
        assert_eq!(err, MutationError::DuplicateId("title".into()));
    }
}
