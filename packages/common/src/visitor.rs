use weave_model::{Animation, Element, ElementCollection, Interaction};

/// Visitor pattern for traversing element trees immutably
///
/// This trait provides default implementations that walk the entire tree.
/// Override specific visit_* methods to perform custom actions on nodes.
pub trait Visitor: Sized {
    fn visit_collection(&mut self, collection: &ElementCollection) {
        walk_elements(self, collection.elements());
    }

    fn visit_element(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_animation(&mut self, _animation: &Animation) {
        // Leaf node, no children to walk
    }

    fn visit_interaction(&mut self, _interaction: &Interaction) {
        // Leaf node, no children to walk
    }
}

/// Mutable visitor pattern for transforming element trees
///
/// Similar to Visitor, but provides mutable access to nodes.
/// Use this on an owned copy of a collection while building a new version.
pub trait VisitorMut: Sized {
    fn visit_element_mut(&mut self, element: &mut Element) {
        walk_element_mut(self, element);
    }

    fn visit_animation_mut(&mut self, _animation: &mut Animation) {
        // Leaf node, no children to walk
    }

    fn visit_interaction_mut(&mut self, _interaction: &mut Interaction) {
        // Leaf node, no children to walk
    }
}

// Default walk implementations for immutable visitor

pub fn walk_elements<V: Visitor>(visitor: &mut V, elements: &[Element]) {
    for element in elements {
        visitor.visit_element(element);
    }
}

pub fn walk_element<V: Visitor>(visitor: &mut V, element: &Element) {
    for animation in &element.animations {
        visitor.visit_animation(animation);
    }
    for interaction in &element.interactions {
        visitor.visit_interaction(interaction);
    }
    for child in &element.children {
        visitor.visit_element(child);
    }
}

// Default walk implementations for mutable visitor

pub fn walk_elements_mut<V: VisitorMut>(visitor: &mut V, elements: &mut [Element]) {
    for element in elements {
        visitor.visit_element_mut(element);
    }
}

pub fn walk_element_mut<V: VisitorMut>(visitor: &mut V, element: &mut Element) {
    for animation in &mut element.animations {
        visitor.visit_animation_mut(animation);
    }
    for interaction in &mut element.interactions {
        visitor.visit_interaction_mut(interaction);
    }
    for child in &mut element.children {
        visitor.visit_element_mut(child);
    }
}

/// Collects every element id in a tree, parents first
#[derive(Default)]
pub struct IdCollector {
    pub ids: Vec<String>,
}

impl Visitor for IdCollector {
    fn visit_element(&mut self, element: &Element) {
        self.ids.push(element.id.to_string());
        walk_element(self, element);
    }

    fn visit_animation(&mut self, animation: &Animation) {
        self.ids.push(animation.id.clone());
    }

    fn visit_interaction(&mut self, interaction: &Interaction) {
        self.ids.push(interaction.id.clone());
    }
}

/// Moves a whole subtree by a fixed offset
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl VisitorMut for Offset {
    fn visit_element_mut(&mut self, element: &mut Element) {
        element.x += self.dx;
        element.y += self.dy;
        walk_element_mut(self, element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weave_model::ElementKind;

    fn tree() -> Element {
        Element::new("root".into(), ElementKind::Container, 10.0, 10.0)
            .with_child(Element::new("child".into(), ElementKind::Text, 20.0, 30.0))
    }

    #[test]
    fn test_id_collector_walks_children() {
        let collection = ElementCollection::from_vec(vec![tree()]);
        let mut collector = IdCollector::default();
        collector.visit_collection(&collection);
        assert_eq!(collector.ids, vec!["root", "child"]);
    }

    #[test]
    fn test_offset_moves_subtree() {
        let mut el = tree();
        Offset { dx: 5.0, dy: -5.0 }.visit_element_mut(&mut el);

        assert_eq!((el.x, el.y), (15.0, 5.0));
        assert_eq!((el.children[0].x, el.children[0].y), (25.0, 25.0));
    }

    #[test]
    fn test_counting_visitor() {
        struct Count(usize);
        impl Visitor for Count {
            fn visit_element(&mut self, element: &Element) {
                self.0 += 1;
                walk_element(self, element);
            }
        }

        let mut count = Count(0);
        walk_elements(&mut count, &[tree(), tree()]);
        assert_eq!(count.0, 4);
    }
}
