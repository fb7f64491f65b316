//! # Editor
//!
//! The context object a host drives. It owns the working collection, the
//! snapshot history, pages, selection, clipboard, theme, config and the id
//! generator, and turns each request into exactly one history commit.
//!
//! ## Gestures
//!
//! A drag or resize produces many updates. Between [`Editor::begin_gesture`]
//! and [`Editor::end_gesture`] mutations replace the working collection
//! without committing; ending the gesture commits once if anything changed.
//! Undo and redo close an open gesture first.
//!
//! ## Pages and selection
//!
//! Neither is part of a snapshot. New elements are selected and put on the
//! current page; deleted elements leave every page and the selection. After
//! undo/redo the selection forgets ids that no longer exist.

use crate::alignment::{self, AlignOp, MIN_SELECTION};
use crate::codegen::{self, Target};
use crate::mutations::{self, MutationError};
use crate::{
    EditorConfig, EditorError, ElementPatch, History, PageDeletePolicy, PageIndex, Selection,
};
use tracing::{debug, info, trace};
use weave_model::{
    Element, ElementCollection, ElementId, ElementKind, IdGenerator, Page, PageId, StyleKey,
    StyleValue, Theme,
};

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Debug, Clone)]
pub struct Editor {
    /// Working collection; equals the history cursor outside a gesture
    elements: ElementCollection,
    history: History,
    pages: PageIndex,
    selection: Selection,
    clipboard: Option<Element>,
    theme: Option<Theme>,
    config: EditorConfig,
    ids: IdGenerator,
    in_gesture: bool,
}

impl Editor {
    /// Empty project; `project` seeds the id generator
    pub fn new(project: &str) -> Self {
        Self::with_config(project, EditorConfig::default())
    }

    pub fn with_config(project: &str, config: EditorConfig) -> Self {
        Self::from_parts(
            ElementCollection::empty(),
            PageIndex::new(),
            None,
            config,
            IdGenerator::new(project),
        )
    }

    /// Resume from loaded state; the collection becomes the first snapshot
    pub(crate) fn from_parts(
        elements: ElementCollection,
        pages: PageIndex,
        theme: Option<Theme>,
        config: EditorConfig,
        ids: IdGenerator,
    ) -> Self {
        Self {
            history: History::starting_at(elements.clone(), config.max_history),
            elements,
            pages,
            selection: Selection::new(),
            clipboard: None,
            theme,
            config,
            ids,
            in_gesture: false,
        }
    }

    pub fn elements(&self) -> &ElementCollection {
        &self.elements
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.find(id)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn pages(&self) -> &PageIndex {
        &self.pages
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn clipboard(&self) -> Option<&Element> {
        self.clipboard.as_ref()
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn id_generator(&self) -> &IdGenerator {
        &self.ids
    }

    /// Top-level elements on the current page, in collection order
    pub fn page_elements(&self) -> Vec<&Element> {
        self.pages
            .elements_for_page(self.pages.current_page_id(), &self.elements)
            .unwrap_or_default()
    }

    fn commit(&mut self, next: ElementCollection) {
        self.elements = next;

        if self.in_gesture {
            trace!("Commit deferred until gesture ends");
            return;
        }

        self.history.commit(self.elements.clone());
        info!(cursor = self.history.cursor(), "Committed");
    }

    // ---- Elements ----

    /// Place a new element from its kind's template
    ///
    /// The position snaps to the grid when enabled, the active theme fills
    /// absent colors, font and radius, and the element is selected and put
    /// on the current page.
    pub fn create_element(&mut self, kind: ElementKind, x: f64, y: f64) -> EditorResult<ElementId> {
        let id = self.ids.new_id();

        for (field, value) in [("x", x), ("y", y)] {
            if !value.is_finite() {
                let id = id.clone();
                return Err(MutationError::InvalidGeometry { id, field, value }.into());
            }
        }

        let mut element = Element::new(id.clone(), kind, self.config.snap(x), self.config.snap(y));
        if let Some(theme) = &self.theme {
            fill_from_theme(&mut element, theme);
        }

        let next = mutations::insert(&self.elements, element)?;
        self.commit(next);
        self.pages.assign(id.clone());
        self.selection.select_single(Some(id.clone()));

        info!(element_id = %id, %kind, "Created element");
        Ok(id)
    }

    pub fn update_element(&mut self, id: &ElementId, patch: &ElementPatch) -> EditorResult<()> {
        let next = mutations::apply(&self.elements, id, patch)?;
        self.commit(next);
        Ok(())
    }

    /// Atomic batch update, one history entry
    pub fn update_elements(&mut self, batch: &[(ElementId, ElementPatch)]) -> EditorResult<()> {
        let next = mutations::apply_many(&self.elements, batch)?;
        self.commit(next);
        Ok(())
    }

    pub fn delete_element(&mut self, id: &ElementId) -> EditorResult<()> {
        let next = mutations::remove(&self.elements, id)?;
        self.commit(next);
        // Page membership stays; pages only list ids present in the collection
        self.selection.retain_existing(&self.elements);

        info!(element_id = %id, "Deleted element");
        Ok(())
    }

    /// Copy an element next to the original and select the copy
    pub fn duplicate_element(&mut self, id: &ElementId) -> EditorResult<ElementId> {
        let (next, copy_id) =
            mutations::duplicate(&self.elements, id, &mut self.ids, self.config.duplicate_offset)?;
        self.commit(next);

        if self.elements.is_top_level(&copy_id) {
            self.pages.assign(copy_id.clone());
        }
        self.selection.select_single(Some(copy_id.clone()));

        info!(source_id = %id, copy_id = %copy_id, "Duplicated element");
        Ok(copy_id)
    }

    /// Append template elements with fresh ids as one history entry
    pub fn import_elements(&mut self, templates: &[Element]) -> Vec<ElementId> {
        if templates.is_empty() {
            debug!("Nothing to import");
            return Vec::new();
        }

        let (next, ids) = mutations::import(&self.elements, templates, &mut self.ids);
        self.commit(next);
        for id in &ids {
            self.pages.assign(id.clone());
        }
        self.selection.select_many(ids.clone());

        info!(count = ids.len(), "Imported elements");
        ids
    }

    // ---- History ----

    pub fn undo(&mut self) -> EditorResult<()> {
        self.end_gesture();

        self.elements = self.history.undo()?;
        self.selection.retain_existing(&self.elements);

        info!(cursor = self.history.cursor(), "Undo");
        Ok(())
    }

    pub fn redo(&mut self) -> EditorResult<()> {
        self.end_gesture();

        self.elements = self.history.redo()?;
        self.selection.retain_existing(&self.elements);

        info!(cursor = self.history.cursor(), "Redo");
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo() || self.gesture_has_changes()
    }

    pub fn can_redo(&self) -> bool {
        !self.gesture_has_changes() && self.history.can_redo()
    }

    // ---- Gestures ----

    pub fn begin_gesture(&mut self) {
        if self.in_gesture {
            debug!("Gesture already open");
            return;
        }

        self.in_gesture = true;
        debug!("Gesture started");
    }

    /// Close the gesture; returns whether a snapshot was committed
    pub fn end_gesture(&mut self) -> bool {
        if !self.in_gesture {
            return false;
        }

        let changed = self.gesture_has_changes();
        self.in_gesture = false;

        if changed {
            self.history.commit(self.elements.clone());
            info!(cursor = self.history.cursor(), "Gesture committed");
        } else {
            debug!("Gesture ended without changes");
        }

        changed
    }

    pub fn in_gesture(&self) -> bool {
        self.in_gesture
    }

    fn gesture_has_changes(&self) -> bool {
        self.in_gesture && !self.elements.ptr_eq(self.history.current())
    }

    // ---- Selection & clipboard ----

    pub fn select(&mut self, id: Option<ElementId>) -> EditorResult<()> {
        if let Some(id) = &id {
            if !self.elements.contains(id) {
                return Err(MutationError::NotFound(id.clone()).into());
            }
        }

        self.selection.select_single(id);
        Ok(())
    }

    /// Replace the selection; unknown ids are dropped
    pub fn select_many(&mut self, ids: Vec<ElementId>) {
        let ids = ids
            .into_iter()
            .filter(|id| self.elements.contains(id))
            .collect();
        self.selection.select_many(ids);
    }

    pub fn toggle_selection(&mut self, id: ElementId) -> EditorResult<()> {
        if !self.elements.contains(&id) {
            return Err(MutationError::NotFound(id).into());
        }

        self.selection.toggle(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Put a copy of the primary selected element on the clipboard
    pub fn copy(&mut self) -> EditorResult<()> {
        let id = self.selection.selected_id().ok_or(EditorError::EmptySelection)?;
        let element = self
            .elements
            .find(id)
            .ok_or_else(|| MutationError::NotFound(id.clone()))?
            .clone();

        debug!(element_id = %element.id, "Copied element");
        self.clipboard = Some(element);
        Ok(())
    }

    /// Paste the clipboard at the top level and select the copy
    pub fn paste(&mut self) -> EditorResult<ElementId> {
        let clipboard = self.clipboard.as_ref().ok_or(EditorError::EmptyClipboard)?;
        let (next, id) =
            mutations::paste(&self.elements, clipboard, &mut self.ids, self.config.duplicate_offset)?;

        self.commit(next);
        self.pages.assign(id.clone());
        self.selection.select_single(Some(id.clone()));

        info!(element_id = %id, "Pasted element");
        Ok(id)
    }

    // ---- Multi-selection ----

    fn selected_existing(&self) -> EditorResult<Vec<ElementId>> {
        let ids: Vec<ElementId> = self
            .selection
            .selected_ids()
            .iter()
            .filter(|id| self.elements.contains(id))
            .cloned()
            .collect();

        if ids.is_empty() {
            return Err(EditorError::EmptySelection);
        }
        Ok(ids)
    }

    /// Delete every selected element; returns how many were selected
    pub fn delete_selected(&mut self) -> EditorResult<usize> {
        let ids = self.selected_existing()?;

        let mut next = self.elements.clone();
        for id in &ids {
            // A selected descendant may already be gone with its parent
            if next.contains(id) {
                next = mutations::remove(&next, id)?;
            }
        }

        self.commit(next);
        self.selection.clear();

        info!(count = ids.len(), "Deleted selection");
        Ok(ids.len())
    }

    /// Duplicate every selected element and select the copies
    pub fn duplicate_selected(&mut self) -> EditorResult<Vec<ElementId>> {
        let ids = self.selected_existing()?;

        let mut next = self.elements.clone();
        let mut copies = Vec::with_capacity(ids.len());
        for id in &ids {
            let (collection, copy_id) =
                mutations::duplicate(&next, id, &mut self.ids, self.config.duplicate_offset)?;
            next = collection;
            copies.push(copy_id);
        }

        self.commit(next);
        for id in &copies {
            if self.elements.is_top_level(id) {
                self.pages.assign(id.clone());
            }
        }
        self.selection.select_many(copies.clone());

        info!(count = copies.len(), "Duplicated selection");
        Ok(copies)
    }

    pub fn lock_selected(&mut self) -> EditorResult<usize> {
        self.set_selection_locked(true)
    }

    pub fn unlock_selected(&mut self) -> EditorResult<usize> {
        self.set_selection_locked(false)
    }

    fn set_selection_locked(&mut self, locked: bool) -> EditorResult<usize> {
        let batch: Vec<(ElementId, ElementPatch)> = self
            .selected_existing()?
            .into_iter()
            .map(|id| (id, ElementPatch::new().locked(locked)))
            .collect();

        self.update_elements(&batch)?;
        info!(count = batch.len(), locked, "Changed lock on selection");
        Ok(batch.len())
    }

    /// Align, distribute or match sizes across the selection
    pub fn align(&mut self, op: AlignOp) -> EditorResult<()> {
        let ids = self.selected_existing()?;
        if ids.len() < MIN_SELECTION {
            return Err(EditorError::SelectionTooSmall {
                required: MIN_SELECTION,
                actual: ids.len(),
            });
        }

        let batch = {
            let elements: Vec<&Element> =
                ids.iter().filter_map(|id| self.elements.find(id)).collect();
            alignment::plan(op, &elements)
        };

        self.update_elements(&batch)?;
        debug!(?op, count = ids.len(), "Aligned selection");
        Ok(())
    }

    // ---- Theme ----

    /// Use `theme` for new elements and as the codegen fallback
    pub fn apply_theme(&mut self, theme: Theme) {
        info!(theme = %theme.name, "Applied theme");
        self.theme = Some(theme);
    }

    pub fn clear_theme(&mut self) {
        self.theme = None;
    }

    // ---- Pages ----

    pub fn add_page(&mut self, name: &str, path: &str) -> EditorResult<PageId> {
        let id = PageId::new(format!("page-{}", self.ids.next_raw()));
        self.pages.add_page(Page::new(id.clone(), name, path))?;

        info!(page_id = %id, "Added page");
        Ok(id)
    }

    /// Remove a page; with [`PageDeletePolicy::RemoveElements`] the elements
    /// listed on no other page are deleted in the same history entry
    pub fn remove_page(&mut self, id: &PageId, policy: PageDeletePolicy) -> EditorResult<Page> {
        let next = match policy {
            PageDeletePolicy::KeepElements => None,
            PageDeletePolicy::RemoveElements => {
                let mut next = self.elements.clone();
                for element_id in self.pages.exclusive_elements(id) {
                    if next.contains(&element_id) {
                        next = mutations::remove(&next, &element_id)?;
                    }
                }
                Some(next)
            }
        };

        let removed = self.pages.remove_page(id)?;

        if let Some(next) = next {
            if !next.ptr_eq(&self.elements) {
                self.commit(next);
                self.selection.retain_existing(&self.elements);
            }
        }

        info!(page_id = %id, ?policy, "Removed page");
        Ok(removed)
    }

    /// Switch pages; the selection is cleared
    pub fn select_page(&mut self, id: &PageId) -> EditorResult<()> {
        self.pages.select_page(id)?;
        self.selection.clear();
        Ok(())
    }

    pub fn rename_page(&mut self, id: &PageId, name: &str) -> EditorResult<()> {
        self.pages.rename_page(id, name)?;
        Ok(())
    }

    // ---- Codegen ----

    /// Generate source from the latest collection
    pub fn generate_code(&self, target: Target) -> EditorResult<String> {
        Ok(codegen::generate(&self.elements, target, self.theme.as_ref())?)
    }
}

/// Fill absent colors, radius and font from the theme
fn fill_from_theme(element: &mut Element, theme: &Theme) {
    let font = if element.kind.is_heading() {
        &theme.fonts.heading
    } else {
        &theme.fonts.body
    };

    let defaults: [(StyleKey, StyleValue); 4] = [
        (StyleKey::BackgroundColor, theme.colors.background.clone().into()),
        (StyleKey::Color, theme.colors.text.clone().into()),
        (StyleKey::BorderRadius, theme.border_radius.into()),
        (StyleKey::FontFamily, font.clone().into()),
    ];

    for (key, value) in defaults {
        if !element.styles.contains(key) {
            element.styles.set(key, value);
        }
    }
}
