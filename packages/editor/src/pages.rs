//! Page membership and selection
//!
//! Pages are views over the one global collection: a page lists the ids of
//! the top-level elements shown on it and owns nothing.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use weave_model::{Element, ElementCollection, ElementId, Page, PageId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    #[error("Page not found: {0}")]
    PageNotFound(PageId),

    #[error("Page already exists: {0}")]
    DuplicatePage(PageId),

    #[error("Cannot remove the last page")]
    LastPage,
}

/// What happens to a page's elements when the page is removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageDeletePolicy {
    /// Elements stay in the collection, orphaned from any page
    #[default]
    KeepElements,
    /// Elements listed only on the removed page are deleted too
    RemoveElements,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageIndex {
    pages: Vec<Page>,
    current: PageId,
}

impl PageIndex {
    pub fn new() -> Self {
        let home = Page::home();
        Self {
            current: home.id.clone(),
            pages: vec![home],
        }
    }

    /// Rebuild an index from saved pages
    ///
    /// An empty list yields the default home page; a missing or unknown
    /// `current` falls back to the first page.
    pub fn from_pages(pages: Vec<Page>, current: Option<PageId>) -> Result<Self, PageError> {
        let mut index = Self {
            pages: Vec::new(),
            current: PageId::from(""),
        };
        for page in pages {
            index.add_page(page)?;
        }

        let Some(first) = index.pages.first() else {
            return Ok(Self::new());
        };
        index.current = match current {
            Some(id) if index.page(&id).is_some() => id,
            _ => first.id.clone(),
        };

        Ok(index)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|page| &page.id == id)
    }

    fn page_mut(&mut self, id: &PageId) -> Result<&mut Page, PageError> {
        self.pages
            .iter_mut()
            .find(|page| &page.id == id)
            .ok_or_else(|| PageError::PageNotFound(id.clone()))
    }

    pub fn current_page_id(&self) -> &PageId {
        &self.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.page(&self.current)
    }

    pub fn add_page(&mut self, page: Page) -> Result<(), PageError> {
        if self.page(&page.id).is_some() {
            return Err(PageError::DuplicatePage(page.id));
        }

        debug!(page_id = %page.id, "Added page");
        self.pages.push(page);
        Ok(())
    }

    /// Remove a page record and return it; its elements are left alone
    ///
    /// Removing the current page makes the first remaining page current.
    pub fn remove_page(&mut self, id: &PageId) -> Result<Page, PageError> {
        let index = self
            .pages
            .iter()
            .position(|page| &page.id == id)
            .ok_or_else(|| PageError::PageNotFound(id.clone()))?;

        if self.pages.len() == 1 {
            return Err(PageError::LastPage);
        }

        let removed = self.pages.remove(index);
        if &self.current == id {
            // At least one page remains
            self.current = self.pages[0].id.clone();
        }

        debug!(page_id = %id, "Removed page");
        Ok(removed)
    }

    pub fn select_page(&mut self, id: &PageId) -> Result<(), PageError> {
        if self.page(id).is_none() {
            return Err(PageError::PageNotFound(id.clone()));
        }

        self.current = id.clone();
        Ok(())
    }

    pub fn rename_page(&mut self, id: &PageId, name: impl Into<String>) -> Result<(), PageError> {
        self.page_mut(id)?.name = name.into();
        Ok(())
    }

    /// Put an element on the current page
    pub fn assign(&mut self, element_id: ElementId) {
        let current = self.current.clone();
        // `current` always names an existing page
        if let Ok(page) = self.page_mut(&current) {
            if !page.contains(&element_id) {
                page.element_ids.push(element_id);
            }
        }
    }

    /// Add elements to a page, skipping ids already listed
    pub fn link(&mut self, page_id: &PageId, ids: &[ElementId]) -> Result<(), PageError> {
        let page = self.page_mut(page_id)?;
        for id in ids {
            if !page.contains(id) {
                page.element_ids.push(id.clone());
            }
        }
        Ok(())
    }

    /// Drop every membership whose element is no longer at the top level
    pub fn retain_existing(&mut self, collection: &ElementCollection) {
        for page in &mut self.pages {
            page.element_ids.retain(|id| collection.is_top_level(id));
        }
    }

    /// Ids listed on `page_id` and on no other page
    pub fn exclusive_elements(&self, page_id: &PageId) -> Vec<ElementId> {
        let Some(page) = self.page(page_id) else {
            return Vec::new();
        };

        page.element_ids
            .iter()
            .filter(|id| {
                !self
                    .pages
                    .iter()
                    .any(|other| &other.id != page_id && other.contains(id))
            })
            .cloned()
            .collect()
    }

    /// Top-level elements on a page, in collection order
    pub fn elements_for_page<'a>(
        &self,
        page_id: &PageId,
        collection: &'a ElementCollection,
    ) -> Result<Vec<&'a Element>, PageError> {
        let page = self
            .page(page_id)
            .ok_or_else(|| PageError::PageNotFound(page_id.clone()))?;

        Ok(collection
            .iter()
            .filter(|element| page.contains(&element.id))
            .collect())
    }
}

impl Default for PageIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Single and multi selection, kept consistent with each other
///
/// `selected_id` is the primary (last picked) element and is always a member
/// of `selected_ids` when set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected_id: Option<ElementId>,
    selected_ids: Vec<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<&ElementId> {
        self.selected_id.as_ref()
    }

    pub fn selected_ids(&self) -> &[ElementId] {
        &self.selected_ids
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn select_single(&mut self, id: Option<ElementId>) {
        match id {
            Some(id) => {
                self.selected_ids = vec![id.clone()];
                self.selected_id = Some(id);
            }
            None => self.clear(),
        }
    }

    pub fn select_many(&mut self, ids: Vec<ElementId>) {
        let mut unique: Vec<ElementId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        self.selected_ids = unique;
        self.sync_primary();
    }

    /// Add or remove one id (shift-click)
    pub fn toggle(&mut self, id: ElementId) {
        if let Some(index) = self.selected_ids.iter().position(|s| s == &id) {
            self.selected_ids.remove(index);
        } else {
            self.selected_ids.push(id);
        }
        self.sync_primary();
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
        self.selected_ids.clear();
    }

    /// Forget ids that no longer exist anywhere in the collection
    pub fn retain_existing(&mut self, collection: &ElementCollection) {
        self.selected_ids.retain(|id| collection.contains(id));
        self.sync_primary();
    }

    /// The primary id exists only while exactly one element is selected
    fn sync_primary(&mut self) {
        self.selected_id = match self.selected_ids.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        };
    }
}
