//! Browse filters - the user-controlled inputs of the list screen
//!
//! `BrowseFilters` is the record the address bar owns: a free-text search
//! term and an ordered set of selected categories. Every transition returns
//! a complete new record so both fields are always restated together.

use serde::{Deserialize, Serialize};

use super::CategoryName;

/// Search term plus ordered, duplicate-free category selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowseFilters {
    search: String,
    categories: Vec<CategoryName>,
}

impl BrowseFilters {
    /// Build filters, dropping repeated categories (first occurrence wins).
    pub fn new(
        search: impl Into<String>,
        categories: impl IntoIterator<Item = CategoryName>,
    ) -> Self {
        let mut selected: Vec<CategoryName> = Vec::new();
        for category in categories {
            if !selected.contains(&category) {
                selected.push(category);
            }
        }
        Self {
            search: search.into(),
            categories: selected,
        }
    }

    /// The raw search term, exactly as typed
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Selected categories in selection order
    pub fn categories(&self) -> &[CategoryName] {
        &self.categories
    }

    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }

    pub fn is_selected(&self, category: &CategoryName) -> bool {
        self.categories.contains(category)
    }

    /// Case-insensitive substring match; an empty term matches everything.
    pub fn matches_name(&self, name: &str) -> bool {
        if self.search.is_empty() {
            return true;
        }
        name.to_lowercase().contains(&self.search.to_lowercase())
    }

    /// Replace the search term, keeping the current selection.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            categories: self.categories.clone(),
        }
    }

    /// Check or uncheck one category, keeping the search term.
    ///
    /// Checking appends to the end of the selection; checking an already
    /// selected category is a no-op.
    pub fn with_category(&self, category: CategoryName, checked: bool) -> Self {
        let mut categories = self.categories.clone();
        if checked {
            if !categories.contains(&category) {
                categories.push(category);
            }
        } else {
            categories.retain(|c| c != &category);
        }
        Self {
            search: self.search.clone(),
            categories,
        }
    }

    /// Clear the category selection, keeping the search term.
    pub fn without_categories(&self) -> Self {
        Self {
            search: self.search.clone(),
            categories: Vec::new(),
        }
    }
}
