//! Browse state machine - from roster and filters to the cards on screen
//!
//! The visible list is always
//! `prefix(visible_count, filter(search, base(categories, roster)))`:
//!
//! 1. With no categories selected the base set is the whole roster.
//! 2. Otherwise it is the roster entries belonging to ANY selected category
//!    whose member list has been fetched. Categories still loading (or
//!    failed) contribute nothing yet, so the list can under-count while
//!    their requests are in flight.
//! 3. The search term filters the base set by case-insensitive substring,
//!    preserving roster order.
//! 4. The first `visible_count` entries are displayed.
//!
//! `PageWindow` owns `visible_count` and binds it to the filters it was
//! grown for, so any filter change reads back as the initial window.

use std::collections::{HashMap, HashSet};

use crate::entities::{Category, RosterEntry, RosterPage};
use crate::query_state::QueryState;
use crate::value_objects::{BrowseFilters, CategoryName, ItemName};

/// Number of entries "load more" adds
pub const PAGE_SIZE: usize = 12;

/// Window size after every filter change
pub const INITIAL_VISIBLE_COUNT: usize = PAGE_SIZE;

/// How many filtered entries are visible, for one set of filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    filters: BrowseFilters,
    visible: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(BrowseFilters::default())
    }
}

impl PageWindow {
    pub fn new(filters: BrowseFilters) -> Self {
        Self {
            filters,
            visible: INITIAL_VISIBLE_COUNT,
        }
    }

    /// Visible count for `filters`; the initial window if they differ from
    /// the filters this window was grown for.
    pub fn visible_count(&self, filters: &BrowseFilters) -> usize {
        if &self.filters == filters {
            self.visible
        } else {
            INITIAL_VISIBLE_COUNT
        }
    }

    /// Rebind to `filters`, resetting the window if they changed.
    /// Returns whether a reset happened.
    pub fn sync(&mut self, filters: &BrowseFilters) -> bool {
        if &self.filters == filters {
            return false;
        }
        *self = Self::new(filters.clone());
        true
    }

    /// Grow the window by one page if more filtered entries exist.
    /// Returns whether the window grew.
    pub fn load_more(&mut self, filters: &BrowseFilters, filtered_len: usize) -> bool {
        self.sync(filters);
        if filtered_len <= self.visible {
            return false;
        }
        self.visible += PAGE_SIZE;
        true
    }
}

/// Derived list state for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView {
    base_len: usize,
    filtered: Vec<RosterEntry>,
    visible_count: usize,
}

impl BrowseView {
    /// Size of the category-restricted set before the search filter
    pub fn base_len(&self) -> usize {
        self.base_len
    }

    /// Every entry that passed both filters, in roster order
    pub fn filtered(&self) -> &[RosterEntry] {
        &self.filtered
    }

    /// The entries to render
    pub fn displayed(&self) -> &[RosterEntry] {
        let end = self.visible_count.min(self.filtered.len());
        &self.filtered[..end]
    }

    /// Whether "load more" has anything left to reveal
    pub fn has_more(&self) -> bool {
        self.filtered.len() > self.visible_count
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Derive the visible list.
///
/// `memberships` may hold states for categories that are no longer
/// selected (e.g. a response that landed after the user unchecked it);
/// only the categories in `filters` are consulted.
pub fn derive_view<E>(
    roster: &RosterPage,
    memberships: &HashMap<CategoryName, QueryState<Category, E>>,
    filters: &BrowseFilters,
    visible_count: usize,
) -> BrowseView {
    let base: Vec<&RosterEntry> = if filters.has_categories() {
        let members: HashSet<&ItemName> = filters
            .categories()
            .iter()
            .filter_map(|name| memberships.get(name))
            .filter_map(QueryState::data)
            .flat_map(|category| category.members.iter())
            .collect();
        roster
            .entries
            .iter()
            .filter(|entry| members.contains(&entry.name))
            .collect()
    } else {
        roster.entries.iter().collect()
    };

    let base_len = base.len();
    let filtered = base
        .into_iter()
        .filter(|entry| filters.matches_name(entry.name.as_str()))
        .cloned()
        .collect();

    BrowseView {
        base_len,
        filtered,
        visible_count,
    }
}
