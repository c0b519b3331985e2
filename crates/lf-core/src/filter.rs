//! Public browsing filter.
//!
//! The visibility gate (only `Available` and `Claimed` items) always applies.
//! On top of it, three independent predicates are ANDed together: a
//! case-insensitive search over name/description/location, an exact category,
//! and an exact status. Empty values match everything. Results keep the
//! collection's order and are recomputed on every call.

use crate::entities::Item;
use crate::enums::ItemStatus;
use crate::errors::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Lowercased search term; empty matches everything.
    search: String,
    category: Option<String>,
    status: Option<ItemStatus>,
}

impl ItemFilter {
    /// Build a filter from raw form values. Empty strings disable the
    /// corresponding predicate.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `status` is not a known item status.
    pub fn from_form(search: &str, category: &str, status: &str) -> Result<Self, CoreError> {
        let status = if status.trim().is_empty() {
            None
        } else {
            Some(status.parse::<ItemStatus>()?)
        };
        Ok(Self::default()
            .search(search)
            .category(category)
            .with_status(status))
    }

    #[must_use]
    pub fn search(mut self, term: &str) -> Self {
        self.search = term.to_lowercase();
        self
    }

    #[must_use]
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string()).filter(|c| !c.is_empty());
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: Option<ItemStatus>) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn matches_search(&self, item: &Item) -> bool {
        self.search.is_empty()
            || [&item.name, &item.description, &item.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&self.search))
    }

    #[must_use]
    pub fn matches_category(&self, item: &Item) -> bool {
        self.category.as_deref().is_none_or(|c| item.category == c)
    }

    #[must_use]
    pub fn matches_status(&self, item: &Item) -> bool {
        self.status.is_none_or(|s| item.status == s)
    }

    /// Visibility gate plus all three predicates.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        item.is_visible()
            && self.matches_search(item)
            && self.matches_category(item)
            && self.matches_status(item)
    }
}

/// Items a public listing should show for `filter`, in collection order.
#[must_use]
pub fn renderable_items<'a>(items: &'a [Item], filter: &ItemFilter) -> Vec<&'a Item> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
