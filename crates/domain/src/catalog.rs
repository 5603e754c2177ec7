//! Catalog filtering and pagination.
//!
//! A query matches records whose name contains the search text
//! (case-insensitive) and, when a category is set, that carry a type with
//! exactly that name. Pages are fixed-size slices of the matches.

use serde::{Deserialize, Serialize};

use crate::entities::Creature;
use crate::error::DomainError;

/// Default number of records per catalog page.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Type names offered by the catalog's category filter.
pub const CATEGORY_OPTIONS: [&str; 17] = [
    "grass", "fire", "water", "bug", "poison", "flying", "normal", "electric", "fairy", "psychic",
    "rock", "ghost", "dark", "steel", "ice", "dragon", "fighting",
];

/// Catalog query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub search: String,
    /// Exact type name, or empty for every type
    pub category: String,
    pub page_size: usize,
    pub page: usize,
}

impl CatalogQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            page_size,
            page: 0,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    fn matches(&self, creature: &Creature, folded_search: &str) -> bool {
        creature.name.to_lowercase().contains(folded_search)
            && (self.category.is_empty() || creature.has_type(&self.category))
    }

    /// Run the query over `records`.
    ///
    /// A page past the end is clamped to the last page (or 0 when nothing
    /// matches).
    pub fn run<'a>(&self, records: &'a [Creature]) -> Result<CatalogPage<'a>, DomainError> {
        if self.page_size == 0 {
            return Err(DomainError::validation(
                "page size must be greater than zero",
            ));
        }

        let folded = self.search.to_lowercase();
        let filtered: Vec<&Creature> = records
            .iter()
            .filter(|c| self.matches(c, &folded))
            .collect();

        let filtered_count = filtered.len();
        let page_count = page_count(filtered_count, self.page_size);
        let page = clamp_page(self.page, page_count);
        let items = filtered
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .collect();

        Ok(CatalogPage {
            items,
            filtered_count,
            page_count,
            page,
        })
    }
}

/// `ceil(filtered_count / page_size)`; zero matches give zero pages.
pub fn page_count(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size)
}

fn clamp_page(page: usize, page_count: usize) -> usize {
    page.min(page_count.saturating_sub(1))
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a Creature>,
    pub filtered_count: usize,
    pub page_count: usize,
    /// Zero-based index of this page after clamping
    pub page: usize,
}

impl CatalogPage<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    /// "Page 2 of 7" style label (1-based).
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.page_count)
    }
}

/// Interactive catalog state.
///
/// Changing the search text or the category always returns to page 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    query: CatalogQuery,
}

impl CatalogState {
    pub fn new(page_size: usize) -> Result<Self, DomainError> {
        if page_size == 0 {
            return Err(DomainError::validation(
                "page size must be greater than zero",
            ));
        }
        Ok(Self {
            query: CatalogQuery::new(page_size),
        })
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.query.page = 0;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.query.category = category.into();
        self.query.page = 0;
    }

    /// Return to the first page, e.g. after the record set changed.
    pub fn reset_page(&mut self) {
        self.query.page = 0;
    }

    /// Advance one page if `records` has one; returns whether it moved.
    pub fn next_page(&mut self, records: &[Creature]) -> Result<bool, DomainError> {
        let current = self.query.run(records)?;
        if current.has_next() {
            self.query.page = current.page + 1;
            Ok(true)
        } else {
            self.query.page = current.page;
            Ok(false)
        }
    }

    /// Go back one page; returns whether it moved.
    pub fn previous_page(&mut self) -> bool {
        if self.query.page > 0 {
            self.query.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn page<'a>(&self, records: &'a [Creature]) -> Result<CatalogPage<'a>, DomainError> {
        self.query.run(records)
    }
}
