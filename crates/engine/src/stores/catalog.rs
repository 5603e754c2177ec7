//! Catalog state.
//!
//! Owns the loaded record set and the interactive query. A failed load keeps
//! the last good record set and records the error instead.

use serde::Serialize;
use tokio::sync::RwLock;

use dexview_domain::{CatalogItemView, CatalogState, Creature, DomainError, CATEGORY_OPTIONS};

use super::tickets::{RequestTracker, StaleResultDiscard, Ticket};
use crate::use_cases::CatalogLoadError;

/// Everything the catalog screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub items: Vec<CatalogItemView>,
    pub search: String,
    pub category: String,
    pub category_options: Vec<String>,
    /// Zero-based page index
    pub page: usize,
    pub page_count: usize,
    pub filtered_count: usize,
    pub total_records: usize,
    pub label: String,
    pub has_previous: bool,
    pub has_next: bool,
    pub loading: bool,
    pub last_error: Option<String>,
}

#[derive(Debug)]
struct CatalogSlot {
    records: Vec<Creature>,
    state: CatalogState,
    loading: bool,
    last_error: Option<CatalogLoadError>,
}

pub struct CatalogStore {
    tracker: RequestTracker,
    slot: RwLock<CatalogSlot>,
}

impl CatalogStore {
    pub fn new(page_size: usize) -> Result<Self, DomainError> {
        Ok(Self {
            tracker: RequestTracker::new(),
            slot: RwLock::new(CatalogSlot {
                records: Vec::new(),
                state: CatalogState::new(page_size)?,
                loading: false,
                last_error: None,
            }),
        })
    }

    // =========================================================================
    // Loading
    // =========================================================================

    pub async fn begin_load(&self) -> Ticket {
        let mut slot = self.slot.write().await;
        slot.loading = true;
        self.tracker.issue()
    }

    /// Apply a load result. Success replaces the record set and returns to
    /// the first page; failure keeps the previous set.
    pub async fn complete_load(
        &self,
        ticket: Ticket,
        result: Result<Vec<Creature>, CatalogLoadError>,
    ) -> Result<(), StaleResultDiscard> {
        let mut slot = self.slot.write().await;
        if let Err(stale) = self.tracker.check(ticket) {
            tracing::debug!(
                ticket = %stale.ticket,
                latest = %stale.latest,
                "Discarding stale catalog result"
            );
            return Err(stale);
        }

        slot.loading = false;
        match result {
            Ok(records) => {
                slot.records = records;
                slot.state.reset_page();
                slot.last_error = None;
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    retained = slot.records.len(),
                    "Catalog load failed, keeping previous records"
                );
                slot.last_error = Some(e);
            }
        }
        Ok(())
    }

    pub async fn last_error(&self) -> Option<CatalogLoadError> {
        self.slot.read().await.last_error.clone()
    }

    pub async fn record_count(&self) -> usize {
        self.slot.read().await.records.len()
    }

    // =========================================================================
    // Query
    // =========================================================================

    pub async fn set_search(&self, search: &str) {
        self.slot.write().await.state.set_search(search);
    }

    pub async fn set_category(&self, category: &str) {
        self.slot.write().await.state.set_category(category);
    }

    pub async fn next_page(&self) -> Result<bool, DomainError> {
        let mut slot = self.slot.write().await;
        let CatalogSlot { records, state, .. } = &mut *slot;
        state.next_page(records)
    }

    pub async fn previous_page(&self) -> bool {
        self.slot.write().await.state.previous_page()
    }

    pub async fn snapshot(&self) -> Result<CatalogSnapshot, DomainError> {
        let slot = self.slot.read().await;
        let page = slot.state.page(&slot.records)?;
        let query = slot.state.query();

        Ok(CatalogSnapshot {
            items: page.items.iter().map(|c| CatalogItemView::from(*c)).collect(),
            search: query.search.clone(),
            category: query.category.clone(),
            category_options: CATEGORY_OPTIONS.iter().map(|c| c.to_string()).collect(),
            page: page.page,
            page_count: page.page_count,
            filtered_count: page.filtered_count,
            total_records: slot.records.len(),
            label: page.label(),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            loading: slot.loading,
            last_error: slot.last_error.as_ref().map(|e| e.to_string()),
        })
    }
}
