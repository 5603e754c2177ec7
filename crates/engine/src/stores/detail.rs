//! Detail view state.
//!
//! Holds the outcome of the most recent detail request. Results for
//! superseded requests are discarded so a slow response can never overwrite
//! the view the user navigated to afterwards.

use tokio::sync::RwLock;

use dexview_domain::DetailView;

use super::tickets::{RequestTracker, StaleResultDiscard, Ticket};
use crate::infrastructure::ports::FetchError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Idle,
    Loading {
        name: String,
    },
    Ready(Box<DetailView>),
    /// Assembly failed; distinct from `Loading` so the caller can show a
    /// not-found screen.
    Unavailable {
        name: String,
        reason: FetchError,
    },
}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn view(&self) -> Option<&DetailView> {
        match self {
            Self::Ready(view) => Some(&**view),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct DetailSlot {
    requested: String,
    state: DetailState,
}

/// Latest-request-wins store for the detail screen.
#[derive(Debug, Default)]
pub struct DetailStore {
    tracker: RequestTracker,
    slot: RwLock<DetailSlot>,
}

impl DetailStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `name`, superseding any in flight.
    pub async fn begin(&self, name: &str) -> Ticket {
        let mut slot = self.slot.write().await;
        let ticket = self.tracker.issue();
        slot.requested = name.to_string();
        slot.state = DetailState::Loading {
            name: name.to_string(),
        };
        tracing::debug!(%ticket, name, "Detail request started");
        ticket
    }

    /// Apply the outcome of the request tagged `ticket` and return the state
    /// it produced, read under the same guard.
    ///
    /// Fails with [`StaleResultDiscard`] and leaves the state untouched when
    /// a newer request has begun since.
    pub async fn complete(
        &self,
        ticket: Ticket,
        result: Result<DetailView, FetchError>,
    ) -> Result<DetailState, StaleResultDiscard> {
        let mut slot = self.slot.write().await;
        if let Err(stale) = self.tracker.check(ticket) {
            tracing::debug!(
                ticket = %stale.ticket,
                latest = %stale.latest,
                "Discarding stale detail result"
            );
            return Err(stale);
        }

        slot.state = match result {
            Ok(view) => DetailState::Ready(Box::new(view)),
            Err(reason) => {
                tracing::warn!(name = %slot.requested, error = %reason, "Detail view unavailable");
                DetailState::Unavailable {
                    name: slot.requested.clone(),
                    reason,
                }
            }
        };
        Ok(slot.state.clone())
    }

    pub async fn snapshot(&self) -> DetailState {
        self.slot.read().await.state.clone()
    }
}
