//! Master-detail dashboard controller.
//!
//! The controller is the exclusive owner of all UI-facing fetch state:
//! the list slot, the detail slot, and the current selection. Nothing
//! else mutates them. Overlapping operations interleave at the network
//! boundary; there is no cancellation. Instead, a settling detail fetch
//! is committed only if its originating identifier still matches the
//! current selection, so the rendered detail always corresponds to the
//! most recently settled-and-still-current selection.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use hearth_core::fetch::FetchState;
use hearth_core::listing::{ListingProvider, PropertyDetail, PropertySummary};

/// UI-facing dashboard state.
///
/// The list is always exactly the most recent loaded payload or empty;
/// a loaded-but-empty list is distinct from a list that was never
/// requested.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// State of the listings collection fetch
    pub list: FetchState<Vec<PropertySummary>>,
    /// State of the per-property detail fetch
    pub detail: FetchState<PropertyDetail>,
    /// Identifier of the currently selected property, if any
    pub selected_id: Option<String>,
}

/// Orchestrates the list and detail fetchers and owns their state.
pub struct DashboardController<P> {
    provider: Arc<P>,
    state: Arc<RwLock<DashboardState>>,
}

impl<P> Clone for DashboardController<P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            state: self.state.clone(),
        }
    }
}

impl<P: ListingProvider> DashboardController<P> {
    /// Creates a controller with both slots idle and nothing selected.
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            state: Arc::new(RwLock::new(DashboardState::default())),
        }
    }

    /// Returns a copy of the current dashboard state for rendering.
    pub async fn snapshot(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    /// Loads (or reloads) the listings collection.
    ///
    /// A no-op while a list load is already in flight; re-entrant
    /// triggers must not issue a second request. Otherwise the slot
    /// moves to `Loading`, discarding any prior payload or error, and
    /// settles with the fetch outcome. The collection is replaced
    /// wholesale, never merged.
    pub async fn trigger_list_load(&self) {
        {
            let mut state = self.state.write().await;
            if state.list.is_loading() {
                debug!("list load already in flight, ignoring trigger");
                return;
            }
            state.list = FetchState::Loading;
        }

        let outcome = self.provider.fetch_summaries().await;

        let mut state = self.state.write().await;
        state.list = match outcome {
            Ok(summaries) => {
                debug!(count = summaries.len(), "list load settled");
                FetchState::Loaded(summaries)
            }
            Err(e) => {
                debug!(error = %e, "list load failed");
                FetchState::Failed(e.to_string())
            }
        };
    }

    /// Selects a property and loads its detail.
    ///
    /// Always allowed: a new selection supersedes any in-flight one at
    /// the state level. The superseded request is not cancelled; its
    /// settlement is dropped by the identity check below. Both success
    /// and failure outcomes are subject to the check, so a stale error
    /// can never clobber a newer selection either.
    pub async fn select_property(&self, property_id: impl Into<String>) {
        let property_id = property_id.into();
        {
            let mut state = self.state.write().await;
            state.selected_id = Some(property_id.clone());
            state.detail = FetchState::Loading;
        }

        let outcome = self.provider.fetch_detail(&property_id).await;

        let mut state = self.state.write().await;
        if state.selected_id.as_deref() != Some(property_id.as_str()) {
            debug!(id = %property_id, "dropping stale detail settlement");
            return;
        }
        state.detail = match outcome {
            Ok(detail) => FetchState::Loaded(detail),
            Err(e) => FetchState::Failed(e.to_string()),
        };
    }

    /// Closes the detail overlay.
    ///
    /// Unconditional: clears the detail slot and the selection regardless
    /// of in-flight requests. A later settlement from before the dismissal
    /// finds no matching selection and is dropped, and a re-selection
    /// always passes through `Loading` again — stale loaded data is never
    /// reused across a dismiss boundary.
    pub async fn dismiss_detail(&self) {
        let mut state = self.state.write().await;
        state.detail = FetchState::Idle;
        state.selected_id = None;
    }
}
