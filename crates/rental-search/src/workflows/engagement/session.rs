use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::workflows::catalog::{Catalog, Listing, ListingId};

use super::bucket::{EngagementAction, EngagementBucket};
use super::dashboard::Dashboard;
use super::tracker::{BucketCounts, EngagementTracker, Transition};

#[derive(Debug, Default)]
struct SessionState {
    tracker: EngagementTracker,
    results: Vec<ListingId>,
}

/// Shared engagement state for one user: the tracker plus the latest result set.
///
/// Both live behind one mutex so a removal drops the listing from the tracker and
/// from the visible results in the same step, and concurrent transitions are
/// serialized.
#[derive(Debug)]
pub struct EngagementSession {
    catalog: Arc<Catalog>,
    state: Mutex<SessionState>,
}

impl EngagementSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Replaces the visible result set with the listings of a new search.
    pub fn record_results<'a, I>(&self, listings: I)
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let ids = listings.into_iter().map(|listing| listing.id.clone()).collect();
        self.state().results = ids;
    }

    /// Visible results, resolved against the catalog, in search order.
    pub fn results(&self) -> Vec<Listing> {
        let state = self.state();
        state
            .results
            .iter()
            .filter_map(|id| self.catalog.get(id).cloned())
            .collect()
    }

    pub fn mark_in_contact(&self, id: &ListingId) -> Transition {
        self.apply(EngagementAction::Contact, id)
    }

    pub fn mark_applied(&self, id: &ListingId) -> Transition {
        self.apply(EngagementAction::Apply, id)
    }

    pub fn mark_scheduled(&self, id: &ListingId) -> Transition {
        self.apply(EngagementAction::ScheduleTour, id)
    }

    pub fn remove(&self, id: &ListingId) -> Transition {
        self.apply(EngagementAction::Remove, id)
    }

    pub fn apply(&self, action: EngagementAction, id: &ListingId) -> Transition {
        let mut state = self.state();
        let transition = state.tracker.apply(action, id);
        if action == EngagementAction::Remove {
            state.results.retain(|result| result != id);
        }
        drop(state);

        if transition.changed() {
            tracing::debug!(
                listing_id = %id,
                from = ?transition.from,
                to = ?transition.to,
                "engagement transition"
            );
        }
        transition
    }

    pub fn bucket_of(&self, id: &ListingId) -> Option<EngagementBucket> {
        self.state().tracker.bucket_of(id)
    }

    pub fn counts(&self) -> BucketCounts {
        self.state().tracker.counts()
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build(&self.state().tracker, &self.catalog)
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        // Every mutation is a single map operation, so a poisoned guard still holds
        // a consistent tracker.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
