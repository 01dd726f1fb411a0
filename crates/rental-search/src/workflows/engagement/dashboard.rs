use serde::Serialize;

use crate::workflows::catalog::{Catalog, Listing, ListingId};

use super::bucket::{EngagementAction, EngagementBucket};
use super::tracker::{BucketCounts, EngagementTracker};

/// One dashboard tab: a bucket with its resolved listings.
#[derive(Debug, Clone, Serialize)]
pub struct BucketView {
    pub bucket: EngagementBucket,
    pub label: &'static str,
    pub description: &'static str,
    pub count: usize,
    pub listings: Vec<Listing>,
    /// Tracked ids with no listing in the catalog snapshot.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<ListingId>,
    pub actions: Vec<EngagementAction>,
}

/// Snapshot of every bucket, ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub counts: BucketCounts,
    pub buckets: Vec<BucketView>,
}

impl Dashboard {
    pub fn build(tracker: &EngagementTracker, catalog: &Catalog) -> Self {
        let counts = tracker.counts();
        let buckets = EngagementBucket::ordered()
            .into_iter()
            .map(|bucket| {
                let mut listings = Vec::new();
                let mut unresolved = Vec::new();
                for id in tracker.members(bucket) {
                    match catalog.get(id) {
                        Some(listing) => listings.push(listing.clone()),
                        None => unresolved.push(id.clone()),
                    }
                }

                BucketView {
                    bucket,
                    label: bucket.label(),
                    description: bucket.description(),
                    count: counts.get(bucket),
                    listings,
                    unresolved,
                    actions: bucket.available_actions().to_vec(),
                }
            })
            .collect();

        Self { counts, buckets }
    }

    pub fn bucket(&self, bucket: EngagementBucket) -> Option<&BucketView> {
        self.buckets.iter().find(|view| view.bucket == bucket)
    }
}
