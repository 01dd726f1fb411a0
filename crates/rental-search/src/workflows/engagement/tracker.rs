use std::collections::HashMap;

use serde::Serialize;

use crate::workflows::catalog::ListingId;

use super::bucket::{EngagementAction, EngagementBucket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrackedListing {
    bucket: EngagementBucket,
    /// Sequence number of the move into `bucket`; orders bucket members.
    entered: u64,
}

/// Outcome of one tracker operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub listing_id: ListingId,
    pub from: Option<EngagementBucket>,
    pub to: Option<EngagementBucket>,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Per-bucket membership counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCounts {
    pub in_contact: usize,
    pub applied: usize,
    pub scheduled: usize,
}

impl BucketCounts {
    pub fn get(&self, bucket: EngagementBucket) -> usize {
        match bucket {
            EngagementBucket::InContact => self.in_contact,
            EngagementBucket::Applied => self.applied,
            EngagementBucket::Scheduled => self.scheduled,
        }
    }

    pub fn total(&self) -> usize {
        self.in_contact + self.applied + self.scheduled
    }

    fn bump(&mut self, bucket: EngagementBucket) {
        match bucket {
            EngagementBucket::InContact => self.in_contact += 1,
            EngagementBucket::Applied => self.applied += 1,
            EngagementBucket::Scheduled => self.scheduled += 1,
        }
    }
}

/// Engagement state machine keyed by listing id.
///
/// Each tracked id carries exactly one bucket tag, so moving into a bucket is also
/// leaving the previous one. Ids that were never marked, or were removed, are
/// untracked. Every operation is total over arbitrary ids.
#[derive(Debug, Clone, Default)]
pub struct EngagementTracker {
    entries: HashMap<ListingId, TrackedListing>,
    sequence: u64,
}

impl EngagementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_in_contact(&mut self, id: &ListingId) -> Transition {
        self.move_to(id, EngagementBucket::InContact)
    }

    pub fn mark_applied(&mut self, id: &ListingId) -> Transition {
        self.move_to(id, EngagementBucket::Applied)
    }

    pub fn mark_scheduled(&mut self, id: &ListingId) -> Transition {
        self.move_to(id, EngagementBucket::Scheduled)
    }

    pub fn remove(&mut self, id: &ListingId) -> Transition {
        let from = self.entries.remove(id).map(|entry| entry.bucket);
        Transition {
            listing_id: id.clone(),
            from,
            to: None,
        }
    }

    pub fn apply(&mut self, action: EngagementAction, id: &ListingId) -> Transition {
        match action.target() {
            Some(bucket) => self.move_to(id, bucket),
            None => self.remove(id),
        }
    }

    pub fn bucket_of(&self, id: &ListingId) -> Option<EngagementBucket> {
        self.entries.get(id).map(|entry| entry.bucket)
    }

    pub fn is_tracked(&self, id: &ListingId) -> bool {
        self.entries.contains_key(id)
    }

    /// Ids in `bucket`, oldest arrival first.
    pub fn members(&self, bucket: EngagementBucket) -> Vec<&ListingId> {
        let mut members: Vec<(&ListingId, u64)> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.bucket == bucket)
            .map(|(id, entry)| (id, entry.entered))
            .collect();
        members.sort_by_key(|(_, entered)| *entered);
        members.into_iter().map(|(id, _)| id).collect()
    }

    pub fn counts(&self) -> BucketCounts {
        let mut counts = BucketCounts::default();
        for entry in self.entries.values() {
            counts.bump(entry.bucket);
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn move_to(&mut self, id: &ListingId, bucket: EngagementBucket) -> Transition {
        let from = self.bucket_of(id);
        if from != Some(bucket) {
            self.sequence += 1;
            self.entries.insert(
                id.clone(),
                TrackedListing {
                    bucket,
                    entered: self.sequence,
                },
            );
        }

        Transition {
            listing_id: id.clone(),
            from,
            to: Some(bucket),
        }
    }
}
