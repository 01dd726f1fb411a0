//! Engagement tracking: which pipeline bucket each listing the user acted on is in.

mod bucket;
mod dashboard;
pub mod router;
mod session;
mod tracker;

pub use bucket::{EngagementAction, EngagementBucket, UnknownAction};
pub use dashboard::{BucketView, Dashboard};
pub use router::engagement_router;
pub use session::EngagementSession;
pub use tracker::{BucketCounts, EngagementTracker, Transition};
