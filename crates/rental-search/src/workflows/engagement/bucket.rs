use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pipeline stage a tracked listing sits in. A listing occupies at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngagementBucket {
    InContact,
    Applied,
    Scheduled,
}

impl EngagementBucket {
    /// Dashboard order.
    pub const fn ordered() -> [Self; 3] {
        [Self::Applied, Self::InContact, Self::Scheduled]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::InContact => "in-contact",
            Self::Applied => "applied",
            Self::Scheduled => "scheduled",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InContact => "In Contact",
            Self::Applied => "Application Submitted",
            Self::Scheduled => "Tour Scheduled",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::InContact => "Active conversation with landlord",
            Self::Applied => "Your application is being reviewed",
            Self::Scheduled => "Viewing appointment confirmed",
        }
    }

    /// Follow-up actions offered for a listing in this bucket.
    pub const fn available_actions(self) -> &'static [EngagementAction] {
        match self {
            Self::InContact => &[EngagementAction::Apply, EngagementAction::ScheduleTour],
            Self::Applied => &[EngagementAction::ScheduleTour],
            Self::Scheduled => &[EngagementAction::Apply],
        }
    }
}

impl fmt::Display for EngagementBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// User-triggered engagement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementAction {
    Contact,
    Apply,
    ScheduleTour,
    Remove,
}

impl EngagementAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contact => "Request Tour",
            Self::Apply => "Apply Now",
            Self::ScheduleTour => "Schedule Tour",
            Self::Remove => "Remove",
        }
    }

    /// Bucket the listing lands in, or `None` when the action stops tracking it.
    pub const fn target(self) -> Option<EngagementBucket> {
        match self {
            Self::Contact => Some(EngagementBucket::InContact),
            Self::Apply => Some(EngagementBucket::Applied),
            Self::ScheduleTour => Some(EngagementBucket::Scheduled),
            Self::Remove => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown engagement action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for EngagementAction {
    type Err = UnknownAction;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "contact" | "in-contact" => Ok(Self::Contact),
            "apply" | "applied" => Ok(Self::Apply),
            "schedule" | "schedule-tour" | "schedule_tour" | "scheduled" => {
                Ok(Self::ScheduleTour)
            }
            "remove" | "delete" => Ok(Self::Remove),
            _ => Err(UnknownAction(raw.to_string())),
        }
    }
}
