use serde::{Deserialize, Serialize};

/// Structured, partial description of a wanted listing.
///
/// Every field is optional and `None` means "no restriction". Boolean flags are
/// tri-state: `Some(false)` is a real constraint and is not the same as `None`.
/// Blank strings are treated like `None` so upstream parsers that emit `""` for
/// "not mentioned" do not filter everything out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub near_transit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_friendly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnished: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

impl FilterCriteria {
    /// Criteria that admit every listing.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.describe().is_empty()
    }

    /// Human-readable list of the active constraints, in a fixed order.
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();

        if let Some(bedrooms) = self.bedrooms {
            parts.push(format!("bedrooms = {bedrooms}"));
        }
        if let Some(min) = self.min_price {
            parts.push(format!("price >= ${min}"));
        }
        if let Some(max) = self.max_price {
            parts.push(format!("price <= ${max}"));
        }
        if let Some(city) = non_blank(&self.city) {
            parts.push(format!("city contains \"{city}\""));
        }
        if let Some(neighborhood) = non_blank(&self.neighborhood) {
            parts.push(format!("neighborhood contains \"{neighborhood}\""));
        }
        if let Some(flag) = self.near_transit {
            parts.push(format!("near transit = {flag}"));
        }
        if let Some(flag) = self.pet_friendly {
            parts.push(format!("pet friendly = {flag}"));
        }
        if let Some(flag) = self.furnished {
            parts.push(format!("furnished = {flag}"));
        }
        if let Some(kind) = non_blank(&self.property_type) {
            parts.push(format!("property type = {kind}"));
        }

        parts
    }
}

pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
