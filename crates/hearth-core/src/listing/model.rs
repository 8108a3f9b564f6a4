//! Property listing domain models.
//!
//! Summary records come back from the list endpoint; detail records are a
//! superset fetched per property. Both are immutable once fetched: the list
//! is replaced wholesale on every load and a detail replaces any previously
//! displayed detail entirely.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Market status of a listing.
///
/// The server sends display strings (`"For Sale"`, `"Sold"`, ...).
/// Unrecognized values are preserved verbatim so a round trip never loses
/// what the server said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ListingStatus {
    ForSale,
    ForRent,
    Sold,
    Pending,
    /// Any status string this client does not recognize
    Other(String),
}

impl From<String> for ListingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "For Sale" => Self::ForSale,
            "For Rent" => Self::ForRent,
            "Sold" => Self::Sold,
            "Pending" => Self::Pending,
            _ => Self::Other(value),
        }
    }
}

impl From<ListingStatus> for String {
    fn from(status: ListingStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForSale => write!(f, "For Sale"),
            Self::ForRent => write!(f, "For Rent"),
            Self::Sold => write!(f, "Sold"),
            Self::Pending => write!(f, "Pending"),
            Self::Other(value) => write!(f, "{}", value),
        }
    }
}

/// One row of the listings collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    /// Server-issued identifier, unique within the collection
    pub id: String,
    /// Listing headline
    pub title: String,
    /// Street address
    pub address: String,
    /// Price in whole currency units
    pub price: u64,
    /// Bedroom count
    pub bedrooms: u32,
    /// Bathroom count
    pub bathrooms: u32,
    /// Interior area in square feet
    pub sqft: u64,
    /// Category tag (house, condo, ...); `type` on the wire
    #[serde(rename = "type")]
    pub kind: String,
    /// Market status
    pub status: ListingStatus,
}

/// Enriched record for a single property.
///
/// Superset of [`PropertySummary`]; the summary fields are flattened into
/// the same wire object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    #[serde(flatten)]
    pub summary: PropertySummary,
    /// Free-form description
    pub description: Option<String>,
    /// Construction year
    pub year_built: Option<u32>,
    /// Lot size in square feet
    pub lot_size: Option<u64>,
    /// Garage capacity in cars
    pub garage: Option<u32>,
    /// Feature tags, in server order
    #[serde(default)]
    pub features: Vec<String>,
    /// Image references
    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_known_values() {
        assert_eq!(ListingStatus::from("For Sale".to_string()), ListingStatus::ForSale);
        assert_eq!(ListingStatus::from("For Rent".to_string()), ListingStatus::ForRent);
        assert_eq!(ListingStatus::from("Sold".to_string()), ListingStatus::Sold);
        assert_eq!(ListingStatus::from("Pending".to_string()), ListingStatus::Pending);
    }

    #[test]
    fn test_status_preserves_unknown_values() {
        let status = ListingStatus::from("Coming Soon".to_string());
        assert_eq!(status, ListingStatus::Other("Coming Soon".to_string()));
        assert_eq!(status.to_string(), "Coming Soon");
    }

    #[test]
    fn test_summary_deserializes_wire_format() {
        let json = r#"{
            "id": "prop_001",
            "title": "Sunny Craftsman",
            "address": "14 Alder Way",
            "price": 450000,
            "bedrooms": 3,
            "bathrooms": 2,
            "sqft": 1650,
            "type": "House",
            "status": "For Sale"
        }"#;

        let summary: PropertySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.kind, "House");
        assert_eq!(summary.status, ListingStatus::ForSale);
        assert_eq!(summary.price, 450000);
    }

    #[test]
    fn test_detail_flattens_summary_and_defaults_collections() {
        let json = r#"{
            "id": "prop_001",
            "title": "Sunny Craftsman",
            "address": "14 Alder Way",
            "price": 450000,
            "bedrooms": 3,
            "bathrooms": 2,
            "sqft": 1650,
            "type": "House",
            "status": "Pending",
            "yearBuilt": 1924
        }"#;

        let detail: PropertyDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.summary.id, "prop_001");
        assert_eq!(detail.year_built, Some(1924));
        assert!(detail.description.is_none());
        assert!(detail.features.is_empty());
        assert!(detail.images.is_empty());
    }
}
