use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Occupancy tiers a room can be booked at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyTier {
    Single,
    Double,
    Triple,
    Family,
}

impl OccupancyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            OccupancyTier::Single => "single",
            OccupancyTier::Double => "double",
            OccupancyTier::Triple => "triple",
            OccupancyTier::Family => "family",
        }
    }
}

/// Per-occupancy nightly prices. Any absent tier falls back to the room's
/// flat base price.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoomPricing {
    #[serde(default)]
    pub single: Option<f64>,
    #[serde(default)]
    pub double: Option<f64>,
    #[serde(default)]
    pub triple: Option<f64>,
    #[serde(default)]
    pub family: Option<f64>,
}

impl RoomPricing {
    pub fn rate(&self, tier: OccupancyTier) -> Option<f64> {
        match tier {
            OccupancyTier::Single => self.single,
            OccupancyTier::Double => self.double,
            OccupancyTier::Triple => self.triple,
            OccupancyTier::Family => self.family,
        }
    }
}

/// A bookable room in the catalog. Created and edited by administrators,
/// read-only from the booking flow's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub room_type: String,
    /// Flat nightly price, also the fallback for absent pricing tiers.
    pub base_price: f64,
    #[serde(default)]
    pub pricing: Option<RoomPricing>,
    pub max_occupancy: i32,
    pub size: String,
    pub description: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub available: bool,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Room fields supplied by an administrator; id and timestamps are assigned
/// by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRoom {
    pub name: String,
    pub room_type: String,
    pub base_price: f64,
    #[serde(default)]
    pub pricing: Option<RoomPricing>,
    pub max_occupancy: i32,
    pub size: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub is_popular: bool,
}

fn default_available() -> bool {
    true
}
