pub mod pricing;
pub mod room;

pub use pricing::{nightly_rate, stay_quote, StayQuote};
pub use room::{NewRoom, OccupancyTier, Room, RoomPricing};
