use std::sync::Arc;
use veranda_booking::repository::{ContactRepository, ReservationRepository, RoomRepository};
use veranda_store::app_config::BusinessRules;
use veranda_store::{ChangeFeed, RedisClient};

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
    pub admin_email: String,
    pub admin_password: String,
}

/// Everything a handler needs, constructed once at process start and passed
/// by reference. No ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<dyn RoomRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub redis: Arc<RedisClient>,
    pub changes: ChangeFeed,
    pub auth: AuthConfig,
    pub business_rules: BusinessRules,
}
