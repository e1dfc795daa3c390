use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use veranda_booking::repository::RoomRepository;
use veranda_catalog::{NewRoom, Room, RoomPricing};
use veranda_core::{BookingError, BookingResult};

use crate::{read_err, write_err};

pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct RoomRow {
    id: String,
    name: String,
    room_type: String,
    base_price: f64,
    pricing: Option<serde_json::Value>,
    max_occupancy: i32,
    size: String,
    description: String,
    images: serde_json::Value,
    amenities: serde_json::Value,
    available: bool,
    is_popular: bool,
    rating: Option<f64>,
    review_count: Option<i32>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl RoomRow {
    fn into_room(self) -> Room {
        Room {
            id: self.id,
            name: self.name,
            room_type: self.room_type,
            base_price: self.base_price,
            pricing: self
                .pricing
                .and_then(|v| serde_json::from_value::<RoomPricing>(v).ok()),
            max_occupancy: self.max_occupancy,
            size: self.size,
            description: self.description,
            images: serde_json::from_value(self.images).unwrap_or_default(),
            amenities: serde_json::from_value(self.amenities).unwrap_or_default(),
            available: self.available,
            is_popular: self.is_popular,
            rating: self.rating,
            review_count: self.review_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const ROOM_COLUMNS: &str = "id, name, room_type, base_price, pricing, max_occupancy, size, \
     description, images, amenities, available, is_popular, rating, review_count, \
     created_at, updated_at";

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn create_room(&self, room: &NewRoom) -> BookingResult<String> {
        let id = Uuid::new_v4().to_string();
        let pricing = room
            .pricing
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| BookingError::PersistenceWriteFailed(e.to_string()))?;
        let images = serde_json::to_value(&room.images)
            .map_err(|e| BookingError::PersistenceWriteFailed(e.to_string()))?;
        let amenities = serde_json::to_value(&room.amenities)
            .map_err(|e| BookingError::PersistenceWriteFailed(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO rooms (id, name, room_type, base_price, pricing, max_occupancy,
                               size, description, images, amenities, available, is_popular)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(&id)
        .bind(&room.name)
        .bind(&room.room_type)
        .bind(room.base_price)
        .bind(pricing)
        .bind(room.max_occupancy)
        .bind(&room.size)
        .bind(&room.description)
        .bind(images)
        .bind(amenities)
        .bind(room.available)
        .bind(room.is_popular)
        .execute(&self.pool)
        .await
        .map_err(write_err)?;

        Ok(id)
    }

    async fn get_room(&self, id: &str) -> BookingResult<Option<Room>> {
        let row = sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_err)?;

        Ok(row.map(RoomRow::into_room))
    }

    async fn list_rooms(&self) -> BookingResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        Ok(rows.into_iter().map(RoomRow::into_room).collect())
    }

    async fn list_candidate_rooms(&self, guests: i32) -> BookingResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms \
             WHERE available = TRUE AND max_occupancy >= $1 \
             ORDER BY created_at DESC"
        ))
        .bind(guests)
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        Ok(rows.into_iter().map(RoomRow::into_room).collect())
    }

    async fn update_room(&self, id: &str, room: &NewRoom) -> BookingResult<()> {
        let pricing = room
            .pricing
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| BookingError::PersistenceWriteFailed(e.to_string()))?;
        let images = serde_json::to_value(&room.images)
            .map_err(|e| BookingError::PersistenceWriteFailed(e.to_string()))?;
        let amenities = serde_json::to_value(&room.amenities)
            .map_err(|e| BookingError::PersistenceWriteFailed(e.to_string()))?;

        let result = sqlx::query(
            r#"
            UPDATE rooms
            SET name = $1, room_type = $2, base_price = $3, pricing = $4,
                max_occupancy = $5, size = $6, description = $7, images = $8,
                amenities = $9, available = $10, is_popular = $11, updated_at = NOW()
            WHERE id = $12
            "#,
        )
        .bind(&room.name)
        .bind(&room.room_type)
        .bind(room.base_price)
        .bind(pricing)
        .bind(room.max_occupancy)
        .bind(&room.size)
        .bind(&room.description)
        .bind(images)
        .bind(amenities)
        .bind(room.available)
        .bind(room.is_popular)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(write_err)?;

        if result.rows_affected() == 0 {
            return Err(BookingError::RoomNotFound(id.to_string()));
        }
        Ok(())
    }

    async fn delete_room(&self, id: &str) -> BookingResult<()> {
        sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(write_err)?;

        Ok(())
    }
}
