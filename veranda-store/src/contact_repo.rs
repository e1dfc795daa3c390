use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use veranda_booking::repository::ContactRepository;
use veranda_core::{BookingError, BookingResult, Contact, NewContact};

use crate::{read_err, write_err};

pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct ContactRow {
    id: String,
    name: String,
    email: String,
    phone: Option<String>,
    subject: String,
    message: String,
    inquiry_type: String,
    read: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl ContactRow {
    fn into_contact(self) -> Contact {
        Contact {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            subject: self.subject,
            message: self.message,
            inquiry_type: self.inquiry_type,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create_contact(&self, contact: &NewContact) -> BookingResult<String> {
        let id = Uuid::new_v4().to_string();

        // read defaults to false in the schema.
        sqlx::query(
            r#"
            INSERT INTO contacts (id, name, email, phone, subject, message, inquiry_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.subject)
        .bind(&contact.message)
        .bind(&contact.inquiry_type)
        .execute(&self.pool)
        .await
        .map_err(write_err)?;

        Ok(id)
    }

    async fn list_contacts(&self) -> BookingResult<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, email, phone, subject, message, inquiry_type, read, created_at \
             FROM contacts ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        Ok(rows.into_iter().map(ContactRow::into_contact).collect())
    }

    async fn mark_read(&self, id: &str) -> BookingResult<()> {
        // One-way flag: this only ever sets true.
        let result = sqlx::query("UPDATE contacts SET read = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(write_err)?;

        if result.rows_affected() == 0 {
            return Err(BookingError::PersistenceWriteFailed(format!(
                "contact {id} does not exist"
            )));
        }
        Ok(())
    }

    async fn delete_contact(&self, id: &str) -> BookingResult<()> {
        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(write_err)?;

        Ok(())
    }
}
