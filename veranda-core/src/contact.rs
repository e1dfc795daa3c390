use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub inquiry_type: String,
    /// Transitions false -> true once an administrator opens it, never back.
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Contact fields supplied by the visitor; id, read flag and timestamp are
/// assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub inquiry_type: String,
}
