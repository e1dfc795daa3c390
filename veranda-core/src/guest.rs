use serde::{Deserialize, Serialize};

/// Structured guest contact record stored on every reservation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl GuestContact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Incoming guest fields as submitted by the booking form.
///
/// Older clients sent a flat `guest_name`/`email`/`phone` triple instead of
/// the structured `guest_info` object. Both shapes are accepted here and
/// collapsed into a single [`GuestContact`]; the flat form is a read adapter
/// at the boundary, never a second stored representation.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestPayload {
    #[serde(default)]
    pub guest_info: Option<GuestContact>,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl GuestPayload {
    /// Normalize to the structured record. The structured object wins when
    /// both shapes are present. Returns `None` when neither shape carries
    /// enough to identify the guest.
    pub fn into_contact(self) -> Option<GuestContact> {
        if let Some(info) = self.guest_info {
            return Some(info);
        }

        let name = self.guest_name?;
        let email = self.email?;
        let (first, last) = match name.trim().split_once(' ') {
            Some((first, last)) => (first.to_string(), last.trim().to_string()),
            None => (name.trim().to_string(), String::new()),
        };

        Some(GuestContact {
            first_name: first,
            last_name: last,
            email,
            phone: self.phone.unwrap_or_default(),
        })
    }
}
