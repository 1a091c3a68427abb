use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry: something a visitor can browse and reserve.
///
/// `is_reserved` only ever moves from `false` to `true` through
/// [`crate::ReservationGuard`]; the one exception is an administrative
/// full-record overwrite, which may set it to anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Present {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Amount in the reference currency. Never negative.
    pub price: f64,
    /// Image URLs in display order.
    pub images: Vec<String>,
    pub is_reserved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a present. The store assigns the id,
/// the timestamps, and `is_reserved = false`.
#[derive(Debug, Clone)]
pub struct PresentDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
}

/// Full overwrite of a present's mutable fields.
///
/// `is_reserved: Some(_)` is the administrative override path and can
/// reset a reservation; `None` leaves the flag as-is.
#[derive(Debug, Clone)]
pub struct PresentUpdate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    pub is_reserved: Option<bool>,
}
