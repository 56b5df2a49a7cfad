use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub event_type: EventType,
    pub event_location: String,
    pub package_type: PackageType,
    pub add_ons: Vec<String>,
    pub special_requirements: Option<String>,
    pub total_amount: i64,
    pub advance_amount: i64,
    pub payment_status: PaymentStatus,
    pub payment_id: Option<String>,
    pub order_id: Option<String>,
    pub status: BookingStatus,
    pub terms_accepted: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PackageType {
    SmartShot,
    XpressPro,
    XpressMax,
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::SmartShot => "smart-shot",
            PackageType::XpressPro => "xpress-pro",
            PackageType::XpressMax => "xpress-max",
        }
    }

    /// Strict parse: an unknown package type is a caller error, never a default.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "smart-shot" => Some(PackageType::SmartShot),
            "xpress-pro" => Some(PackageType::XpressPro),
            "xpress-max" => Some(PackageType::XpressMax),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wedding,
    Corporate,
    Portrait,
    Birthday,
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Corporate => "corporate",
            EventType::Portrait => "portrait",
            EventType::Birthday => "birthday",
            EventType::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "wedding" => EventType::Wedding,
            "corporate" => EventType::Corporate,
            "portrait" => EventType::Portrait,
            "birthday" => EventType::Birthday,
            _ => EventType::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    PaymentRequested,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::PaymentRequested => "payment-requested",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Body of POST /api/bookings. The client also sends `totalAmount` and
/// `advanceAmount` (its running price preview); both are recomputed
/// server-side and the submitted values ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingRequest {
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub event_date: NaiveDate,
    #[validate(length(min = 1, message = "event time is required"))]
    pub event_time: String,
    pub event_type: String,
    #[validate(length(min = 1, message = "event location is required"))]
    pub event_location: String,
    pub package_type: String,
    #[serde(default)]
    pub add_ons: Vec<String>,
    pub special_requirements: Option<String>,
    pub total_amount: Option<i64>,
    pub advance_amount: Option<i64>,
    #[serde(default)]
    pub terms_accepted: bool,
}

/// A validated, priced booking ready for the store, which assigns the id,
/// creation timestamp and initial lifecycle fields.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub event_type: EventType,
    pub event_location: String,
    pub package_type: PackageType,
    pub add_ons: Vec<String>,
    pub special_requirements: Option<String>,
    pub total_amount: i64,
    pub advance_amount: i64,
    pub terms_accepted: bool,
}

/// Partial update, used both as the PATCH body and as the store's merge input.
/// Absent fields leave the stored record untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<String>,
    pub event_type: Option<EventType>,
    pub event_location: Option<String>,
    pub add_ons: Option<Vec<String>>,
    pub special_requirements: Option<String>,
    pub total_amount: Option<i64>,
    pub advance_amount: Option<i64>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_id: Option<String>,
    pub order_id: Option<String>,
    pub status: Option<BookingStatus>,
}
