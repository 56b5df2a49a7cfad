use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{
    Booking, BookingDraft, BookingStatus, BookingUpdate, Contact, NewContactRequest,
    NewPortfolioItem, PaymentStatus, PortfolioItem,
};

/// In-memory store for bookings, contacts and the portfolio catalog.
///
/// One mutex guards all tables, so a booking update is atomic per record and
/// racing writers serialize here. Every read hands out a clone; callers never
/// hold an alias into storage. Nothing is ever deleted — cancellation is a
/// status change on the record.
pub struct Store {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    bookings: Vec<Booking>,
    contacts: Vec<Contact>,
    portfolio: Vec<PortfolioItem>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    // ── Bookings ──

    pub fn create_booking(&self, draft: BookingDraft) -> Booking {
        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            event_date: draft.event_date,
            event_time: draft.event_time,
            event_type: draft.event_type,
            event_location: draft.event_location,
            package_type: draft.package_type,
            add_ons: draft.add_ons,
            special_requirements: draft.special_requirements,
            total_amount: draft.total_amount,
            advance_amount: draft.advance_amount,
            payment_status: PaymentStatus::Pending,
            payment_id: None,
            order_id: None,
            status: BookingStatus::Pending,
            terms_accepted: draft.terms_accepted,
            created_at: Utc::now().naive_utc(),
        };

        let mut inner = self.inner.lock().unwrap();
        inner.bookings.push(booking.clone());
        booking
    }

    pub fn get_booking(&self, id: &str) -> Option<Booking> {
        let inner = self.inner.lock().unwrap();
        inner.bookings.iter().find(|b| b.id == id).cloned()
    }

    pub fn all_bookings(&self) -> Vec<Booking> {
        let inner = self.inner.lock().unwrap();
        inner.bookings.clone()
    }

    pub fn bookings_by_email(&self, email: &str) -> Vec<Booking> {
        let inner = self.inner.lock().unwrap();
        inner
            .bookings
            .iter()
            .filter(|b| b.email == email)
            .cloned()
            .collect()
    }

    /// Merges the provided fields into the stored record under the lock.
    /// `id` and `created_at` are never touched.
    pub fn update_booking(&self, id: &str, updates: BookingUpdate) -> Option<Booking> {
        let mut inner = self.inner.lock().unwrap();
        let booking = inner.bookings.iter_mut().find(|b| b.id == id)?;

        if let Some(v) = updates.first_name {
            booking.first_name = v;
        }
        if let Some(v) = updates.last_name {
            booking.last_name = v;
        }
        if let Some(v) = updates.email {
            booking.email = v;
        }
        if let Some(v) = updates.phone {
            booking.phone = v;
        }
        if let Some(v) = updates.event_date {
            booking.event_date = v;
        }
        if let Some(v) = updates.event_time {
            booking.event_time = v;
        }
        if let Some(v) = updates.event_type {
            booking.event_type = v;
        }
        if let Some(v) = updates.event_location {
            booking.event_location = v;
        }
        if let Some(v) = updates.add_ons {
            booking.add_ons = v;
        }
        if let Some(v) = updates.special_requirements {
            booking.special_requirements = Some(v);
        }
        if let Some(v) = updates.total_amount {
            booking.total_amount = v;
        }
        if let Some(v) = updates.advance_amount {
            booking.advance_amount = v;
        }
        if let Some(v) = updates.payment_status {
            booking.payment_status = v;
        }
        if let Some(v) = updates.payment_id {
            booking.payment_id = Some(v);
        }
        if let Some(v) = updates.order_id {
            booking.order_id = Some(v);
        }
        if let Some(v) = updates.status {
            booking.status = v;
        }

        Some(booking.clone())
    }

    // ── Contacts ──

    pub fn create_contact(&self, req: NewContactRequest) -> Contact {
        let contact = Contact {
            id: Uuid::new_v4().to_string(),
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            event_type: req.event_type,
            message: req.message,
            status: "new".to_string(),
            created_at: Utc::now().naive_utc(),
        };

        let mut inner = self.inner.lock().unwrap();
        inner.contacts.push(contact.clone());
        contact
    }

    pub fn get_contact(&self, id: &str) -> Option<Contact> {
        let inner = self.inner.lock().unwrap();
        inner.contacts.iter().find(|c| c.id == id).cloned()
    }

    pub fn all_contacts(&self) -> Vec<Contact> {
        let inner = self.inner.lock().unwrap();
        inner.contacts.clone()
    }

    // ── Portfolio ──

    pub fn add_portfolio_item(&self, item: NewPortfolioItem) -> PortfolioItem {
        let stored = PortfolioItem {
            id: Uuid::new_v4().to_string(),
            title: item.title,
            description: item.description,
            category: item.category,
            image_url: item.image_url,
            is_video: item.is_video,
            video_url: item.video_url,
            featured: item.featured,
            created_at: Utc::now().naive_utc(),
        };

        let mut inner = self.inner.lock().unwrap();
        inner.portfolio.push(stored.clone());
        stored
    }

    pub fn get_portfolio_item(&self, id: &str) -> Option<PortfolioItem> {
        let inner = self.inner.lock().unwrap();
        inner.portfolio.iter().find(|p| p.id == id).cloned()
    }

    pub fn all_portfolio(&self) -> Vec<PortfolioItem> {
        let inner = self.inner.lock().unwrap();
        inner.portfolio.clone()
    }

    pub fn portfolio_by_category(&self, category: &str) -> Vec<PortfolioItem> {
        let inner = self.inner.lock().unwrap();
        inner
            .portfolio
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect()
    }

    pub fn featured_portfolio(&self) -> Vec<PortfolioItem> {
        let inner = self.inner.lock().unwrap();
        inner
            .portfolio
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect()
    }

    /// Sample catalog shown until an admin pipeline exists. Called from main,
    /// not from `new`, so tests start from an empty store.
    pub fn seed_portfolio(&self) {
        let samples = vec![
            NewPortfolioItem {
                title: "Wedding Ceremony".to_string(),
                description: Some("Full-day wedding coverage with candid moments".to_string()),
                category: "Events".to_string(),
                image_url: "/portfolio/wedding-ceremony.jpg".to_string(),
                is_video: false,
                video_url: None,
                featured: true,
            },
            NewPortfolioItem {
                title: "Birthday Party".to_string(),
                description: Some("Birthday celebration photo story".to_string()),
                category: "Portraits".to_string(),
                image_url: "/portfolio/birthday-party.jpg".to_string(),
                is_video: false,
                video_url: None,
                featured: false,
            },
            NewPortfolioItem {
                title: "Lifestyle Shoot".to_string(),
                description: Some("Creative lifestyle portraits on location".to_string()),
                category: "Portraits".to_string(),
                image_url: "/portfolio/lifestyle-shoot.jpg".to_string(),
                is_video: false,
                video_url: None,
                featured: false,
            },
            NewPortfolioItem {
                title: "Event Reel".to_string(),
                description: Some("Same-day highlight reel".to_string()),
                category: "Reels".to_string(),
                image_url: "/portfolio/event-reel.jpg".to_string(),
                is_video: true,
                video_url: Some("https://www.instagram.com/shootxpress_/reels/".to_string()),
                featured: true,
            },
        ];

        for item in samples {
            self.add_portfolio_item(item);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
