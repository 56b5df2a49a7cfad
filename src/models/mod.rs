pub mod booking;
pub mod contact;
pub mod portfolio;

pub use booking::{
    Booking, BookingDraft, BookingStatus, BookingUpdate, EventType, NewBookingRequest,
    PackageType, PaymentStatus,
};
pub use contact::{Contact, NewContactRequest};
pub use portfolio::{NewPortfolioItem, PortfolioItem};
