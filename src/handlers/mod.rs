pub mod bookings;
pub mod contacts;
pub mod health;
pub mod payment;
pub mod portfolio;
