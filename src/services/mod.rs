pub mod booking;
pub mod gateway;
pub mod notify;
pub mod payment;
pub mod pricing;
