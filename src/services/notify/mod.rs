pub mod sendgrid;

use async_trait::async_trait;

use crate::models::{Booking, Contact};
use crate::state::AppState;

#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> anyhow::Result<()>;
}

/// Emails the customer after a booking is created. Best effort: a missing
/// mailer or a delivery failure is logged and never affects the booking.
pub async fn notify_booking_confirmed(state: &AppState, booking: &Booking) {
    let Some(mailer) = state.mailer.as_deref() else {
        tracing::info!("email not configured; skipping booking confirmation");
        return;
    };

    let subject = format!("ShootXpress - Booking received for {}", booking.event_date);
    let html = booking_confirmation_html(booking);

    if let Err(e) = mailer.send(&booking.email, &subject, &html).await {
        tracing::error!(error = %e, booking_id = %booking.id, "failed to send booking confirmation");
    }
}

/// Emails the admin address when a contact message arrives.
pub async fn notify_contact_received(state: &AppState, contact: &Contact) {
    let Some(mailer) = state.mailer.as_deref() else {
        tracing::info!("email not configured; skipping contact notification");
        return;
    };

    let subject = format!(
        "New contact form submission from {} {}",
        contact.first_name, contact.last_name
    );
    let html = contact_notification_html(contact);

    if let Err(e) = mailer.send(&state.config.admin_email, &subject, &html).await {
        tracing::error!(error = %e, contact_id = %contact.id, "failed to send contact notification");
    }
}

fn booking_confirmation_html(booking: &Booking) -> String {
    let requirements = booking
        .special_requirements
        .as_deref()
        .map(|r| format!("<p><strong>Special requirements:</strong> {r}</p>"))
        .unwrap_or_default();

    format!(
        "<h1>ShootXpress</h1>\
         <h2>Hello {first_name}!</h2>\
         <p>Thank you for choosing ShootXpress. Here are your booking details:</p>\
         <p><strong>Package:</strong> {package}</p>\
         <p><strong>Event date:</strong> {date} at {time}</p>\
         <p><strong>Event type:</strong> {event_type}</p>\
         <p><strong>Location:</strong> {location}</p>\
         <p><strong>Total amount:</strong> ₹{total}</p>\
         <p><strong>Advance due:</strong> ₹{advance}</p>\
         {requirements}\
         <p>The remaining balance is collected on the day of the shoot. Contact us at \
         least 24 hours in advance for any changes.</p>",
        first_name = booking.first_name,
        package = booking.package_type.as_str(),
        date = booking.event_date,
        time = booking.event_time,
        event_type = booking.event_type.as_str(),
        location = booking.event_location,
        total = booking.total_amount,
        advance = booking.advance_amount,
    )
}

fn contact_notification_html(contact: &Contact) -> String {
    let phone = contact
        .phone
        .as_deref()
        .map(|p| format!("<p><strong>Phone:</strong> {p}</p>"))
        .unwrap_or_default();
    let event_type = contact
        .event_type
        .as_deref()
        .map(|t| format!("<p><strong>Event type:</strong> {t}</p>"))
        .unwrap_or_default();

    format!(
        "<h1>New contact message</h1>\
         <p><strong>Name:</strong> {first} {last}</p>\
         <p><strong>Email:</strong> {email}</p>\
         {phone}{event_type}\
         <p><strong>Message:</strong></p><p>{message}</p>",
        first = contact.first_name,
        last = contact.last_name,
        email = contact.email,
        message = contact.message,
    )
}
