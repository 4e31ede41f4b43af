pub mod bookings;
pub mod cancellation;

pub use bookings::{BookingService, BookingStats};
pub use cancellation::{CancelBooking, CancellationOutcome, CancellationService};
