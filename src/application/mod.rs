pub mod ports;
pub mod services;

pub use ports::{RefundGateway, RefundRequest, RefundResult};
pub use services::{
    BookingService, BookingStats, CancelBooking, CancellationOutcome, CancellationService,
};
