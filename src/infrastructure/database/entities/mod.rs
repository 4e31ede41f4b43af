pub mod booking;
pub mod cancellation;
pub mod payment;
pub mod route;
pub mod seat_reservation;
pub mod trip;
pub mod vessel;
