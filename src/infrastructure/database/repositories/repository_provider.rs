//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::cancellation::CancellationRepository;
use crate::domain::payment::PaymentRepository;
use crate::domain::route::RouteRepository;
use crate::domain::seat_reservation::SeatReservationRepository;
use crate::domain::trip::TripRepository;
use crate::domain::vessel::VesselRepository;
use crate::domain::RepositoryProvider;

use super::booking_repository::SeaOrmBookingRepository;
use super::cancellation_repository::SeaOrmCancellationRepository;
use super::payment_repository::SeaOrmPaymentRepository;
use super::route_repository::SeaOrmRouteRepository;
use super::seat_reservation_repository::SeaOrmSeatReservationRepository;
use super::trip_repository::SeaOrmTripRepository;
use super::vessel_repository::SeaOrmVesselRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let booking = repos.bookings().find_by_id("…").await?;
/// let payment = repos.payments().find_latest_completed(&booking.id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    bookings: SeaOrmBookingRepository,
    payments: SeaOrmPaymentRepository,
    cancellations: SeaOrmCancellationRepository,
    seat_reservations: SeaOrmSeatReservationRepository,
    trips: SeaOrmTripRepository,
    vessels: SeaOrmVesselRepository,
    routes: SeaOrmRouteRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            bookings: SeaOrmBookingRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db.clone()),
            cancellations: SeaOrmCancellationRepository::new(db.clone()),
            seat_reservations: SeaOrmSeatReservationRepository::new(db.clone()),
            trips: SeaOrmTripRepository::new(db.clone()),
            vessels: SeaOrmVesselRepository::new(db.clone()),
            routes: SeaOrmRouteRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }

    fn cancellations(&self) -> &dyn CancellationRepository {
        &self.cancellations
    }

    fn seat_reservations(&self) -> &dyn SeatReservationRepository {
        &self.seat_reservations
    }

    fn trips(&self) -> &dyn TripRepository {
        &self.trips
    }

    fn vessels(&self) -> &dyn VesselRepository {
        &self.vessels
    }

    fn routes(&self) -> &dyn RouteRepository {
        &self.routes
    }
}
