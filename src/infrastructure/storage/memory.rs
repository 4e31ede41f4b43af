//! In-memory repository implementations for development and testing

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    Booking, BookingRepository, BookingStatus, CancellationRecord, CancellationRepository,
    DomainError, DomainResult, Payment, PaymentRepository, PaymentStatus, RepositoryProvider,
    Route, RouteRepository, SeatReservation, SeatReservationRepository, Trip, TripRepository,
    Vessel, VesselRepository,
};

/// All repositories backed by process-local maps. Every trait is
/// implemented on the one struct, so it doubles as its own provider.
#[derive(Default)]
pub struct InMemoryRepositories {
    bookings: DashMap<String, Booking>,
    payments: DashMap<String, Payment>,
    cancellations: DashMap<String, CancellationRecord>,
    seats: DashMap<String, SeatReservation>,
    trips: DashMap<String, Trip>,
    vessels: DashMap<String, Vessel>,
    routes: DashMap<String, Route>,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }
}

fn page_of<T>(items: Vec<T>, page: u64, limit: u64) -> (Vec<T>, u64) {
    let total = items.len() as u64;
    let start = (page.max(1) - 1) * limit;
    let page_items = items
        .into_iter()
        .skip(start as usize)
        .take(limit as usize)
        .collect();
    (page_items, total)
}

// ── BookingRepository ───────────────────────────────────────────

#[async_trait]
impl BookingRepository for InMemoryRepositories {
    async fn save(&self, booking: Booking) -> DomainResult<()> {
        self.bookings.insert(booking.id.clone(), booking);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>> {
        Ok(self.bookings.get(id).map(|b| b.clone()))
    }

    async fn update(&self, booking: Booking) -> DomainResult<()> {
        if !self.bookings.contains_key(&booking.id) {
            return Err(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking.id,
            });
        }
        self.bookings.insert(booking.id.clone(), booking);
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        let mut all: Vec<Booking> = self.bookings.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_page(
        &self,
        page: u64,
        limit: u64,
        status: Option<BookingStatus>,
    ) -> DomainResult<(Vec<Booking>, u64)> {
        let mut all: Vec<Booking> = self
            .bookings
            .iter()
            .map(|e| e.value().clone())
            .filter(|b| status.map_or(true, |s| b.status == s))
            .collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page_of(all, page, limit))
    }
}

// ── PaymentRepository ───────────────────────────────────────────

#[async_trait]
impl PaymentRepository for InMemoryRepositories {
    async fn save(&self, payment: Payment) -> DomainResult<()> {
        self.payments.insert(payment.id.clone(), payment);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Payment>> {
        Ok(self.payments.get(id).map(|p| p.clone()))
    }

    async fn update(&self, payment: Payment) -> DomainResult<()> {
        if !self.payments.contains_key(&payment.id) {
            return Err(DomainError::NotFound {
                entity: "Payment",
                field: "id",
                value: payment.id,
            });
        }
        self.payments.insert(payment.id.clone(), payment);
        Ok(())
    }

    async fn find_for_booking(&self, booking_id: &str) -> DomainResult<Vec<Payment>> {
        let mut payments: Vec<Payment> = self
            .payments
            .iter()
            .map(|e| e.value().clone())
            .filter(|p| p.booking_id == booking_id)
            .collect();
        payments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(payments)
    }

    async fn find_latest_completed(&self, booking_id: &str) -> DomainResult<Option<Payment>> {
        let payments = PaymentRepository::find_for_booking(self, booking_id).await?;
        Ok(payments
            .into_iter()
            .find(|p| p.status == PaymentStatus::Completed))
    }
}

// ── CancellationRepository ──────────────────────────────────────

#[async_trait]
impl CancellationRepository for InMemoryRepositories {
    async fn upsert_for_booking(
        &self,
        record: CancellationRecord,
    ) -> DomainResult<CancellationRecord> {
        let existing = self
            .cancellations
            .iter()
            .find(|e| e.value().booking_id == record.booking_id)
            .map(|e| e.value().clone());

        let stored = match existing {
            Some(prev) => CancellationRecord {
                id: prev.id,
                created_at: prev.created_at,
                ..record
            },
            None => record,
        };
        self.cancellations.insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, record: CancellationRecord) -> DomainResult<()> {
        if !self.cancellations.contains_key(&record.id) {
            return Err(DomainError::NotFound {
                entity: "Cancellation",
                field: "id",
                value: record.id,
            });
        }
        self.cancellations.insert(record.id.clone(), record);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<CancellationRecord>> {
        Ok(self.cancellations.get(id).map(|r| r.clone()))
    }

    async fn find_by_booking(
        &self,
        booking_id: &str,
    ) -> DomainResult<Option<CancellationRecord>> {
        Ok(self
            .cancellations
            .iter()
            .find(|e| e.value().booking_id == booking_id)
            .map(|e| e.value().clone()))
    }

    async fn find_page(
        &self,
        page: u64,
        limit: u64,
    ) -> DomainResult<(Vec<CancellationRecord>, u64)> {
        let mut all: Vec<CancellationRecord> =
            self.cancellations.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page_of(all, page, limit))
    }
}

// ── SeatReservationRepository ───────────────────────────────────

#[async_trait]
impl SeatReservationRepository for InMemoryRepositories {
    async fn save(&self, seat: SeatReservation) -> DomainResult<()> {
        self.seats.insert(seat.id.clone(), seat);
        Ok(())
    }

    async fn find_for_booking(&self, booking_id: &str) -> DomainResult<Vec<SeatReservation>> {
        Ok(self
            .seats
            .iter()
            .map(|e| e.value().clone())
            .filter(|s| s.booking_id.as_deref() == Some(booking_id))
            .collect())
    }

    async fn find_for_trip(&self, trip_id: &str) -> DomainResult<Vec<SeatReservation>> {
        let mut seats: Vec<SeatReservation> = self
            .seats
            .iter()
            .map(|e| e.value().clone())
            .filter(|s| s.trip_id == trip_id)
            .collect();
        seats.sort_by(|a, b| a.seat_number.cmp(&b.seat_number));
        Ok(seats)
    }

    async fn release_for_booking(&self, booking_id: &str) -> DomainResult<u64> {
        let mut released = 0;
        for mut entry in self.seats.iter_mut() {
            if entry.value().booking_id.as_deref() == Some(booking_id) {
                entry.value_mut().release();
                released += 1;
            }
        }
        Ok(released)
    }
}

// ── TripRepository ──────────────────────────────────────────────

#[async_trait]
impl TripRepository for InMemoryRepositories {
    async fn save(&self, trip: Trip) -> DomainResult<()> {
        self.trips.insert(trip.id.clone(), trip);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Trip>> {
        Ok(self.trips.get(id).map(|t| t.clone()))
    }

    async fn update(&self, trip: Trip) -> DomainResult<()> {
        if !self.trips.contains_key(&trip.id) {
            return Err(DomainError::NotFound {
                entity: "Trip",
                field: "id",
                value: trip.id,
            });
        }
        self.trips.insert(trip.id.clone(), trip);
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Trip>> {
        let mut all: Vec<Trip> = self.trips.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.departure_at.cmp(&a.departure_at));
        Ok(all)
    }
}

// ── VesselRepository ────────────────────────────────────────────

#[async_trait]
impl VesselRepository for InMemoryRepositories {
    async fn save(&self, vessel: Vessel) -> DomainResult<()> {
        self.vessels.insert(vessel.id.clone(), vessel);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Vessel>> {
        Ok(self.vessels.get(id).map(|v| v.clone()))
    }

    async fn update(&self, vessel: Vessel) -> DomainResult<()> {
        if !self.vessels.contains_key(&vessel.id) {
            return Err(DomainError::NotFound {
                entity: "Vessel",
                field: "id",
                value: vessel.id,
            });
        }
        self.vessels.insert(vessel.id.clone(), vessel);
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Vessel>> {
        let mut all: Vec<Vessel> = self.vessels.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.is_active.cmp(&a.is_active).then(a.name.cmp(&b.name)));
        Ok(all)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.vessels
            .remove(id)
            .map(|_| ())
            .ok_or(DomainError::NotFound {
                entity: "Vessel",
                field: "id",
                value: id.to_string(),
            })
    }
}

// ── RouteRepository ─────────────────────────────────────────────

#[async_trait]
impl RouteRepository for InMemoryRepositories {
    async fn save(&self, route: Route) -> DomainResult<()> {
        self.routes.insert(route.id.clone(), route);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Route>> {
        Ok(self.routes.get(id).map(|r| r.clone()))
    }

    async fn update(&self, route: Route) -> DomainResult<()> {
        if !self.routes.contains_key(&route.id) {
            return Err(DomainError::NotFound {
                entity: "Route",
                field: "id",
                value: route.id,
            });
        }
        self.routes.insert(route.id.clone(), route);
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Route>> {
        let mut all: Vec<Route> = self.routes.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.routes
            .remove(id)
            .map(|_| ())
            .ok_or(DomainError::NotFound {
                entity: "Route",
                field: "id",
                value: id.to_string(),
            })
    }
}

// ── RepositoryProvider ──────────────────────────────────────────

impl RepositoryProvider for InMemoryRepositories {
    fn bookings(&self) -> &dyn BookingRepository {
        self
    }

    fn payments(&self) -> &dyn PaymentRepository {
        self
    }

    fn cancellations(&self) -> &dyn CancellationRepository {
        self
    }

    fn seat_reservations(&self) -> &dyn SeatReservationRepository {
        self
    }

    fn trips(&self) -> &dyn TripRepository {
        self
    }

    fn vessels(&self) -> &dyn VesselRepository {
        self
    }

    fn routes(&self) -> &dyn RouteRepository {
        self
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_replaces_record_for_same_booking() {
        let repos = InMemoryRepositories::new();
        let first = CancellationRecord::new(
            "booking-1",
            "first",
            crate::domain::RefundBreakdown::for_policy(crate::domain::RefundPolicy::None, 100),
        );
        let stored = repos.upsert_for_booking(first).await.unwrap();

        let second = CancellationRecord::new(
            "booking-1",
            "second",
            crate::domain::RefundBreakdown::for_policy(crate::domain::RefundPolicy::None, 100),
        );
        let updated = repos.upsert_for_booking(second).await.unwrap();

        assert_eq!(stored.id, updated.id);
        assert_eq!(updated.reason, "second");
        let (_, total) = CancellationRepository::find_page(&repos, 1, 10)
            .await
            .unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn release_only_touches_own_seats() {
        let repos = InMemoryRepositories::new();
        let mut mine = SeatReservation::new("trip-1", "A1");
        mine.assign("booking-1");
        let mut other = SeatReservation::new("trip-1", "A2");
        other.assign("booking-2");
        SeatReservationRepository::save(&repos, mine).await.unwrap();
        SeatReservationRepository::save(&repos, other).await.unwrap();

        let released = repos.release_for_booking("booking-1").await.unwrap();
        assert_eq!(released, 1);

        let still_held = SeatReservationRepository::find_for_booking(&repos, "booking-2")
            .await
            .unwrap();
        assert_eq!(still_held.len(), 1);
        assert!(!still_held[0].is_available);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let repos = InMemoryRepositories::new();
        let booking = Booking::new("trip-1", "Hawwa Zahira", 1, 500);
        let err = BookingRepository::update(&repos, booking).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
