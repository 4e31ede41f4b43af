//! SeaORM implementation of SeatReservationRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::db_err;
use crate::domain::seat_reservation::{SeatReservation, SeatReservationRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::seat_reservation;

pub struct SeaOrmSeatReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmSeatReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: seat_reservation::Model) -> SeatReservation {
    SeatReservation {
        id: m.id,
        trip_id: m.trip_id,
        seat_number: m.seat_number,
        booking_id: m.booking_id,
        is_available: m.is_available,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

// ── SeatReservationRepository impl ──────────────────────────────

#[async_trait]
impl SeatReservationRepository for SeaOrmSeatReservationRepository {
    async fn save(&self, s: SeatReservation) -> DomainResult<()> {
        debug!("Saving seat reservation: {} ({})", s.id, s.seat_number);

        let model = seat_reservation::ActiveModel {
            id: Set(s.id),
            trip_id: Set(s.trip_id),
            seat_number: Set(s.seat_number),
            booking_id: Set(s.booking_id),
            is_available: Set(s.is_available),
            created_at: Set(s.created_at),
            updated_at: Set(s.updated_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_for_booking(&self, booking_id: &str) -> DomainResult<Vec<SeatReservation>> {
        let models = seat_reservation::Entity::find()
            .filter(seat_reservation::Column::BookingId.eq(booking_id))
            .order_by_asc(seat_reservation::Column::SeatNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_for_trip(&self, trip_id: &str) -> DomainResult<Vec<SeatReservation>> {
        let models = seat_reservation::Entity::find()
            .filter(seat_reservation::Column::TripId.eq(trip_id))
            .order_by_asc(seat_reservation::Column::SeatNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn release_for_booking(&self, booking_id: &str) -> DomainResult<u64> {
        debug!("Releasing seats for booking: {}", booking_id);

        let result = seat_reservation::Entity::update_many()
            .col_expr(seat_reservation::Column::IsAvailable, Expr::value(true))
            .col_expr(
                seat_reservation::Column::BookingId,
                Expr::value(Option::<String>::None),
            )
            .col_expr(seat_reservation::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(seat_reservation::Column::BookingId.eq(booking_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
