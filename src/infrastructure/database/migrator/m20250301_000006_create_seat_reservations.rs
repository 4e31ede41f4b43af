//! Create seat_reservations table
//!
//! One row per physical seat per trip; the booking reference is cleared
//! when the seat goes back on sale.

use sea_orm_migration::prelude::*;

use super::m20250301_000003_create_trips::Trips;
use super::m20250301_000004_create_bookings::Bookings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeatReservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SeatReservations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SeatReservations::TripId).string().not_null())
                    .col(
                        ColumnDef::new(SeatReservations::SeatNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SeatReservations::BookingId).string())
                    .col(
                        ColumnDef::new(SeatReservations::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SeatReservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SeatReservations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_reservations_trip")
                            .from(SeatReservations::Table, SeatReservations::TripId)
                            .to(Trips::Table, Trips::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_reservations_booking")
                            .from(SeatReservations::Table, SeatReservations::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seat_reservations_trip")
                    .table(SeatReservations::Table)
                    .col(SeatReservations::TripId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seat_reservations_booking")
                    .table(SeatReservations::Table)
                    .col(SeatReservations::BookingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeatReservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SeatReservations {
    Table,
    Id,
    TripId,
    SeatNumber,
    BookingId,
    IsAvailable,
    CreatedAt,
    UpdatedAt,
}
