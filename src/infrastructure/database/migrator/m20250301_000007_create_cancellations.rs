//! Create cancellations table
//!
//! The unique index on booking_id is what makes the cancellation flow's
//! upsert safe: a re-run can never leave two records for one booking.

use sea_orm_migration::prelude::*;

use super::m20250301_000004_create_bookings::Bookings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cancellations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cancellations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cancellations::BookingId).string().not_null())
                    .col(ColumnDef::new(Cancellations::Reason).string().not_null())
                    .col(
                        ColumnDef::new(Cancellations::RefundAmount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Cancellations::CancellationFee)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Cancellations::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Cancellations::RefundMethod).string())
                    .col(ColumnDef::new(Cancellations::BankAccountNo).string())
                    .col(ColumnDef::new(Cancellations::BankAccountName).string())
                    .col(ColumnDef::new(Cancellations::BankName).string())
                    .col(
                        ColumnDef::new(Cancellations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cancellations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cancellations_booking")
                            .from(Cancellations::Table, Cancellations::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cancellations_booking")
                    .table(Cancellations::Table)
                    .col(Cancellations::BookingId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cancellations_status")
                    .table(Cancellations::Table)
                    .col(Cancellations::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cancellations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Cancellations {
    Table,
    Id,
    BookingId,
    Reason,
    RefundAmount,
    CancellationFee,
    Status,
    RefundMethod,
    BankAccountNo,
    BankAccountName,
    BankName,
    CreatedAt,
    UpdatedAt,
}
