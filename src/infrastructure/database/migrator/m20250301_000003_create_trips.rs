//! Create trips table

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_vessels::Vessels;
use super::m20250301_000002_create_routes::Routes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trips::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trips::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trips::RouteId).string().not_null())
                    .col(ColumnDef::new(Trips::VesselId).string().not_null())
                    .col(
                        ColumnDef::new(Trips::DepartureAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trips::Status)
                            .string()
                            .not_null()
                            .default("scheduled"),
                    )
                    .col(
                        ColumnDef::new(Trips::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trips::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trips_route")
                            .from(Trips::Table, Trips::RouteId)
                            .to(Routes::Table, Routes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trips_vessel")
                            .from(Trips::Table, Trips::VesselId)
                            .to(Vessels::Table, Vessels::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trips_departure")
                    .table(Trips::Table)
                    .col(Trips::DepartureAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trips::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Trips {
    Table,
    Id,
    RouteId,
    VesselId,
    DepartureAt,
    Status,
    CreatedAt,
    UpdatedAt,
}
