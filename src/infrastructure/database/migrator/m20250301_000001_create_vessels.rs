//! Create vessels table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vessels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vessels::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vessels::Name).string().not_null())
                    .col(ColumnDef::new(Vessels::RegistrationNo).string())
                    .col(ColumnDef::new(Vessels::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(Vessels::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Vessels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vessels::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vessels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Vessels {
    Table,
    Id,
    Name,
    RegistrationNo,
    Capacity,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
