//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_vessels;
mod m20250301_000002_create_routes;
mod m20250301_000003_create_trips;
mod m20250301_000004_create_bookings;
mod m20250301_000005_create_payments;
mod m20250301_000006_create_seat_reservations;
mod m20250301_000007_create_cancellations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_vessels::Migration),
            Box::new(m20250301_000002_create_routes::Migration),
            Box::new(m20250301_000003_create_trips::Migration),
            Box::new(m20250301_000004_create_bookings::Migration),
            Box::new(m20250301_000005_create_payments::Migration),
            Box::new(m20250301_000006_create_seat_reservations::Migration),
            Box::new(m20250301_000007_create_cancellations::Migration),
        ]
    }
}
