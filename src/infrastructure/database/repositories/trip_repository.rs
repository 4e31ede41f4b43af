//! SeaORM implementation of TripRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::db_err;
use crate::domain::trip::{Trip, TripRepository, TripStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::trip;

pub struct SeaOrmTripRepository {
    db: DatabaseConnection,
}

impl SeaOrmTripRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: trip::Model) -> DomainResult<Trip> {
    let status = TripStatus::from_str(&m.status).ok_or_else(|| {
        DomainError::Validation(format!("Unknown trip status in database: {}", m.status))
    })?;
    Ok(Trip {
        id: m.id,
        route_id: m.route_id,
        vessel_id: m.vessel_id,
        departure_at: m.departure_at,
        status,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn domain_to_active(t: Trip) -> trip::ActiveModel {
    trip::ActiveModel {
        id: Set(t.id),
        route_id: Set(t.route_id),
        vessel_id: Set(t.vessel_id),
        departure_at: Set(t.departure_at),
        status: Set(t.status.as_str().to_string()),
        created_at: Set(t.created_at),
        updated_at: Set(t.updated_at),
    }
}

// ── TripRepository impl ─────────────────────────────────────────

#[async_trait]
impl TripRepository for SeaOrmTripRepository {
    async fn save(&self, t: Trip) -> DomainResult<()> {
        debug!("Saving trip: {}", t.id);
        domain_to_active(t).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Trip>> {
        let model = trip::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn update(&self, t: Trip) -> DomainResult<()> {
        debug!("Updating trip: {}", t.id);

        let existing = trip::Entity::find_by_id(t.id.as_str())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Trip",
                field: "id",
                value: t.id,
            });
        }

        domain_to_active(t).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Trip>> {
        let models = trip::Entity::find()
            .order_by_desc(trip::Column::DepartureAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}
