//! SeaORM implementation of VesselRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::db_err;
use crate::domain::vessel::{Vessel, VesselRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::vessel;

pub struct SeaOrmVesselRepository {
    db: DatabaseConnection,
}

impl SeaOrmVesselRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: vessel::Model) -> Vessel {
    Vessel {
        id: m.id,
        name: m.name,
        registration_no: m.registration_no,
        capacity: m.capacity,
        is_active: m.is_active,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(v: Vessel) -> vessel::ActiveModel {
    vessel::ActiveModel {
        id: Set(v.id),
        name: Set(v.name),
        registration_no: Set(v.registration_no),
        capacity: Set(v.capacity),
        is_active: Set(v.is_active),
        created_at: Set(v.created_at),
        updated_at: Set(v.updated_at),
    }
}

// ── VesselRepository impl ───────────────────────────────────────

#[async_trait]
impl VesselRepository for SeaOrmVesselRepository {
    async fn save(&self, v: Vessel) -> DomainResult<()> {
        debug!("Saving vessel: {} ({})", v.id, v.name);
        domain_to_active(v).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Vessel>> {
        let model = vessel::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, v: Vessel) -> DomainResult<()> {
        debug!("Updating vessel: {}", v.id);

        let existing = vessel::Entity::find_by_id(v.id.as_str())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Vessel",
                field: "id",
                value: v.id,
            });
        }

        domain_to_active(v).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Vessel>> {
        let models = vessel::Entity::find()
            .order_by_desc(vessel::Column::IsActive)
            .order_by_asc(vessel::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = vessel::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Vessel",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
