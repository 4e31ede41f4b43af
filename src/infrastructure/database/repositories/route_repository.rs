//! SeaORM implementation of RouteRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::db_err;
use crate::domain::route::{Route, RouteRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::route;

pub struct SeaOrmRouteRepository {
    db: DatabaseConnection,
}

impl SeaOrmRouteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: route::Model) -> Route {
    Route {
        id: m.id,
        name: m.name,
        origin: m.origin,
        destination: m.destination,
        fare: m.fare,
        duration_minutes: m.duration_minutes,
        is_active: m.is_active,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(r: Route) -> route::ActiveModel {
    route::ActiveModel {
        id: Set(r.id),
        name: Set(r.name),
        origin: Set(r.origin),
        destination: Set(r.destination),
        fare: Set(r.fare),
        duration_minutes: Set(r.duration_minutes),
        is_active: Set(r.is_active),
        created_at: Set(r.created_at),
        updated_at: Set(r.updated_at),
    }
}

// ── RouteRepository impl ────────────────────────────────────────

#[async_trait]
impl RouteRepository for SeaOrmRouteRepository {
    async fn save(&self, r: Route) -> DomainResult<()> {
        debug!("Saving route: {} ({})", r.id, r.name);
        domain_to_active(r).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Route>> {
        let model = route::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, r: Route) -> DomainResult<()> {
        debug!("Updating route: {}", r.id);

        let existing = route::Entity::find_by_id(r.id.as_str())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Route",
                field: "id",
                value: r.id,
            });
        }

        domain_to_active(r).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Route>> {
        let models = route::Entity::find()
            .order_by_asc(route::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = route::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Route",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
