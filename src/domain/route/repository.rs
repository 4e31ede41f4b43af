//! Route repository interface

use async_trait::async_trait;

use super::model::Route;
use crate::domain::DomainResult;

#[async_trait]
pub trait RouteRepository: Send + Sync {
    /// Save a new route
    async fn save(&self, route: Route) -> DomainResult<()>;

    /// Find route by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Route>>;

    /// Update an existing route
    async fn update(&self, route: Route) -> DomainResult<()>;

    /// All routes ordered by name
    async fn find_all(&self) -> DomainResult<Vec<Route>>;

    /// Delete a route by ID
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
