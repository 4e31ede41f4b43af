//! Vessel repository interface

use async_trait::async_trait;

use super::model::Vessel;
use crate::domain::DomainResult;

#[async_trait]
pub trait VesselRepository: Send + Sync {
    /// Save a new vessel
    async fn save(&self, vessel: Vessel) -> DomainResult<()>;

    /// Find vessel by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Vessel>>;

    /// Update an existing vessel
    async fn update(&self, vessel: Vessel) -> DomainResult<()>;

    /// All vessels, active first, then by name
    async fn find_all(&self) -> DomainResult<Vec<Vessel>>;

    /// Delete a vessel by ID
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
