//! Trip repository interface

use async_trait::async_trait;

use super::model::Trip;
use crate::domain::DomainResult;

#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Save a new trip
    async fn save(&self, trip: Trip) -> DomainResult<()>;

    /// Find trip by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Trip>>;

    /// Update an existing trip
    async fn update(&self, trip: Trip) -> DomainResult<()>;

    /// All trips ordered by departure time, newest first
    async fn find_all(&self) -> DomainResult<Vec<Trip>>;
}
