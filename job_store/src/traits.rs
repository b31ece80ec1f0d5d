//! Repository traits
//!
//! The common contract shared by the entity repositories.

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::query_builder::UpdatePayload;

/// Common contract of the entity repositories: create, list with optional
/// typed filters, partial update, remove.
///
/// `get` stays inherent because the returned shapes differ per entity
/// (companies load their job postings alongside the row).
#[async_trait]
pub trait Repository {
    type Entity: Send;
    type Create: Send;
    type Filter: Sync;
    type Id: ?Sized + Sync;

    /// Insert a new entity and return the stored row.
    async fn create(&self, data: Self::Create) -> Result<Self::Entity, StoreError>;

    /// List entities, optionally filtered.
    async fn find_all(
        &self,
        filter: Option<&Self::Filter>,
    ) -> Result<Vec<Self::Entity>, StoreError>;

    /// Partially update an entity and return the stored row.
    async fn update(
        &self,
        id: &Self::Id,
        payload: &UpdatePayload,
    ) -> Result<Self::Entity, StoreError>;

    /// Delete an entity.
    async fn remove(&self, id: &Self::Id) -> Result<(), StoreError>;
}
