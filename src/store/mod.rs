//! Persistence for projects and shifts.
//!
//! [`ShiftStore`] is the seam between the tracker and its storage. Two
//! implementations are provided: [`MemoryStore`] for tests and throwaway
//! sessions, and [`SqliteStore`] for a local database file.

mod memory;
mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::TrackerResult;
use crate::models::{
    DateRange, NewProject, NewShift, Project, ProjectId, ShiftId, ShiftWithProject,
};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage operations needed by the tracker.
#[async_trait]
pub trait ShiftStore: Send + Sync {
    /// All projects, ordered by name, then id.
    async fn list_projects(&self) -> TrackerResult<Vec<Project>>;

    /// A single project, if it exists.
    async fn get_project(&self, id: ProjectId) -> TrackerResult<Option<Project>>;

    /// Stores a project and returns its new id.
    async fn insert_project(&self, project: &NewProject) -> TrackerResult<ProjectId>;

    /// Deletes a project and all of its shifts. Returns false if it did not exist.
    async fn delete_project(&self, id: ProjectId) -> TrackerResult<bool>;

    /// Stores a shift and returns its new id.
    ///
    /// Fails with `ProjectNotFound` if the referenced project does not exist.
    async fn insert_shift(&self, shift: &NewShift) -> TrackerResult<ShiftId>;

    /// Deletes a shift. Returns false if it did not exist.
    async fn delete_shift(&self, id: ShiftId) -> TrackerResult<bool>;

    /// Shifts dated within `range` (inclusive) joined with their project,
    /// newest date first; shifts on the same date are newest id first.
    async fn shifts_with_projects(&self, range: DateRange)
    -> TrackerResult<Vec<ShiftWithProject>>;
}

/// Opens the store selected by the configuration.
pub async fn connect(config: &StorageConfig) -> TrackerResult<Arc<dyn ShiftStore>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory store");
            Ok(Arc::new(MemoryStore::default()))
        }
        StorageBackend::Sqlite => {
            let store = SqliteStore::connect(&config.database_url, config.max_connections).await?;
            info!(database_url = %config.database_url, "Using SQLite store");
            Ok(Arc::new(store))
        }
    }
}
