//! In-process storage.
//!
//! Everything lives in ordered maps behind a `tokio` lock and is lost when
//! the store is dropped.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ShiftStore;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    DateRange, NewProject, NewShift, Project, ProjectId, Shift, ShiftId, ShiftWithProject,
};

#[derive(Default)]
struct Tables {
    projects: BTreeMap<ProjectId, Project>,
    shifts: BTreeMap<ShiftId, Shift>,
    last_project_id: ProjectId,
    last_shift_id: ShiftId,
}

/// A store that keeps everything in process memory.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[async_trait]
impl ShiftStore for MemoryStore {
    async fn list_projects(&self) -> TrackerResult<Vec<Project>> {
        let tables = self.tables.read().await;
        let mut projects: Vec<Project> = tables.projects.values().cloned().collect();
        projects.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(projects)
    }

    async fn get_project(&self, id: ProjectId) -> TrackerResult<Option<Project>> {
        Ok(self.tables.read().await.projects.get(&id).cloned())
    }

    async fn insert_project(&self, project: &NewProject) -> TrackerResult<ProjectId> {
        let mut tables = self.tables.write().await;
        tables.last_project_id += 1;
        let id = tables.last_project_id;
        tables.projects.insert(id, project.clone().with_id(id));
        Ok(id)
    }

    async fn delete_project(&self, id: ProjectId) -> TrackerResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.projects.remove(&id).is_none() {
            return Ok(false);
        }
        tables.shifts.retain(|_, shift| shift.project_id != id);
        Ok(true)
    }

    async fn insert_shift(&self, shift: &NewShift) -> TrackerResult<ShiftId> {
        let mut tables = self.tables.write().await;
        if !tables.projects.contains_key(&shift.project_id()) {
            return Err(TrackerError::ProjectNotFound {
                id: shift.project_id(),
            });
        }
        tables.last_shift_id += 1;
        let id = tables.last_shift_id;
        tables.shifts.insert(id, shift.clone().with_id(id));
        Ok(id)
    }

    async fn delete_shift(&self, id: ShiftId) -> TrackerResult<bool> {
        Ok(self.tables.write().await.shifts.remove(&id).is_some())
    }

    async fn shifts_with_projects(
        &self,
        range: DateRange,
    ) -> TrackerResult<Vec<ShiftWithProject>> {
        let tables = self.tables.read().await;
        let mut items: Vec<ShiftWithProject> = tables
            .shifts
            .values()
            .filter(|shift| range.contains_date(shift.date))
            .filter_map(|shift| {
                tables
                    .projects
                    .get(&shift.project_id)
                    .map(|project| ShiftWithProject {
                        shift: shift.clone(),
                        project: project.clone(),
                    })
            })
            .collect();

        items.sort_by(|a, b| {
            b.shift
                .date
                .cmp(&a.shift.date)
                .then(b.shift.id.cmp(&a.shift.id))
        });
        Ok(items)
    }
}
