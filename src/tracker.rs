//! The service layer tying storage, pay calculation and change notification
//! together.
//!
//! Callers pull data with [`ShiftTracker::month_view`] or
//! [`ShiftTracker::shifts_in`] and learn about writes by listening on
//! [`ShiftTracker::subscribe`]. A listener that sees a [`ChangeEvent`]
//! re-pulls whatever it is showing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::calculation::summarize;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    DateRange, NewProject, NewShift, Project, ProjectId, ShiftId, ShiftWithProject, Summary,
    YearMonth,
};
use crate::store::ShiftStore;

const CHANNEL_CAPACITY: usize = 64;

/// A write that has been committed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// A project was created.
    ProjectAdded(ProjectId),
    /// A project and its shifts were deleted.
    ProjectDeleted(ProjectId),
    /// A shift was logged.
    ShiftAdded(ShiftId),
    /// A shift was deleted.
    ShiftDeleted(ShiftId),
}

/// Everything needed to show one month: its shifts and their totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    /// The month shown.
    pub month: YearMonth,
    /// Shifts dated in the month, newest first.
    pub shifts: Vec<ShiftWithProject>,
    /// Count and total pay of `shifts`.
    pub summary: Summary,
}

/// Entry point for reading and changing tracked work.
pub struct ShiftTracker {
    store: Arc<dyn ShiftStore>,
    events: broadcast::Sender<ChangeEvent>,
}

impl ShiftTracker {
    /// Creates a tracker over the given store.
    pub fn new(store: Arc<dyn ShiftStore>) -> Self {
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { store, events }
    }

    /// Returns a receiver for change events sent after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.events.subscribe()
    }

    fn notify(&self, event: ChangeEvent) {
        // an error only means nobody is listening
        let _ = self.events.send(event);
    }

    /// All projects, ordered by name.
    pub async fn projects(&self) -> TrackerResult<Vec<Project>> {
        self.store.list_projects().await
    }

    /// Stores a new project.
    pub async fn add_project(&self, project: NewProject) -> TrackerResult<Project> {
        let id = self.store.insert_project(&project).await?;
        info!(project_id = id, name = %project.name(), "Project added");
        self.notify(ChangeEvent::ProjectAdded(id));
        Ok(project.with_id(id))
    }

    /// Deletes a project together with all of its shifts.
    pub async fn delete_project(&self, id: ProjectId) -> TrackerResult<()> {
        if !self.store.delete_project(id).await? {
            return Err(TrackerError::ProjectNotFound { id });
        }
        info!(project_id = id, "Project deleted");
        self.notify(ChangeEvent::ProjectDeleted(id));
        Ok(())
    }

    /// Logs a shift against an existing project.
    pub async fn add_shift(&self, shift: NewShift) -> TrackerResult<ShiftWithProject> {
        let project = self
            .store
            .get_project(shift.project_id())
            .await?
            .ok_or(TrackerError::ProjectNotFound {
                id: shift.project_id(),
            })?;

        let id = self.store.insert_shift(&shift).await?;
        let item = ShiftWithProject {
            shift: shift.with_id(id),
            project,
        };
        info!(
            shift_id = id,
            project_id = item.project.id,
            date = %item.shift.date,
            pay = %item.pay(),
            "Shift added"
        );
        self.notify(ChangeEvent::ShiftAdded(id));
        Ok(item)
    }

    /// Deletes a shift.
    pub async fn delete_shift(&self, id: ShiftId) -> TrackerResult<()> {
        if !self.store.delete_shift(id).await? {
            return Err(TrackerError::ShiftNotFound { id });
        }
        info!(shift_id = id, "Shift deleted");
        self.notify(ChangeEvent::ShiftDeleted(id));
        Ok(())
    }

    /// Shifts dated within `range`, newest first.
    pub async fn shifts_in(&self, range: DateRange) -> TrackerResult<Vec<ShiftWithProject>> {
        self.store.shifts_with_projects(range).await
    }

    /// The shifts of one calendar month with their summary.
    pub async fn month_view(&self, month: YearMonth) -> TrackerResult<MonthView> {
        let shifts = self.shifts_in(month.range()).await?;
        let summary = summarize(&shifts);
        debug!(
            month = %month,
            count = summary.count,
            total_pay = %summary.total_pay,
            "Built month view"
        );
        Ok(MonthView {
            month,
            shifts,
            summary,
        })
    }
}
