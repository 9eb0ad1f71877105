//! SQLite-backed storage.
//!
//! Tables are created on connect. Amounts are kept as TEXT and parsed back
//! into [`Decimal`] so no precision is lost.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use tracing::debug;

use super::ShiftStore;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    DateRange, NewProject, NewShift, Project, ProjectId, Shift, ShiftId, ShiftWithProject,
};

const SCHEMA: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        hourly_rate TEXT NOT NULL DEFAULT '0',
        fixed_per_shift TEXT NOT NULL DEFAULT '0'
    )",
    "CREATE TABLE IF NOT EXISTS shifts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
        date TEXT NOT NULL,
        hours TEXT NOT NULL DEFAULT '0',
        custom_pay TEXT NOT NULL DEFAULT '0',
        note TEXT NOT NULL DEFAULT ''
    )",
    "CREATE INDEX IF NOT EXISTS idx_shifts_project_id ON shifts(project_id)",
    "CREATE INDEX IF NOT EXISTS idx_shifts_date ON shifts(date)",
];

/// A store backed by a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `database_url` and makes
    /// sure the tables exist.
    ///
    /// In-memory databases live only as long as their connection, so they
    /// are given a single connection that is never recycled.
    pub async fn connect(database_url: &str, max_connections: u32) -> TrackerResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        let store = Self { pool };
        store.create_tables().await?;
        Ok(store)
    }

    async fn create_tables(&self) -> TrackerResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn decimal_column(row: &SqliteRow, column: &str) -> TrackerResult<Decimal> {
    let text: String = row.try_get(column)?;
    Decimal::from_str(&text).map_err(|e| TrackerError::Storage {
        message: format!("column '{}' holds invalid decimal '{}': {}", column, text, e),
    })
}

fn project_from_row(row: &SqliteRow) -> TrackerResult<Project> {
    Ok(Project {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        hourly_rate: decimal_column(row, "hourly_rate")?,
        fixed_per_shift: decimal_column(row, "fixed_per_shift")?,
    })
}

fn shift_with_project_from_row(row: &SqliteRow) -> TrackerResult<ShiftWithProject> {
    let project_id: ProjectId = row.try_get("project_id")?;
    let date: NaiveDate = row.try_get("date")?;

    Ok(ShiftWithProject {
        shift: Shift {
            id: row.try_get("id")?,
            project_id,
            date,
            hours: decimal_column(row, "hours")?,
            custom_pay: decimal_column(row, "custom_pay")?,
            note: row.try_get("note")?,
        },
        project: Project {
            id: project_id,
            name: row.try_get("project_name")?,
            hourly_rate: decimal_column(row, "hourly_rate")?,
            fixed_per_shift: decimal_column(row, "fixed_per_shift")?,
        },
    })
}

#[async_trait]
impl ShiftStore for SqliteStore {
    async fn list_projects(&self) -> TrackerResult<Vec<Project>> {
        let rows = sqlx::query(
            "SELECT id, name, hourly_rate, fixed_per_shift FROM projects ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    async fn get_project(&self, id: ProjectId) -> TrackerResult<Option<Project>> {
        let row = sqlx::query(
            "SELECT id, name, hourly_rate, fixed_per_shift FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    async fn insert_project(&self, project: &NewProject) -> TrackerResult<ProjectId> {
        let result = sqlx::query(
            "INSERT INTO projects (name, hourly_rate, fixed_per_shift) VALUES (?, ?, ?)",
        )
        .bind(project.name())
        .bind(project.hourly_rate().to_string())
        .bind(project.fixed_per_shift().to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn delete_project(&self, id: ProjectId) -> TrackerResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_shift(&self, shift: &NewShift) -> TrackerResult<ShiftId> {
        let result = sqlx::query(
            "INSERT INTO shifts (project_id, date, hours, custom_pay, note) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(shift.project_id())
        .bind(shift.date())
        .bind(shift.hours().to_string())
        .bind(shift.custom_pay().to_string())
        .bind(shift.note())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                TrackerError::ProjectNotFound {
                    id: shift.project_id(),
                }
            }
            other => other.into(),
        })?;

        Ok(result.last_insert_rowid())
    }

    async fn delete_shift(&self, id: ShiftId) -> TrackerResult<bool> {
        let result = sqlx::query("DELETE FROM shifts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn shifts_with_projects(
        &self,
        range: DateRange,
    ) -> TrackerResult<Vec<ShiftWithProject>> {
        let rows = sqlx::query(
            "SELECT s.id, s.project_id, s.date, s.hours, s.custom_pay, s.note,
                    p.name AS project_name, p.hourly_rate, p.fixed_per_shift
             FROM shifts s
             JOIN projects p ON p.id = s.project_id
             WHERE s.date BETWEEN ? AND ?
             ORDER BY s.date DESC, s.id DESC",
        )
        .bind(range.start_date)
        .bind(range.end_date)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            start_date = %range.start_date,
            end_date = %range.end_date,
            rows = rows.len(),
            "Fetched shifts"
        );

        rows.iter().map(shift_with_project_from_row).collect()
    }
}
