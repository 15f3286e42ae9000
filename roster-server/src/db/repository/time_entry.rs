//! TimeEntry Repository
//!
//! Writes here are driven by the time-clock service; the state machine
//! guards live in the WHERE clauses (`status = 'active'`) plus the
//! partial unique index on (employee_id, date).

use shared::models::TimeEntry;
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const SELECT: &str = "SELECT t.id, t.employee_id, \
     COALESCE(e.name, 'Unknown') AS employee_name, \
     t.date, t.clock_in, t.clock_out, t.break_time, t.total_hours, t.status, t.overtime, \
     t.created_at, t.updated_at \
     FROM time_entries t LEFT JOIN employees e ON e.id = t.employee_id";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<TimeEntry>> {
    let entries =
        sqlx::query_as::<_, TimeEntry>(&format!("{SELECT} ORDER BY t.date DESC, t.clock_in DESC"))
            .fetch_all(pool)
            .await?;
    Ok(entries)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<TimeEntry>> {
    let entry = sqlx::query_as::<_, TimeEntry>(&format!("{SELECT} WHERE t.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(entry)
}

pub async fn find_by_date(pool: &SqlitePool, date: &str) -> RepoResult<Vec<TimeEntry>> {
    let entries = sqlx::query_as::<_, TimeEntry>(&format!(
        "{SELECT} WHERE t.date = ? ORDER BY t.clock_in"
    ))
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

/// The active entry for (employee, date), if any
pub async fn find_active(
    pool: &SqlitePool,
    employee_id: i64,
    date: &str,
) -> RepoResult<Option<TimeEntry>> {
    let entry = sqlx::query_as::<_, TimeEntry>(&format!(
        "{SELECT} WHERE t.employee_id = ? AND t.date = ? AND t.status = 'active' LIMIT 1"
    ))
    .bind(employee_id)
    .bind(date)
    .fetch_optional(pool)
    .await?;
    Ok(entry)
}

/// Insert a fresh active entry (clock-in).
///
/// A second active insert for the same (employee, date) is rejected by
/// the unique index and surfaces as `RepoError::Duplicate`.
pub async fn insert_active(
    pool: &SqlitePool,
    employee_id: i64,
    date: &str,
    clock_in: &str,
) -> RepoResult<TimeEntry> {
    let id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO time_entries (id, employee_id, date, clock_in, break_time, total_hours, status, overtime, created_at, updated_at) \
         VALUES (?, ?, ?, ?, 0, 0, 'active', 0, ?, ?)",
    )
    .bind(id)
    .bind(employee_id)
    .bind(date)
    .bind(clock_in)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create time entry".into()))
}

/// Complete an active entry (clock-out) with its derived duration fields
pub async fn complete(
    pool: &SqlitePool,
    id: i64,
    clock_out: &str,
    total_hours: f64,
    overtime: bool,
) -> RepoResult<TimeEntry> {
    let now = now_millis();

    let rows = sqlx::query(
        "UPDATE time_entries SET clock_out = ?, total_hours = ?, overtime = ?, \
         status = 'completed', updated_at = ? \
         WHERE id = ? AND status = 'active'",
    )
    .bind(clock_out)
    .bind(total_hours)
    .bind(overtime)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();

    if rows == 0 {
        return Err(RepoError::NotFound(format!(
            "Time entry {id} not found or not active"
        )));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Time entry {id} not found")))
}
