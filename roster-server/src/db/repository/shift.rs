//! Shift Repository

use shared::models::{Shift, ShiftCreate, ShiftUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const SELECT: &str = "SELECT s.id, s.employee_id, \
     COALESCE(e.name, 'Unknown') AS employee_name, \
     COALESCE(e.role, 'Unknown') AS role, \
     COALESCE(d.name, 'Unknown') AS department, \
     s.start_time, s.end_time, s.date, s.status, s.notes, s.created_at, s.updated_at \
     FROM shifts s \
     LEFT JOIN employees e ON e.id = s.employee_id \
     LEFT JOIN departments d ON d.id = e.department_id";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Shift>> {
    let shifts = sqlx::query_as::<_, Shift>(&format!("{SELECT} ORDER BY s.date, s.start_time"))
        .fetch_all(pool)
        .await?;
    Ok(shifts)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Shift>> {
    let shift = sqlx::query_as::<_, Shift>(&format!("{SELECT} WHERE s.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(shift)
}

pub async fn find_by_date_range(
    pool: &SqlitePool,
    start_date: &str,
    end_date: &str,
) -> RepoResult<Vec<Shift>> {
    let shifts = sqlx::query_as::<_, Shift>(&format!(
        "{SELECT} WHERE s.date >= ? AND s.date <= ? ORDER BY s.date, s.start_time"
    ))
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;
    Ok(shifts)
}

pub async fn create(pool: &SqlitePool, data: ShiftCreate) -> RepoResult<Shift> {
    let id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO shifts (id, employee_id, start_time, end_time, date, status, notes, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(data.employee_id)
    .bind(&data.start_time)
    .bind(&data.end_time)
    .bind(&data.date)
    .bind(data.status)
    .bind(&data.notes)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create shift".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ShiftUpdate) -> RepoResult<Shift> {
    let now = now_millis();

    let rows = sqlx::query(
        "UPDATE shifts SET \
            start_time = COALESCE(?, start_time), \
            end_time = COALESCE(?, end_time), \
            status = COALESCE(?, status), \
            notes = COALESCE(?, notes), \
            updated_at = ? \
         WHERE id = ?",
    )
    .bind(data.start_time)
    .bind(data.end_time)
    .bind(data.status)
    .bind(data.notes)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();

    if rows == 0 {
        return Err(RepoError::NotFound(format!("Shift {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Shift {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM shifts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if rows == 0 {
        return Err(RepoError::NotFound(format!("Shift {id} not found")));
    }
    Ok(true)
}
