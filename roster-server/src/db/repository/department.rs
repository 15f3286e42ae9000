//! Department Repository

use shared::models::{Department, DepartmentCreate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Department>> {
    let departments = sqlx::query_as::<_, Department>(
        "SELECT id, name, description, manager_id, created_at, updated_at \
         FROM departments ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(departments)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Department>> {
    let department = sqlx::query_as::<_, Department>(
        "SELECT id, name, description, manager_id, created_at, updated_at \
         FROM departments WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(department)
}

pub async fn create(pool: &SqlitePool, data: DepartmentCreate) -> RepoResult<Department> {
    let id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO departments (id, name, description, manager_id, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.manager_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create department".into()))
}

/// Rename a department. Employees and shifts pick the new name up on
/// their next read through the join, with no write to those rows.
pub async fn rename(pool: &SqlitePool, id: i64, name: &str) -> RepoResult<Department> {
    let now = now_millis();
    let rows = sqlx::query("UPDATE departments SET name = ?, updated_at = ? WHERE id = ?")
        .bind(name)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if rows == 0 {
        return Err(RepoError::NotFound(format!("Department {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {id} not found")))
}
