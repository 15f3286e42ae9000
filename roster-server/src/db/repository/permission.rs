//! Permission Repository
//!
//! The catalog is seeded by migration and read-only at runtime; only the
//! employee↔permission links change.

use shared::models::Permission;
use sqlx::SqlitePool;

use super::RepoResult;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Permission>> {
    let permissions = sqlx::query_as::<_, Permission>(
        "SELECT id, name, description, module FROM permissions ORDER BY module, name",
    )
    .fetch_all(pool)
    .await?;
    Ok(permissions)
}

pub async fn find_by_names(pool: &SqlitePool, names: &[&str]) -> RepoResult<Vec<Permission>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; names.len()].join(", ");
    let sql = format!(
        "SELECT id, name, description, module FROM permissions WHERE name IN ({placeholders}) \
         ORDER BY module, name"
    );

    let mut query = sqlx::query_as::<_, Permission>(&sql);
    for name in names {
        query = query.bind(*name);
    }
    let permissions = query.fetch_all(pool).await?;
    Ok(permissions)
}
