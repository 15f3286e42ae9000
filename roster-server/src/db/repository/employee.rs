//! Employee Repository

use std::collections::HashMap;

use shared::models::{
    DEFAULT_EMPLOYEE_PERMISSIONS, Employee, EmployeeCreate, EmployeeUpdate, Permission,
};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const SELECT: &str = "SELECT e.id, e.name, e.email, e.phone, e.role, e.department_id, \
     COALESCE(d.name, 'Unknown') AS department, e.status, e.start_date, e.hourly_rate, \
     e.created_at, e.updated_at \
     FROM employees e LEFT JOIN departments d ON d.id = e.department_id";

/// Find all employees, department name joined and permission set attached
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let mut employees =
        sqlx::query_as::<_, Employee>(&format!("{SELECT} ORDER BY e.name"))
            .fetch_all(pool)
            .await?;

    let mut grants = permission_grants(pool).await?;
    for emp in &mut employees {
        emp.permissions = grants.remove(&emp.id).unwrap_or_default();
    }
    Ok(employees)
}

/// Find an employee by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!("{SELECT} WHERE e.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match employee {
        Some(mut emp) => {
            emp.permissions = permissions_of(pool, id).await?;
            Ok(Some(emp))
        }
        None => Ok(None),
    }
}

/// Create a new employee and grant the default permission set
pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO employees (id, name, email, phone, role, department_id, status, start_date, hourly_rate, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.role)
    .bind(data.department_id)
    .bind(data.status)
    .bind(&data.start_date)
    .bind(data.hourly_rate)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    let defaults = super::permission::find_by_names(pool, &DEFAULT_EMPLOYEE_PERMISSIONS).await?;
    for perm in &defaults {
        sqlx::query(
            "INSERT INTO employee_permissions (id, employee_id, permission_id, created_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(snowflake_id())
        .bind(id)
        .bind(perm.id)
        .bind(now)
        .execute(pool)
        .await?;
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Partial patch of an employee row
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let now = now_millis();

    let rows = sqlx::query(
        "UPDATE employees SET \
            name = COALESCE(?, name), \
            email = COALESCE(?, email), \
            phone = COALESCE(?, phone), \
            role = COALESCE(?, role), \
            department_id = COALESCE(?, department_id), \
            status = COALESCE(?, status), \
            hourly_rate = COALESCE(?, hourly_rate), \
            updated_at = ? \
         WHERE id = ?",
    )
    .bind(data.name)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.role)
    .bind(data.department_id)
    .bind(data.status)
    .bind(data.hourly_rate)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();

    if rows == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Hard delete an employee.
///
/// Dependent shifts, time entries and permission links go with the row
/// via the storage-level ON DELETE CASCADE.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if rows == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    Ok(true)
}

/// Replace an employee's granted permission set
pub async fn replace_permissions(
    pool: &SqlitePool,
    employee_id: i64,
    permission_ids: &[i64],
) -> RepoResult<()> {
    if find_by_id(pool, employee_id).await?.is_none() {
        return Err(RepoError::NotFound(format!(
            "Employee {employee_id} not found"
        )));
    }

    sqlx::query("DELETE FROM employee_permissions WHERE employee_id = ?")
        .bind(employee_id)
        .execute(pool)
        .await?;

    let now = now_millis();
    for permission_id in permission_ids {
        sqlx::query(
            "INSERT INTO employee_permissions (id, employee_id, permission_id, created_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(snowflake_id())
        .bind(employee_id)
        .bind(permission_id)
        .bind(now)
        .execute(pool)
        .await?;
    }
    Ok(())
}

/// Permission set of one employee
async fn permissions_of(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<Permission>> {
    let permissions = sqlx::query_as::<_, Permission>(
        "SELECT p.id, p.name, p.description, p.module \
         FROM employee_permissions ep JOIN permissions p ON p.id = ep.permission_id \
         WHERE ep.employee_id = ? ORDER BY p.module, p.name",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(permissions)
}

/// All permission grants keyed by employee id (one query for list views)
async fn permission_grants(pool: &SqlitePool) -> RepoResult<HashMap<i64, Vec<Permission>>> {
    #[derive(sqlx::FromRow)]
    struct GrantRow {
        employee_id: i64,
        id: i64,
        name: String,
        description: String,
        module: String,
    }

    let rows = sqlx::query_as::<_, GrantRow>(
        "SELECT ep.employee_id, p.id, p.name, p.description, p.module \
         FROM employee_permissions ep JOIN permissions p ON p.id = ep.permission_id \
         ORDER BY p.module, p.name",
    )
    .fetch_all(pool)
    .await?;

    let mut grants: HashMap<i64, Vec<Permission>> = HashMap::new();
    for row in rows {
        grants.entry(row.employee_id).or_default().push(Permission {
            id: row.id,
            name: row.name,
            description: row.description,
            module: row.module,
        });
    }
    Ok(grants)
}
