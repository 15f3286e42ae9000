//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::core::ServerState;
use crate::db::repository::employee;
use crate::services::notifier;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_hourly_rate, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, time};

/// List all employees with joined department names and permission sets
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(&state.pool).await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let emp = employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(emp))
}

/// Create a new employee (grants the default permission set)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.role, "role", MAX_NAME_LEN)?;
    validate_hourly_rate(payload.hourly_rate)?;
    time::parse_date(&payload.start_date)?;

    let emp = employee::create(&state.pool, payload).await?;

    notifier::employee_added(&state.pool, &emp.name).await?;

    Ok(Json(emp))
}

/// Partial update of an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.role, "role", MAX_NAME_LEN)?;
    if let Some(rate) = payload.hourly_rate {
        validate_hourly_rate(rate)?;
    }

    let emp = employee::update(&state.pool, id, payload).await?;

    notifier::employee_updated(&state.pool).await?;

    Ok(Json(emp))
}

/// Delete an employee.
///
/// Dependent shifts and time entries are removed by the storage-level
/// cascade; the notification names the employee as they were.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let emp = employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;

    let result = employee::delete(&state.pool, id).await?;

    notifier::employee_removed(&state.pool, &emp.name).await?;

    Ok(Json(result))
}
