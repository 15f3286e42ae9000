//! Reports API Handlers
//!
//! Every report re-reads the collections it needs and feeds them through
//! the pure metric functions; nothing is cached between calls.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::{department, employee, time_entry};
use crate::reports::{
    DayAttendance, DepartmentStats, attendance_rate, department_stats, overtime_hours,
    payroll_cost, total_hours, weekly_attendance,
};
use crate::utils::{AppResult, time};

/// Headline metric card values (whole-number rounding, rate as a string)
#[derive(Debug, Serialize)]
pub struct OverviewReport {
    pub total_hours: f64,
    pub attendance_rate: String,
    pub overtime_hours: f64,
    pub payroll_cost: f64,
}

/// GET /api/reports/overview
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<OverviewReport>> {
    let employees = employee::find_all(&state.pool).await?;
    let entries = time_entry::find_all(&state.pool).await?;

    Ok(Json(OverviewReport {
        total_hours: total_hours(&entries).round(),
        attendance_rate: attendance_rate(&entries),
        overtime_hours: overtime_hours(&entries).round(),
        payroll_cost: payroll_cost(&employees, &entries).round(),
    }))
}

/// GET /api/reports/departments
pub async fn departments(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DepartmentStats>>> {
    let departments = department::find_all(&state.pool).await?;
    let employees = employee::find_all(&state.pool).await?;
    let entries = time_entry::find_all(&state.pool).await?;

    Ok(Json(department_stats(&departments, &employees, &entries)))
}

/// GET /api/reports/attendance-week — the current business week, Monday first
pub async fn attendance_week(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DayAttendance>>> {
    let entries = time_entry::find_all(&state.pool).await?;
    let week_start = time::week_start(time::today_in(state.config.timezone));

    Ok(Json(weekly_attendance(&entries, week_start)))
}
