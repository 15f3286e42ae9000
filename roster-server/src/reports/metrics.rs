//! Attendance, payroll and per-department aggregations

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{Department, Employee, TimeEntry, TimeEntryStatus};

use crate::services::time_clock::OVERTIME_THRESHOLD_HOURS;

/// Sum of worked hours across all entries
pub fn total_hours(entries: &[TimeEntry]) -> f64 {
    entries.iter().map(|e| e.total_hours).sum()
}

/// Share of entries not marked missed, as a percentage string with one
/// decimal place. Exactly "0.0" when there are no entries.
pub fn attendance_rate(entries: &[TimeEntry]) -> String {
    if entries.is_empty() {
        return "0.0".to_string();
    }
    let present = entries
        .iter()
        .filter(|e| e.status != TimeEntryStatus::Missed)
        .count();
    format!("{:.1}", present as f64 / entries.len() as f64 * 100.0)
}

/// Hours above the daily threshold summed over overtime-flagged entries.
///
/// A malformed entry (overtime flag set but total_hours <= 8) contributes
/// a negative amount; the raw sum is preserved, not clamped.
pub fn overtime_hours(entries: &[TimeEntry]) -> f64 {
    entries
        .iter()
        .filter(|e| e.overtime)
        .map(|e| e.total_hours - OVERTIME_THRESHOLD_HOURS)
        .sum()
}

/// Total payroll cost: per employee, worked hours times hourly rate
pub fn payroll_cost(employees: &[Employee], entries: &[TimeEntry]) -> f64 {
    employees
        .iter()
        .map(|emp| {
            let hours: f64 = entries
                .iter()
                .filter(|e| e.employee_id == emp.id)
                .map(|e| e.total_hours)
                .sum();
            hours * emp.hourly_rate
        })
        .sum()
}

/// Per-department headcount and hours
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentStats {
    pub name: String,
    pub employees: usize,
    /// Summed hours, rounded to the nearest whole hour
    pub hours: f64,
    /// hours / headcount, one decimal place; 0 for an empty department
    pub avg_hours: f64,
}

pub fn department_stats(
    departments: &[Department],
    employees: &[Employee],
    entries: &[TimeEntry],
) -> Vec<DepartmentStats> {
    departments
        .iter()
        .map(|dept| {
            let members: Vec<&Employee> = employees
                .iter()
                .filter(|emp| emp.department_id == Some(dept.id))
                .collect();
            let hours: f64 = entries
                .iter()
                .filter(|e| members.iter().any(|m| m.id == e.employee_id))
                .map(|e| e.total_hours)
                .sum();
            let avg_hours = if members.is_empty() {
                0.0
            } else {
                (hours / members.len() as f64 * 10.0).round() / 10.0
            };

            DepartmentStats {
                name: dept.name.clone(),
                employees: members.len(),
                hours: hours.round(),
                avg_hours,
            }
        })
        .collect()
}

/// One weekday bucket of the weekly attendance report
#[derive(Debug, Clone, Serialize)]
pub struct DayAttendance {
    /// Weekday label ("Mon".."Sun")
    pub day: String,
    pub present: usize,
    pub absent: usize,
}

/// Present/absent counts for each day of the week starting at `week_start`
/// (Monday). Entries are matched by their concrete calendar date.
pub fn weekly_attendance(entries: &[TimeEntry], week_start: NaiveDate) -> Vec<DayAttendance> {
    (0..7)
        .map(|offset| {
            let day = week_start + chrono::Duration::days(offset);
            let date = day.format("%Y-%m-%d").to_string();
            let day_entries: Vec<&TimeEntry> =
                entries.iter().filter(|e| e.date == date).collect();

            DayAttendance {
                day: day.format("%a").to_string(),
                present: day_entries
                    .iter()
                    .filter(|e| e.status != TimeEntryStatus::Missed)
                    .count(),
                absent: day_entries
                    .iter()
                    .filter(|e| e.status == TimeEntryStatus::Missed)
                    .count(),
            }
        })
        .collect()
}
