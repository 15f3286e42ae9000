//! Derived metrics over the loaded collections
//!
//! Pure functions, recomputed on every call. No caching, no incremental
//! maintenance — the inputs are whatever the repositories returned for
//! the current request.

pub mod metrics;

pub use metrics::{
    DayAttendance, DepartmentStats, attendance_rate, department_stats, overtime_hours,
    payroll_cost, total_hours, weekly_attendance,
};
