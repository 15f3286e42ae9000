//! Clock-in/clock-out lifecycle against an in-memory database
//!
//! Exercises the full state machine per (employee, date):
//! Absent -> Active -> Completed, including the idempotent re-entry
//! cases and the notification each transition must leave behind.

use roster_server::db::repository::{department, employee, notification, time_entry};
use roster_server::services::{ClockInOutcome, ClockOutOutcome, TimeClockService};
use shared::models::{
    DepartmentCreate, EmployeeCreate, EmployeeStatus, NotificationType, TimeEntryStatus,
};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory pool with the crate's own migrations applied.
/// One connection: a second one would see a different empty memory DB.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

async fn seed_employee(pool: &SqlitePool, name: &str) -> i64 {
    let dept = department::create(
        pool,
        DepartmentCreate {
            name: "Operations".into(),
            description: None,
            manager_id: None,
        },
    )
    .await
    .unwrap();

    let emp = employee::create(
        pool,
        EmployeeCreate {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "555-0101".into(),
            role: "Associate".into(),
            department_id: Some(dept.id),
            status: EmployeeStatus::Active,
            start_date: "2024-06-01".into(),
            hourly_rate: 18.5,
        },
    )
    .await
    .unwrap();
    emp.id
}

async fn notifications_titled(pool: &SqlitePool, title: &str) -> usize {
    notification::find_recent(pool, 100)
        .await
        .unwrap()
        .iter()
        .filter(|n| n.title == title)
        .count()
}

#[tokio::test]
async fn clock_in_creates_an_active_entry_and_a_success_notification() {
    let pool = test_pool().await;
    let employee_id = seed_employee(&pool, "Maya Chen").await;
    let clock = TimeClockService::new(pool.clone(), chrono_tz::UTC);

    let outcome = clock.clock_in(employee_id).await.unwrap();
    let entry = match outcome {
        ClockInOutcome::ClockedIn { entry } => entry,
        other => panic!("expected ClockedIn, got {other:?}"),
    };

    assert_eq!(entry.status, TimeEntryStatus::Active);
    assert!(entry.clock_out.is_none());
    assert_eq!(entry.total_hours, 0.0);
    assert!(!entry.overtime);
    assert_eq!(entry.break_time, 0);
    assert_eq!(entry.employee_name, "Maya Chen");

    assert_eq!(notifications_titled(&pool, "Clocked In").await, 1);
}

#[tokio::test]
async fn second_clock_in_is_a_no_op_with_a_warning() {
    let pool = test_pool().await;
    let employee_id = seed_employee(&pool, "Maya Chen").await;
    let clock = TimeClockService::new(pool.clone(), chrono_tz::UTC);

    clock.clock_in(employee_id).await.unwrap();
    let second = clock.clock_in(employee_id).await.unwrap();
    assert!(matches!(second, ClockInOutcome::AlreadyClockedIn));

    // Still exactly one entry for today
    let entries = time_entry::find_all(&pool).await.unwrap();
    assert_eq!(entries.len(), 1);

    // Exactly one warning, and no second success notification
    let recent = notification::find_recent(&pool, 100).await.unwrap();
    let warning = recent
        .iter()
        .find(|n| n.title == "Already Clocked In")
        .expect("warning notification missing");
    assert_eq!(warning.kind, NotificationType::Warning);
    assert_eq!(notifications_titled(&pool, "Clocked In").await, 1);
}

#[tokio::test]
async fn clock_out_completes_the_entry_with_derived_fields() {
    let pool = test_pool().await;
    let employee_id = seed_employee(&pool, "Maya Chen").await;
    let clock = TimeClockService::new(pool.clone(), chrono_tz::UTC);

    clock.clock_in(employee_id).await.unwrap();
    let outcome = clock.clock_out(employee_id).await.unwrap();
    let entry = match outcome {
        ClockOutOutcome::ClockedOut { entry } => entry,
        other => panic!("expected ClockedOut, got {other:?}"),
    };

    assert_eq!(entry.status, TimeEntryStatus::Completed);
    assert!(entry.clock_out.is_some());
    // Same-second clock-out: zero hours, no overtime
    assert_eq!(entry.total_hours, 0.0);
    assert!(!entry.overtime);

    assert_eq!(notifications_titled(&pool, "Clocked Out").await, 1);
}

#[tokio::test]
async fn clock_out_without_active_entry_mutates_nothing() {
    let pool = test_pool().await;
    let employee_id = seed_employee(&pool, "Maya Chen").await;
    let clock = TimeClockService::new(pool.clone(), chrono_tz::UTC);

    let outcome = clock.clock_out(employee_id).await.unwrap();
    assert!(matches!(outcome, ClockOutOutcome::NotClockedIn));

    assert!(time_entry::find_all(&pool).await.unwrap().is_empty());

    let recent = notification::find_recent(&pool, 100).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].title, "Not Clocked In");
    assert_eq!(recent[0].kind, NotificationType::Warning);
}

#[tokio::test]
async fn completed_entries_are_terminal_for_the_day_pair() {
    let pool = test_pool().await;
    let employee_id = seed_employee(&pool, "Maya Chen").await;
    let clock = TimeClockService::new(pool.clone(), chrono_tz::UTC);

    clock.clock_in(employee_id).await.unwrap();
    clock.clock_out(employee_id).await.unwrap();

    // No active entry remains, so a second clock-out is a warning no-op
    let again = clock.clock_out(employee_id).await.unwrap();
    assert!(matches!(again, ClockOutOutcome::NotClockedIn));

    let entries = time_entry::find_all(&pool).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, TimeEntryStatus::Completed);
}

#[tokio::test]
async fn unknown_employee_is_a_reportable_error() {
    let pool = test_pool().await;
    let clock = TimeClockService::new(pool.clone(), chrono_tz::UTC);

    assert!(clock.clock_in(424242).await.is_err());
    assert!(clock.clock_out(424242).await.is_err());

    // And no notification was emitted for either
    assert!(notification::find_recent(&pool, 100).await.unwrap().is_empty());
}
