//! Employee and shift lifecycle against an in-memory database
//!
//! Covers the default permission grant, the notification policy for
//! every mutating operation, read-time join freshness after a rename,
//! and the storage-level cascade on employee deletion.

use roster_server::db::repository::{
    department, employee, notification, permission, shift, time_entry,
};
use shared::models::{
    DEFAULT_EMPLOYEE_PERMISSIONS, DepartmentCreate, EmployeeCreate, EmployeeStatus,
    EmployeeUpdate, NotificationType, ShiftCreate, ShiftStatus, ShiftUpdate,
};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

fn employee_payload(name: &str, department_id: Option<i64>) -> EmployeeCreate {
    EmployeeCreate {
        name: name.into(),
        email: "e@example.com".into(),
        phone: "555-0102".into(),
        role: "Sales Associate".into(),
        department_id,
        status: EmployeeStatus::Active,
        start_date: "2024-01-15".into(),
        hourly_rate: 22.0,
    }
}

#[tokio::test]
async fn new_employees_receive_the_default_permission_set() {
    let pool = test_pool().await;

    let emp = employee::create(&pool, employee_payload("Dana Ortiz", None))
        .await
        .unwrap();

    let granted: Vec<&str> = emp.permissions.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(granted.len(), DEFAULT_EMPLOYEE_PERMISSIONS.len());
    for name in DEFAULT_EMPLOYEE_PERMISSIONS {
        assert!(granted.contains(&name), "missing default grant {name}");
    }

    // Department unresolvable -> joined name falls back
    assert_eq!(emp.department, "Unknown");
}

#[tokio::test]
async fn replace_permissions_swaps_the_grant_set() {
    let pool = test_pool().await;
    let emp = employee::create(&pool, employee_payload("Dana Ortiz", None))
        .await
        .unwrap();

    let catalog = permission::find_all(&pool).await.unwrap();
    let manage = catalog
        .iter()
        .find(|p| p.name == "manage_schedule")
        .unwrap();

    employee::replace_permissions(&pool, emp.id, &[manage.id])
        .await
        .unwrap();

    let emp = employee::find_by_id(&pool, emp.id).await.unwrap().unwrap();
    assert_eq!(emp.permissions.len(), 1);
    assert_eq!(emp.permissions[0].name, "manage_schedule");
}

#[tokio::test]
async fn department_rename_is_visible_on_next_read_without_employee_writes() {
    let pool = test_pool().await;

    let dept = department::create(
        &pool,
        DepartmentCreate {
            name: "Sales".into(),
            description: Some("Storefront".into()),
            manager_id: None,
        },
    )
    .await
    .unwrap();

    let emp = employee::create(&pool, employee_payload("Dana Ortiz", Some(dept.id)))
        .await
        .unwrap();
    assert_eq!(emp.department, "Sales");
    let updated_at_before = emp.updated_at;

    department::rename(&pool, dept.id, "Revenue").await.unwrap();

    let emp = employee::find_by_id(&pool, emp.id).await.unwrap().unwrap();
    assert_eq!(emp.department, "Revenue");
    // The employee row itself was not touched
    assert_eq!(emp.updated_at, updated_at_before);
}

#[tokio::test]
async fn shift_reads_join_employee_and_department_names() {
    let pool = test_pool().await;

    let dept = department::create(
        &pool,
        DepartmentCreate {
            name: "Kitchen".into(),
            description: None,
            manager_id: None,
        },
    )
    .await
    .unwrap();
    let emp = employee::create(&pool, employee_payload("Leo Park", Some(dept.id)))
        .await
        .unwrap();

    let s = shift::create(
        &pool,
        ShiftCreate {
            employee_id: emp.id,
            start_time: "09:00".into(),
            end_time: "17:00".into(),
            date: "2025-03-14".into(),
            status: ShiftStatus::Scheduled,
            notes: Some("Opening".into()),
        },
    )
    .await
    .unwrap();

    assert_eq!(s.employee_name, "Leo Park");
    assert_eq!(s.role, "Sales Associate");
    assert_eq!(s.department, "Kitchen");
    assert_eq!(s.status, ShiftStatus::Scheduled);
}

#[tokio::test]
async fn deleting_an_employee_cascades_to_shifts_and_time_entries() {
    let pool = test_pool().await;
    let emp = employee::create(&pool, employee_payload("Leo Park", None))
        .await
        .unwrap();

    shift::create(
        &pool,
        ShiftCreate {
            employee_id: emp.id,
            start_time: "09:00".into(),
            end_time: "17:00".into(),
            date: "2025-03-14".into(),
            status: ShiftStatus::Scheduled,
            notes: None,
        },
    )
    .await
    .unwrap();
    time_entry::insert_active(&pool, emp.id, "2025-03-14", "09:00:00")
        .await
        .unwrap();

    employee::delete(&pool, emp.id).await.unwrap();

    assert!(shift::find_all(&pool).await.unwrap().is_empty());
    assert!(time_entry::find_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn notification_policy_matches_the_operation_table() {
    let pool = test_pool().await;

    // add employee -> success "Employee Added"
    let emp = employee::create(&pool, employee_payload("Dana Ortiz", None))
        .await
        .unwrap();
    roster_server::services::notifier::employee_added(&pool, &emp.name)
        .await
        .unwrap();

    // update employee -> info "Employee Updated"
    employee::update(
        &pool,
        emp.id,
        EmployeeUpdate {
            role: Some("Shift Lead".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    roster_server::services::notifier::employee_updated(&pool)
        .await
        .unwrap();

    let recent = notification::find_recent(&pool, 10).await.unwrap();
    assert_eq!(recent.len(), 2);

    let added = recent.iter().find(|n| n.title == "Employee Added").unwrap();
    assert_eq!(added.kind, NotificationType::Success);
    assert_eq!(added.message, "Dana Ortiz has been added to the system");
    assert!(!added.read);

    let updated = recent
        .iter()
        .find(|n| n.title == "Employee Updated")
        .unwrap();
    assert_eq!(updated.kind, NotificationType::Info);
    assert_eq!(updated.message, "Employee information has been updated");
}

#[tokio::test]
async fn shift_update_emits_no_notification() {
    let pool = test_pool().await;
    let emp = employee::create(&pool, employee_payload("Dana Ortiz", None))
        .await
        .unwrap();
    let s = shift::create(
        &pool,
        ShiftCreate {
            employee_id: emp.id,
            start_time: "09:00".into(),
            end_time: "17:00".into(),
            date: "2025-03-14".into(),
            status: ShiftStatus::Scheduled,
            notes: None,
        },
    )
    .await
    .unwrap();

    let before = notification::find_recent(&pool, 100).await.unwrap().len();

    shift::update(
        &pool,
        s.id,
        ShiftUpdate {
            status: Some(ShiftStatus::Confirmed),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let after = notification::find_recent(&pool, 100).await.unwrap().len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn mark_read_is_one_way() {
    let pool = test_pool().await;
    let n = roster_server::services::notifier::employee_updated(&pool)
        .await
        .unwrap();
    assert!(!n.read);

    let n = notification::mark_read(&pool, n.id).await.unwrap();
    assert!(n.read);

    // Marking again keeps it read
    let n = notification::mark_read(&pool, n.id).await.unwrap();
    assert!(n.read);
}
