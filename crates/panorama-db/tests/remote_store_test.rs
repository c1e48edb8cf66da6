//! Integration tests for the remote store repositories, run against an
//! embedded in-memory SurrealDB engine.

use chrono::{TimeZone, Utc};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use surrealdb_types::SurrealValue;

use panorama_core::models::{
    ActivityAction, Customer, EmployeeRole, Identity, NewActivity, Project, ProjectStatus,
    TeamMember,
};
use panorama_core::store::{ActivityLog, AuthStore, CustomerStore, ProjectStore};
use panorama_db::{DbConfig, RemoteBackend, run_migrations};

async fn setup() -> (Surreal<Db>, RemoteBackend<Db>) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    run_migrations(&db).await.unwrap();
    let config = DbConfig {
        namespace: "test".into(),
        database: "test".into(),
        ..DbConfig::default()
    };
    let backend = RemoteBackend::from_client(db.clone(), config);
    (db, backend)
}

fn project(name: &str) -> Project {
    Project {
        id: Identity::Unassigned,
        name: name.into(),
        customer_id: "c1".into(),
        customer_name: "Acme Corp".into(),
        location: "Jakarta".into(),
        start_date: "2024-01-15".into(),
        end_date: None,
        status: ProjectStatus::OnProgress,
        value: 150_000_000.0,
        project_type: "Software".into(),
        description: "Migrating legacy ERP to Cloud.".into(),
        notes: String::new(),
        team: vec![TeamMember {
            role: EmployeeRole::Pm,
            name: "Alice PM".into(),
            employee_id: Some("e1".into()),
        }],
        updated_at: Utc::now(),
    }
}

// -----------------------------------------------------------------------
// Projects
// -----------------------------------------------------------------------

#[tokio::test]
async fn create_assigns_a_persisted_identity() {
    let (_db, backend) = setup().await;

    let saved = backend.save_project(project("ERP Migration 2024")).await.unwrap();
    assert!(saved.id.is_persisted());

    let projects = backend.fetch_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, saved.id);
    assert_eq!(projects[0].name, "ERP Migration 2024");
    assert_eq!(projects[0].value, 150_000_000.0);
    assert_eq!(projects[0].status, ProjectStatus::OnProgress);
    assert_eq!(projects[0].team, saved.team);
}

#[tokio::test]
async fn local_placeholder_ids_never_reach_the_store() {
    let (_db, backend) = setup().await;

    let mut incoming = project("Imported");
    incoming.id = Identity::LocalPending("p1".into());

    let saved = backend.save_project(incoming).await.unwrap();
    assert!(saved.id.is_persisted());
    assert_ne!(saved.id.key().as_deref(), Some("p1"));

    let projects = backend.fetch_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert!(projects[0].id.is_persisted());
}

#[tokio::test]
async fn saving_a_persisted_project_updates_in_place() {
    let (_db, backend) = setup().await;

    let mut saved = backend.save_project(project("Before")).await.unwrap();
    saved.name = "After".into();
    saved.value = 200_000_000.0;
    let resaved = backend.save_project(saved.clone()).await.unwrap();
    assert_eq!(resaved.id, saved.id);

    let projects = backend.fetch_projects().await.unwrap();
    assert_eq!(projects.len(), 1, "update must not duplicate the record");
    assert_eq!(projects[0].name, "After");
    assert_eq!(projects[0].value, 200_000_000.0);
}

#[tokio::test]
async fn fetch_orders_projects_by_recency() {
    let (_db, backend) = setup().await;

    let mut older = project("Older");
    older.updated_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut newer = project("Newer");
    newer.updated_at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

    backend.save_project(older).await.unwrap();
    backend.save_project(newer).await.unwrap();

    let projects = backend.fetch_projects().await.unwrap();
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn delete_removes_the_record_and_missing_ids_are_noops() {
    let (_db, backend) = setup().await;

    let saved = backend.save_project(project("Doomed")).await.unwrap();
    backend.delete_project(&saved.id).await.unwrap();
    assert!(backend.fetch_projects().await.unwrap().is_empty());

    // Deleting again, or deleting an id that never existed, is fine.
    backend.delete_project(&saved.id).await.unwrap();
    backend.delete_project(&Identity::Unassigned).await.unwrap();
}

#[tokio::test]
async fn team_snapshots_survive_the_schemafull_table() {
    let (_db, backend) = setup().await;

    let mut incoming = project("Staffed");
    incoming.team = vec![
        TeamMember {
            role: EmployeeRole::Pm,
            name: "Alice PM".into(),
            employee_id: Some("e1".into()),
        },
        TeamMember {
            role: EmployeeRole::Engineer,
            name: "Charlie Tech".into(),
            employee_id: None,
        },
    ];

    let saved = backend.save_project(incoming.clone()).await.unwrap();
    assert_eq!(saved.team, incoming.team);

    let projects = backend.fetch_projects().await.unwrap();
    assert_eq!(projects[0].team, incoming.team);
}

// -----------------------------------------------------------------------
// Customers
// -----------------------------------------------------------------------

#[tokio::test]
async fn customers_are_listed_alphabetically() {
    let (_db, backend) = setup().await;

    for name in ["Zenith Ltd", "Acme Corp", "Mid Market"] {
        backend
            .save_customer(Customer {
                id: Identity::Unassigned,
                name: name.into(),
                address: String::new(),
                contact_person: None,
                phone: None,
                email: None,
            })
            .await
            .unwrap();
    }

    let customers = backend.fetch_customers().await.unwrap();
    let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Corp", "Mid Market", "Zenith Ltd"]);
}

// -----------------------------------------------------------------------
// Record-access authentication
// -----------------------------------------------------------------------

const ACCESS_DDL: &str = "\
DEFINE ACCESS account ON DATABASE TYPE RECORD
    SIGNUP ( CREATE user SET email = $email, \
        password = crypto::argon2::generate($password) )
    SIGNIN ( SELECT * FROM user WHERE email = $email \
        AND crypto::argon2::compare(password, $password) );
";

#[tokio::test]
async fn record_access_sign_in_establishes_a_session() {
    let (db, backend) = setup().await;
    db.query(ACCESS_DDL).await.unwrap().check().unwrap();

    backend.sign_up("gm@company.com", "secret").await.unwrap();

    let session = backend.sign_in("gm@company.com", "secret").await.unwrap();
    assert_eq!(session.email, "gm@company.com");
    assert!(!session.access_token.is_empty());
    assert_eq!(backend.session().await.unwrap(), Some(session));

    backend.sign_out().await.unwrap();
    assert_eq!(backend.session().await.unwrap(), None);
}

// -----------------------------------------------------------------------
// Activity log
// -----------------------------------------------------------------------

#[derive(Debug, SurrealValue)]
struct ActivityRow {
    user_email: String,
    action: String,
    details: String,
}

#[tokio::test]
async fn recorded_activity_lands_in_the_audit_table() {
    let (db, backend) = setup().await;

    backend
        .record(NewActivity {
            user_email: "gm@company.com".into(),
            action: ActivityAction::CreateProject,
            details: "Project: ERP Migration 2024".into(),
        })
        .await
        .unwrap();

    let mut result = db
        .query("SELECT user_email, action, details FROM activity_logs")
        .await
        .unwrap();
    let rows: Vec<ActivityRow> = result.take(0).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_email, "gm@company.com");
    assert_eq!(rows[0].action, "CREATE_PROJECT");
    assert_eq!(rows[0].details, "Project: ERP Migration 2024");
}
