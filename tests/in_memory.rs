//! End-to-end flow over the in-memory adapters.
//!
//! Exercises the whole stack without a transport or a database: bootstrap
//! login, employee onboarding, and a full task lifecycle with notification
//! delivery.

use std::sync::Arc;

use mockable::DefaultClock;

use gantry::auth::domain::Role;
use gantry::auth::password::PasswordHash;
use gantry::auth::services::{AuthService, BootstrapAdmin};
use gantry::auth::token::{TokenCodec, TokenConfig};
use gantry::directory::adapters::memory::InMemoryEmployeeRepository;
use gantry::directory::domain::{Employee, EmployeeEmail};
use gantry::directory::ports::EmployeeRepository;
use gantry::directory::services::{DirectoryService, NewEmployeeRequest};
use gantry::error::ErrorKind;
use gantry::task::adapters::memory::{InMemoryTaskRepository, RecordingNotifier};
use gantry::task::domain::TaskStatus;
use gantry::task::services::{CreateTaskRequest, TaskLifecycleService};

struct App {
    auth: AuthService<InMemoryEmployeeRepository, DefaultClock>,
    directory: DirectoryService<InMemoryEmployeeRepository>,
    tasks: TaskLifecycleService<
        InMemoryTaskRepository,
        InMemoryEmployeeRepository,
        RecordingNotifier,
        DefaultClock,
    >,
    notifier: Arc<RecordingNotifier>,
}

async fn bootstrap_app() -> App {
    let employees = Arc::new(InMemoryEmployeeRepository::new());
    let task_store = Arc::new(InMemoryTaskRepository::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let clock = Arc::new(DefaultClock);

    let bootstrap_email =
        EmployeeEmail::new(BootstrapAdmin::DEFAULT_EMAIL).expect("valid bootstrap email");
    // Seeded record stores the password verbatim; only the bootstrap account
    // may log in this way.
    let admin = Employee::new(
        bootstrap_email.clone(),
        PasswordHash::new("admin"),
        "System",
        "Administrator",
        None,
        Role::Admin,
    )
    .expect("valid bootstrap admin");
    employees
        .insert(&admin)
        .await
        .expect("bootstrap seed should succeed");

    let codec = Arc::new(TokenCodec::new(&TokenConfig::new("integration-secret")));
    let auth = AuthService::new(
        Arc::clone(&employees),
        codec,
        BootstrapAdmin::new(bootstrap_email),
        Arc::clone(&clock),
    );
    let directory = DirectoryService::new(Arc::clone(&employees));
    let tasks = TaskLifecycleService::new(task_store, employees, Arc::clone(&notifier), clock);

    App {
        auth,
        directory,
        tasks,
        notifier,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn full_flow_from_bootstrap_login_to_completed_task() {
    let app = bootstrap_app().await;

    // Bootstrap admin signs in with the seeded cleartext credential.
    let admin_token = app
        .auth
        .login(BootstrapAdmin::DEFAULT_EMAIL, "admin")
        .await
        .expect("bootstrap login should succeed");
    let admin = app
        .auth
        .authenticate(&admin_token.token)
        .expect("bootstrap token should authenticate");
    assert_eq!(admin.role(), Role::Admin);

    // Admin onboards a manager and a developer reporting to them.
    app.directory
        .add_employee(
            &admin,
            NewEmployeeRequest::new("boss@example.com", "boss-pw", "Robin", "Mason", Role::Manager)
                .with_manager(BootstrapAdmin::DEFAULT_EMAIL),
        )
        .await
        .expect("manager onboarding should succeed");
    app.directory
        .add_employee(
            &admin,
            NewEmployeeRequest::new("dev@example.com", "dev-pw", "Sam", "Field", Role::Developer)
                .with_manager("boss@example.com"),
        )
        .await
        .expect("developer onboarding should succeed");

    // Onboarded accounts log in with hashed credentials, not cleartext.
    let Err(error) = app.auth.login("boss@example.com", "wrong-pw").await else {
        panic!("wrong password must be rejected");
    };
    assert_eq!(error.kind(), ErrorKind::Unauthenticated);

    let boss_token = app
        .auth
        .login("boss@example.com", "boss-pw")
        .await
        .expect("manager login should succeed");
    let boss = app
        .auth
        .authenticate(&boss_token.token)
        .expect("manager token should authenticate");

    let dev_token = app
        .auth
        .login("dev@example.com", "dev-pw")
        .await
        .expect("developer login should succeed");
    let dev = app
        .auth
        .authenticate(&dev_token.token)
        .expect("developer token should authenticate");

    // Manager creates a task for the developer; it starts in to_do.
    let task = app
        .tasks
        .create_task(
            &boss,
            CreateTaskRequest::new("Calibrate the hoist", "dev@example.com", 1)
                .with_description("Verify the load cell against the reference weights."),
        )
        .await
        .expect("task creation should succeed");
    assert_eq!(task.status(), TaskStatus::ToDo);

    // Developer works the task and submits it for review.
    app.tasks
        .start_task(&dev, task.id())
        .await
        .expect("assignee start should succeed");
    app.tasks
        .submit_for_review(&dev, task.id())
        .await
        .expect("review submission should succeed");

    // First pass fails review, the developer reworks, the second passes.
    app.tasks
        .reject_task(&boss, task.id())
        .await
        .expect("reporter rejection should succeed");
    app.tasks
        .start_task(&dev, task.id())
        .await
        .expect("rework should be possible after rejection");
    app.tasks
        .submit_for_review(&dev, task.id())
        .await
        .expect("resubmission should succeed");
    let completed = app
        .tasks
        .complete_task(&boss, task.id())
        .await
        .expect("reporter completion should succeed");
    assert_eq!(completed.status(), TaskStatus::Completed);

    // Two review requests to the reporter, one rejection and one completion
    // notice to the assignee, in transition order.
    let sent = app.notifier.sent();
    let summary: Vec<(&str, &str)> = sent
        .iter()
        .map(|notification| (notification.recipient().as_str(), notification.subject()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("boss@example.com", "Task Review Notification"),
            ("dev@example.com", "Task Rejection Notification"),
            ("boss@example.com", "Task Review Notification"),
            ("dev@example.com", "Task Completion Notification"),
        ]
    );

    // Directory listing exposes profiles only, never credentials.
    let profiles = app
        .directory
        .list_employees(&admin, None)
        .await
        .expect("listing should succeed");
    assert_eq!(profiles.len(), 3);
    let json = serde_json::to_string(&profiles).expect("profiles serialize");
    assert!(!json.contains("password"));
    assert!(!json.contains("boss-pw"));
}

#[tokio::test(flavor = "multi_thread")]
async fn expired_or_tampered_tokens_are_rejected_uniformly() {
    let app = bootstrap_app().await;

    let issued = app
        .auth
        .login(BootstrapAdmin::DEFAULT_EMAIL, "admin")
        .await
        .expect("bootstrap login should succeed");

    let mut tampered = issued.token;
    tampered.push('x');

    let Err(tamper_error) = app.auth.authenticate(&tampered) else {
        panic!("tampered token must be rejected");
    };
    assert_eq!(tamper_error.kind(), ErrorKind::Unauthenticated);

    let Err(garbage_error) = app.auth.authenticate("not-a-token") else {
        panic!("malformed token must be rejected");
    };
    assert_eq!(garbage_error.kind(), ErrorKind::Unauthenticated);
}
