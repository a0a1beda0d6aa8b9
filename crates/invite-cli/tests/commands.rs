//! Commands against a live fake backend with file-backed storage

use invite_cli::{AdminCommand, App, Command, RsvpArgs};
use invite_core::InviteConfig;
use invite_storage::{CredentialStore, FileStore};
use invite_test_utils::{sample_responses, FakeBackend};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::sync::Arc;

fn config(backend: &FakeBackend, storage: &Path) -> InviteConfig {
    InviteConfig::default()
        .with_api_base_url(backend.base_url())
        .with_storage_path(storage)
}

async fn run(app: &App, command: Command, input: &str) -> anyhow::Result<String> {
    let mut input = input.as_bytes();
    let mut out: Vec<u8> = Vec::new();
    app.run(command, &mut input, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

fn rsvp(name: &str, attending: &str, attendees: Option<&str>) -> Command {
    Command::Rsvp(RsvpArgs {
        name: name.to_string(),
        attending: attending.to_string(),
        attendees: attendees.map(str::to_string),
        message: None,
        yes: false,
    })
}

#[tokio::test]
async fn rsvp_then_mirror() {
    let backend = FakeBackend::spawn("sesame").await;
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("state.json");
    let app = App::open(config(&backend, &storage)).unwrap();

    let text = run(&app, rsvp("Alice", "yes", Some("3")), "y\n")
        .await
        .unwrap();
    assert!(text.contains("Please confirm your RSVP"));
    assert!(text.contains("Thank You!"));
    assert!(text.contains("Attendees: 3"));
    assert_eq!(backend.users().len(), 1);

    // mirror survives a restart
    let reopened = App::open(config(&backend, &storage)).unwrap();
    let text = run(&reopened, Command::Mirror, "").await.unwrap();
    assert!(text.contains("Alice"));
    assert!(text.contains("yes x3"));
}

#[tokio::test]
async fn admin_session_persists_between_runs() {
    let backend = FakeBackend::spawn("sesame").await;
    backend.seed(sample_responses());
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("state.json");

    let app = App::open(config(&backend, &storage)).unwrap();
    let text = run(
        &app,
        Command::Admin(AdminCommand::Login { passcode: None }),
        "sesame\n",
    )
    .await
    .unwrap();
    assert!(text.contains("Logged in."));
    assert!(text.contains("Yes: 2 | No: 1 | Attendees: 3"));

    let app = App::open(config(&backend, &storage)).unwrap();
    assert!(app.session().is_authenticated());
    let json = run(&app, Command::Admin(AdminCommand::List { json: true }), "")
        .await
        .unwrap();
    let report: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(report["totals"]["yes"], 2);
    assert_eq!(report["responses"].as_array().unwrap().len(), 3);

    run(&app, Command::Admin(AdminCommand::Logout), "")
        .await
        .unwrap();
    let store = FileStore::open(&storage).unwrap();
    assert!(!CredentialStore::new(Arc::new(store)).has_token());
}

#[tokio::test]
async fn wrong_passcode_reports_error() {
    let backend = FakeBackend::spawn("sesame").await;
    let dir = tempfile::tempdir().unwrap();
    let app = App::open(config(&backend, &dir.path().join("state.json"))).unwrap();

    let err = run(
        &app,
        Command::Admin(AdminCommand::Login {
            passcode: Some("guess".to_string()),
        }),
        "",
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Invalid passcode");
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn expired_session_asks_for_login() {
    let backend = FakeBackend::spawn("sesame").await;
    let dir = tempfile::tempdir().unwrap();
    let app = App::open(config(&backend, &dir.path().join("state.json"))).unwrap();

    run(
        &app,
        Command::Admin(AdminCommand::Login {
            passcode: Some("sesame".to_string()),
        }),
        "",
    )
    .await
    .unwrap();
    backend.revoke_all_tokens();

    let err = run(&app, Command::Admin(AdminCommand::List { json: false }), "")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("session expired"));
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn unreachable_server_shows_contacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = InviteConfig::default()
        .with_api_base_url("http://127.0.0.1:9")
        .with_storage_path(dir.path().join("state.json"));
    let app = App::open(config).unwrap();

    let mut input: &[u8] = b"";
    let mut out: Vec<u8> = Vec::new();
    let command = Command::Rsvp(RsvpArgs {
        name: "Bob".to_string(),
        attending: "no".to_string(),
        attendees: None,
        message: None,
        yes: true,
    });
    let err = app.run(command, &mut input, &mut out).await.unwrap_err();
    assert!(err.to_string().contains("RSVP was not sent"));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Could not reach the server"));
    assert!(text.contains("tel:0771908356"));
}

#[tokio::test]
async fn login_while_logged_in_keeps_session() {
    let backend = FakeBackend::spawn("sesame").await;
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("state.json");
    let app = App::open(config(&backend, &storage)).unwrap();
    run(
        &app,
        Command::Admin(AdminCommand::Login {
            passcode: Some("sesame".to_string()),
        }),
        "",
    )
    .await
    .unwrap();

    let app = App::open(config(&backend, &storage)).unwrap();
    let err = run(
        &app,
        Command::Admin(AdminCommand::Login {
            passcode: Some("wrong".to_string()),
        }),
        "",
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("already logged in"));
    assert!(app.session().is_authenticated());

    let store = FileStore::open(&storage).unwrap();
    assert!(CredentialStore::new(Arc::new(store)).has_token());
}
