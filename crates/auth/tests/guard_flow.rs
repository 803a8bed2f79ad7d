//! Black-box navigation scenarios: file-backed session store + guard,
//! exercised together the way the host UI drives them.

use chrono::Utc;
use tempfile::TempDir;

use frontdesk_auth::{AccessDecision, AccessGuard, DenialReason, RouteRegistry, Session};
use frontdesk_core::{Role, UserId};
use frontdesk_store::{FileSessionStore, SessionStore};

fn registry() -> RouteRegistry {
    RouteRegistry::new()
        .register("/admin/users", [Role::Admin])
        .unwrap()
        .register("/visits", [Role::Host, Role::Admin])
        .unwrap()
        .register("/screening", [Role::Security])
        .unwrap()
        .register("/my-visit", [Role::Visitor])
        .unwrap()
}

fn login(store: &FileSessionStore, role: Role) {
    let session = Session::new(UserId::new("usr_flow").unwrap(), role, Utc::now());
    store.write(&session).unwrap();
}

fn assert_denied(decision: AccessDecision, expected: DenialReason) {
    let AccessDecision::Redirect { target, reason } = decision else {
        panic!("expected a redirect, got Allow");
    };
    assert_eq!(target.as_str(), AccessGuard::DEFAULT_UNAUTHORIZED);
    assert_eq!(reason, expected);
}

#[test]
fn no_session_denies_admin_route() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    let guard = AccessGuard::new();

    let decision = guard.check(&registry(), "/admin/users", &store, Utc::now());
    assert_denied(decision, DenialReason::Unauthenticated);
}

#[test]
fn host_session_allows_route_listing_host_and_admin() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    login(&store, Role::Host);

    let guard = AccessGuard::new();
    let decision = guard.check(&registry(), "/visits", &store, Utc::now());
    assert!(decision.is_allowed());
}

#[test]
fn visitor_session_denies_admin_route() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    login(&store, Role::Visitor);

    let guard = AccessGuard::new();
    let decision = guard.check(&registry(), "/admin/users", &store, Utc::now());
    assert_denied(decision, DenialReason::RoleNotPermitted);
}

#[test]
fn corrupted_storage_denies_even_the_broadest_route() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    std::fs::write(store.path(), "not-json").unwrap();

    assert_eq!(store.read(), None);

    let guard = AccessGuard::new();
    let decision = guard.check(&registry(), "/my-visit", &store, Utc::now());
    assert_denied(decision, DenialReason::Unauthenticated);
}

#[test]
fn logout_denies_previously_allowed_route() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    login(&store, Role::Security);

    let guard = AccessGuard::new();
    assert!(guard
        .check(&registry(), "/screening", &store, Utc::now())
        .is_allowed());

    store.clear().unwrap();

    let decision = guard.check(&registry(), "/screening", &store, Utc::now());
    assert_denied(decision, DenialReason::Unauthenticated);
}

#[test]
fn session_survives_store_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    login(&FileSessionStore::new(&path), Role::Admin);

    // A new handle over the same path stands in for a page reload.
    let reopened = FileSessionStore::new(&path);
    let guard = AccessGuard::new();
    assert!(guard
        .check(&registry(), "/admin/users", &reopened, Utc::now())
        .is_allowed());
}

#[test]
fn configured_guard_expires_stale_sessions() {
    use chrono::Duration;
    use frontdesk_auth::GuardConfig;

    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));

    let config: GuardConfig =
        serde_json::from_str(r#"{"max_session_age_secs": 3600}"#).unwrap();
    let guard = config.build().unwrap();

    let now = Utc::now();
    let stale = Session::new(
        UserId::new("usr_flow").unwrap(),
        Role::Admin,
        now - Duration::hours(2),
    );
    store.write(&stale).unwrap();

    let decision = guard.check(&registry(), "/admin/users", &store, now);
    assert_denied(decision, DenialReason::SessionExpired);
}
