use super::*;
use crate::net::types::UserIdentity;

fn authed(id: &str) -> SessionState {
    SessionState::Authenticated(UserIdentity(serde_json::json!({ "id": id })))
}

fn home() -> RedirectDecision {
    RedirectDecision::Replace { target: HOME_PATH }
}

const SAMPLE_PATHS: &[&str] = &[
    "",
    "/",
    "/auth",
    "/auth/signin",
    "/auth/signup",
    "/home",
    "/settings",
    "/settings/language",
    "/legal/terms",
    "/authors",
];

// =============================================================
// Loading defers
// =============================================================

#[test]
fn loading_never_redirects() {
    for path in SAMPLE_PATHS {
        assert_eq!(decide(&SessionState::Loading, &Location::from_path(path)), RedirectDecision::NoAction, "{path}");
    }
}

#[test]
fn phase_follows_session() {
    assert_eq!(GatePhase::of(&SessionState::Loading), GatePhase::Deferring);
    assert_eq!(GatePhase::of(&SessionState::Unauthenticated), GatePhase::Active);
    assert_eq!(GatePhase::of(&authed("u1")), GatePhase::Active);
}

// =============================================================
// Authenticated
// =============================================================

#[test]
fn authenticated_at_root_goes_home() {
    assert_eq!(decide(&authed("u1"), &Location::root()), home());
    assert_eq!(decide(&authed("u1"), &Location::from_path("/")), home());
}

#[test]
fn authenticated_in_public_group_goes_home() {
    for path in ["/auth", "/auth/signin", "/auth/signup", "/auth/reset/step-2"] {
        assert_eq!(decide(&authed("u1"), &Location::from_path(path)), home(), "{path}");
    }
}

#[test]
fn authenticated_elsewhere_stays() {
    for path in ["/home", "/settings", "/settings/language", "/legal/terms", "/authors"] {
        assert_eq!(decide(&authed("u1"), &Location::from_path(path)), RedirectDecision::NoAction, "{path}");
    }
}

#[test]
fn identity_content_does_not_matter() {
    let loc = Location::from_path("/auth/signin");
    let odd = SessionState::Authenticated(UserIdentity(serde_json::json!({})));
    assert_eq!(decide(&odd, &loc), decide(&authed("u9"), &loc));
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn unauthenticated_never_redirects() {
    for path in SAMPLE_PATHS {
        let decision = decide(&SessionState::Unauthenticated, &Location::from_path(path));
        assert_eq!(decision, RedirectDecision::NoAction, "{path}");
    }
}

// =============================================================
// Purity
// =============================================================

#[test]
fn decide_is_deterministic_across_call_orders() {
    let states = [SessionState::Loading, SessionState::Unauthenticated, authed("u1")];
    let locations: Vec<Location> = SAMPLE_PATHS.iter().map(|p| Location::from_path(p)).collect();

    let forward: Vec<RedirectDecision> =
        states.iter().flat_map(|s| locations.iter().map(move |l| decide(s, l))).collect();
    let mut backward: Vec<RedirectDecision> =
        states.iter().rev().flat_map(|s| locations.iter().rev().map(move |l| decide(s, l))).collect();

    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn repeated_evaluation_is_stable() {
    let state = authed("u1");
    let loc = Location::from_path("/auth/signin");
    let first = decide(&state, &loc);
    for _ in 0..5 {
        assert_eq!(decide(&state, &loc), first);
    }
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn pending_check_defers_across_location_change() {
    let state = SessionState::Loading;
    assert_eq!(decide(&state, &Location::from_path("")), RedirectDecision::NoAction);
    assert_eq!(decide(&state, &Location::from_path("auth/signin")), RedirectDecision::NoAction);
}

#[test]
fn confirmed_session_on_sign_in_goes_home() {
    assert_eq!(decide(&authed("u2"), &Location::from_path("auth/signin")), home());
}
