use super::*;

const ALL: [Dest; 8] = [
    Dest::Landing,
    Dest::Login,
    Dest::Signup,
    Dest::Library,
    Dest::Reader,
    Dest::Annotations,
    Dest::Stats,
    Dest::Profile,
];

// =============================================================
// Path mapping
// =============================================================

#[test]
fn from_path_maps_every_route() {
    assert_eq!(Dest::from_path("/"), Some(Dest::Landing));
    assert_eq!(Dest::from_path("/login"), Some(Dest::Login));
    assert_eq!(Dest::from_path("/signup"), Some(Dest::Signup));
    assert_eq!(Dest::from_path("/library"), Some(Dest::Library));
    assert_eq!(Dest::from_path("/reader"), Some(Dest::Reader));
    assert_eq!(Dest::from_path("/annotations"), Some(Dest::Annotations));
    assert_eq!(Dest::from_path("/stats"), Some(Dest::Stats));
    assert_eq!(Dest::from_path("/profile"), Some(Dest::Profile));
}

#[test]
fn from_path_handles_reader_document_param() {
    assert_eq!(Dest::from_path("/reader/doc-42"), Some(Dest::Reader));
}

#[test]
fn from_path_ignores_trailing_slash() {
    assert_eq!(Dest::from_path("/library/"), Some(Dest::Library));
}

#[test]
fn from_path_unknown_is_none() {
    assert_eq!(Dest::from_path("/admin"), None);
}

#[test]
fn path_round_trips_through_from_path() {
    for dest in ALL {
        assert_eq!(Dest::from_path(dest.path()), Some(dest));
    }
}

// =============================================================
// Guard policy, exhaustively
// =============================================================

#[test]
fn unauthenticated_public_destinations_proceed() {
    for dest in PUBLIC {
        assert_eq!(resolve(false, dest), Decision::Proceed, "{dest:?}");
    }
}

#[test]
fn unauthenticated_protected_destinations_redirect_to_landing() {
    for dest in ALL {
        if PUBLIC.contains(&dest) {
            continue;
        }
        assert_eq!(resolve(false, dest), Decision::Redirect(Dest::Landing), "{dest:?}");
    }
}

#[test]
fn authenticated_landing_redirects_to_library() {
    assert_eq!(resolve(true, Dest::Landing), Decision::Redirect(Dest::Library));
}

#[test]
fn authenticated_non_landing_destinations_proceed() {
    for dest in ALL {
        if dest == Dest::Landing {
            continue;
        }
        assert_eq!(resolve(true, dest), Decision::Proceed, "{dest:?}");
    }
}

// =============================================================
// Raw-path evaluation
// =============================================================

#[test]
fn unknown_path_is_protected_when_unauthenticated() {
    assert_eq!(resolve_path(false, "/admin"), Decision::Redirect(Dest::Landing));
}

#[test]
fn unknown_path_proceeds_when_authenticated() {
    assert_eq!(resolve_path(true, "/admin"), Decision::Proceed);
}

#[test]
fn resolve_path_applies_the_policy() {
    assert_eq!(resolve_path(false, "/library"), Decision::Redirect(Dest::Landing));
    assert_eq!(resolve_path(true, "/"), Decision::Redirect(Dest::Library));
    assert_eq!(resolve_path(false, "/login"), Decision::Proceed);
}
