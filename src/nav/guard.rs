//! Route guard enforcing the session-based navigation policy.
//!
//! A single interceptor re-evaluated on every navigation, instead of
//! per-page redirect effects. The policy itself ([`resolve`]) is a pure
//! function over (authenticated, destination) so it can be tested without a
//! router; the [`RouteGuard`] component wires it to `leptos_router`.
//!
//! The guard holds no state of its own — authentication is re-read from the
//! session store on every evaluation — and it never fails: a path it does
//! not recognize is simply treated as a protected destination.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;

/// Symbolic destination names, one per route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dest {
    Landing,
    Login,
    Signup,
    Library,
    Reader,
    Annotations,
    Stats,
    Profile,
}

/// Destinations reachable without a session.
pub const PUBLIC: [Dest; 3] = [Dest::Landing, Dest::Login, Dest::Signup];

impl Dest {
    /// Map a location pathname to its destination, if the path is known.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Landing),
            "/login" => Some(Self::Login),
            "/signup" => Some(Self::Signup),
            "/library" => Some(Self::Library),
            "/annotations" => Some(Self::Annotations),
            "/stats" => Some(Self::Stats),
            "/profile" => Some(Self::Profile),
            p if p == "/reader" || p.starts_with("/reader/") => Some(Self::Reader),
            _ => None,
        }
    }

    /// The canonical path for this destination (parameterized routes map to
    /// their base path).
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Library => "/library",
            Self::Reader => "/reader",
            Self::Annotations => "/annotations",
            Self::Stats => "/stats",
            Self::Profile => "/profile",
        }
    }

    fn is_public(self) -> bool {
        PUBLIC.contains(&self)
    }
}

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Redirect(Dest),
}

/// Decide whether a navigation may proceed.
///
/// Without a session, only the public destinations are reachable; anything
/// else redirects to the landing page. With a session, the landing page
/// redirects to the library. Everything else proceeds unchanged.
pub fn resolve(authenticated: bool, dest: Dest) -> Decision {
    if !authenticated && !dest.is_public() {
        return Decision::Redirect(Dest::Landing);
    }
    if authenticated && dest == Dest::Landing {
        return Decision::Redirect(Dest::Library);
    }
    Decision::Proceed
}

/// Guard evaluation for a raw pathname. Unknown paths are protected.
pub fn resolve_path(authenticated: bool, path: &str) -> Decision {
    match Dest::from_path(path) {
        Some(dest) => resolve(authenticated, dest),
        None if authenticated => Decision::Proceed,
        None => Decision::Redirect(Dest::Landing),
    }
}

/// Navigation interceptor component.
///
/// Mounted once inside the router; re-runs on every location change and on
/// every session-state change, replacing disallowed navigations. Renders
/// nothing.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let authenticated = auth.with(AuthState::is_authenticated);
        let path = location.pathname.get();
        if let Decision::Redirect(dest) = resolve_path(authenticated, &path) {
            navigate(dest.path(), NavigateOptions::default());
        }
    });
}
