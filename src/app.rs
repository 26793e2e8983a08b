//! Root application component with routing, session restore, and the
//! navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::nav::guard::RouteGuard;
use crate::pages::{
    annotations::AnnotationsPage, landing::LandingPage, library::LibraryPage, login::LoginPage,
    profile::ProfilePage, reader::ReaderPage, signup::SignupPage, stats::StatsPage,
};
use crate::state::auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted session synchronously before the router mounts,
/// so the guard's first evaluation already sees the restored state, then
/// provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(auth::restore());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/focus-reader.css"/>
        <Title text="Focus Reader"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("library") view=LibraryPage/>
                <Route path=StaticSegment("reader") view=ReaderPage/>
                <Route path=(StaticSegment("reader"), ParamSegment("document_id")) view=ReaderPage/>
                <Route path=StaticSegment("annotations") view=AnnotationsPage/>
                <Route path=StaticSegment("stats") view=StatsPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
