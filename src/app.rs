//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::notification_tray::NotificationTray;
use crate::config::AppConfig;
use crate::data::fixtures::{SampleFixtures, SharedFixtures};
use crate::pages::{
    follow_list::FollowListPage, profile::ProfilePage, project_detail::ProjectDetailPage, projects::ProjectsPage,
    settings::SettingsPage,
};
use crate::state::{notifications::NotificationState, projects::ProjectsState, session::SessionState};
use crate::util::nav::{Destination, use_navigator};

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

/// Load the embedded fixtures. A malformed document leaves the app running
/// with no sample data.
fn load_fixtures() -> SharedFixtures {
    match SampleFixtures::embedded() {
        Ok(fixtures) => fixtures.shared(),
        Err(e) => {
            leptos::logging::warn!("fixture load failed: {e}");
            SampleFixtures::default().shared()
        }
    }
}

/// Root application component.
///
/// Provides config, fixtures, the session user, and the page-spanning state
/// signals, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env_or_default();
    let fixtures = load_fixtures();
    let session = SessionState::select(fixtures.as_ref(), &config.session_user_id);
    leptos::logging::log!("session user: {}", session.current_user_id());

    let projects = RwSignal::new(ProjectsState::new(fixtures.studio_projects().to_vec()));
    let notifications = RwSignal::new(NotificationState::default());

    provide_context(config);
    provide_context(fixtures);
    provide_context(session);
    provide_context(projects);
    provide_context(notifications);

    view! {
        <Stylesheet id="leptos" href="/pkg/studio.css"/>
        <Title text="Studio"/>

        <Router>
            <RoutedShell/>
        </Router>
    }
}

/// Everything inside the router: the navigation callback, the top bar, the
/// routes, and the toast tray.
#[component]
fn RoutedShell() -> impl IntoView {
    let navigate = use_navigate();
    provide_context(Callback::new(move |destination: Destination| {
        navigate(&destination.href(), NavigateOptions::default());
    }));

    view! {
        <AppNav/>
        <main class="app-shell">
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProjectsPage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
                <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route path=(StaticSegment("profile"), ParamSegment("id")) view=ProfilePage/>
                <Route
                    path=(StaticSegment("profile"), ParamSegment("id"), ParamSegment("kind"))
                    view=FollowListPage
                />
            </Routes>
        </main>
        <NotificationTray/>
    }
}

#[component]
fn AppNav() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let navigate = use_navigator();
    let user_id = session.current_user.id.clone();

    view! {
        <nav class="app-nav">
            <span class="app-nav__brand">"Studio"</span>
            <button class="app-nav__link" on:click=move |_| navigate.run(Destination::Projects)>
                "Projects"
            </button>
            <button
                class="app-nav__link"
                on:click=move |_| navigate.run(Destination::Profile { user_id: user_id.clone() })
            >
                "My Profile"
            </button>
        </nav>
    }
}
