//! Projects page listing studio projects by tab, with the start-project flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The project collection lives in the app-level `ProjectsState` signal so
//! created projects survive route changes for the rest of the session. The
//! modal's form state is page-local and discarded on submit or cancel.
//! `?tab=my` (or `all`, `team`, `public`) selects a tab on arrival.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::project_card::ProjectCard;
use crate::components::start_project_modal::StartProjectModal;
use crate::state::notifications::NotificationState;
use crate::state::project_form::ProjectForm;
use crate::state::projects::{EMPTY_TAB_MESSAGE, ProjectsState, submit_new_project, tab_count};
use crate::state::session::SessionState;
use crate::state::tabs::{ProjectTab, Tab};
use crate::util::format::now_ms;
use crate::util::nav::{Destination, use_navigator};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let session = expect_context::<SessionState>();
    let navigate = use_navigator();
    let form = RwSignal::new(ProjectForm::default());

    let query = use_query_map();
    let requested_tab = Memo::new(move |_| query.read().get("tab"));
    Effect::new(move || {
        if let Some(tab) = requested_tab.get() {
            projects.update(|s| {
                if !s.tabs.set_active_id(&tab) {
                    leptos::logging::warn!("unknown projects tab: {tab}");
                }
            });
        }
    });

    let user_id = StoredValue::new(session.current_user.id.clone());
    let visible = Memo::new(move |_| {
        let uid = user_id.get_value();
        projects.with(|s| s.visible(&uid).into_iter().cloned().collect::<Vec<_>>())
    });

    let on_open = Callback::new(move |project_id: String| navigate.run(Destination::Project { project_id }));

    let on_cancel = Callback::new(move |()| {
        form.update(|f| projects.update(|p| p.close_modal(f)));
    });

    let creator = session.current_user.clone();
    let on_submit = Callback::new(move |()| {
        let now = now_ms();
        form.update(|f| {
            projects.update(|p| {
                notifications.update(|n| {
                    submit_new_project(f, p, n, &creator, now);
                });
            });
        });
    });

    let tab_buttons = ProjectTab::ALL
        .iter()
        .copied()
        .map(|tab| {
            let count = move || {
                let uid = user_id.get_value();
                projects.with(|s| tab_count(&s.projects, tab, &uid))
            };
            let active = move || projects.with(|s| s.tabs.is_active(tab));
            view! {
                <button
                    class="projects-page__tab"
                    class:projects-page__tab--active=active
                    on:click=move |_| projects.update(|s| s.tabs.set_active(tab))
                >
                    {tab.label()}
                    <span class="projects-page__tab-count">{count}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="projects-page">
            <header class="projects-page__header">
                <h1>"Projects"</h1>
                <button class="btn btn--primary projects-page__new" on:click=move |_| projects.update(ProjectsState::open_modal)>
                    "Start New Project"
                </button>
            </header>

            <nav class="projects-page__tabs">{tab_buttons}</nav>

            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=|| {
                    view! {
                        <div class="projects-page__empty">
                            <p>{EMPTY_TAB_MESSAGE}</p>
                        </div>
                    }
                }
            >
                <div class="projects-page__grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=project on_open=on_open/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <Show when=move || projects.with(|s| s.modal_open)>
                <StartProjectModal form=form on_cancel=on_cancel on_submit=on_submit/>
            </Show>
        </div>
    }
}
