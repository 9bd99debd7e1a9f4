//! Project detail page behind `/projects/:id`.
//!
//! Studio projects (including ones created this session) are looked up in the
//! shared `ProjectsState`; anything else is tried as a portfolio project from
//! the fixtures.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::data::fixtures::SharedFixtures;
use crate::data::types::{PortfolioProject, StudioProject};
use crate::state::projects::ProjectsState;
use crate::util::format::{format_count, format_date};
use crate::util::nav::{Destination, use_navigator};

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let fixtures = expect_context::<SharedFixtures>();
    let navigate = use_navigator();

    let project_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let body = move || {
        let id = project_id.get();
        if let Some(project) = projects.with(|s| s.find(&id).cloned()) {
            return studio_view(project, navigate).into_any();
        }
        let portfolio = fixtures.portfolio_projects().iter().find(|p| p.id == id).cloned();
        match portfolio {
            Some(project) => {
                let credits: Vec<(String, String)> = project
                    .credits
                    .iter()
                    .map(|c| {
                        let name = fixtures.user(&c.user_id).map_or_else(|| c.user_id.clone(), |u| u.name.clone());
                        (c.user_id.clone(), format!("{name} ({})", c.role))
                    })
                    .collect();
                portfolio_view(project, credits, navigate).into_any()
            }
            None => {
                leptos::logging::warn!("project {id} not found");
                view! { <p class="project-detail__empty">"Project not found."</p> }.into_any()
            }
        }
    };

    view! {
        <div class="project-detail">
            <button class="btn project-detail__back" on:click=move |_| navigate.run(Destination::Projects)>
                "← All projects"
            </button>
            {body}
        </div>
    }
}

fn studio_view(project: StudioProject, navigate: Callback<Destination>) -> impl IntoView {
    let visibility = if project.is_public { "Public Workshop" } else { "Private Project" };
    let contributors = project
        .contributors
        .into_iter()
        .map(|c| {
            let user_id = c.user.id.clone();
            view! {
                <li class="project-detail__contributor">
                    <button on:click=move |_| navigate.run(Destination::Profile { user_id: user_id.clone() })>
                        {c.user.name}
                    </button>
                    <span class="project-detail__role">{c.role}</span>
                </li>
            }
        })
        .collect_view();
    let tags = project
        .tags
        .into_iter()
        .map(|tag| view! { <span class="project-detail__tag">{tag}</span> })
        .collect_view();

    view! {
        <article class="project-detail__studio">
            <h1>{project.title}</h1>
            <p class="project-detail__meta">
                {format!("{} · {} · {}% · updated {}", project.status.label(), visibility, project.progress, format_date(project.last_updated_at))}
            </p>
            <p class="project-detail__description">{project.description}</p>
            <div class="project-detail__tags">{tags}</div>
            <h2>"Contributors"</h2>
            <ul class="project-detail__contributors">{contributors}</ul>
        </article>
    }
}

fn portfolio_view(
    project: PortfolioProject,
    credits: Vec<(String, String)>,
    navigate: Callback<Destination>,
) -> impl IntoView {
    let credits = credits
        .into_iter()
        .map(|(user_id, label)| {
            view! {
                <li>
                    <button on:click=move |_| navigate.run(Destination::Profile { user_id: user_id.clone() })>
                        {label}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <article class="project-detail__portfolio">
            <img class="project-detail__cover" src=project.cover_image_url alt=project.title.clone()/>
            <h1>{project.title}</h1>
            <p class="project-detail__meta">
                {format!("♥ {} · {}", format_count(u64::from(project.likes)), format_date(project.created_at))}
            </p>
            <h2>"Credits"</h2>
            <ul class="project-detail__credits">{credits}</ul>
        </article>
    }
}
