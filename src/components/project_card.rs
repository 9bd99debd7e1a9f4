//! Card for a studio project on the projects listing.

use leptos::prelude::*;

use crate::data::types::StudioProject;
use crate::util::format::format_date;

/// A clickable studio project summary.
#[component]
pub fn ProjectCard(project: StudioProject, on_open: Callback<String>) -> impl IntoView {
    let id = project.id.clone();
    let contributor_count = project.contributors.len();
    let visibility = if project.is_public { "Public" } else { "Private" };
    let progress_style = format!("width: {}%;", project.progress.min(100));
    let avatars = project
        .contributors
        .iter()
        .take(3)
        .map(|c| {
            view! {
                <img
                    class="project-card__avatar"
                    src=c.user.avatar_url.clone()
                    alt=c.user.name.clone()
                    title=format!("{} ({})", c.user.name, c.role)
                    loading="lazy"
                />
            }
        })
        .collect_view();
    let tags = project
        .tags
        .iter()
        .map(|tag| view! { <span class="project-card__tag">{tag.clone()}</span> })
        .collect_view();

    view! {
        <div class="project-card" on:click=move |_| on_open.run(id.clone())>
            <div class="project-card__header">
                <span
                    class="project-card__visibility"
                    class:project-card__visibility--public=project.is_public
                >
                    {visibility}
                </span>
                <span class="project-card__status">{project.status.label()}</span>
            </div>
            <h3 class="project-card__title">{project.title.clone()}</h3>
            <p class="project-card__description">{project.description.clone()}</p>
            <div class="project-card__tags">{tags}</div>
            <div class="project-card__progress" aria-label="Progress">
                <div class="project-card__progress-bar" style=progress_style></div>
            </div>
            <div class="project-card__footer">
                <span class="project-card__avatars">{avatars}</span>
                <span class="project-card__contributors">{format!("{contributor_count} contributors")}</span>
                <span class="project-card__updated">{format_date(project.last_updated_at)}</span>
            </div>
        </div>
    }
}
