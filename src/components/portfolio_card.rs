//! Card for a published portfolio project on a profile.

use leptos::prelude::*;

use crate::data::types::PortfolioProject;
use crate::util::format::{format_count, format_date};

#[component]
pub fn PortfolioCard(project: PortfolioProject, on_open: Callback<String>) -> impl IntoView {
    let id = project.id.clone();
    let title = project.title.clone();

    view! {
        <div class="portfolio-card" on:click=move |_| on_open.run(id.clone())>
            <div class="portfolio-card__cover">
                <img src=project.cover_image_url.clone() alt=title.clone() loading="lazy"/>
                <div class="portfolio-card__overlay">
                    <h3>{title.clone()}</h3>
                </div>
            </div>
            <div class="portfolio-card__body">
                <p class="portfolio-card__title">{title}</p>
                <div class="portfolio-card__meta">
                    <span class="portfolio-card__likes">"♥ " {format_count(u64::from(project.likes))}</span>
                    <span>{format_date(project.created_at)}</span>
                </div>
            </div>
        </div>
    }
}
