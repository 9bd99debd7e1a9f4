//! Follower / following page behind `/profile/:id/:kind`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::data::fixtures::SharedFixtures;
use crate::state::profile::resolve_user;
use crate::util::format::format_count;
use crate::util::nav::{Destination, FollowKind, use_navigator};

/// Shows the follow count for one side of a user's graph. The fixtures carry
/// counts only, so there are no member rows.
#[component]
pub fn FollowListPage() -> impl IntoView {
    let params = use_params_map();
    let fixtures = expect_context::<SharedFixtures>();
    let navigate = use_navigator();

    let user_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let kind = Memo::new(move |_| params.read().get("kind").as_deref().and_then(FollowKind::from_id));

    let body = move || {
        let id = user_id.get();
        let Some(kind) = kind.get() else {
            return view! { <p>"Page not found."</p> }.into_any();
        };
        let Some(user) = resolve_user(fixtures.as_ref(), &id) else {
            return view! { <p class="follow-list__empty">"User not found."</p> }.into_any();
        };
        let count = match kind {
            FollowKind::Followers => user.followers_count,
            FollowKind::Following => user.following_count,
        };
        view! {
            <h1 class="follow-list__title">{format!("{} · {}", user.name, kind.label())}</h1>
            <p class="follow-list__count">{format!("{} {}", format_count(u64::from(count)), kind.label().to_lowercase())}</p>
            <button class="btn" on:click=move |_| navigate.run(Destination::Profile { user_id: id.clone() })>
                "Back to profile"
            </button>
        }
        .into_any()
    };

    view! { <div class="follow-list">{body}</div> }
}
