//! Settings page behind `/settings`. Read-only summary of the session user.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::nav::{Destination, use_navigator};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let navigate = use_navigator();
    let user = session.current_user;
    let user_id = user.id.clone();

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <dl class="settings-page__fields">
                <dt>"Name"</dt>
                <dd>{user.name}</dd>
                <dt>"Handle"</dt>
                <dd>{user.handle}</dd>
                <dt>"Bio"</dt>
                <dd>{user.bio}</dd>
            </dl>
            <p class="settings-page__note">"Profile fields are read-only in this build."</p>
            <button class="btn" on:click=move |_| navigate.run(Destination::Profile { user_id: user_id.clone() })>
                "Back to profile"
            </button>
        </div>
    }
}
