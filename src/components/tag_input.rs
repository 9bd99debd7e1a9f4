//! Chip-style tag editor bound to the project form.

use leptos::prelude::*;

use crate::state::project_form::ProjectForm;
use crate::state::tags::{TagSet, is_tag_commit_key};

/// Tag chips plus a free-text input. Enter or `,` commits the input; the
/// input is disabled once the set is full.
#[component]
pub fn TagInput(form: RwSignal<ProjectForm>) -> impl IntoView {
    let chips = move || {
        form.with(|f| f.tags.as_slice().to_vec())
            .into_iter()
            .map(|tag| {
                let remove = tag.clone();
                view! {
                    <span class="tag-input__chip">
                        <span>{tag}</span>
                        <button
                            class="tag-input__remove"
                            type="button"
                            title="Remove tag"
                            on:click=move |_| form.update(|f| {
                                f.remove_tag(&remove);
                            })
                        >
                            "✕"
                        </button>
                    </span>
                }
            })
            .collect::<Vec<_>>()
    };

    let is_full = move || form.with(|f| f.tags.is_full());
    let placeholder = move || if is_full() { "Tag limit reached" } else { "Add tags..." };
    let hint = move || {
        let count = form.with(|f| f.tags.len());
        format!("Press Enter or comma to add a tag. ({count}/{})", TagSet::MAX_TAGS)
    };

    view! {
        <div class="tag-input">
            {chips}
            <input
                class="tag-input__field"
                type="text"
                placeholder=placeholder
                prop:disabled=is_full
                prop:value=move || form.with(|f| f.tag_input.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.tag_input = value);
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if is_tag_commit_key(&ev.key()) && !form.with(|f| f.tag_input.is_empty()) {
                        ev.prevent_default();
                        form.update(|f| {
                            f.commit_tag_input();
                        });
                    }
                }
            />
        </div>
        <p class="tag-input__hint">
            {hint}
        </p>
    }
}
