//! Modal dialog for starting a new studio project.
//!
//! DESIGN
//! ======
//! The modal only edits the `ProjectForm` signal it is given. Validation,
//! creation, and notifications happen in the owner's `on_submit`, so the
//! modal has no knowledge of the project collection.

use leptos::prelude::*;

use crate::components::tag_input::TagInput;
use crate::data::types::ProjectStatus;
use crate::state::project_form::ProjectForm;

#[component]
pub fn StartProjectModal(form: RwSignal<ProjectForm>, on_cancel: Callback<()>, on_submit: Callback<()>) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    });
    let is_public = move || form.with(|f| f.is_public);

    view! {
        <div class="dialog-backdrop">
            <div
                class="dialog dialog--start-project"
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>"Start New Project"</h2>
                    <button class="dialog__close" type="button" title="Close" on:click=move |_| on_cancel.run(())>
                        "✕"
                    </button>
                </div>

                <div class="dialog__body">
                    <label class="dialog__label">
                        "Project Title " <span class="dialog__required">"*"</span>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g., Lofi Chillhop Track"
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.title = value);
                            }
                        />
                    </label>

                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input dialog__input--textarea"
                            placeholder="Briefly describe your project idea..."
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.description = value);
                            }
                        ></textarea>
                    </label>

                    <div class="dialog__label">
                        "Tags"
                        <TagInput form=form/>
                    </div>

                    <label class="dialog__label">
                        "Status"
                        <select
                            class="dialog__input"
                            prop:value=move || form.with(|f| f.status.id())
                            on:change=move |ev| {
                                if let Some(status) = ProjectStatus::from_id(&event_target_value(&ev)) {
                                    form.update(|f| f.status = status);
                                }
                            }
                        >
                            {ProjectStatus::ALL
                                .into_iter()
                                .map(|status| view! { <option value=status.id()>{status.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <div class="dialog__label">
                        "Visibility"
                        <div class="dialog__visibility">
                            <button
                                type="button"
                                class="dialog__visibility-option"
                                class:dialog__visibility-option--active=move || !is_public()
                                on:click=move |_| form.update(|f| f.is_public = false)
                            >
                                <p class="dialog__visibility-title">"Private Project"</p>
                                <p class="dialog__visibility-hint">"Only invited members can view and contribute."</p>
                            </button>
                            <button
                                type="button"
                                class="dialog__visibility-option"
                                class:dialog__visibility-option--active=is_public
                                on:click=move |_| form.update(|f| f.is_public = true)
                            >
                                <p class="dialog__visibility-title">"Public Workshop"</p>
                                <p class="dialog__visibility-hint">"Anyone can join and contribute to this project."</p>
                            </button>
                        </div>
                    </div>
                </div>

                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="button" on:click=move |_| on_submit.run(())>
                        "Create Project"
                    </button>
                </div>
            </div>
        </div>
    }
}
