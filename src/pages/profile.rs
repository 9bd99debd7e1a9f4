//! Profile page: header, follow controls and the four content tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `:id` route param selects the profile. The view model is rebuilt from
//! the shared fixtures whenever the param changes, which also resets the
//! active tab and the session-local follow toggle. An optional `?tab=` query
//! (`projects`, `playlists`, `liked`, `about`) picks the opening tab.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::portfolio_card::PortfolioCard;
use crate::data::fixtures::SharedFixtures;
use crate::data::types::{AchievementKind, LikedTrack, Playlist, ProfileAbout};
use crate::state::profile::ProfileViewModel;
use crate::state::session::SessionState;
use crate::state::tabs::{ProfileTab, Tab};
use crate::util::format::{format_compact, format_count, format_date, format_running_time, format_track_time};
use crate::util::nav::{Destination, FollowKind, use_navigator};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params_map();
    let fixtures = expect_context::<SharedFixtures>();
    let session = expect_context::<SessionState>();
    let navigate = use_navigator();

    let query = use_query_map();
    let requested_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let requested_tab = Memo::new(move |_| query.read().get("tab"));

    let build = {
        let fixtures = fixtures.clone();
        move |id: &str| ProfileViewModel::build(fixtures.as_ref(), id, &session)
    };
    let model = RwSignal::new(build(&requested_id.get_untracked()));
    Effect::new(move || {
        let id = requested_id.get();
        let tab = requested_tab.get();
        model.update(|m| {
            if m.needs_rebuild(&id) {
                *m = build(&id);
            }
            if let Some(tab) = tab {
                if !m.tabs.set_active_id(&tab) {
                    leptos::logging::warn!("unknown profile tab: {tab}");
                }
            }
        });
    });

    let on_open_project =
        Callback::new(move |project_id: String| navigate.run(Destination::Project { project_id }));

    let tab_buttons = ProfileTab::ALL
        .iter()
        .copied()
        .map(|tab| {
            let active = move || model.with(|m| m.tabs.is_active(tab));
            view! {
                <button
                    class="profile-page__tab"
                    class:profile-page__tab--active=active
                    on:click=move |_| model.update(|m| m.tabs.set_active(tab))
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    let tab_content = move || {
        let (tab, user_id, is_own, projects) =
            model.with(|m| (m.tabs.active(), m.user.id.clone(), m.is_own_profile, m.projects.clone()));
        match tab {
            ProfileTab::Projects => {
                if projects.is_empty() {
                    view! { <p class="profile-page__empty">"No public projects yet."</p> }.into_any()
                } else {
                    view! {
                        <div class="profile-page__grid">
                            {projects
                                .into_iter()
                                .map(|project| view! { <PortfolioCard project=project on_open=on_open_project/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }
            ProfileTab::Playlists => playlists_view(fixtures.playlists_for(&user_id), is_own).into_any(),
            ProfileTab::Liked => liked_view(fixtures.liked_tracks_for(&user_id)).into_any(),
            ProfileTab::About => {
                let genres = model.with(|m| m.user.genre_tags.clone());
                let status = model.with(ProfileViewModel::account_status_label);
                about_view(fixtures.profile_about(&user_id), genres, status).into_any()
            }
        }
    };

    view! {
        <div class="profile-page">
            <ProfileHeader model=model navigate=navigate/>
            <nav class="profile-page__tabs">{tab_buttons}</nav>
            <section class="profile-page__content">{tab_content}</section>
        </div>
    }
}

#[component]
fn ProfileHeader(model: RwSignal<ProfileViewModel>, navigate: Callback<Destination>) -> impl IntoView {
    let user = move || model.with(|m| m.user.clone());
    let is_online = move || model.with(|m| m.user.is_online);
    let is_contributor = move || model.with(|m| m.user.is_contributor);
    let is_own = move || model.with(|m| m.is_own_profile);
    let is_following = move || model.with(|m| m.is_following);

    let open_follow_list = move |kind: FollowKind| {
        let user_id = model.with_untracked(|m| m.user.id.clone());
        navigate.run(Destination::FollowList { user_id, kind });
    };

    view! {
        <header class="profile-header">
            <div class="profile-header__avatar">
                <img src=move || user().avatar_url alt=move || user().name/>
                <Show when=is_online>
                    <span class="profile-header__online" title="Online"></span>
                </Show>
            </div>
            <div class="profile-header__info">
                <h1 class="profile-header__name">
                    {move || user().name}
                    <Show when=is_contributor>
                        <span class="profile-header__badge">"Contributor"</span>
                    </Show>
                </h1>
                <p class="profile-header__handle">{move || user().handle}</p>
                <p class="profile-header__bio">{move || user().bio}</p>
                <div class="profile-header__genres">
                    {move || {
                        user()
                            .genre_tags
                            .into_iter()
                            .map(|tag| view! { <span class="profile-header__genre">{tag}</span> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="profile-header__stats">
                    <span class="profile-header__stat">
                        <strong>{move || model.with(ProfileViewModel::projects_count)}</strong>
                        " Projects"
                    </span>
                    <button class="profile-header__stat" on:click=move |_| open_follow_list(FollowKind::Followers)>
                        <strong>{move || format_count(u64::from(user().followers_count))}</strong>
                        " Followers"
                    </button>
                    <button class="profile-header__stat" on:click=move |_| open_follow_list(FollowKind::Following)>
                        <strong>{move || format_count(u64::from(user().following_count))}</strong>
                        " Following"
                    </button>
                </div>
            </div>
            <div class="profile-header__actions">
                <Show
                    when=is_own
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--primary"
                                class:btn--following=is_following
                                on:click=move |_| model.update(ProfileViewModel::toggle_follow)
                            >
                                {move || model.with(ProfileViewModel::follow_label)}
                            </button>
                            <button class="btn">"Message"</button>
                        }
                    }
                >
                    <button class="btn" on:click=move |_| navigate.run(Destination::Settings)>
                        "Edit Profile"
                    </button>
                </Show>
            </div>
        </header>
    }
}

fn playlists_view(playlists: Vec<Playlist>, is_own: bool) -> impl IntoView {
    if playlists.is_empty() && !is_own {
        return view! { <p class="profile-page__empty">"No playlists yet."</p> }.into_any();
    }
    let tiles = playlists
        .into_iter()
        .map(|playlist| {
            let is_private = !playlist.is_public;
            view! {
                <div class="playlist-card">
                    <div class="playlist-card__cover">
                        <img src=playlist.cover_image_url alt=playlist.title.clone() loading="lazy"/>
                        <Show when=move || is_private>
                            <span class="playlist-card__private">"Private"</span>
                        </Show>
                    </div>
                    <p class="playlist-card__title">{playlist.title}</p>
                    <p class="playlist-card__meta">
                        {format!(
                            "{} tracks · {}",
                            playlist.track_count,
                            format_running_time(playlist.duration_secs),
                        )}
                    </p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="profile-page__grid">
            {is_own.then(|| view! {
                <div class="playlist-card playlist-card--new">
                    <span class="playlist-card__plus">"+"</span>
                    <p>"Create new playlist"</p>
                </div>
            })}
            {tiles}
        </div>
    }
    .into_any()
}

fn liked_view(tracks: Vec<LikedTrack>) -> impl IntoView {
    if tracks.is_empty() {
        return view! { <p class="profile-page__empty">"No liked tracks yet."</p> }.into_any();
    }
    view! {
        <ul class="liked-list">
            {tracks
                .into_iter()
                .map(|liked| {
                    view! {
                        <li class="liked-list__item">
                            <img class="liked-list__art" src=liked.track.album_art_url alt=liked.track.title.clone()/>
                            <div class="liked-list__info">
                                <p class="liked-list__title">{liked.track.title}</p>
                                <p class="liked-list__artist">{liked.track.artist}</p>
                            </div>
                            <span class="liked-list__likes">"♥ " {format_count(u64::from(liked.post_likes))}</span>
                            <span class="liked-list__when">{liked.liked_at}</span>
                            <span class="liked-list__duration">{format_track_time(liked.track.duration_secs)}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

fn about_view(about: Option<ProfileAbout>, genres: Vec<String>, status: &'static str) -> impl IntoView {
    let Some(about) = about else {
        return view! { <p class="profile-page__empty">"No details yet."</p> }.into_any();
    };
    let stats = about.stats;
    let achievements = about
        .achievements
        .into_iter()
        .map(|a| {
            let icon = match a.kind {
                AchievementKind::Trophy => "🏆",
                AchievementKind::Star => "⭐",
            };
            view! {
                <li class="about__achievement">
                    <span class="about__achievement-icon">{icon}</span>
                    <div>
                        <p class="about__achievement-title">{a.title}</p>
                        <p class="about__achievement-detail">{a.detail}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="about">
            <section class="about__section">
                <h3>"Details"</h3>
                <dl class="about__details">
                    <dt>"Joined"</dt>
                    <dd>{format_date(about.joined_at)}</dd>
                    <dt>"Genres"</dt>
                    <dd>{genres.join(", ")}</dd>
                    <dt>"Account status"</dt>
                    <dd>{status}</dd>
                </dl>
            </section>
            <section class="about__section">
                <h3>"Activity"</h3>
                <dl class="about__stats">
                    <dt>"Uploaded tracks"</dt>
                    <dd>{stats.uploaded_tracks}</dd>
                    <dt>"Total plays"</dt>
                    <dd>{format_compact(stats.total_plays)}</dd>
                    <dt>"Average rating"</dt>
                    <dd>{format!("{:.1}", stats.average_rating)}</dd>
                    <dt>"Votes received"</dt>
                    <dd>{format_count(u64::from(stats.votes_received))}</dd>
                </dl>
            </section>
            <section class="about__section">
                <h3>"Recent achievements"</h3>
                <ul class="about__achievements">{achievements}</ul>
            </section>
        </div>
    }
    .into_any()
}
