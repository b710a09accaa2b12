//! Top bar: page title, theme toggle, notifications and the profile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both dropdowns are overlays in the shell's registry, so opening one closes
//! the other and a `mousedown` outside either closes whichever is open.
//! Logout runs the engine's sign-out sequence and ends in a full page load.

#[cfg(feature = "hydrate")]
use catalog::consts::SIGN_OUT_DELAY;
use catalog::notifications::NotificationFeed;
use catalog::overlay::Overlay;
use catalog::session::SessionState;
#[cfg(feature = "hydrate")]
use catalog::session::sign_out;
use catalog::shell::{Drawer, ProfileAction, ShellState};
use catalog::theme::ThemeController;
use leptos::prelude::*;

use crate::components::notification_drawer::NotificationList;
#[cfg(feature = "hydrate")]
use crate::state::signal_cell::SignalCell;
use crate::util::dom::{install_outside_click, overlay_marker};
use crate::util::storage::BrowserStorage;
use crate::util::theme;

/// Theme engine, `None` until hydration has read the stored preference.
pub type ThemeSignal = RwSignal<Option<ThemeController<BrowserStorage>>>;

#[component]
pub fn Header() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let feed = expect_context::<RwSignal<NotificationFeed>>();
    let theme_state = expect_context::<ThemeSignal>();
    let session = expect_context::<RwSignal<SessionState>>();

    install_outside_click(shell);

    let is_dark = move || theme_state.with(|t| t.as_ref().is_some_and(|c| c.current().is_dark()));
    let on_toggle_theme = move |_| {
        if let Some(next) = theme_state.try_update(|t| t.as_mut().map(ThemeController::toggle)).flatten() {
            theme::apply(next);
        }
    };

    let unread = move || feed.with(NotificationFeed::unread_count);
    let signing_out = move || session.with(|s| s.is_signing_out());

    view! {
        <header class="app-header">
            <button
                class="app-header__menu"
                aria-label="Open menu"
                on:click=move |_| shell.update(ShellState::toggle_sidebar)
            >
                "☰"
            </button>
            <h1 class="app-header__title">{move || shell.with(|s| s.page_title.clone())}</h1>

            <div class="app-header__actions">
                <button class="icon-button" aria-label="Toggle theme" on:click=on_toggle_theme>
                    {move || if is_dark() { "☀" } else { "☾" }}
                </button>

                <div class="dropdown-container" data-overlay=overlay_marker(Overlay::NotificationPanel)>
                    <button
                        class="icon-button"
                        aria-label="Notifications"
                        on:click=move |_| shell.update(|s| s.toggle_overlay(Overlay::NotificationPanel))
                    >
                        "🔔"
                        <Show when=move || { unread() > 0 }>
                            <span class="badge">{unread}</span>
                        </Show>
                    </button>
                    <Show when=move || shell.with(|s| s.is_open(Overlay::NotificationPanel))>
                        <div class="dropdown-panel dropdown-panel--notifications">
                            <div class="dropdown-panel__header">
                                <span>"Notifications"</span>
                                <button
                                    class="link-button"
                                    on:click=move |_| feed.update(NotificationFeed::mark_all_read)
                                >
                                    "Mark all as read"
                                </button>
                            </div>
                            <NotificationList feed=feed />
                            <button
                                class="link-button dropdown-panel__footer"
                                on:click=move |_| shell.update(|s| s.open_drawer(Drawer::Notifications))
                            >
                                "View all notifications"
                            </button>
                        </div>
                    </Show>
                </div>

                <div class="dropdown-container" data-overlay=overlay_marker(Overlay::ProfileMenu)>
                    <button
                        class="avatar"
                        aria-label="Account"
                        on:click=move |_| shell.update(|s| s.toggle_overlay(Overlay::ProfileMenu))
                    >
                        "DM"
                    </button>
                    <Show when=move || shell.with(|s| s.is_open(Overlay::ProfileMenu))>
                        <ul class="dropdown-panel dropdown-panel--profile">
                            {ProfileAction::ALL
                                .into_iter()
                                .map(|action| profile_item(action, shell, session, signing_out))
                                .collect_view()}
                        </ul>
                    </Show>
                </div>
            </div>
        </header>
    }
}

fn profile_item(
    action: ProfileAction,
    shell: RwSignal<ShellState>,
    session: RwSignal<SessionState>,
    signing_out: impl Fn() -> bool + Copy + Send + Sync + 'static,
) -> impl IntoView {
    match action.route() {
        Some(route) => view! {
            <li>
                <a
                    href=route
                    class="dropdown-panel__item"
                    on:click=move |_| {
                        shell.update(|s| {
                            s.choose_profile_action(action);
                        });
                    }
                >
                    {action.label()}
                </a>
            </li>
        }
        .into_any(),
        None => view! {
            <li>
                <button
                    class="dropdown-panel__item"
                    disabled=signing_out
                    on:click=move |_| {
                        shell.update(|s| {
                            s.choose_profile_action(action);
                        });
                        start_sign_out(session);
                    }
                >
                    <Show when=signing_out fallback=move || action.label()>
                        <span class="spinner" aria-hidden="true"></span>
                        "Logging out..."
                    </Show>
                </button>
            </li>
        }
        .into_any(),
    }
}

fn start_sign_out(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let cell = SignalCell::new(session);
        let delay = gloo_timers::future::sleep(SIGN_OUT_DELAY);
        let started = sign_out(&cell, &BrowserStorage, delay, |route| {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(route) {
                    log::error!("post-logout navigation failed: {e:?}");
                }
            }
        })
        .await;
        if !started {
            log::debug!("sign-out already in progress");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
