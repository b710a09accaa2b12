//! Notification list, shared by the header dropdown and the right drawer.

use catalog::notifications::NotificationFeed;
use catalog::shell::{Drawer, ShellState};
use leptos::prelude::*;

/// Every notification, newest first. Clicking one marks it read.
#[component]
pub fn NotificationList(feed: RwSignal<NotificationFeed>) -> impl IntoView {
    view! {
        <Show
            when=move || !feed.with(NotificationFeed::is_empty)
            fallback=|| view! { <p class="notification-list__empty">"You're all caught up."</p> }
        >
            <ul class="notification-list">
                <For
                    each=move || feed.with(|f| f.items().to_vec())
                    key=|n| (n.id, n.read)
                    children=move |n| {
                        let id = n.id;
                        view! {
                            <li
                                class="notification-list__item"
                                class:unread=!n.read
                                on:click=move |_| {
                                    feed.update(|f| {
                                        f.mark_read(id);
                                    });
                                }
                            >
                                <p class="notification-list__message">{n.message}</p>
                                <span class="notification-list__time">{n.time}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}

/// Right-hand drawer opened by "View all notifications".
#[component]
pub fn NotificationDrawer() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let feed = expect_context::<RwSignal<NotificationFeed>>();

    view! {
        <Show when=move || shell.with(|s| s.drawer() == Some(Drawer::Notifications))>
            <div class="drawer-scrim" on:click=move |_| shell.update(ShellState::close_drawer)></div>
            <aside class="right-drawer" aria-label="Notifications">
                <header class="right-drawer__header">
                    <h2>"Notifications"</h2>
                    <button
                        class="right-drawer__close"
                        aria-label="Close notifications"
                        on:click=move |_| shell.update(ShellState::close_drawer)
                    >
                        "×"
                    </button>
                </header>
                <button class="link-button" on:click=move |_| feed.update(NotificationFeed::mark_all_read)>
                    "Mark all as read"
                </button>
                <NotificationList feed=feed />
            </aside>
        </Show>
    }
}
