//! Left navigation sidebar. Fixed on wide screens, a drawer on narrow ones.

use catalog::shell::ShellState;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Sidebar entries: route and the page title it sets.
pub const SIDEBAR_ROUTES: &[(&str, &str)] = &[("/app/products", "Products")];

#[component]
pub fn LeftSidebar() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let location = use_location();

    let links = SIDEBAR_ROUTES
        .iter()
        .map(|&(path, title)| {
            view! {
                <li>
                    <a
                        href=path
                        class="left-sidebar__link"
                        class:active=move || location.pathname.get() == path
                        on:click=move |_| shell.update(|s| s.navigate(title))
                    >
                        {title}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <Show when=move || shell.with(ShellState::sidebar_open)>
            <div class="left-sidebar__scrim" on:click=move |_| shell.update(ShellState::toggle_sidebar)></div>
        </Show>
        <aside class="left-sidebar" class:open=move || shell.with(ShellState::sidebar_open)>
            <div class="left-sidebar__brand">
                <a href="/app/products" class="left-sidebar__logo">"Dev Market"</a>
                <button
                    class="left-sidebar__close"
                    aria-label="Close menu"
                    on:click=move |_| shell.update(ShellState::toggle_sidebar)
                >
                    "×"
                </button>
            </div>
            <nav>
                <ul class="left-sidebar__links">{links}</ul>
            </nav>
        </aside>
    }
}
