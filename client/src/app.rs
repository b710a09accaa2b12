//! Root component, HTML shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides every engine model as a context signal, so the header,
//! sidebar and pages share one instance of each. `/app/*` routes render inside
//! `AppLayout` and are guarded by the session token; `/login` stands alone.

use catalog::consts::HOME_ROUTE;
use catalog::form::ProductForm;
use catalog::list::ProductList;
use catalog::notifications::{Notification, NotificationFeed};
use catalog::session::SessionState;
use catalog::shell::ShellState;
use catalog::theme::ThemeController;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::header::{Header, ThemeSignal};
use crate::components::left_sidebar::LeftSidebar;
use crate::components::notification_drawer::NotificationDrawer;
use crate::config::ApiConfig;
use crate::pages::login::LoginPage;
use crate::pages::products::ProductsPage;
use crate::util::storage::BrowserStorage;
use crate::util::theme;

/// HTML document wrapper used by the SSR host.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Sample notifications shown until a notification service exists.
fn starter_feed() -> NotificationFeed {
    let entry = |id, message: &str, time: &str, read| Notification {
        id,
        message: message.to_owned(),
        time: time.to_owned(),
        read,
    };
    NotificationFeed::new(vec![
        entry(1, "New team member request", "2 min ago", false),
        entry(2, "Project deadline reminder", "1 hour ago", false),
        entry(3, "New comment on your post", "3 hours ago", true),
        entry(4, "System maintenance scheduled", "Yesterday", true),
    ])
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiConfig::from_build_env());
    provide_context(RwSignal::new(ShellState::default()));
    provide_context(RwSignal::new(starter_feed()));
    provide_context(RwSignal::new(SessionState::Idle));
    provide_context(RwSignal::new(ProductList::default()));
    provide_context(RwSignal::new(ProductForm::new()));

    let theme_state: ThemeSignal = RwSignal::new(None);
    provide_context(theme_state);
    Effect::new(move || {
        if theme_state.with_untracked(Option::is_some) {
            return;
        }
        let controller = ThemeController::initialize(BrowserStorage, theme::system_prefers_dark());
        theme::apply(controller.current());
        theme_state.set(Some(controller));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/market-admin.css" />
        <Title text="Dev Market Admin" />
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=|| view! { <Redirect path=HOME_ROUTE /> } />
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("/app") view=AppLayout>
                    <Route path=path!("") view=|| view! { <Redirect path=HOME_ROUTE /> } />
                    <Route path=path!("/products") view=ProductsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Header, sidebar and drawer around the routed page.
#[component]
fn AppLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <LeftSidebar />
            <div class="app-layout__main">
                <Header />
                <main class="app-layout__content">
                    <Outlet />
                </main>
            </div>
            <NotificationDrawer />
        </div>
    }
}
