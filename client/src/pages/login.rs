//! Login page: email + password exchanged for a session token.
//!
//! ERROR HANDLING
//! ==============
//! Missing fields are reported in-page before any request. A rejected login
//! shows the service's message and re-enables the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use catalog::consts::HOME_ROUTE;
use catalog::session::has_session;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::util::storage::BrowserStorage;

/// Trim both fields and require each to be present.
///
/// # Errors
///
/// Returns the message to show for the first missing field.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required!");
    }
    if password.trim().is_empty() {
        return Err("Password is required!");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if has_session(&BrowserStorage) {
            navigate_home(HOME_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let url = config.auth_login_url.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&url, &email_value, &password_value).await {
                    Ok(session) => match persist_session(&session) {
                        Ok(()) => navigate(HOME_ROUTE, NavigateOptions::default()),
                        Err(e) => {
                            log::error!("session token not stored: {e}");
                            info.set("Could not save your session. Check browser storage settings.".to_owned());
                            busy.set(false);
                        }
                    },
                    Err(message) => {
                        info.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, email_value, password_value);
        }
    };

    let clear_info = move || {
        if !info.get_untracked().is_empty() {
            info.set(String::new());
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <p class="login-card__subtitle">"Please enter your credentials"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            clear_info();
                            email.set(event_target_value(&ev));
                        }
                    />
                    <div class="login-input__group">
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                clear_info();
                                password.set(event_target_value(&ev));
                            }
                        />
                        <button
                            type="button"
                            class="login-input__toggle"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn persist_session(session: &crate::net::api::LoginSession) -> Result<(), catalog::error::StorageError> {
    use catalog::consts::SESSION_USER_KEY;
    use catalog::storage::PreferenceStore;

    catalog::session::store_token(&BrowserStorage, &session.token)?;
    if let Some(user) = &session.user {
        BrowserStorage.set(SESSION_USER_KEY, user)?;
    }
    Ok(())
}
