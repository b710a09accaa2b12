//! Shared constants.

use std::time::Duration;

/// Products shown per list page.
pub const PAGE_SIZE: usize = 6;

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

/// Storage key for the opaque session token blob.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Storage key for the cached signed-in user record.
pub const SESSION_USER_KEY: &str = "user";

/// Every key removed on sign-out. The theme preference survives.
pub const SESSION_KEYS: &[&str] = &[SESSION_TOKEN_KEY, SESSION_USER_KEY];

/// Pause between entering `SigningOut` and navigating away, long enough for
/// the pending spinner to be seen.
pub const SIGN_OUT_DELAY: Duration = Duration::from_millis(800);

/// Route the session controller hands off to after sign-out.
pub const POST_LOGOUT_ROUTE: &str = "/login";

/// Route the login page navigates to on success.
pub const HOME_ROUTE: &str = "/app/products";
