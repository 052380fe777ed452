//! Session cookie handling.
//!
//! The [`SessionView`] travels in a signed cookie. A missing, tampered
//! or unreadable cookie reads as an empty view.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

use crate::core::session::SessionView;

/// Name of the cookie carrying the session view
pub const SESSION_COOKIE: &str = "recipe_hunter_session";

/// Current view for this browser
pub fn read_view(jar: &SignedCookieJar) -> SessionView {
    jar.get(SESSION_COOKIE)
        .map(|cookie| SessionView::decode(cookie.value()))
        .unwrap_or_default()
}

/// Replace the stored view
pub fn store_view(jar: SignedCookieJar, view: &SessionView) -> SignedCookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, view.encode()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    jar.add(cookie)
}

/// Drop the stored view
pub fn clear_view(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
