use crate::{models::Role, session::Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Schedule,
    Login,
    Admin,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Schedule => "/agendar",
            Route::Login => "/login",
            Route::Admin => "/admin",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        [Route::Home, Route::Schedule, Route::Login, Route::Admin]
            .into_iter()
            .find(|route| route.path() == path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Allow,
    Redirect(Route),
}

/// Only the admin page is gated: it needs an authenticated admin, anyone else
/// is sent to the login page.
pub fn guard(route: Route, session: &Session) -> Navigation {
    match route {
        Route::Admin if !session.is_admin() => {
            log::debug!("Admin page denied, redirecting to login");
            Navigation::Redirect(Route::Login)
        }
        _ => Navigation::Allow,
    }
}

/// Where to go after logging in. A requested in-app route is honoured when the
/// role may open it; otherwise admins land on the admin page and clients on
/// the schedule page.
pub fn post_login_target(role: Role, requested: Option<&str>) -> Route {
    let fallback = match role {
        Role::Admin => Route::Admin,
        Role::Client => Route::Schedule,
    };

    let requested = requested
        .filter(|path| path.starts_with('/'))
        .and_then(Route::from_path);
    match requested {
        Some(Route::Login) | None => fallback,
        Some(Route::Admin) if role != Role::Admin => fallback,
        Some(route) => route,
    }
}
