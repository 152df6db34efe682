//! Route guard for protected views
//!
//! Advisory only: it keeps logged-out users away from views that would fail
//! anyway. The backend enforces authorization on its own.

use std::fmt;

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Essays,
    EssayDetail(String),
    Reviews,
    Login,
    Register,
    MyEssay,
    MyReviews,
}

impl Route {
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::MyEssay | Self::MyReviews)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Essays => "/essays".to_string(),
            Self::EssayDetail(author) => format!("/essay/{author}"),
            Self::Reviews => "/reviews".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::MyEssay => "/my-essay".to_string(),
            Self::MyReviews => "/my-reviews".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Allow(Route),
    Redirect(Route),
}

/// Decide where a navigation to `route` ends up
pub fn guard(route: Route, session: &Session) -> Navigation {
    if route.is_protected() && !session.is_authenticated() {
        Navigation::Redirect(Route::Login)
    } else {
        Navigation::Allow(route)
    }
}
