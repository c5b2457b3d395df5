use crate::state::AuthState;
use std::fmt;

/// Every screen the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignUp,
    SignIn,
    Entries,
    NewEntry,
    EditEntry(i64),
    DeleteEntry(i64),
    Profile,
    SignOut,
}

impl Route {
    /// Routes that need a token. Signing out never does.
    pub fn is_guarded(self) -> bool {
        !matches!(self, Route::SignUp | Route::SignIn | Route::SignOut)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::SignUp => write!(f, "/sign-up"),
            Route::SignIn => write!(f, "/sign-in"),
            Route::Entries => write!(f, "/entries"),
            Route::NewEntry => write!(f, "/entries/new"),
            Route::EditEntry(id) => write!(f, "/entries/{}/edit", id),
            Route::DeleteEntry(id) => write!(f, "/entries/{}/delete", id),
            Route::Profile => write!(f, "/profile"),
            Route::SignOut => write!(f, "/sign-out"),
        }
    }
}

/// Where a visit to `route` actually lands.
///
/// Guarded routes redirect to [`Route::SignIn`] unless a non-blank token is held.
pub fn resolve(route: Route, auth: &AuthState) -> Route {
    if route.is_guarded() && !auth.has_token() {
        Route::SignIn
    } else {
        route
    }
}
