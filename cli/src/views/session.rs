use super::notify;
use crate::store::Store;
use crate::thunks::{self, Services};
use anyhow::Result;
use inquire::{Password, PasswordDisplayMode, Text};

pub const SIGN_IN_SUCCESSFUL: &str = "SIGN-IN SUCCESSFUL";
pub const SIGNED_OUT: &str = "SIGNED OUT";

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

impl SignInForm {
    pub fn prompt() -> Result<Self> {
        let username = Text::new("Username:").prompt()?;
        let password = Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?;
        Ok(Self {
            username: username.trim().to_string(),
            password,
        })
    }
}

/// Returns whether a token was issued.
pub async fn sign_in(store: &mut Store, services: &Services, form: SignInForm) -> bool {
    match thunks::issue_token(store, services, &form.username, &form.password).await {
        Ok(_) => {
            notify(store, SIGN_IN_SUCCESSFUL);
            true
        }
        Err(e) => {
            notify(store, e.message());
            false
        }
    }
}

pub fn sign_out(store: &mut Store, services: &Services) {
    thunks::sign_out(store, services);
    notify(store, SIGNED_OUT);
}
