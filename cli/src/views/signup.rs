use super::notify;
use crate::models::NewUser;
use crate::store::Store;
use crate::thunks::{self, Services};
use anyhow::Result;
use inquire::{Password, PasswordDisplayMode, Text};

pub const PASSWORDS_DONT_MATCH: &str = "THE PROVIDED PASSWORDS DON'T MATCH!";
pub const REGISTRATION_SUCCESSFUL: &str = "REGISTRATION SUCCESSFUL";

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

impl SignUpForm {
    pub fn prompt() -> Result<Self> {
        let username = Text::new("Username:").prompt()?;
        let name = Text::new("Name:").prompt()?;
        let email = Text::new("Email:").prompt()?;
        let password = Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?;
        // Confirmation is collected separately so the mismatch check stays ours.
        let repeat_password = Password::new("Repeat password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?;

        Ok(Self {
            username: username.trim().to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password,
            repeat_password,
        })
    }
}

/// Submits the sign-up form. Returns whether the account was created.
///
/// Mismatched passwords never reach the network.
pub async fn submit(store: &mut Store, services: &Services, form: SignUpForm) -> bool {
    if form.password != form.repeat_password {
        notify(store, PASSWORDS_DONT_MATCH);
        return false;
    }

    let user = NewUser {
        username: form.username,
        name: form.name,
        email: form.email,
        password: form.password,
    };
    match thunks::create_user(store, services, user).await {
        Ok(()) => {
            notify(store, REGISTRATION_SUCCESSFUL);
            true
        }
        Err(e) => {
            notify(store, e.message());
            false
        }
    }
}
