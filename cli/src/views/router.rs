//! Walks the user through one route, detouring through sign-in when the
//! route is guarded and no token is held.

use super::{entries, flush_alerts, profile, session, signup, with_spinner};
use crate::logger::Logger;
use crate::models::Entry;
use crate::routes::{self, Route};
use crate::store::Store;
use crate::thunks::Services;
use anyhow::Result;
use inquire::Confirm;

/// Source of the forms a route needs.
pub trait Prompter {
    fn sign_up(&mut self) -> Result<signup::SignUpForm>;
    fn sign_in(&mut self) -> Result<session::SignInForm>;
    fn entry(&mut self, existing: Option<&Entry>) -> Result<entries::EntryForm>;
    fn confirm_delete(&mut self, id: i64) -> Result<bool>;
}

/// Asks on the terminal.
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn sign_up(&mut self) -> Result<signup::SignUpForm> {
        signup::SignUpForm::prompt()
    }

    fn sign_in(&mut self) -> Result<session::SignInForm> {
        session::SignInForm::prompt()
    }

    fn entry(&mut self, existing: Option<&Entry>) -> Result<entries::EntryForm> {
        entries::EntryForm::prompt(existing)
    }

    fn confirm_delete(&mut self, id: i64) -> Result<bool> {
        Ok(Confirm::new(&format!("Delete entry {}?", id))
            .with_default(false)
            .prompt()?)
    }
}

/// Shows `route`. A guarded route without a token goes through sign-in
/// first and continues only if that succeeds.
pub async fn visit(
    store: &mut Store,
    services: &Services,
    prompter: &mut impl Prompter,
    route: Route,
) -> Result<()> {
    let landed = routes::resolve(route, &store.state().auth);
    if landed != route {
        Logger::warn(format!("{} requires signing in.", route));
        let signed_in = show(store, services, prompter, landed).await?;
        flush_alerts(store);
        if !signed_in {
            log::debug!("sign-in failed, not continuing to {}", route);
            return Ok(());
        }
    }
    show(store, services, prompter, route).await?;
    Ok(())
}

/// Renders one route. Returns whether its action succeeded.
pub async fn show(
    store: &mut Store,
    services: &Services,
    prompter: &mut impl Prompter,
    route: Route,
) -> Result<bool> {
    let ok = match route {
        Route::SignUp => {
            Logger::banner();
            Logger::header("Create an account");
            let form = prompter.sign_up()?;
            with_spinner("Creating account...", signup::submit(store, services, form)).await
        }
        Route::SignIn => {
            Logger::header("Sign in");
            let form = prompter.sign_in()?;
            with_spinner("Signing in...", session::sign_in(store, services, form)).await
        }
        Route::SignOut => {
            session::sign_out(store, services);
            true
        }
        Route::Profile => {
            let ok = with_spinner("Loading profile...", profile::load(store, services)).await;
            if let Some(p) = &store.state().profile.profile {
                profile::render(p);
            }
            ok
        }
        Route::Entries => {
            let ok = with_spinner("Loading entries...", entries::load(store, services)).await;
            if ok {
                if store.state().entries.ids.is_empty() {
                    Logger::info("No entries yet. Write one with `journalkeeper entries add`.");
                } else {
                    println!("\n{}", entries::entries_table(&store.state().entries));
                }
            }
            ok
        }
        Route::NewEntry => {
            Logger::header("New entry");
            let form = prompter.entry(None)?;
            with_spinner("Saving entry...", entries::create(store, services, form)).await
        }
        Route::EditEntry(id) => {
            if store.state().entries.get(id).is_none()
                && !with_spinner("Loading entries...", entries::load(store, services)).await
            {
                return Ok(false);
            }
            let Some(existing) = store.state().entries.get(id).cloned() else {
                Logger::error(format!("No entry with id {}", Logger::highlight(id)));
                return Ok(false);
            };
            Logger::header(format!("Edit entry {}", id));
            let form = prompter.entry(Some(&existing))?;
            with_spinner("Saving entry...", entries::edit(store, services, id, form)).await
        }
        Route::DeleteEntry(id) => {
            if !prompter.confirm_delete(id)? {
                Logger::info("Nothing deleted.");
                return Ok(false);
            }
            with_spinner("Deleting entry...", entries::delete(store, services, id)).await
        }
    };
    Ok(ok)
}
