mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, EntriesCommand};
use journalkeeper::api::ApiClient;
use journalkeeper::config::ClientConfig;
use journalkeeper::logger::Logger;
use journalkeeper::routes::Route;
use journalkeeper::thunks::Services;
use journalkeeper::views::{self, InquirePrompter};
use journalkeeper::{AppState, Store, storage};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = ClientConfig::load(cli.api_url.as_deref())?;
    let tokens = storage::open(&config)?;
    let token = tokens.load().unwrap_or_else(|e| {
        log::warn!("could not read stored token: {:#}", e);
        None
    });
    log::debug!("api at {}, token present: {}", config.api_url, token.is_some());

    let services = Services::new(ApiClient::new(&config.api_url), tokens);
    let mut store = Store::new(AppState::with_token(token));

    let route = match cli.command {
        Commands::Signup => Route::SignUp,
        Commands::Signin => Route::SignIn,
        Commands::Signout => Route::SignOut,
        Commands::Profile => Route::Profile,
        Commands::Entries(EntriesCommand::List) => Route::Entries,
        Commands::Entries(EntriesCommand::Add) => Route::NewEntry,
        Commands::Entries(EntriesCommand::Edit { id }) => Route::EditEntry(id),
        Commands::Entries(EntriesCommand::Delete { id }) => Route::DeleteEntry(id),
        Commands::Status => {
            status(&store, &config);
            return Ok(());
        }
    };

    let result = views::visit(&mut store, &services, &mut InquirePrompter, route).await;
    views::flush_alerts(&mut store);
    result
}

fn status(store: &Store, config: &ClientConfig) {
    Logger::banner();
    Logger::info(format!("API: {}", Logger::highlight(&config.api_url)));
    if store.state().auth.has_token() {
        Logger::success("Signed in.");
    } else {
        Logger::warn("Not signed in. Run `journalkeeper signin`.");
    }
}
