use crate::config::{ClientConfig, TokenStoreKind};
use anyhow::{Context, Result};
use keyring::Entry;
use std::fs;
use std::path::PathBuf;

/// Fixed key the auth token is stored under.
pub const TOKEN_KEY: &str = "journalkeeper-token";

const KEYRING_SERVICE: &str = "journalkeeper";

/// Persistent home of the auth token between runs.
pub trait TokenStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Picks the backend named in the config.
pub fn open(config: &ClientConfig) -> Result<Box<dyn TokenStore>> {
    Ok(match config.token_store {
        TokenStoreKind::Keyring => Box::new(KeyringTokenStore::new()),
        TokenStoreKind::File => {
            Box::new(FileTokenStore::new(ClientConfig::dir()?.join("storage.toml")))
        }
    })
}

/// Token kept in the OS credential store.
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
        }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service, TOKEN_KEY).context("Could not open keyring entry")
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for KeyringTokenStore {
    fn load(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Could not read token from keyring"),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        self.entry()?
            .set_password(token)
            .context("Could not write token to keyring")
    }

    fn clear(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Could not remove token from keyring"),
        }
    }
}

/// Token kept in a TOML key/value file, the way a browser keeps local storage.
/// Other keys in the file are left alone.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_table(&self) -> Result<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Could not read {}", self.path.display()))?;
        toml::from_str(&content).with_context(|| format!("Corrupt {}", self.path.display()))
    }

    fn write_table(&self, table: &toml::Table) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(table)?)
            .with_context(|| format!("Could not write {}", self.path.display()))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let table = self.read_table()?;
        Ok(table
            .get(TOKEN_KEY)
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut table = self.read_table()?;
        table.insert(TOKEN_KEY.to_string(), toml::Value::String(token.to_string()));
        self.write_table(&table)
    }

    fn clear(&self) -> Result<()> {
        let mut table = self.read_table()?;
        if table.remove(TOKEN_KEY).is_some() {
            self.write_table(&table)?;
        }
        Ok(())
    }
}
