//! Builder for creating and configuring Tracker instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::{Clock, SystemClock, Tracker};
use crate::{
    credentials::{CredentialCodec, TagPrefixCodec},
    error::{Result, TrackerError},
    remote::{RemoteStore, SqliteStore},
};

/// User id used when none is configured.
pub const DEFAULT_USER: &str = "local";

/// Builder for creating and configuring Tracker instances.
#[derive(Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    remote: Option<Arc<dyn RemoteStore>>,
    user_id: Option<String>,
    clock: Option<Arc<dyn Clock>>,
    codec: Option<Arc<dyn CredentialCodec>>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path for the default SQLite store.
    ///
    /// If not specified, uses the XDG Base Directory layout:
    /// `$XDG_DATA_HOME/pursuit/pursuit.db` or
    /// `~/.local/share/pursuit/pursuit.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses `remote` instead of the SQLite store. Takes precedence over
    /// [`TrackerBuilder::with_database_path`].
    pub fn with_remote(mut self, remote: Arc<dyn RemoteStore>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Scopes loads and inserts to this user.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_codec(mut self, codec: Arc<dyn CredentialCodec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Builds the configured tracker. The company list starts empty; call
    /// [`Tracker::load_all`] to fetch it.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for a blank user id,
    /// `TrackerError::FileSystem` if the database path is invalid,
    /// `TrackerError::Database` if database initialization fails.
    pub async fn build(self) -> Result<Tracker> {
        let user_id = self.user_id.unwrap_or_else(|| DEFAULT_USER.to_string());
        if user_id.trim().is_empty() {
            return Err(TrackerError::invalid_input("user").with_reason("must not be blank"));
        }

        let remote = match self.remote {
            Some(remote) => remote,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                debug!("Opening tracker database at {}", db_path.display());
                let store = task::spawn_blocking(move || SqliteStore::open(db_path))
                    .await
                    .map_err(|e| TrackerError::Configuration {
                        message: format!("Task join error: {e}"),
                    })??;
                Arc::new(store) as Arc<dyn RemoteStore>
            }
        };

        Ok(Tracker::new(
            remote,
            self.codec.unwrap_or_else(|| Arc::new(TagPrefixCodec)),
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            user_id,
        ))
    }

    /// Returns the default database path under the XDG data home.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pursuit")
            .place_data_file("pursuit.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}
