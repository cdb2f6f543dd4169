//! State shared by the commands of one process run.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::sync::google::GoogleSheetsClient;

pub struct AppContext {
    pub cfg: Config,
    /// Built on first use, then reused for the rest of the process.
    sheets: Option<GoogleSheetsClient>,
}

impl AppContext {
    pub fn new(cfg: Config) -> Self {
        Self { cfg, sheets: None }
    }

    /// Open the configured database, running pending migrations.
    pub fn open_db(&self) -> AppResult<DbPool> {
        DbPool::open(&self.cfg.database)
    }

    /// The authenticated spreadsheet client, created lazily.
    pub fn sheets(&mut self) -> AppResult<&mut GoogleSheetsClient> {
        let client = match self.sheets.take() {
            Some(client) => client,
            None => {
                let creds = Config::expand_home(&self.cfg.credentials_path);
                tracing::debug!(credentials = %creds.display(), "building sheets client");
                GoogleSheetsClient::from_key_file(&creds, &self.cfg.spreadsheet_id)?
            }
        };

        Ok(self.sheets.insert(client))
    }
}
