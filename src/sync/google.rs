//! Google Sheets v4 client authenticated with a service-account key.

use crate::errors::{AppError, AppResult};
use crate::sync::SheetClient;
use crate::sync::credentials::ServiceAccountKey;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

const SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Refresh the access token this long before it actually expires.
const TOKEN_MARGIN: Duration = Duration::from_secs(60);
const TAB_ROWS: u32 = 200;
const TAB_COLS: u32 = 10;

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
}

struct AccessToken {
    value: String,
    expires_at: Instant,
}

pub struct GoogleSheetsClient {
    http: Client,
    key: ServiceAccountKey,
    spreadsheet_id: String,
    token: Option<AccessToken>,
    /// Tab titles known to exist, loaded on first use.
    tabs: Option<HashSet<String>>,
}

impl fmt::Debug for GoogleSheetsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleSheetsClient")
            .field("client_email", &self.key.client_email)
            .field("spreadsheet_id", &self.spreadsheet_id)
            .finish_non_exhaustive()
    }
}

impl GoogleSheetsClient {
    /// Build a client from a key file. No network call happens here.
    pub fn from_key_file(credentials: &Path, spreadsheet_id: &str) -> AppResult<Self> {
        let key = ServiceAccountKey::load(credentials)?;
        Self::new(key, spreadsheet_id)
    }

    pub fn new(key: ServiceAccountKey, spreadsheet_id: &str) -> AppResult<Self> {
        if spreadsheet_id.trim().is_empty() {
            return Err(AppError::Config(
                "spreadsheet_id is not set (timesheet config --edit)".into(),
            ));
        }

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            key,
            spreadsheet_id: spreadsheet_id.trim().to_string(),
            token: None,
            tabs: None,
        })
    }

    fn signed_assertion(&self) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            iss: &self.key.client_email,
            scope: SCOPE,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + 3600,
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &encoding_key,
        )?)
    }

    fn access_token(&mut self) -> AppResult<String> {
        if let Some(t) = &self.token
            && Instant::now() + TOKEN_MARGIN < t.expires_at
        {
            return Ok(t.value.clone());
        }

        let assertion = self.signed_assertion()?;
        let res = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()?;

        let token: TokenResponse = check(res)?.json()?;
        tracing::debug!(expires_in = token.expires_in, "obtained access token");

        self.token = Some(AccessToken {
            value: token.access_token.clone(),
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        });
        Ok(token.access_token)
    }

    /// `<api>/<spreadsheet_id>` followed by `segments`, each percent-encoded.
    fn url(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = Url::parse(SHEETS_API_URL)
            .map_err(|e| AppError::Other(format!("bad API url: {e}")))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| AppError::Other("API url cannot be a base".into()))?;
            path.push(&self.spreadsheet_id);
            for s in segments {
                path.push(s);
            }
        }
        Ok(url)
    }

    fn load_tabs(&mut self) -> AppResult<&mut HashSet<String>> {
        if self.tabs.is_none() {
            let token = self.access_token()?;
            let mut url = self.url(&[])?;
            url.query_pairs_mut().append_pair("fields", "sheets.properties.title");

            let res = self.http.get(url).bearer_auth(token).send()?;
            let meta: SpreadsheetMeta = check(res)?.json()?;

            let titles: HashSet<String> =
                meta.sheets.into_iter().map(|s| s.properties.title).collect();
            tracing::debug!(tabs = titles.len(), "loaded spreadsheet tabs");
            self.tabs = Some(titles);
        }

        self.tabs
            .as_mut()
            .ok_or_else(|| AppError::Other("tab cache not loaded".into()))
    }

    fn batch_update(&mut self, body: serde_json::Value) -> AppResult<()> {
        let token = self.access_token()?;
        let url = self.url(&[])?;
        let url = Url::parse(&format!("{url}:batchUpdate"))
            .map_err(|e| AppError::Other(format!("bad API url: {e}")))?;

        let res = self.http.post(url).bearer_auth(token).json(&body).send()?;
        check(res)?;
        Ok(())
    }
}

impl SheetClient for GoogleSheetsClient {
    fn ensure_tab(&mut self, title: &str) -> AppResult<()> {
        if self.load_tabs()?.contains(title) {
            return Ok(());
        }

        self.batch_update(json!({
            "requests": [{
                "addSheet": {
                    "properties": {
                        "title": title,
                        "gridProperties": { "rowCount": TAB_ROWS, "columnCount": TAB_COLS }
                    }
                }
            }]
        }))?;

        tracing::info!(tab = title, "created tab");
        self.load_tabs()?.insert(title.to_string());
        Ok(())
    }

    fn overwrite_tab(&mut self, title: &str, rows: &[Vec<String>]) -> AppResult<()> {
        let token = self.access_token()?;
        let sheet_range = format!("'{}'", title.replace('\'', "''"));

        // 1) clear everything on the tab
        let clear_url = self.url(&["values", &format!("{sheet_range}:clear")])?;
        let res = self
            .http
            .post(clear_url)
            .bearer_auth(&token)
            .json(&json!({}))
            .send()?;
        check(res)?;

        // 2) write the template from A1
        let a1 = format!("{sheet_range}!A1");
        let mut put_url = self.url(&["values", &a1])?;
        put_url.query_pairs_mut().append_pair("valueInputOption", "RAW");

        let res = self
            .http
            .put(put_url)
            .bearer_auth(&token)
            .json(&json!({
                "range": a1,
                "majorDimension": "ROWS",
                "values": rows,
            }))
            .send()?;
        check(res)?;

        Ok(())
    }
}

/// Turn a non-2xx response into an error carrying the API message.
fn check(res: Response) -> AppResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .or_else(|| v.pointer("/error_description"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or(body);

    Err(AppError::Other(format!("remote API returned {status}: {message}")))
}
