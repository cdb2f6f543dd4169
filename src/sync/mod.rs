//! Push a month to a remote spreadsheet, one tab per date.

pub mod credentials;
pub mod google;

use crate::errors::{AppError, AppResult};
use crate::export::template::sheet_rows;
use crate::models::day_view::DayView;
use chrono::NaiveDate;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Granularity of the pause between writes; cancellation is noticed this fast.
const SLEEP_SLICE: Duration = Duration::from_millis(50);

/// Remote spreadsheet operations needed by the sync.
pub trait SheetClient {
    /// Create the tab `title` unless it already exists.
    fn ensure_tab(&mut self, title: &str) -> AppResult<()>;

    /// Replace the whole content of tab `title` with `rows`.
    fn overwrite_tab(&mut self, title: &str, rows: &[Vec<String>]) -> AppResult<()>;
}

/// Shared flag used to stop a running sync between two dates.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Minimum pause between two successive per-date writes.
    pub delay: Duration,
    pub cancel: CancelToken,
}

impl SyncOptions {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            cancel: CancelToken::new(),
        }
    }
}

/// Progress notifications, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    Writing(NaiveDate),
    Written(NaiveDate),
    Waiting(Duration),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub synced: Vec<NaiveDate>,
    pub cancelled: bool,
}

pub struct SyncLogic;

impl SyncLogic {
    /// Write every day of `views` to its own tab, sequentially.
    ///
    /// The first failure stops the batch and is returned with its date; tabs
    /// already written stay as they are. Rerunning is safe, each write
    /// overwrites the whole tab.
    pub fn sync_month<C, F>(
        client: &mut C,
        views: &[DayView],
        display_name: &str,
        options: &SyncOptions,
        mut on_event: F,
    ) -> AppResult<SyncReport>
    where
        C: SheetClient + ?Sized,
        F: FnMut(&SyncEvent),
    {
        let mut report = SyncReport::default();

        for (i, view) in views.iter().enumerate() {
            if i > 0 && !options.delay.is_zero() {
                on_event(&SyncEvent::Waiting(options.delay));
                pause(options.delay, &options.cancel);
            }

            if options.cancel.is_cancelled() {
                tracing::info!(done = report.synced.len(), "sync cancelled");
                report.cancelled = true;
                return Ok(report);
            }

            let title = view.date_str();
            on_event(&SyncEvent::Writing(view.date));

            let rows = sheet_rows(view, display_name);
            client
                .ensure_tab(&title)
                .and_then(|_| client.overwrite_tab(&title, &rows))
                .map_err(|e| AppError::Sync {
                    date: view.date,
                    message: e.to_string(),
                })?;

            tracing::debug!(date = %title, rows = rows.len(), "tab written");
            on_event(&SyncEvent::Written(view.date));
            report.synced.push(view.date);
        }

        Ok(report)
    }
}

/// Sleep for `delay`, returning early once `cancel` is set.
fn pause(delay: Duration, cancel: &CancelToken) {
    let until = Instant::now() + delay;
    loop {
        if cancel.is_cancelled() {
            return;
        }
        let now = Instant::now();
        if now >= until {
            return;
        }
        thread::sleep((until - now).min(SLEEP_SLICE));
    }
}
