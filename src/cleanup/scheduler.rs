use chrono::{DateTime, Datelike, Local, NaiveDate, Timelike, Weekday};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::data_access::data_context::DataContext;

/// How often the fire condition is polled.
const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Recurring background sweep: every Sunday at 23:59 local time, delete
/// all completed tasks across ALL users. Runs outside the request path;
/// stops between ticks when the shutdown channel fires, letting an
/// in-flight sweep finish first.
pub fn spawn(ctx: DataContext, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        let mut last_fired: Option<NaiveDate> = None;
        info!("cleanup scheduler started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let now = Local::now();
                    if should_fire(now, last_fired) {
                        last_fired = Some(now.date_naive());
                        sweep(&ctx);
                    }
                }
                _ = shutdown.changed() => {
                    info!("cleanup scheduler stopping");
                    break;
                }
            }
        }
    })
}

/// True when `now` is inside the Sunday 23:59 minute and the sweep has
/// not already fired that calendar day. With a one-minute poll this
/// fires at most once per matching instant.
pub fn should_fire(now: DateTime<Local>, last_fired: Option<NaiveDate>) -> bool {
    now.weekday() == Weekday::Sun
        && now.hour() == 23
        && now.minute() == 59
        && last_fired != Some(now.date_naive())
}

/// One sweep: query completed tasks (no owner filter) and delete each
/// individually. A failed delete is logged and does not abort the rest;
/// a failed query is logged and waits for the next scheduled fire.
pub fn sweep(ctx: &DataContext) -> u64 {
    let completed = match ctx.completed_tasks_all_users() {
        Ok(tasks) => tasks,
        Err(e) => {
            error!("cleanup sweep query failed: {e}");
            return 0;
        }
    };

    let mut deleted = 0u64;
    for task in completed {
        match ctx.delete_task(task.id) {
            Ok(true) => deleted += 1,
            // Already gone: a concurrent edit beat us to it
            Ok(false) => {}
            Err(e) => warn!(task = %task.id, "cleanup delete failed: {e}"),
        }
    }
    info!(deleted, "cleanup sweep finished");
    deleted
}

// ── Tests ──────────────────────────────────────────────────────
