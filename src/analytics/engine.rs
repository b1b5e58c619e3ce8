use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::data_access::data_context::DataContext;
use crate::{
    dashboard_overview_response::{DashboardOverviewResponse, OverviewStats, RecentTask, TodayEvent},
    summary_response::{ActivityEntry, ProgressEntry, SummaryResponse},
    task_status::TaskStatus,
    time_range::TimeRange,
    user::User,
};

/// How many per-day buckets the progress series keeps, regardless of
/// how wide the lookback window is.
const PROGRESS_SERIES_LEN: usize = 7;
const RECENT_ACTIVITY_LIMIT: usize = 10;
const ACTIVITY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Analytics summary over the caller's own records. Pure read-and-fold:
/// any store failure fails the whole call, no partial summary.
pub fn compute_summary(
    ctx: &DataContext,
    user_id: Uuid,
    range: TimeRange,
) -> Result<SummaryResponse, redb::Error> {
    summary_at(ctx, user_id, range, Utc::now())
}

/// Same as [`compute_summary`] with an explicit anchor instant, so tests
/// never depend on wall time.
pub fn summary_at(
    ctx: &DataContext,
    user_id: Uuid,
    range: TimeRange,
    now: DateTime<Utc>,
) -> Result<SummaryResponse, redb::Error> {
    let since = now - Duration::days(range.days());
    let tasks = ctx.tasks_created_since(user_id, since)?;

    // Two-way classification on the `completed` boolean only. The
    // dashboard overview uses a different, three-bucket rule — see
    // `overview_at`; the two are intentionally not unified.
    let total_tasks = tasks.len() as u64;
    let completed_tasks = tasks.iter().filter(|t| t.completed).count() as u64;
    let pending_tasks = total_tasks - completed_tasks;

    // Per-calendar-day buckets keyed on the creation date. BTreeMap keeps
    // them chronological; the weekday label is rendered only afterwards,
    // so two same-weekday days in a long window stay distinct entries.
    let mut buckets: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();
    for task in &tasks {
        let bucket = buckets.entry(task.created_at.date_naive()).or_default();
        bucket.0 += 1;
        if task.completed {
            bucket.1 += 1;
        }
    }
    let mut progress_series: Vec<ProgressEntry> = buckets
        .iter()
        .map(|(day, (total, completed))| ProgressEntry {
            label: day.format("%a").to_string(),
            completion_rate: percentage(*completed, *total),
        })
        .collect();
    if progress_series.len() > PROGRESS_SERIES_LEN {
        progress_series.drain(..progress_series.len() - PROGRESS_SERIES_LEN);
    }

    let events = ctx.list_events(user_id)?;
    let in_current_month = |d: &DateTime<Utc>| d.year() == now.year() && d.month() == now.month();
    let month_total_events = events.iter().filter(|e| in_current_month(&e.start_date)).count() as u64;
    let month_past_events = events
        .iter()
        .filter(|e| in_current_month(&e.start_date) && e.end_date < now)
        .count() as u64;

    let recent_activity = ctx
        .recent_activities(user_id, RECENT_ACTIVITY_LIMIT)?
        .into_iter()
        .map(|a| ActivityEntry {
            description: a.description,
            time: a.timestamp.format(ACTIVITY_TIME_FORMAT).to_string(),
        })
        .collect();

    Ok(SummaryResponse {
        total_tasks,
        completed_tasks,
        pending_tasks,
        productivity_score: percentage(completed_tasks, total_tasks),
        month_total_events,
        month_past_events,
        progress_series,
        recent_activity,
    })
}

/// Dashboard overview: last login, 5 newest tasks, today's events, and
/// the three-bucket stats classified on `status` with the `completed`
/// flag overriding into the completed bucket.
pub fn dashboard_overview(
    ctx: &DataContext,
    user: &User,
) -> Result<DashboardOverviewResponse, redb::Error> {
    overview_at(ctx, user, Utc::now())
}

pub fn overview_at(
    ctx: &DataContext,
    user: &User,
    now: DateTime<Utc>,
) -> Result<DashboardOverviewResponse, redb::Error> {
    let tasks = ctx.list_tasks(user.id)?;

    let recent_tasks = tasks
        .iter()
        .take(5)
        .map(|t| RecentTask {
            id: t.id,
            title: t.title.clone(),
            status: t.status,
            due_date: t.due_date,
        })
        .collect();

    let mut stats = OverviewStats::default();
    for task in &tasks {
        if task.completed || task.status == TaskStatus::Completed {
            stats.completed_tasks += 1;
        } else if task.status == TaskStatus::InProgress {
            stats.in_progress_tasks += 1;
        } else {
            stats.upcoming_tasks += 1;
        }
    }

    let today = now.date_naive();
    let today_events = ctx
        .list_events(user.id)?
        .into_iter()
        .filter(|e| e.start_date.date_naive() == today)
        .map(|e| TodayEvent {
            id: e.id,
            title: e.title,
            start_date: e.start_date,
        })
        .collect();

    Ok(DashboardOverviewResponse {
        last_login: user.last_login,
        recent_tasks,
        today_events,
        stats,
    })
}

/// `part/total*100` rounded to the nearest integer; 0 when `total` is 0
/// (a policy choice, not an error).
fn percentage(part: u64, total: u64) -> i64 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as i64
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Activity;
    use crate::create_event_request::CreateEventRequest;
    use crate::create_task_request::CreateTaskRequest;
    use crate::event::{Event, EventNotifications};
    use crate::register_request::RegisterRequest;
    use crate::task::Task;
    use crate::task_priority::TaskPriority;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn scratch() -> (DataContext, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.redb");
        let ctx = DataContext::new(path.to_str().unwrap()).unwrap();
        (ctx, dir)
    }

    /// A fixed anchor: Friday 2026-02-13 12:00:00 UTC.
    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 13, 12, 0, 0).unwrap()
    }

    fn seed_task(ctx: &DataContext, owner: Uuid, created_at: DateTime<Utc>, completed: bool) {
        let mut task = Task::new(
            owner,
            CreateTaskRequest {
                title: "t".into(),
                description: None,
                status: TaskStatus::Pending,
                priority: TaskPriority::Medium,
                category: None,
                due_date: None,
            },
        );
        task.created_at = created_at;
        if completed {
            task.mark_completed(created_at);
        }
        ctx.create_task(&task).unwrap();
    }

    fn seed_event(ctx: &DataContext, owner: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) {
        let event = Event::new(
            owner,
            CreateEventRequest {
                title: "e".into(),
                description: None,
                start_date: start,
                end_date: end,
                category: None,
                recurrence: None,
                notifications: EventNotifications::default(),
            },
        );
        ctx.create_event(&event).unwrap();
    }

    #[test]
    fn empty_store_scores_zero() {
        let (ctx, _dir) = scratch();
        let summary = summary_at(&ctx, Uuid::new_v4(), TimeRange::Week, anchor()).unwrap();
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.productivity_score, 0);
        assert!(summary.progress_series.is_empty());
        assert!(summary.recent_activity.is_empty());
    }

    #[test]
    fn three_task_scenario() {
        // Two tasks on day0 (one completed), one completed task on day1:
        // totals 3/2/1, score 67, buckets [50, 100] in day order.
        let (ctx, _dir) = scratch();
        let owner = Uuid::new_v4();
        let now = anchor();
        let day0 = now - Duration::days(2);
        let day1 = now - Duration::days(1);

        seed_task(&ctx, owner, day0, true);
        seed_task(&ctx, owner, day0, false);
        seed_task(&ctx, owner, day1, true);

        let summary = summary_at(&ctx, owner, TimeRange::Week, now).unwrap();
        assert_eq!(summary.total_tasks, 3);
        assert_eq!(summary.completed_tasks, 2);
        assert_eq!(summary.pending_tasks, 1);
        assert_eq!(summary.productivity_score, 67);

        let rates: Vec<i64> = summary.progress_series.iter().map(|p| p.completion_rate).collect();
        assert_eq!(rates, vec![50, 100]);
        // Day0 is a Wednesday, day1 a Thursday, given the Friday anchor
        let labels: Vec<&str> = summary.progress_series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Wed", "Thu"]);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let (ctx, _dir) = scratch();
        let owner = Uuid::new_v4();
        let now = anchor();

        seed_task(&ctx, owner, now - Duration::days(7), false); // exactly on boundary
        seed_task(&ctx, owner, now - Duration::days(7) - Duration::seconds(1), false); // just outside

        let summary = summary_at(&ctx, owner, TimeRange::Week, now).unwrap();
        assert_eq!(summary.total_tasks, 1);
    }

    #[test]
    fn progress_series_caps_at_seven_entries() {
        let (ctx, _dir) = scratch();
        let owner = Uuid::new_v4();
        let now = anchor();

        // 12 distinct calendar days inside the month window
        for i in 0..12 {
            seed_task(&ctx, owner, now - Duration::days(i), i % 2 == 0);
        }

        let summary = summary_at(&ctx, owner, TimeRange::Month, now).unwrap();
        assert_eq!(summary.total_tasks, 12);
        assert_eq!(summary.progress_series.len(), 7);
        // The retained entries are the most recent 7 days, still in
        // chronological order, ending at the anchor day (a Friday).
        assert_eq!(summary.progress_series.last().unwrap().label, "Fri");
    }

    #[test]
    fn summary_is_scoped_to_the_user() {
        let (ctx, _dir) = scratch();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let now = anchor();

        seed_task(&ctx, alice, now - Duration::days(1), true);
        seed_task(&ctx, bob, now - Duration::days(1), true);

        let summary = summary_at(&ctx, alice, TimeRange::Week, now).unwrap();
        assert_eq!(summary.total_tasks, 1);
    }

    #[test]
    fn month_event_stats() {
        let (ctx, _dir) = scratch();
        let owner = Uuid::new_v4();
        let now = anchor();

        // Past event earlier this month
        seed_event(&ctx, owner, now - Duration::days(5), now - Duration::days(5) + Duration::hours(1));
        // Upcoming event later this month
        seed_event(&ctx, owner, now + Duration::days(5), now + Duration::days(5) + Duration::hours(1));
        // Event last month: not counted
        seed_event(&ctx, owner, now - Duration::days(40), now - Duration::days(40) + Duration::hours(1));

        let summary = summary_at(&ctx, owner, TimeRange::Week, now).unwrap();
        assert_eq!(summary.month_total_events, 2);
        assert_eq!(summary.month_past_events, 1);
    }

    #[test]
    fn recent_activity_uses_fixed_timestamp_format() {
        let (ctx, _dir) = scratch();
        let owner = Uuid::new_v4();

        let mut activity = Activity::new(owner, "task_created", "Created task \"t\"".into());
        activity.timestamp = Utc.with_ymd_and_hms(2026, 2, 13, 9, 5, 30).unwrap();
        ctx.append_activity(&activity).unwrap();

        let summary = summary_at(&ctx, owner, TimeRange::Week, anchor()).unwrap();
        assert_eq!(summary.recent_activity.len(), 1);
        assert_eq!(summary.recent_activity[0].time, "2026-02-13 09:05:30");
    }

    #[test]
    fn overview_uses_status_with_completed_override() {
        let (ctx, _dir) = scratch();
        let now = anchor();
        let user = User::new(RegisterRequest {
            email: "sam@example.com".into(),
            password: "pw".into(),
            display_name: None,
        });

        // Status says in-progress but the completed flag overrides
        let mut overridden = Task::new(
            user.id,
            CreateTaskRequest {
                title: "odd one".into(),
                description: None,
                status: TaskStatus::InProgress,
                priority: TaskPriority::Low,
                category: None,
                due_date: None,
            },
        );
        overridden.completed = true;
        ctx.create_task(&overridden).unwrap();

        seed_task(&ctx, user.id, now - Duration::days(1), false); // pending → upcoming
        let mut in_progress = Task::new(
            user.id,
            CreateTaskRequest {
                title: "wip".into(),
                description: None,
                status: TaskStatus::InProgress,
                priority: TaskPriority::Medium,
                category: None,
                due_date: None,
            },
        );
        in_progress.created_at = now - Duration::days(3);
        ctx.create_task(&in_progress).unwrap();

        let overview = overview_at(&ctx, &user, now).unwrap();
        assert_eq!(overview.stats.completed_tasks, 1);
        assert_eq!(overview.stats.in_progress_tasks, 1);
        assert_eq!(overview.stats.upcoming_tasks, 1);
        assert_eq!(overview.recent_tasks.len(), 3);
    }

    #[test]
    fn overview_today_events_only() {
        let (ctx, _dir) = scratch();
        let now = anchor();
        let user = User::new(RegisterRequest {
            email: "sam@example.com".into(),
            password: "pw".into(),
            display_name: None,
        });

        seed_event(&ctx, user.id, now + Duration::hours(2), now + Duration::hours(3));
        seed_event(&ctx, user.id, now + Duration::days(1), now + Duration::days(1) + Duration::hours(1));

        let overview = overview_at(&ctx, &user, now).unwrap();
        assert_eq!(overview.today_events.len(), 1);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(3, 3), 100);
    }
}
