use chrono::{DateTime, Utc};
use redb::{Database, ReadableTable, TableDefinition};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::{activity::Activity, event::Event, goal::Goal, note::Note, reminder::Reminder, task::Task, user::User};

const USERS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("users");
const EMAIL_INDEX: TableDefinition<&str, &[u8]> = TableDefinition::new("email_index");
const TASKS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("tasks");
const NOTES_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("notes");
const EVENTS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("events");
const GOALS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("goals");
const REMINDERS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("reminders");
const ACTIVITIES_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("activities");

const ALL_TABLES: [TableDefinition<&[u8], &[u8]>; 7] = [
    USERS_TABLE,
    TASKS_TABLE,
    NOTES_TABLE,
    EVENTS_TABLE,
    GOALS_TABLE,
    REMINDERS_TABLE,
    ACTIVITIES_TABLE,
];

/// Record store adapter: one redb table per collection, JSON values,
/// uuid byte keys. Constructed once in `main` and passed explicitly so
/// the aggregation engine and the cleanup scheduler can be exercised
/// against a scratch store.
#[derive(Clone)]
pub struct DataContext {
    db: Arc<Database>,
}

impl DataContext {
    pub fn new(path: &str) -> Result<Self, redb::Error> {
        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        for table in ALL_TABLES {
            let _ = write_txn.open_table(table)?;
        }
        let _ = write_txn.open_table(EMAIL_INDEX)?;
        write_txn.commit()?;
        Ok(DataContext { db: Arc::new(db) })
    }

    // ── Generic per-collection operations ──────────────────────

    fn put<T: Serialize>(
        &self,
        table: TableDefinition<&[u8], &[u8]>,
        id: Uuid,
        record: &T,
    ) -> Result<(), redb::Error> {
        let write_txn = self.db.begin_write()?;
        {
            let mut t = write_txn.open_table(table)?;
            let bytes = serde_json::to_vec(record).unwrap();
            t.insert(id.as_bytes().as_slice(), bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn get<T: DeserializeOwned>(
        &self,
        table: TableDefinition<&[u8], &[u8]>,
        id: Uuid,
    ) -> Result<Option<T>, redb::Error> {
        let read_txn = self.db.begin_read()?;
        let t = read_txn.open_table(table)?;
        match t.get(id.as_bytes().as_slice())? {
            Some(data) => Ok(Some(serde_json::from_slice(data.value()).unwrap())),
            None => Ok(None),
        }
    }

    fn scan<T: DeserializeOwned>(
        &self,
        table: TableDefinition<&[u8], &[u8]>,
    ) -> Result<Vec<T>, redb::Error> {
        let read_txn = self.db.begin_read()?;
        let t = read_txn.open_table(table)?;
        let mut records = Vec::new();
        for entry in t.iter()? {
            let (_, value) = entry?;
            records.push(serde_json::from_slice(value.value()).unwrap());
        }
        Ok(records)
    }

    fn remove(
        &self,
        table: TableDefinition<&[u8], &[u8]>,
        id: Uuid,
    ) -> Result<bool, redb::Error> {
        let write_txn = self.db.begin_write()?;
        let deleted;
        {
            let mut t = write_txn.open_table(table)?;
            deleted = t.remove(id.as_bytes().as_slice())?.is_some();
        }
        write_txn.commit()?;
        Ok(deleted)
    }

    // ── Users ──────────────────────────────────────────────────

    pub fn create_user(&self, user: &User) -> Result<(), redb::Error> {
        let write_txn = self.db.begin_write()?;
        {
            let mut users_table = write_txn.open_table(USERS_TABLE)?;
            let mut email_index = write_txn.open_table(EMAIL_INDEX)?;
            let user_bytes = serde_json::to_vec(user).unwrap();
            let id_bytes = user.id.as_bytes();
            users_table.insert(id_bytes.as_slice(), user_bytes.as_slice())?;
            email_index.insert(user.email.as_str(), id_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get_user(&self, id: Uuid) -> Result<Option<User>, redb::Error> {
        self.get(USERS_TABLE, id)
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>, redb::Error> {
        let read_txn = self.db.begin_read()?;
        let email_index = read_txn.open_table(EMAIL_INDEX)?;
        match email_index.get(email)? {
            Some(id_data) => {
                let users_table = read_txn.open_table(USERS_TABLE)?;
                match users_table.get(id_data.value())? {
                    Some(user_data) => Ok(Some(serde_json::from_slice(user_data.value()).unwrap())),
                    None => Ok(None),
                }
            }
            None => Ok(None),
        }
    }

    pub fn update_user(&self, old_email: &str, user: &User) -> Result<(), redb::Error> {
        let write_txn = self.db.begin_write()?;
        {
            let mut users_table = write_txn.open_table(USERS_TABLE)?;
            let mut email_index = write_txn.open_table(EMAIL_INDEX)?;
            let user_bytes = serde_json::to_vec(user).unwrap();
            let id_bytes = user.id.as_bytes();
            users_table.insert(id_bytes.as_slice(), user_bytes.as_slice())?;
            email_index.insert(user.email.as_str(), id_bytes.as_slice())?;
            if old_email != user.email {
                email_index.remove(old_email)?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    // ── Tasks ──────────────────────────────────────────────────

    pub fn create_task(&self, task: &Task) -> Result<(), redb::Error> {
        self.put(TASKS_TABLE, task.id, task)
    }

    pub fn get_task(&self, id: Uuid) -> Result<Option<Task>, redb::Error> {
        self.get(TASKS_TABLE, id)
    }

    pub fn update_task(&self, task: &Task) -> Result<(), redb::Error> {
        self.put(TASKS_TABLE, task.id, task)
    }

    pub fn delete_task(&self, id: Uuid) -> Result<bool, redb::Error> {
        self.remove(TASKS_TABLE, id)
    }

    /// All tasks owned by `owner`, newest first.
    pub fn list_tasks(&self, owner: Uuid) -> Result<Vec<Task>, redb::Error> {
        let mut tasks: Vec<Task> = self.scan(TASKS_TABLE)?;
        tasks.retain(|t| t.owner == owner);
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    /// Tasks owned by `owner` with `created_at >= since` (boundary inclusive),
    /// oldest first.
    pub fn tasks_created_since(
        &self,
        owner: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<Task>, redb::Error> {
        let mut tasks: Vec<Task> = self.scan(TASKS_TABLE)?;
        tasks.retain(|t| t.owner == owner && t.created_at >= since);
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(tasks)
    }

    /// Completed tasks across ALL owners. Used only by the cleanup sweep.
    pub fn completed_tasks_all_users(&self) -> Result<Vec<Task>, redb::Error> {
        let mut tasks: Vec<Task> = self.scan(TASKS_TABLE)?;
        tasks.retain(|t| t.completed);
        Ok(tasks)
    }

    // ── Notes ──────────────────────────────────────────────────

    pub fn create_note(&self, note: &Note) -> Result<(), redb::Error> {
        self.put(NOTES_TABLE, note.id, note)
    }

    pub fn get_note(&self, id: Uuid) -> Result<Option<Note>, redb::Error> {
        self.get(NOTES_TABLE, id)
    }

    pub fn update_note(&self, note: &Note) -> Result<(), redb::Error> {
        self.put(NOTES_TABLE, note.id, note)
    }

    pub fn delete_note(&self, id: Uuid) -> Result<bool, redb::Error> {
        self.remove(NOTES_TABLE, id)
    }

    pub fn list_notes(&self, owner: Uuid) -> Result<Vec<Note>, redb::Error> {
        let mut notes: Vec<Note> = self.scan(NOTES_TABLE)?;
        notes.retain(|n| n.owner == owner);
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notes)
    }

    // ── Events ─────────────────────────────────────────────────

    pub fn create_event(&self, event: &Event) -> Result<(), redb::Error> {
        self.put(EVENTS_TABLE, event.id, event)
    }

    pub fn get_event(&self, id: Uuid) -> Result<Option<Event>, redb::Error> {
        self.get(EVENTS_TABLE, id)
    }

    pub fn update_event(&self, event: &Event) -> Result<(), redb::Error> {
        self.put(EVENTS_TABLE, event.id, event)
    }

    pub fn delete_event(&self, id: Uuid) -> Result<bool, redb::Error> {
        self.remove(EVENTS_TABLE, id)
    }

    /// All events owned by `owner`, ordered by start date.
    pub fn list_events(&self, owner: Uuid) -> Result<Vec<Event>, redb::Error> {
        let mut events: Vec<Event> = self.scan(EVENTS_TABLE)?;
        events.retain(|e| e.owner == owner);
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(events)
    }

    // ── Goals ──────────────────────────────────────────────────

    pub fn create_goal(&self, goal: &Goal) -> Result<(), redb::Error> {
        self.put(GOALS_TABLE, goal.id, goal)
    }

    pub fn get_goal(&self, id: Uuid) -> Result<Option<Goal>, redb::Error> {
        self.get(GOALS_TABLE, id)
    }

    pub fn update_goal(&self, goal: &Goal) -> Result<(), redb::Error> {
        self.put(GOALS_TABLE, goal.id, goal)
    }

    pub fn delete_goal(&self, id: Uuid) -> Result<bool, redb::Error> {
        self.remove(GOALS_TABLE, id)
    }

    pub fn list_goals(&self, owner: Uuid) -> Result<Vec<Goal>, redb::Error> {
        let mut goals: Vec<Goal> = self.scan(GOALS_TABLE)?;
        goals.retain(|g| g.owner == owner);
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(goals)
    }

    // ── Reminders ──────────────────────────────────────────────

    pub fn create_reminder(&self, reminder: &Reminder) -> Result<(), redb::Error> {
        self.put(REMINDERS_TABLE, reminder.id, reminder)
    }

    pub fn get_reminder(&self, id: Uuid) -> Result<Option<Reminder>, redb::Error> {
        self.get(REMINDERS_TABLE, id)
    }

    pub fn update_reminder(&self, reminder: &Reminder) -> Result<(), redb::Error> {
        self.put(REMINDERS_TABLE, reminder.id, reminder)
    }

    pub fn delete_reminder(&self, id: Uuid) -> Result<bool, redb::Error> {
        self.remove(REMINDERS_TABLE, id)
    }

    pub fn list_reminders(&self, owner: Uuid) -> Result<Vec<Reminder>, redb::Error> {
        let mut reminders: Vec<Reminder> = self.scan(REMINDERS_TABLE)?;
        reminders.retain(|r| r.owner == owner);
        reminders.sort_by(|a, b| a.remind_at.cmp(&b.remind_at));
        Ok(reminders)
    }

    // ── Activities ─────────────────────────────────────────────

    pub fn append_activity(&self, activity: &Activity) -> Result<(), redb::Error> {
        self.put(ACTIVITIES_TABLE, activity.id, activity)
    }

    /// Up to `limit` newest activities for `owner`, newest first.
    pub fn recent_activities(&self, owner: Uuid, limit: usize) -> Result<Vec<Activity>, redb::Error> {
        let mut activities: Vec<Activity> = self.scan(ACTIVITIES_TABLE)?;
        activities.retain(|a| a.owner == owner);
        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        activities.truncate(limit);
        Ok(activities)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_task_request::CreateTaskRequest;
    use crate::{task_priority::TaskPriority, task_status::TaskStatus};
    use chrono::Duration;
    use tempfile::TempDir;

    fn scratch() -> (DataContext, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.redb");
        let ctx = DataContext::new(path.to_str().unwrap()).unwrap();
        (ctx, dir)
    }

    fn make_task(owner: Uuid, title: &str) -> Task {
        Task::new(
            owner,
            CreateTaskRequest {
                title: title.into(),
                description: None,
                status: TaskStatus::Pending,
                priority: TaskPriority::Medium,
                category: None,
                due_date: None,
            },
        )
    }

    #[test]
    fn task_round_trip() {
        let (ctx, _dir) = scratch();
        let owner = Uuid::new_v4();
        let task = make_task(owner, "Buy groceries");

        ctx.create_task(&task).unwrap();
        let loaded = ctx.get_task(task.id).unwrap().unwrap();
        assert_eq!(loaded.title, "Buy groceries");
        assert_eq!(loaded.owner, owner);

        assert!(ctx.delete_task(task.id).unwrap());
        assert!(ctx.get_task(task.id).unwrap().is_none());
        assert!(!ctx.delete_task(task.id).unwrap());
    }

    #[test]
    fn list_tasks_is_scoped_to_owner() {
        let (ctx, _dir) = scratch();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        ctx.create_task(&make_task(alice, "hers")).unwrap();
        ctx.create_task(&make_task(bob, "his")).unwrap();

        let tasks = ctx.list_tasks(alice).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "hers");
    }

    #[test]
    fn tasks_created_since_includes_the_boundary() {
        let (ctx, _dir) = scratch();
        let owner = Uuid::new_v4();

        let mut old = make_task(owner, "old");
        old.created_at = Utc::now() - Duration::days(10);
        let edge = make_task(owner, "edge");
        let since = edge.created_at;

        ctx.create_task(&old).unwrap();
        ctx.create_task(&edge).unwrap();

        let tasks = ctx.tasks_created_since(owner, since).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "edge");
    }

    #[test]
    fn completed_tasks_span_all_owners() {
        let (ctx, _dir) = scratch();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let mut done_a = make_task(alice, "done a");
        done_a.mark_completed(Utc::now());
        let mut done_b = make_task(bob, "done b");
        done_b.mark_completed(Utc::now());
        let open = make_task(alice, "open");

        ctx.create_task(&done_a).unwrap();
        ctx.create_task(&done_b).unwrap();
        ctx.create_task(&open).unwrap();

        let completed = ctx.completed_tasks_all_users().unwrap();
        assert_eq!(completed.len(), 2);
        assert!(completed.iter().all(|t| t.completed));
    }

    #[test]
    fn email_index_follows_user_edits() {
        let (ctx, _dir) = scratch();
        let user = User::new(crate::register_request::RegisterRequest {
            email: "old@example.com".into(),
            password: "hunter2".into(),
            display_name: Some("Sam".into()),
        });
        ctx.create_user(&user).unwrap();

        let edited = user.clone().edit(crate::user_edit_request::UserEditRequest {
            email: Some("new@example.com".into()),
            display_name: None,
        });
        ctx.update_user(&user.email, &edited).unwrap();

        assert!(ctx.get_user_by_email("old@example.com").unwrap().is_none());
        let found = ctx.get_user_by_email("new@example.com").unwrap().unwrap();
        assert_eq!(found.id, user.id);
    }

    #[test]
    fn recent_activities_orders_and_limits() {
        let (ctx, _dir) = scratch();
        let owner = Uuid::new_v4();

        for i in 0..12 {
            let mut activity = Activity::new(owner, "task_created", format!("activity {i}"));
            activity.timestamp = Utc::now() - Duration::minutes(12 - i);
            ctx.append_activity(&activity).unwrap();
        }

        let recent = ctx.recent_activities(owner, 10).unwrap();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].description, "activity 11");
        assert!(recent.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }
}
