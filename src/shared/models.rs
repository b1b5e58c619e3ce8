pub mod app_state;
pub mod settings;
pub mod user;
pub mod task;
pub mod task_status;
pub mod task_priority;
pub mod note;
pub mod event;
pub mod goal;
pub mod reminder;
pub mod activity;
pub mod time_range;
