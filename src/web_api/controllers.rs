pub mod health_controller;
pub mod authentication_controller;
pub mod user_controller;
pub mod task_controller;
pub mod note_controller;
pub mod event_controller;
pub mod goal_controller;
pub mod reminder_controller;
pub mod dashboard_controller;
pub mod analytics_controller;
pub mod report_controller;
pub mod notification_controller;
