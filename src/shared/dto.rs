// Requests
pub mod login_request;
pub mod register_request;
pub mod user_edit_request;
pub mod create_task_request;
pub mod update_task_request;
pub mod create_note_request;
pub mod update_note_request;
pub mod create_event_request;
pub mod update_event_request;
pub mod create_goal_request;
pub mod update_goal_request;
pub mod create_reminder_request;
pub mod update_reminder_request;
pub mod analytics_query;
pub mod generate_report_request;
pub mod email_notification_request;

// Responses
pub mod api_response;
pub mod login_response;
pub mod user_get_response;
pub mod summary_response;
pub mod dashboard_overview_response;
