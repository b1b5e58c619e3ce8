use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{email_notification_request::ReminderDetails, settings::Settings, ApiError};

const MAIL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// ── Composition ────────────────────────────────────────────────

/// A rendered reminder mail, ready for delivery.
#[derive(Debug)]
pub struct MailContent {
    pub subject: String,
    pub html: String,
}

/// Builds the reminder mail for the requested notification type.
/// Unknown types are a validation error.
pub fn reminder_for(kind: &str, details: &ReminderDetails) -> Result<MailContent, ApiError> {
    match kind {
        "event" => Ok(event_reminder(details)),
        "task" => Ok(task_reminder(details)),
        _ => Err(ApiError::Validation("Invalid notification type".into())),
    }
}

fn event_reminder(details: &ReminderDetails) -> MailContent {
    let mut rows = String::new();
    if let Some(description) = &details.description {
        rows.push_str(&format!("<p>{description}</p>"));
    }
    if let Some(start) = details.start {
        rows.push_str(&format!(
            "<p><strong>Starts at:</strong> {}</p>",
            start.format(MAIL_TIME_FORMAT)
        ));
    }
    if let Some(location) = &details.location {
        rows.push_str(&format!("<p><strong>Location:</strong> {location}</p>"));
    }
    if let Some(category) = &details.category {
        rows.push_str(&format!("<p><strong>Category:</strong> {category}</p>"));
    }

    MailContent {
        subject: format!("Reminder: {} starts soon", details.title),
        html: wrap("Event reminder", &details.title, &rows),
    }
}

fn task_reminder(details: &ReminderDetails) -> MailContent {
    let mut rows = String::new();
    if let Some(description) = &details.description {
        rows.push_str(&format!("<p>{description}</p>"));
    }
    if let Some(due) = details.due_date {
        rows.push_str(&format!(
            "<p><strong>Due:</strong> {}</p>",
            due.format(MAIL_TIME_FORMAT)
        ));
    }
    if let Some(priority) = &details.priority {
        rows.push_str(&format!("<p><strong>Priority:</strong> {priority}</p>"));
    }
    if let Some(category) = &details.category {
        rows.push_str(&format!("<p><strong>Category:</strong> {category}</p>"));
    }

    MailContent {
        subject: format!("Reminder: task \"{}\" is due soon", details.title),
        html: wrap("Task reminder", &details.title, &rows),
    }
}

fn wrap(heading: &str, title: &str, rows: &str) -> String {
    format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
         <h2>{heading}</h2>\
         <div style=\"background: #f5f5f5; padding: 20px; border-radius: 8px;\">\
         <h3>{title}</h3>{rows}</div>\
         <p style=\"color: #666; font-size: 14px;\">\
         This email was sent automatically by Daymark.</p></div>"
    )
}

// ── Delivery ───────────────────────────────────────────────────

/// Sends a rendered mail through the SMTP relay named in the settings.
pub async fn send(settings: &Settings, to: &str, mail: &MailContent) -> Result<(), ApiError> {
    let from: Mailbox = settings.smtp_from.parse().map_err(|e| {
        ApiError::Internal(format!("invalid sender address \"{}\": {e}", settings.smtp_from))
    })?;
    let recipient: Mailbox = to
        .parse()
        .map_err(|e| ApiError::Validation(format!("Invalid email recipient: {e}")))?;

    let message = Message::builder()
        .from(from)
        .to(recipient)
        .subject(mail.subject.clone())
        .header(ContentType::TEXT_HTML)
        .body(mail.html.clone())
        .map_err(|e| ApiError::Internal(format!("cannot build reminder mail: {e}")))?;

    let transport: AsyncSmtpTransport<Tokio1Executor> =
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)
            .map_err(|e| ApiError::Internal(format!("cannot configure SMTP relay: {e}")))?
            .port(settings.smtp_port)
            .credentials(Credentials::new(
                settings.smtp_username.clone(),
                settings.smtp_password.clone(),
            ))
            .build();

    transport
        .send(message)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to send email notification: {e}")))?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn details() -> ReminderDetails {
        ReminderDetails {
            title: "Sprint review".into(),
            description: Some("Quarterly demo".into()),
            start: Some(Utc.with_ymd_and_hms(2026, 2, 13, 15, 30, 0).unwrap()),
            due_date: Some(Utc.with_ymd_and_hms(2026, 2, 14, 9, 0, 0).unwrap()),
            location: Some("Room 4".into()),
            category: Some("work".into()),
            priority: Some("high".into()),
        }
    }

    #[test]
    fn event_reminder_renders_event_fields() {
        let mail = reminder_for("event", &details()).unwrap();
        assert_eq!(mail.subject, "Reminder: Sprint review starts soon");
        assert!(mail.html.contains("Event reminder"));
        assert!(mail.html.contains("Starts at:</strong> 2026-02-13 15:30"));
        assert!(mail.html.contains("Location:</strong> Room 4"));
        assert!(!mail.html.contains("Priority:"));
    }

    #[test]
    fn task_reminder_renders_task_fields() {
        let mail = reminder_for("task", &details()).unwrap();
        assert_eq!(mail.subject, "Reminder: task \"Sprint review\" is due soon");
        assert!(mail.html.contains("Task reminder"));
        assert!(mail.html.contains("Due:</strong> 2026-02-14 09:00"));
        assert!(mail.html.contains("Priority:</strong> high"));
        assert!(!mail.html.contains("Location:"));
    }

    #[test]
    fn absent_fields_leave_no_rows() {
        let bare = ReminderDetails {
            title: "Standalone".into(),
            description: None,
            start: None,
            due_date: None,
            location: None,
            category: None,
            priority: None,
        };
        let mail = reminder_for("event", &bare).unwrap();
        assert!(mail.html.contains("<h3>Standalone</h3>"));
        assert!(!mail.html.contains("<strong>"));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = reminder_for("goal", &details()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid notification type");
    }

    #[tokio::test]
    async fn send_rejects_bad_recipient_address() {
        let settings = Settings {
            tcp_socket_binding: "127.0.0.1".into(),
            tcp_socket_port: 0,
            database_path: String::new(),
            jwt_secret: "test-secret".into(),
            jwt_expiration_in_minutes: 60,
            smtp_host: "localhost".into(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_from: "Daymark <no-reply@example.com>".into(),
        };
        let mail = reminder_for("task", &details()).unwrap();

        let err = send(&settings, "not-an-address", &mail).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
