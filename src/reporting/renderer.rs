use crate::generate_report_request::{ReportPayload, ReportStats};
use crate::reporting::pdf::{Document, Font, PAGE_HEIGHT, PAGE_WIDTH};
use crate::ApiError;

pub const REPORT_FILENAME: &str = "analytics_report.pdf";
pub const REPORT_CONTENT_TYPE: &str = "application/pdf";

const MARGIN: f64 = 72.0;
const BODY_SIZE: f64 = 11.0;
const ROW_HEIGHT: f64 = 20.0;
const TABLE_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;
const VALUE_COLUMN_X: f64 = MARGIN + TABLE_WIDTH * 0.6;

/// Render the fixed-layout analytics report. The payload is trusted as
/// pre-shaped; only the presence of the stats block is validated, and
/// that happens before any document bytes are produced.
pub fn render_report(payload: &ReportPayload) -> Result<Vec<u8>, ApiError> {
    let stats = payload
        .stats
        .as_ref()
        .ok_or_else(|| ApiError::Validation("Report data is required".into()))?;

    let mut writer = ReportWriter::new();

    // Title block + generation timestamp
    writer.centered_text("Analytics Report", 20.0, Font::Bold);
    writer.advance(26.0);
    if let Some(generated_at) = &payload.generated_at {
        writer.centered_text(&format!("Generated: {generated_at}"), 10.0, Font::Regular);
        writer.advance(18.0);
    }
    writer.advance(10.0);

    render_statistics(&mut writer, stats);

    if !payload.progress_data.is_empty() {
        writer.section_heading("Task Completion Progress");
        writer.table_header("Date", "Completion Rate");
        for point in &payload.progress_data {
            writer.table_row(&point.label, &format!("{}%", point.value.round() as i64));
        }
        writer.advance(14.0);
    }

    if !payload.recent_activity.is_empty() {
        writer.section_heading("Recent Activity");
        for line in &payload.recent_activity {
            writer.body_line(&format!("{} - {}", line.description, line.time));
        }
    }

    Ok(writer.finish())
}

fn render_statistics(writer: &mut ReportWriter, stats: &ReportStats) {
    writer.section_heading("Statistics Overview");
    writer.table_header("Metric", "Value");
    writer.table_row("Total Tasks", &stats.total_tasks.to_string());
    writer.table_row("Completed Tasks", &stats.completed_tasks.to_string());
    writer.table_row("Pending Tasks", &stats.pending_tasks.to_string());
    writer.table_row("Productivity Score", &format!("{}%", stats.productivity_score));
    writer.table_row("Current Month Events", &stats.month_total_events.to_string());
    writer.table_row("Past Events", &stats.month_past_events.to_string());
    writer.advance(14.0);
}

/// Cursor-based layout over [`Document`]: walks down the page and breaks
/// to a fresh one when a row would cross the bottom margin.
struct ReportWriter {
    doc: Document,
    y: f64,
}

impl ReportWriter {
    fn new() -> Self {
        let mut doc = Document::new();
        doc.add_page();
        Self { doc, y: PAGE_HEIGHT - MARGIN }
    }

    fn finish(self) -> Vec<u8> {
        self.doc.render()
    }

    fn page(&mut self) -> &mut crate::reporting::pdf::Page {
        self.doc.last_page()
    }

    fn advance(&mut self, height: f64) {
        self.y -= height;
    }

    fn ensure_room(&mut self, height: f64) {
        if self.y - height < MARGIN {
            self.doc.add_page();
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn centered_text(&mut self, text: &str, size: f64, font: Font) {
        self.ensure_room(size);
        let x = (PAGE_WIDTH - font.text_width(text, size)) / 2.0;
        let y = self.y;
        self.page().text(x, y, size, font, text);
    }

    fn section_heading(&mut self, title: &str) {
        self.ensure_room(40.0);
        let y = self.y;
        self.page().text(MARGIN, y, 14.0, Font::Bold, title);
        self.page().line(MARGIN, y - 4.0, MARGIN + TABLE_WIDTH, y - 4.0, 0.8);
        self.advance(26.0);
    }

    /// Header row, styled apart from body rows: gray band + bold text.
    fn table_header(&mut self, left: &str, right: &str) {
        self.ensure_room(ROW_HEIGHT);
        let y = self.y;
        self.page().fill_rect(MARGIN, y - 5.0, TABLE_WIDTH, ROW_HEIGHT - 4.0, 0.85);
        self.page().text(MARGIN + 4.0, y, BODY_SIZE, Font::Bold, left);
        self.page().text(VALUE_COLUMN_X, y, BODY_SIZE, Font::Bold, right);
        self.advance(ROW_HEIGHT);
    }

    fn table_row(&mut self, left: &str, right: &str) {
        self.ensure_room(ROW_HEIGHT);
        let y = self.y;
        self.page().text(MARGIN + 4.0, y, BODY_SIZE, Font::Regular, left);
        self.page().text(VALUE_COLUMN_X, y, BODY_SIZE, Font::Regular, right);
        self.page().line(MARGIN, y - 5.0, MARGIN + TABLE_WIDTH, y - 5.0, 0.3);
        self.advance(ROW_HEIGHT);
    }

    fn body_line(&mut self, text: &str) {
        self.ensure_room(16.0);
        let y = self.y;
        self.page().text(MARGIN, y, BODY_SIZE - 1.0, Font::Regular, text);
        self.advance(16.0);
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_report_request::{ActivityLine, ProgressPoint};

    fn payload() -> ReportPayload {
        ReportPayload {
            generated_at: Some("2026-02-13 12:00:00".into()),
            stats: Some(ReportStats {
                total_tasks: 3,
                completed_tasks: 2,
                pending_tasks: 1,
                productivity_score: 67,
                month_total_events: 4,
                month_past_events: 2,
            }),
            progress_data: vec![
                ProgressPoint { label: "Wed".into(), value: 50.0 },
                ProgressPoint { label: "Thu".into(), value: 100.0 },
            ],
            recent_activity: vec![ActivityLine {
                description: "Completed task \"Water the plants\"".into(),
                time: "2026-02-12 10:30:00".into(),
            }],
        }
    }

    #[test]
    fn missing_stats_rejected_before_rendering() {
        let mut p = payload();
        p.stats = None;
        let err = render_report(&p).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), "Report data is required");
    }

    #[test]
    fn full_payload_renders_all_sections() {
        let bytes = render_report(&payload()).unwrap();
        let text = String::from_utf8_lossy(&bytes).to_string();

        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("(Analytics Report)"));
        assert!(text.contains("(Generated: 2026-02-13 12:00:00)"));
        assert!(text.contains("(Statistics Overview)"));
        assert!(text.contains("(Total Tasks)"));
        assert!(text.contains("(67%)"));
        assert!(text.contains("(Task Completion Progress)"));
        assert!(text.contains("(50%)"));
        assert!(text.contains("(Recent Activity)"));
        assert!(text.contains("- 2026-02-12 10:30:00)"));
    }

    #[test]
    fn stats_rows_keep_fixed_order() {
        let bytes = render_report(&payload()).unwrap();
        let text = String::from_utf8_lossy(&bytes).to_string();

        let order = [
            "(Total Tasks)",
            "(Completed Tasks)",
            "(Pending Tasks)",
            "(Productivity Score)",
            "(Current Month Events)",
            "(Past Events)",
        ];
        let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut p = payload();
        p.progress_data.clear();
        p.recent_activity.clear();

        let text = String::from_utf8_lossy(&render_report(&p).unwrap()).to_string();
        assert!(!text.contains("(Task Completion Progress)"));
        assert!(!text.contains("(Recent Activity)"));
        assert!(text.contains("(Statistics Overview)"));
    }

    #[test]
    fn long_activity_feed_paginates() {
        let mut p = payload();
        p.recent_activity = (0..40)
            .map(|i| ActivityLine {
                description: format!("entry {i}"),
                time: "2026-02-12 10:30:00".into(),
            })
            .collect();

        let text = String::from_utf8_lossy(&render_report(&p).unwrap()).to_string();
        assert!(text.contains("/Count 2"));
    }
}
