//! Minimal PDF writer: uncompressed PDF 1.4, A4 pages, Helvetica base
//! fonts, just enough text/rule/fill operators for tabular reports.

use std::fmt::Write as _;

/// A4 portrait, in points.
pub const PAGE_WIDTH: f64 = 595.0;
pub const PAGE_HEIGHT: f64 = 842.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "/F1",
            Font::Bold => "/F2",
        }
    }

    /// Approximate advance width for Helvetica, as a fraction of the
    /// font size. Good enough for centering titles.
    pub fn text_width(self, text: &str, size: f64) -> f64 {
        let per_char = match self {
            Font::Regular => 0.5,
            Font::Bold => 0.55,
        };
        text.chars().count() as f64 * per_char * size
    }
}

/// One page's accumulated content-stream operators.
#[derive(Debug, Default)]
pub struct Page {
    ops: String,
}

impl Page {
    pub fn text(&mut self, x: f64, y: f64, size: f64, font: Font, text: &str) {
        let _ = writeln!(
            self.ops,
            "BT {} {size:.1} Tf {x:.1} {y:.1} Td ({}) Tj ET",
            font.resource(),
            escape(text)
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64) {
        let _ = writeln!(self.ops, "q {width:.2} w {x1:.1} {y1:.1} m {x2:.1} {y2:.1} l S Q");
    }

    /// Filled rectangle with a gray level (0 = black, 1 = white).
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, gray: f64) {
        let _ = writeln!(self.ops, "q {gray:.2} g {x:.1} {y:.1} {w:.1} {h:.1} re f Q");
    }
}

/// String literals in content streams need parens and backslashes escaped.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\n' | '\r' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

#[derive(Debug, Default)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&mut self) -> &mut Page {
        self.pages.push(Page::default());
        self.pages.last_mut().expect("just pushed")
    }

    pub fn last_page(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        self.pages.last_mut().expect("non-empty")
    }

    /// Serialize to PDF bytes. Object layout: 1 catalog, 2 page tree,
    /// 3/4 fonts, then a page + content-stream pair per page.
    pub fn render(&self) -> Vec<u8> {
        let mut buf: Vec<u8> = b"%PDF-1.4\n".to_vec();
        let mut offsets: Vec<usize> = Vec::new();

        let page_obj = |i: usize| 5 + 2 * i;
        let content_obj = |i: usize| 6 + 2 * i;

        let kids: Vec<String> = (0..self.pages.len())
            .map(|i| format!("{} 0 R", page_obj(i)))
            .collect();

        let mut write_obj = |buf: &mut Vec<u8>, offsets: &mut Vec<usize>, body: String| {
            offsets.push(buf.len());
            let num = offsets.len();
            buf.extend_from_slice(format!("{num} 0 obj\n{body}\nendobj\n").as_bytes());
        };

        write_obj(&mut buf, &mut offsets, "<< /Type /Catalog /Pages 2 0 R >>".into());
        write_obj(
            &mut buf,
            &mut offsets,
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                self.pages.len()
            ),
        );
        write_obj(
            &mut buf,
            &mut offsets,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".into(),
        );
        write_obj(
            &mut buf,
            &mut offsets,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".into(),
        );

        for (i, page) in self.pages.iter().enumerate() {
            write_obj(
                &mut buf,
                &mut offsets,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                    content_obj(i)
                ),
            );
            write_obj(
                &mut buf,
                &mut offsets,
                format!(
                    "<< /Length {} >>\nstream\n{}endstream",
                    page.ops.len(),
                    page.ops
                ),
            );
        }

        let xref_start = buf.len();
        buf.extend_from_slice(format!("xref\n0 {}\n", offsets.len() + 1).as_bytes());
        buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
                offsets.len() + 1
            )
            .as_bytes(),
        );
        buf
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_valid_skeleton() {
        let mut doc = Document::new();
        doc.add_page().text(72.0, 800.0, 12.0, Font::Regular, "hello");

        let bytes = doc.render();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("/Count 1"));
        assert!(text.contains("(hello) Tj"));
        assert!(text.ends_with("%%EOF\n"));
    }

    #[test]
    fn escapes_parens_and_backslashes() {
        let mut doc = Document::new();
        doc.add_page().text(72.0, 800.0, 12.0, Font::Regular, "50% (done) \\ ok");

        let text = String::from_utf8_lossy(&doc.render()).to_string();
        assert!(text.contains("(50% \\(done\\) \\\\ ok) Tj"));
    }

    #[test]
    fn multiple_pages_get_their_own_objects() {
        let mut doc = Document::new();
        doc.add_page().text(72.0, 800.0, 12.0, Font::Regular, "one");
        doc.add_page().text(72.0, 800.0, 12.0, Font::Regular, "two");

        let text = String::from_utf8_lossy(&doc.render()).to_string();
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/Kids [5 0 R 7 0 R]"));
    }

    #[test]
    fn xref_offsets_point_at_objects() {
        let mut doc = Document::new();
        doc.add_page().text(72.0, 800.0, 12.0, Font::Bold, "x");
        let bytes = doc.render();

        // Every xref entry must point at an "N 0 obj" header
        let text = String::from_utf8_lossy(&bytes).to_string();
        let xref_at = text.find("xref\n").unwrap();
        for (i, line) in text[xref_at..].lines().skip(3).enumerate() {
            let Some(offset) = line.split(' ').next().and_then(|o| o.parse::<usize>().ok()) else {
                break;
            };
            if !line.ends_with("n ") {
                break;
            }
            let expected = format!("{} 0 obj", i + 1);
            assert!(text[offset..].starts_with(&expected), "bad offset for obj {}", i + 1);
        }
    }
}
