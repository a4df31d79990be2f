use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{AnalysisReport, SOLUTION_LABEL, UNVERIFIED_NOTE};

const DEFAULT_TITLE: &str = "Kdump Certification Report Analyzer";

const INLINE_STYLE: &str = "body{font-family:sans-serif;margin:2em;max-width:70em}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4em;text-align:left;vertical-align:top}\
th{background:#f3f3f3;width:16em}\
pre{margin:0;white-space:pre-wrap}\
.error{color:#a00}\
.unverified{color:#a60}";

/// Builds the upload form, result and error pages.
///
/// Constructed once at start-up and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    title: String,
    stylesheet: Option<String>,
    field_name: String,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new(None, "file")
    }
}

impl PageRenderer {
    /// `stylesheet` is an href linked from every page; without one a small inline style is used.
    pub fn new(stylesheet: Option<String>, field_name: &str) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            stylesheet,
            field_name: field_name.to_string(),
        }
    }

    fn head(&self, out: &mut String, heading: &str) {
        out.push_str(&format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n",
            encode_text(&self.title)
        ));
        let style = match &self.stylesheet {
            Some(href) => format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                encode_double_quoted_attribute(href)
            ),
            None => format!("<style>{}</style>\n", INLINE_STYLE),
        };
        out.push_str(&style);
        out.push_str(&format!("</head>\n<body>\n<h1>{}</h1>\n", encode_text(heading)));
    }

    fn upload_form(&self, out: &mut String) {
        out.push_str(&format!(
            "<form action=\"/upload\" method=\"post\" enctype=\"multipart/form-data\">\n\
             <input type=\"file\" name=\"{}\" accept=\".xml,text/xml,application/xml\" required>\n\
             <button type=\"submit\">Analyze</button>\n</form>\n",
            encode_double_quoted_attribute(&self.field_name)
        ));
    }

    pub fn render_index(&self) -> String {
        let mut out = String::new();
        self.head(&mut out, &self.title);
        out.push_str("<p>Upload an rhcert kdump test result (XML) to inspect its kdump configuration, vmcore and service status.</p>\n");
        self.upload_form(&mut out);
        out.push_str("</body>\n</html>\n");
        out
    }

    pub fn render_report(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();
        self.head(&mut out, &self.title);

        out.push_str("<h2>System</h2>\n<table>\n");
        for (label, value) in report.header() {
            row(&mut out, label, value);
        }
        out.push_str("</table>\n");

        out.push_str("<h2>Kdump results</h2>\n<table>\n");
        let extraction = &report.extraction;
        for (label, value) in extraction.fields() {
            if label == SOLUTION_LABEL && !value.is_empty() {
                let note = if extraction.solution_unverified {
                    format!(" <span class=\"unverified\">({})</span>", UNVERIFIED_NOTE)
                } else {
                    String::new()
                };
                out.push_str(&format!(
                    "<tr><th>{}</th><td><a href=\"{}\">{}</a>{}</td></tr>\n",
                    encode_text(label),
                    encode_double_quoted_attribute(value),
                    encode_text(value),
                    note
                ));
            } else {
                row(&mut out, label, value);
            }
        }
        out.push_str("</table>\n");

        out.push_str(&format!(
            "<p><small>Analyzed at {}</small></p>\n",
            report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str("<h2>Analyze another report</h2>\n");
        self.upload_form(&mut out);
        out.push_str("</body>\n</html>\n");
        out
    }

    pub fn render_error(&self, status: u16, message: &str) -> String {
        let mut out = String::new();
        self.head(&mut out, &format!("Error {}", status));
        out.push_str(&format!("<p class=\"error\">{}</p>\n", encode_text(message)));
        self.upload_form(&mut out);
        out.push_str("</body>\n</html>\n");
        out
    }
}

fn row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "<tr><th>{}</th><td><pre>{}</pre></td></tr>\n",
        encode_text(label),
        encode_text(value)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CertificationReport, ExtractionResult};

    fn sample_report() -> AnalysisReport {
        let mut doc = CertificationReport::default();
        doc.hardware.release = "5.14.0-1.el9.x86_64".to_string();
        let extraction = ExtractionResult {
            kdump_config: "path /var/crash\ncore_collector makedumpfile -l --message-level 7 -d 31".to_string(),
            systemctl_status: "active".to_string(),
            error_message: "<script>alert(1)</script>".to_string(),
            recommended_solution: "https://example.com/kb?a=1&b=2".to_string(),
            ..Default::default()
        };
        AnalysisReport::new(&doc, extraction)
    }

    #[test]
    fn test_index_contains_upload_form() {
        let page = PageRenderer::default().render_index();
        assert!(page.contains("action=\"/upload\""));
        assert!(page.contains("name=\"file\""));
        assert!(page.contains("multipart/form-data"));
    }

    #[test]
    fn test_report_escapes_values() {
        let page = PageRenderer::default().render_report(&sample_report());
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_report_links_solution() {
        let page = PageRenderer::default().render_report(&sample_report());
        assert!(page.contains("<a href=\"https://example.com/kb?a=1&amp;b=2\">"));
        assert!(!page.contains(UNVERIFIED_NOTE));
    }

    #[test]
    fn test_unverified_solution_is_flagged() {
        let mut report = sample_report();
        report.extraction.solution_unverified = true;
        let page = PageRenderer::default().render_report(&report);
        assert!(page.contains(&format!("<span class=\"unverified\">({})</span>", UNVERIFIED_NOTE)));
    }

    #[test]
    fn test_report_lists_every_field() {
        let report = sample_report();
        let page = PageRenderer::default().render_report(&report);
        for (label, _) in report.extraction.fields() {
            assert!(page.contains(label), "missing {}", label);
        }
        assert!(page.contains("5.14.0-1.el9.x86_64"));
    }

    #[test]
    fn test_stylesheet_link() {
        let renderer = PageRenderer::new(Some("/static/style.css".to_string()), "file");
        let page = renderer.render_index();
        assert!(page.contains("href=\"/static/style.css\""));
        assert!(!page.contains("<style>"));
    }

    #[test]
    fn test_error_page() {
        let page = PageRenderer::default().render_error(400, "Malformed document: bad <tag>");
        assert!(page.contains("Error 400"));
        assert!(page.contains("bad &lt;tag&gt;"));
    }
}
