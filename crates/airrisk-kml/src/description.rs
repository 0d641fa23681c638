//! HTML body of a placemark balloon.
//!
//! The result is embedded as CDATA, so every piece of free text is escaped
//! here and the closing `]]>` sequence can never appear.

use airrisk_core::{NoticeRecord, RiskLevel};
use quick_xml::escape::escape;

use crate::style::level_style;

/// Attribution shown in the footer and in `ExtendedData`.
pub const SOURCE_NAME: &str = "SafeAirspace.net";

/// Everything a balloon shows for one advisory.
#[derive(Debug, Clone, Copy)]
pub struct Description<'a> {
    pub name: &'a str,
    pub level: RiskLevel,
    pub news: Option<&'a str>,
    pub warning: Option<&'a str>,
    pub notices: &'a [NoticeRecord],
    pub detail_url: &'a str,
    pub timestamp: &'a str,
}

impl Description<'_> {
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!("<h2>{}</h2>\n", escape(self.name));
        html.push_str(&format!(
            "<h3 style=\"color: {}\">Risk Level {}: {}</h3>\n",
            level_style(self.level).heading_color,
            self.level.number(),
            self.level.label()
        ));

        if let Some(news) = self.news.filter(|text| !text.is_empty()) {
            html.push_str(&format!("<h4>Latest News:</h4>\n<p>{}</p>\n", escape(news)));
        }
        if let Some(warning) = self.warning.filter(|text| !text.is_empty()) {
            html.push_str(&format!(
                "<h4>Warning Summary:</h4>\n<p>{}</p>\n",
                escape(warning)
            ));
        }
        if !self.notices.is_empty() {
            html.push_str(&notice_table(self.notices));
        }

        html.push_str(&format!(
            "<p><a href=\"{}\">View Full Details on {SOURCE_NAME}</a></p>\n",
            escape(self.detail_url)
        ));
        html.push_str(&format!(
            "<p><i>Data source: {SOURCE_NAME} | Updated: {}</i></p>",
            escape(self.timestamp)
        ));
        html
    }
}

fn notice_table(notices: &[NoticeRecord]) -> String {
    let mut html = format!("<h4>Active NOTAMs ({}):</h4>\n", notices.len());
    html.push_str(
        "<table border=\"1\" cellpadding=\"5\" style=\"border-collapse: collapse; width: 100%;\">\n",
    );
    html.push_str(
        "<tr style=\"background-color: #333;\"><th>Source</th><th>Reference</th><th>Issued</th><th>Valid To</th></tr>\n",
    );

    for notice in notices {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&notice.source),
            escape(&notice.reference),
            escape(&notice.issued_at),
            escape(&notice.valid_until)
        ));
        if !notice.summary.is_empty() {
            html.push_str(&format!(
                "<tr><td colspan=\"4\" style=\"font-size: 0.9em; padding: 8px;\"><strong>Summary:</strong> {}</td></tr>\n",
                escape(&notice.summary)
            ));
        }
    }

    html.push_str("</table>\n");
    html
}
