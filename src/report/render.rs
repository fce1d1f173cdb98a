//! Report renderers.
//!
//! Styling is cosmetic; the contract is which blocks appear and what they
//! contain, and that is decided by [`ReportView`].

use serde::Serialize;

use super::view::{LocationBlock, ReportView};
use crate::config::{OutputFormat, ERROR_SEPARATOR, REPORT_TITLE};

const ENTRY_HEADING: &str = "◈ Entry";
const LANDING_HEADING: &str = "◈ Landing";
const NODE_LABEL: &str = "Selected node ➞";

/// Final output handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
    pub title: String,
    pub body: String,
}

/// Renders a view in the requested format.
pub fn render(view: &ReportView, format: OutputFormat) -> RenderedReport {
    let body = match format {
        OutputFormat::Html => render_html(view),
        OutputFormat::Text => render_text(view),
        OutputFormat::Json => render_json(view),
    };
    RenderedReport {
        title: REPORT_TITLE.to_string(),
        body,
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn block_lines(block: &LocationBlock) -> Vec<String> {
    let mut lines = vec![
        format!("IP: {}", block.ip),
        format!("Location: {}", block.location),
    ];
    if let Some(operator) = &block.operator {
        lines.push(format!("ISP: {}", operator));
    }
    lines
}

fn html_block(heading: &str, color: &str, block: &LocationBlock) -> String {
    let mut html = format!(
        "<span style=\"color:{}; font-weight:bold;\">{}</span><br>",
        color, heading
    );
    for line in block_lines(block) {
        html.push_str(&escape_html(&line));
        html.push_str("<br>");
    }
    html.push_str("<br>");
    html
}

/// Centered paragraph markup for hosts that display HTML messages.
pub fn render_html(view: &ReportView) -> String {
    let mut html = String::from(
        "<p style=\"text-align:center; font-family:-apple-system; font-size:14px; line-height:1.5;\"><br>",
    );
    if let Some(entry) = &view.entry {
        html.push_str(&html_block(ENTRY_HEADING, "#FF9500", entry));
    }
    if let Some(landing) = &view.landing {
        html.push_str(&html_block(LANDING_HEADING, "#007AFF", landing));
    }
    html.push_str(&format!(
        "<span style=\"color:#8E8E93; font-size:12px;\">{} {}</span><br>",
        NODE_LABEL,
        escape_html(&view.node_name)
    ));
    if !view.errors.is_empty() {
        html.push_str(&format!(
            "<br><span style=\"color:#FF3B30; font-size:12px;\">{}</span>",
            escape_html(&view.errors.join(ERROR_SEPARATOR))
        ));
    }
    html.push_str("</p>");
    html
}

/// Plain lines for terminals.
pub fn render_text(view: &ReportView) -> String {
    let mut sections: Vec<String> = Vec::new();
    for (heading, block) in [(ENTRY_HEADING, &view.entry), (LANDING_HEADING, &view.landing)] {
        if let Some(block) = block {
            let mut lines = vec![heading.to_string()];
            lines.extend(block_lines(block));
            sections.push(lines.join("\n"));
        }
    }
    sections.push(format!("{} {}", NODE_LABEL, view.node_name));
    if !view.errors.is_empty() {
        sections.push(view.errors.join(ERROR_SEPARATOR));
    }
    sections.join("\n\n")
}

/// Pretty JSON of the view.
pub fn render_json(view: &ReportView) -> String {
    serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string())
}
