// Body formatters for the three supported representations.
// None of them can fail: a payload with an empty chain still renders a
// minimal, well-formed document.

use serde_json::json;
use tracing::error;

use crate::rendering::payload::{ErrorEntry, ErrorPayload};

/// Pretty-printed JSON object starting with `{`
pub fn render_json(payload: &ErrorPayload) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        error!("Failed to serialize error payload: {err}");
        json!({ "message": payload.message }).to_string()
    })
}

/// `<error>` document with one nested `<error>` per chain entry
pub fn render_xml(payload: &ErrorPayload) -> String {
    let mut xml: String = String::from("<error>\n");
    xml.push_str(&format!("  <message>{}</message>\n", escape_xml(&payload.message)));

    for entry in payload.entries() {
        xml.push_str("  <error>\n");
        xml.push_str(&format!("    <type>{}</type>\n", escape_xml(&entry.kind)));
        xml.push_str(&format!("    <code>{}</code>\n", entry.code));
        xml.push_str(&format!("    <message>{}</message>\n", cdata(&entry.message)));
        xml.push_str(&format!("    <file>{}</file>\n", escape_xml(&entry.file)));
        xml.push_str(&format!("    <line>{}</line>\n", entry.line));
        xml.push_str(&format!("    <trace>{}</trace>\n", cdata(&entry.trace_text())));
        xml.push_str("  </error>\n");
    }

    xml.push_str("</error>");
    xml
}

/// `<html>` document titled with the payload message
pub fn render_html(payload: &ErrorPayload) -> String {
    let title: String = escape_html(&payload.message);

    let content: String = match payload.entries().split_first() {
        Some((outer, causes)) => {
            let mut html: String = String::from(
                "<p>The application could not run because of the following error:</p>",
            );
            html.push_str("<h2>Details</h2>");
            html.push_str(&html_entry(outer));
            for cause in causes {
                html.push_str("<h2>Previous error</h2>");
                html.push_str(&html_entry(cause));
            }
            html
        }
        None => {
            "<p>A website error has occurred. Sorry for the temporary inconvenience.</p>".to_string()
        }
    };

    format!(
        "<html><head><meta http-equiv='Content-Type' content='text/html; charset=utf-8'>\
         <title>{title}</title><style>body{{margin:0;padding:30px;font:12px/1.5 Helvetica,Arial,Verdana,sans-serif;}}\
         h1{{margin:0;font-size:48px;font-weight:normal;line-height:48px;}}\
         strong{{display:inline-block;width:65px;}}</style></head>\
         <body><h1>{title}</h1>{content}</body></html>"
    )
}

fn html_entry(entry: &ErrorEntry) -> String {
    let mut html: String = format!("<div><strong>Type:</strong> {}</div>", escape_html(&entry.kind));

    if entry.code != 0 {
        html.push_str(&format!("<div><strong>Code:</strong> {}</div>", entry.code));
    }
    html.push_str(&format!(
        "<div><strong>Message:</strong> {}</div>",
        escape_html(&entry.message)
    ));
    if !entry.file.is_empty() {
        html.push_str(&format!("<div><strong>File:</strong> {}</div>", escape_html(&entry.file)));
        html.push_str(&format!("<div><strong>Line:</strong> {}</div>", entry.line));
    }
    if !entry.trace.is_empty() {
        html.push_str("<h2>Trace</h2>");
        html.push_str(&format!("<pre>{}</pre>", escape_html(&entry.trace_text())));
    }

    html
}

/// Wraps text in a CDATA section; an embedded `]]>` is split across two sections
fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

fn escape_xml(text: &str) -> String {
    let mut escaped: String = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_html(text: &str) -> String {
    escape_xml(text).replace("&apos;", "&#039;")
}
