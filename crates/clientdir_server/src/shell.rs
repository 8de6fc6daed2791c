//! Frontend bootstrap document.
//!
//! # Responsibility
//! - Render the HTML shell a single-page app mounts into.
//! - Hand the page component name and its props to the client as JSON.
//!
//! # Invariants
//! - Every interpolated value is HTML-escaped.
//! - No client data is rendered here; the page fetches `/clients` itself.

use serde::Serialize;
use serde_json::Value;

/// Application name used in page titles when none is configured.
pub const DEFAULT_APP_NAME: &str = "Client Directory";
/// Page component rendered at `/`.
pub const CLIENTS_PAGE_COMPONENT: &str = "Clients/Index";

/// Per-process shell settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub app_name: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

/// Payload the frontend reads from the mount element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageShell {
    pub component: String,
    pub props: Value,
    pub url: String,
    #[serde(skip)]
    pub title: String,
}

/// Builds the document title, `"{title} - {app_name}"`.
pub fn page_title(title: &str, app_name: &str) -> String {
    if title.is_empty() {
        app_name.to_string()
    } else {
        format!("{title} - {app_name}")
    }
}

/// Renders the full HTML document for `page`.
pub fn render_shell(page: &PageShell, config: &ShellConfig) -> String {
    // Serializing a struct of strings and a `Value` cannot fail.
    let data_page = serde_json::to_string(page).unwrap_or_else(|_| "{}".to_string());
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <script type=\"module\" src=\"/assets/app.js\" defer></script>\n\
         </head>\n\
         <body>\n\
         <div id=\"app\" data-page=\"{data_page}\"></div>\n\
         </body>\n\
         </html>\n",
        title = escape_html(&page_title(&page.title, &config.app_name)),
        data_page = escape_html(&data_page),
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
