//! Page Rendering
//!
//! All pages share one chrome: full-viewport layout, zero margins, no
//! decorations. Emitted before any body content so nothing renders with
//! default styling.

/// Shared page styles
const STYLE: &str = "\
* { box-sizing: border-box; }\n\
html, body { margin: 0; padding: 0; width: 100%; height: 100%; background: #ffffff; \
font-family: system-ui, -apple-system, sans-serif; }\n\
.login-wrap { max-width: 360px; margin: 20vh auto 0; padding: 0 1rem; }\n\
.login-wrap h1 { font-size: 1.25rem; margin: 0 0 1rem; }\n\
.login-wrap form { display: flex; flex-direction: column; gap: 0.75rem; }\n\
.login-wrap input[type=password] { padding: 0.5rem; font-size: 1rem; }\n\
.login-wrap button { padding: 0.5rem; font-size: 1rem; cursor: pointer; }\n\
.error { color: #b00020; margin: 0.75rem 0 0; }\n\
.notice { max-width: 360px; margin: 20vh auto 0; padding: 0 1rem; text-align: center; }\n\
.config-error { max-width: 480px; margin: 20vh auto 0; padding: 0 1rem; color: #b00020; }\n\
.fullscreen-container { position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; \
z-index: 9999; overflow: hidden; }\n\
.fullscreen-container iframe { width: 100%; height: 100%; border: none; }\n";

/// Assemble a full HTML document with the shared chrome
fn page(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{}</title>\n{}<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        head_extra,
        STYLE,
        body
    )
}

/// Centered login form, with an optional inline error line
pub fn login_page(title: &str, error: Option<&str>) -> String {
    let error_line = match error {
        Some(message) => format!("<p class=\"error\">{}</p>", escape_html(message)),
        None => String::new(),
    };
    let body = format!(
        "<div class=\"login-wrap\">\n<h1>&#128274; Restricted access</h1>\n\
<form method=\"post\" action=\"/login\">\n\
<input type=\"password\" name=\"password\" placeholder=\"Password\" autofocus>\n\
<button type=\"submit\">Unlock</button>\n</form>\n{}\n</div>",
        error_line
    );
    page(title, "", &body)
}

/// Full-viewport borderless frame for the configured target URL
pub fn viewer_page(title: &str, target_url: &str) -> String {
    let body = format!(
        "<div class=\"fullscreen-container\">\n<iframe src=\"{}\"></iframe>\n</div>",
        escape_attr(target_url)
    );
    page(title, "", &body)
}

/// Transient success indicator; reloads `/` after a short pause so the
/// next pass re-evaluates with the new cookie and session state
pub fn success_page(title: &str) -> String {
    let body = "<div class=\"notice\"><p>Authenticated. Loading&hellip;</p></div>";
    page(
        title,
        "<meta http-equiv=\"refresh\" content=\"0.5; url=/\">\n",
        body,
    )
}

/// Configuration error naming the missing key; nothing renders below it
pub fn config_error_page(title: &str, missing_key: &str) -> String {
    let body = format!(
        "<div class=\"config-error\">\n<p>Configuration error: '{}' is not set.</p>\n</div>",
        escape_html(missing_key)
    );
    page(title, "", &body)
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_has_form_and_no_error_by_default() {
        let html = login_page("Sheet Viewer", None);
        assert!(html.contains("method=\"post\""));
        assert!(html.contains("action=\"/login\""));
        assert!(html.contains("type=\"password\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_login_page_renders_inline_error() {
        let html = login_page("Sheet Viewer", Some("Incorrect password."));
        assert!(html.contains("<p class=\"error\">Incorrect password.</p>"));
        // The form is still there for an immediate retry
        assert!(html.contains("action=\"/login\""));
    }

    #[test]
    fn test_viewer_page_embeds_escaped_url() {
        let html = viewer_page("Sheet Viewer", "https://example.com/sheet?a=1&b=\"x\"");
        assert!(html.contains("class=\"fullscreen-container\""));
        assert!(html.contains("<iframe src=\"https://example.com/sheet?a=1&amp;b=&quot;x&quot;\">"));
        assert!(html.contains("z-index: 9999"));
    }

    #[test]
    fn test_success_page_reloads_root() {
        let html = success_page("Sheet Viewer");
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("url=/"));
    }

    #[test]
    fn test_config_error_page_names_key() {
        let html = config_error_page("Sheet Viewer", "TARGET_SHEET_URL");
        assert!(html.contains("Configuration error: 'TARGET_SHEET_URL' is not set."));
        assert!(!html.contains("<iframe"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_chrome_fills_viewport() {
        let html = login_page("Sheet Viewer", None);
        assert!(html.contains("margin: 0; padding: 0;"));
        assert!(html.contains("width: 100vw; height: 100vh;"));
    }
}
