use url::Url;

use crate::db::models::CustomButton;
use crate::error::{AppError, ButtonUrlError};

const UNNAMED: &str = "Unnamed";

/// Why a candidate link URL was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlIssue {
    /// Does not start with `http://` or `https://`.
    Scheme,
    /// Has an http(s) prefix but is not a well-formed absolute URL.
    Format,
}

impl UrlIssue {
    pub fn message(self) -> &'static str {
        match self {
            UrlIssue::Scheme => "URL must start with http:// or https://",
            UrlIssue::Format => "Invalid URL format",
        }
    }
}

/// Drop any leading `@` characters (browsers sometimes prepend them when
/// a URL is pasted into a form field).
pub fn strip_at_prefix(raw: &str) -> &str {
    raw.trim_start_matches('@')
}

/// Confirm `candidate` is an absolute http(s) URL with a host.
///
/// Whitespace and control characters are refused outright rather than
/// being percent-encoded by the parser.
pub fn check_http_url(candidate: &str) -> Result<Url, UrlIssue> {
    if !(candidate.starts_with("http://") || candidate.starts_with("https://")) {
        return Err(UrlIssue::Scheme);
    }
    if candidate.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlIssue::Format);
    }
    // The parser skips extra slashes after the scheme, so `https:///host`
    // would otherwise come back with a host.
    let authority = candidate.split_once("://").map_or("", |(_, rest)| rest);
    if authority.starts_with(['/', '\\']) {
        return Err(UrlIssue::Format);
    }

    let parsed = Url::parse(candidate).map_err(|_| UrlIssue::Format)?;
    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlIssue::Format),
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(UrlIssue::Format),
    }
}

/// Save-time check for every custom button row with a non-empty URL.
///
/// Placeholders such as `{url}` and `{prompt}` are left as literal text here.
/// Returns one error per offending row; rows are numbered from 1.
pub fn validate_custom_buttons(buttons: &[CustomButton]) -> Result<(), AppError> {
    let errors: Vec<ButtonUrlError> = buttons
        .iter()
        .enumerate()
        .filter(|(_, button)| !button.url_template.is_empty())
        .filter_map(|(index, button)| {
            let cleaned = strip_at_prefix(&button.url_template);
            check_http_url(cleaned).err().map(|issue| ButtonUrlError {
                row: index + 1,
                label: if button.label.is_empty() {
                    UNNAMED.to_string()
                } else {
                    button.label.clone()
                },
                reason: issue.message().to_string(),
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        for error in &errors {
            tracing::debug!(row = error.row, reason = %error.reason, "Custom button rejected");
        }
        Err(AppError::InvalidSettings(errors))
    }
}
