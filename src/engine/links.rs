//! Turns settings plus a permalink into the appended HTML fragment.

use crate::db::models::{CustomButton, Settings};
use crate::engine::buttons::{self, button_config};
use crate::engine::html::{escape_attr, escape_text};
use crate::engine::prompt::{encode_component, encoded_prompt};
use crate::validation::{check_http_url, strip_at_prefix};

pub const URL_PLACEHOLDER: &str = "{url}";
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

/// Expand a custom URL template. Leading `@` characters are dropped first.
pub fn expand_template(template: &str, encoded_permalink: &str, encoded_prompt: &str) -> String {
    strip_at_prefix(template)
        .replace(URL_PLACEHOLDER, encoded_permalink)
        .replace(PROMPT_PLACEHOLDER, encoded_prompt)
}

/// Expand and validate a custom button's href. `None` means skip the button.
pub fn custom_href(
    button: &CustomButton,
    encoded_permalink: &str,
    encoded_prompt: &str,
) -> Option<String> {
    if !button.is_renderable() {
        return None;
    }
    let expanded = expand_template(&button.url_template, encoded_permalink, encoded_prompt);
    match check_http_url(&expanded) {
        Ok(_) => Some(expanded),
        Err(issue) => {
            tracing::warn!(
                label = %button.label,
                reason = issue.message(),
                "Skipping custom button with unusable URL"
            );
            None
        }
    }
}

fn push_anchor(html: &mut String, href: &str, class_suffix: &str, icon: &str, label: &str) {
    html.push_str(&format!(
        r#"<a href="{}" target="_blank" rel="noopener" class="ui-button ai-share-button ai-share-button-{}">"#,
        escape_attr(href),
        escape_attr(class_suffix),
    ));
    html.push_str(icon);
    html.push_str(&format!("<span>{}</span></a>", escape_text(label)));
}

/// Build the button row for a content item.
///
/// Standard buttons come first in fixed key order, then custom buttons in
/// stored order. A custom button whose expanded URL is not an absolute
/// http(s) URL is left out; it never affects the other buttons.
pub fn build_fragment(settings: &Settings, permalink: &str) -> String {
    let prompt = encoded_prompt(permalink);
    let encoded_permalink = encode_component(permalink);

    let mut html = String::from(r#"<div class="ai-share-buttons-container">"#);
    html.push_str(&format!(
        r#"<div class="ai-share-buttons-heading"><p><strong>{}</strong></p></div>"#,
        escape_text(&settings.title)
    ));
    html.push_str(r#"<div class="ai-share-buttons">"#);

    for key in settings.enabled_standard_buttons() {
        let config = button_config(key, &prompt);
        if check_http_url(&config.url).is_err() {
            tracing::warn!(button = %key, "Standard button produced an unusable URL");
            continue;
        }
        push_anchor(&mut html, &config.url, key.as_str(), config.icon, config.label);
    }

    for button in &settings.custom_buttons {
        if let Some(href) = custom_href(button, &encoded_permalink, &prompt) {
            push_anchor(&mut html, &href, "custom", buttons::generic_icon(), &button.label);
        }
    }

    html.push_str("</div></div>");
    html
}
