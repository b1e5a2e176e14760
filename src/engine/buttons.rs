//! Built-in AI provider targets.
//!
//! Each provider has a fixed URL pattern with a single `{prompt}` insertion
//! point, a display label and an inline SVG icon embedded at compile time.

use crate::db::models::ButtonKey;

/// Insertion point for the encoded prompt in a standard URL pattern.
pub const PROMPT_SLOT: &str = "{prompt}";

const GEMINI_ICON: &str = include_str!("../../assets/icons/gemini.svg");
const CHATGPT_ICON: &str = include_str!("../../assets/icons/chatgpt.svg");
const PERPLEXITY_ICON: &str = include_str!("../../assets/icons/perplexity.svg");
const CLAUDE_ICON: &str = include_str!("../../assets/icons/claude.svg");
const META_AI_ICON: &str = include_str!("../../assets/icons/meta_ai.svg");
const GROK_ICON: &str = include_str!("../../assets/icons/grok.svg");
const GENERIC_ICON: &str = include_str!("../../assets/icons/generic.svg");

/// A resolved standard button. Derived per render, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonConfig {
    pub key: ButtonKey,
    pub url: String,
    pub label: &'static str,
    pub icon: &'static str,
}

pub fn url_pattern(key: ButtonKey) -> &'static str {
    match key {
        ButtonKey::Gemini => "https://www.google.com/search?udm=50&q={prompt}",
        ButtonKey::Chatgpt => "https://chatgpt.com/?q={prompt}",
        ButtonKey::Perplexity => "https://www.perplexity.ai/?q={prompt}",
        ButtonKey::Claude => "https://claude.ai/new?q={prompt}",
        ButtonKey::MetaAi => "https://www.meta.ai/?prompt={prompt}",
        ButtonKey::Grok => "https://x.com/i/grok?focus=1&text={prompt}",
    }
}

pub fn icon(key: ButtonKey) -> &'static str {
    let svg = match key {
        ButtonKey::Gemini => GEMINI_ICON,
        ButtonKey::Chatgpt => CHATGPT_ICON,
        ButtonKey::Perplexity => PERPLEXITY_ICON,
        ButtonKey::Claude => CLAUDE_ICON,
        ButtonKey::MetaAi => META_AI_ICON,
        ButtonKey::Grok => GROK_ICON,
    };
    svg.trim_end()
}

/// Icon used for every administrator-defined button.
pub fn generic_icon() -> &'static str {
    GENERIC_ICON.trim_end()
}

/// Resolve a standard button against an already percent-encoded prompt.
pub fn button_config(key: ButtonKey, encoded_prompt: &str) -> ButtonConfig {
    ButtonConfig {
        key,
        url: url_pattern(key).replacen(PROMPT_SLOT, encoded_prompt, 1),
        label: key.label(),
        icon: icon(key),
    }
}
