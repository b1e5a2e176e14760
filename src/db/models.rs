use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_TITLE: &str = "Explore this content with AI:";
pub const DEFAULT_POST_TYPE: &str = "post";

// ============================================================================
// Standard buttons
// ============================================================================

/// The six built-in AI provider targets. Declaration order is the render order,
/// and `Ord` follows it so `BTreeMap<ButtonKey, _>` iterates the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKey {
    Gemini,
    Chatgpt,
    Perplexity,
    Claude,
    MetaAi,
    Grok,
}

impl ButtonKey {
    pub const ALL: [ButtonKey; 6] = [
        ButtonKey::Gemini,
        ButtonKey::Chatgpt,
        ButtonKey::Perplexity,
        ButtonKey::Claude,
        ButtonKey::MetaAi,
        ButtonKey::Grok,
    ];

    /// Stable identifier, also used in the per-button CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonKey::Gemini => "gemini",
            ButtonKey::Chatgpt => "chatgpt",
            ButtonKey::Perplexity => "perplexity",
            ButtonKey::Claude => "claude",
            ButtonKey::MetaAi => "meta_ai",
            ButtonKey::Grok => "grok",
        }
    }

    /// Look up a key by its stored identifier.
    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonKey::Gemini => "Gemini",
            ButtonKey::Chatgpt => "ChatGPT",
            ButtonKey::Perplexity => "Perplexity",
            ButtonKey::Claude => "Claude",
            ButtonKey::MetaAi => "Meta AI",
            ButtonKey::Grok => "Grok",
        }
    }
}

impl std::fmt::Display for ButtonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomButton {
    #[serde(default)]
    pub label: String,
    #[serde(default, rename = "url")]
    pub url_template: String,
}

impl CustomButton {
    pub fn new(label: impl Into<String>, url_template: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url_template: url_template.into(),
        }
    }

    /// Rows with an empty label or URL are never rendered.
    pub fn is_renderable(&self) -> bool {
        !self.label.is_empty() && !self.url_template.is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty() && self.url_template.trim().is_empty()
    }
}

/// Global plugin settings, stored as one JSON document in the options store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "show_on_all_posts")]
    pub show_on_all_by_default: bool,
    #[serde(rename = "post_types")]
    pub enabled_post_types: BTreeSet<String>,
    pub title: String,
    /// An empty map means every standard button is enabled.
    #[serde(rename = "buttons", deserialize_with = "lenient_button_map")]
    pub standard_buttons: BTreeMap<ButtonKey, bool>,
    pub custom_buttons: Vec<CustomButton>,
}

/// Read the stored `buttons` map, skipping keys that are not a known
/// provider. A non-empty map with no known keys still enables nothing.
fn lenient_button_map<'de, D>(deserializer: D) -> Result<BTreeMap<ButtonKey, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, bool>::deserialize(deserializer)?;
    let mut known = BTreeMap::new();
    for (name, enabled) in &raw {
        match ButtonKey::from_key(name) {
            Some(key) => {
                known.insert(key, *enabled);
            }
            None => tracing::debug!(button = %name, "Ignoring unknown stored button key"),
        }
    }

    if known.is_empty() && !raw.is_empty() {
        return Ok(ButtonKey::ALL.into_iter().map(|key| (key, false)).collect());
    }
    Ok(known)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_on_all_by_default: false,
            enabled_post_types: BTreeSet::from([DEFAULT_POST_TYPE.to_string()]),
            title: DEFAULT_TITLE.into(),
            standard_buttons: BTreeMap::new(),
            custom_buttons: Vec::new(),
        }
    }
}

impl Settings {
    /// Post types with blanks removed; an empty result collapses to `{"post"}`.
    pub fn effective_post_types(&self) -> BTreeSet<&str> {
        let types: BTreeSet<&str> = self
            .enabled_post_types
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if types.is_empty() {
            BTreeSet::from([DEFAULT_POST_TYPE])
        } else {
            types
        }
    }

    pub fn is_post_type_enabled(&self, item_type: &str) -> bool {
        self.effective_post_types().contains(item_type)
    }

    /// Enabled standard buttons in fixed key order. Empty mapping means all.
    pub fn enabled_standard_buttons(&self) -> Vec<ButtonKey> {
        if self.standard_buttons.is_empty() {
            return ButtonKey::ALL.to_vec();
        }
        ButtonKey::ALL
            .into_iter()
            .filter(|key| self.standard_buttons.get(key).copied().unwrap_or(false))
            .collect()
    }

    pub fn is_standard_button_enabled(&self, key: ButtonKey) -> bool {
        self.standard_buttons.is_empty()
            || self.standard_buttons.get(&key).copied().unwrap_or(false)
    }
}

// ============================================================================
// Per-item override
// ============================================================================

/// Show/hide flags for one content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentOverride {
    pub show: bool,
    pub hide: bool,
}

/// The three states the two override flags collapse to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideState {
    ForcedHide,
    ForcedShow,
    Default,
}

impl ContentOverride {
    /// Hide wins when both flags are set.
    pub fn normalized(show: bool, hide: bool) -> Self {
        Self {
            show: show && !hide,
            hide,
        }
    }

    pub fn state(&self) -> OverrideState {
        if self.hide {
            OverrideState::ForcedHide
        } else if self.show {
            OverrideState::ForcedShow
        } else {
            OverrideState::Default
        }
    }
}

// ============================================================================
// Host content context
// ============================================================================

/// A content item as seen by the render hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: i64,
    pub item_type: String,
    pub permalink: String,
}

/// What the host knows about the current request when a hook fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub is_singular: bool,
    pub item: Option<ContentItem>,
}

impl RenderContext {
    pub fn singular(item: ContentItem) -> Self {
        Self {
            is_singular: true,
            item: Some(item),
        }
    }

    /// The current item, or `None` outside a singular-content view.
    pub fn current_item(&self) -> Option<&ContentItem> {
        if self.is_singular {
            self.item.as_ref()
        } else {
            None
        }
    }
}
