/// Canonical storage key constants.
///
/// Use these instead of raw string literals to prevent typo-based key mismatches.

/// Options-store key holding the JSON-encoded global settings document.
pub const OPTIONS_KEY: &str = "ai_share_buttons_options";

/// Per-item attribute key: buttons explicitly shown on this item.
pub const META_SHOW: &str = "_ai_share_buttons_show";

/// Per-item attribute key: buttons explicitly hidden on this item.
pub const META_HIDE: &str = "_ai_share_buttons_hide";
