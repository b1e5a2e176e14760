//! Entry points the host platform calls while rendering a page.
//!
//! Neither hook returns an error. A store failure is logged and treated
//! as "no buttons"; the page always renders.

use serde::Serialize;

use crate::db::models::{ContentItem, RenderContext, Settings};
use crate::db::repos::{item_meta, settings};
use crate::engine::{build_fragment, should_show};
use crate::AppState;

pub const STYLE_HANDLE: &str = "ai-share-buttons-style";
pub const STYLESHEET_PATH: &str = "style.css";

/// Stylesheet body, for hosts that serve assets from the crate.
pub const STYLESHEET: &str = include_str!("../assets/style.css");

/// Stylesheet the host should attach to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleAsset {
    pub handle: &'static str,
    pub href: String,
    pub version: String,
}

pub type ContentFilter = fn(&AppState, &RenderContext, &str) -> String;
pub type AssetHook = fn(&AppState, &RenderContext) -> Option<StyleAsset>;

/// Callbacks to register with the host, wired once at startup.
#[derive(Clone, Copy)]
pub struct Hooks {
    pub content_filter: ContentFilter,
    pub enqueue_assets: AssetHook,
}

impl Hooks {
    pub fn wire() -> Self {
        Self {
            content_filter: render_content,
            enqueue_assets,
        }
    }
}

/// Load settings and the item's override, then decide. Returns the settings
/// snapshot and item when buttons should appear.
fn resolve<'a>(state: &AppState, ctx: &'a RenderContext) -> Option<(Settings, &'a ContentItem)> {
    let Some(item) = ctx.current_item() else {
        tracing::debug!("No singular item in context, skipping buttons");
        return None;
    };

    let settings = match settings::load(&state.db) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "Could not load settings, skipping buttons");
            return None;
        }
    };
    let item_override = match item_meta::load_override(&state.db, item.id) {
        Ok(o) => o,
        Err(e) => {
            tracing::warn!(item_id = item.id, error = %e, "Could not load override, skipping buttons");
            return None;
        }
    };

    let show = should_show(&settings, &item.item_type, &item_override);
    tracing::debug!(
        item_id = item.id,
        item_type = %item.item_type,
        state = ?item_override.state(),
        show,
        "Visibility resolved"
    );
    show.then_some((settings, item))
}

/// Whether buttons appear for the current request.
pub fn should_show_for(state: &AppState, ctx: &RenderContext) -> bool {
    resolve(state, ctx).is_some()
}

/// Content filter: returns `content` unchanged, or with the button row appended.
pub fn render_content(state: &AppState, ctx: &RenderContext, content: &str) -> String {
    match resolve(state, ctx) {
        Some((settings, item)) => {
            let fragment = build_fragment(&settings, &item.permalink);
            let mut out = String::with_capacity(content.len() + fragment.len());
            out.push_str(content);
            out.push_str(&fragment);
            out
        }
        None => content.to_string(),
    }
}

/// Asset hook: the stylesheet to attach, only when the content filter
/// would append buttons for the same request.
pub fn enqueue_assets(state: &AppState, ctx: &RenderContext) -> Option<StyleAsset> {
    if !should_show_for(state, ctx) {
        return None;
    }
    Some(StyleAsset {
        handle: STYLE_HANDLE,
        href: state.config.asset_url(STYLESHEET_PATH),
        version: state.config.version.clone(),
    })
}
