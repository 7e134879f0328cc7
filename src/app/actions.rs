//! Navbar items and the side effects they trigger.
//!
//! Every item maps to one [`NavAction`]. Components never touch the router,
//! the clipboard or the progress store directly: they collapse the panel and
//! hand the action to [`run_action`] together with a [`NavEffects`] impl.

use async_trait::async_trait;
use thiserror::Error;

use super::api::NavSettings;
use super::nav_state::PanelState;
use crate::route::LevelingRoute;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("route unavailable: {0}")]
    RouteUnavailable(String),

    #[error("failed to serialize route: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("{0} is only available in browser")]
    Unsupported(&'static str),
}

/// In-app destinations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Route view at `/`
    Routes,
    /// Build import view at `/build`
    Build,
    /// Anchor of one act within the route view
    Act(u8),
}

impl NavTarget {
    pub fn path(&self) -> String {
        match self {
            NavTarget::Routes => "/".to_string(),
            NavTarget::Build => "/build".to_string(),
            NavTarget::Act(n) => format!("/#{}", act_anchor(*n)),
        }
    }

    /// Fragment to scroll to after the view changed, if any
    pub fn anchor(&self) -> Option<String> {
        match self {
            NavTarget::Act(n) => Some(act_anchor(*n)),
            _ => None,
        }
    }
}

/// Element id of an act section on the route view
pub fn act_anchor(act: u8) -> String {
    format!("act-{}", act)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Map,
    Tools,
    Undo,
    Clipboard,
    Feedback,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Map => "🗺",
            NavIcon::Tools => "🔧",
            NavIcon::Undo => "↺",
            NavIcon::Clipboard => "📋",
            NavIcon::Feedback => "💬",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Navigate(NavTarget),
    /// Clear both route progress and gem progress
    ClearProgress,
    /// Copy the current route to the clipboard as JSON
    CopyRoute,
    /// Open a URL in a new browsing context
    OpenExternal(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub icon: Option<NavIcon>,
    pub action: NavAction,
}

impl NavItem {
    fn new(label: impl Into<String>, icon: Option<NavIcon>, action: NavAction) -> Self {
        Self {
            label: label.into(),
            icon,
            action,
        }
    }
}

/// Top-level navbar entry: a leaf item or an accordion group
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEntry {
    Item(NavItem),
    Group { label: String, items: Vec<NavItem> },
}

/// `Act 1` through `Act {act_count}`
pub fn act_items(act_count: u8) -> Vec<NavItem> {
    (1..=act_count)
        .map(|n| NavItem::new(format!("Act {}", n), None, NavAction::Navigate(NavTarget::Act(n))))
        .collect()
}

/// Navbar entries in display order
pub fn nav_entries(settings: &NavSettings) -> Vec<NavEntry> {
    vec![
        NavEntry::Item(NavItem::new(
            "路线",
            Some(NavIcon::Map),
            NavAction::Navigate(NavTarget::Routes),
        )),
        NavEntry::Item(NavItem::new(
            "BD导入",
            Some(NavIcon::Tools),
            NavAction::Navigate(NavTarget::Build),
        )),
        NavEntry::Group {
            label: "章节".to_string(),
            items: act_items(settings.act_count),
        },
        NavEntry::Item(NavItem::new(
            "重置进程",
            Some(NavIcon::Undo),
            NavAction::ClearProgress,
        )),
        NavEntry::Item(NavItem::new(
            "常规路线",
            Some(NavIcon::Clipboard),
            NavAction::CopyRoute,
        )),
        NavEntry::Item(NavItem::new(
            "QQ频道反馈",
            Some(NavIcon::Feedback),
            NavAction::OpenExternal(settings.feedback_url.clone()),
        )),
    ]
}

/// Item click: collapse the panel and return the action to run.
pub fn activate(panel: &mut PanelState, item: &NavItem) -> NavAction {
    panel.collapse();
    item.action.clone()
}

/// Side effects available to navbar actions
#[async_trait(?Send)]
pub trait NavEffects {
    fn navigate(&self, target: &NavTarget) -> Result<(), NavError>;

    fn clear_route_progress(&self);

    fn clear_gem_progress(&self);

    fn open_external(&self, url: &str) -> Result<(), NavError>;

    /// Current computed route; may need to fetch it first
    async fn current_route(&self) -> Result<LevelingRoute, NavError>;

    async fn write_clipboard(&self, text: &str) -> Result<(), NavError>;
}

/// Run one action against the given effects.
///
/// Synchronous effects complete before the first await, so for everything
/// but `CopyRoute` the returned future resolves on first poll.
pub async fn run_action<E>(action: &NavAction, effects: &E) -> Result<(), NavError>
where
    E: NavEffects + ?Sized,
{
    match action {
        NavAction::Navigate(target) => {
            tracing::debug!("Navigating to {}", target.path());
            effects.navigate(target)
        }
        NavAction::ClearProgress => {
            effects.clear_route_progress();
            effects.clear_gem_progress();
            tracing::info!("Cleared route and gem progress");
            Ok(())
        }
        NavAction::CopyRoute => {
            let route = effects.current_route().await?;
            let text = serde_json::to_string(&route)?;
            effects.write_clipboard(&text).await?;
            tracing::debug!("Copied route ({} sections) to clipboard", route.len());
            Ok(())
        }
        NavAction::OpenExternal(url) => {
            tracing::debug!("Opening {}", url);
            effects.open_external(url)
        }
    }
}
