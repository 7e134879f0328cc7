//! Collapsible navigation bar.
//!
//! The panel is toggled by the bars icon. Every item collapses it when
//! clicked and runs its action in a spawned task; failures are only logged.

use dioxus::prelude::*;

use crate::app::actions::{activate, nav_entries, run_action, NavEntry, NavIcon, NavItem};
use crate::app::browser_effects::use_browser_effects;
use crate::app::nav_state::{expand_classes, GroupState, PanelState};
use crate::app::settings_context::use_settings;

#[derive(Props, Clone, PartialEq)]
pub struct NavbarItemProps {
    pub label: String,
    #[props(!optional)]
    pub icon: Option<NavIcon>,
    /// Panel expansion flag
    pub expand: bool,
    pub onclick: EventHandler<MouseEvent>,
}

/// A single clickable navbar row.
#[component]
pub fn NavbarItem(props: NavbarItemProps) -> Element {
    let class = expand_classes(&["nav-item", "nav-element"], props.expand);
    let onclick = props.onclick;

    rsx! {
        div { class: "{class}", onclick: move |evt| onclick.call(evt),
            if let Some(icon) = props.icon {
                span { class: "inline-icon", "{icon.glyph()}" }
                " "
            }
            "{props.label}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavAccordionProps {
    pub label: String,
    /// Enclosing panel's expansion flag
    pub nav_expand: bool,
    #[props(default)]
    pub class: String,
    pub children: Element,
}

/// Expandable group of navbar items.
///
/// Collapses whenever the enclosing panel's flag changes.
#[component]
pub fn NavAccordion(props: NavAccordionProps) -> Element {
    let mut group = use_signal(|| GroupState::new(props.nav_expand));

    use_effect(use_reactive((&props.nav_expand,), move |(nav_expand,)| {
        if group.write().observe_panel(nav_expand) {
            tracing::trace!("Accordion collapsed with panel");
        }
    }));

    let expanded = group.read().is_expanded();

    rsx! {
        div { class: "{props.class}", onclick: move |_| group.write().toggle(),
            div { class: "nav-element", "{props.label}" }
            hr { class: expand_classes(&["separator"], expanded) }
            div { class: expand_classes(&["nav-accordion", "nav-items"], expanded),
                {props.children}
            }
        }
    }
}

/// Top-level navigation panel.
#[component]
pub fn Navbar() -> Element {
    let mut panel = use_signal(PanelState::default);
    let settings = use_settings();
    let effects = use_browser_effects();

    let on_item = use_callback(move |item: NavItem| {
        let action = activate(&mut panel.write(), &item);
        let effects = effects.clone();
        spawn(async move {
            if let Err(e) = run_action(&action, &effects).await {
                tracing::warn!("Navbar action {:?} failed: {}", action, e);
            }
        });
    });

    let expand = panel.read().is_expanded();
    let entries = nav_entries(&settings.nav());

    rsx! {
        div { class: expand_classes(&["navbar"], expand),
            div { class: expand_classes(&["nav-holder"], expand),
                button {
                    class: "nav-icon",
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": "{expand}",
                    onclick: move |_| panel.write().toggle(),
                    "☰"
                }
                hr { class: expand_classes(&["separator"], expand) }
                div { class: expand_classes(&["nav-main", "nav-items"], expand),
                    for entry in entries {
                        {render_entry(entry, expand, on_item)}
                    }
                }
            }
            hr {}
        }
    }
}

fn render_entry(entry: NavEntry, expand: bool, on_item: Callback<NavItem>) -> Element {
    match entry {
        NavEntry::Item(item) => render_item(item, expand, on_item),
        NavEntry::Group { label, items } => rsx! {
            NavAccordion {
                key: "{label}",
                label: label.clone(),
                nav_expand: expand,
                class: expand_classes(&["nav-item"], expand),
                for item in items {
                    {render_item(item, expand, on_item)}
                }
            }
        },
    }
}

fn render_item(item: NavItem, expand: bool, on_item: Callback<NavItem>) -> Element {
    let label = item.label.clone();
    let icon = item.icon;

    rsx! {
        NavbarItem {
            key: "{label}",
            label: label.clone(),
            icon,
            expand,
            onclick: move |_| on_item.call(item.clone()),
        }
    }
}
