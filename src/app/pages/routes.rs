//! Route view: the leveling route, one section per act.

use dioxus::prelude::*;

use crate::app::actions::act_anchor;
use crate::app::progress::use_progress;
use crate::app::route_context::use_route;
use crate::route::{step_count, RouteSection};

#[component]
pub fn Routes() -> Element {
    let route = use_route();
    let progress = use_progress();

    let Some(sections) = route.get() else {
        return rsx! {
            article { aria_busy: "true", "Loading route..." }
        };
    };

    if sections.is_empty() {
        return rsx! {
            article { "No route loaded." }
        };
    }

    let total = step_count(&sections);
    let done = progress.completed_steps();

    rsx! {
        p { class: "route-summary", "{done} / {total}" }
        for (index, section) in sections.into_iter().enumerate() {
            RouteSectionView { key: "{index}", act: index as u8 + 1, section }
        }
    }
}

#[component]
fn RouteSectionView(act: u8, section: RouteSection) -> Element {
    let progress = use_progress();
    let anchor = act_anchor(act);

    rsx! {
        section { id: "{anchor}", class: "route-section",
            h2 { "{section.name}" }
            ol {
                for step in section.steps {
                    li { key: "{step.id}",
                        label {
                            input {
                                r#type: "checkbox",
                                checked: progress.is_step_done(&step.id),
                                onchange: {
                                    let id = step.id.clone();
                                    move |_| progress.toggle_step(&id)
                                },
                            }
                            " {step.text}"
                        }
                    }
                }
            }
        }
    }
}
