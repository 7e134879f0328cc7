//! Layout shared by every routed view: head links, navbar and page outlet.

use dioxus::prelude::*;

use super::nav::Navbar;
use crate::app::Route;

/// Main layout wrapping all pages.
#[component]
pub fn Layout() -> Element {
    let version = env!("EXILE_VERSION");

    rsx! {
        document::Title { "Exile Leveling" }
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/navbar.css")
        }

        Navbar {}
        main { class: "content",
            Outlet::<Route> {}
        }
        footer { class: "footer",
            small { "exile-leveling v{version}" }
        }
    }
}
