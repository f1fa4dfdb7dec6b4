use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Header stylesheet (linked by the component so platforms get it for free)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

// Fixed navigation labels. The site ships in one language; the footer's
// language selector is decorative.
const NAV_HOME: &str = "Home";
const NAV_PROBLEM: &str = "The Problem";
const NAV_SOLUTION: &str = "Our Solution";
const NAV_FEATURES: &str = "Features";

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the label and returns a link that already contains
/// that label as its child, preserving styling.
///
/// If no builder is registered, `SiteHeader` falls back to any raw `children`
/// passed, so the header still renders outside a router (e.g. in previews).
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub problem: fn(label: &str) -> Element,
    pub solution: fn(label: &str) -> Element,
    pub features: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[cfg(debug_assertions)]
fn log_header_render(has_builder: bool) {
    println!("[shell] SiteHeader render (nav_builder={has_builder})");
}

#[component]
pub fn SiteHeader(children: Element) -> Element {
    #[cfg(debug_assertions)]
    {
        log_header_render(NAV_BUILDER.get().is_some());
    }

    // Build the internal nav when a builder is registered.
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(NAV_HOME);
        let problem = (b.problem)(NAV_PROBLEM);
        let solution = (b.solution)(NAV_SOLUTION);
        let features = (b.features)(NAV_FEATURES);

        rsx! {
            nav { class: "navbar__links",
                {home}
                {problem}
                {solution}
                {features}
            }
        }
        .expect("SiteHeader: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Caseway" }
                    }
                    span { class: "navbar__brand-subtitle", "Justice, within reach" }
                }

                // Navigation (internal builder or legacy children)
                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
