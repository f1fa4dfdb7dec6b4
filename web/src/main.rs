use dioxus::prelude::*;

use ui::components::site_header::{register_nav, NavBuilder};
use ui::components::{SiteFooter, SiteHeader};
use ui::theme::THEME_CSS;
use ui::views::{Features, Home, Problem, Solution};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/incident-report")]
    Problem {},
    #[route("/advocates")]
    Solution {},
    #[route("/features")]
    Features {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

// Cross-frame messaging bridge. The message contract (type and payload shape)
// is owned by the embedding host, not this crate.
const FRAME_BRIDGE_SRC: &str = "https://cdn.caseway.example/embed/frame-bridge.js";

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_problem(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Problem {},
        "{label}"
    })
}
fn nav_solution(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Solution {},
        "{label}"
    })
}
fn nav_features(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Features {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        // Register the navigation builder so the shared header can render
        // router links without knowing this crate's Route enum.
        register_nav(NavBuilder {
            home: nav_home,
            problem: nav_problem,
            solution: nav_solution,
            features: nav_features,
        });
    }

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Style { "{THEME_CSS}" }
        script { src: "{FRAME_BRIDGE_SRC}" }

        Router::<Route> {}
    }
}

/// A web-specific shell around the shared header and footer which allows us
/// to use the web-specific `Route` enum.
#[component]
fn SiteShell() -> Element {
    rsx! {
        SiteHeader {}
        Outlet::<Route> {}
        SiteFooter {}
    }
}
