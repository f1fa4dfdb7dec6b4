use dioxus::prelude::*;

use crate::components::CardGrid;
use crate::content::{CardIcon, DisplayRecord};

/// Landing page highlights, rendered as one card each.
pub const HOME_HIGHLIGHTS: &[DisplayRecord] = &[
    DisplayRecord {
        icon: CardIcon::Report,
        title: "Report in minutes",
        description: "A guided form turns what happened to you into a clear, structured incident report.",
    },
    DisplayRecord {
        icon: CardIcon::Handshake,
        title: "Find your advocate",
        description: "Your report reaches vetted advocates who take cases like yours.",
    },
    DisplayRecord {
        icon: CardIcon::Chart,
        title: "Track every step",
        description: "One timeline shows filings, hearings, and deadlines as your case moves.",
    },
    DisplayRecord {
        icon: CardIcon::Scales,
        title: "Reach resolution",
        description: "Courts see the same organized record you do, so nothing gets lost on the way to a decision.",
    },
];

#[cfg(debug_assertions)]
fn log_home_render() {
    // Lightweight render trace for diagnosing layout refresh issues.
    println!("[shell] Home render");
}

#[component]
pub fn Home() -> Element {
    #[cfg(debug_assertions)]
    {
        log_home_render();
    }

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                h1 { class: "hero__headline", "Justice shouldn't require a law degree" }
                p { class: "hero__description",
                    "Caseway connects people who experience legal incidents with the advocates and courts that can resolve them."
                }
                div { class: "hero__actions",
                    a { class: "button button--primary", href: "/incident-report", "Report an incident" }
                    a { class: "button button--ghost", href: "/features", "See how it works" }
                }
            }

            CardGrid { records: HOME_HIGHLIGHTS }
        }
    }
}
