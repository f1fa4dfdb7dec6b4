use dioxus::prelude::*;

use crate::components::CardGrid;
use crate::content::{CardIcon, DisplayRecord};

/// What the platform provides, one card per capability.
pub const SOLUTION_POINTS: &[DisplayRecord] = &[
    DisplayRecord {
        icon: CardIcon::Report,
        title: "Guided incident reports",
        description: "Plain-language questions capture the who, what, and when while events are still fresh.",
    },
    DisplayRecord {
        icon: CardIcon::Handshake,
        title: "Advocate matching",
        description: "Reports are routed to advocates by practice area, location, and availability.",
    },
    DisplayRecord {
        icon: CardIcon::Court,
        title: "Judicial dashboard",
        description: "Courts review a structured case record instead of a box of loose paperwork.",
    },
    DisplayRecord {
        icon: CardIcon::Lock,
        title: "Secure evidence locker",
        description: "Photos, documents, and statements stay encrypted and attached to the case they belong to.",
    },
    DisplayRecord {
        icon: CardIcon::Bell,
        title: "Status notifications",
        description: "Everyone on a case hears about filings and hearing dates at the same time.",
    },
    DisplayRecord {
        icon: CardIcon::Book,
        title: "Plain-language guidance",
        description: "Each step comes with an explanation of what it means and what happens next.",
    },
];

#[component]
pub fn Solution() -> Element {
    rsx! {
        section { class: "page page-solution",
            div { class: "page-header",
                h1 { class: "page-header__title", "Our solution" }
                p { class: "page-header__description",
                    "One shared record, from the first report to the final decision."
                }
            }

            CardGrid { records: SOLUTION_POINTS }
        }
    }
}
