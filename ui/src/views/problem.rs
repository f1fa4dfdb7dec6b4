use dioxus::prelude::*;

use crate::components::CardGrid;
use crate::content::{CardIcon, DisplayRecord};

/// The access-to-justice gap, one card per failure mode.
pub const PROBLEM_POINTS: &[DisplayRecord] = &[
    DisplayRecord {
        icon: CardIcon::Warning,
        title: "Most incidents go unreported",
        description: "People who are harmed rarely know where to start, so the majority of legal incidents never enter the system at all.",
    },
    DisplayRecord {
        icon: CardIcon::Compass,
        title: "The process is opaque",
        description: "Forms, filings, and jurisdictions form a maze that only trained professionals can navigate.",
    },
    DisplayRecord {
        icon: CardIcon::Coins,
        title: "Representation is out of reach",
        description: "Hourly legal fees price ordinary people out of pursuing valid claims.",
    },
    DisplayRecord {
        icon: CardIcon::Hourglass,
        title: "Cases stall for years",
        description: "Scattered paperwork and missed deadlines stretch simple disputes into multi-year ordeals.",
    },
];

#[component]
pub fn Problem() -> Element {
    rsx! {
        section { class: "page page-problem",
            div { class: "page-header",
                h1 { class: "page-header__title", "The problem" }
                p { class: "page-header__description",
                    "The legal system works for the people who run it, not the people who need it."
                }
            }

            CardGrid { records: PROBLEM_POINTS }
        }
    }
}
