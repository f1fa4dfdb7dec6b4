use dioxus::prelude::*;

use crate::components::CardGrid;
use crate::content::{CardIcon, DisplayRecord};

/// Product capabilities, one card each.
pub const FEATURE_POINTS: &[DisplayRecord] = &[
    DisplayRecord {
        icon: CardIcon::Form,
        title: "Structured intake forms",
        description: "Incident details are captured as structured data, not free-text attachments.",
    },
    DisplayRecord {
        icon: CardIcon::Timeline,
        title: "Case timeline",
        description: "Every filing, hearing, and deadline appears on a single chronological view.",
    },
    DisplayRecord {
        icon: CardIcon::Shield,
        title: "Role-based dashboards",
        description: "Reporters, advocates, and judges each see the slice of the case that belongs to them.",
    },
    DisplayRecord {
        icon: CardIcon::Vault,
        title: "Document vault",
        description: "Evidence and filings live in one versioned store with a full access history.",
    },
];

#[component]
pub fn Features() -> Element {
    rsx! {
        section { class: "page page-features",
            div { class: "page-header",
                h1 { class: "page-header__title", "Features" }
                p { class: "page-header__description",
                    "Everything Caseway does to keep a case moving."
                }
            }

            CardGrid { records: FEATURE_POINTS }
        }
    }
}
