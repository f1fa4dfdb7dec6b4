use dioxus::prelude::*;

use crate::content::DisplayRecord;

const CARDS_CSS: Asset = asset!("/assets/styling/cards.css");

/// One content card. Title and description render verbatim from the record.
#[component]
pub fn Card(record: DisplayRecord) -> Element {
    let glyph = record.icon.glyph();
    rsx! {
        article { class: "card",
            span { class: "card__icon", aria_hidden: "true", "{glyph}" }
            h3 { class: "card__title", "{record.title}" }
            p { class: "card__description", "{record.description}" }
        }
    }
}

/// Responsive grid over a fixed record list. Renders one `Card` per record,
/// in list order.
#[component]
pub fn CardGrid(records: &'static [DisplayRecord]) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CARDS_CSS }

        div { class: "card-grid",
            for record in records {
                Card { key: "{record.title}", record: *record }
            }
        }
    }
}
