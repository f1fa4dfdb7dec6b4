//! Guards the fixed page content lists.
//!
//! Each page renders exactly one card per record, so list length is the card
//! count a visitor sees. These tests pin the published counts and catch
//! half-filled records sneaking in during copy edits.

use std::collections::HashSet;

use ui::content::DisplayRecord;
use ui::views::{features, home, problem, solution};

fn pages() -> Vec<(&'static str, &'static [DisplayRecord])> {
    vec![
        ("home", home::HOME_HIGHLIGHTS),
        ("problem", problem::PROBLEM_POINTS),
        ("solution", solution::SOLUTION_POINTS),
        ("features", features::FEATURE_POINTS),
    ]
}

#[test]
fn card_counts_match_published_layout() {
    let expected = [("home", 4), ("problem", 4), ("solution", 6), ("features", 4)];
    for (name, count) in expected {
        let records = pages()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, r)| r)
            .unwrap_or_default();
        assert_eq!(
            records.len(),
            count,
            "page `{name}` should render {count} cards"
        );
    }
}

#[test]
fn every_record_is_fully_filled() {
    for (page, records) in pages() {
        for record in records {
            assert!(
                !record.title.trim().is_empty(),
                "empty title on page `{page}`"
            );
            assert!(
                !record.description.trim().is_empty(),
                "empty description for `{}` on page `{page}`",
                record.title
            );
            assert!(
                !record.icon.glyph().is_empty(),
                "icon for `{}` on page `{page}` has no glyph",
                record.title
            );
        }
    }
}

#[test]
fn titles_are_unique_within_a_page() {
    for (page, records) in pages() {
        let mut seen = HashSet::new();
        for record in records {
            assert!(
                seen.insert(record.title),
                "duplicate card title `{}` on page `{page}`",
                record.title
            );
        }
    }
}

#[test]
fn descriptions_stay_card_sized() {
    // Cards are single-paragraph; anything longer belongs in page copy.
    for (page, records) in pages() {
        for record in records {
            assert!(
                record.description.len() <= 160,
                "description for `{}` on page `{page}` is {} chars (max 160)",
                record.title,
                record.description.len()
            );
        }
    }
}
