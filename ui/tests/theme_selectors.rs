/*!
Stylesheet lint for the shared theme and component sheets.

Purpose:
- Ensure that CSS selectors the Rust components rely on remain present in
  `assets/theme/main.css` and the component sheets under `assets/styling/`.
- Fail fast if a refactor accidentally drops or renames a core class,
  preventing a silent styling regression.

If you intentionally rename a selector:
    1. Update the component markup.
    2. Adjust the matching REQUIRED list here.

A substring presence check is deliberately lightweight; parsing CSS properly
would add dependencies for no extra safety.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));
const FOOTER_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/footer.css"
));
const CARDS_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/cards.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_THEME: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".page-header",
    ".hero",
    ".hero__actions",
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".visually-hidden",
    "@media (max-width: 720px)",
];

const REQUIRED_NAVBAR: &[&str] = &[
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand",
    ".navbar__brand-mark",
    ".navbar__links",
    ".navbar__link {",
];

const REQUIRED_FOOTER: &[&str] = &[
    ".footer {",
    ".footer__main",
    ".footer__brand",
    ".footer__col",
    ".footer__col-title",
    ".footer__link {",
    ".footer__locale",
    ".footer__copyright",
];

const REQUIRED_CARDS: &[&str] = &[
    ".card-grid",
    ".card {",
    ".card__icon",
    ".card__title",
    ".card__description",
];

fn assert_contains_all(css: &str, required: &[&str], sheet: &str) {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect();
    assert!(
        missing.is_empty(),
        "missing {} required selectors/tokens in {sheet}:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn theme_contains_required_selectors() {
    assert_contains_all(THEME_CSS, REQUIRED_THEME, "theme/main.css");
}

#[test]
fn component_sheets_contain_required_selectors() {
    assert_contains_all(NAVBAR_CSS, REQUIRED_NAVBAR, "styling/navbar.css");
    assert_contains_all(FOOTER_CSS, REQUIRED_FOOTER, "styling/footer.css");
    assert_contains_all(CARDS_CSS, REQUIRED_CARDS, "styling/cards.css");
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 1_000,
        "shared theme appears unexpectedly small ({non_ws_len} non-whitespace chars) - \
         did the file get truncated or the path change?"
    );
}
