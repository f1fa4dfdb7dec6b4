//! Shared theme embedding.
//!
//! The unified stylesheet lives at `ui/assets/theme/main.css` so every
//! platform crate styles pages from one file. Platforms inject it with
//! `document::Style` at the root; component-local stylesheets under
//! `assets/styling/` are linked by the components themselves.

pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
