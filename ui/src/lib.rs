//! Shared UI crate for Caseway. All views, components, and page content live here.

pub mod content;
pub mod theme;
pub mod views;

pub mod components {
    // Site chrome (components/site_header.rs, components/footer.rs)
    pub mod footer;
    pub mod site_header;
    pub use footer::SiteFooter;
    pub use site_header::register_nav;
    pub use site_header::NavBuilder;
    pub use site_header::SiteHeader;

    // Card grid primitives (components/cards.rs)
    pub mod cards;
    pub use cards::Card;
    pub use cards::CardGrid;
}
