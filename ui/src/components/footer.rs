use dioxus::prelude::*;

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");

/// One static footer link. Targets are plain relative paths; navigation is the
/// hosting framework's concern, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const PLATFORM_LINKS: &[FooterLink] = &[
    FooterLink { label: "Incident Reports", href: "/incident-report" },
    FooterLink { label: "For Advocates", href: "/advocates" },
    FooterLink { label: "Judicial Dashboard", href: "/judicial-dashboard" },
    FooterLink { label: "Features", href: "/features" },
];

pub const SUPPORT_LINKS: &[FooterLink] = &[
    FooterLink { label: "Help Center", href: "/help" },
    FooterLink { label: "Contact Us", href: "/contact" },
];

pub const LEGAL_LINKS: &[FooterLink] = &[
    FooterLink { label: "Privacy Policy", href: "/privacy" },
    FooterLink { label: "Terms of Service", href: "/terms" },
];

/// Brand column link back to the landing page.
pub const HOME_LINK: FooterLink = FooterLink { label: "Caseway", href: "/" };

// Decorative only. Selecting an option changes nothing; the site ships in one
// language.
const LANGUAGE_OPTIONS: &[&str] = &["English", "Español", "Français"];

const COPYRIGHT: &str = "© 2026 Caseway. All rights reserved.";

/// Every link target the footer renders, brand link included.
pub fn all_link_targets() -> Vec<&'static str> {
    std::iter::once(HOME_LINK.href)
        .chain(PLATFORM_LINKS.iter().map(|l| l.href))
        .chain(SUPPORT_LINKS.iter().map(|l| l.href))
        .chain(LEGAL_LINKS.iter().map(|l| l.href))
        .collect()
}

fn link_column(title: &'static str, links: &'static [FooterLink]) -> Element {
    rsx! {
        div { class: "footer__col",
            h5 { class: "footer__col-title", "{title}" }
            for link in links {
                a { class: "footer__link", href: "{link.href}", "{link.label}" }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }

        footer { class: "footer",
            div { class: "footer__main",
                // Brand
                div { class: "footer__brand",
                    a { class: "footer__brand-link", href: "{HOME_LINK.href}",
                        "{HOME_LINK.label}"
                    }
                    p { class: "footer__tagline",
                        "Report incidents, find advocates, and follow your case to resolution."
                    }
                }

                // Link columns
                div { class: "footer__links",
                    {link_column("Platform", PLATFORM_LINKS)}
                    {link_column("Support", SUPPORT_LINKS)}
                    {link_column("Legal", LEGAL_LINKS)}
                }

                // Decorative language selector
                div { class: "footer__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        "Language"
                    }
                    select { id: "locale-select",
                        for lang in LANGUAGE_OPTIONS {
                            option { key: "{lang}", value: "{lang}", "{lang}" }
                        }
                    }
                }
            }

            div { class: "footer__bottom",
                p { class: "footer__copyright", "{COPYRIGHT}" }
            }
        }
    }
}
