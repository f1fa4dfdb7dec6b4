//! Static page content primitives.
//!
//! Every content page owns one fixed list of [`DisplayRecord`]s and renders it
//! as a card grid. The lists are `const`, created once per render, and never
//! mutated; there is no other data model in this crate.

/// Symbolic reference to a display glyph.
///
/// Pages refer to icons by name; the concrete glyph lives in one place so the
/// card markup never embeds raw literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Report,
    Handshake,
    Chart,
    Scales,
    Warning,
    Compass,
    Coins,
    Hourglass,
    Court,
    Lock,
    Bell,
    Book,
    Form,
    Timeline,
    Shield,
    Vault,
}

impl CardIcon {
    pub const fn glyph(self) -> &'static str {
        match self {
            CardIcon::Report => "📝",
            CardIcon::Handshake => "🤝",
            CardIcon::Chart => "📊",
            CardIcon::Scales => "⚖️",
            CardIcon::Warning => "⚠️",
            CardIcon::Compass => "🧭",
            CardIcon::Coins => "💸",
            CardIcon::Hourglass => "⏳",
            CardIcon::Court => "🏛️",
            CardIcon::Lock => "🔒",
            CardIcon::Bell => "🔔",
            CardIcon::Book => "📖",
            CardIcon::Form => "🗂️",
            CardIcon::Timeline => "⏱️",
            CardIcon::Shield => "🛡️",
            CardIcon::Vault => "📁",
        }
    }
}

/// One card's worth of page content: a glyph reference, a short title, and a
/// one-or-two sentence description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRecord {
    pub icon: CardIcon,
    pub title: &'static str,
    pub description: &'static str,
}
