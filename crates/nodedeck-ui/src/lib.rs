/// nodedeck UI component library
///
/// Status filter cards for fleet dashboards, built on Leptos. The
/// crate ships the component, its styling table, and a preset catalog
/// for galleries and documentation tooling.

pub mod catalog;
pub mod components;
pub mod types;

pub use components::filter_card::FilterCard;
pub use types::{CardKind, CardRect, CardStyle, Ripple, RIPPLE_DURATION_MS};

/// Component stylesheet, ready to inject into the document head.
pub const FILTER_CARD_CSS: &str = include_str!("../style/filter-card.css");
