/// Type definitions for nodedeck status cards
///
/// Card categories, their styling table, and the geometry used for
/// click ripples.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifetime of a click ripple, in milliseconds. Must stay in sync with
/// the animation duration in `style/filter-card.css`.
pub const RIPPLE_DURATION_MS: u32 = 600;

/// Category of a status card. The wire format is the lowercase tag,
/// e.g. `"critical"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Critical,
    Alert,
    Info,
    Success,
    Notice,
}

/// Styling record for one card kind: the icon glyph, the class pair
/// for the icon foreground and its tinted background, the class that
/// colors the selected border, and the raw accent color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
    pub icon: &'static str,
    pub foreground: &'static str,
    pub background: &'static str,
    pub selected_border: &'static str,
    pub accent: &'static str,
}

// Rows are indexed by discriminant and must stay in declaration order.
const STYLES: [CardStyle; 5] = [
    CardStyle {
        icon: "error",
        foreground: "icon-critical",
        background: "icon-bg-critical",
        selected_border: "filter-card-selected-critical",
        accent: "#ff7f7f",
    },
    CardStyle {
        icon: "show_chart",
        foreground: "icon-alert",
        background: "icon-bg-alert",
        selected_border: "filter-card-selected-alert",
        accent: "#ffd86e",
    },
    CardStyle {
        icon: "emoji_objects",
        foreground: "icon-info",
        background: "icon-bg-info",
        selected_border: "filter-card-selected-info",
        accent: "#6775e4",
    },
    CardStyle {
        icon: "show_chart",
        foreground: "icon-success",
        background: "icon-bg-success",
        selected_border: "filter-card-selected-success",
        accent: "#29cf8d",
    },
    CardStyle {
        icon: "show_chart",
        foreground: "icon-notice",
        background: "icon-bg-notice",
        selected_border: "filter-card-selected-notice",
        accent: "#ffa16e",
    },
];

impl CardKind {
    /// Every kind, in declaration order.
    pub const ALL: [CardKind; 5] = [
        CardKind::Critical,
        CardKind::Alert,
        CardKind::Info,
        CardKind::Success,
        CardKind::Notice,
    ];

    /// The lowercase tag used in class names, data attributes, and the
    /// wire format.
    pub fn as_str(self) -> &'static str {
        match self {
            CardKind::Critical => "critical",
            CardKind::Alert => "alert",
            CardKind::Info => "info",
            CardKind::Success => "success",
            CardKind::Notice => "notice",
        }
    }

    /// Strict lookup of a kind by its tag. Returns `None` for anything
    /// that is not one of the five tags.
    pub fn parse(tag: &str) -> Option<CardKind> {
        CardKind::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Styling for this kind, from the shared table.
    pub fn style(self) -> &'static CardStyle {
        &STYLES[self as usize]
    }
}

impl Default for CardKind {
    fn default() -> Self {
        CardKind::Critical
    }
}

/// Lossy conversion used at untyped call sites. Unrecognized tags
/// resolve to `Critical` so a bad value still renders as something
/// that demands attention.
impl From<&str> for CardKind {
    fn from(tag: &str) -> Self {
        CardKind::parse(tag).unwrap_or_default()
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounding box of a card, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    /// Center of the box, in viewport coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// One expanding ripple inside a card. Coordinates are relative to the
/// card's top-left corner and position the ripple's bounding square,
/// so `x` and `y` can be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub id: u64,
}

impl Ripple {
    /// Ripple centered on a pointer position given in viewport
    /// coordinates. The diameter is the larger side of the card so the
    /// ripple can flood it from any origin.
    pub fn at_point(id: u64, rect: &CardRect, client_x: f64, client_y: f64) -> Ripple {
        let size = rect.width.max(rect.height);
        Ripple {
            x: client_x - rect.left - size / 2.0,
            y: client_y - rect.top - size / 2.0,
            size,
            id,
        }
    }

    /// Ripple centered on the card itself, used for keyboard
    /// activation where there is no pointer position.
    pub fn at_center(id: u64, rect: &CardRect) -> Ripple {
        let (cx, cy) = rect.center();
        Ripple::at_point(id, rect, cx, cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn style_rows_follow_declaration_order() {
        let accents: Vec<&str> = CardKind::ALL.iter().map(|kind| kind.style().accent).collect();
        assert_eq!(
            accents,
            vec!["#ff7f7f", "#ffd86e", "#6775e4", "#29cf8d", "#ffa16e"]
        );
    }

    #[test]
    fn every_kind_has_a_distinct_accent_and_border_class() {
        for a in CardKind::ALL {
            for b in CardKind::ALL {
                if a != b {
                    assert_ne!(a.style().accent, b.style().accent);
                    assert_ne!(a.style().selected_border, b.style().selected_border);
                }
            }
        }
    }

    #[test]
    fn icons_match_the_catalog() {
        assert_eq!(CardKind::Critical.style().icon, "error");
        assert_eq!(CardKind::Info.style().icon, "emoji_objects");
        assert_eq!(CardKind::Alert.style().icon, "show_chart");
        assert_eq!(CardKind::Success.style().icon, "show_chart");
        assert_eq!(CardKind::Notice.style().icon, "show_chart");
    }

    #[test]
    fn parse_is_strict() {
        assert_eq!(CardKind::parse("success"), Some(CardKind::Success));
        assert_eq!(CardKind::parse("zededa"), None);
        assert_eq!(CardKind::parse("Critical"), None);
        assert_eq!(CardKind::parse(""), None);
    }

    #[test]
    fn unrecognized_tags_fall_back_to_critical() {
        assert_eq!(CardKind::from("zededa"), CardKind::Critical);
        assert_eq!(CardKind::from("unknown-value"), CardKind::Critical);
        assert_eq!(CardKind::from(""), CardKind::Critical);
        // Known tags never hit the fallback.
        for kind in CardKind::ALL {
            assert_eq!(CardKind::from(kind.as_str()), kind);
        }
    }

    #[test]
    fn fallback_styling_is_exactly_the_critical_row() {
        assert_eq!(CardKind::from("zededa").style(), CardKind::Critical.style());
    }

    #[test]
    fn wire_format_is_the_lowercase_tag() {
        for kind in CardKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: CardKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn display_matches_the_wire_tag() {
        assert_eq!(CardKind::Notice.to_string(), "notice");
        assert_eq!(CardKind::Critical.to_string(), "critical");
    }

    #[test]
    fn pointer_ripple_is_anchored_to_the_click() {
        let rect = CardRect {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 80.0,
        };
        let ripple = Ripple::at_point(1, &rect, 150.0, 90.0);
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.x, -50.0);
        assert_eq!(ripple.y, -60.0);
        assert_eq!(ripple.id, 1);
    }

    #[test]
    fn keyboard_ripple_is_anchored_to_the_card_center() {
        let rect = CardRect {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 80.0,
        };
        let ripple = Ripple::at_center(2, &rect);
        assert_eq!(ripple.x, 0.0);
        assert_eq!(ripple.y, -60.0);
        assert_eq!(ripple.size, 200.0);
    }

    proptest! {
        #[test]
        fn ripple_square_stays_centered_on_the_point(
            left in -500.0f64..500.0,
            top in -500.0f64..500.0,
            width in 1.0f64..800.0,
            height in 1.0f64..800.0,
            dx in 0.0f64..1.0,
            dy in 0.0f64..1.0,
        ) {
            let rect = CardRect { left, top, width, height };
            let px = left + dx * width;
            let py = top + dy * height;
            let ripple = Ripple::at_point(9, &rect, px, py);
            let size = width.max(height);
            prop_assert_eq!(ripple.size, size);
            prop_assert!((ripple.x + size / 2.0 - (px - left)).abs() < 1e-9);
            prop_assert!((ripple.y + size / 2.0 - (py - top)).abs() < 1e-9);
        }
    }
}
