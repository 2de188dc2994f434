/// Preset catalog for the filter card
///
/// Named scenes used by the demo gallery and by documentation
/// tooling. Each scene is a small set of card presets that shows one
/// aspect of the component.

use serde::Serialize;

use crate::types::CardKind;

/// Props for one card in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardPreset {
    pub kind: CardKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub selected: bool,
}

/// A named, self-describing group of card presets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub name: &'static str,
    pub description: &'static str,
    pub cards: Vec<CardPreset>,
}

fn preset(kind: CardKind, title: &'static str, subtitle: &'static str) -> CardPreset {
    CardPreset {
        kind,
        title,
        subtitle,
        selected: false,
    }
}

/// The full catalog, in display order.
pub fn scenes() -> Vec<Scene> {
    vec![
        Scene {
            name: "critical",
            description: "Urgent issues requiring immediate attention. Red icon with an error symbol.",
            cards: vec![preset(
                CardKind::Critical,
                "4 critical alerts",
                "Review nodes with critical alerts",
            )],
        },
        Scene {
            name: "alert",
            description: "Warnings or issues requiring review. Yellow icon with a chart symbol.",
            cards: vec![preset(CardKind::Alert, "60 offline nodes", "For the last week")],
        },
        Scene {
            name: "info",
            description: "Informational updates or new items. Blue icon with a lightbulb symbol.",
            cards: vec![preset(CardKind::Info, "3 new nodes", "Last week")],
        },
        Scene {
            name: "success",
            description: "Positive metrics or healthy status. Green icon with a trending chart symbol.",
            cards: vec![preset(
                CardKind::Success,
                "95% CPU health",
                "Click to improve CPU health",
            )],
        },
        Scene {
            name: "notice",
            description: "Important notifications requiring attention. Orange icon with a chart symbol.",
            cards: vec![preset(CardKind::Notice, "60 offline nodes", "For the last week")],
        },
        Scene {
            name: "brand",
            description: "Legacy brand preset. Its tag is not a recognized kind, so it renders \
                          through the critical fallback.",
            cards: vec![preset(
                CardKind::from("zededa"),
                "60 offline nodes",
                "For the last week",
            )],
        },
        Scene {
            name: "selected",
            description: "Selected state. The border picks up the semantic color of the kind.",
            cards: vec![CardPreset {
                kind: CardKind::Critical,
                title: "4 critical alerts",
                subtitle: "Review nodes with critical alerts",
                selected: true,
            }],
        },
        Scene {
            name: "all-variants",
            description: "Every kind side by side, plus the brand fallback.",
            cards: vec![
                preset(
                    CardKind::Critical,
                    "4 critical alerts",
                    "Review nodes with critical alerts",
                ),
                preset(CardKind::Alert, "60 offline nodes", "For the last week"),
                preset(CardKind::Info, "3 new nodes", "Last week"),
                preset(
                    CardKind::Success,
                    "95% CPU health",
                    "Click to improve CPU health",
                ),
                preset(CardKind::Notice, "60 offline nodes", "For the last week"),
                preset(
                    CardKind::from("zededa"),
                    "60 offline nodes",
                    "For the last week",
                ),
            ],
        },
        Scene {
            name: "interactive-states",
            description: "Hover to see the hover state, click to toggle selection, use Tab and \
                          Enter for keyboard navigation.",
            cards: vec![
                preset(CardKind::Critical, "4 critical alerts", "Hover and click me!"),
                preset(CardKind::Alert, "60 offline nodes", "Try selecting me"),
                preset(CardKind::Info, "3 new nodes", "Interactive card"),
                preset(CardKind::Success, "95% CPU health", "Click to select"),
                preset(CardKind::Notice, "60 offline nodes", "Notice variant"),
                preset(CardKind::from("zededa"), "60 offline nodes", "Brand variant"),
            ],
        },
        Scene {
            name: "accessibility",
            description: "Keyboard accessible and screen reader friendly. Tab to focus, Enter or \
                          Space to activate.",
            cards: vec![
                preset(CardKind::Critical, "Critical Alert", "Keyboard accessible"),
                preset(CardKind::Info, "Information", "Screen reader friendly"),
            ],
        },
        Scene {
            name: "playground",
            description: "A plain starting point for experimenting with props.",
            cards: vec![preset(CardKind::Info, "Customize me!", "Use the controls panel below")],
        },
    ]
}

/// Looks up one scene by name.
pub fn scene(name: &str) -> Option<Scene> {
    scenes().into_iter().find(|scene| scene.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_names_are_unique() {
        let all = scenes();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn every_kind_appears_in_the_catalog() {
        let all = scenes();
        for kind in CardKind::ALL {
            assert!(
                all.iter().any(|scene| scene.cards.iter().any(|card| card.kind == kind)),
                "no scene shows {kind}"
            );
        }
    }

    #[test]
    fn every_scene_has_cards_and_a_description() {
        for scene in scenes() {
            assert!(!scene.cards.is_empty(), "{} has no cards", scene.name);
            assert!(!scene.description.is_empty(), "{} has no description", scene.name);
        }
    }

    #[test]
    fn lookup_finds_scenes_by_name() {
        assert_eq!(scene("success").unwrap().cards[0].kind, CardKind::Success);
        assert!(scene("does-not-exist").is_none());
    }

    #[test]
    fn brand_scene_renders_through_the_fallback() {
        let brand = scene("brand").unwrap();
        assert_eq!(brand.cards[0].kind, CardKind::Critical);
        assert_eq!(brand.cards[0].kind.style(), CardKind::Critical.style());
    }

    #[test]
    fn selected_scene_is_selected() {
        let selected = scene("selected").unwrap();
        assert!(selected.cards.iter().all(|card| card.selected));
    }

    #[test]
    fn all_variants_shows_six_cards() {
        let all = scene("all-variants").unwrap();
        assert_eq!(all.cards.len(), 6);
        // Five distinct kinds and one brand card that resolved to critical.
        let criticals = all
            .cards
            .iter()
            .filter(|card| card.kind == CardKind::Critical)
            .count();
        assert_eq!(criticals, 2);
    }
}
