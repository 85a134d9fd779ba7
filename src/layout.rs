//! Layout directives and plan synthesis.
//!
//! A [`LayoutPlan`] is an ordered list of per-display directives. Order
//! matters: a directive that positions a display relative to an anchor
//! requires the anchor to have been enabled by an earlier directive, so the
//! synthesis functions always emit the primary first.

use crate::inventory::Inventory;
use crate::orientation::Orientation;

/// Relative placement of one display against its anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Position {
    RightOf,
    LeftOf,
    Above,
    Below,
    SameAs,
}

impl Position {
    /// The `xrandr` flag name, without the leading dashes. This is also the
    /// spelling the custom-layout picker shows.
    pub fn as_arg(&self) -> &'static str {
        match *self {
            Self::RightOf => "right-of",
            Self::LeftOf => "left-of",
            Self::Above => "above",
            Self::Below => "below",
            Self::SameAs => "same-as",
        }
    }

    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.trim() {
            "right-of" => Some(Self::RightOf),
            "left-of" => Some(Self::LeftOf),
            "above" => Some(Self::Above),
            "below" => Some(Self::Below),
            "same-as" => Some(Self::SameAs),
            _ => None,
        }
    }
}

/// One atomic instruction to the layout-apply tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Enable at the preferred mode and make primary.
    AutoPrimary(String),
    /// Enable at the preferred mode, placed relative to an already-enabled
    /// anchor.
    AutoRelative {
        display: String,
        anchor: String,
        position: Position,
    },
    /// Power the output off.
    Off(String),
    Rotate {
        display: String,
        orientation: Orientation,
    },
    SetMode {
        display: String,
        mode: String,
    },
}

pub type LayoutPlan = Vec<Directive>;

/// What the user chose for one display in the custom layout dialog.
///
/// A canceled choice never reaches the plan: the display is left
/// unconfigured, not turned off.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CustomPlacement {
    Place(Position),
    Off,
}

impl CustomPlacement {
    /// The choices the custom-layout picker offers for each display.
    pub const CHOICES: [&'static str; 6] =
        ["right-of", "left-of", "above", "below", "same-as", "off"];

    pub fn from_arg(arg: &str) -> Option<Self> {
        if arg.trim() == "off" {
            return Some(Self::Off);
        }
        Position::from_arg(arg).map(Self::Place)
    }
}

/// Chain every connected display onto the previous one.
///
/// The first display becomes primary; each subsequent display anchors to
/// the one placed just before it, with the position toggling between
/// `right-of` and `below`. The toggle fans three or more displays into an
/// L-shape instead of one long row; keep it that way, do not flatten it to
/// a uniform `right-of` chain.
pub fn extend_plan(inventory: &Inventory) -> LayoutPlan {
    let connected: Vec<&str> = inventory.connected().collect();
    let mut plan = LayoutPlan::new();
    let (first, rest) = match connected.split_first() {
        Some(split) => split,
        None => return plan,
    };

    plan.push(Directive::AutoPrimary((*first).to_owned()));
    let mut anchor = *first;
    let mut position = Position::RightOf;
    for display in rest {
        plan.push(Directive::AutoRelative {
            display: (*display).to_owned(),
            anchor: anchor.to_owned(),
            position,
        });
        anchor = *display;
        position = match position {
            Position::RightOf => Position::Below,
            _ => Position::RightOf,
        };
    }
    plan
}

/// Mirror every connected display onto the first one (star topology; the
/// anchor never changes).
pub fn mirror_plan(inventory: &Inventory) -> LayoutPlan {
    let connected: Vec<&str> = inventory.connected().collect();
    let mut plan = LayoutPlan::new();
    let (first, rest) = match connected.split_first() {
        Some(split) => split,
        None => return plan,
    };

    plan.push(Directive::AutoPrimary((*first).to_owned()));
    for display in rest {
        plan.push(Directive::AutoRelative {
            display: (*display).to_owned(),
            anchor: (*first).to_owned(),
            position: Position::SameAs,
        });
    }
    plan
}

/// Enable `target` as primary and turn every other connected display off,
/// in inventory order.
pub fn show_only_plan(inventory: &Inventory, target: &str) -> LayoutPlan {
    let mut plan = vec![Directive::AutoPrimary(target.to_owned())];
    for display in inventory.connected() {
        if display != target {
            plan.push(Directive::Off(display.to_owned()));
        }
    }
    plan
}

/// Single rotation directive; empty plan when the pick was canceled.
pub fn rotate_plan(display: &str, choice: Option<Orientation>) -> LayoutPlan {
    match choice {
        Some(orientation) => vec![Directive::Rotate {
            display: display.to_owned(),
            orientation,
        }],
        None => LayoutPlan::new(),
    }
}

/// Single mode directive; empty plan when the pick was canceled.
pub fn set_mode_plan(display: &str, choice: Option<String>) -> LayoutPlan {
    match choice {
        Some(mode) => vec![Directive::SetMode {
            display: display.to_owned(),
            mode,
        }],
        None => LayoutPlan::new(),
    }
}

/// User-driven layout: `primary` first, then one directive per placed
/// display. Every placement anchors to the primary.
pub fn custom_plan(primary: &str, placements: &[(String, CustomPlacement)]) -> LayoutPlan {
    let mut plan = vec![Directive::AutoPrimary(primary.to_owned())];
    for (display, placement) in placements {
        match placement {
            CustomPlacement::Place(position) => plan.push(Directive::AutoRelative {
                display: display.clone(),
                anchor: primary.to_owned(),
                position: *position,
            }),
            CustomPlacement::Off => plan.push(Directive::Off(display.clone())),
        }
    }
    plan
}

/// The fixed tail every action gets: power off each disconnected port.
pub fn off_disconnected(inventory: &Inventory) -> LayoutPlan {
    inventory
        .disconnected()
        .map(|display| Directive::Off(display.to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(lines: &[&str]) -> Inventory {
        Inventory::parse(lines)
    }

    fn three_displays() -> Inventory {
        inventory(&[
            "A connected primary 1920x1080+0+0",
            "B connected 1920x1080+1920+0",
            "C connected 1920x1080+0+1080",
        ])
    }

    #[test]
    fn extend_chains_and_alternates() {
        let plan = extend_plan(&three_displays());
        assert_eq!(
            plan,
            vec![
                Directive::AutoPrimary("A".to_owned()),
                Directive::AutoRelative {
                    display: "B".to_owned(),
                    anchor: "A".to_owned(),
                    position: Position::RightOf,
                },
                Directive::AutoRelative {
                    display: "C".to_owned(),
                    anchor: "B".to_owned(),
                    position: Position::Below,
                },
            ]
        );
    }

    #[test]
    fn extend_toggle_wraps_back_to_right_of() {
        let plan = extend_plan(&inventory(&[
            "A connected",
            "B connected",
            "C connected",
            "D connected",
        ]));
        assert_eq!(
            plan[3],
            Directive::AutoRelative {
                display: "D".to_owned(),
                anchor: "C".to_owned(),
                position: Position::RightOf,
            }
        );
    }

    #[test]
    fn mirror_anchors_everything_to_first() {
        let plan = mirror_plan(&three_displays());
        assert_eq!(
            plan,
            vec![
                Directive::AutoPrimary("A".to_owned()),
                Directive::AutoRelative {
                    display: "B".to_owned(),
                    anchor: "A".to_owned(),
                    position: Position::SameAs,
                },
                Directive::AutoRelative {
                    display: "C".to_owned(),
                    anchor: "A".to_owned(),
                    position: Position::SameAs,
                },
            ]
        );
    }

    #[test]
    fn show_only_turns_others_off_in_inventory_order() {
        let plan = show_only_plan(&three_displays(), "B");
        assert_eq!(
            plan,
            vec![
                Directive::AutoPrimary("B".to_owned()),
                Directive::Off("A".to_owned()),
                Directive::Off("C".to_owned()),
            ]
        );
    }

    #[test]
    fn canceled_rotation_is_a_no_op() {
        assert!(rotate_plan("A", None).is_empty());
        assert_eq!(
            rotate_plan("A", Some(Orientation::Left)),
            vec![Directive::Rotate {
                display: "A".to_owned(),
                orientation: Orientation::Left,
            }]
        );
    }

    #[test]
    fn canceled_mode_is_a_no_op() {
        assert!(set_mode_plan("A", None).is_empty());
        assert_eq!(
            set_mode_plan("A", Some("1280x720".to_owned())),
            vec![Directive::SetMode {
                display: "A".to_owned(),
                mode: "1280x720".to_owned(),
            }]
        );
    }

    #[test]
    fn custom_plan_places_and_powers_off_relative_to_primary() {
        let plan = custom_plan(
            "B",
            &[
                ("A".to_owned(), CustomPlacement::Place(Position::LeftOf)),
                ("C".to_owned(), CustomPlacement::Off),
            ],
        );
        assert_eq!(
            plan,
            vec![
                Directive::AutoPrimary("B".to_owned()),
                Directive::AutoRelative {
                    display: "A".to_owned(),
                    anchor: "B".to_owned(),
                    position: Position::LeftOf,
                },
                Directive::Off("C".to_owned()),
            ]
        );
    }

    #[test]
    fn custom_placement_parses_off_and_positions() {
        assert_eq!(CustomPlacement::from_arg("off"), Some(CustomPlacement::Off));
        assert_eq!(
            CustomPlacement::from_arg("above"),
            Some(CustomPlacement::Place(Position::Above))
        );
        assert_eq!(CustomPlacement::from_arg(""), None);
        assert_eq!(CustomPlacement::from_arg("sideways"), None);
    }

    #[test]
    fn off_disconnected_follows_probe_order() {
        let inv = inventory(&[
            "A connected",
            "VGA1 disconnected",
            "B connected",
            "DVI1 disconnected",
        ]);
        assert_eq!(
            off_disconnected(&inv),
            vec![
                Directive::Off("VGA1".to_owned()),
                Directive::Off("DVI1".to_owned()),
            ]
        );
    }
}
