//! Menu vocabulary.
//!
//! [`Action`] is the typed link between a rendered menu label and the layout
//! synthesis. An option carries its action alongside the label, so dispatch
//! is a `match` on the variant, never a pattern match on the label text.

use crate::inventory::Inventory;

/// Everything the menu can ask the synthesizer to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Chain all connected displays side by side.
    Extend,
    /// Mirror every display onto the first one.
    Mirror,
    /// Let the user place each display relative to a chosen primary.
    Custom,
    /// Enable one display, turn the rest off.
    ShowOnly(String),
    /// Rotate one display; the orientation is picked in a follow-up prompt.
    Rotate(String),
    /// Change one display's mode; the resolution is picked in a follow-up
    /// prompt.
    SetResolution(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub action: Action,
}

impl MenuOption {
    fn new(label: String, action: Action) -> MenuOption {
        MenuOption { label, action }
    }
}

/// Build the menu for the given inventory.
///
/// Topology options come first and only when more than one display is
/// connected; then one show-only, one rotate, and one set-resolution option
/// per connected display, each group in inventory order. Deterministic:
/// the same inventory always yields the same options.
pub fn build_options(inventory: &Inventory) -> Vec<MenuOption> {
    let mut options = Vec::new();

    if inventory.connected_count() > 1 {
        options.push(MenuOption::new("Extend displays".to_owned(), Action::Extend));
        options.push(MenuOption::new("Mirror displays".to_owned(), Action::Mirror));
        options.push(MenuOption::new("Custom layout".to_owned(), Action::Custom));
    }

    for display in inventory.connected() {
        options.push(MenuOption::new(
            format!("Show only {}", display),
            Action::ShowOnly(display.to_owned()),
        ));
    }
    for display in inventory.connected() {
        options.push(MenuOption::new(
            format!("Rotate {}", display),
            Action::Rotate(display.to_owned()),
        ));
    }
    for display in inventory.connected() {
        options.push(MenuOption::new(
            format!("Set resolution for {}", display),
            Action::SetResolution(display.to_owned()),
        ));
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_display_inventory() -> Inventory {
        Inventory::parse([
            "HDMI1 connected primary 1920x1080+0+0",
            "DP1 connected 1920x1080+1920+0",
            "VGA1 disconnected",
        ])
    }

    #[test]
    fn two_displays_yield_nine_options_in_category_order() {
        let options = build_options(&two_display_inventory());
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Extend displays",
                "Mirror displays",
                "Custom layout",
                "Show only HDMI1",
                "Show only DP1",
                "Rotate HDMI1",
                "Rotate DP1",
                "Set resolution for HDMI1",
                "Set resolution for DP1",
            ]
        );
    }

    #[test]
    fn options_carry_typed_actions() {
        let options = build_options(&two_display_inventory());
        assert_eq!(options[0].action, Action::Extend);
        assert_eq!(options[3].action, Action::ShowOnly("HDMI1".to_owned()));
        assert_eq!(options[6].action, Action::Rotate("DP1".to_owned()));
        assert_eq!(
            options[8].action,
            Action::SetResolution("DP1".to_owned())
        );
    }

    #[test]
    fn single_display_omits_topology_options() {
        let inventory = Inventory::parse(["eDP-1 connected 1366x768+0+0"]);
        let options = build_options(&inventory);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Show only eDP-1",
                "Rotate eDP-1",
                "Set resolution for eDP-1",
            ]
        );
    }

    #[test]
    fn building_twice_is_identical() {
        let inventory = two_display_inventory();
        assert_eq!(build_options(&inventory), build_options(&inventory));
    }
}
