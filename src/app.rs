//! The interactive flow.
//!
//! Probe → build menu → (single-display shortcut OR pick → synthesize →
//! apply) → power off disconnected ports → restart the shell. Every step
//! is best-effort: probe failures fall back to a synthetic display, apply
//! and restart failures are logged, and the fixed tail always runs.

use log::{error, info, warn};

use crate::backends::PlatformBackend;
use crate::config::Config;
use crate::error::Error;
use crate::inventory::Inventory;
use crate::layout::{self, CustomPlacement, LayoutPlan};
use crate::menu::{self, Action};
use crate::modes;
use crate::orientation::{self, Orientation};
use crate::picker::Picker;

pub struct App<'a> {
    config: &'a Config,
    backend: &'a dyn PlatformBackend,
    picker: &'a dyn Picker,
}

impl<'a> App<'a> {
    pub fn new(
        config: &'a Config,
        backend: &'a dyn PlatformBackend,
        picker: &'a dyn Picker,
    ) -> App<'a> {
        App {
            config,
            backend,
            picker,
        }
    }

    /// Run one full invocation. Always attempts the fixed tail.
    pub fn run(&self) {
        let inventory = self.probe_inventory();
        info!(
            "{} connected, {} disconnected",
            inventory.connected_count(),
            inventory.disconnected().count()
        );

        let mut plan = self.plan_for(&inventory);
        plan.extend(layout::off_disconnected(&inventory));

        if let Err(e) = self.backend.apply(&plan) {
            error!("{}", e);
        }
        if let Err(e) = self.backend.restart_shell(self.config.desktop) {
            warn!("{}", e);
        }
    }

    fn probe_inventory(&self) -> Inventory {
        match self.backend.probe() {
            Ok(lines) => {
                let inventory = Inventory::parse(&lines);
                if inventory.is_fallback() {
                    warn!("{}", Error::EmptyProbeResult);
                }
                inventory
            }
            Err(e) => {
                warn!("{}", e);
                Inventory::fallback()
            }
        }
    }

    /// The action plan: single-display shortcut, or menu pick + synthesis.
    /// A canceled menu yields an empty plan; the tail still runs.
    fn plan_for(&self, inventory: &Inventory) -> LayoutPlan {
        if inventory.connected_count() == 1 {
            if let Some(only) = inventory.connected().next() {
                info!("single display {}, re-asserting primary", only);
                return layout::show_only_plan(inventory, only);
            }
        }

        let options = menu::build_options(inventory);
        let labels: Vec<String> = options.iter().map(|o| o.label.clone()).collect();
        let selection = match self.picker.pick("Display layout", &labels) {
            Some(selection) => selection,
            None => return LayoutPlan::new(),
        };
        let action = match options.into_iter().find(|o| o.label == selection) {
            Some(option) => option.action,
            None => {
                warn!("picker returned unknown option {:?}", selection);
                return LayoutPlan::new();
            }
        };
        self.synthesize(action, inventory)
    }

    fn synthesize(&self, action: Action, inventory: &Inventory) -> LayoutPlan {
        match action {
            Action::Extend => layout::extend_plan(inventory),
            Action::Mirror => layout::mirror_plan(inventory),
            Action::ShowOnly(display) => layout::show_only_plan(inventory, &display),
            Action::Rotate(display) => {
                let choice = self.pick_orientation(&display);
                layout::rotate_plan(&display, choice)
            }
            Action::SetResolution(display) => {
                let choice = self.pick_resolution(&display);
                layout::set_mode_plan(&display, choice)
            }
            Action::Custom => self.custom_layout(inventory),
        }
    }

    fn pick_orientation(&self, display: &str) -> Option<Orientation> {
        let choices: Vec<String> = orientation::ALL
            .iter()
            .map(|o| o.as_arg().to_owned())
            .collect();
        let selection = self
            .picker
            .pick(&format!("Rotation for {}", display), &choices)?;
        Orientation::from_arg(&selection)
    }

    fn pick_resolution(&self, display: &str) -> Option<String> {
        let resolutions = match self.backend.query_modes(display) {
            Ok(lines) => modes::parse_resolutions(&lines, display),
            Err(e) => {
                warn!("{}", e);
                modes::fallback_modes()
            }
        };
        self.picker
            .pick(&format!("Resolution for {}", display), &resolutions)
    }

    /// Custom layout dialog: pick a primary, then place every other display
    /// relative to it. Canceling the primary pick cancels the action;
    /// canceling one placement leaves that display unconfigured.
    fn custom_layout(&self, inventory: &Inventory) -> LayoutPlan {
        let connected: Vec<String> = inventory.connected().map(str::to_owned).collect();
        let primary = match self.picker.pick("Primary display", &connected) {
            Some(primary) => primary,
            None => return LayoutPlan::new(),
        };

        let choices: Vec<String> = CustomPlacement::CHOICES
            .iter()
            .map(|c| (*c).to_owned())
            .collect();
        let mut placements = Vec::new();
        for display in connected.iter().filter(|d| **d != primary) {
            let selection = self
                .picker
                .pick(&format!("Place {} relative to {}", display, primary), &choices);
            match selection.as_deref().and_then(CustomPlacement::from_arg) {
                Some(placement) => placements.push((display.clone(), placement)),
                None => info!("leaving {} unconfigured", display),
            }
        }
        layout::custom_plan(&primary, &placements)
    }
}
