//! Windows backend: `DisplaySwitch.exe` for topology changes, PowerShell
//! for probing, the Settings app for everything `DisplaySwitch` cannot
//! express.
//!
//! Windows has no `xrandr`-style identifier, so the probe synthesizes
//! `Display0`, `Display1`, … from the monitor count and reports them all
//! as connected.

use std::process::Command;

use log::{info, warn};

use crate::config::DesktopEnvironment;
use crate::error::{Error, Result};
use crate::layout::{Directive, LayoutPlan, Position};

use super::PlatformBackend;

const COUNT_MONITORS: &str =
    "(Get-CimInstance -Namespace root\\wmi -ClassName WmiMonitorBasicDisplayParams | Measure-Object).Count";

pub struct WindowsBackend {
    dry_run: bool,
}

impl WindowsBackend {
    pub fn new(dry_run: bool) -> Self {
        WindowsBackend { dry_run }
    }

    fn run(&self, command: &str, args: &[&str]) -> Result<()> {
        if self.dry_run {
            info!("dry-run: {} {}", command, args.join(" "));
            return Ok(());
        }
        let status = Command::new(command)
            .args(args)
            .status()
            .map_err(|e| Error::ApplyFailed(format!("{}: {}", command, e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::ApplyFailed(format!(
                "{} exited with {}",
                command, status
            )))
        }
    }
}

/// The `DisplaySwitch.exe` switch for a plan, or `None` when the plan does
/// not describe a topology `DisplaySwitch` understands.
///
/// Extend-shaped plans (any placement other than `same-as`) map to
/// `/extend`, mirror-shaped plans to `/clone`. A show-only plan (primary
/// plus powered-off siblings) maps to `/internal` when the first display
/// stays on, `/external` otherwise.
pub(crate) fn display_switch_arg(plan: &LayoutPlan) -> Option<&'static str> {
    let mut saw_extend = false;
    let mut saw_mirror = false;
    let mut saw_off = false;
    let mut primary: Option<&str> = None;
    for directive in plan {
        match directive {
            Directive::AutoRelative { position, .. } => {
                if *position == Position::SameAs {
                    saw_mirror = true;
                } else {
                    saw_extend = true;
                }
            }
            Directive::Off(_) => saw_off = true,
            Directive::AutoPrimary(display) => primary = Some(display),
            Directive::Rotate { .. } | Directive::SetMode { .. } => {}
        }
    }

    if saw_extend {
        Some("/extend")
    } else if saw_mirror {
        Some("/clone")
    } else if saw_off {
        primary.map(|p| if p == "Display0" { "/internal" } else { "/external" })
    } else {
        None
    }
}

/// Directives `DisplaySwitch.exe` has no vocabulary for.
pub(crate) fn unsupported_directives(plan: &LayoutPlan) -> Vec<&Directive> {
    plan.iter()
        .filter(|d| matches!(d, Directive::Rotate { .. } | Directive::SetMode { .. }))
        .collect()
}

impl PlatformBackend for WindowsBackend {
    fn name(&self) -> &'static str {
        "displayswitch"
    }

    fn probe(&self) -> Result<Vec<String>> {
        let output = Command::new("powershell")
            .args(["-NoProfile", "-Command", COUNT_MONITORS])
            .output()
            .map_err(|e| Error::ProbeUnavailable(format!("powershell: {}", e)))?;
        let count: usize = String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse()
            .unwrap_or(0);
        Ok((0..count)
            .map(|index| format!("Display{} connected", index))
            .collect())
    }

    fn query_modes(&self, display: &str) -> Result<Vec<String>> {
        // No per-display mode query on this path; the catalog serves its
        // fallback list.
        info!("no mode query for {} on Windows", display);
        Ok(Vec::new())
    }

    fn apply(&self, plan: &LayoutPlan) -> Result<()> {
        if plan.is_empty() {
            return Ok(());
        }

        for directive in unsupported_directives(plan) {
            warn!("DisplaySwitch cannot express {:?}; opening Settings", directive);
        }
        let needs_settings = !unsupported_directives(plan).is_empty();

        if let Some(arg) = display_switch_arg(plan) {
            self.run("DisplaySwitch.exe", &[arg])?;
        }
        if needs_settings {
            self.run("cmd", &["/C", "start", "ms-settings:display"])?;
        }
        Ok(())
    }

    fn restart_shell(&self, _desktop: DesktopEnvironment) -> Result<()> {
        info!("restarting explorer");
        self.run("taskkill", &["/F", "/IM", "explorer.exe"])?;
        self.run("explorer.exe", &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Position;
    use crate::orientation::Orientation;

    fn auto_relative(display: &str, anchor: &str, position: Position) -> Directive {
        Directive::AutoRelative {
            display: display.to_owned(),
            anchor: anchor.to_owned(),
            position,
        }
    }

    #[test]
    fn extend_plan_maps_to_extend() {
        let plan = vec![
            Directive::AutoPrimary("Display0".to_owned()),
            auto_relative("Display1", "Display0", Position::RightOf),
        ];
        assert_eq!(display_switch_arg(&plan), Some("/extend"));
    }

    #[test]
    fn mirror_plan_maps_to_clone() {
        let plan = vec![
            Directive::AutoPrimary("Display0".to_owned()),
            auto_relative("Display1", "Display0", Position::SameAs),
        ];
        assert_eq!(display_switch_arg(&plan), Some("/clone"));
    }

    #[test]
    fn show_only_maps_to_internal_or_external() {
        let internal = vec![
            Directive::AutoPrimary("Display0".to_owned()),
            Directive::Off("Display1".to_owned()),
        ];
        assert_eq!(display_switch_arg(&internal), Some("/internal"));

        let external = vec![
            Directive::AutoPrimary("Display1".to_owned()),
            Directive::Off("Display0".to_owned()),
        ];
        assert_eq!(display_switch_arg(&external), Some("/external"));
    }

    #[test]
    fn rotate_only_plan_has_no_switch_arg() {
        let plan = vec![Directive::Rotate {
            display: "Display0".to_owned(),
            orientation: Orientation::Left,
        }];
        assert_eq!(display_switch_arg(&plan), None);
        assert_eq!(unsupported_directives(&plan).len(), 1);
    }

    #[test]
    fn topology_plans_are_fully_supported() {
        let plan = vec![
            Directive::AutoPrimary("Display0".to_owned()),
            auto_relative("Display1", "Display0", Position::RightOf),
            Directive::Off("Display2".to_owned()),
        ];
        assert!(unsupported_directives(&plan).is_empty());
    }
}
