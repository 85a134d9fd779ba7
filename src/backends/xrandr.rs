//! Linux backend: `xrandr` for probing and applying, per-WM shell restart.
//!
//! A whole [`LayoutPlan`] becomes one `xrandr` invocation, one ordered
//! argument group per directive, so the server applies the layout in a
//! single configuration change.

use std::process::Command;

use log::info;

use crate::config::DesktopEnvironment;
use crate::error::{Error, Result};
use crate::layout::{Directive, LayoutPlan};

use super::PlatformBackend;

pub struct XrandrBackend {
    dry_run: bool,
}

impl XrandrBackend {
    pub fn new(dry_run: bool) -> Self {
        XrandrBackend { dry_run }
    }
}

/// The `xrandr` argument group for one directive.
pub(crate) fn directive_args(directive: &Directive) -> Vec<String> {
    match directive {
        Directive::AutoPrimary(display) => vec![
            "--output".to_owned(),
            display.clone(),
            "--auto".to_owned(),
            "--primary".to_owned(),
        ],
        Directive::AutoRelative {
            display,
            anchor,
            position,
        } => vec![
            "--output".to_owned(),
            display.clone(),
            "--auto".to_owned(),
            format!("--{}", position.as_arg()),
            anchor.clone(),
        ],
        Directive::Off(display) => vec![
            "--output".to_owned(),
            display.clone(),
            "--off".to_owned(),
        ],
        Directive::Rotate {
            display,
            orientation,
        } => vec![
            "--output".to_owned(),
            display.clone(),
            "--rotate".to_owned(),
            orientation.as_arg().to_owned(),
        ],
        Directive::SetMode { display, mode } => vec![
            "--output".to_owned(),
            display.clone(),
            "--mode".to_owned(),
            mode.clone(),
        ],
    }
}

/// Compose the argument list for a whole plan, preserving directive order.
pub(crate) fn plan_args(plan: &LayoutPlan) -> Vec<String> {
    plan.iter().flat_map(directive_args).collect()
}

fn capture_lines(command: &str, args: &[&str]) -> Result<Vec<String>> {
    let output = Command::new(command)
        .args(args)
        .output()
        .map_err(|e| Error::ProbeUnavailable(format!("{}: {}", command, e)))?;
    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect())
}

fn run_tool(command: &str, args: &[&str], dry_run: bool) -> Result<()> {
    if dry_run {
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

impl PlatformBackend for XrandrBackend {
    fn name(&self) -> &'static str {
        "xrandr"
    }

    fn probe(&self) -> Result<Vec<String>> {
        capture_lines("xrandr", &["--query"])
    }

    fn query_modes(&self, _display: &str) -> Result<Vec<String>> {
        // Mode lines sit in the same query output, indented under each
        // display's block.
        capture_lines("xrandr", &["--query"])
    }

    fn apply(&self, plan: &LayoutPlan) -> Result<()> {
        if plan.is_empty() {
            return Ok(());
        }
        let args = plan_args(plan);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_tool("xrandr", &args, self.dry_run)
    }

    fn restart_shell(&self, desktop: DesktopEnvironment) -> Result<()> {
        let (command, args): (&str, &[&str]) = match desktop {
            DesktopEnvironment::I3 => ("i3-msg", &["restart"]),
            DesktopEnvironment::BspWm => ("bspc", &["wm", "-r"]),
            DesktopEnvironment::Sway => ("swaymsg", &["reload"]),
            DesktopEnvironment::Unknown => {
                return Err(Error::UnsupportedDesktopEnvironment(
                    desktop.as_tag().to_owned(),
                ))
            }
        };
        info!("restarting {} session", desktop.as_tag());
        run_tool(command, args, self.dry_run)
    }
}
