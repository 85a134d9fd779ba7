//! Platform backends.
//!
//! A backend owns the platform tools: the display probe, the layout-apply
//! tool, and the shell restart. The application flow is identical on every
//! platform; only the injected backend differs.

use crate::config::{Config, DesktopEnvironment, Platform};
use crate::error::Result;
use crate::layout::LayoutPlan;

pub mod windows;
pub mod xrandr;

pub trait PlatformBackend {
    /// Backend name, used in logs.
    fn name(&self) -> &'static str;

    /// Run the display probe and return its raw output lines.
    ///
    /// `Error::ProbeUnavailable` when the probe tool cannot be spawned;
    /// the caller falls back to a single synthetic display.
    fn probe(&self) -> Result<Vec<String>>;

    /// Raw mode-query lines for one display.
    fn query_modes(&self, display: &str) -> Result<Vec<String>>;

    /// Apply a layout plan. An empty plan must not spawn anything. A
    /// failure is reported as `Error::ApplyFailed`; the caller logs it and
    /// the flow continues to the fixed tail.
    fn apply(&self, plan: &LayoutPlan) -> Result<()>;

    /// Restart the desktop shell. Unknown desktop tags yield
    /// `Error::UnsupportedDesktopEnvironment`; the caller logs and skips.
    fn restart_shell(&self, desktop: DesktopEnvironment) -> Result<()>;
}

/// Select the backend for the configured platform.
pub fn for_platform(config: &Config) -> Box<dyn PlatformBackend> {
    match config.platform {
        Platform::Linux => Box::new(xrandr::XrandrBackend::new(config.dry_run)),
        Platform::Windows => Box::new(windows::WindowsBackend::new(config.dry_run)),
    }
}
