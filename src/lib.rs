//! **monmenu**, an interactive display layout switcher.
//!
//! One invocation probes the connected displays, offers a menu of layout
//! actions (extend, mirror, show-only, rotate, set resolution, custom
//! layout), synthesizes the chosen layout as an ordered plan of per-display
//! directives, and hands the plan to the platform's display tool. The run
//! always finishes with a fixed tail: disconnected ports are powered off
//! and the desktop shell is restarted.
//!
//! # Architecture
//!
//! Two traits keep the flow platform-agnostic:
//!
//! * [`backends::PlatformBackend`]: the display probe, the layout-apply
//!   tool, and the shell restart (`xrandr` + WM reload on Linux,
//!   `DisplaySwitch.exe` + Explorer on Windows).
//! * [`picker::Picker`]: the menu frontend (`rofi`, a console prompt,
//!   `Out-GridView`).
//!
//! [`app::App`] drives the flow against whichever implementations the
//! [`config::Config`] selects; nothing persists between invocations.

pub mod app;
pub mod backends;
pub mod config;
pub mod error;
pub mod inventory;
pub mod layout;
pub mod logging;
pub mod menu;
pub mod modes;
pub mod orientation;
pub mod picker;
