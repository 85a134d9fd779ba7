//! Display inventory.
//!
//! One probe per invocation; the inventory is read-only once built. A probe
//! line contributes its leading token as a display identifier when its
//! remaining tokens carry a connectivity token (`connected` /
//! `disconnected`), which is how `xrandr --query` reports outputs:
//!
//! ```text
//! HDMI-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 527mm x 296mm
//! VGA-1 disconnected (normal left inverted right x axis y axis)
//! ```

/// Identifier used when the probe yields nothing usable.
pub const FALLBACK_DISPLAY: &str = "Primary";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConnState {
    Connected,
    Disconnected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Display {
    pub name: String,
    pub state: ConnState,
}

/// Ordered snapshot of the displays one probe reported.
///
/// Insertion order is probe order; identifiers are unique within one probe
/// (first occurrence wins).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    displays: Vec<Display>,
}

impl Inventory {
    /// Parse raw probe output lines.
    ///
    /// If no line yields a connected display (the probe ran but produced
    /// garbage, or only reported empty ports), the single-display fallback
    /// is returned instead.
    pub fn parse<I, S>(lines: I) -> Inventory
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut displays: Vec<Display> = Vec::new();
        for line in lines {
            let tokens: Vec<&str> = line.as_ref().split_whitespace().collect();
            let name = match tokens.first() {
                Some(name) => *name,
                None => continue,
            };
            let state = if tokens[1..].contains(&"disconnected") {
                ConnState::Disconnected
            } else if tokens[1..].contains(&"connected") {
                ConnState::Connected
            } else {
                continue;
            };
            if displays.iter().any(|d| d.name == name) {
                continue;
            }
            displays.push(Display {
                name: name.to_owned(),
                state,
            });
        }

        if displays.iter().all(|d| d.state != ConnState::Connected) {
            return Inventory::fallback();
        }
        Inventory { displays }
    }

    /// Single synthetic connected display, no disconnected ports.
    pub fn fallback() -> Inventory {
        Inventory {
            displays: vec![Display {
                name: FALLBACK_DISPLAY.to_owned(),
                state: ConnState::Connected,
            }],
        }
    }

    /// Whether this inventory is the synthetic fallback.
    pub fn is_fallback(&self) -> bool {
        *self == Inventory::fallback()
    }

    /// Connected display names, in probe order.
    pub fn connected(&self) -> impl Iterator<Item = &str> {
        self.displays
            .iter()
            .filter(|d| d.state == ConnState::Connected)
            .map(|d| d.name.as_str())
    }

    /// Disconnected port names, in probe order.
    pub fn disconnected(&self) -> impl Iterator<Item = &str> {
        self.displays
            .iter()
            .filter(|d| d.state == ConnState::Disconnected)
            .map(|d| d.name.as_str())
    }

    /// Count of connected displays; gates the multi-display menu options.
    pub fn connected_count(&self) -> usize {
        self.connected().count()
    }
}
