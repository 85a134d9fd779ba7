//! Resolution catalog.
//!
//! Scans the mode lines `xrandr --query` prints indented under a display's
//! block. Lookup failures are never fatal to the menu flow; a fixed
//! fallback list is offered instead.

use regex::Regex;

/// Offered when the mode query fails or yields nothing. Pre-sorted; returned
/// verbatim.
pub const FALLBACK_MODES: [&str; 3] = ["1920x1080", "1366x768", "1280x720"];

/// The fallback list as owned strings.
pub fn fallback_modes() -> Vec<String> {
    FALLBACK_MODES.iter().map(|m| (*m).to_owned()).collect()
}

/// Extract the resolutions listed for `display` from raw query output.
///
/// Scans until a line starts with `"<display> connected"`, then collects
/// every `WIDTHxHEIGHT` token from the indented continuation lines, and
/// stops at the first non-indented line (the next display's block). The
/// result is deduplicated and sorted ascending; an empty or garbled block
/// yields the fallback list.
pub fn parse_resolutions<I, S>(lines: I, display: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mode_pattern = Regex::new(r"\d+x\d+").unwrap();
    let header = format!("{} connected", display);

    let mut modes: Vec<String> = Vec::new();
    let mut in_block = false;
    for line in lines {
        let line = line.as_ref();
        if !in_block {
            in_block = line.starts_with(&header);
            continue;
        }
        if !line.starts_with(|c: char| c.is_whitespace()) {
            break;
        }
        for m in mode_pattern.find_iter(line) {
            modes.push(m.as_str().to_owned());
        }
    }

    modes.sort();
    modes.dedup();
    if modes.is_empty() {
        return fallback_modes();
    }
    modes
}
