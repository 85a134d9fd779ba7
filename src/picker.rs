//! Menu pickers.
//!
//! A picker presents an ordered list of options and returns the selected
//! string, or `None` when the user backs out. Cancellation is not an
//! error; the caller treats it as a no-op for that step.
//!
//! There is no timeout on picker processes: a hung picker hangs the flow.

use crate::config::{PickerKind, Platform};
use log::warn;
use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

pub trait Picker {
    /// Show `options` under `prompt`; `None` means the user canceled.
    fn pick(&self, prompt: &str, options: &[String]) -> Option<String>;
}

/// `rofi -dmenu` picker: options on stdin, selection on stdout, non-zero
/// exit on escape.
pub struct RofiPicker;

impl Picker for RofiPicker {
    fn pick(&self, prompt: &str, options: &[String]) -> Option<String> {
        let mut child = match Command::new("rofi")
            .arg("-dmenu")
            .arg("-i")
            .arg("-p")
            .arg(prompt)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                warn!("failed to launch rofi: {}", e);
                return None;
            }
        };

        if let Some(stdin) = child.stdin.take() {
            let mut stdin = stdin;
            let _ = write!(stdin, "{}", options.join("\n"));
        }
        let output = match child.wait_with_output() {
            Ok(output) => output,
            Err(e) => {
                warn!("rofi did not exit cleanly: {}", e);
                return None;
            }
        };
        if !output.status.success() {
            return None;
        }
        let selection = String::from_utf8_lossy(&output.stdout).trim().to_owned();
        if selection.is_empty() {
            None
        } else {
            Some(selection)
        }
    }
}

/// Numbered prompt on the controlling terminal.
pub struct ConsolePicker;

impl Picker for ConsolePicker {
    fn pick(&self, prompt: &str, options: &[String]) -> Option<String> {
        println!("{}:", prompt);
        for (index, option) in options.iter().enumerate() {
            println!("  {}) {}", index + 1, option);
        }
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line).is_err() {
            return None;
        }
        parse_selection(&line, options.len()).map(|index| options[index].clone())
    }
}

/// Map console input to a zero-based option index. Empty or unparsable
/// input is a cancel.
fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    if choice >= 1 && choice <= len {
        Some(choice - 1)
    } else {
        None
    }
}

/// PowerShell `Out-GridView -PassThru` picker.
pub struct GridViewPicker;

impl Picker for GridViewPicker {
    fn pick(&self, prompt: &str, options: &[String]) -> Option<String> {
        let list = options
            .iter()
            .map(|option| format!("'{}'", option.replace('\'', "''")))
            .collect::<Vec<_>>()
            .join(",");
        let script = format!(
            "@({}) | Out-GridView -Title '{}' -PassThru",
            list,
            prompt.replace('\'', "''")
        );
        let output = match Command::new("powershell")
            .args(["-NoProfile", "-Command", script.as_str()])
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                warn!("failed to launch Out-GridView: {}", e);
                return None;
            }
        };
        let selection = String::from_utf8_lossy(&output.stdout).trim().to_owned();
        if selection.is_empty() {
            None
        } else {
            Some(selection)
        }
    }
}

/// Resolve the configured picker kind to a concrete picker.
///
/// `Auto` prefers `rofi` when it can be spawned (Linux) or `Out-GridView`
/// (Windows), with the console prompt as the universal fallback.
pub fn for_kind(kind: PickerKind, platform: Platform) -> Box<dyn Picker> {
    match kind {
        PickerKind::Rofi => Box::new(RofiPicker),
        PickerKind::Console => Box::new(ConsolePicker),
        PickerKind::GridView => Box::new(GridViewPicker),
        PickerKind::Auto => match platform {
            Platform::Linux => {
                if rofi_available() {
                    Box::new(RofiPicker)
                } else {
                    Box::new(ConsolePicker)
                }
            }
            Platform::Windows => Box::new(GridViewPicker),
        },
    }
}

fn rofi_available() -> bool {
    Command::new("rofi")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_one_based() {
        assert_eq!(parse_selection("1", 3), Some(0));
        assert_eq!(parse_selection(" 3 \n", 3), Some(2));
    }

    #[test]
    fn out_of_range_or_garbage_is_a_cancel() {
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("", 3), None);
        assert_eq!(parse_selection("two", 3), None);
    }
}
