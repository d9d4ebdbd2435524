//! Formatting utilities for terminal output

use crate::core::{Code, Feedback, Palette};
use colored::Colorize;

/// Parse `#rrggbb` (leading `#` optional) into RGB components
#[must_use]
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Render a code as colored pegs followed by its keys
///
/// Colors without a parseable hex fall back to plain text.
#[must_use]
pub fn colorize_code(palette: &Palette, code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&id| match palette.get(id) {
            Some(color) => match parse_hex(color.hex()) {
                Some((r, g, b)) => format!("{}{}", "●".truecolor(r, g, b), color.key()),
                None => format!("●{}", color.key()),
            },
            None => "?".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render feedback pegs colored by kind
#[must_use]
pub fn colorize_feedback(feedback: Feedback, length: usize) -> String {
    feedback
        .to_pegs(length)
        .chars()
        .map(|peg| match peg {
            '●' => peg.to_string().bright_white().bold().to_string(),
            '○' => peg.to_string().white().to_string(),
            _ => peg.to_string().bright_black().to_string(),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palettes;

    #[test]
    fn parse_hex_valid() {
        assert_eq!(parse_hex("#e53935"), Some((0xe5, 0x39, 0x35)));
        assert_eq!(parse_hex("FFFFFF"), Some((255, 255, 255)));
    }

    #[test]
    fn parse_hex_invalid() {
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gg0000"), None);
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#ééé"), None);
    }

    #[test]
    fn colorize_code_plain() {
        colored::control::set_override(false);
        let palette = palettes::classic();
        let code = palette.parse_code("r b").unwrap();
        assert_eq!(colorize_code(&palette, &code), "●r ●b");
    }

    #[test]
    fn colorize_feedback_plain() {
        colored::control::set_override(false);
        assert_eq!(colorize_feedback(Feedback::new(1, 1), 3), "●○·");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0, 10, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(10, 10, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(5, 10, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
