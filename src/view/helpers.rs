//! Small text helpers shared by widgets.

use super::constants::{SPINNER_FRAMES, SPINNER_TICKS_PER_FRAME};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` terminal columns, appending `…`
/// when anything was cut. Wide characters are never split.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Spinner glyph for an animation frame counter.
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[(frame / SPINNER_TICKS_PER_FRAME) % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Heat", 10), "Heat");
        assert_eq!(truncate_to_width("Heat", 4), "Heat");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("The Dark Knight", 8), "The Dar…");
    }

    #[test]
    fn wide_characters_are_not_split() {
        // Each CJK character is two columns wide.
        let out = truncate_to_width("千と千尋の神隠し", 6);
        assert_eq!(out, "千と…");
        assert!(out.width() <= 6);
    }

    #[test]
    fn zero_width_budget_is_empty() {
        assert_eq!(truncate_to_width("Heat", 0), "");
    }

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner_glyph(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_glyph(SPINNER_TICKS_PER_FRAME), SPINNER_FRAMES[1]);
        assert_eq!(
            spinner_glyph(SPINNER_TICKS_PER_FRAME * SPINNER_FRAMES.len()),
            SPINNER_FRAMES[0]
        );
    }
}
