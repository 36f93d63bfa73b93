//! Width-aware text helpers shared by the card and header components.
//!
//! All widths are terminal display columns (unicode-width), never bytes:
//! most catalog text is Cyrillic, where byte slicing would split characters.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ELLIPSIS: &str = "…";

pub fn display_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Cut `s` to at most `max_width` columns, ending in "…" when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Word-wrap `text` to `width` and keep at most `max_lines` lines.
/// The last kept line gets an ellipsis when anything was dropped.
pub fn clamp_lines(text: &str, width: u16, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let width = usize::from(width);
    let mut lines: Vec<String> = textwrap::wrap(text, textwrap::Options::new(width).break_words(true))
        .into_iter()
        .map(|l| l.into_owned())
        .collect();

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let shortened = truncate_to_width(last, width.saturating_sub(1));
            *last = if shortened.ends_with(ELLIPSIS) {
                shortened
            } else {
                format!("{shortened}{ELLIPSIS}")
            };
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_cyrillic_by_columns() {
        assert_eq!(truncate_to_width("Плейлисты", 9), "Плейлисты");
        assert_eq!(truncate_to_width("Плейлисты", 6), "Плейл…");
        assert_eq!(truncate_to_width("Плейлисты", 0), "");
    }

    #[test]
    fn test_clamp_short_text_untouched() {
        assert_eq!(clamp_lines("Ночной город", 40, 2), vec!["Ночной город"]);
    }

    #[test]
    fn test_clamp_adds_ellipsis() {
        let lines = clamp_lines("Путешествие по галактикам и звездным системам", 12, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with(ELLIPSIS));
        assert!(lines.iter().all(|l| l.width() <= 12));
    }

    #[test]
    fn test_clamp_zero_width() {
        assert!(clamp_lines("anything", 0, 2).is_empty());
    }
}
