mod help;
mod pager;
mod status_bar;
mod track;

pub use help::HelpWidget;
pub use pager::PagerWidget;
pub use status_bar::StatusBarWidget;
pub use track::TrackWidget;

use unicode_width::UnicodeWidthChar;

/// Truncate to at most `max_width` display columns, adding "..." when cut
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max_width >= 3 {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a longer title", 8), "a lon...");
        assert_eq!(truncate_to_width("日本語のタイトル", 7), "日本...");
        assert_eq!(truncate_to_width("abcdef", 2), "");
    }
}
