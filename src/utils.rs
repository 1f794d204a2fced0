use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns taken by `s`. Kana and kanji count as two.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cuts `s` to at most `max_width` columns, ending in "..." when anything was dropped.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Byte offset of the `char_index`-th character, or the end of the string.
pub fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Column where a cursor placed before the `char_index`-th character is drawn.
pub fn cursor_column(s: &str, char_index: usize) -> usize {
    display_width(&s[..byte_index(s, char_index)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert!(display_width(&result) <= 20);
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_truncate_counts_wide_glyphs() {
        // Each kanji is two columns wide.
        let result = truncate_string("日本語を勉強します", 9);
        assert_eq!(result, "日本語...");
        assert!(display_width(&result) <= 9);
    }

    #[test]
    fn test_byte_index_multibyte() {
        let s = "aあb";
        assert_eq!(byte_index(s, 0), 0);
        assert_eq!(byte_index(s, 1), 1);
        assert_eq!(byte_index(s, 2), 4);
        assert_eq!(byte_index(s, 3), 5);
        assert_eq!(byte_index(s, 10), 5);
    }

    #[test]
    fn test_cursor_column() {
        assert_eq!(cursor_column("aあb", 2), 3);
        assert_eq!(cursor_column("taberu", 3), 3);
        assert_eq!(cursor_column("", 0), 0);
    }
}
