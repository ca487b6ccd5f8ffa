// Small character-class and whitespace helpers shared by the stages.

use std::borrow::Cow;

// ASCII whitespace as regex engines usually define `\s`: space, \t, \n, \v,
// \f, \r. `u8::is_ascii_whitespace` leaves out vertical tab.
static ASCII_WS_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b' ' as usize] = true;
    table[b'\t' as usize] = true;
    table[b'\n' as usize] = true;
    table[b'\r' as usize] = true;
    table[b'\x0B' as usize] = true; // Vertical tab
    table[b'\x0C' as usize] = true; // Form feed
    table
};

#[inline(always)]
pub fn is_ascii_whitespace_fast(b: u8) -> bool {
    ASCII_WS_TABLE[b as usize]
}

#[inline(always)]
pub fn is_ascii_whitespace_char(c: char) -> bool {
    c.is_ascii() && is_ascii_whitespace_fast(c as u8)
}

/// Empty or whitespace-only.
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// True when `text` starts or ends with ASCII whitespace, i.e. [`trim_cow`]
/// would change it.
#[inline]
pub fn has_edge_whitespace(text: &str) -> bool {
    text.starts_with(is_ascii_whitespace_char) || text.ends_with(is_ascii_whitespace_char)
}

/// Strip ASCII whitespace from both ends. Unicode spaces such as NBSP or
/// U+3000 are content, not padding.
#[inline(always)]
pub fn trim_ascii_ws(text: &str) -> &str {
    text.trim_matches(is_ascii_whitespace_char)
}

/// True when `ch` occurs at least twice in a row.
#[inline]
pub fn has_run_of(text: &str, ch: u8) -> bool {
    text.as_bytes().windows(2).any(|w| w[0] == ch && w[1] == ch)
}

/// Trim surrounding ASCII whitespace, keeping a borrowed input borrowed.
#[inline]
pub fn trim_cow(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(trim_ascii_ws(s)),
        Cow::Owned(s) => {
            let trimmed = trim_ascii_ws(&s);
            if trimmed.len() == s.len() {
                Cow::Owned(s)
            } else {
                Cow::Owned(trimmed.to_owned())
            }
        }
    }
}

/// Collapse every run of the ASCII byte `ch` into a single occurrence.
pub fn squeeze(text: Cow<'_, str>, ch: u8) -> Cow<'_, str> {
    debug_assert!(ch.is_ascii());
    if !has_run_of(&text, ch) {
        return text;
    }
    let mut out = String::with_capacity(text.len());
    let mut prev_was_ch = false;
    for c in text.chars() {
        let is_ch = c == ch as char;
        if !(is_ch && prev_was_ch) {
            out.push(c);
        }
        prev_was_ch = is_ch;
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squeeze_collapses_only_the_given_char() {
        assert_eq!(squeeze(Cow::Borrowed("a  b--c   d"), b' '), "a b--c d");
        assert_eq!(squeeze(Cow::Borrowed("a  b--c"), b'-'), "a  b-c");
        let input = "no runs";
        assert!(matches!(squeeze(Cow::Borrowed(input), b' '), Cow::Borrowed(_)));
    }

    #[test]
    fn trim_cow_keeps_borrow() {
        let out = trim_cow(Cow::Borrowed("  hi "));
        assert!(matches!(out, Cow::Borrowed("hi")));
        assert_eq!(trim_cow(Cow::Owned(" x ".into())), "x");
    }

    #[test]
    fn trim_leaves_unicode_spaces() {
        assert_eq!(trim_cow(Cow::Borrowed("\u{3000} a\u{a0}\x0B")), "\u{3000} a\u{a0}");
        assert!(!has_edge_whitespace("a\u{a0}"));
        assert!(!has_edge_whitespace("\u{2003}a"));
        assert!(has_edge_whitespace("\x0Ba"));
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n\u{3000}"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn whitespace_table_includes_vertical_tab() {
        assert!(is_ascii_whitespace_char('\x0B'));
        assert!(!is_ascii_whitespace_char('\u{00A0}'));
        assert!(!is_ascii_whitespace_char('a'));
    }
}
