//! Plain-text formatting for fixed-width cells.
//!
//! Widths are counted in characters: every character is assumed to occupy
//! exactly one cell. All functions are total; a zero width yields empty
//! output rather than an error.
//!
//! # Example
//!
//! ```
//! use termgrid_protocol::Align;
//! use termgrid_render::text::{pad_line, truncate, wrap_text};
//!
//! assert_eq!(wrap_text("hello world foo bar", 10), ["hello", "world foo", "bar"]);
//! assert_eq!(truncate("hello world", 8), "hello w…");
//! assert_eq!(pad_line("hello", 10, Align::Center), "  hello   ");
//! ```

use termgrid_protocol::Align;

/// Suffix appended by [`truncate`] when text is cut short.
pub const ELLIPSIS: &str = "…";

/// Returns the number of cells `text` occupies.
#[must_use]
pub fn visual_width(text: &str) -> usize {
    text.chars().count()
}

/// Returns the first `n` characters of `text`.
pub(crate) fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Wraps text into lines no wider than `width`.
///
/// Explicit newlines start a new paragraph; blank lines are kept as empty
/// lines. A paragraph of only whitespace counts as blank and also yields one
/// empty line, so the paragraph count is always preserved. Words are packed
/// greedily, and a word longer than `width` is broken into `width`-sized
/// chunks. The result always has at least one line.
///
/// # Examples
///
/// ```
/// use termgrid_render::text::wrap_text;
///
/// assert_eq!(wrap_text("hello\n\nworld", 20), ["hello", "", "world"]);
/// assert_eq!(wrap_text("supercalifragilistic", 5), ["super", "calif", "ragil", "istic"]);
/// assert_eq!(wrap_text("", 10), [""]);
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() || width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        wrap_paragraph(paragraph, width, &mut lines);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
        let word_width = visual_width(word);

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let mut chars = word.chars().peekable();
            while chars.peek().is_some() {
                lines.push(chars.by_ref().take(width).collect());
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
}

/// Cuts text to `width` cells, marking the cut with [`ELLIPSIS`].
///
/// See [`truncate_with`] for the exact rules.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    truncate_with(text, width, ELLIPSIS)
}

/// Cuts text to `width` cells, marking the cut with `suffix`.
///
/// Text that already fits is returned unchanged. When the width cannot even
/// hold the suffix, the suffix itself is clipped to the width.
///
/// # Examples
///
/// ```
/// use termgrid_render::text::truncate_with;
///
/// assert_eq!(truncate_with("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate_with("hello world", 2, "..."), "..");
/// assert_eq!(truncate_with("short", 8, "..."), "short");
/// ```
#[must_use]
pub fn truncate_with(text: &str, width: usize, suffix: &str) -> String {
    if visual_width(text) <= width {
        return text.to_string();
    }

    let suffix_width = visual_width(suffix);
    if width <= suffix_width {
        return take_chars(suffix, width).to_string();
    }

    let mut out = take_chars(text, width - suffix_width).to_string();
    out.push_str(suffix);
    out
}

/// Pads a line with spaces to exactly `width` cells.
///
/// See [`pad_line_with`].
#[must_use]
pub fn pad_line(line: &str, width: usize, align: Align) -> String {
    pad_line_with(line, width, align, ' ')
}

/// Pads a line with `fill` to exactly `width` cells.
///
/// Lines longer than `width` are clipped, not padded. Centering puts the
/// smaller half of the padding on the left.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::Align;
/// use termgrid_render::text::pad_line_with;
///
/// assert_eq!(pad_line_with("ab", 5, Align::Right, '.'), "...ab");
/// assert_eq!(pad_line_with("ab", 5, Align::Center, '.'), ".ab..");
/// assert_eq!(pad_line_with("abcdef", 3, Align::Left, '.'), "abc");
/// ```
#[must_use]
pub fn pad_line_with(line: &str, width: usize, align: Align, fill: char) -> String {
    let line_width = visual_width(line);
    if line_width >= width {
        return take_chars(line, width).to_string();
    }

    let padding = width - line_width;
    let (left, right) = match align {
        Align::Left => (0, padding),
        Align::Right => (padding, 0),
        Align::Center => (padding / 2, padding - padding / 2),
    };

    let mut out = String::with_capacity(line.len() + padding * fill.len_utf8());
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(line);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// Returns a horizontal rule `width` cells long.
#[must_use]
pub fn hrule(width: usize, glyph: char) -> String {
    std::iter::repeat_n(glyph, width).collect()
}

/// Truncates then aligns text, producing exactly `width` cells.
#[must_use]
pub fn align_text(text: &str, width: usize, align: Align) -> String {
    pad_line(&truncate(text, width), width, align)
}

/// Centers text in exactly `width` cells, truncating if needed.
#[must_use]
pub fn center_text(text: &str, width: usize) -> String {
    align_text(text, width, Align::Center)
}

/// Right-aligns text in exactly `width` cells, truncating if needed.
#[must_use]
pub fn right_align(text: &str, width: usize) -> String {
    align_text(text, width, Align::Right)
}

/// Left-aligns text in exactly `width` cells, truncating if needed.
#[must_use]
pub fn left_align(text: &str, width: usize) -> String {
    align_text(text, width, Align::Left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_packs_words_greedily() {
        assert_eq!(
            wrap_text("hello world foo bar", 10),
            ["hello", "world foo", "bar"]
        );
    }

    #[test]
    fn wrap_breaks_long_words() {
        let lines = wrap_text("supercalifragilistic", 5);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| visual_width(l) == 5));
    }

    #[test]
    fn wrap_flushes_before_long_word() {
        assert_eq!(
            wrap_text("ab abcdefgh cd", 4),
            ["ab", "abcd", "efgh", "cd"]
        );
    }

    #[test]
    fn wrap_preserves_blank_lines() {
        assert_eq!(wrap_text("hello\n\nworld", 10), ["hello", "", "world"]);
        assert_eq!(wrap_text("a\n\n\nb", 10), ["a", "", "", "b"]);
        assert_eq!(wrap_text("a\n   \nb", 10), ["a", "", "b"]);
    }

    #[test]
    fn wrap_degenerate_inputs() {
        assert_eq!(wrap_text("", 10), [""]);
        assert_eq!(wrap_text("hello", 0), [""]);
    }

    #[test]
    fn wrap_collapses_inner_whitespace() {
        assert_eq!(wrap_text("  one   two  ", 20), ["one two"]);
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        assert_eq!(wrap_text("héllo wörld", 5), ["héllo", "wörld"]);
    }

    #[test]
    fn truncate_rules() {
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello", 1), "…");
        assert_eq!(truncate("hello", 0), "");
        assert_eq!(truncate("", 4), "");
    }

    #[test]
    fn pad_alignments() {
        assert_eq!(pad_line("hello", 10, Align::Left), "hello     ");
        assert_eq!(pad_line("hello", 10, Align::Right), "     hello");
        assert_eq!(pad_line("hello", 10, Align::Center), "  hello   ");
        assert_eq!(pad_line("hello", 9, Align::Center), "  hello  ");
    }

    #[test]
    fn pad_clips_long_lines() {
        assert_eq!(pad_line("hello world", 5, Align::Center), "hello");
        assert_eq!(pad_line("anything", 0, Align::Right), "");
    }

    #[test]
    fn composite_helpers_are_width_exact() {
        assert_eq!(center_text("hello world", 8), "hello w…");
        assert_eq!(right_align("hi", 4), "  hi");
        assert_eq!(left_align("hi", 4), "hi  ");
        assert_eq!(center_text("", 3), "   ");
    }

    #[test]
    fn hrule_repeats_glyph() {
        assert_eq!(hrule(3, '─'), "───");
        assert_eq!(hrule(0, '─'), "");
    }
}
