//! Line re-wrapping.

use crate::prefix::PrefixGlyphs;

/// Lines with fewer cells than this left for text after their prefix are
/// never re-wrapped.
pub const MIN_AVAILABLE_WIDTH: usize = 5;

/// Re-wraps one rendered line to at most `max_width` cells per line.
///
/// Lines that already fit are returned unchanged, as are lines whose text
/// (after the border prefix and one spare cell) would get fewer than
/// [`MIN_AVAILABLE_WIDTH`] cells. Otherwise the text is packed greedily at
/// word boundaries; the first output line keeps the original prefix and
/// continuation lines get [`PrefixGlyphs::continuation`]. Output lines are
/// joined with `\n`.
///
/// # Examples
///
/// ```
/// use termgrid_reflow::{PrefixGlyphs, wrap_line};
///
/// let glyphs = PrefixGlyphs::default();
/// let wrapped = wrap_line("│ one two three four", 14, &glyphs);
/// assert_eq!(wrapped, "│ one two\n│ three four");
/// ```
#[must_use]
pub fn wrap_line(line: &str, max_width: usize, glyphs: &PrefixGlyphs) -> String {
    if line.chars().count() <= max_width {
        return line.to_string();
    }

    let (prefix, text) = glyphs.split_prefix(line);
    let Some(available) = max_width.checked_sub(prefix.chars().count() + 1) else {
        return line.to_string();
    };
    if available < MIN_AVAILABLE_WIDTH || text.chars().count() <= available {
        return line.to_string();
    }

    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return line.to_string();
    };

    let mut chunks = Vec::new();
    let mut current = first.to_string();
    let mut current_width = first.chars().count();
    for word in words {
        let word_width = word.chars().count();
        if current_width + 1 + word_width <= available {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            chunks.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }
    chunks.push(current);

    let continuation = glyphs.continuation(prefix);
    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let lead = if i == 0 { prefix } else { continuation.as_str() };
            format!("{lead}{chunk}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Re-wraps every line of a multi-line text run.
#[must_use]
pub fn wrap_text_run(text: &str, max_width: usize, glyphs: &PrefixGlyphs) -> String {
    text.split('\n')
        .map(|line| wrap_line(line, max_width, glyphs))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(line: &str, max: usize) -> String {
        wrap_line(line, max, &PrefixGlyphs::default())
    }

    #[test]
    fn fitting_lines_are_untouched() {
        assert_eq!(wrap("short", 20), "short");
        assert_eq!(wrap("exactly ten", 11), "exactly ten");
    }

    #[test]
    fn plain_text_wraps_at_words() {
        assert_eq!(
            wrap("hello world this is a long line of text", 20),
            "hello world this is\na long line of text"
        );
    }

    #[test]
    fn nested_prefix_is_continued() {
        let line = "││ Nothing is playing right now on the stereo";
        assert_eq!(
            wrap(line, 24),
            "││ Nothing is playing\n││ right now on the\n││ stereo"
        );
    }

    #[test]
    fn corners_are_blanked_on_continuation() {
        let line = "│├─ first second third fourth";
        assert_eq!(wrap(line, 20), "│├─ first second\n│   third fourth");
    }

    #[test]
    fn narrow_available_width_is_left_alone() {
        // 12 - 7 - 1 = 4 cells available
        let line = "│││││ │word word word";
        assert_eq!(wrap(line, 12), line);
    }

    #[test]
    fn prefix_wider_than_max_is_left_alone() {
        let line = "││││││││││ text";
        assert_eq!(wrap(line, 8), line);
    }

    #[test]
    fn border_only_lines_are_left_alone() {
        let line = "┌────────────────────────────┐";
        assert_eq!(wrap(line, 10), line);
    }

    #[test]
    fn overlong_words_stay_whole() {
        assert_eq!(
            wrap("a supercalifragilistic word", 12),
            "a\nsupercalifragilistic\nword"
        );
    }

    #[test]
    fn text_runs_wrap_line_by_line() {
        let glyphs = PrefixGlyphs::default();
        let run = "│ alpha beta gamma delta\n│ ok";
        assert_eq!(
            wrap_text_run(run, 14, &glyphs),
            "│ alpha beta\n│ gamma delta\n│ ok"
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every wrapped line fits unless it was returned unchanged.
        #[test]
        fn wrapped_lines_fit(
            prefix in "[│ ]{0,6}",
            words in prop::collection::vec("[a-z]{1,8}", 1..20),
            max in 20usize..60,
        ) {
            let glyphs = PrefixGlyphs::default();
            let line = format!("{prefix}{}", words.join(" "));
            let wrapped = wrap_line(&line, max, &glyphs);
            if wrapped != line {
                for out in wrapped.split('\n') {
                    prop_assert!(out.chars().count() < max);
                }
            }
        }

        /// Wrapping keeps every word, in order.
        #[test]
        fn words_are_preserved(
            words in prop::collection::vec("[a-z]{1,8}", 1..20),
            max in 20usize..60,
        ) {
            let glyphs = PrefixGlyphs::default();
            let line = format!("│ {}", words.join(" "));
            let wrapped = wrap_line(&line, max, &glyphs);
            let kept: Vec<&str> = wrapped
                .split('\n')
                .flat_map(|l| glyphs.split_prefix(l).1.split_whitespace())
                .collect();
            prop_assert_eq!(kept, words.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
