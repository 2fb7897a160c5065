//! Box-drawing renderers.
//!
//! Every function here takes an *inner* width (excluding the two border
//! columns) and produces lines that are exactly `width + 2` cells wide. The
//! glyphs come from a [`CharSet`], so any predefined or custom set can be used.
//!
//! # Example
//!
//! ```
//! use termgrid_protocol::CharSet;
//! use termgrid_render::borders::draw_box;
//!
//! let lines = draw_box(&["hello", "world"], 7, &CharSet::LIGHT);
//! assert_eq!(lines, ["┌───────┐", "│hello  │", "│world  │", "└───────┘"]);
//! ```

use termgrid_protocol::{Align, BorderPosition, CharSet};

use crate::text::{ELLIPSIS, hrule, pad_line, take_chars, truncate_with, visual_width};

/// Draws a horizontal border line.
///
/// [`BorderPosition::Top`] and [`BorderPosition::Bottom`] use corner glyphs;
/// [`BorderPosition::Middle`] uses tees so it can split a box.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::{BorderPosition, CharSet};
/// use termgrid_render::borders::hborder;
///
/// assert_eq!(hborder(5, BorderPosition::Top, &CharSet::LIGHT), "┌─────┐");
/// assert_eq!(hborder(3, BorderPosition::Top, &CharSet::ASCII), "+---+");
/// ```
#[must_use]
pub fn hborder(width: usize, position: BorderPosition, chars: &CharSet) -> String {
    let (left, right) = match position {
        BorderPosition::Top => (chars.tl, chars.tr),
        BorderPosition::Middle => (chars.lt, chars.rt),
        BorderPosition::Bottom => (chars.bl, chars.br),
    };

    let mut line = String::with_capacity((width + 2) * 3);
    line.push(left);
    line.push_str(&hrule(width, chars.h));
    line.push(right);
    line
}

/// Draws one content line between vertical borders.
///
/// The content is padded or clipped to exactly `width` cells.
#[must_use]
pub fn vborder(content: &str, width: usize, chars: &CharSet) -> String {
    let mut line = String::with_capacity(content.len() + 8);
    line.push(chars.v);
    line.push_str(&pad_line(content, width, Align::Left));
    line.push(chars.v);
    line
}

/// Draws a complete box around `lines`.
#[must_use]
pub fn draw_box<S: AsRef<str>>(lines: &[S], width: usize, chars: &CharSet) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(hborder(width, BorderPosition::Top, chars));
    out.extend(lines.iter().map(|l| vborder(l.as_ref(), width, chars)));
    out.push(hborder(width, BorderPosition::Bottom, chars));
    out
}

/// Draws a box whose top border carries a centered title.
///
/// The title is surrounded by one space on each side and flanked by
/// horizontal rules; when the fill does not split evenly the extra cell goes
/// to the right. Titles too long for the border are truncated.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::CharSet;
/// use termgrid_render::borders::titled_box;
///
/// let lines = titled_box("Test", &["content"], 12, &CharSet::LIGHT);
/// assert_eq!(lines[0], "┌─── Test ───┐");
/// assert_eq!(lines[1], "│content     │");
/// ```
#[must_use]
pub fn titled_box<S: AsRef<str>>(
    title: &str,
    lines: &[S],
    width: usize,
    chars: &CharSet,
) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(title_border(title, width, chars));
    out.extend(lines.iter().map(|l| vborder(l.as_ref(), width, chars)));
    out.push(hborder(width, BorderPosition::Bottom, chars));
    out
}

fn title_border(title: &str, width: usize, chars: &CharSet) -> String {
    let label = format!(
        " {} ",
        truncate_with(title, width.saturating_sub(2), ELLIPSIS)
    );
    let label = take_chars(&label, width);
    let fill = width - visual_width(label);
    let left = fill / 2;

    let mut line = String::with_capacity((width + 2) * 3);
    line.push(chars.tl);
    line.push_str(&hrule(left, chars.h));
    line.push_str(label);
    line.push_str(&hrule(fill - left, chars.h));
    line.push(chars.tr);
    line
}

/// Draws a divider for splitting a box, e.g. `├─────┤`.
#[must_use]
pub fn divider(width: usize, chars: &CharSet) -> String {
    hborder(width, BorderPosition::Middle, chars)
}

/// Places two rendered boxes side by side with `gap` spaces between them.
///
/// The shorter box is padded with blank lines. A missing left line is filled
/// with spaces as wide as the left box's first line.
///
/// # Examples
///
/// ```
/// use termgrid_render::borders::join_horizontal;
///
/// let left = ["┌──┐", "│ab│", "└──┘"];
/// let right = ["┌──┐", "└──┘"];
/// let joined = join_horizontal(&left, &right, 1);
/// assert_eq!(joined, ["┌──┐ ┌──┐", "│ab│ └──┘", "└──┘ "]);
/// ```
#[must_use]
pub fn join_horizontal<L, R>(left: &[L], right: &[R], gap: usize) -> Vec<String>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let height = left.len().max(right.len());
    let left_width = left.first().map_or(0, |l| visual_width(l.as_ref()));
    let blank = " ".repeat(left_width);
    let spacer = " ".repeat(gap);

    (0..height)
        .map(|i| {
            let l = left.get(i).map_or(blank.as_str(), AsRef::as_ref);
            let r = right.get(i).map_or("", AsRef::as_ref);
            format!("{l}{spacer}{r}")
        })
        .collect()
}

/// Stacks rendered boxes on top of each other.
#[must_use]
pub fn join_vertical<S: AsRef<str>>(boxes: &[Vec<S>]) -> Vec<String> {
    boxes
        .iter()
        .flatten()
        .map(|l| l.as_ref().to_string())
        .collect()
}
