//! Whole-page composition.
//!
//! A page is the navigation row, an optional frame around the content area,
//! three widget blocks and a footer row. Widget payloads arrive as plain
//! [`ContentBlock`]s: whatever fetched and shaped them is not this crate's
//! concern. The result is a [`Canvas`] the caller can emit as plain text or
//! wrap in markup.
//!
//! ```text
//! termgrid                      about  now
//! ┌──────────────────────────────────────┐
//! │┌────────────── Music ───────────────┐│
//! ││Nothing playing                     ││
//! ...
//! └──────────────────────────────────────┘
//!                 (c) 2026
//! ```

use termgrid_protocol::{CharSet, Dimensions, LayoutConfig, Region};
use tracing::{debug, instrument};

use crate::borders::{draw_box, titled_box};
use crate::canvas::Canvas;
use crate::layout::widget_regions;
use crate::text::{center_text, left_align, visual_width, wrap_text};

/// Smallest widget region that still gets a titled box.
const MIN_BOXED_WIDTH: usize = 4;
const MIN_BOXED_HEIGHT: usize = 3;

/// Separator between navigation links.
const NAV_SEPARATOR: &str = "  ";

/// A titled block of already-shaped text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBlock {
    /// Shown in the block's top border.
    pub title: String,
    /// Body text; newlines start paragraphs.
    pub body: String,
    /// Keep the body's lines as they are instead of word-wrapping them.
    ///
    /// Lines wider than the block are clipped.
    pub preformatted: bool,
}

impl ContentBlock {
    /// Creates a block from a title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            preformatted: false,
        }
    }

    /// Creates a block whose body lines are kept verbatim.
    #[must_use]
    pub fn preformatted(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            preformatted: true,
            ..Self::new(title, body)
        }
    }

    fn body_lines(&self, width: usize) -> Vec<String> {
        if self.preformatted {
            self.body.split('\n').map(str::to_string).collect()
        } else {
            wrap_text(&self.body, width)
        }
    }
}

/// Everything needed to render one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Shown at the left of the navigation row.
    pub site_name: String,
    /// Shown at the right of the navigation row when they fit.
    pub nav_links: Vec<String>,
    /// Centered in the footer row.
    pub footer: String,
    /// Widget blocks in slot order: primary, secondary, tertiary.
    pub widgets: [ContentBlock; 3],
}

/// Renders a page into a canvas the size of the layout's viewport.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::{CharSet, Dimensions};
/// use termgrid_render::layout::layout_config;
/// use termgrid_render::page::{Page, render_page};
///
/// let layout = layout_config(Dimensions::new(80, 24));
/// let canvas = render_page(&layout, &Page::default(), &CharSet::LIGHT);
/// let lines = canvas.lines();
/// assert_eq!(lines.len(), 24);
/// assert!(lines.iter().all(|l| l.chars().count() == 80));
/// ```
#[must_use]
#[instrument(skip_all, fields(breakpoint = %layout.breakpoint, cols = layout.cols, rows = layout.rows))]
pub fn render_page(layout: &LayoutConfig, page: &Page, chars: &CharSet) -> Canvas {
    let dims = Dimensions::new(layout.cols, layout.rows);
    let cols = usize::from(layout.cols);
    let rows = usize::from(layout.rows);
    let mut canvas = Canvas::new(dims);

    let top = usize::from(layout.has_nav);
    let bottom = usize::from(layout.has_footer);

    if layout.has_nav {
        canvas.paint(Region::new(0, 0, cols, 1), &[nav_line(page, cols)]);
    }

    if layout.has_footer && rows > 0 {
        canvas.paint(
            Region::new(0, rows - 1, cols, 1),
            &[center_text(&page.footer, cols)],
        );
    }

    let frame_height = rows.saturating_sub(top + bottom);
    if layout.has_borders && frame_height >= 2 && cols >= 2 {
        let body = vec![""; frame_height - 2];
        let frame = draw_box(&body, cols - 2, chars);
        canvas.paint(Region::new(0, top, cols, frame_height), &frame);
    }

    let regions = widget_regions(layout);
    for (block, region) in page.widgets.iter().zip(regions.as_array()) {
        if region.is_empty() {
            debug!(title = %block.title, "skipping widget with empty region");
            continue;
        }
        canvas.paint(region, &render_block(block, region, chars));
    }

    debug!("page rendered");
    canvas
}

/// Renders one content block to fill `region`.
///
/// Regions big enough for a border get a titled box whose body is cut to
/// fit; smaller regions get the body alone.
#[must_use]
pub fn render_block(block: &ContentBlock, region: Region, chars: &CharSet) -> Vec<String> {
    if region.width < MIN_BOXED_WIDTH || region.height < MIN_BOXED_HEIGHT {
        return block
            .body_lines(region.width)
            .iter()
            .take(region.height)
            .map(|line| left_align(line, region.width))
            .collect();
    }

    let inner_width = region.width - 2;
    let inner_height = region.height - 2;
    let mut body = block.body_lines(inner_width);
    body.resize(inner_height, String::new());
    titled_box(&block.title, &body, inner_width, chars)
}

fn nav_line(page: &Page, cols: usize) -> String {
    let links = page.nav_links.join(NAV_SEPARATOR);
    let name_width = visual_width(&page.site_name);
    let links_width = visual_width(&links);

    if links.is_empty() || name_width + 1 + links_width > cols {
        return left_align(&page.site_name, cols);
    }

    let gap = cols - name_width - links_width;
    format!("{}{}{links}", page.site_name, " ".repeat(gap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout_config;
    use crate::board::render_board;
    use crate::test_utils::canvas_to_string;
    use termgrid_protocol::{BorderStyle, Perspective};

    fn sample_page() -> Page {
        Page {
            site_name: "termgrid".to_string(),
            nav_links: vec!["about".to_string(), "now".to_string()],
            footer: "(c) 2026".to_string(),
            widgets: [
                ContentBlock::new("Music", "Nothing playing"),
                ContentBlock::new("Runs", "12 km this week"),
                ContentBlock::new("Code", "3 commits today"),
            ],
        }
    }

    fn render(cols: u16, rows: u16, chars: &CharSet) -> Canvas {
        let layout = layout_config(Dimensions::new(cols, rows));
        render_page(&layout, &sample_page(), chars)
    }

    #[test]
    fn compact_page() {
        let canvas = render(40, 16, &CharSet::LIGHT);
        insta::assert_snapshot!(canvas_to_string(&canvas), @r"
termgrid                      about  now
┌──────────────────────────────────────┐
│┌────────────── Music ───────────────┐│
││Nothing playing                     ││
││                                    ││
│└────────────────────────────────────┘│
│┌─────────────── Runs ───────────────┐│
││12 km this week                     ││
││                                    ││
│└────────────────────────────────────┘│
│┌─────────────── Code ───────────────┐│
││3 commits today                     ││
││                                    ││
│└────────────────────────────────────┘│
└──────────────────────────────────────┘
                (c) 2026
");
    }

    #[test]
    fn wide_page_uses_two_columns() {
        let canvas = render(120, 20, &CharSet::LIGHT);
        let lines = canvas.lines();
        // content region is x=1..119, y=2..18; columns split 58 + 2 + 58
        let row: Vec<char> = lines[2].chars().collect();
        assert_eq!(row[0], '│');
        assert_eq!(row[1], '┌');
        assert_eq!(row[58], '┐');
        assert_eq!(row[61], '┌');
        assert_eq!(row[118], '┐');
        assert_eq!(row[119], '│');

        // Right column stacks two boxes of 8 rows each.
        let bottom_of_secondary: Vec<char> = lines[9].chars().collect();
        assert_eq!(bottom_of_secondary[61], '└');
        let top_of_tertiary: Vec<char> = lines[10].chars().collect();
        assert_eq!(top_of_tertiary[61], '┌');
    }

    #[test]
    fn ultra_narrow_page_has_no_frame() {
        let canvas = render(30, 12, &CharSet::LIGHT);
        let lines = canvas.lines();
        assert!(lines[0].starts_with("termgrid"));
        assert!(lines[1].starts_with('┌'));
        assert!(lines[1].contains("Music"));
        assert!(lines.iter().all(|l| visual_width(l) == 30));
    }

    #[test]
    fn tiny_regions_fall_back_to_plain_text() {
        let block = ContentBlock::new("Music", "Nothing playing right now");
        let lines = render_block(&block, Region::new(0, 0, 10, 2), &CharSet::LIGHT);
        assert_eq!(lines, ["Nothing   ", "playing   "]);
    }

    #[test]
    fn long_bodies_are_cut_to_region() {
        let block = ContentBlock::new("Log", "one two three four five six seven");
        let lines = render_block(&block, Region::new(0, 0, 9, 4), &CharSet::ASCII);
        assert_eq!(lines, ["+- Log -+", "|one two|", "|three  |", "+-------+"]);
    }

    #[test]
    fn preformatted_bodies_keep_spacing() {
        let board = render_board("8/8/8/8/8/8/8/K7", Perspective::White);
        let block = ContentBlock::preformatted("Board", board.join("\n"));
        let lines = render_block(&block, Region::new(0, 0, 22, 11), &CharSet::LIGHT);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[8], "│1  ♔ · ░ · ░ · ░ ·  │");
        assert_eq!(lines[9], "│   a b c d e f g h  │");
    }

    #[test]
    fn nav_drops_links_when_too_narrow() {
        let page = sample_page();
        assert_eq!(nav_line(&page, 12), "termgrid    ");
        assert_eq!(nav_line(&page, 18), "termgrid          ");
        assert_eq!(nav_line(&page, 19), "termgrid about  now");
    }

    #[test]
    fn wide_and_combining_chars_keep_one_cell_each() {
        let mut page = sample_page();
        page.widgets = [
            ContentBlock::new("Music", "Now: 東京事変 live"),
            ContentBlock::new("Cafe", "cafe\u{301} ok"),
            ContentBlock::new("Code", "3 commits today"),
        ];
        let layout = layout_config(Dimensions::new(40, 12));
        let lines = render_page(&layout, &page, &CharSet::LIGHT).lines();

        assert_eq!(lines.len(), 12);
        assert!(lines.iter().all(|l| l.chars().count() == 40), "{lines:#?}");
        assert!(lines.iter().any(|l| l.contains("Now: 東京事変 live")));
        assert!(lines.iter().any(|l| l.contains("cafe\u{301} ok")));
    }

    #[test]
    fn every_style_renders_width_exact() {
        for style in BorderStyle::all() {
            let canvas = render(80, 24, style.charset());
            let lines = canvas.lines();
            assert_eq!(lines.len(), 24);
            assert!(lines.iter().all(|l| visual_width(l) == 80));
            assert!(lines[1].starts_with(style.charset().tl));
        }
    }
}
