//! Building the page and fitting it to the surface it is shown on.

use termgrid_config::Config;
use termgrid_protocol::{Dimensions, LayoutConfig, Perspective};
use termgrid_reflow::{Block, FixedCellWidth, ReflowEngine};
use termgrid_render::art::{StatusIndicator, bar_chart_line, spark_line};
use termgrid_render::{ContentBlock, Page, layout_config, render_board, render_page};
use tracing::debug;

const SITE_NAME: &str = "termgrid";
const PAGE_BLOCK_ID: &str = "page";

const ABOUT: &str = "termgrid lays pages out on a grid of character cells. \
Resize the terminal to move between breakpoints.";

const ACTIVITY: [f64; 16] = [
    2.0, 3.0, 5.0, 4.0, 6.0, 8.0, 7.0, 5.0, 3.0, 4.0, 6.0, 9.0, 8.0, 6.0, 4.0, 3.0,
];

/// Widest a status line is allowed to be before the block clips it.
const STATUS_WIDTH: usize = 40;

/// Builds the demo page for a layout.
///
/// With a piece placement the primary widget shows the board; otherwise it
/// shows a short description.
#[must_use]
pub fn build_page(
    layout: &LayoutConfig,
    config: &Config,
    fen: Option<&str>,
    perspective: Perspective,
) -> Page {
    let primary = match fen {
        Some(placement) => {
            ContentBlock::preformatted("Board", render_board(placement, perspective).join("\n"))
        }
        None => ContentBlock::new("About", ABOUT),
    };

    let grid = &config.grid;
    let fill = f64::from(layout.cols) / f64::from(grid.max_cols) * 100.0;
    let status = [
        StatusIndicator::Ok.label(
            &format!("{} layout", layout.breakpoint),
            STATUS_WIDTH,
        ),
        StatusIndicator::Info.label(
            &format!("cols {}..={}", grid.min_cols, grid.max_cols),
            STATUS_WIDTH,
        ),
        bar_chart_line("width", fill, 6, 12),
    ];

    let activity = [
        spark_line(&ACTIVITY, ACTIVITY.len()),
        format!("{} borders", config.border_style),
    ];

    Page {
        site_name: SITE_NAME.to_string(),
        nav_links: vec!["board".to_string(), "about".to_string()],
        footer: format!("{}×{} · {}", layout.cols, layout.rows, layout.breakpoint),
        widgets: [
            primary,
            ContentBlock::preformatted("Grid", status.join("\n")),
            ContentBlock::preformatted("Activity", activity.join("\n")),
        ],
    }
}

/// Renders the page and re-wraps it for surfaces narrower than the grid.
///
/// The page is rendered at the surface size clamped into the configured
/// bounds. When the surface is narrower than the smallest allowed grid, the
/// rendered lines are re-wrapped to fit, keeping border prefixes intact.
///
/// Re-wrapping needs at least 21 surface columns, since one cell is held
/// back and blocks narrower than 20 cells are left alone. With the default
/// `min_cols` of 20 a narrower surface therefore gets the minimum-width page
/// as rendered; raising `min_cols` above 21 is what makes re-wrapping kick in.
#[derive(Debug)]
pub struct Screen {
    config: Config,
    fen: Option<String>,
    perspective: Perspective,
    engine: ReflowEngine,
    blocks: Vec<Block>,
    rendered: Option<Dimensions>,
}

impl Screen {
    /// Creates a screen that renders with `config`.
    #[must_use]
    pub fn new(config: Config, fen: Option<String>, perspective: Perspective) -> Self {
        Self {
            config,
            fen,
            perspective,
            engine: ReflowEngine::new(),
            blocks: Vec::new(),
            rendered: None,
        }
    }

    /// Returns the side the board is shown from.
    #[must_use]
    pub const fn perspective(&self) -> Perspective {
        self.perspective
    }

    /// Shows the board from the other side on the next render.
    pub fn flip(&mut self) {
        self.perspective = self.perspective.flipped();
        self.rendered = None;
    }

    /// Returns the lines to show on a surface of `surface` cells.
    pub fn lines_for(&mut self, surface: Dimensions) -> Vec<String> {
        let dims = self.config.grid.clamp(surface);
        if self.rendered != Some(dims) {
            let lines = self.render(dims);
            self.blocks = vec![Block::text(Some(PAGE_BLOCK_ID), lines.join("\n"), 0.0)];
            self.engine.clear();
            self.rendered = Some(dims);
        }

        if surface.cols < dims.cols {
            for block in &mut self.blocks {
                block.pixel_width = f64::from(surface.cols);
            }
            let stats = self.engine.reflow(&mut self.blocks, &FixedCellWidth(1.0));
            debug!(surface = surface.cols, grid = dims.cols, ?stats, "reflowed narrow surface");
        } else {
            for (index, block) in self.blocks.iter_mut().enumerate() {
                if let Some(pristine) = self.engine.snapshot(&block.id(index)) {
                    block.nodes = pristine.to_vec();
                }
            }
        }

        self.blocks
            .iter()
            .flat_map(|block| {
                block
                    .text_content()
                    .split('\n')
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn render(&self, dims: Dimensions) -> Vec<String> {
        let layout = layout_config(dims);
        let page = build_page(&layout, &self.config, self.fen.as_deref(), self.perspective);
        render_page(&layout, &page, self.config.border_style.charset()).lines()
    }
}

/// Wraps rendered lines in a `<pre>` element for clients that expect markup.
#[must_use]
pub fn to_markup(lines: &[String]) -> String {
    let mut html = String::from("<pre class=\"terminal\">\n");
    for line in lines {
        for c in line.chars() {
            match c {
                '&' => html.push_str("&amp;"),
                '<' => html.push_str("&lt;"),
                '>' => html.push_str("&gt;"),
                _ => html.push(c),
            }
        }
        html.push('\n');
    }
    html.push_str("</pre>\n");
    html
}
